pub mod prelude {
    use std::sync::{Arc, Mutex};

    pub use news_core::{
        entities::*,
        gateways::notify::{NotificationEvent, NotificationGateway},
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use news_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Records the ids of all created comments.
    #[derive(Default, Clone)]
    pub struct RecordingNotifyGW {
        created_comments: Arc<Mutex<Vec<Id>>>,
    }

    impl RecordingNotifyGW {
        pub fn created_comments(&self) -> Vec<Id> {
            self.created_comments.lock().unwrap().clone()
        }
    }

    impl NotificationGateway for RecordingNotifyGW {
        fn notify(&self, event: NotificationEvent) {
            match event {
                NotificationEvent::CommentCreated { comment, .. } => {
                    self.created_comments
                        .lock()
                        .unwrap()
                        .push(comment.id.clone());
                }
            }
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: RecordingNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            news_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self {
                db_connections,
                notify: RecordingNotifyGW::default(),
            }
        }

        pub fn create_post(&self, post: Post) {
            self.db_connections
                .exclusive()
                .unwrap()
                .create_post(post)
                .unwrap();
        }

        pub fn get_post(&self, id: &str) -> Post {
            self.db_connections.shared().unwrap().get_post(id).unwrap()
        }

        pub fn comments_of_post(&self, post_id: &str) -> Vec<Comment> {
            self.db_connections
                .shared()
                .unwrap()
                .load_comments_of_post(post_id, None)
                .unwrap()
        }
    }
}
