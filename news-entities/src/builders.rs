//! Builders for creating entities in tests.

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, post_builder::*};

pub mod post_builder {

    use super::*;
    use crate::{comment::*, id::*, post::*, time::*};

    #[derive(Debug)]
    pub struct PostBuild {
        post: Post,
    }

    impl PostBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.post.id = id.into();
            self
        }
        pub fn slug(mut self, slug: &str) -> Self {
            self.post.slug = slug.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.post.title = title.into();
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.post.content = content.into();
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.post.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn enabled(mut self, enabled: bool) -> Self {
            self.post.enabled = enabled;
            self
        }
        pub fn publication_date_start(mut self, start: Option<Timestamp>) -> Self {
            self.post.publication_date_start = start;
            self
        }
        pub fn comments_enabled(mut self, enabled: bool) -> Self {
            self.post.comments_enabled = enabled;
            self
        }
        pub fn comments_close_at(mut self, close_at: Option<Timestamp>) -> Self {
            self.post.comments_close_at = close_at;
            self
        }
        pub fn comments_default_status(mut self, status: CommentStatus) -> Self {
            self.post.comments_default_status = status;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.post.created_at = created_at;
            self.post.updated_at = created_at;
            self
        }
        pub fn finish(self) -> Post {
            self.post
        }
    }

    impl Builder for Post {
        type Build = PostBuild;
        fn build() -> PostBuild {
            let now = Timestamp::now();
            PostBuild {
                post: Post {
                    id: Id::new(),
                    slug: "".into(),
                    title: "".into(),
                    abstract_text: "".into(),
                    content: "".into(),
                    tags: vec![],
                    enabled: true,
                    publication_date_start: None,
                    comments_enabled: true,
                    comments_close_at: None,
                    comments_default_status: CommentStatus::Valid,
                    comments_count: 0,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn post_id(mut self, post_id: &str) -> Self {
            self.comment.post_id = post_id.into();
            self
        }
        pub fn status(mut self, status: CommentStatus) -> Self {
            self.comment.status = status;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.comment.name = Some(name.into());
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.comment.email = Some(email.parse().unwrap());
            self
        }
        pub fn url(mut self, url: &str) -> Self {
            self.comment.url = Some(url.parse().unwrap());
            self
        }
        pub fn content(mut self, content: &str) -> Self {
            self.comment.content = content.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.comment.created_at = created_at;
            self.comment.updated_at = created_at;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            let now = Timestamp::now();
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    post_id: Id::new(),
                    status: CommentStatus::Valid,
                    name: None,
                    email: None,
                    url: None,
                    content: "".into(),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
