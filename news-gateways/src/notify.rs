use std::{collections::HashSet, sync::Arc};

use news_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};
use news_entities::email::*;

use crate::{email::EmailGateway, user_communication};

/// Turns notification events into e-mails for
/// a fixed list of recipients.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    notify_on: HashSet<NotificationType>,
    recipients: Vec<EmailAddress>,
}

impl Notify {
    pub fn new<G>(gw: G, notify_on: HashSet<NotificationType>, recipients: Vec<EmailAddress>) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
            notify_on,
            recipients,
        }
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind()) || self.recipients.is_empty()
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            log::debug!("Skipping notification {:?}", event.kind());
            return;
        }
        match event {
            E::CommentCreated { post, comment } => {
                let content = user_communication::comment_created_email(post, comment);
                log::info!(
                    "Sending e-mails to {} recipients after new comment {} on post {}",
                    self.recipients.len(),
                    comment.id,
                    post.id,
                );
                self.email_gw.compose_and_send(&self.recipients, &content);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use news_entities::builders::*;
    use news_entities::{comment::Comment, post::Post};
    use std::sync::Mutex;

    #[derive(Default, Clone)]
    struct RecordingEmailGateway {
        sent: Arc<Mutex<Vec<(Vec<EmailAddress>, EmailContent)>>>,
    }

    impl EmailGateway for RecordingEmailGateway {
        fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
            self.sent
                .lock()
                .unwrap()
                .push((recipients.to_vec(), email.clone()));
        }
    }

    fn recipients() -> Vec<EmailAddress> {
        vec!["admin@news.example".parse().unwrap()]
    }

    #[test]
    fn send_comment_notification() {
        let gw = RecordingEmailGateway::default();
        let notify = Notify::new(
            gw.clone(),
            [NotificationType::CommentCreated].into_iter().collect(),
            recipients(),
        );
        let post = Post::build().id("42").title("Hello").finish();
        let comment = Comment::build().post_id("42").content("hi").finish();
        notify.notify(NotificationEvent::CommentCreated {
            post: &post,
            comment: &comment,
        });
        let sent = gw.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, recipients());
        assert!(sent[0].1.subject.contains("Hello"));
    }

    #[test]
    fn skip_disabled_notifications() {
        let gw = RecordingEmailGateway::default();
        let post = Post::build().id("42").finish();
        let comment = Comment::build().post_id("42").finish();

        let notify = Notify::new(gw.clone(), HashSet::new(), recipients());
        notify.notify(NotificationEvent::CommentCreated {
            post: &post,
            comment: &comment,
        });

        let notify = Notify::new(
            gw.clone(),
            [NotificationType::CommentCreated].into_iter().collect(),
            vec![],
        );
        notify.notify(NotificationEvent::CommentCreated {
            post: &post,
            comment: &comment,
        });

        assert!(gw.sent.lock().unwrap().is_empty());
    }
}
