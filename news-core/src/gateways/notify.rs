use news_entities::{comment::Comment, post::Post};

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    /// A reader submitted a comment that passed the validation
    /// and has been stored.
    CommentCreated {
        post: &'a Post,
        comment: &'a Comment,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    CommentCreated,
}

impl NotificationEvent<'_> {
    pub const fn kind(&self) -> NotificationType {
        match self {
            Self::CommentCreated { .. } => NotificationType::CommentCreated,
        }
    }
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
