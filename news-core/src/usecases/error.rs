use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid page")]
    InvalidPage,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Invalid comment status")]
    InvalidCommentStatus,
    #[error("The post does not accept comments")]
    NotCommentable,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<news_entities::comment::InvalidCommentStatusPrimitive> for Error {
    fn from(_: news_entities::comment::InvalidCommentStatusPrimitive) -> Self {
        Self::InvalidCommentStatus
    }
}
