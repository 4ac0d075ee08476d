// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub enabled: Option<bool>,
    pub tag: Option<String>,
}

pub trait PostRepo {
    fn get_post(&self, id: &str) -> Result<Post>;

    // Ordered by publication date (newest first, posts without a
    // publication date last), then by creation date (newest first).
    fn list_posts(&self, filter: &PostFilter, pagination: &Pagination) -> Result<Vec<Post>>;
}

pub trait PostRepoMut: PostRepo {
    fn create_post(&self, post: Post) -> Result<()>;
    fn update_comments_count(&self, id: &str, count: u64) -> Result<()>;
}

pub trait CommentRepo {
    fn load_comment(&self, id: &str) -> Result<Comment>;

    // Ordered by creation date (oldest first)
    fn load_comments_of_post(
        &self,
        post_id: &str,
        status: Option<CommentStatus>,
    ) -> Result<Vec<Comment>>;

    fn count_comments_of_post(&self, post_id: &str, status: CommentStatus) -> Result<u64>;
}

pub trait CommentRepoMut: CommentRepo {
    fn create_comment(&self, comment: Comment) -> Result<()>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;
}
