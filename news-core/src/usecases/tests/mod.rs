use std::cell::RefCell;

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

pub mod prelude {
    pub use super::MockDb;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases::{self, Error},
    };
    pub use news_entities::builders::*;
}

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub posts: RefCell<Vec<Post>>,
    pub comments: RefCell<Vec<Comment>>,
}

fn matches_filter(post: &Post, filter: &PostFilter) -> bool {
    if let Some(enabled) = filter.enabled {
        if post.enabled != enabled {
            return false;
        }
    }
    if let Some(tag) = &filter.tag {
        if !post.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    true
}

impl PostRepo for MockDb {
    fn get_post(&self, id: &str) -> RepoResult<Post> {
        self.posts
            .borrow()
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn list_posts(&self, filter: &PostFilter, pagination: &Pagination) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<_> = self
            .posts
            .borrow()
            .iter()
            .filter(|p| matches_filter(p, filter))
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            // None is less than Some, posts without a date go last
            b.publication_date_start
                .cmp(&a.publication_date_start)
                .then(b.created_at.cmp(&a.created_at))
                .then(a.id.cmp(&b.id))
        });
        let offset = pagination.offset.unwrap_or(0) as usize;
        let limit = pagination.limit.map_or(usize::MAX, |l| l as usize);
        Ok(posts.into_iter().skip(offset).take(limit).collect())
    }
}

impl PostRepoMut for MockDb {
    fn create_post(&self, mut post: Post) -> RepoResult<()> {
        if self.posts.borrow().iter().any(|p| p.id == post.id) {
            return Err(RepoError::AlreadyExists);
        }
        post.tags = normalize_tags(post.tags);
        self.posts.borrow_mut().push(post);
        Ok(())
    }

    fn update_comments_count(&self, id: &str, count: u64) -> RepoResult<()> {
        let mut posts = self.posts.borrow_mut();
        let post = posts
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        post.comments_count = count;
        Ok(())
    }
}

impl CommentRepoMut for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        if self.comments.borrow().iter().any(|c| c.id == comment.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.comments.borrow_mut().push(comment);
        Ok(())
    }

    fn update_comment(&self, comment: &Comment) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let existing = comments
            .iter_mut()
            .find(|c| c.id == comment.id)
            .ok_or(RepoError::NotFound)?;
        *existing = comment.clone();
        Ok(())
    }
}

impl CommentRepo for MockDb {
    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_comments_of_post(
        &self,
        post_id: &str,
        status: Option<CommentStatus>,
    ) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.post_id.as_str() == post_id)
            .filter(|c| status.map_or(true, |s| c.status == s))
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }

    fn count_comments_of_post(&self, post_id: &str, status: CommentStatus) -> RepoResult<u64> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.post_id.as_str() == post_id && c.status == status)
            .count() as u64)
    }
}
