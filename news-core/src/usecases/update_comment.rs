use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Changes of an existing comment requested by a moderator.
///
/// Fields that are not submitted keep their stored value,
/// a blank value clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentUpdate {
    pub fields: NewComment,
    pub status: Option<CommentStatus>,
}

/// Bind the submitted changes to an existing comment of the post.
///
/// A comment that belongs to a different post is treated
/// as missing.
pub fn prepare_comment_update<R>(
    repo: &R,
    post_id: &str,
    comment_id: &str,
    update: CommentUpdate,
    now: Timestamp,
) -> Result<Submission<Comment>>
where
    R: PostRepo + CommentRepo,
{
    let post = repo.get_post(post_id)?;
    let mut comment = repo.load_comment(comment_id)?;
    if comment.post_id != post.id {
        log::debug!(
            "Comment {} belongs to post {} and not to {}",
            comment.id,
            comment.post_id,
            post.id
        );
        return Err(RepoError::NotFound.into());
    }
    let CommentUpdate { fields, status } = update;
    Ok(merge_stored_fields(fields, &comment).validate().map(|fields| {
        fields.apply_to(&mut comment);
        if let Some(status) = status {
            comment.status = status;
        }
        comment.updated_at = now;
        comment
    }))
}

fn merge_stored_fields(fields: NewComment, stored: &Comment) -> NewComment {
    let NewComment {
        name,
        email,
        url,
        content,
    } = fields;
    NewComment {
        name: name.or_else(|| stored.name.clone()),
        email: email.or_else(|| stored.email.as_ref().map(|e| e.as_str().to_owned())),
        url: url.or_else(|| stored.url.as_ref().map(|u| u.as_str().to_owned())),
        content: content.or_else(|| Some(stored.content.clone())),
    }
}

pub fn store_updated_comment<R>(repo: &R, comment: Comment) -> Result<(Post, Comment)>
where
    R: PostRepoMut + CommentRepoMut,
{
    log::debug!("Updating comment {} of post {}", comment.id, comment.post_id);
    repo.update_comment(&comment)?;
    let post = super::refresh_comments_count(repo, comment.post_id.as_str())?;
    Ok((post, comment))
}
