use super::prelude::*;

/// Load the comments of an existing post, oldest first.
pub fn load_comments_of_post<R>(
    repo: &R,
    post_id: &str,
    status: Option<CommentStatus>,
) -> Result<Vec<Comment>>
where
    R: PostRepo + CommentRepo,
{
    // Unknown posts must not be confused with posts without comments
    let post = repo.get_post(post_id)?;
    Ok(repo.load_comments_of_post(post.id.as_str(), status)?)
}
