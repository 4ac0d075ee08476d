use super::prelude::*;

/// Bind the submitted fields to a new comment of the post.
///
/// Nothing is stored here. The post must exist and accept
/// comments, otherwise an error is returned. Invalid fields
/// are reported as a rejected submission.
pub fn prepare_new_comment<R: PostRepo>(
    repo: &R,
    post_id: &str,
    new_comment: NewComment,
    now: Timestamp,
) -> Result<Submission<(Post, Comment)>> {
    let post = repo.get_post(post_id)?;
    if !post.is_commentable(now) {
        log::debug!("Post {} does not accept comments", post.id);
        return Err(Error::NotCommentable);
    }
    let submission = new_comment.validate().map(|fields| {
        let mut comment = Comment {
            id: Id::new(),
            post_id: post.id.clone(),
            status: post.comments_default_status,
            name: None,
            email: None,
            url: None,
            content: String::new(),
            created_at: now,
            updated_at: now,
        };
        fields.apply_to(&mut comment);
        comment
    });
    Ok(submission.map(|comment| (post, comment)))
}

/// Store a prepared comment and refresh the comment
/// count of its post.
///
/// Returns the updated post together with the stored comment.
pub fn store_new_comment<R>(repo: &R, comment: Comment) -> Result<(Post, Comment)>
where
    R: PostRepoMut + CommentRepoMut,
{
    log::debug!("Storing new comment {} of post {}", comment.id, comment.post_id);
    repo.create_comment(comment.clone())?;
    let post = refresh_comments_count(repo, comment.post_id.as_str())?;
    Ok((post, comment))
}

/// Recalculate the number of visible comments of a post.
pub fn refresh_comments_count<R>(repo: &R, post_id: &str) -> Result<Post>
where
    R: PostRepoMut + CommentRepo,
{
    let count = repo.count_comments_of_post(post_id, CommentStatus::Valid)?;
    repo.update_comments_count(post_id, count)?;
    Ok(repo.get_post(post_id)?)
}
