use super::*;

/// Apply the changes of a moderator to an existing comment.
pub fn update_comment(
    connections: &sqlite::Connections,
    post_id: &str,
    comment_id: &str,
    update: usecases::CommentUpdate,
) -> Result<Submission<Comment>> {
    let now = Timestamp::now();
    let mut connection = connections.exclusive()?;
    let submission = connection.transaction::<_, usecases::Error, _>(|conn| {
        match usecases::prepare_comment_update(conn, post_id, comment_id, update, now)? {
            Submission::Accepted(comment) => usecases::store_updated_comment(conn, comment)
                .map(|(_, comment)| Submission::Accepted(comment)),
            Submission::Rejected(errors) => Ok(Submission::Rejected(errors)),
        }
    })?;
    if let Submission::Accepted(comment) = &submission {
        info!(
            "Updated comment {} of post {} (status: {})",
            comment.id,
            comment.post_id,
            comment.status.as_ref()
        );
    }
    Ok(submission)
}
