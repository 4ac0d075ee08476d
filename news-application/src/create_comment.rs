use super::*;

/// Create a new comment of a post.
///
/// The comment is stored within a single transaction. The
/// notification is only triggered after the transaction has
/// been committed successfully.
pub fn create_comment(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    post_id: &str,
    new_comment: usecases::NewComment,
) -> Result<Submission<Comment>> {
    let now = Timestamp::now();
    let submission = {
        let mut connection = connections.exclusive()?;
        connection.transaction::<_, usecases::Error, _>(|conn| {
            match usecases::prepare_new_comment(conn, post_id, new_comment, now)? {
                Submission::Accepted((_, comment)) => {
                    usecases::store_new_comment(conn, comment)
                        .map(Submission::Accepted)
                        .inspect_err(|err| {
                            warn!("Failed to store new comment of post {post_id}: {err}");
                        })
                }
                Submission::Rejected(errors) => Ok(Submission::Rejected(errors)),
            }
        })
    }?;

    match submission {
        Submission::Accepted((post, comment)) => {
            info!("Created comment {} of post {}", comment.id, post.id);
            notify.notify(NotificationEvent::CommentCreated {
                post: &post,
                comment: &comment,
            });
            Ok(Submission::Accepted(comment))
        }
        Submission::Rejected(errors) => {
            debug!(
                "Rejected new comment of post {post_id} with {} invalid field(s)",
                errors.len()
            );
            Ok(Submission::Rejected(errors))
        }
    }
}
