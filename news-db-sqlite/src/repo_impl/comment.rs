use super::*;

macro_rules! impl_comment_repo {
    ($($db:ty),+) => {
        $(
            impl CommentRepo for $db {
                fn load_comment(&self, id: &str) -> Result<Comment> {
                    load_comment(&mut self.conn(), id)
                }
                fn load_comments_of_post(
                    &self,
                    post_id: &str,
                    status: Option<CommentStatus>,
                ) -> Result<Vec<Comment>> {
                    load_comments_of_post(&mut self.conn(), post_id, status)
                }
                fn count_comments_of_post(
                    &self,
                    post_id: &str,
                    status: CommentStatus,
                ) -> Result<u64> {
                    count_comments_of_post(&mut self.conn(), post_id, status)
                }
            }
        )+
    };
}

macro_rules! impl_comment_repo_mut {
    ($($db:ty),+) => {
        $(
            impl CommentRepoMut for $db {
                fn create_comment(&self, comment: Comment) -> Result<()> {
                    create_comment(&mut self.conn(), comment)
                }
                fn update_comment(&self, comment: &Comment) -> Result<()> {
                    update_comment(&mut self.conn(), comment)
                }
            }
        )+
    };
}

impl_comment_repo!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);
impl_comment_repo_mut!(DbReadWrite<'_>, DbConnection<'_>);

fn create_comment(conn: &mut SqliteConnection, comment: Comment) -> Result<()> {
    let Comment {
        id,
        post_id,
        status,
        name,
        email,
        url,
        content,
        created_at,
        updated_at,
    } = comment;
    let parent_rowid = resolve_post_rowid(conn, post_id.as_str())?;
    let new_comment = models::NewComment {
        parent_rowid,
        id: id.into(),
        status: status.into(),
        name,
        email: email.map(EmailAddress::into_string),
        url: url.map(String::from),
        content,
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::comment::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    use schema::comment::dsl;
    let changeset = models::CommentChangeset {
        status: comment.status.into(),
        name: comment.name.clone(),
        email: comment.email.as_ref().map(|email| email.as_str().to_owned()),
        url: comment.url.as_ref().map(|url| url.as_str().to_owned()),
        content: comment.content.clone(),
        updated_at: comment.updated_at.as_millis(),
    };
    let count = diesel::update(schema::comment::table.filter(dsl::id.eq(comment.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn load_joined_comment(comment: models::JoinedComment) -> Result<Comment> {
    let models::JoinedComment {
        rowid: _,
        id,
        status,
        name,
        email,
        url,
        content,
        created_at,
        updated_at,
        post_id,
    } = comment;
    let email = email.and_then(|email| {
        email
            .parse()
            .map_err(|err| {
                // Only validated addresses are stored
                log::warn!("Failed to load e-mail address of comment {id}: {err}");
            })
            .ok()
    });
    let url = url.and_then(|url| {
        url.parse()
            .map_err(|err| {
                log::warn!("Failed to load URL of comment {id}: {err}");
            })
            .ok()
    });
    Ok(Comment {
        id: id.into(),
        post_id: post_id.into(),
        status: load_comment_status(status)?,
        name,
        email,
        url,
        content,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

macro_rules! select_joined_comment {
    () => {
        schema::comment::table
            .inner_join(schema::post::table)
            .select((
                schema::comment::dsl::rowid,
                schema::comment::dsl::id,
                schema::comment::dsl::status,
                schema::comment::dsl::name,
                schema::comment::dsl::email,
                schema::comment::dsl::url,
                schema::comment::dsl::content,
                schema::comment::dsl::created_at,
                schema::comment::dsl::updated_at,
                schema::post::dsl::id,
            ))
    };
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::comment::dsl;
    let comment = select_joined_comment!()
        .filter(dsl::id.eq(id))
        .first::<models::JoinedComment>(conn)
        .map_err(from_diesel_err)?;
    load_joined_comment(comment)
}

fn load_comments_of_post(
    conn: &mut SqliteConnection,
    post_id: &str,
    status: Option<CommentStatus>,
) -> Result<Vec<Comment>> {
    use schema::{comment::dsl, post::dsl as post_dsl};
    let mut query = select_joined_comment!()
        .filter(post_dsl::id.eq(post_id.to_owned()))
        .into_boxed();
    if let Some(status) = status {
        query = query.filter(dsl::status.eq(CommentStatusPrimitive::from(status)));
    }
    query
        .order_by((dsl::created_at, dsl::rowid))
        .load::<models::JoinedComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_joined_comment)
        .collect()
}

fn count_comments_of_post(
    conn: &mut SqliteConnection,
    post_id: &str,
    status: CommentStatus,
) -> Result<u64> {
    use schema::comment::dsl;
    let parent_rowid = resolve_post_rowid(conn, post_id)?;
    let count = schema::comment::table
        .select(diesel::dsl::count_star())
        .filter(dsl::parent_rowid.eq(parent_rowid))
        .filter(dsl::status.eq(CommentStatusPrimitive::from(status)))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}
