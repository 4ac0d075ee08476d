use super::*;

macro_rules! impl_post_repo {
    ($($db:ty),+) => {
        $(
            impl PostRepo for $db {
                fn get_post(&self, id: &str) -> Result<Post> {
                    get_post(&mut self.conn(), id)
                }
                fn list_posts(
                    &self,
                    filter: &PostFilter,
                    pagination: &Pagination,
                ) -> Result<Vec<Post>> {
                    list_posts(&mut self.conn(), filter, pagination)
                }
            }
        )+
    };
}

macro_rules! impl_post_repo_mut {
    ($($db:ty),+) => {
        $(
            impl PostRepoMut for $db {
                fn create_post(&self, post: Post) -> Result<()> {
                    create_post(&mut self.conn(), post)
                }
                fn update_comments_count(&self, id: &str, count: u64) -> Result<()> {
                    update_comments_count(&mut self.conn(), id, count)
                }
            }
        )+
    };
}

impl_post_repo!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);
impl_post_repo_mut!(DbReadWrite<'_>, DbConnection<'_>);

fn create_post(conn: &mut SqliteConnection, post: Post) -> Result<()> {
    let Post {
        id,
        slug,
        title,
        abstract_text,
        content,
        tags,
        enabled,
        publication_date_start,
        comments_enabled,
        comments_close_at,
        comments_default_status,
        comments_count,
        created_at,
        updated_at,
    } = post;
    let new_post = models::NewPost {
        id: id.as_str(),
        slug: &slug,
        title: &title,
        abstract_text: &abstract_text,
        content: &content,
        enabled,
        publication_date_start: publication_date_start.map(Timestamp::as_millis),
        comments_enabled,
        comments_close_at: comments_close_at.map(Timestamp::as_millis),
        comments_default_status: comments_default_status.into(),
        comments_count: comments_count as i64,
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::post::table)
        .values(&new_post)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    let tags = normalize_tags(tags);
    if tags.is_empty() {
        return Ok(());
    }
    let parent_rowid = resolve_post_rowid(conn, id.as_str())?;
    let new_tags: Vec<_> = tags
        .iter()
        .map(|tag| models::NewPostTag {
            parent_rowid,
            tag: tag.as_str(),
        })
        .collect();
    diesel::insert_into(schema::post_tag::table)
        .values(&new_tags)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_post_tags(conn: &mut SqliteConnection, post_rowid: i64) -> Result<Vec<String>> {
    use schema::post_tag::dsl;
    schema::post_tag::table
        .select(dsl::tag)
        .filter(dsl::parent_rowid.eq(post_rowid))
        .order_by(dsl::tag)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn load_post(conn: &mut SqliteConnection, post: models::Post) -> Result<Post> {
    let models::Post {
        rowid,
        id,
        slug,
        title,
        abstract_text,
        content,
        enabled,
        publication_date_start,
        comments_enabled,
        comments_close_at,
        comments_default_status,
        comments_count,
        created_at,
        updated_at,
    } = post;
    let tags = load_post_tags(conn, rowid)?;
    Ok(Post {
        id: id.into(),
        slug,
        title,
        abstract_text,
        content,
        tags,
        enabled,
        publication_date_start: publication_date_start.map(Timestamp::from_millis),
        comments_enabled,
        comments_close_at: comments_close_at.map(Timestamp::from_millis),
        comments_default_status: load_comment_status(comments_default_status)?,
        comments_count: comments_count.max(0) as u64,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn get_post(conn: &mut SqliteConnection, id: &str) -> Result<Post> {
    use schema::post::dsl;
    let post = schema::post::table
        .filter(dsl::id.eq(id))
        .first::<models::Post>(conn)
        .map_err(from_diesel_err)?;
    load_post(conn, post)
}

fn list_posts(
    conn: &mut SqliteConnection,
    filter: &PostFilter,
    pagination: &Pagination,
) -> Result<Vec<Post>> {
    use schema::{post::dsl, post_tag::dsl as tag_dsl};
    let mut query = schema::post::table.into_boxed();
    if let Some(enabled) = filter.enabled {
        query = query.filter(dsl::enabled.eq(enabled));
    }
    if let Some(tag) = &filter.tag {
        query = query.filter(
            dsl::rowid.eq_any(
                schema::post_tag::table
                    .select(tag_dsl::parent_rowid)
                    .filter(tag_dsl::tag.eq(tag.clone())),
            ),
        );
    }
    // SQLite sorts NULL values first in ascending order
    // and thus last in descending order.
    query = query.order_by((
        dsl::publication_date_start.desc(),
        dsl::created_at.desc(),
        dsl::id,
    ));
    let offset = pagination.offset.unwrap_or(0) as i64;
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64).offset(offset);
    } else if offset > 0 {
        // SQLite requires a LIMIT clause for OFFSET
        query = query.limit(i64::MAX).offset(offset);
    }
    let posts = query
        .load::<models::Post>(conn)
        .map_err(from_diesel_err)?;
    posts.into_iter().map(|post| load_post(conn, post)).collect()
}

fn update_comments_count(conn: &mut SqliteConnection, id: &str, count: u64) -> Result<()> {
    use schema::post::dsl;
    let updated = diesel::update(schema::post::table.filter(dsl::id.eq(id)))
        .set(dsl::comments_count.eq(count as i64))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
