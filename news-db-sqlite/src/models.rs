use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = post)]
pub struct NewPost<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub title: &'a str,
    pub abstract_text: &'a str,
    pub content: &'a str,
    pub enabled: bool,
    pub publication_date_start: Option<i64>,
    pub comments_enabled: bool,
    pub comments_close_at: Option<i64>,
    pub comments_default_status: i16,
    pub comments_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct Post {
    pub rowid: i64,
    pub id: String,
    pub slug: String,
    pub title: String,
    pub abstract_text: String,
    pub content: String,
    pub enabled: bool,
    pub publication_date_start: Option<i64>,
    pub comments_enabled: bool,
    pub comments_close_at: Option<i64>,
    pub comments_default_status: i16,
    pub comments_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = post_tag)]
pub struct NewPostTag<'a> {
    pub parent_rowid: i64,
    pub tag: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = comment)]
pub struct NewComment {
    pub parent_rowid: i64,
    pub id: String,
    pub status: i16,
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = comment, treat_none_as_null = true)]
pub struct CommentChangeset {
    pub status: i16,
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub content: String,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct JoinedComment {
    pub rowid: i64,
    pub id: String,
    pub status: i16,
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,

    pub post_id: String,
}
