// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use news_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod comment;
mod post;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_comment_status(status: CommentStatusPrimitive) -> Result<CommentStatus> {
    CommentStatus::try_from(status).map_err(|err| repo::Error::Other(anyhow!(err)))
}

fn resolve_post_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::post::dsl;
    schema::post::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::debug!("Failed to resolve post id '{id}': {e}");
            e
        })
        .map_err(from_diesel_err)
}
