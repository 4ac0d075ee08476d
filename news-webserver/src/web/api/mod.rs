use std::{fmt::Display, result};

use news_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, Cfg};
use news_application::prelude as flows;
use news_db_sqlite::Connections;
use news_boundary as json;
use news_core::{entities::*, usecases, util::validate::Submission};

mod comments;
mod error;
mod posts;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   posts   --- //
        posts::get_posts,
        posts::get_post,
        // ---   comments   --- //
        comments::get_comments_of_post,
        comments::post_comment,
        comments::post_comment_form,
        comments::put_comment,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
