mod authorize;
mod comment_fields;
mod create_comment;
mod error;
mod get_post;
mod list_posts;
mod load_comments;
mod update_comment;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, comment_fields::*, create_comment::*, error::Error, get_post::*,
    list_posts::*, load_comments::*, update_comment::*,
};

mod prelude {
    pub use super::{comment_fields::*, error::Error};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::*,
        util::validate::{AutoCorrect, Submission, Validate},
    };
}
