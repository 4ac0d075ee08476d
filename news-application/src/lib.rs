#[macro_use]
extern crate log;

mod create_comment;
mod update_comment;

pub mod prelude {
    pub use super::{create_comment::*, update_comment::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use news_core::{
    entities::*,
    gateways::notify::{NotificationEvent, NotificationGateway},
    usecases,
    util::validate::Submission,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use news_db_sqlite::Connections;
}
