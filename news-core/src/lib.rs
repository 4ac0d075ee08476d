//! # news-core
//!
//! Business logic of newsbundle: repository traits, gateways
//! for side effects, validation and the use cases that tie
//! them together.

pub mod entities {
    pub use news_entities::{comment::*, email::*, id::*, post::*, time::*, url::*};
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;
