//! # news-gateways
//!
//! Implementations of the gateways for side effects
//! that are defined in `news-core`.

pub mod email;
pub mod notify;

mod user_communication;
