use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, EnumIter, EnumString};
use thiserror::Error;

use crate::{email::*, id::*, time::*, url::Url};

pub type CommentStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum CommentStatus {
    Invalid = 0,
    Valid   = 1,
    Pending = 2,
}

impl CommentStatus {
    /// Only valid comments are visible to readers
    /// and contribute to the comment count of a post.
    pub fn is_visible(self) -> bool {
        self == Self::Valid
    }
}

#[derive(Debug, Error)]
#[error("Invalid comment status primitive: {0}")]
pub struct InvalidCommentStatusPrimitive(CommentStatusPrimitive);

impl TryFrom<CommentStatusPrimitive> for CommentStatus {
    type Error = InvalidCommentStatusPrimitive;
    fn try_from(from: CommentStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidCommentStatusPrimitive(from))
    }
}

impl From<CommentStatus> for CommentStatusPrimitive {
    fn from(from: CommentStatus) -> Self {
        from.to_i16().expect("comment status primitive")
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub post_id    : Id,
    pub status     : CommentStatus,
    pub name       : Option<String>,
    pub email      : Option<EmailAddress>,
    pub url        : Option<Url>,
    pub content    : String,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn status_primitive_roundtrip() {
        for status in CommentStatus::iter() {
            let primitive = CommentStatusPrimitive::from(status);
            assert_eq!(status, CommentStatus::try_from(primitive).unwrap());
        }
        assert!(CommentStatus::try_from(3).is_err());
    }

    #[test]
    fn status_names() {
        assert_eq!(CommentStatus::Pending.as_ref(), "pending");
        assert_eq!("VALID".parse::<CommentStatus>().unwrap(), CommentStatus::Valid);
        assert!("moderate".parse::<CommentStatus>().is_err());
    }
}
