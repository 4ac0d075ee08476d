use crate::{comment::CommentStatus, id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id                      : Id,
    pub slug                    : String,
    pub title                   : String,
    pub abstract_text           : String,
    pub content                 : String,
    pub tags                    : Vec<String>,
    pub enabled                 : bool,
    pub publication_date_start  : Option<Timestamp>,
    pub comments_enabled        : bool,
    pub comments_close_at       : Option<Timestamp>,
    pub comments_default_status : CommentStatus,
    // Number of comments with status `Valid`
    pub comments_count          : u64,
    pub created_at              : Timestamp,
    pub updated_at              : Timestamp,
}

impl Post {
    /// Checks if new comments are currently accepted.
    ///
    /// Comments are only accepted for enabled posts with
    /// comments enabled that have not been closed yet.
    pub fn is_commentable(&self, now: Timestamp) -> bool {
        if !self.enabled || !self.comments_enabled {
            return false;
        }
        self.comments_close_at
            .map_or(true, |close_at| close_at > now)
    }
}

/// Tags are compared without surrounding whitespace
/// and case-insensitively.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Normalize, sort and deduplicate tags and drop blank ones.
pub fn normalize_tags<I, T>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut tags: Vec<_> = tags
        .into_iter()
        .map(|t| normalize_tag(t.as_ref()))
        .filter(|t| !t.is_empty())
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}
