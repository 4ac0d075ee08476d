use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Public view of a post.
///
/// The view never embeds the comments of the post,
/// they are available through a separate resource.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Post {
    pub id                      : String,
    pub slug                    : String,
    pub title                   : String,
    #[serde(rename = "abstract")]
    pub abstract_text           : String,
    pub content                 : String,
    pub tags                    : Vec<String>,
    pub enabled                 : bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub publication_date_start  : Option<i64>,
    pub comments_enabled        : bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comments_close_at       : Option<i64>,
    pub comments_default_status : CommentStatus,
    pub comments_count          : u64,
    pub created_at              : i64,
    pub updated_at              : i64,
}

/// Public view of a comment.
///
/// The owning post is only referenced by its id and the
/// e-mail address of the author is never exposed.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Comment {
    pub id         : String,
    pub post_id    : String,
    pub status     : CommentStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url        : Option<String>,
    pub content    : String,
    pub created_at : i64,
    pub updated_at : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum CommentStatus {
    Invalid,
    Valid,
    Pending,
}

/// Fields submitted by a reader for a new comment.
///
/// All fields are optional on the wire, missing values
/// are reported by the validation and not by the parser.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewComment {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Fields submitted by a moderator for an existing comment.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CommentUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<CommentStatus>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Response body of a rejected submission.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ValidationErrors {
    pub http_status: u16,
    pub message: String,
    pub errors: Vec<FieldError>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{http_status}: {message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_of_new_comment_are_none() {
        let new_comment: NewComment = serde_json::from_str(r#"{"content":"hello"}"#).unwrap();
        assert_eq!(new_comment.content.as_deref(), Some("hello"));
        assert!(new_comment.name.is_none());
        assert!(new_comment.email.is_none());
        assert!(new_comment.url.is_none());
    }

    #[test]
    fn comment_status_names() {
        let status: CommentStatus = serde_json::from_str(r#""pending""#).unwrap();
        assert!(matches!(status, CommentStatus::Pending));
        assert_eq!(
            serde_json::to_string(&CommentStatus::Valid).unwrap(),
            r#""valid""#
        );
    }

    #[test]
    fn post_abstract_is_renamed() {
        let post = Post {
            id: "42".into(),
            slug: "hello-world".into(),
            title: "Hello".into(),
            abstract_text: "short".into(),
            content: "long".into(),
            tags: vec![],
            enabled: true,
            publication_date_start: None,
            comments_enabled: true,
            comments_close_at: None,
            comments_default_status: CommentStatus::Pending,
            comments_count: 0,
            created_at: 0,
            updated_at: 0,
        };
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains(r#""abstract":"short""#));
        assert!(!json.contains("publication_date_start"));
    }
}
