use super::prelude::*;
use crate::util::validate::{self, FieldErrors, Submission};

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_CONTENT_LEN: usize = 10_000;

/// Raw fields of a comment as submitted by a reader.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComment {
    pub name    : Option<String>,
    pub email   : Option<String>,
    pub url     : Option<String>,
    pub content : Option<String>,
}

/// Validated fields of a comment.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFields {
    pub name    : Option<String>,
    pub email   : Option<EmailAddress>,
    pub url     : Option<Url>,
    pub content : String,
}

impl CommentFields {
    pub fn apply_to(self, comment: &mut Comment) {
        let Self {
            name,
            email,
            url,
            content,
        } = self;
        comment.name = name;
        comment.email = email;
        comment.url = url;
        comment.content = content;
    }
}

impl AutoCorrect for NewComment {
    fn auto_correct(self) -> Self {
        let Self {
            name,
            email,
            url,
            content,
        } = self;
        Self {
            name: validate::non_blank(name),
            email: validate::non_blank(email),
            url: validate::non_blank(url),
            content: validate::non_blank(content),
        }
    }
}

fn parse_email(email: &str) -> Option<EmailAddress> {
    if !validate::is_valid_email(email) {
        return None;
    }
    email.parse().ok()
}

fn parse_http_url(url: &str) -> Option<Url> {
    url.parse()
        .ok()
        .filter(|url| validate::is_valid_http_url(url))
}

impl Validate for NewComment {
    type Valid = CommentFields;

    // All fields are checked, the errors are collected
    // instead of stopping at the first one.
    fn validate(self) -> Submission<CommentFields> {
        let Self {
            name,
            email,
            url,
            content,
        } = self.auto_correct();
        let mut errors = FieldErrors::default();

        if let Some(name) = &name {
            if validate::exceeds_max_chars(name, MAX_NAME_LEN) {
                errors.push("name", validate::msg_too_long(MAX_NAME_LEN));
            }
        }

        let email = match email.as_deref().map(|s| (s, parse_email(s))) {
            None => None,
            Some((_, Some(email))) => Some(email),
            Some((s, None)) => {
                log::debug!("Rejecting invalid e-mail address '{s}'");
                errors.push("email", validate::MSG_INVALID_EMAIL);
                None
            }
        };

        let url = match url.as_deref().map(|s| (s, parse_http_url(s))) {
            None => None,
            Some((_, Some(url))) => Some(url),
            Some((s, None)) => {
                log::debug!("Rejecting invalid URL '{s}'");
                errors.push("url", validate::MSG_INVALID_URL);
                None
            }
        };

        let content = match content {
            None => {
                errors.push("content", validate::MSG_NOT_BLANK);
                String::new()
            }
            Some(content) => {
                if validate::exceeds_max_chars(&content, MAX_CONTENT_LEN) {
                    errors.push("content", validate::msg_too_long(MAX_CONTENT_LEN));
                }
                content
            }
        };

        errors.into_submission(CommentFields {
            name,
            email,
            url,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_comment(content: &str) -> NewComment {
        NewComment {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    #[test]
    fn accept_content_only() {
        let fields = new_comment(" hello ").validate().accepted().unwrap();
        assert_eq!(fields.content, "hello");
        assert!(fields.name.is_none());
        assert!(fields.email.is_none());
        assert!(fields.url.is_none());
    }

    #[test]
    fn reject_missing_or_blank_content() {
        let errors = NewComment::default().validate().rejected().unwrap();
        assert!(errors.contains("content"));
        let errors = new_comment(" \n\t").validate().rejected().unwrap();
        assert!(errors.contains("content"));
        assert_eq!(
            errors.iter().next().unwrap().message,
            validate::MSG_NOT_BLANK
        );
    }

    #[test]
    fn reject_too_long_content() {
        let content = "x".repeat(MAX_CONTENT_LEN + 1);
        let errors = new_comment(&content).validate().rejected().unwrap();
        assert!(errors.contains("content"));
        let content = "x".repeat(MAX_CONTENT_LEN);
        assert!(new_comment(&content).validate().is_accepted());
    }

    #[test]
    fn reject_too_long_name() {
        let x = NewComment {
            name: Some("n".repeat(MAX_NAME_LEN + 1)),
            ..new_comment("hello")
        };
        let errors = x.validate().rejected().unwrap();
        assert!(errors.contains("name"));
    }

    #[test]
    fn collect_all_field_errors() {
        let x = NewComment {
            name: Some("Jane".into()),
            email: Some("not an email".into()),
            url: Some("ftp://example.com".into()),
            content: None,
        };
        let errors = x.validate().rejected().unwrap();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains("email"));
        assert!(errors.contains("url"));
        assert!(errors.contains("content"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn accept_all_fields() {
        let x = NewComment {
            name: Some("Jane".into()),
            email: Some("jane@example.com".into()),
            url: Some("https://example.com/jane".into()),
            content: Some("hello".into()),
        };
        let fields = x.validate().accepted().unwrap();
        assert_eq!(fields.name.as_deref(), Some("Jane"));
        assert_eq!(fields.email.unwrap().as_str(), "jane@example.com");
        assert_eq!(fields.url.unwrap().as_str(), "https://example.com/jane");
    }

    #[test]
    fn empty_optional_fields_are_ignored() {
        let x = NewComment {
            name: Some(" ".into()),
            email: Some("".into()),
            url: Some("  ".into()),
            content: Some("hello".into()),
        };
        let fields = x.validate().accepted().unwrap();
        assert!(fields.name.is_none());
        assert!(fields.email.is_none());
        assert!(fields.url.is_none());
    }
}
