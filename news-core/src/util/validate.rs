use std::fmt;

use crate::entities::Url;

pub use fast_chemail::is_valid_email;

pub const MSG_NOT_BLANK: &str = "This value should not be blank.";
pub const MSG_INVALID_EMAIL: &str = "This value is not a valid email address.";
pub const MSG_INVALID_URL: &str = "This value is not a valid URL.";

pub fn msg_too_long(max_chars: usize) -> String {
    format!("This value is too long. It should have {max_chars} characters or less.")
}

pub trait Validate {
    type Valid;
    fn validate(self) -> Submission<Self::Valid>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

/// Outcome of binding user input to an entity.
///
/// A rejected submission is not an error: the caller is
/// expected to report the field errors back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    Accepted(T),
    Rejected(FieldErrors),
}

impl<T> Submission<T> {
    pub fn map<U, F>(self, f: F) -> Submission<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Accepted(valid) => Submission::Accepted(f(valid)),
            Self::Rejected(errors) => Submission::Rejected(errors),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Self::Accepted(valid) => Some(valid),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejected(self) -> Option<FieldErrors> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|err| err.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Finish a validation: accept the value if no error has been collected.
    pub fn into_submission<T>(self, valid: T) -> Submission<T> {
        if self.is_empty() {
            Submission::Accepted(valid)
        } else {
            Submission::Rejected(self)
        }
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub fn is_valid_http_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.host().is_some()
}

pub fn exceeds_max_chars(s: &str, max_chars: usize) -> bool {
    s.chars().count() > max_chars
}

/// Trim the string and drop it if nothing remains.
pub fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_only_without_errors() {
        let errors = FieldErrors::default();
        assert_eq!(errors.into_submission(1), Submission::Accepted(1));

        let mut errors = FieldErrors::default();
        errors.push("content", MSG_NOT_BLANK);
        let submission = errors.into_submission(1);
        assert!(!submission.is_accepted());
        let errors = submission.rejected().unwrap();
        assert!(errors.contains("content"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn map_keeps_errors() {
        let mut errors = FieldErrors::default();
        errors.push("url", MSG_INVALID_URL);
        let submission: Submission<u8> = Submission::Rejected(errors.clone());
        assert_eq!(submission.map(|x| x + 1), Submission::Rejected(errors));
        assert_eq!(Submission::Accepted(1).map(|x| x + 1), Submission::Accepted(2));
    }

    #[test]
    fn http_urls() {
        assert!(is_valid_http_url(&"https://example.com/foo".parse().unwrap()));
        assert!(is_valid_http_url(&"http://example.com".parse().unwrap()));
        assert!(!is_valid_http_url(&"ftp://example.com".parse().unwrap()));
        assert!(!is_valid_http_url(&"mailto:foo@example.com".parse().unwrap()));
    }

    #[test]
    fn blank_strings() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" a ".into())), Some("a".into()));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn count_chars_not_bytes() {
        assert!(!exceeds_max_chars("äöü", 3));
        assert!(exceeds_max_chars("abcd", 3));
    }
}
