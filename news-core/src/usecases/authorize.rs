use super::prelude::*;

/// Check if any of the given bearer tokens grants
/// moderator privileges.
pub fn authorize_moderator<S>(tokens: &[String], moderator_tokens: &[S]) -> Result<()>
where
    S: AsRef<str>,
{
    let authorized = tokens.iter().any(|token| {
        !token.is_empty()
            && moderator_tokens
                .iter()
                .any(|allowed| allowed.as_ref() == token.as_str())
    });
    if authorized {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}
