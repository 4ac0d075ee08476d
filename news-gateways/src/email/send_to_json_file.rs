use jfs::Store;
use news_core::{entities::Timestamp, gateways::email::EmailGateway};
use news_entities::email::*;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};

/// A dummy e-mail gateway that stores every e-mail as a JSON file.
///
/// Useful during development when no mail transfer agent
/// is available.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonEmail {
    to: String,
    subject: String,
    body: String,
}

impl JsonEmail {
    fn new(to: &EmailAddress, content: &EmailContent) -> Self {
        Self {
            to: to.as_str().to_owned(),
            subject: content.subject.clone(),
            body: content.body.clone(),
        }
    }
}

impl EmailGateway for SendToJsonFile {
    fn compose_and_send(&self, recipients: &[EmailAddress], content: &EmailContent) {
        for (i, to) in recipients.iter().enumerate() {
            let now = Timestamp::now().as_millis();
            let key = format!("{now}-{i}-{to}", to = to.as_str());
            let email = JsonEmail::new(to, content);
            if let Err(err) = self.json_store.save_with_id(&email, &key) {
                log::warn!("Unable to save e-mail in JSON file: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_one_file_per_recipient() {
        let dir = tempfile::tempdir().unwrap();
        let gw = SendToJsonFile::try_new(dir.path()).unwrap();
        let recipients: Vec<EmailAddress> = ["a@example.com", "b@example.com"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let content = EmailContent {
            subject: "Hello".into(),
            body: "World".into(),
        };
        gw.compose_and_send(&recipients, &content);
        let emails: Vec<JsonEmail> = gw
            .json_store
            .all::<JsonEmail>()
            .unwrap()
            .into_values()
            .collect();
        assert_eq!(emails.len(), 2);
        assert!(emails.iter().all(|e| e.subject == "Hello" && e.body == "World"));
        assert!(emails.iter().any(|e| e.to == "b@example.com"));
    }
}
