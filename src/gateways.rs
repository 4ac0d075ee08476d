use std::collections::HashSet;

use anyhow::Result;
use news_core::gateways::notify::NotificationType;
use news_entities::email::{EmailAddress, EmailContent};
use news_gateways::{
    email::{send_to_json_file::SendToJsonFile, sendmail::SendMailGateway, EmailGateway},
    notify::Notify,
};

use crate::config::{self, Config};

pub fn notification_gateway(cfg: &Config) -> Result<Notify> {
    let notify_on: HashSet<_> = [NotificationType::CommentCreated].into_iter().collect();
    let recipients = cfg.comments.notification_recipients.clone();
    if recipients.is_empty() {
        log::info!("No recipients for comment notifications configured");
    }
    let notify = match &cfg.email.gateway {
        Some(config::EmailGateway::Sendmail { sender_address }) => {
            log::info!("Use sendmail gateway");
            Notify::new(
                SendMailGateway::new(sender_address.clone()),
                notify_on,
                recipients,
            )
        }
        Some(config::EmailGateway::EmailToJsonFile { dir }) => {
            log::info!("Use JSON file email gateway ({})", dir.display());
            Notify::new(SendToJsonFile::try_new(dir)?, notify_on, recipients)
        }
        None => {
            log::warn!("No e-mail gateway configured");
            Notify::new(DummyMailGw, notify_on, recipients)
        }
    };
    Ok(notify)
}

struct DummyMailGw;

impl EmailGateway for DummyMailGw {
    fn compose_and_send(&self, _recipients: &[EmailAddress], email: &EmailContent) {
        log::debug!(
            "Cannot send e-mail '{}' because no e-mail gateway was configured",
            email.subject
        );
    }
}
