use anyhow::{anyhow, Result};
use news_entities::email::EmailAddress;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "newsbundle.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub comments: Comments,
    pub email: Email,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("{} not found => load default configuration.", file_path.display());
                raw::Config::default()
            }
            Err(err) => return Err(err.into()),
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub moderator_tokens: Vec<String>,
}

pub struct Comments {
    /// Recipients of the notifications about new comments
    pub notification_recipients: Vec<EmailAddress>,
}

pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Clone)]
pub enum EmailGateway {
    Sendmail {
        sender_address: EmailAddress,
    },
    /// For local testing purposes
    EmailToJsonFile {
        /// File system directory for writing emails into JSON files.
        dir: PathBuf,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            comments,
            email,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must not be 0"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let email_gateway = match email.and_then(|m| m.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();

                let gw = match gw_name {
                    raw::EmailGateway::Sendmail => {
                        let raw::Sendmail { sender_address } =
                            gateway.sendmail.ok_or_else(|| {
                                anyhow!("Missing sendmail gateway configuration")
                            })?;
                        let sender_address = sender_address.parse()?;
                        EmailGateway::Sendmail { sender_address }
                    }
                    raw::EmailGateway::EmailToJsonFile => {
                        let raw::EmailToJsonFile { dir } =
                            gateway.email_to_json_file.ok_or_else(|| {
                                anyhow!("Missing email-to-json-file gateway configuration")
                            })?;
                        EmailGateway::EmailToJsonFile { dir }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let email = Email {
            gateway: email_gateway,
        };

        let raw::WebServer {
            cors,
            moderator_tokens,
        } = webserver.unwrap_or_default();
        if moderator_tokens.iter().any(|t| t.trim().is_empty()) {
            return Err(anyhow!("Empty moderator tokens are not allowed"));
        }
        let webserver = WebServer {
            enable_cors: cors,
            moderator_tokens,
        };

        let raw::Comments {
            notification_recipients,
        } = comments.unwrap_or_default();
        let notification_recipients = notification_recipients
            .iter()
            .map(|addr| {
                addr.parse::<EmailAddress>()
                    .map_err(|err| anyhow!("{err}: {addr}"))
            })
            .collect::<Result<_>>()?;
        let comments = Comments {
            notification_recipients,
        };

        Ok(Self {
            db,
            webserver,
            comments,
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(cfg: &str) -> Result<Config> {
        let raw: raw::Config = toml::from_str(cfg)?;
        Config::try_from(raw)
    }

    #[test]
    fn load_default_config_if_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(DEFAULT_CONFIG_FILE_NAME);
        let cfg = Config::try_load_from_file_or_default(Some(&file)).unwrap();
        assert_eq!(cfg.db.conn_pool_size, 10);
        assert!(cfg.webserver.moderator_tokens.is_empty());
        assert!(cfg.email.gateway.is_none());
        assert!(cfg.comments.notification_recipients.is_empty());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.db.conn_sqlite, "newsbundle.sqlite");
        assert_eq!(cfg.db.conn_pool_size, 10);
        assert!(!cfg.webserver.enable_cors);
        assert!(cfg.webserver.moderator_tokens.is_empty());
    }

    #[test]
    fn configure_sendmail_gateway() {
        let cfg = parse(
            r#"
            [comments]
            notification-recipients = ["editor@example.com"]

            [email]
            gateway = "sendmail"

            [gateway.sendmail]
            sender-address = "news@example.com"
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.comments.notification_recipients[0].as_str(),
            "editor@example.com"
        );
        match cfg.email.gateway {
            Some(EmailGateway::Sendmail { sender_address }) => {
                assert_eq!(sender_address.as_str(), "news@example.com");
            }
            _ => panic!("Unexpected e-mail gateway"),
        }
    }

    #[test]
    fn use_default_gateway_settings() {
        let cfg = parse(
            r#"
            [email]
            gateway = "email-to-json-file"
            "#,
        )
        .unwrap();
        assert!(matches!(
            cfg.email.gateway,
            Some(EmailGateway::EmailToJsonFile { dir }) if dir == Path::new("emails")
        ));
    }

    #[test]
    fn reject_invalid_values() {
        assert!(parse(
            r#"
            [comments]
            notification-recipients = [""]
            "#
        )
        .is_err());
        assert!(parse(
            r#"
            [webserver]
            cors = true
            moderator-tokens = [" "]
            "#
        )
        .is_err());
        assert!(parse(
            r#"
            [db]
            connection-sqlite = ":memory:"
            connection-pool-size = 0
            "#
        )
        .is_err());
        assert!(parse(
            r#"
            [email]
            gateway = "sendmail"

            [gateway]
            "#
        )
        .is_err());
    }
}
