pub mod send_to_json_file;
pub mod sendmail;

pub use news_core::gateways::email::EmailGateway;
