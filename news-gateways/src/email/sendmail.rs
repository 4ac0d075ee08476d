use fast_chemail::is_valid_email;
use news_core::gateways::email::EmailGateway;
use news_entities::email::*;
#[cfg(not(test))]
use std::{
    io::Write as _,
    process::{Command, Stdio},
};
use std::{
    io::{Error, Result},
    thread,
};
use time::{format_description::well_known::Rfc2822, OffsetDateTime};

/// Sends e-mails through the local `sendmail` binary.
///
/// Each recipient gets a separate mail, the addresses
/// of other recipients are never disclosed.
#[derive(Debug, Clone)]
pub struct SendMailGateway {
    from: EmailAddress,
}

impl SendMailGateway {
    pub const fn new(from: EmailAddress) -> Self {
        Self { from }
    }

    // The mail transfer agent must not block the request
    // that triggered the notification.
    fn send(&self, to: &EmailAddress, mail: String) {
        let to = to.to_string();
        thread::spawn(move || match pipe_to_sendmail(&mail) {
            Ok(()) => log::debug!("Sent e-mail to {to}"),
            Err(err) => log::warn!("Could not send e-mail to {to}: {err}"),
        });
    }
}

#[cfg(not(test))]
fn pipe_to_sendmail(mail: &str) -> Result<()> {
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()?;
    let Some(mut stdin) = child.stdin.take() else {
        return Err(Error::other("No stdin of sendmail"));
    };
    stdin.write_all(mail.as_bytes())?;
    // Closing stdin terminates the input of sendmail
    drop(stdin);
    let status = child.wait()?;
    if !status.success() {
        return Err(Error::other(format!("sendmail exited with {status}")));
    }
    Ok(())
}

#[cfg(test)]
fn pipe_to_sendmail(mail: &str) -> Result<()> {
    log::debug!("Not sending e-mail in tests: {mail}");
    Ok(())
}

impl EmailGateway for SendMailGateway {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        for to in recipients {
            match compose(&self.from, to, email) {
                Ok(mail) => self.send(to, mail),
                Err(err) => log::warn!("Failed to compose e-mail to {to}: {err}"),
            }
        }
    }
}

// Without the trailing CRLF
const MAX_LINE_LEN: usize = 76;

const ENCODED_WORD_START: &str = "=?UTF-8?Q?";
const ENCODED_WORD_END: &str = "?=";

// Q encoding of RFC 2047
fn q_encode_char(c: char, out: &mut String) {
    match c {
        ' ' => out.push('_'),
        '=' | '?' | '_' => out.push_str(&format!("={:02X}", c as u32)),
        c if c.is_ascii_graphic() => out.push(c),
        c => {
            let mut buf = [0; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("={byte:02X}"));
            }
        }
    }
}

fn push_encoded_word(out: &mut String, word: &str) {
    out.push_str(ENCODED_WORD_START);
    out.push_str(word);
    out.push_str(ENCODED_WORD_END);
}

/// A header field whose value may contain any characters.
///
/// Plain ASCII values that fit on a single line are kept
/// as they are. Other values are split into encoded words,
/// one per line, without splitting a character.
fn header_field(name: &str, value: &str) -> String {
    let mut field = format!("{name}: ");
    let is_plain = value.chars().all(|c| c == ' ' || c.is_ascii_graphic());
    if is_plain && field.len() + value.len() <= MAX_LINE_LEN {
        field.push_str(value);
        return field;
    }
    let word_overhead = ENCODED_WORD_START.len() + ENCODED_WORD_END.len();
    let mut line_len = field.len();
    let mut word = String::new();
    let mut encoded_char = String::with_capacity(12);
    for c in value.chars() {
        encoded_char.clear();
        q_encode_char(c, &mut encoded_char);
        if !word.is_empty()
            && line_len + word_overhead + word.len() + encoded_char.len() > MAX_LINE_LEN
        {
            push_encoded_word(&mut field, &word);
            field.push_str("\r\n ");
            line_len = 1;
            word.clear();
        }
        word.push_str(&encoded_char);
    }
    push_encoded_word(&mut field, &word);
    field
}

fn quoted_printable_body(body: &str) -> String {
    let body = body.lines().collect::<Vec<_>>().join("\r\n");
    quoted_printable::encode_to_str(body.as_bytes())
}

/// Compose a plain text mail for a single recipient.
pub fn compose(from: &EmailAddress, to: &EmailAddress, email: &EmailContent) -> Result<String> {
    if !is_valid_email(to.as_str()) {
        return Err(Error::other(format!("Invalid recipient address: {to}")));
    }
    let date = OffsetDateTime::now_utc()
        .format(&Rfc2822)
        .map_err(Error::other)?;
    let headers = [
        format!("Date: {date}"),
        format!("From: {from}"),
        format!("To: {to}"),
        header_field("Subject", &email.subject),
        "MIME-Version: 1.0".to_owned(),
        "Content-Type: text/plain; charset=utf-8".to_owned(),
        "Content-Transfer-Encoding: quoted-printable".to_owned(),
    ];
    let mail = format!(
        "{headers}\r\n\r\n{body}",
        headers = headers.join("\r\n"),
        body = quoted_printable_body(&email.body)
    );
    log::trace!("Composed e-mail: {mail}");
    Ok(mail)
}
