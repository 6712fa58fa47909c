//! Parsing of the host's XML control responses.
//!
//! Responses are small flat documents such as
//! `<root status_code="200"><currentgame>0</currentgame></root>`, so tags are
//! extracted directly rather than through a full XML parser.

use super::{RemoteError, RemoteResult};
use crate::catalog::{AppEntry, SessionHandle};
use regex::Regex;
use std::sync::OnceLock;

fn root_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<root\b([^>]*)>").expect("regex to match the <root> element"))
}

fn status_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"status_code\s*=\s*"(-?\d+)""#).expect("regex to match status_code attribute")
    })
}

fn status_message_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"status_message\s*=\s*"([^"]*)""#)
            .expect("regex to match status_message attribute")
    })
}

fn app_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<App>(.*?)</App>").expect("regex to match <App> blocks"))
}

/// Verifies the `<root>` element exists and does not report an error status.
///
/// A missing `status_code` attribute is accepted; older hosts omit it.
pub fn check_root_status(body: &str) -> RemoteResult<()> {
    let attrs = root_re()
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| RemoteError::protocol("response has no <root> element"))?;

    let Some(code) = status_code_re()
        .captures(attrs)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return Ok(());
    };

    if code == "200" {
        return Ok(());
    }

    let message = status_message_re()
        .captures(attrs)
        .and_then(|caps| caps.get(1))
        .map(|m| decode_entities(m.as_str()))
        .unwrap_or_else(|| "no status message".to_string());
    Err(RemoteError::protocol(format!(
        "host returned status {}: {}",
        code, message
    )))
}

/// Returns the trimmed text between `<tag>` and `</tag>`, if present.
pub fn tag_value<'a>(body: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let (_, rest) = body.split_once(open.as_str())?;
    let (value, _) = rest.split_once(close.as_str())?;
    Some(value.trim())
}

fn parse_u32_tag(body: &str, tag: &str) -> RemoteResult<u32> {
    let raw = tag_value(body, tag)
        .ok_or_else(|| RemoteError::protocol(format!("missing <{}> in response", tag)))?;
    raw.parse::<u32>().map_err(|_| {
        RemoteError::protocol(format!("<{}> is not a number: {:?}", tag, raw))
    })
}

/// Decodes the predefined XML entities.
pub fn decode_entities(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Parses a `/serverinfo` response into the running session id.
pub fn parse_current_game(body: &str) -> RemoteResult<u32> {
    check_root_status(body)?;
    parse_u32_tag(body, "currentgame")
}

/// Parses an `/applist` response, preserving the host's ordering.
pub fn parse_app_list(body: &str) -> RemoteResult<Vec<AppEntry>> {
    check_root_status(body)?;

    app_block_re()
        .captures_iter(body)
        .map(|caps| {
            let block = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let name = tag_value(block, "AppTitle")
                .ok_or_else(|| RemoteError::protocol("<App> entry without <AppTitle>"))?;
            let id = parse_u32_tag(block, "ID")?;
            Ok(AppEntry::new(id, decode_entities(name)))
        })
        .collect()
}

/// Parses a `/launch` response into the new session handle.
pub fn parse_launch(body: &str) -> RemoteResult<SessionHandle> {
    check_root_status(body)?;
    parse_u32_tag(body, "gamesession").map(SessionHandle)
}

/// Parses a `/resume` response; a zero result means the host refused.
pub fn parse_resume(body: &str) -> RemoteResult<()> {
    check_root_status(body)?;
    match parse_u32_tag(body, "resume")? {
        0 => Err(RemoteError::protocol("host refused to resume the session")),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "tests/response_tests.rs"]
mod tests;
