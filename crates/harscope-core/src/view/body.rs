//! Response body preview and download.
//!
//! HAR stores bodies in `response.content.text`, base64-encoded when
//! `content.encoding == "base64"`. Decoding failures fall back to the raw
//! text instead of failing the request.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::har::field_str;
use crate::normalize::CanonicalEntry;

/// Preview cap, in characters.
pub const PREVIEW_MAX_CHARS: usize = 200_000;

const DEFAULT_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPreview {
    pub mime_type: String,
    pub encoding: Option<String>,
    pub size: u64,
    pub truncated: bool,
    /// `data:` URL for images (base64 passthrough).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_binary: Option<bool>,
}

/// Decoded response body, ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDownload {
    /// `entry-<id>`.
    pub filename: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Builds a preview of the response body, capped at [`PREVIEW_MAX_CHARS`].
pub fn body_preview(entry: &CanonicalEntry) -> BodyPreview {
    let content = entry.raw.content();
    let mime_type = body_mime(content);
    let encoding = field_str(content, "encoding").map(str::to_string);

    let mut preview = BodyPreview {
        mime_type,
        encoding,
        size: entry.size,
        truncated: false,
        data_url: None,
        preview_text: None,
        is_binary: None,
    };
    let Some(text) = field_str(content, "text") else {
        return preview;
    };

    if is_base64(content) {
        match STANDARD.decode(text) {
            Ok(_) if preview.mime_type.to_ascii_lowercase().starts_with("image/") => {
                let (b64, truncated) = truncate_chars(text, PREVIEW_MAX_CHARS);
                preview.data_url = Some(format!("data:{};base64,{}", preview.mime_type, b64));
                preview.truncated = truncated;
                preview.is_binary = Some(true);
            }
            Ok(bytes) => {
                let decoded = String::from_utf8_lossy(&bytes);
                let (shown, truncated) = truncate_chars(&decoded, PREVIEW_MAX_CHARS);
                preview.preview_text = Some(shown.to_string());
                preview.truncated = truncated;
                preview.is_binary = Some(false);
            }
            Err(err) => {
                tracing::debug!("entry {}: base64 body did not decode: {}", entry.id, err);
                let (b64, truncated) = truncate_chars(text, PREVIEW_MAX_CHARS);
                preview.preview_text = Some(b64.to_string());
                preview.truncated = truncated;
                preview.is_binary = Some(true);
            }
        }
    } else {
        let (shown, truncated) = truncate_chars(text, PREVIEW_MAX_CHARS);
        preview.preview_text = Some(shown.to_string());
        preview.truncated = truncated;
        preview.is_binary = Some(false);
    }
    preview
}

/// Full response body bytes. Undecodable base64 is returned as its UTF-8 text.
pub fn body_download(entry: &CanonicalEntry) -> BodyDownload {
    let content = entry.raw.content();
    let data = match field_str(content, "text") {
        None => Vec::new(),
        Some(text) if is_base64(content) => STANDARD
            .decode(text)
            .unwrap_or_else(|_| text.as_bytes().to_vec()),
        Some(text) => text.as_bytes().to_vec(),
    };
    BodyDownload {
        filename: format!("entry-{}", entry.id),
        mime_type: body_mime(content),
        data,
    }
}

/// Body text for detail views: base64 decoded to lossy UTF-8, raw text on decode failure.
pub(crate) fn decode_text(content: Option<&Map<String, Value>>) -> Option<String> {
    let text = field_str(content, "text")?;
    if !is_base64(content) {
        return Some(text.to_string());
    }
    Some(match STANDARD.decode(text) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => text.to_string(),
    })
}

fn is_base64(content: Option<&Map<String, Value>>) -> bool {
    field_str(content, "encoding") == Some("base64")
}

fn body_mime(content: Option<&Map<String, Value>>) -> String {
    field_str(content, "mimeType")
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_MIME)
        .to_string()
}

/// First `max` characters of `s`, and whether anything was cut.
fn truncate_chars(s: &str, max: usize) -> (&str, bool) {
    match s.char_indices().nth(max) {
        Some((cut, _)) => (&s[..cut], true),
        None => (s, false),
    }
}
