//! Full per-entry detail: summary plus the raw request/response sections.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::normalize::CanonicalEntry;

use super::body::decode_text;
use super::summary::{summary, EntrySummary};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetail {
    pub url: Option<Value>,
    pub method: Option<Value>,
    pub http_version: Option<Value>,
    pub headers: Value,
    pub cookies: Value,
    pub query_string: Value,
    pub headers_size: Option<Value>,
    pub body_size: Option<Value>,
    pub post_data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetail {
    pub size: Option<Value>,
    pub mime_type: Option<Value>,
    /// Body text; base64 content is decoded (lossy UTF-8).
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDetail {
    pub status: Option<Value>,
    pub status_text: Option<Value>,
    pub http_version: Option<Value>,
    pub headers: Value,
    pub cookies: Value,
    #[serde(rename = "redirectURL")]
    pub redirect_url: Option<Value>,
    pub headers_size: Option<Value>,
    pub body_size: Option<Value>,
    pub content: ContentDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDetail {
    pub summary: EntrySummary,
    pub request: RequestDetail,
    pub response: ResponseDetail,
    pub timings: Value,
    #[serde(rename = "serverIPAddress")]
    pub server_ip_address: Option<Value>,
    pub connection: Option<Value>,
    pub started_date_time: Option<Value>,
    pub time: Option<Value>,
    pub resource_type: String,
    pub priority: Option<String>,
    pub initiator: Option<Value>,
}

pub fn detail(entry: &CanonicalEntry) -> EntryDetail {
    let raw = &entry.raw;
    let req = raw.request();
    let resp = raw.response();
    let content = raw.content();

    EntryDetail {
        summary: summary(entry),
        request: RequestDetail {
            url: pass(req, "url"),
            method: pass(req, "method"),
            http_version: pass(req, "httpVersion"),
            headers: list(req, "headers"),
            cookies: list(req, "cookies"),
            query_string: list(req, "queryString"),
            headers_size: pass(req, "headersSize"),
            body_size: pass(req, "bodySize"),
            post_data: pass(req, "postData"),
        },
        response: ResponseDetail {
            status: pass(resp, "status"),
            status_text: pass(resp, "statusText"),
            http_version: pass(resp, "httpVersion"),
            headers: list(resp, "headers"),
            cookies: list(resp, "cookies"),
            redirect_url: pass(resp, "redirectURL"),
            headers_size: pass(resp, "headersSize"),
            body_size: pass(resp, "bodySize"),
            content: ContentDetail {
                size: pass(content, "size"),
                mime_type: pass(content, "mimeType"),
                text: decode_text(content),
            },
        },
        timings: raw
            .timings()
            .map(|t| Value::Object(t.clone()))
            .unwrap_or_else(|| Value::Object(Map::new())),
        server_ip_address: raw.get("serverIPAddress").cloned(),
        connection: raw.get("connection").cloned(),
        started_date_time: raw.get("startedDateTime").cloned(),
        time: raw.get("time").cloned(),
        resource_type: entry.resource_type.clone(),
        priority: entry.priority.clone(),
        initiator: entry.initiator.clone(),
    }
}

fn pass(map: Option<&Map<String, Value>>, key: &str) -> Option<Value> {
    map.and_then(|m| m.get(key)).cloned()
}

/// Array field, or `[]` when missing.
fn list(map: Option<&Map<String, Value>>, key: &str) -> Value {
    pass(map, key).unwrap_or_else(|| Value::Array(Vec::new()))
}
