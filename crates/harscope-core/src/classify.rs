//! Coarse resource type from a MIME string, for captures without `_resourceType`.

/// Classifies a MIME type as image, script, stylesheet, document, xhr, or other.
///
/// Case-insensitive; the first matching rule wins.
pub fn infer_resource_type(mime: &str) -> &'static str {
    if mime.is_empty() {
        return "other";
    }
    let m = mime.to_ascii_lowercase();
    if m.starts_with("image/") {
        "image"
    } else if m.contains("javascript") || m.ends_with("/js") {
        "script"
    } else if m.contains("css") {
        "stylesheet"
    } else if m.contains("html") {
        "document"
    } else if m.contains("json") {
        "xhr"
    } else {
        "other"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_types() {
        assert_eq!(infer_resource_type("image/png"), "image");
        assert_eq!(infer_resource_type("application/javascript"), "script");
        assert_eq!(infer_resource_type("text/js"), "script");
        assert_eq!(infer_resource_type("text/css"), "stylesheet");
        assert_eq!(infer_resource_type("text/html; charset=utf-8"), "document");
        assert_eq!(infer_resource_type("application/json; charset=utf-8"), "xhr");
        assert_eq!(infer_resource_type("font/woff2"), "other");
        assert_eq!(infer_resource_type(""), "other");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(infer_resource_type("IMAGE/SVG+XML"), "image");
        assert_eq!(infer_resource_type("Text/HTML"), "document");
    }

    #[test]
    fn earlier_rule_wins() {
        // image/ prefix beats the html substring.
        assert_eq!(infer_resource_type("image/html-preview"), "image");
        // javascript beats json.
        assert_eq!(infer_resource_type("application/json+javascript"), "script");
    }
}
