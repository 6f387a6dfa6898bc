//! Host and path extraction from entry URLs.

/// Host and path parts of a request URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    /// Host plus `:port` when the URL names a port explicitly.
    pub host: String,
    pub path: String,
}

/// Splits `url` into host and path. Unparseable URLs yield empty parts.
pub fn split_url(url: &str) -> UrlParts {
    let Ok(parsed) = url::Url::parse(url) else {
        return UrlParts::default();
    };
    let host = match (parsed.host_str(), parsed.port()) {
        (Some(h), Some(port)) => format!("{h}:{port}"),
        (Some(h), None) => h.to_string(),
        (None, _) => String::new(),
    };
    let path = if parsed.cannot_be_a_base() {
        String::new()
    } else {
        parsed.path().to_string()
    };
    UrlParts { host, path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_and_path() {
        let p = split_url("https://example.com/a/b.js?v=1#x");
        assert_eq!(p.host, "example.com");
        assert_eq!(p.path, "/a/b.js");
    }

    #[test]
    fn explicit_port_kept() {
        assert_eq!(split_url("http://localhost:8080/api").host, "localhost:8080");
        // Default ports are dropped by the URL parser.
        assert_eq!(split_url("https://example.com:443/").host, "example.com");
    }

    #[test]
    fn unparseable_or_hostless() {
        assert_eq!(split_url("not a url"), UrlParts::default());
        assert_eq!(split_url(""), UrlParts::default());
        assert_eq!(split_url("data:image/png;base64,AAAA").host, "");
        assert_eq!(split_url("data:image/png;base64,AAAA").path, "");
    }
}
