//! Access log format module
//!
//! Supports two formats:
//! - `combined` (Apache/Nginx combined format, the default)
//! - `common` (Common Log Format - CLF)

use chrono::Local;

/// Access log entry containing all request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
        }
    }

    /// Format the log entry according to the specified format.
    /// Unknown format names fall back to `combined`.
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            _ => self.format_combined(),
        }
    }

    fn request_line(&self) -> String {
        format!(
            "{} {}{} HTTP/{}",
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
        )
    }

    /// Apache/Nginx Combined Log Format
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.10".to_string(),
            "GET".to_string(),
            "/".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 53;
        entry
    }

    #[test]
    fn test_combined_format() {
        let mut entry = make_entry();
        entry.user_agent = Some("curl/8.5.0".to_string());

        let line = entry.format("combined");
        assert!(line.starts_with("192.168.1.10 - - ["));
        assert!(line.contains("\"GET / HTTP/1.1\" 200 53"));
        assert!(line.ends_with("\"-\" \"curl/8.5.0\""));
    }

    #[test]
    fn test_common_format() {
        let entry = make_entry();

        let line = entry.format("common");
        assert!(line.ends_with("\"GET / HTTP/1.1\" 200 53"));
        // CLF has no referer/user-agent fields
        assert!(!line.contains("\"-\""));
    }

    #[test]
    fn test_query_included_in_request_line() {
        let mut entry = make_entry();
        entry.query = Some("name=zeus".to_string());

        let line = entry.format("common");
        assert!(line.contains("\"GET /?name=zeus HTTP/1.1\""));
    }

    #[test]
    fn test_unknown_format_falls_back_to_combined() {
        let entry = make_entry();
        assert_eq!(entry.format("bogus"), entry.format("combined"));
    }
}
