use serde_json::Value;
use thiserror::Error;

/// Failure of a single client call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connect, DNS, reset or body-read failure; no usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. Displays exactly the server's detail, or
    /// `HTTP <status>` when the body carried none.
    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },

    /// 2xx response whose body is not the expected record.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(d) => d.clone(),
        None => format!("HTTP {status}"),
    }
}

/// Extract the human-readable detail from an error body.
///
/// Only a JSON object carries a detail: `{"detail": "msg"}` or the list form
/// `{"detail": [{"msg": "..."}, ...]}`, whose messages are joined with `"; "`.
fn parse_detail(body: &[u8]) -> Option<String> {
    let parsed: Value = serde_json::from_slice(body).ok()?;
    let text = match parsed.as_object()?.get("detail")? {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

impl ClientError {
    /// Build the error for a non-2xx `status` from the raw response body.
    pub fn from_status_body(status: u16, body: &[u8]) -> Self {
        ClientError::Status { status, detail: parse_detail(body) }
    }

    /// HTTP status of a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::Decode(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The message shown to users.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_verbatim() {
        let err = ClientError::from_status_body(404, br#"{"detail":"Customer not found"}"#);
        assert_eq!(err.message(), "Customer not found");
        assert_eq!(err.detail(), Some("Customer not found"));
        assert!(err.is_not_found());
    }

    #[test]
    fn list_detail_is_joined() {
        let body = br#"{"detail":[{"loc":["body","year"],"msg":"year too small"},{"msg":"price missing"}]}"#;
        let err = ClientError::from_status_body(422, body);
        assert_eq!(err.message(), "year too small; price missing");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn unusable_bodies_fall_back_to_status_code() {
        for body in [
            &b""[..],
            b"Internal Server Error",
            b"{}",
            br#"{"detail":""}"#,
            br#"{"detail":null}"#,
            br#"{"detail":42}"#,
            br#"{"detail":[]}"#,
            br#"["detail"]"#,
            br#"["Customer not found"]"#,
            br#""Customer not found""#,
        ] {
            let err = ClientError::from_status_body(500, body);
            assert_eq!(err.message(), "HTTP 500", "body {:?}", String::from_utf8_lossy(body));
            assert_eq!(err.detail(), None);
        }
    }

    #[test]
    fn decode_errors_have_no_status() {
        let json_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ClientError::from(json_err);
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
        assert!(err.message().starts_with("unexpected response body"));
    }
}
