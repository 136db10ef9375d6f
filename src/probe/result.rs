use serde::Serialize;

/// Outcome of a single connectivity probe.
///
/// Exactly one of the response fields (`status` + `status_text`) or `error`
/// is populated: the former whenever a response arrived, success status or
/// not, the latter when the request failed to complete at all. `url` always
/// holds the fully resolved URL that was probed.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(rename = "statusText", skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_fields_serialize_with_wire_names() {
        let result = ProbeResult {
            success: true,
            status: Some(200),
            status_text: Some("OK".to_string()),
            error: None,
            url: "http://localhost:5000/api/health".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["status"], 200);
        assert_eq!(json["statusText"], "OK");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_omits_response_fields() {
        let result = ProbeResult {
            success: false,
            status: None,
            status_text: None,
            error: Some("connection refused".to_string()),
            url: "http://localhost:5000/api/health".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("status").is_none());
        assert!(json.get("statusText").is_none());
        assert_eq!(json["error"], "connection refused");
        assert_eq!(json["url"], "http://localhost:5000/api/health");
    }
}
