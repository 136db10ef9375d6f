use reqwest::header::CONTENT_TYPE;

use super::report;
use super::result::ProbeResult;
use crate::config::page_context::PageContext;
use crate::resolver::build_url;

/// Probe the API for connectivity with a single GET request.
///
/// Sends one request to the endpoint resolved against the page context and
/// reports the outcome as a [`ProbeResult`]; this never fails, a request
/// that does not complete comes back as a result with `error` populated.
/// Timeout policy belongs to the passed client. Concurrent probes are
/// independent, nothing is shared between calls.
pub async fn probe_connection(
    client: &reqwest::Client,
    ctx: &PageContext,
    endpoint: &str,
) -> ProbeResult {
    let url = build_url(ctx, endpoint);
    log::debug!("probing API connection: {url}");

    let response = client
        .get(&url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await;

    match response {
        Ok(resp) => {
            let status = resp.status();
            ProbeResult {
                success: status.is_success(),
                status: Some(status.as_u16()),
                status_text: Some(status.canonical_reason().unwrap_or("").to_string()),
                error: None,
                url,
            }
        }
        Err(err) => ProbeResult {
            success: false,
            status: None,
            status_text: None,
            error: Some(report(&err)),
            url,
        },
    }
}
