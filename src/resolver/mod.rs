use crate::config::page_context::PageContext;

/// Port the development API server listens on. Local pages are served from
/// whatever port the dev server picked, the API itself is always here.
pub const DEV_API_PORT: u16 = 5000;

/// Hostnames treated as local development. Exact matches only, other
/// loopback addresses pass through like any production host.
const LOCAL_HOSTNAMES: [&str; 3] = ["localhost", "127.0.0.1", "0.0.0.0"];

/// Resolve the API base URL for the given page context.
///
/// On a local development hostname the page origin's port is forced to
/// [`DEV_API_PORT`], whether or not the origin carried one. Any other
/// origin is returned unchanged, an explicit port included.
pub fn resolve_base_url(ctx: &PageContext) -> String {
    if LOCAL_HOSTNAMES.contains(&ctx.hostname.as_str()) {
        format!("{}://{}:{}", ctx.scheme, ctx.hostname, DEV_API_PORT)
    } else {
        ctx.origin()
    }
}

/// Compose a full API URL from the resolved base and an endpoint path.
///
/// A missing leading slash is added; nothing else is validated or encoded,
/// query strings pass through as-is.
pub fn build_url(ctx: &PageContext, endpoint: &str) -> String {
    let base = resolve_base_url(ctx);
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}
