use anyhow::{Context, anyhow};
use url::Url;

/// The page context the resolver operates against.
///
/// In a browser this would be `window.location`; here it is an explicit
/// value so the resolver has no hidden global coupling and can be exercised
/// without a real page. Holds the origin triple only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// URL scheme of the page origin, e.g. `http` or `https`.
    pub scheme: String,

    /// Hostname of the page origin.
    pub hostname: String,

    /// Explicit port of the page origin, if it carries one.
    pub port: Option<u16>,
}

impl PageContext {
    /// Parse a page context from an origin string such as
    /// `http://localhost:3000` or `https://example.com`.
    pub fn from_origin(origin: &str) -> anyhow::Result<Self> {
        let url = Url::parse(origin).with_context(|| format!("invalid page origin: {origin}"))?;
        let hostname = url
            .host_str()
            .ok_or_else(|| anyhow!("page origin has no host: {origin}"))?
            .to_string();

        Ok(Self {
            scheme: url.scheme().to_string(),
            hostname,
            port: url.port(),
        })
    }

    /// The origin as a string, `scheme://hostname[:port]`.
    pub fn origin(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.hostname, port),
            None => format!("{}://{}", self.scheme, self.hostname),
        }
    }
}
