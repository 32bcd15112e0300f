//! Best-effort favicon discovery for the store's web domain.
//!
//! The lookup is decorative: every failure is logged at `debug` and turned
//! into `None`.

use std::time::Duration;

/// Placeholder used when no favicon could be found.
pub const FAVICON_PLACEHOLDER: &str = "?";

/// Upper bound on the favicon request, connection included.
pub const FAVICON_TIMEOUT: Duration = Duration::from_secs(5);

/// Returns the origin (`scheme://host[:port]`) for a store domain.
///
/// Bare host names are assumed to be served over `https`.
///
/// # Example
///
/// ```rust
/// use tebex_api::favicon::origin_for;
///
/// assert_eq!(origin_for("shop.example.com").as_deref(), Some("https://shop.example.com"));
/// assert_eq!(origin_for("http://127.0.0.1:8080/store").as_deref(), Some("http://127.0.0.1:8080"));
/// assert_eq!(origin_for("  "), None);
/// ```
#[must_use]
pub fn origin_for(domain: &str) -> Option<String> {
    let domain = domain.trim();
    if domain.is_empty() {
        return None;
    }

    let (scheme, rest) = domain
        .split_once("://")
        .unwrap_or(("https", domain));
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if scheme.is_empty() || authority.is_empty() {
        return None;
    }

    Some(format!("{scheme}://{authority}"))
}

/// Looks up the favicon URL for a store domain.
///
/// Requests `{origin}/favicon.ico` and returns its URL if the server answers
/// with a 2xx status within [`FAVICON_TIMEOUT`]. Never fails.
pub async fn discover(transport: &reqwest::Client, domain: &str) -> Option<String> {
    discover_within(transport, domain, FAVICON_TIMEOUT).await
}

/// Same as [`discover`] with an explicit time limit.
pub async fn discover_within(
    transport: &reqwest::Client,
    domain: &str,
    timeout: Duration,
) -> Option<String> {
    let Some(origin) = origin_for(domain) else {
        tracing::debug!(domain, "No usable domain for favicon lookup");
        return None;
    };
    let url = format!("{origin}/favicon.ico");

    match transport.get(&url).timeout(timeout).send().await {
        Ok(response) if response.status().is_success() => Some(url),
        Ok(response) => {
            tracing::debug!(%url, status = response.status().as_u16(), "Favicon not found");
            None
        }
        Err(error) => {
            tracing::debug!(%url, %error, "Favicon lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_strips_path_and_query() {
        assert_eq!(
            origin_for("https://store.example.com/category/1?x=y").as_deref(),
            Some("https://store.example.com")
        );
    }

    #[test]
    fn test_origin_rejects_empty_authority() {
        assert_eq!(origin_for("https://"), None);
        assert_eq!(origin_for("://example.com"), None);
    }

    #[tokio::test]
    async fn test_slow_favicon_gives_up_after_timeout() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/favicon.ico"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&server)
            .await;

        let transport = reqwest::Client::new();
        let started = std::time::Instant::now();
        let found = discover_within(&transport, &server.uri(), Duration::from_millis(200)).await;

        assert_eq!(found, None);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_discover_without_domain_is_none() {
        let transport = reqwest::Client::new();
        assert_eq!(discover(&transport, "").await, None);
    }
}
