use std::time::Duration;

use crate::config::HttpClientConfig;

/// Build the outbound HTTP client shared by every provider.
///
/// Built once at start-up and injected; per-request timeouts are set by the
/// callers, the client only bounds connection setup.
///
/// # Features
/// - **Connection pooling**: idle connections are kept for 90s
/// - **Compression**: gzip responses are decoded transparently
/// - **HTTP/2**: negotiated when the endpoint supports it
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
pub fn build_http_client(config: &HttpClientConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .http2_adaptive_window(true)
        .gzip(true)
        .user_agent(config.user_agent.as_str())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::HeaderMap;
    use axum::routing::get;
    use tokio::net::TcpListener;

    #[test]
    fn test_client_initialization() {
        assert!(build_http_client(&HttpClientConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_client_sends_configured_user_agent() {
        let app = Router::new().route(
            "/ua",
            get(|headers: HeaderMap| async move {
                headers
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let config = HttpClientConfig {
            user_agent: "release-notifier/test".to_string(),
            ..Default::default()
        };
        let client = build_http_client(&config).unwrap();
        let body = client
            .get(format!("http://{}/ua", addr))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, "release-notifier/test");
    }
}
