//! Excluded paths bypass the gate and go to the auth-middleware delegate.

use gate_test_utils::{StaticSessions, MarkerDelegate, TestGateServer, DELEGATE_MARKER_HEADER};
use reqwest::StatusCode;
use std::sync::Arc;

/// Auth, API, and framework paths are always delegated, never locale-redirected.
#[tokio::test]
async fn infrastructure_paths_are_delegated() -> Result<(), anyhow::Error> {
    let delegate = MarkerDelegate::new();
    let server =
        TestGateServer::spawn_with(Arc::new(StaticSessions::anonymous()), delegate).await?;

    let paths = [
        "/api/auth/login",
        "/auth/callback",
        "/api/users",
        "/_next/static/css/app.css",
        "/icon",
        "/icon.svg",
    ];

    for path in paths {
        let response = server
            .client()
            .get(format!("{}{path}", server.url()))
            .send()
            .await?;

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(
            response
                .headers()
                .get(DELEGATE_MARKER_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("handled"),
            "{path} should be answered by the delegate"
        );
        assert!(
            response.headers().get("location").is_none(),
            "{path} must not be locale-redirected"
        );
    }

    assert_eq!(server.delegate().seen(), paths);

    Ok(())
}

/// Delegation happens before any locale logic: a locale preference cookie
/// does not produce a Set-Cookie on delegated traffic.
#[tokio::test]
async fn delegated_responses_carry_no_locale_cookie() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/auth/callback?code=abc", server.url()))
        .header("cookie", "lang=ja")
        .send()
        .await?;

    assert!(response.headers().get("set-cookie").is_none());

    Ok(())
}

/// The delegate's response is returned unchanged, body included.
#[tokio::test]
async fn delegate_response_is_opaque() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/api/users", server.url()))
        .send()
        .await?;

    assert_eq!(response.text().await?, "delegated");

    Ok(())
}

/// Well-known static paths pass through without delegation or redirect.
#[tokio::test]
async fn static_paths_pass_through_untouched() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    for path in ["/favicon.ico", "/robots.txt", "/sitemap.xml", "/images/logo.png"] {
        let response = server
            .client()
            .get(format!("{}{path}", server.url()))
            .send()
            .await?;

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(response.headers().get("location").is_none(), "{path}");
        assert!(response.headers().get(DELEGATE_MARKER_HEADER).is_none(), "{path}");
        assert!(response.headers().get("set-cookie").is_none(), "{path}");
    }

    assert!(server.delegate().seen().is_empty());

    Ok(())
}
