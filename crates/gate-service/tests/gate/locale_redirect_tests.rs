//! Locale insertion for paths without a locale segment: resolution precedence
//! is cookie, then `Accept-Language`, then the source default.

use gate_test_utils::TestGateServer;
use reqwest::StatusCode;

/// With no preference at all, the root redirects to the source default.
#[tokio::test]
async fn bare_root_redirects_to_default_locale() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        location.ends_with("/en/"),
        "expected redirect to /en/, got {location}"
    );

    Ok(())
}

/// `Accept-Language` negotiation picks the highest-quality supported tag and
/// the redirect uses its underscore form.
#[tokio::test]
async fn accept_language_drives_the_inserted_locale() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/create-user-profile", server.url()))
        .header("accept-language", "zh-CN,en;q=0.9")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        location.ends_with("/zh_CN/create-user-profile"),
        "expected /zh_CN/create-user-profile, got {location}"
    );

    Ok(())
}

/// The `lang` cookie outranks `Accept-Language`.
#[tokio::test]
async fn lang_cookie_beats_accept_language() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/pricing", server.url()))
        .header("cookie", "lang=ko")
        .header("accept-language", "ja")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        location.ends_with("/ko/pricing"),
        "expected /ko/pricing, got {location}"
    );

    Ok(())
}

/// An unsupported cookie value is ignored and negotiation takes over.
#[tokio::test]
async fn unsupported_cookie_falls_back_to_negotiation() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/about", server.url()))
        .header("cookie", "lang=fr")
        .header("accept-language", "ja;q=0.8,de;q=0.9")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        location.ends_with("/ja/about"),
        "expected /ja/about, got {location}"
    );

    Ok(())
}

/// Locale-prefixed paths are never redirected for locale reasons: applying
/// the gate to its own redirect target is a no-op.
#[tokio::test]
async fn localized_paths_are_idempotent() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    for path in ["/en/", "/zh_CN/pricing", "/zh_TW/", "/ja/about", "/ko"] {
        let response = server
            .client()
            .get(format!("{}{path}", server.url()))
            .send()
            .await?;

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(
            response.headers().get("location").is_none(),
            "{path} should not carry a Location header"
        );
    }

    Ok(())
}

/// Query strings survive the locale-insertion redirect.
#[tokio::test]
async fn query_string_is_preserved() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/pricing?plan=pro&ref=footer", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        location.ends_with("/en/pricing?plan=pro&ref=footer"),
        "expected query preserved, got {location}"
    );

    Ok(())
}

/// Non-GET methods keep their method across the hop: 307, never 302/303.
#[tokio::test]
async fn redirects_are_307_for_non_get_methods() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .post(format!("{}/contact", server.url()))
        .body("hello")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
