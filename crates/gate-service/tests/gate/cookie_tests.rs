//! The `lang` cookie is set only when its value actually changes.

use gate_test_utils::TestGateServer;
use reqwest::StatusCode;

/// First visit with no cookie: the resolved locale is persisted with the
/// full attribute set (year-long, site-wide, Lax, readable by scripts).
#[tokio::test]
async fn resolved_locale_is_persisted_with_expected_attributes() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    assert_eq!(
        set_cookie,
        "lang=en; Path=/; Max-Age=31536000; SameSite=Lax"
    );
    assert!(
        !set_cookie.contains("HttpOnly"),
        "the UI reads this cookie client-side"
    );

    Ok(())
}

/// When the cookie already holds the resolved locale, no Set-Cookie is sent.
#[tokio::test]
async fn matching_cookie_is_not_reset() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/en/pricing", server.url()))
        .header("cookie", "lang=en")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().get("set-cookie").is_none(),
        "no redundant Set-Cookie when the value is unchanged"
    );

    Ok(())
}

/// Visiting a differently-localized path updates a stale cookie.
#[tokio::test]
async fn stale_cookie_is_updated_to_path_locale() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/ja/pricing", server.url()))
        .header("cookie", "lang=en")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        set_cookie.starts_with("lang=ja"),
        "expected lang=ja, got {set_cookie}"
    );

    Ok(())
}

/// The cookie is found even when other cookies surround it.
#[tokio::test]
async fn lang_cookie_is_parsed_among_other_cookies() -> Result<(), anyhow::Error> {
    let server = TestGateServer::spawn_anonymous().await?;

    let response = server
        .client()
        .get(format!("{}/about", server.url()))
        .header("cookie", "theme=dark; lang=ko; session=abc123")
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        location.ends_with("/ko/about"),
        "expected /ko/about, got {location}"
    );
    assert!(response.headers().get("set-cookie").is_none());

    Ok(())
}
