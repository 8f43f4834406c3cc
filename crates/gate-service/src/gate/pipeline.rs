//! The five-step gate pipeline.

use super::classify::{classify, split_first_segment, RouteClass};
use super::{GateConfig, GateOutcome};
use crate::errors::GateError;
use crate::locale::{negotiate, Locale};
use crate::session::SessionStore;
use axum::http::{header, HeaderMap};

/// Decide what to do with a request. First match wins; the only await is the
/// session lookup, reached on protected paths alone.
pub async fn decide(
    config: &GateConfig,
    path: &str,
    headers: &HeaderMap,
    sessions: &dyn SessionStore,
) -> Result<GateOutcome, GateError> {
    let current = cookie_locale_value(headers, &config.cookie_name);

    match classify(config, path) {
        RouteClass::Excluded => Ok(GateOutcome::Delegate),

        RouteClass::StaticAsset => Ok(GateOutcome::PassThrough { cookie: None }),

        // Canonicalization runs before the locale-presence check so the
        // hyphenated and underscored spellings cannot redirect into each
        // other.
        RouteClass::NonCanonical(locale) => {
            let (_, rest) = split_first_segment(path);
            Ok(GateOutcome::Redirect {
                path: format!("/{locale}{rest}"),
                cookie: cookie_update(current.as_deref(), locale),
            })
        }

        RouteClass::Unlocalized => {
            let locale = resolve_preference(config, current.as_deref(), headers);
            Ok(GateOutcome::Redirect {
                path: format!("/{locale}{path}"),
                cookie: cookie_update(current.as_deref(), locale),
            })
        }

        RouteClass::Protected(locale) => {
            let cookie = cookie_update(current.as_deref(), locale);
            if sessions.lookup(headers).await?.is_some() {
                Ok(GateOutcome::PassThrough { cookie })
            } else {
                tracing::debug!(
                    target: "gate.pipeline",
                    path,
                    "no session on protected path, bouncing to locale home"
                );
                Ok(GateOutcome::Redirect {
                    path: format!("/{locale}/"),
                    cookie,
                })
            }
        }

        RouteClass::Public(locale) => Ok(GateOutcome::PassThrough {
            cookie: cookie_update(current.as_deref(), locale),
        }),
    }
}

/// Locale preference for a path with no locale segment:
/// cookie, then negotiated `Accept-Language`, then the source default.
fn resolve_preference(
    config: &GateConfig,
    cookie_value: Option<&str>,
    headers: &HeaderMap,
) -> Locale {
    if let Some(locale) = cookie_value
        .and_then(Locale::from_canonical)
        .filter(|l| config.supported.contains(l))
    {
        return locale;
    }

    let accept = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    negotiate(accept, &config.supported).unwrap_or(config.source)
}

/// A cookie update is issued only when the resolved locale differs from the
/// request's current cookie value.
fn cookie_update(current: Option<&str>, resolved: Locale) -> Option<Locale> {
    (current != Some(resolved.as_str())).then_some(resolved)
}

/// Raw value of the locale cookie, across however many `Cookie` headers the
/// client sent.
fn cookie_locale_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        let Ok(raw) = header_value.to_str() else {
            continue;
        };
        for pair in raw.split(';') {
            if let Some((key, value)) = pair.split_once('=') {
                if key.trim() == name {
                    return Some(value.trim().to_string());
                }
            }
        }
    }
    None
}
