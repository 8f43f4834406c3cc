//! Path classification for the gate pipeline.

use super::GateConfig;
use crate::locale::Locale;

/// Prefixes handed to the auth-middleware delegate before any locale logic.
/// A locale redirect on these would break OAuth callbacks and asset caching.
const EXCLUDED_PREFIXES: [&str; 3] = ["/auth", "/api/", "/_next/"];

/// Well-known static paths the gate leaves untouched (served locally, never
/// locale-prefixed and never delegated).
const STATIC_EXACT: [&str; 3] = ["/favicon.ico", "/sitemap.xml", "/robots.txt"];
const STATIC_PREFIXES: [&str; 2] = ["/images", "/fonts"];

/// The class a request path falls into, derived fresh per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Infrastructure path: delegate to the auth middleware, skip the gate.
    Excluded,
    /// Static asset path: pass through without locale handling.
    StaticAsset,
    /// First segment is a hyphenated spelling of a supported locale.
    NonCanonical(Locale),
    /// No supported locale in the first segment; one must be inserted.
    Unlocalized,
    /// Locale-prefixed path under a prefix that requires a session.
    Protected(Locale),
    /// Locale-prefixed path with no auth requirement.
    Public(Locale),
}

/// Classify a request path. Total: every path lands in exactly one class.
pub fn classify(config: &GateConfig, path: &str) -> RouteClass {
    if is_excluded(path) {
        return RouteClass::Excluded;
    }
    if is_static_asset(path) {
        return RouteClass::StaticAsset;
    }

    let (segment, rest) = split_first_segment(path);
    let Some(locale) = Locale::from_segment(segment) else {
        return RouteClass::Unlocalized;
    };
    if segment != locale.as_str() {
        return RouteClass::NonCanonical(locale);
    }

    // Prefix semantics, matching the front-end's route layout: `/en/profile`
    // also covers `/en/profile/edit`.
    let is_protected = rest
        .strip_prefix('/')
        .map(|remainder| {
            config
                .protected
                .iter()
                .any(|p| remainder.starts_with(p.as_str()))
        })
        .unwrap_or(false);

    if is_protected {
        RouteClass::Protected(locale)
    } else {
        RouteClass::Public(locale)
    }
}

fn is_excluded(path: &str) -> bool {
    EXCLUDED_PREFIXES.iter().any(|p| path.starts_with(p))
        || path == "/icon"
        || path.starts_with("/icon.")
}

fn is_static_asset(path: &str) -> bool {
    STATIC_EXACT.contains(&path)
        || STATIC_PREFIXES
            .iter()
            .any(|p| path == *p || path.starts_with(&format!("{p}/")))
}

/// Split `/seg/rest...` into `("seg", "/rest...")`. The remainder keeps its
/// leading slash; both halves are empty for `/`.
pub(crate) fn split_first_segment(path: &str) -> (&str, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    match trimmed.find('/') {
        Some(idx) => {
            let (seg, rest) = trimmed.split_at(idx);
            (seg, rest)
        }
        None => (trimmed, ""),
    }
}
