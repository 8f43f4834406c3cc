//! The request gate: locale canonicalization plus authentication gating.
//!
//! Every inbound request passes through a single five-step pipeline:
//!
//! 1. Excluded-path check (auth/API/asset infrastructure is delegated).
//! 2. Hyphenated-locale canonicalization (`/zh-CN/x` -> `/zh_CN/x`).
//! 3. Locale insertion for paths without a locale segment.
//! 4. Session enforcement on protected prefixes.
//! 5. Pass-through.
//!
//! The pipeline is a pure decision function over the request path, headers,
//! and an injected session store; executing its [`GateOutcome`] is the
//! middleware layer's job.

mod classify;
mod outcome;
mod pipeline;

pub use classify::{classify, RouteClass};
pub use outcome::GateOutcome;
pub use pipeline::decide;

use crate::locale::Locale;

/// Locale cookie lifetime: one year.
pub const COOKIE_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 365;

/// Immutable gate configuration, injected at construction time.
///
/// Kept off module-level statics so tests can build variants freely.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Supported locales, in negotiation preference order.
    pub supported: Vec<Locale>,
    /// Default locale when no preference is resolvable.
    pub source: Locale,
    /// Name of the locale preference cookie.
    pub cookie_name: String,
    /// Cookie lifetime in seconds.
    pub cookie_max_age: u32,
    /// Path remainders (after the locale segment) that require a session.
    pub protected: Vec<String>,
}

impl GateConfig {
    /// The HelloCity production configuration.
    pub fn hello_city() -> Self {
        Self {
            supported: Locale::ALL.to_vec(),
            source: Locale::En,
            cookie_name: "lang".to_string(),
            cookie_max_age: COOKIE_MAX_AGE_SECS,
            protected: vec![
                "assistant".to_string(),
                "profile".to_string(),
                "create-user-profile".to_string(),
            ],
        }
    }

    /// `Set-Cookie` value persisting a locale preference.
    ///
    /// Deliberately not `HttpOnly`: the browser UI reads the cookie to pick
    /// the initial language without a round trip.
    pub fn cookie_value(&self, locale: Locale) -> String {
        format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            self.cookie_name, locale, self.cookie_max_age
        )
    }
}
