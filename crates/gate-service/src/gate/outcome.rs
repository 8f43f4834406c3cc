//! The gate's result type.

use crate::locale::Locale;

/// What the gate decided for a request.
///
/// A tagged outcome rather than a response mutated across branches, so the
/// middleware's handling of the pipeline stays exhaustive under `match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Hand the request to the auth-middleware delegate unchanged.
    Delegate,
    /// 307 redirect to `path` (relative; the middleware absolutizes against
    /// the request origin). `cookie` carries a locale preference update, set
    /// only when it differs from the request's current cookie value.
    Redirect {
        path: String,
        cookie: Option<Locale>,
    },
    /// Continue to the next handler, optionally updating the locale cookie.
    PassThrough { cookie: Option<Locale> },
}

impl GateOutcome {
    /// The locale cookie update this outcome carries, if any.
    pub fn cookie(&self) -> Option<Locale> {
        match self {
            GateOutcome::Delegate => None,
            GateOutcome::Redirect { cookie, .. } | GateOutcome::PassThrough { cookie } => *cookie,
        }
    }
}
