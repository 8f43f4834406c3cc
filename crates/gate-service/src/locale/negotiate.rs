//! `Accept-Language` negotiation against the supported locale set.
//!
//! Implements the quality-value rules from RFC 9110 §12.4.2 / §12.5.4: entries
//! are ranked by descending `q` (header order breaks ties), `q=0` entries are
//! excluded, and matching is case-insensitive with a primary-subtag fallback
//! (`en-US` matches `en`, bare `zh` matches the first supported `zh-*` tag).

use super::Locale;

/// Weights are carried as integer thousandths to keep ordering total.
const DEFAULT_WEIGHT: u16 = 1000;

/// Pick the best supported locale for an `Accept-Language` header value.
///
/// Returns `None` when the header is absent, malformed, or names no supported
/// language; callers fall back to the source default.
pub fn negotiate(header: Option<&str>, supported: &[Locale]) -> Option<Locale> {
    let header = header?;

    let mut ranked: Vec<(u16, usize, &str)> = Vec::new();
    for (position, entry) in header.split(',').enumerate() {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or("").trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }
        let weight = parts.find_map(parse_weight).unwrap_or(DEFAULT_WEIGHT);
        if weight == 0 {
            continue;
        }
        ranked.push((weight, position, tag));
    }

    // Descending weight; stable on header position for equal weights.
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    for (_, _, tag) in &ranked {
        if let Some(locale) = match_tag(tag, supported) {
            return Some(locale);
        }
    }
    None
}

/// Parse a `q=0.9` parameter into thousandths. Malformed parameters are
/// ignored (the entry keeps the default weight).
fn parse_weight(param: &str) -> Option<u16> {
    let (key, value) = param.trim().split_once('=')?;
    if !key.trim().eq_ignore_ascii_case("q") {
        return None;
    }
    let q: f32 = value.trim().parse().ok()?;
    if !(0.0..=1.0).contains(&q) {
        return None;
    }
    Some((q * 1000.0) as u16)
}

fn match_tag(tag: &str, supported: &[Locale]) -> Option<Locale> {
    // Exact tag match first.
    if let Some(locale) = supported
        .iter()
        .find(|l| l.accept_tag().eq_ignore_ascii_case(tag))
    {
        return Some(*locale);
    }

    // Primary-subtag fallback in both directions: a request for `zh` matches
    // the first supported `zh-*`, and a request for `en-US` matches `en`.
    let primary = tag.split('-').next().unwrap_or(tag);
    supported
        .iter()
        .find(|l| {
            let supported_primary = l.accept_tag().split('-').next().unwrap_or(l.accept_tag());
            supported_primary.eq_ignore_ascii_case(primary)
        })
        .copied()
}
