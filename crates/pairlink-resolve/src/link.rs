use pairlink_core::Os;

/// Produce the single activation URL for one wallet's link pair.
///
/// iOS has no generic intent-based interception, so it needs an explicit
/// `wc?uri=` callback appended to either the universal link or the custom
/// scheme, with the session URI fully percent-encoded so the `uri=` query
/// value round-trips exactly. The universal link wins when both are
/// present. Android and unclassified systems intercept the raw session
/// URI through their own registered scheme handling, so it passes through
/// unmodified.
///
/// Returns `""` only when an iOS target offers neither link kind.
pub fn format_activation_href(uri: &str, universal: &str, native: &str, os: Os) -> String {
    if os != Os::Ios {
        return uri.to_string();
    }
    let encoded = urlencoding::encode(uri);
    if !universal.is_empty() {
        return format!("{universal}/wc?uri={encoded}");
    }
    if !native.is_empty() {
        // Both "trust:" and "trust" scheme spellings exist in the wild;
        // a trailing colon gets the scheme-style "//" join.
        let join = if native.ends_with(':') { "//" } else { "/" };
        return format!("{native}{join}wc?uri={encoded}");
    }
    String::new()
}
