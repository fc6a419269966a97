use pairlink_core::{ActivationEntry, Os, Platform, WalletAdapterRecord};
use tracing::debug;

use crate::link::format_activation_href;

/// Resolve the adapter registry into the ordered activation-entry list
/// for the detected platform.
///
/// Records without a usable link spec for the platform are silently
/// dropped; every surviving record yields exactly one entry, in input
/// order. Zero entries is a valid outcome and renders as an empty
/// selectable list.
pub fn resolve_registry(
    registry: &[WalletAdapterRecord],
    uri: &str,
    os: Os,
    platform: Platform,
) -> Vec<ActivationEntry> {
    let entries: Vec<ActivationEntry> = registry
        .iter()
        .filter(|record| record.link_spec(platform).usable())
        .map(|record| {
            let spec = record.link_spec(platform);
            ActivationEntry {
                name: record.name.clone(),
                logo: record.logo.clone(),
                universal_link: spec.universal.clone(),
                deep_link: spec.native.clone(),
                href: format_activation_href(uri, &spec.universal, &spec.native, os),
            }
        })
        .collect();
    debug!(
        total = registry.len(),
        resolved = entries.len(),
        "resolved adapter registry"
    );
    entries
}
