//! # pairlink-resolve
//!
//! Device-aware link resolution for wallet pairing sessions. Classifies
//! the invoking device from its user-agent string, then resolves the
//! wallet-adapter registry into either a scannable pairing code (desktop)
//! or an ordered list of platform-correct activation links (mobile).
//!
//! Everything here is a pure, synchronous transformation over its inputs:
//! no I/O, no ambient state, no failure path. Hosts recompute the whole
//! handoff whenever the session URI, registry, or user agent changes and
//! swap in the new result atomically.

pub mod classifier;
pub mod link;
pub mod registry;

pub use classifier::{ClassifyDevice, UaClassifier};
pub use link::format_activation_href;
pub use registry::resolve_registry;

use pairlink_core::{ActivationEntry, Platform, WalletAdapterRecord};

/// What the presentation layer should render for this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffTarget {
    /// Desktop session: render the session URI as a scannable code.
    ScanCode { uri: String },
    /// Mobile session: render the resolved wallet activation links.
    WalletLinks { entries: Vec<ActivationEntry> },
}

/// Resolve the full handoff for one pairing session.
///
/// Classification runs once over the given user agent. Desktop sessions
/// hand the unmodified session URI to code rendering and never touch the
/// registry; mobile sessions resolve the registry for the detected OS.
pub fn resolve_handoff(
    classifier: &impl ClassifyDevice,
    user_agent: &str,
    registry: &[WalletAdapterRecord],
    uri: &str,
) -> HandoffTarget {
    let device = classifier.classify(user_agent);
    match device.platform {
        Platform::Desktop => HandoffTarget::ScanCode {
            uri: uri.to_string(),
        },
        Platform::Mobile => HandoffTarget::WalletLinks {
            entries: resolve_registry(registry, uri, device.os, device.platform),
        },
    }
}
