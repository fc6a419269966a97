use pairlink_core::{DeviceDescriptor, Os, Platform};
use tracing::debug;

/// Injected device-classification capability.
///
/// User-agent parsing sits behind a trait so the implementation is
/// swappable and the resolver can be driven with synthetic descriptors
/// in tests.
pub trait ClassifyDevice {
    /// Classify a raw user-agent string.
    ///
    /// Accepts any string, including malformed ones, and never panics.
    /// Must be deterministic over the input alone — no caching across
    /// different strings, no ambient state. Absence of reliable signals
    /// degrades to desktop/unknown.
    fn classify(&self, user_agent: &str) -> DeviceDescriptor;
}

/// Default classifier: case-insensitive token matching over the raw
/// user-agent string.
///
/// iPadOS 13+ Safari reports a Macintosh user agent; those sessions
/// classify as desktop and take the scannable-code path.
#[derive(Debug, Clone, Copy, Default)]
pub struct UaClassifier;

impl ClassifyDevice for UaClassifier {
    fn classify(&self, user_agent: &str) -> DeviceDescriptor {
        let ua = user_agent.to_ascii_lowercase();
        let descriptor = if ["iphone", "ipad", "ipod"].iter().any(|t| ua.contains(t)) {
            DeviceDescriptor {
                platform: Platform::Mobile,
                os: Os::Ios,
            }
        } else if ua.contains("android") {
            DeviceDescriptor {
                platform: Platform::Mobile,
                os: Os::Android,
            }
        } else if ua.contains("mobile") {
            // Mobile token with no recognizable OS (KaiOS, feature phones).
            DeviceDescriptor {
                platform: Platform::Mobile,
                os: Os::Unknown,
            }
        } else {
            DeviceDescriptor::default()
        };
        debug!(platform = ?descriptor.platform, os = ?descriptor.os, "classified user agent");
        descriptor
    }
}
