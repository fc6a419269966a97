use serde::{Deserialize, Serialize};

/// Coarse device class, driving which handoff mechanism is offered:
/// a wallet link list (mobile) or a scannable pairing code (desktop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    Desktop,
}

/// Operating-system family detected from the user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Ios,
    Android,
    Unknown,
}

/// Classification result for the current session.
///
/// Computed once per session from the ambient user-agent string and
/// immutable afterwards; never persisted. The default is the fail-open
/// state — desktop with an unknown OS — which routes the session to the
/// scannable-code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub platform: Platform,
    pub os: Os,
}

impl Default for DeviceDescriptor {
    fn default() -> Self {
        Self {
            platform: Platform::Desktop,
            os: Os::Unknown,
        }
    }
}

/// One platform's link pair for a wallet adapter.
///
/// An empty string means that link kind is not offered. A spec is usable
/// for its platform when at least one of the two fields is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSpec {
    /// HTTPS universal link, intercepted via platform domain association.
    pub universal: String,
    /// Custom URI scheme registered by the wallet (e.g. "trust:").
    pub native: String,
}

impl LinkSpec {
    pub fn usable(&self) -> bool {
        !self.universal.is_empty() || !self.native.is_empty()
    }
}

/// One candidate wallet application, as it appears in the adapter
/// registry JSON. Missing fields deserialize to empty, so a degraded
/// record (empty name, partial link specs) still parses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletAdapterRecord {
    /// Display identifier. Empty is tolerated as degraded-but-valid.
    pub name: String,
    /// Opaque handle to a visual asset.
    pub logo: String,
    pub mobile: LinkSpec,
    pub desktop: LinkSpec,
}

impl WalletAdapterRecord {
    /// The link spec for the given platform family.
    pub fn link_spec(&self, platform: Platform) -> &LinkSpec {
        match platform {
            Platform::Mobile => &self.mobile,
            Platform::Desktop => &self.desktop,
        }
    }

    /// Parse a JSON registry document into an ordered record collection.
    pub fn registry_from_json(json: &str) -> crate::Result<Vec<WalletAdapterRecord>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The resolved, renderable result for one adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationEntry {
    pub name: String,
    pub logo: String,
    pub universal_link: String,
    pub deep_link: String,
    /// The single URL the UI navigates to when this entry is selected.
    /// Empty only in the degenerate state where an iOS entry offers
    /// neither link kind; the presentation layer must treat an empty
    /// href as non-actionable rather than navigating.
    pub href: String,
}
