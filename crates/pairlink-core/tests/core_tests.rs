#[cfg(test)]
mod tests {
    use pairlink_core::*;

    // ── Registry wire shape ────────────────────────────────────

    #[test]
    fn test_registry_from_json() {
        let json = r#"[
            {
                "name": "Trust",
                "logo": "https://registry.example/trust.png",
                "mobile": { "universal": "https://link.trustwallet.com", "native": "trust:" },
                "desktop": { "universal": "", "native": "" }
            },
            {
                "name": "Rainbow",
                "mobile": { "universal": "https://rnbwapp.com" }
            }
        ]"#;
        let registry = WalletAdapterRecord::registry_from_json(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry[0].name, "Trust");
        assert_eq!(registry[0].mobile.native, "trust:");
        assert!(registry[0].mobile.usable());
        assert!(!registry[0].desktop.usable());
        // Missing fields default to empty.
        assert_eq!(registry[1].logo, "");
        assert_eq!(registry[1].mobile.native, "");
        assert!(registry[1].mobile.usable());
    }

    #[test]
    fn test_degraded_record_still_parses() {
        let registry = WalletAdapterRecord::registry_from_json(r#"[{}]"#).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry[0].name, "");
        assert!(!registry[0].mobile.usable());
        assert!(!registry[0].desktop.usable());
    }

    #[test]
    fn test_malformed_registry_is_an_error() {
        let err = WalletAdapterRecord::registry_from_json("not json").unwrap_err();
        assert!(err.to_string().contains("registry parse error"));
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = WalletAdapterRecord {
            name: "Trust".into(),
            logo: "trust.png".into(),
            mobile: LinkSpec {
                universal: "https://link.trustwallet.com".into(),
                native: "trust:".into(),
            },
            desktop: LinkSpec::default(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let restored: WalletAdapterRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }

    // ── Link specs ─────────────────────────────────────────────

    #[test]
    fn test_link_spec_usable() {
        assert!(!LinkSpec::default().usable());
        assert!(
            LinkSpec {
                universal: "https://w.example".into(),
                native: "".into()
            }
            .usable()
        );
        assert!(
            LinkSpec {
                universal: "".into(),
                native: "w:".into()
            }
            .usable()
        );
    }

    #[test]
    fn test_link_spec_selection_by_platform() {
        let record = WalletAdapterRecord {
            mobile: LinkSpec {
                universal: "https://m.example".into(),
                native: String::new(),
            },
            desktop: LinkSpec {
                universal: String::new(),
                native: "d:".into(),
            },
            ..Default::default()
        };
        assert_eq!(record.link_spec(Platform::Mobile).universal, "https://m.example");
        assert_eq!(record.link_spec(Platform::Desktop).native, "d:");
    }

    // ── Device descriptor ──────────────────────────────────────

    #[test]
    fn test_device_descriptor_default_fails_open() {
        let d = DeviceDescriptor::default();
        assert_eq!(d.platform, Platform::Desktop);
        assert_eq!(d.os, Os::Unknown);
    }

    #[test]
    fn test_platform_os_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Mobile).unwrap(), "\"mobile\"");
        assert_eq!(serde_json::to_string(&Os::Ios).unwrap(), "\"ios\"");
        let os: Os = serde_json::from_str("\"android\"").unwrap();
        assert_eq!(os, Os::Android);
    }
}
