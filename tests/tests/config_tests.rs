//! Loading agreement settings from TOML

use keyx_agreement::{AccessPolicy, AgreementConfig, KeyAgreementService, KeyAttributes};
use keyx_api::Error;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Settings {
    agreement: AgreementConfig,
    #[serde(default)]
    hardware: KeyAttributes,
}

#[test]
fn test_load_full_settings() {
    let settings: Settings = toml::from_str(
        r#"
        [agreement]
        shared_info = [107, 101, 121, 120]
        output_len = 48

        [hardware]
        permanent = true
        access = "when_unlocked"
        "#,
    )
    .unwrap();

    assert_eq!(settings.agreement.shared_info, b"keyx");
    assert_eq!(settings.agreement.output_len, 48);
    assert_eq!(
        settings.hardware,
        KeyAttributes {
            permanent: true,
            access: AccessPolicy::WhenUnlocked,
        }
    );

    let service = KeyAgreementService::software()
        .with_config(settings.agreement)
        .unwrap();
    assert_eq!(service.config().output_len, 48);
}

#[test]
fn test_missing_fields_take_defaults() {
    let settings: Settings = toml::from_str("[agreement]\n").unwrap();
    assert_eq!(settings.agreement, AgreementConfig::default());
    assert_eq!(settings.hardware, KeyAttributes::default());
    assert_eq!(
        settings.hardware.access,
        AccessPolicy::WhenPasscodeSetThisDeviceOnly
    );
}

#[test]
fn test_loaded_config_is_validated() {
    let settings: Settings = toml::from_str("[agreement]\noutput_len = 0\n").unwrap();
    let err = KeyAgreementService::software()
        .with_config(settings.agreement)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
}

#[test]
fn test_config_roundtrips_through_toml() {
    let config = AgreementConfig::default()
        .with_shared_info(vec![1u8, 2, 3])
        .with_output_len(40);
    let text = toml::to_string(&config).unwrap();
    let parsed: AgreementConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
