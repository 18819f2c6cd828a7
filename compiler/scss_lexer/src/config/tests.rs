use super::*;

#[test]
fn default_is_strict_and_tokenizes_interpolation() {
    let config = LexerConfig::default();
    assert!(config.require_semicolon);
    assert_eq!(config.interpolation, InterpolationBody::Tokens);
}

#[test]
fn builders_compose() {
    let config = LexerConfig::lenient().with_interpolation(InterpolationBody::Opaque);
    assert!(!config.require_semicolon);
    assert_eq!(config.interpolation, InterpolationBody::Opaque);
    assert_eq!(
        config.with_require_semicolon(true),
        LexerConfig::default().with_interpolation(InterpolationBody::Opaque)
    );
}
