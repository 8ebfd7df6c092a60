//! 언어팩 로딩/폴백 및 embed 템플릿 치환 테스트.
use std::path::Path;

use fabia_unit_service::embed::{format_embed, EmbedError};
use fabia_unit_service::i18n::{load_translations, resolve_language};
use fabia_unit_service::quantity::{AreaScenario, QuantityKind};

#[test]
fn loads_english_pack() {
    let tr = load_translations(Path::new("locale"), "en");
    assert!(tr.conversion_result.contains_key("scientific"));
    assert!(tr.conversion_result.contains_key("funny"));
    assert_eq!(tr.message_for(QuantityKind::Mass), "Mass converted successfully.");
}

#[test]
fn loads_spanish_pack() {
    let tr = load_translations(Path::new("locale"), "es");
    assert_eq!(tr.message_for(QuantityKind::Mass), "Masa convertida correctamente.");
}

#[test]
fn unknown_language_falls_back_to_english() {
    let tr = load_translations(Path::new("locale"), "de");
    assert_eq!(tr.message_for(QuantityKind::Power), "Power converted successfully.");
}

#[test]
fn missing_locale_dir_falls_back_to_built_in_pack() {
    let tr = load_translations(Path::new("no_such_dir"), "en");
    assert!(tr.conversion_result.contains_key("scientific"));
}

#[test]
fn resolves_language_from_accept_language() {
    assert_eq!(resolve_language(Some("es,en;q=0.8")), "es");
    assert_eq!(resolve_language(Some("fr")), "fr");
    assert_eq!(resolve_language(Some("de-DE,de")), "en");
    assert_eq!(resolve_language(None), "en");
}

#[test]
fn embed_substitutes_placeholders() {
    let tr = load_translations(Path::new("locale"), "en");
    let html = format_embed(&tr, "scientific", 2110.0, "kg", 2.0, None).expect("format");
    assert!(html.starts_with("<p"));
    assert!(html.ends_with("</p>"));
    assert!(html.contains("2110 kg"));
    assert!(html.contains("2 Škoda Fabia units"));
    assert!(!html.contains("{result}"));
    assert!(!html.contains("{scenario}"));
}

#[test]
fn embed_includes_scenario_label() {
    let tr = load_translations(Path::new("locale"), "en");
    let html = format_embed(&tr, "scientific", 10000.0, "m2", 800.0, Some(AreaScenario::ParkingLot))
        .expect("format");
    assert!(html.contains("parking lot"));
}

#[test]
fn embed_unknown_style_is_an_error() {
    let tr = load_translations(Path::new("locale"), "en");
    let err = format_embed(&tr, "sarcastic", 1.0, "kg", 0.0, None).unwrap_err();
    assert!(matches!(err, EmbedError::UnknownStyle(_)));
}
