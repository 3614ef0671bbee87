//! Tests for the built-in text encoders

use pdf_stdfonts::text::{
    glyph_to_char, BaseEncoding, DifferencesEncoder, GlyphName, SimpleEncoder, TextEncoder,
};
use pdf_stdfonts::Object;

#[test]
fn test_base_encodings_agree_on_ascii_letters() {
    let encoders = [
        SimpleEncoder::standard(),
        SimpleEncoder::win_ansi(),
        SimpleEncoder::mac_roman(),
    ];
    for encoder in encoders {
        for ch in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            let code = encoder.char_to_charcode(ch).unwrap();
            assert_eq!(code, ch as u8);
            assert_eq!(encoder.charcode_to_char(code), Some(ch));
        }
    }
}

#[test]
fn test_same_glyph_different_codes() {
    assert_eq!(SimpleEncoder::win_ansi().glyph_to_charcode("eacute"), Some(0xE9));
    assert_eq!(SimpleEncoder::mac_roman().glyph_to_charcode("eacute"), Some(0x8E));
    assert_eq!(SimpleEncoder::standard().glyph_to_charcode("eacute"), None);
}

#[test]
fn test_control_codes_are_undefined() {
    for encoder in [SimpleEncoder::win_ansi(), SimpleEncoder::mac_roman()] {
        for code in 0..0x20u8 {
            assert_eq!(encoder.charcode_to_glyph(code), None);
        }
    }
}

#[test]
fn test_decode_marks_undefined_codes() {
    let text = SimpleEncoder::win_ansi().decode(&[b'o', b'k', 0x81]);
    assert_eq!(text, "ok\u{FFFD}");
}

#[test]
fn test_encode_unmappable_characters() {
    let bytes = SimpleEncoder::win_ansi().encode("\u{3042}a");
    assert_eq!(bytes, b"?a");
}

#[test]
fn test_differences_round_trip_through_object() {
    let encoder = DifferencesEncoder::new(BaseEncoding::MacRomanEncoding)
        .with_difference(1, "Euro")
        .with_difference(2, "bullet")
        .with_difference(3, "uni2192");

    let object = encoder.to_pdf_object().unwrap();
    let parsed = DifferencesEncoder::from_pdf_object(&object).unwrap();
    assert_eq!(parsed, encoder);
    assert_eq!(parsed.charcode_to_char(3), Some('\u{2192}'));
    assert_eq!(parsed.charcode_to_glyph(2), Some(GlyphName::from("bullet")));
}

#[test]
fn test_encoders_as_trait_objects() {
    let encoders: Vec<Box<dyn TextEncoder>> = vec![
        Box::new(SimpleEncoder::win_ansi()),
        Box::new(DifferencesEncoder::new(BaseEncoding::WinAnsiEncoding).with_difference(0x41, "Alpha")),
    ];

    let names: Vec<_> = encoders.iter().map(|e| e.name()).collect();
    assert_eq!(names[0], "WinAnsiEncoding");
    assert!(names[1].starts_with("WinAnsiEncoding"));

    assert!(matches!(encoders[0].to_pdf_object(), Ok(Object::Name(_))));
    assert!(matches!(encoders[1].to_pdf_object(), Ok(Object::Dictionary(_))));
}

#[test]
fn test_glyph_to_char_forms() {
    assert_eq!(glyph_to_char("Aacute"), Some('\u{C1}'));
    assert_eq!(glyph_to_char("uni20AC"), Some('\u{20AC}'));
    assert_eq!(glyph_to_char("u1F600"), Some('\u{1F600}'));
    assert_eq!(glyph_to_char("notAGlyph"), None);
}
