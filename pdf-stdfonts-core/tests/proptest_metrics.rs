//! Property-based tests for glyph metrics and encoders
//!
//! Lookups must never fail, and encoders must agree with themselves in both
//! directions.

use pdf_stdfonts::text::{
    BaseEncoding, CharMetrics, DifferencesEncoder, GlyphMetricsTable, SimpleEncoder, StandardFont,
    TextEncoder,
};
use pdf_stdfonts::StandardFontDescriptor;
use proptest::prelude::*;

fn font_strategy() -> impl Strategy<Value = StandardFont> {
    prop::sample::select(StandardFont::ALL.to_vec())
}

fn base_encoding_strategy() -> impl Strategy<Value = BaseEncoding> {
    prop_oneof![
        Just(BaseEncoding::StandardEncoding),
        Just(BaseEncoding::WinAnsiEncoding),
        Just(BaseEncoding::MacRomanEncoding),
    ]
}

prop_compose! {
    fn char_metrics_strategy()(
        name in "[A-Za-z][A-Za-z0-9._]{0,20}",
        wx in 0.0f64..2000.0,
        wy in -100.0f64..100.0
    ) -> CharMetrics {
        CharMetrics::new(name, wx, wy)
    }
}

proptest! {
    #[test]
    fn test_unknown_glyph_lookup_is_not_found(
        font in font_strategy(),
        suffix in "[a-z0-9]{1,12}"
    ) {
        // Bundled glyph names never contain '#'.
        let glyph = format!("missing#{suffix}");
        let (metrics, found) = StandardFontDescriptor::new(font).glyph_char_metrics(&glyph);
        prop_assert!(!found);
        prop_assert_eq!(metrics, CharMetrics::default());
    }

    #[test]
    fn test_lookup_is_consistent_with_contains(font in font_strategy(), glyph in "\\PC{0,16}") {
        let table = font.metrics();
        let (metrics, found) = table.get(&glyph);
        prop_assert_eq!(found, table.contains(&glyph));
        if found {
            prop_assert_eq!(metrics.glyph_name.as_str(), glyph.as_str());
        }
    }

    #[test]
    fn test_table_returns_what_it_was_built_from(
        records in prop::collection::vec(char_metrics_strategy(), 0..50)
    ) {
        let table = GlyphMetricsTable::from_metrics(records.clone());
        for record in &records {
            let (metrics, found) = table.get(record.glyph_name.as_str());
            prop_assert!(found);
            prop_assert_eq!(&metrics.glyph_name, &record.glyph_name);
        }
        prop_assert!(table.len() <= records.len());
    }

    #[test]
    fn test_defined_codes_round_trip(base in base_encoding_strategy(), code in any::<u8>()) {
        let encoder = SimpleEncoder::new(base);
        if let Some(ch) = encoder.charcode_to_char(code) {
            let back = encoder.char_to_charcode(ch).unwrap();
            // Duplicate glyphs resolve to the lowest code.
            prop_assert!(back <= code);
            prop_assert_eq!(encoder.charcode_to_char(back), Some(ch));
        }
    }

    #[test]
    fn test_encode_never_panics_and_keeps_length(base in base_encoding_strategy(), text in "\\PC{0,64}") {
        let encoder = SimpleEncoder::new(base);
        let bytes = encoder.encode(&text);
        prop_assert_eq!(bytes.len(), text.chars().count());
    }

    #[test]
    fn test_differences_take_precedence(
        base in base_encoding_strategy(),
        code in any::<u8>(),
        glyph in "[A-Za-z][A-Za-z0-9]{0,15}"
    ) {
        let encoder = DifferencesEncoder::new(base).with_difference(code, glyph.as_str());
        prop_assert_eq!(
            encoder.charcode_to_glyph(code).map(|g| g.to_string()),
            Some(glyph.clone())
        );
        // A base code below the override may carry the same glyph.
        let found = encoder.glyph_to_charcode(&glyph);
        prop_assert!(found.is_some_and(|c| c <= code));
        prop_assert_eq!(
            found.and_then(|c| encoder.charcode_to_glyph(c)).map(|g| g.to_string()),
            Some(glyph.clone())
        );
        prop_assert!(encoder.to_pdf_object().is_ok());
    }

    #[test]
    fn test_font_object_is_stable(font in font_strategy(), base in base_encoding_strategy()) {
        let descriptor = StandardFontDescriptor::with_encoder(font, SimpleEncoder::new(base));
        let first = descriptor.to_pdf_object().unwrap();
        let second = descriptor.to_pdf_object().unwrap();
        prop_assert!(first.is_indirect());
        prop_assert_eq!(first, second);
    }
}
