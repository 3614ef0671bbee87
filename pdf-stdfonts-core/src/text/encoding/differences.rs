use super::{glyph_to_char, BaseEncoding, TextEncoder};
use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object};
use crate::text::GlyphName;
use std::collections::BTreeMap;

/// A base encoding modified by a `/Differences` array.
///
/// Written as `<< /Type /Encoding /BaseEncoding /.. /Differences [..] >>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferencesEncoder {
    base: BaseEncoding,
    differences: BTreeMap<u8, GlyphName>,
}

impl DifferencesEncoder {
    pub fn new(base: BaseEncoding) -> Self {
        Self {
            base,
            differences: BTreeMap::new(),
        }
    }

    /// Builder form of [`set_difference`](Self::set_difference).
    pub fn with_difference(mut self, code: u8, glyph: impl Into<GlyphName>) -> Self {
        self.set_difference(code, glyph);
        self
    }

    /// Map `code` to `glyph`, replacing the base encoding's glyph.
    ///
    /// Names are checked when the encoding is written, not here.
    pub fn set_difference(&mut self, code: u8, glyph: impl Into<GlyphName>) {
        self.differences.insert(code, glyph.into());
    }

    pub fn base(&self) -> BaseEncoding {
        self.base
    }

    pub fn differences(&self) -> impl Iterator<Item = (u8, &GlyphName)> {
        self.differences.iter().map(|(code, glyph)| (*code, glyph))
    }

    /// Read an `/Encoding` dictionary.
    ///
    /// A missing `/BaseEncoding` means StandardEncoding.
    pub fn from_pdf_object(object: &Object) -> Result<Self> {
        let dict = object.resolve().as_dict().ok_or_else(|| {
            PdfError::EncodingError("encoding object is not a dictionary".to_string())
        })?;

        let base = match dict.get("BaseEncoding") {
            None => BaseEncoding::StandardEncoding,
            Some(obj) => obj
                .as_name()
                .and_then(BaseEncoding::from_pdf_name)
                .ok_or_else(|| {
                    PdfError::EncodingError(format!("unsupported BaseEncoding {obj:?}"))
                })?,
        };

        let mut encoder = Self::new(base);
        let Some(differences) = dict.get("Differences") else {
            return Ok(encoder);
        };
        let items = differences.as_array().ok_or_else(|| {
            PdfError::EncodingError("Differences is not an array".to_string())
        })?;

        let mut code: Option<i64> = None;
        for item in items {
            match item {
                Object::Integer(start) => code = Some(*start),
                Object::Name(glyph) => {
                    let current = code.ok_or_else(|| {
                        PdfError::EncodingError(format!(
                            "glyph /{glyph} before any code in Differences"
                        ))
                    })?;
                    let byte = u8::try_from(current).map_err(|_| {
                        PdfError::EncodingError(format!("code {current} out of range"))
                    })?;
                    encoder.set_difference(byte, glyph.as_str());
                    code = Some(current + 1);
                }
                other => {
                    return Err(PdfError::EncodingError(format!(
                        "unexpected {other:?} in Differences"
                    )))
                }
            }
        }

        Ok(encoder)
    }

    /// `[code /name /name ... code /name ...]` with consecutive codes in one run.
    fn differences_array(&self) -> Result<Vec<Object>> {
        let mut array = Vec::new();
        let mut next: Option<u8> = None;
        for (&code, glyph) in &self.differences {
            if !glyph.is_valid_pdf_name() {
                return Err(PdfError::EncodingError(format!(
                    "invalid glyph name {:?} at code {code}",
                    glyph.as_str()
                )));
            }
            if next != Some(code) {
                array.push(Object::from(code));
            }
            array.push(Object::name(glyph.as_str()));
            next = code.checked_add(1);
        }
        Ok(array)
    }
}

impl TextEncoder for DifferencesEncoder {
    fn name(&self) -> String {
        format!("{} with {} differences", self.base, self.differences.len())
    }

    fn charcode_to_glyph(&self, code: u8) -> Option<GlyphName> {
        match self.differences.get(&code) {
            Some(glyph) => Some(glyph.clone()),
            None => self.base.glyph(code).map(GlyphName::from),
        }
    }

    /// Lowest code whose effective glyph is `glyph`, override or base.
    fn glyph_to_charcode(&self, glyph: &str) -> Option<u8> {
        (0..=255u8).find(|code| match self.differences.get(code) {
            Some(overridden) => overridden == glyph,
            None => self.base.glyph(*code) == Some(glyph),
        })
    }

    fn charcode_to_char(&self, code: u8) -> Option<char> {
        match self.differences.get(&code) {
            Some(glyph) => glyph_to_char(glyph.as_str()),
            None => self.base.char(code),
        }
    }

    fn char_to_charcode(&self, ch: char) -> Option<u8> {
        (0..=255u8).find(|code| self.charcode_to_char(*code) == Some(ch))
    }

    fn to_pdf_object(&self) -> Result<Object> {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Encoding"));
        dict.set("BaseEncoding", Object::name(self.base.pdf_name()));
        dict.set("Differences", self.differences_array()?);
        Ok(Object::Dictionary(dict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn euro_at_128() -> DifferencesEncoder {
        DifferencesEncoder::new(BaseEncoding::StandardEncoding)
            .with_difference(128, "Euro")
            .with_difference(129, "Scaron")
            .with_difference(39, "quotesingle")
    }

    #[test]
    fn test_differences_override_base() {
        let enc = euro_at_128();
        assert_eq!(enc.charcode_to_glyph(128), Some(GlyphName::from("Euro")));
        assert_eq!(enc.charcode_to_glyph(39), Some(GlyphName::from("quotesingle")));
        assert_eq!(enc.charcode_to_glyph(65), Some(GlyphName::from("A")));
        assert_eq!(enc.charcode_to_glyph(0x80 + 2), None);
    }

    #[test]
    fn test_overridden_base_code_is_not_reused() {
        let enc = euro_at_128();
        // StandardEncoding puts quoteright at 39, which is now quotesingle.
        assert_eq!(enc.glyph_to_charcode("quoteright"), None);
        assert_eq!(enc.glyph_to_charcode("quotesingle"), Some(39));
        assert_eq!(enc.glyph_to_charcode("Euro"), Some(128));
        assert_eq!(enc.glyph_to_charcode("A"), Some(65));
    }

    #[test]
    fn test_duplicate_glyph_resolves_to_lowest_code() {
        let enc = DifferencesEncoder::new(BaseEncoding::WinAnsiEncoding)
            .with_difference(0x81, "A")
            .with_difference(0x20, "bullet");
        assert_eq!(enc.glyph_to_charcode("A"), Some(0x41));
        assert_eq!(enc.glyph_to_charcode("bullet"), Some(0x20));
        // WinAnsi space also sits at 0xA0, which is not overridden.
        assert_eq!(enc.glyph_to_charcode("space"), Some(0xA0));
    }

    #[test]
    fn test_extended_latin_override_encodes() {
        let enc = DifferencesEncoder::new(BaseEncoding::WinAnsiEncoding)
            .with_difference(0x81, "Amacron")
            .with_difference(0x8D, "scedilla");
        assert_eq!(enc.encode("\u{0100}\u{015F}"), vec![0x81, 0x8D]);
        assert_eq!(enc.charcode_to_char(0x81), Some('\u{0100}'));
        assert_eq!(enc.decode(&[0x81, 0x8D]), "\u{0100}\u{015F}");
    }

    #[test]
    fn test_chars_follow_glyphs() {
        let enc = euro_at_128();
        assert_eq!(enc.charcode_to_char(128), Some('€'));
        assert_eq!(enc.charcode_to_char(129), Some('Š'));
        assert_eq!(enc.char_to_charcode('€'), Some(128));
        assert_eq!(enc.encode("A€"), vec![65, 128]);
        assert_eq!(enc.decode(&[65, 128]), "A€");
    }

    #[test]
    fn test_pdf_object_collapses_runs() {
        let obj = euro_at_128().to_pdf_object().unwrap();
        let dict = obj.as_dict().unwrap();

        assert_eq!(dict.get_name("Type"), Some("Encoding"));
        assert_eq!(dict.get_name("BaseEncoding"), Some("StandardEncoding"));
        assert_eq!(
            dict.get("Differences"),
            Some(&Object::Array(vec![
                Object::Integer(39),
                Object::name("quotesingle"),
                Object::Integer(128),
                Object::name("Euro"),
                Object::name("Scaron"),
            ]))
        );
    }

    #[test]
    fn test_run_does_not_wrap_past_255() {
        let enc = DifferencesEncoder::new(BaseEncoding::WinAnsiEncoding)
            .with_difference(255, "a")
            .with_difference(0, "b");
        let obj = enc.to_pdf_object().unwrap();
        assert_eq!(
            obj.as_dict().unwrap().get("Differences"),
            Some(&Object::Array(vec![
                Object::Integer(0),
                Object::name("b"),
                Object::Integer(255),
                Object::name("a"),
            ]))
        );
    }

    #[test]
    fn test_invalid_glyph_name_fails_serialization() {
        let enc = DifferencesEncoder::new(BaseEncoding::WinAnsiEncoding).with_difference(65, "");
        match enc.to_pdf_object() {
            Err(PdfError::EncodingError(msg)) => assert!(msg.contains("65")),
            other => panic!("expected EncodingError, got {other:?}"),
        }

        let enc =
            DifferencesEncoder::new(BaseEncoding::WinAnsiEncoding).with_difference(66, "two words");
        assert!(enc.to_pdf_object().is_err());
    }

    #[test]
    fn test_from_pdf_object_reads_runs() {
        let original = euro_at_128();
        let parsed = DifferencesEncoder::from_pdf_object(&original.to_pdf_object().unwrap()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_from_pdf_object_defaults_to_standard_base() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Encoding"));
        dict.set(
            "Differences",
            vec![Object::Integer(32), Object::name("bullet")],
        );

        let enc = DifferencesEncoder::from_pdf_object(&Object::indirect(dict)).unwrap();
        assert_eq!(enc.base(), BaseEncoding::StandardEncoding);
        assert_eq!(enc.charcode_to_glyph(32), Some(GlyphName::from("bullet")));
    }

    #[test]
    fn test_from_pdf_object_rejects_malformed() {
        let not_dict = Object::name("WinAnsiEncoding");
        assert!(DifferencesEncoder::from_pdf_object(&not_dict).is_err());

        let mut glyph_first = Dictionary::new();
        glyph_first.set("Differences", vec![Object::name("A")]);
        assert!(DifferencesEncoder::from_pdf_object(&Object::Dictionary(glyph_first)).is_err());

        let mut out_of_range = Dictionary::new();
        out_of_range.set("Differences", vec![Object::Integer(256), Object::name("A")]);
        assert!(DifferencesEncoder::from_pdf_object(&Object::Dictionary(out_of_range)).is_err());

        let mut bad_base = Dictionary::new();
        bad_base.set("BaseEncoding", Object::name("MacExpertEncoding"));
        assert!(DifferencesEncoder::from_pdf_object(&Object::Dictionary(bad_base)).is_err());
    }

    #[test]
    fn test_name_mentions_base() {
        assert_eq!(euro_at_128().name(), "StandardEncoding with 3 differences");
    }
}
