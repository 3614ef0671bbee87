//! Single-byte text encoders for simple fonts.
//!
//! A [`TextEncoder`] maps byte codes to glyph names (and Unicode) and knows
//! how to describe itself as the `/Encoding` entry of a font dictionary.

mod differences;
mod tables;

pub use differences::DifferencesEncoder;

use crate::error::Result;
use crate::objects::Object;
use crate::text::GlyphName;
use std::collections::HashMap;
use std::fmt;
use tables::Entry;

/// The named base encodings a simple font can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseEncoding {
    /// StandardEncoding - Adobe standard Latin encoding
    StandardEncoding,
    /// WinAnsiEncoding - Windows ANSI encoding (CP1252)
    WinAnsiEncoding,
    /// MacRomanEncoding - Apple Macintosh Roman encoding
    MacRomanEncoding,
}

impl BaseEncoding {
    /// Get the PDF name for this encoding
    pub fn pdf_name(&self) -> &'static str {
        match self {
            BaseEncoding::StandardEncoding => "StandardEncoding",
            BaseEncoding::WinAnsiEncoding => "WinAnsiEncoding",
            BaseEncoding::MacRomanEncoding => "MacRomanEncoding",
        }
    }

    /// Parse a PDF encoding name.
    pub fn from_pdf_name(name: &str) -> Option<Self> {
        match name {
            "StandardEncoding" => Some(BaseEncoding::StandardEncoding),
            "WinAnsiEncoding" => Some(BaseEncoding::WinAnsiEncoding),
            "MacRomanEncoding" => Some(BaseEncoding::MacRomanEncoding),
            _ => None,
        }
    }

    fn table(&self) -> &'static CodeTable {
        match self {
            BaseEncoding::StandardEncoding => &STANDARD_TABLE,
            BaseEncoding::WinAnsiEncoding => &WIN_ANSI_TABLE,
            BaseEncoding::MacRomanEncoding => &MAC_ROMAN_TABLE,
        }
    }

    pub fn glyph(&self, code: u8) -> Option<&'static str> {
        self.table().codes[code as usize].map(|(name, _)| name)
    }

    pub fn char(&self, code: u8) -> Option<char> {
        self.table().codes[code as usize].map(|(_, ch)| ch)
    }

    /// Lowest code mapped to `glyph`.
    pub fn code_for_glyph(&self, glyph: &str) -> Option<u8> {
        self.table().by_glyph.get(glyph).copied()
    }

    /// Lowest code mapped to `ch`.
    pub fn code_for_char(&self, ch: char) -> Option<u8> {
        self.table().by_char.get(&ch).copied()
    }
}

impl fmt::Display for BaseEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pdf_name())
    }
}

/// A base encoding table with its reverse indexes.
struct CodeTable {
    codes: &'static [Entry; 256],
    by_glyph: HashMap<&'static str, u8>,
    by_char: HashMap<char, u8>,
}

impl CodeTable {
    fn build(codes: &'static [Entry; 256]) -> Self {
        let mut by_glyph = HashMap::new();
        let mut by_char = HashMap::new();
        for (code, entry) in codes.iter().enumerate() {
            if let Some((name, ch)) = entry {
                by_glyph.entry(*name).or_insert(code as u8);
                by_char.entry(*ch).or_insert(code as u8);
            }
        }
        Self {
            codes,
            by_glyph,
            by_char,
        }
    }
}

lazy_static::lazy_static! {
    static ref STANDARD_TABLE: CodeTable = CodeTable::build(&tables::STANDARD);
    static ref WIN_ANSI_TABLE: CodeTable = CodeTable::build(&tables::WIN_ANSI);
    static ref MAC_ROMAN_TABLE: CodeTable = CodeTable::build(&tables::MAC_ROMAN);

    static ref GLYPH_CHARS: HashMap<&'static str, char> = {
        let mut map = HashMap::new();
        for table in [&tables::WIN_ANSI, &tables::MAC_ROMAN, &tables::STANDARD] {
            for (name, ch) in table.iter().flatten() {
                map.entry(*name).or_insert(*ch);
            }
        }
        map.extend(tables::EXTENDED_GLYPHS.iter().copied());
        map
    };
}

/// Unicode value of a glyph name.
///
/// Knows every glyph of the base encodings, the rest of the bundled Courier
/// repertoire, and the `uniXXXX` and `uXXXX[XX]` forms.
pub fn glyph_to_char(glyph: &str) -> Option<char> {
    if let Some(ch) = GLYPH_CHARS.get(glyph) {
        return Some(*ch);
    }
    let hex = if let Some(hex) = glyph.strip_prefix("uni") {
        (hex.len() == 4).then_some(hex)?
    } else if let Some(hex) = glyph.strip_prefix('u') {
        (4..=6).contains(&hex.len()).then_some(hex)?
    } else {
        return None;
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Maps single-byte character codes to glyphs for a simple font.
pub trait TextEncoder: fmt::Debug + Send + Sync {
    /// Human-readable description, e.g. `WinAnsiEncoding`.
    fn name(&self) -> String;

    fn charcode_to_glyph(&self, code: u8) -> Option<GlyphName>;

    fn glyph_to_charcode(&self, glyph: &str) -> Option<u8>;

    fn charcode_to_char(&self, code: u8) -> Option<char>;

    fn char_to_charcode(&self, ch: char) -> Option<u8>;

    /// The value of the font dictionary's `/Encoding` entry.
    fn to_pdf_object(&self) -> Result<Object>;

    /// Encode text, replacing characters this encoding lacks with `?`.
    fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| {
                self.char_to_charcode(ch).unwrap_or_else(|| {
                    tracing::trace!(encoding = %self.name(), ?ch, "character not encodable");
                    b'?'
                })
            })
            .collect()
    }

    /// Decode bytes, using U+FFFD for undefined codes.
    fn decode(&self, data: &[u8]) -> String {
        data.iter()
            .map(|&code| self.charcode_to_char(code).unwrap_or('\u{FFFD}'))
            .collect()
    }
}

/// Encoder for one of the named base encodings, written as a bare name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleEncoder {
    base: BaseEncoding,
}

impl SimpleEncoder {
    pub fn new(base: BaseEncoding) -> Self {
        Self { base }
    }

    pub fn win_ansi() -> Self {
        Self::new(BaseEncoding::WinAnsiEncoding)
    }

    pub fn mac_roman() -> Self {
        Self::new(BaseEncoding::MacRomanEncoding)
    }

    pub fn standard() -> Self {
        Self::new(BaseEncoding::StandardEncoding)
    }

    pub fn base(&self) -> BaseEncoding {
        self.base
    }
}

impl Default for SimpleEncoder {
    fn default() -> Self {
        Self::win_ansi()
    }
}

impl TextEncoder for SimpleEncoder {
    fn name(&self) -> String {
        self.base.pdf_name().to_string()
    }

    fn charcode_to_glyph(&self, code: u8) -> Option<GlyphName> {
        self.base.glyph(code).map(GlyphName::from)
    }

    fn glyph_to_charcode(&self, glyph: &str) -> Option<u8> {
        self.base.code_for_glyph(glyph)
    }

    fn charcode_to_char(&self, code: u8) -> Option<char> {
        self.base.char(code)
    }

    fn char_to_charcode(&self, ch: char) -> Option<u8> {
        self.base.code_for_char(ch)
    }

    fn to_pdf_object(&self) -> Result<Object> {
        Ok(Object::name(self.base.pdf_name()))
    }
}
