use crate::error::{PdfError, Result};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A PostScript glyph name such as `A`, `ampersand` or `zero`.
///
/// Names follow the Adobe Glyph List convention and are compared by
/// exact, case-sensitive equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GlyphName(String);

impl GlyphName {
    pub fn new(name: impl Into<String>) -> Self {
        GlyphName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the name can be written as a PDF name token without escaping.
    ///
    /// Rejects empty names, whitespace, delimiters and `#`.
    pub fn is_valid_pdf_name(&self) -> bool {
        !self.0.is_empty()
            && self.0.bytes().all(|b| {
                b.is_ascii_graphic()
                    && !matches!(
                        b,
                        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#'
                    )
            })
    }
}

/// Parses and validates; use [`GlyphName::new`] to skip the check.
impl FromStr for GlyphName {
    type Err = PdfError;

    fn from_str(s: &str) -> Result<Self> {
        let name = GlyphName::from(s);
        if name.is_valid_pdf_name() {
            Ok(name)
        } else {
            Err(PdfError::InvalidGlyphName(s.to_string()))
        }
    }
}

impl fmt::Display for GlyphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for GlyphName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GlyphName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GlyphName {
    fn from(name: &str) -> Self {
        GlyphName(name.to_string())
    }
}

impl From<String> for GlyphName {
    fn from(name: String) -> Self {
        GlyphName(name)
    }
}

impl PartialEq<str> for GlyphName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for GlyphName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
