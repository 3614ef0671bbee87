//! Descriptor for a standard (non-embedded) Type 1 font.
//!
//! A descriptor pairs one [`StandardFont`] with the [`TextEncoder`] used to
//! turn text into character codes, and produces the `/Font` dictionary that
//! a page's resources refer to.

use crate::error::Result;
use crate::objects::{Dictionary, Object};
use crate::text::afm::FontInfo;
use crate::text::{CharMetrics, SimpleEncoder, StandardFont, TextEncoder};
use std::fmt;
use std::sync::Arc;

/// A standard font plus its encoder.
///
/// The metrics table is shared by every descriptor of the same font; the
/// encoder is owned per descriptor but cheap to clone.
#[derive(Clone)]
pub struct StandardFontDescriptor {
    font: StandardFont,
    encoder: Arc<dyn TextEncoder>,
}

impl StandardFontDescriptor {
    /// Create a descriptor with the WinAnsi encoder.
    pub fn new(font: StandardFont) -> Self {
        Self::with_encoder(font, SimpleEncoder::win_ansi())
    }

    pub fn with_encoder(font: StandardFont, encoder: impl TextEncoder + 'static) -> Self {
        Self::with_shared_encoder(font, Arc::new(encoder))
    }

    /// Use an encoder that is shared with other descriptors.
    pub fn with_shared_encoder(font: StandardFont, encoder: Arc<dyn TextEncoder>) -> Self {
        tracing::debug!(
            font = font.pdf_name(),
            encoder = %encoder.name(),
            "created standard font descriptor"
        );
        Self { font, encoder }
    }

    pub fn courier() -> Self {
        Self::new(StandardFont::Courier)
    }

    pub fn courier_bold() -> Self {
        Self::new(StandardFont::CourierBold)
    }

    pub fn courier_oblique() -> Self {
        Self::new(StandardFont::CourierOblique)
    }

    pub fn courier_bold_oblique() -> Self {
        Self::new(StandardFont::CourierBoldOblique)
    }

    /// Replace the encoder. Metrics are unaffected.
    pub fn set_encoder(&mut self, encoder: impl TextEncoder + 'static) {
        tracing::debug!(
            font = self.font.pdf_name(),
            from = %self.encoder.name(),
            to = %encoder.name(),
            "replacing encoder"
        );
        self.encoder = Arc::new(encoder);
    }

    pub fn font(&self) -> StandardFont {
        self.font
    }

    /// The `/BaseFont` name.
    pub fn base_font(&self) -> &'static str {
        self.font.pdf_name()
    }

    pub fn font_info(&self) -> &'static FontInfo {
        self.font.font_info()
    }

    pub fn encoder(&self) -> &dyn TextEncoder {
        self.encoder.as_ref()
    }

    /// Metrics for a glyph of this font.
    ///
    /// The flag is `false`, with a zero record, when the font has no such
    /// glyph.
    pub fn glyph_char_metrics(&self, glyph: &str) -> (CharMetrics, bool) {
        let (metrics, found) = self.font.metrics().get(glyph);
        if !found {
            tracing::trace!(font = self.font.pdf_name(), glyph, "glyph not in font");
        }
        (metrics, found)
    }

    /// Metrics for a character code, resolved through the encoder.
    pub fn charcode_metrics(&self, code: u8) -> (CharMetrics, bool) {
        match self.encoder.charcode_to_glyph(code) {
            Some(glyph) => self.glyph_char_metrics(glyph.as_str()),
            None => (CharMetrics::default(), false),
        }
    }

    /// Width of `text` in text space units at `font_size`, after encoding.
    ///
    /// Codes without a glyph in this font contribute nothing.
    pub fn text_width(&self, text: &str, font_size: f64) -> f64 {
        let units: f64 = self
            .encoder
            .encode(text)
            .into_iter()
            .map(|code| self.charcode_metrics(code).0.wx)
            .sum();
        units * font_size / 1000.0
    }

    /// Build the font dictionary, wrapped as an indirect object.
    ///
    /// Fails only if the encoder cannot produce its `/Encoding` value.
    pub fn to_pdf_object(&self) -> Result<Object> {
        let encoding = self.encoder.to_pdf_object()?;

        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Font"));
        dict.set("Subtype", Object::name("Type1"));
        dict.set("BaseFont", Object::name(self.base_font()));
        dict.set("Encoding", encoding);
        Ok(Object::indirect(dict))
    }
}

impl Default for StandardFontDescriptor {
    fn default() -> Self {
        Self::courier()
    }
}

impl fmt::Debug for StandardFontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardFontDescriptor")
            .field("font", &self.font)
            .field("encoder", &self.encoder)
            .finish()
    }
}
