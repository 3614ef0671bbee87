use crate::error::{PdfError, Result};
use crate::text::afm::{parse_afm, AfmFont, FontInfo};
use crate::text::GlyphMetricsTable;
use std::fmt;
use std::str::FromStr;

/// Standard Type 1 fonts that readers provide without embedding.
///
/// Each variant owns its own metrics table, parsed from the bundled AFM
/// resource on first use and shared read-only for the rest of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    /// Courier (monospace)
    Courier,
    /// Courier Bold
    CourierBold,
    /// Courier Oblique
    CourierOblique,
    /// Courier Bold Oblique
    CourierBoldOblique,
}

const COURIER_AFM: &str = include_str!("../../afm/Courier.afm");
const COURIER_BOLD_AFM: &str = include_str!("../../afm/Courier-Bold.afm");
const COURIER_OBLIQUE_AFM: &str = include_str!("../../afm/Courier-Oblique.afm");
const COURIER_BOLD_OBLIQUE_AFM: &str = include_str!("../../afm/Courier-BoldOblique.afm");

fn load_bundled(font: StandardFont, source: &str) -> AfmFont {
    match parse_afm(source) {
        Ok(afm) => {
            tracing::debug!(
                font = font.pdf_name(),
                glyphs = afm.metrics.len(),
                "loaded standard font metrics"
            );
            afm
        }
        // The resources are compiled in; a parse failure is a packaging bug.
        Err(e) => panic!("bundled AFM for {} is malformed: {e}", font.pdf_name()),
    }
}

lazy_static::lazy_static! {
    static ref COURIER: AfmFont = load_bundled(StandardFont::Courier, COURIER_AFM);
    static ref COURIER_BOLD: AfmFont = load_bundled(StandardFont::CourierBold, COURIER_BOLD_AFM);
    static ref COURIER_OBLIQUE: AfmFont =
        load_bundled(StandardFont::CourierOblique, COURIER_OBLIQUE_AFM);
    static ref COURIER_BOLD_OBLIQUE: AfmFont =
        load_bundled(StandardFont::CourierBoldOblique, COURIER_BOLD_OBLIQUE_AFM);
}

impl StandardFont {
    /// Every supported variant.
    pub const ALL: [StandardFont; 4] = [
        StandardFont::Courier,
        StandardFont::CourierBold,
        StandardFont::CourierOblique,
        StandardFont::CourierBoldOblique,
    ];

    /// Canonical PostScript name, used as `/BaseFont`.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    pub fn from_pdf_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|font| font.pdf_name() == name)
    }

    /// Pick the Courier face for a style.
    pub fn courier(bold: bool, oblique: bool) -> Self {
        match (bold, oblique) {
            (false, false) => StandardFont::Courier,
            (true, false) => StandardFont::CourierBold,
            (false, true) => StandardFont::CourierOblique,
            (true, true) => StandardFont::CourierBoldOblique,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, StandardFont::CourierBold | StandardFont::CourierBoldOblique)
    }

    pub fn is_oblique(&self) -> bool {
        matches!(
            self,
            StandardFont::CourierOblique | StandardFont::CourierBoldOblique
        )
    }

    fn afm(&self) -> &'static AfmFont {
        match self {
            StandardFont::Courier => &COURIER,
            StandardFont::CourierBold => &COURIER_BOLD,
            StandardFont::CourierOblique => &COURIER_OBLIQUE,
            StandardFont::CourierBoldOblique => &COURIER_BOLD_OBLIQUE,
        }
    }

    /// The process-wide glyph metrics of this font.
    pub fn metrics(&self) -> &'static GlyphMetricsTable {
        &self.afm().metrics
    }

    /// Font-wide values such as the bounding box and ascender.
    pub fn font_info(&self) -> &'static FontInfo {
        &self.afm().info
    }
}

impl FromStr for StandardFont {
    type Err = PdfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_pdf_name(s)
            .ok_or_else(|| PdfError::FontError(format!("{s} is not a supported standard font")))
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pdf_name())
    }
}
