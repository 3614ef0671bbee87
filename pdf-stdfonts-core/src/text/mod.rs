pub mod afm;
mod encoding;
mod font;
mod glyph;
mod metrics;
mod standard_font;

pub use afm::{parse_afm, AfmFont, FontInfo};
pub use encoding::{glyph_to_char, BaseEncoding, DifferencesEncoder, SimpleEncoder, TextEncoder};
pub use font::StandardFont;
pub use glyph::GlyphName;
pub use metrics::{CharMetrics, GlyphMetricsTable};
pub use standard_font::StandardFontDescriptor;
