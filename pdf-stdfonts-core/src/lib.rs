//! # pdf-stdfonts
//!
//! Standard Type 1 font descriptors for PDF writers.
//!
//! ## Features
//!
//! - **Bundled metrics**: Glyph widths for the Courier family, parsed once from AFM data
//! - **Pluggable encoders**: WinAnsi, MacRoman and Standard encodings plus `/Differences`
//! - **Font dictionaries**: Serialize a descriptor to an indirect `/Font` object
//! - **Thread safe**: Descriptors and metric tables are `Send + Sync`
//!
//! ## Quick Start
//!
//! ```rust
//! use pdf_stdfonts::{Result, StandardFontDescriptor};
//!
//! # fn main() -> Result<()> {
//! let font = StandardFontDescriptor::courier_bold();
//!
//! // Look up a glyph; the flag tells a missing glyph from a zero-width one
//! let (metrics, found) = font.glyph_char_metrics("A");
//! assert!(found);
//! assert_eq!(metrics.wx, 600.0);
//!
//! // Build the font dictionary for a page's resources
//! let object = font.to_pdf_object()?;
//! assert!(object.is_indirect());
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom encodings
//!
//! ```rust
//! use pdf_stdfonts::text::{BaseEncoding, DifferencesEncoder, StandardFont, TextEncoder};
//! use pdf_stdfonts::StandardFontDescriptor;
//!
//! let encoder = DifferencesEncoder::new(BaseEncoding::WinAnsiEncoding)
//!     .with_difference(0x81, "bullet");
//! let font = StandardFontDescriptor::with_encoder(StandardFont::Courier, encoder);
//!
//! assert_eq!(font.encoder().encode("\u{2022}"), vec![0x81]);
//! ```
//!
//! ## Modules
//!
//! - [`text`] - Glyph metrics, encoders and the font descriptor
//! - [`objects`] - The PDF object values produced by serialization
//! - [`error`] - Error type shared by the crate

pub mod error;
pub mod objects;
pub mod text;

pub use error::{PdfError, Result};
pub use objects::{Dictionary, Object};
pub use text::{
    BaseEncoding, CharMetrics, DifferencesEncoder, GlyphMetricsTable, GlyphName, SimpleEncoder,
    StandardFont, StandardFontDescriptor, TextEncoder,
};

/// Current version of pdf-stdfonts
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
