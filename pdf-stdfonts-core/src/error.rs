use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Font error: {0}")]
    FontError(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Invalid glyph name: {0:?}")]
    InvalidGlyphName(String),

    #[error("AFM parse error at line {line}: {message}")]
    AfmParseError { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, PdfError>;
