//! Adobe Font Metrics (AFM) reader.
//!
//! Only the global header keys and the `StartCharMetrics` section are read;
//! kerning, composites and anything after `EndCharMetrics` are skipped.

use crate::error::{PdfError, Result};
use crate::text::{CharMetrics, GlyphMetricsTable};

/// Font-wide values from an AFM header, in 1000-unit glyph space.
#[derive(Debug, Clone, PartialEq)]
pub struct FontInfo {
    pub font_name: String,
    pub full_name: Option<String>,
    pub family_name: Option<String>,
    pub weight: Option<String>,
    pub italic_angle: f64,
    pub is_fixed_pitch: bool,
    /// `[llx, lly, urx, ury]`
    pub font_bbox: [f64; 4],
    pub cap_height: Option<f64>,
    pub x_height: Option<f64>,
    pub ascender: Option<f64>,
    pub descender: Option<f64>,
    pub underline_position: Option<f64>,
    pub underline_thickness: Option<f64>,
    pub std_hw: Option<f64>,
    pub std_vw: Option<f64>,
}

/// A parsed AFM file.
#[derive(Debug, Clone)]
pub struct AfmFont {
    pub info: FontInfo,
    pub metrics: GlyphMetricsTable,
}

#[derive(Default)]
struct HeaderBuilder {
    font_name: Option<String>,
    full_name: Option<String>,
    family_name: Option<String>,
    weight: Option<String>,
    italic_angle: f64,
    is_fixed_pitch: bool,
    font_bbox: [f64; 4],
    cap_height: Option<f64>,
    x_height: Option<f64>,
    ascender: Option<f64>,
    descender: Option<f64>,
    underline_position: Option<f64>,
    underline_thickness: Option<f64>,
    std_hw: Option<f64>,
    std_vw: Option<f64>,
}

fn parse_error(line: usize, message: impl Into<String>) -> PdfError {
    PdfError::AfmParseError {
        line,
        message: message.into(),
    }
}

fn parse_number(line: usize, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| parse_error(line, format!("expected a number, found {value:?}")))
}

fn parse_numbers<const N: usize>(line: usize, value: &str) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    let mut parts = value.split_whitespace();
    for slot in out.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| parse_error(line, format!("expected {N} numbers in {value:?}")))?;
        *slot = parse_number(line, part)?;
    }
    Ok(out)
}

/// Parse one `C ... ; WX ... ; N ... ;` record.
fn parse_char_metrics(line: usize, text: &str) -> Result<CharMetrics> {
    let mut name = None;
    let mut wx = None;
    let mut wy = 0.0;

    for field in text.split(';') {
        let field = field.trim();
        let (key, value) = match field.split_once(char::is_whitespace) {
            Some((key, value)) => (key, value.trim()),
            None => (field, ""),
        };
        match key {
            "N" => name = Some(value.to_string()),
            "WX" | "W0X" => wx = Some(parse_number(line, value)?),
            "WY" | "W0Y" => wy = parse_number(line, value)?,
            "W" | "W0" => {
                let [x, y] = parse_numbers::<2>(line, value)?;
                wx = Some(x);
                wy = y;
            }
            _ => {}
        }
    }

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| parse_error(line, "character metrics without a glyph name"))?;
    let wx = wx.ok_or_else(|| parse_error(line, format!("no width for glyph {name}")))?;
    Ok(CharMetrics::new(name, wx, wy))
}

/// Parse AFM source text.
pub fn parse_afm(source: &str) -> Result<AfmFont> {
    let mut lines = source.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let mut last_line = match lines.find(|(_, l)| !l.is_empty()) {
        Some((n, l)) if l.starts_with("StartFontMetrics") => n,
        Some((n, _)) => return Err(parse_error(n, "missing StartFontMetrics")),
        None => return Err(parse_error(0, "empty AFM data")),
    };

    let mut header = HeaderBuilder::default();
    let mut glyphs = Vec::new();
    let mut expected: Option<usize> = None;
    let mut in_char_metrics = false;
    let mut saw_end = false;

    for (n, line) in lines {
        last_line = n;
        if line.is_empty() || line.starts_with("Comment") {
            continue;
        }
        if in_char_metrics {
            if line == "EndCharMetrics" {
                in_char_metrics = false;
                saw_end = true;
                break;
            }
            glyphs.push(parse_char_metrics(n, line)?);
            continue;
        }

        let (key, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let value = value.trim();
        match key {
            "FontName" => header.font_name = Some(value.to_string()),
            "FullName" => header.full_name = Some(value.to_string()),
            "FamilyName" => header.family_name = Some(value.to_string()),
            "Weight" => header.weight = Some(value.to_string()),
            "ItalicAngle" => header.italic_angle = parse_number(n, value)?,
            "IsFixedPitch" => header.is_fixed_pitch = value == "true",
            "FontBBox" => header.font_bbox = parse_numbers::<4>(n, value)?,
            "CapHeight" => header.cap_height = Some(parse_number(n, value)?),
            "XHeight" => header.x_height = Some(parse_number(n, value)?),
            "Ascender" => header.ascender = Some(parse_number(n, value)?),
            "Descender" => header.descender = Some(parse_number(n, value)?),
            "UnderlinePosition" => header.underline_position = Some(parse_number(n, value)?),
            "UnderlineThickness" => header.underline_thickness = Some(parse_number(n, value)?),
            "StdHW" => header.std_hw = Some(parse_number(n, value)?),
            "StdVW" => header.std_vw = Some(parse_number(n, value)?),
            "StartCharMetrics" => {
                let count = value
                    .parse::<usize>()
                    .map_err(|_| parse_error(n, format!("bad glyph count {value:?}")))?;
                expected = Some(count);
                in_char_metrics = true;
            }
            "EndFontMetrics" => break,
            _ => {}
        }
    }

    if in_char_metrics {
        return Err(parse_error(last_line, "unterminated StartCharMetrics section"));
    }
    if saw_end {
        if let Some(count) = expected.filter(|count| *count != glyphs.len()) {
            return Err(parse_error(
                last_line,
                format!("StartCharMetrics announced {count} glyphs, found {}", glyphs.len()),
            ));
        }
    }

    let font_name = header
        .font_name
        .ok_or_else(|| parse_error(last_line, "missing FontName"))?;

    Ok(AfmFont {
        info: FontInfo {
            font_name,
            full_name: header.full_name,
            family_name: header.family_name,
            weight: header.weight,
            italic_angle: header.italic_angle,
            is_fixed_pitch: header.is_fixed_pitch,
            font_bbox: header.font_bbox,
            cap_height: header.cap_height,
            x_height: header.x_height,
            ascender: header.ascender,
            descender: header.descender,
            underline_position: header.underline_position,
            underline_thickness: header.underline_thickness,
            std_hw: header.std_hw,
            std_vw: header.std_vw,
        },
        metrics: GlyphMetricsTable::from_metrics(glyphs),
    })
}
