//! Customization string codec
//!
//! A customization is base64 over `4 × N` bytes: every color as one
//! little-endian 32-bit ARGB word, in table order.

use crate::error::CustomizationError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use veneer_paint::Color;

const WORD: usize = 4;

/// Encode `colors` in iteration order
pub fn encode_customization<'a>(colors: impl IntoIterator<Item = &'a Color>) -> String {
    let bytes: Vec<u8> = colors
        .into_iter()
        .flat_map(|c| c.to_argb().to_le_bytes())
        .collect();
    STANDARD.encode(bytes)
}

/// Decode exactly `expected` colors
pub fn decode_customization(
    encoded: &str,
    expected: usize,
) -> Result<Vec<Color>, CustomizationError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    if bytes.len() != expected * WORD {
        return Err(CustomizationError::Length {
            expected: expected * WORD,
            actual: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(WORD)
        .map(|w| Color::from_argb(u32::from_le_bytes([w[0], w[1], w[2], w[3]])))
        .collect())
}
