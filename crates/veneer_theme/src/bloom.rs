//! Named color entries

use veneer_paint::{Brush, Color, Pen};

/// A named color with pens and brushes derived on demand
#[derive(Clone, Debug, PartialEq)]
pub struct Bloom {
    pub name: String,
    pub value: Color,
}

impl Bloom {
    pub fn new(name: impl Into<String>, value: Color) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn pen(&self) -> Pen {
        Pen::new(self.value)
    }

    pub fn brush(&self) -> Brush {
        Brush::solid(self.value)
    }

    /// Opaque part as `#RRGGBB`
    pub fn value_hex(&self) -> String {
        let [r, g, b, _] = self.value.to_rgba8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Set from `#RRGGBB`; anything unparsable leaves the value untouched
    pub fn set_value_hex(&mut self, hex: &str) {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return;
        }
        if let Ok(rgb) = u32::from_str_radix(digits, 16) {
            self.value = Color::from_hex(rgb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_drops_alpha() {
        let mut bloom = Bloom::new("Border", Color::from_argb(0x80_12_34_56));
        assert_eq!(bloom.value_hex(), "#123456");

        bloom.set_value_hex("#ABCDEF");
        assert_eq!(bloom.value.to_argb(), 0xFF_AB_CD_EF);
    }

    #[test]
    fn invalid_hex_is_ignored() {
        let mut bloom = Bloom::new("Border", Color::WHITE);
        for bad in ["", "#12345", "#GGGGGG", "#1234567"] {
            bloom.set_value_hex(bad);
        }
        assert_eq!(bloom.value, Color::WHITE);
    }
}
