//! Surface configuration

use crate::error::Result;
use crate::geometry::DEFAULT_HEADER;
use serde::{Deserialize, Serialize};
use veneer_paint::Color;
use veneer_platform::BorderStyle;

/// Where a container places its window the first time it is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPosition {
    #[default]
    Manual,
    CenterScreen,
    CenterParent,
}

impl StartPosition {
    pub fn is_centered(self) -> bool {
        matches!(self, StartPosition::CenterScreen | StartPosition::CenterParent)
    }
}

/// Initial surface properties
///
/// Every field is optional in TOML:
///
/// ```toml
/// header = 30
/// transparent = true
/// background = "#00000000"
/// start_position = "center_screen"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Behave as an embedded widget instead of owning the host's chrome
    pub control_mode: bool,
    pub movable: bool,
    pub sizable: bool,
    /// Keep the window on its screen after move and resize gestures
    pub smart_bounds: bool,
    /// Caption height in pixels
    pub header: i32,
    pub transparent: bool,
    pub animated: bool,
    /// Fixed width, 0 when unlocked
    pub lock_width: i32,
    /// Fixed height, 0 when unlocked
    pub lock_height: i32,
    pub no_rounding: bool,
    pub start_position: StartPosition,
    pub border_style: BorderStyle,
    #[serde(with = "hex_color")]
    pub background: Color,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            control_mode: false,
            movable: true,
            sizable: true,
            smart_bounds: true,
            header: DEFAULT_HEADER,
            transparent: false,
            animated: false,
            lock_width: 0,
            lock_height: 0,
            no_rounding: false,
            start_position: StartPosition::Manual,
            border_style: BorderStyle::None,
            background: Color::from_argb(0xFFF0_F0F0),
        }
    }
}

impl SurfaceConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// `#AARRGGBB` or `#RRGGBB` (opaque) color strings
mod hex_color {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use veneer_paint::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("#{:08X}", color.to_argb()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid color `{raw}`")))
    }

    pub(super) fn parse(raw: &str) -> Option<Color> {
        let digits = raw.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            8 => Some(Color::from_argb(value)),
            6 => Some(Color::from_argb(0xFF00_0000 | value)),
            _ => None,
        }
    }
}
