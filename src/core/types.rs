use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{IslandsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellStatus {
    Sea = 0,
    Land = 1,
    /// Land already attributed to an island by the labeler.
    Discovered = 2,
}

impl CellStatus {
    pub fn is_sea(self) -> bool {
        self == CellStatus::Sea
    }
}

/// 24-bit RGB color. Displays as `#rrggbb`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const fn rgb(value: u32) -> Self {
        Self(value & 0xFF_FFFF)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for Color {
    type Err = IslandsError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || IslandsError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(bad)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let raw = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
        match hex.len() {
            6 => Ok(Color::rgb(raw)),
            // #rgb shorthand: each nibble doubled
            3 => {
                let (r, g, b) = ((raw >> 8) & 0xF, (raw >> 4) & 0xF, raw & 0xF);
                Ok(Color::rgb((r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11))
            }
            _ => Err(bad()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = IslandsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

pub const DEFAULT_SIZE: usize = 50;
/// Largest accepted side length; keeps `size * size` cells allocatable.
pub const MAX_SIZE: usize = 4096;

/// Cell count of a `size` x `size` grid, or `InvalidSize` outside `1..=MAX_SIZE`.
pub fn cell_count(size: usize) -> Result<usize> {
    if size == 0 || size > MAX_SIZE {
        return Err(IslandsError::InvalidSize(size));
    }
    size.checked_mul(size).ok_or(IslandsError::InvalidSize(size))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub size: usize,
    /// Percent chance (0-100) that a cell is land.
    pub land_ratio: u8,
    pub sea_color: Color,
    pub land_color: Color,
    /// Target color for click repaint and flatten.
    pub highlight_color: Color,
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            land_ratio: 40,
            sea_color: Color::rgb(0xcbe1ff),
            land_color: Color::rgb(0xbbbbbb),
            highlight_color: Color::rgb(0x00ff00),
            width: 800,
            height: 800,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        cell_count(self.size)?;
        if self.land_ratio > 100 {
            return Err(IslandsError::InvalidRatio(self.land_ratio));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> anyhow::Result<Config> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &str) -> anyhow::Result<Config> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parse_and_display() {
        let c: Color = "#00FF00".parse().unwrap();
        assert_eq!(c, Color::rgb(0x00ff00));
        assert_eq!(c.to_string(), "#00ff00");
        assert_eq!("#abc".parse::<Color>().unwrap(), Color::rgb(0xaabbcc));
        assert_eq!(Color::rgb(0x1).to_string(), "#000001");
    }

    #[test]
    fn color_rejects_garbage() {
        assert!("00ff00".parse::<Color>().is_err());
        assert!("#00ff0".parse::<Color>().is_err());
        assert!("#+0ff00".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn config_partial_json_uses_defaults() {
        let cfg = Config::from_json(r##"{"size": 12, "highlight_color": "#FF0000"}"##).unwrap();
        assert_eq!(cfg.size, 12);
        assert_eq!(cfg.land_ratio, 40);
        assert_eq!(cfg.highlight_color, Color::rgb(0xff0000));
        assert_eq!(cfg.sea_color, Config::default().sea_color);
    }

    #[test]
    fn config_validation() {
        assert!(Config::from_json(r#"{"size": 0}"#).is_err());
        assert!(Config::from_json(r#"{"land_ratio": 101}"#).is_err());
        assert!(Config::from_json(r#"{"sea_color": "blue"}"#).is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn config_rejects_oversized_grid() {
        assert_eq!(
            Config::from_json(r#"{"size": 4294967297}"#)
                .unwrap_err()
                .downcast::<IslandsError>()
                .unwrap(),
            IslandsError::InvalidSize(4294967297)
        );
        assert!(Config::from_json(r#"{"size": 4097}"#).is_err());
        assert!(Config::from_json(r#"{"size": 4096}"#).is_ok());
    }

    #[test]
    fn cell_count_bounds() {
        assert_eq!(cell_count(1), Ok(1));
        assert_eq!(cell_count(MAX_SIZE), Ok(MAX_SIZE * MAX_SIZE));
        assert_eq!(cell_count(0), Err(IslandsError::InvalidSize(0)));
        assert_eq!(cell_count(usize::MAX), Err(IslandsError::InvalidSize(usize::MAX)));
    }

    #[test]
    fn config_serializes_colors_as_hex() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"#cbe1ff\""));
    }
}
