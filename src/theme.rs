use crate::core::types::ThemeKey;
use once_cell::sync::OnceCell;
use serde::Serialize;

static THEME: OnceCell<Theme> = OnceCell::new();

/// Low and high ends of the heatmap color scale, as `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatPalette {
    pub low: String,
    pub high: String,
}

impl HeatPalette {
    pub fn new(low: impl Into<String>, high: impl Into<String>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }

    /// Linear blend between `low` and `high`; `ratio` is clamped to `[0, 1]`.
    pub fn blend(&self, ratio: f32) -> Option<(u8, u8, u8)> {
        let (lr, lg, lb) = parse_hex(&self.low)?;
        let (hr, hg, hb) = parse_hex(&self.high)?;
        let t = ratio.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Some((mix(lr, hr), mix(lg, hg), mix(lb, hb)))
    }
}

impl Default for HeatPalette {
    fn default() -> Self {
        Theme::for_key(ThemeKey::default()).palette
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub key: ThemeKey,
    pub palette: HeatPalette,
    pub label_color: String,
    pub count_color: String,
}

impl Theme {
    pub fn for_key(key: ThemeKey) -> Self {
        let (low, high) = match key {
            ThemeKey::DeeppurpleAmber => ("#e0ffff", "#006edd"),
            ThemeKey::IndigoPink => ("#e8eaf6", "#3f51b5"),
            ThemeKey::PinkBluegrey => ("#fce4ec", "#e91e63"),
            ThemeKey::PurpleGreen => ("#f3e5f5", "#9c27b0"),
        };
        Self {
            key,
            palette: HeatPalette::new(low, high),
            label_color: "#000".into(),
            count_color: "#a00".into(),
        }
    }
}

/// Selects the process-wide theme. Only the first call has an effect; every call
/// returns the theme in force.
pub fn init(key: ThemeKey) -> &'static Theme {
    THEME.get_or_init(|| Theme::for_key(key))
}

/// The process-wide theme, falling back to the default when `init` never ran.
pub fn current() -> &'static Theme {
    THEME.get_or_init(|| Theme::for_key(ThemeKey::default()))
}
