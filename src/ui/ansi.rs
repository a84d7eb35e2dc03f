// ANSI/VT100 styling used by the calendar grid.

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Black foreground, readable on every heat color.
pub const FG_BLACK: &str = crate::csi!("30m");

/// 24-bit background color sequence.
pub fn bg_rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("{}[48;2;{r};{g};{b}m", super::ascii::ESC)
}

/// Paints `s` on a 24-bit background and resets afterwards.
pub fn paint_bg(rgb: (u8, u8, u8), s: &str) -> String {
    format!("{}{FG_BLACK}{s}{STYLE_RESET}", bg_rgb(rgb))
}
