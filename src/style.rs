//! # Whole-buffer style state
//!
//! A single mutable style descriptor is applied uniformly to the entire
//! text area. The descriptor is the only source of truth: every change
//! re-derives one consistent presentation from it, so switching one
//! attribute off never discards the others.
//!
//! Two derivations exist side by side. `style_string` produces the
//! canonical CSS-like string recorded by the view, and `terminal_style`
//! maps the same descriptor onto what a terminal cell can actually show
//! (weight, slant, underline, color). Font family and pixel size cannot
//! change a terminal cell; they are still carried in the descriptor and
//! the derived string, and shown in the status bar.

use ratatui::style::{Color, Modifier, Style};

/// Font families offered by the family menu.
pub const FONT_FAMILIES: [&str; 2] = ["Arial", "Times New Roman"];

/// Font sizes offered by the size menu, in pixels.
pub const FONT_SIZES: [u16; 5] = [12, 16, 24, 36, 48];

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: u16 = 24;

/// Entries of the color menu as (name, r, g, b) with channels in 0..1.
pub const COLOR_PALETTE: [(&str, f64, f64, f64); 8] = [
    ("White", 1.0, 1.0, 1.0),
    ("Gray", 0.5, 0.5, 0.5),
    ("Red", 1.0, 0.0, 0.0),
    ("Green", 0.0, 1.0, 0.0),
    ("Blue", 0.0, 0.0, 1.0),
    ("Yellow", 1.0, 1.0, 0.0),
    ("Magenta", 1.0, 0.0, 1.0),
    ("Cyan", 0.0, 1.0, 1.0),
];

/// The structured record of all active text-presentation attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub font_family: String,
    pub font_size_px: u16,
    /// `#RRGGBB`, uppercase. `None` means no explicit color override.
    pub text_color_hex: Option<String>,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size_px: DEFAULT_FONT_SIZE,
            text_color_hex: None,
        }
    }
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the single style string applied to the whole text area.
    ///
    /// Family and size are always present; weight, slant, underline and
    /// color appear only while active.
    pub fn style_string(&self) -> String {
        let mut parts = vec![
            format!("font-family: {}", self.font_family),
            format!("font-size: {}px", self.font_size_px),
        ];

        if self.bold {
            parts.push("font-weight: bold".to_string());
        }
        if self.italic {
            parts.push("font-style: italic".to_string());
        }
        if self.underline {
            parts.push("text-decoration: underline".to_string());
        }
        if let Some(hex) = &self.text_color_hex {
            parts.push(format!("color: {}", hex));
        }

        parts.join("; ")
    }

    /// Derives the terminal-cell rendition of the descriptor.
    pub fn terminal_style(&self) -> Style {
        let mut style = Style::default();

        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underline {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if let Some(color) = self.text_color_hex.as_deref().and_then(parse_hex) {
            style = style.fg(color);
        }

        style
    }
}

/// Converts an RGB triple of 0..1 floats to an uppercase `#RRGGBB` string.
///
/// Each channel is truncated, not rounded, when scaled to 0..255, so
/// 0.5 maps to 127 (`7F`). Out-of-range inputs are clamped.
pub fn color_to_hex(r: f64, g: f64, b: f64) -> String {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
    format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b))
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
