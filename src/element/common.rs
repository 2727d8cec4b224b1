use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};

/// Stroke color and width captured by an element when it is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    color: String,
    width: f32,
}

impl StrokeStyle {
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// The CSS color exactly as it was selected
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Parse the color for painting
    pub fn color32(&self) -> BoardResult<Color32> {
        parse_hex_color(&self.color)
    }
}

/// Parses `#RGB`, `#RRGGBB` and `#RRGGBBAA` colors
pub fn parse_hex_color(value: &str) -> BoardResult<Color32> {
    let invalid = || BoardError::InvalidColor(value.to_string());

    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    match hex.len() {
        3 => {
            let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
            Ok(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
        }
        6 => Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color32::from_rgba_unmultiplied(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(invalid()),
    }
}
