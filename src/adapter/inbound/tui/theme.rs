//! Colour and glyph theme.
//!
//! Installed once at startup with [`init`]; widgets receive the returned
//! reference explicitly.

use std::sync::OnceLock;

use ratatui::style::Color;
use tracing::warn;

use crate::domain::{Rgb, WaypointKind};

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub border: Color,
    pub label: Color,
    pub data: Color,
    pub nominal: Color,
    pub hazard: Color,
    pub disabled: Color,
    pub coastline: Color,
    pub background: Color,
    pub light_rain: Color,
    pub moderate_rain: Color,
    pub heavy_rain: Color,
    pub departure_glyph: &'static str,
    pub arrival_glyph: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x00, 0xff, 0xcc),
            secondary: Color::Rgb(0xfb, 0xbf, 0x24),
            border: Color::Rgb(0x33, 0x41, 0x55),
            label: Color::Rgb(0x94, 0xa3, 0xb8),
            data: Color::Rgb(0xd9, 0x46, 0xef),
            nominal: Color::Rgb(0x00, 0xff, 0x00),
            hazard: Color::Rgb(0xef, 0x44, 0x44),
            disabled: Color::Rgb(0x55, 0x55, 0x55),
            coastline: Color::Rgb(0x47, 0x55, 0x69),
            background: Color::Black,
            light_rain: Color::Rgb(0x00, 0xff, 0x00),
            moderate_rain: Color::Rgb(0xff, 0xff, 0x00),
            heavy_rain: Color::Rgb(0xff, 0x00, 0x00),
            departure_glyph: "▲",
            arrival_glyph: "▼",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn waypoint_glyph(&self, kind: WaypointKind) -> &'static str {
        match kind {
            WaypointKind::Departure => self.departure_glyph,
            WaypointKind::Arrival => self.arrival_glyph,
        }
    }
}

/// Install the theme. Only the first call wins; later calls log and return
/// the theme already installed.
pub fn init(theme: Theme) -> &'static Theme {
    if THEME.get().is_some() {
        warn!("Theme already installed, ignoring re-initialization");
    }
    THEME.get_or_init(|| theme)
}

#[must_use]
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
