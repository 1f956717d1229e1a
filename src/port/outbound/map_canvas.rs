//! Map canvas port.
//!
//! The canvas owns base tiles, the radar tile overlay and projection. The
//! render adapter is its only writer and only ever replaces the full overlay
//! set.

use crate::domain::Overlay;

/// Raster tile source registered on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub name: &'static str,
    /// `{z}/{x}/{y}` URL template.
    pub url_template: &'static str,
    pub opacity: f32,
}

impl TileLayer {
    /// Dark base map.
    pub const BASE: Self = Self {
        name: "dark matter",
        url_template: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
        opacity: 1.0,
    };

    /// Real-time precipitation radar, drawn over the base map.
    pub const RADAR: Self = Self {
        name: "rainviewer radar",
        url_template: "https://tile.cache.rainviewer.com/v2/radar/nowcast_5m/512/{z}/{x}/{y}/2/1_1.png",
        opacity: 0.75,
    };
}

pub trait MapCanvas {
    fn tile_layers(&self) -> &[TileLayer];

    fn overlays(&self) -> &[Overlay];

    /// Remove every overlay added since the last clear.
    fn clear_overlays(&mut self);

    fn add_overlay(&mut self, overlay: Overlay);
}
