//! In-memory layered map canvas.
//!
//! Holds the tile layer stack and the current overlays. The terminal map
//! widget reads it on every frame.

use crate::domain::Overlay;
use crate::port::{MapCanvas, TileLayer};

#[derive(Debug, Clone)]
pub struct LayeredCanvas {
    tiles: Vec<TileLayer>,
    overlays: Vec<Overlay>,
}

impl LayeredCanvas {
    /// Base map with the radar layer on top.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tiles(vec![TileLayer::BASE, TileLayer::RADAR])
    }

    #[must_use]
    pub fn with_tiles(tiles: Vec<TileLayer>) -> Self {
        Self {
            tiles,
            overlays: Vec::new(),
        }
    }
}

impl Default for LayeredCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl MapCanvas for LayeredCanvas {
    fn tile_layers(&self) -> &[TileLayer] {
        &self.tiles
    }

    fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    fn clear_overlays(&mut self) {
        self.overlays.clear();
    }

    fn add_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LatLng, WaypointKind, WaypointMarker};

    fn marker() -> Overlay {
        Overlay::Waypoint(WaypointMarker {
            position: LatLng::new(51.47, -0.45),
            label: "EGLL".into(),
            kind: WaypointKind::Arrival,
        })
    }

    #[test]
    fn default_stack_has_radar_over_base() {
        let canvas = LayeredCanvas::new();
        let names: Vec<_> = canvas.tile_layers().iter().map(|t| t.name).collect();
        assert_eq!(names, ["dark matter", "rainviewer radar"]);
        assert!((canvas.tile_layers()[1].opacity - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn clear_removes_every_overlay_but_keeps_tiles() {
        let mut canvas = LayeredCanvas::new();
        canvas.add_overlay(marker());
        canvas.add_overlay(marker());
        assert_eq!(canvas.overlays().len(), 2);
        canvas.clear_overlays();
        assert!(canvas.overlays().is_empty());
        assert_eq!(canvas.tile_layers().len(), 2);
    }
}
