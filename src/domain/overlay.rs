//! Map overlay primitives produced by the render adapter.
//!
//! Overlays are plain data. The canvas decides how to rasterise them, so
//! colours are carried as RGB triples rather than terminal colours.

use super::geo::LatLng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const MAGENTA: Self = Self(0xd9, 0x46, 0xef);
    pub const RED: Self = Self(0xff, 0x00, 0x00);
}

/// Dash pattern in canvas units: `on` drawn, then `off` skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dash {
    pub on: u8,
    pub off: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub weight: u8,
    pub dash: Option<Dash>,
    /// `None` means unfilled.
    pub fill_opacity: Option<f32>,
}

impl StrokeStyle {
    /// Planned route: dashed magenta line.
    pub const ROUTE: Self = Self {
        color: Rgb::MAGENTA,
        weight: 3,
        dash: Some(Dash { on: 10, off: 5 }),
        fill_opacity: None,
    };

    /// SIGMET no-fly area: dashed red outline, faint red fill.
    pub const HAZARD: Self = Self {
        color: Rgb::RED,
        weight: 2,
        dash: Some(Dash { on: 5, off: 5 }),
        fill_opacity: Some(0.1),
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<LatLng>,
    pub style: StrokeStyle,
}

/// Closed ring. The closing edge is implicit: the last vertex is never a
/// repeat of the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub ring: Vec<LatLng>,
    pub style: StrokeStyle,
}

impl Polygon {
    /// Edges of the ring including the implicit closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (LatLng, LatLng)> + '_ {
        let n = self.ring.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.ring[i], self.ring[(i + 1) % n]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaypointKind {
    Departure,
    Arrival,
}

/// Labelled point drawn as a custom text label, not a generic pin.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointMarker {
    pub position: LatLng,
    pub label: String,
    pub kind: WaypointKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Route(Polyline),
    Hazard(Polygon),
    Waypoint(WaypointMarker),
}

/// The complete overlay set for one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlaySet {
    overlays: Vec<Overlay>,
}

impl OverlaySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.overlays.iter().filter_map(|o| match o {
            Overlay::Route(line) => Some(line),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.overlays.iter().filter_map(|o| match o {
            Overlay::Hazard(polygon) => Some(polygon),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &WaypointMarker> {
        self.overlays.iter().filter_map(|o| match o {
            Overlay::Waypoint(marker) => Some(marker),
            _ => None,
        })
    }
}

impl IntoIterator for OverlaySet {
    type Item = Overlay;
    type IntoIter = std::vec::IntoIter<Overlay>;

    fn into_iter(self) -> Self::IntoIter {
        self.overlays.into_iter()
    }
}
