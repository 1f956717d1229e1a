//! Terminal map widget.
//!
//! Draws the world coastline as the base layer and the canvas overlays on
//! top, in a lat/lng viewport controlled by pan and zoom.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{self, Canvas, Context, Map, MapResolution},
        Block, Borders, Widget,
    },
};

use super::theme::{self, Theme};
use crate::domain::{Dash, LatLng, Overlay, StrokeStyle};
use crate::port::TileLayer;

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 8;

/// Dash units per viewport width.
const DASH_UNITS_PER_SPAN: f64 = 400.0;

/// Past this many dashes a segment is drawn solid.
const MAX_DASH_PIECES: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: LatLng,
    zoom: u8,
}

impl Viewport {
    #[must_use]
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Degrees of longitude visible: the whole world at zoom 1, halving per
    /// level.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        360.0 / f64::from(1u32 << (self.zoom - 1))
    }

    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.lng_span() / 2.0
    }

    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lng_span() / 2.0;
        [self.center.lng - half, self.center.lng + half]
    }

    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    /// Move by a quarter of the visible span. Latitude stops at the poles,
    /// longitude wraps.
    pub fn pan(&mut self, direction: PanDirection) {
        let step_lat = self.lat_span() / 4.0;
        let step_lng = self.lng_span() / 4.0;
        match direction {
            PanDirection::North => self.center.lat += step_lat,
            PanDirection::South => self.center.lat -= step_lat,
            PanDirection::East => self.center.lng += step_lng,
            PanDirection::West => self.center.lng -= step_lng,
        }
        self.center.lat = self.center.lat.clamp(-90.0, 90.0);
        if self.center.lng > 180.0 {
            self.center.lng -= 360.0;
        } else if self.center.lng < -180.0 {
            self.center.lng += 360.0;
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    fn dash_unit(&self) -> f64 {
        self.lng_span() / DASH_UNITS_PER_SPAN
    }
}

impl Default for Viewport {
    /// Mid-Atlantic overview.
    fn default() -> Self {
        Self::new(LatLng::new(40.0, -40.0), 3)
    }
}

type Point = (f64, f64);

/// The part of `a → b` inside the `x` by `y` box (Liang-Barsky), or `None`
/// when the segment misses it.
#[must_use]
pub fn clip_segment(a: Point, b: Point, x: [f64; 2], y: [f64; 2]) -> Option<(Point, Point)> {
    if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, a.0 - x[0]),
        (dx, x[1] - a.0),
        (-dy, a.1 - y[0]),
        (dy, y[1] - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

/// Split `a → b` into the drawn pieces of a dash pattern, `unit` canvas
/// units per dash unit. `None` draws the whole segment, and so does a
/// pattern that would need more than [`MAX_DASH_PIECES`] dashes.
#[must_use]
pub fn dash_segments(a: Point, b: Point, dash: Option<Dash>, unit: f64) -> Vec<(Point, Point)> {
    let Some(dash) = dash else {
        return vec![(a, b)];
    };
    let on = f64::from(dash.on) * unit;
    let off = f64::from(dash.off) * unit;
    let length = (b.0 - a.0).hypot(b.1 - a.1);
    if on <= 0.0 || length == 0.0 || length / (on + off) > MAX_DASH_PIECES as f64 {
        return vec![(a, b)];
    }

    let lerp = |t: f64| (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t);
    let mut pieces = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + on).min(length);
        pieces.push((lerp(start / length), lerp(end / length)));
        start = end + off;
    }
    pieces
}

pub struct MapWidget<'a> {
    overlays: &'a [Overlay],
    tiles: &'a [TileLayer],
    viewport: &'a Viewport,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> MapWidget<'a> {
    #[must_use]
    pub fn new(
        overlays: &'a [Overlay],
        tiles: &'a [TileLayer],
        viewport: &'a Viewport,
        theme: &'a Theme,
    ) -> Self {
        Self {
            overlays,
            tiles,
            viewport,
            theme,
            focused: false,
        }
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> String {
        let layers: Vec<String> = self
            .tiles
            .iter()
            .map(|t| {
                if t.opacity < 1.0 {
                    format!("{} {:.0}%", t.name, t.opacity * 100.0)
                } else {
                    t.name.to_string()
                }
            })
            .collect();
        format!(" MAP z{} · {} ", self.viewport.zoom(), layers.join(" + "))
    }

    fn stroke(&self, ctx: &mut Context<'_>, from: LatLng, to: LatLng, style: &StrokeStyle) {
        let color = theme::color(style.color);
        let Some((a, b)) = clip_segment(
            (from.lng, from.lat),
            (to.lng, to.lat),
            self.viewport.x_bounds(),
            self.viewport.y_bounds(),
        ) else {
            return;
        };
        let pieces = dash_segments(a, b, style.dash, self.viewport.dash_unit());
        for ((x1, y1), (x2, y2)) in pieces {
            ctx.draw(&canvas::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
    }

    fn paint(&self, ctx: &mut Context<'_>) {
        ctx.draw(&Map {
            color: self.theme.coastline,
            resolution: MapResolution::High,
        });
        ctx.layer();

        for overlay in self.overlays {
            match overlay {
                Overlay::Route(line) => {
                    for pair in line.points.windows(2) {
                        self.stroke(ctx, pair[0], pair[1], &line.style);
                    }
                }
                Overlay::Hazard(polygon) => {
                    for (from, to) in polygon.edges() {
                        self.stroke(ctx, from, to, &polygon.style);
                    }
                }
                Overlay::Waypoint(_) => {}
            }
        }

        // Labels last so strokes never cover them.
        ctx.layer();
        for overlay in self.overlays {
            if let Overlay::Waypoint(marker) = overlay {
                let text = format!(
                    "{} {}",
                    self.theme.waypoint_glyph(marker.kind),
                    marker.label
                );
                ctx.print(
                    marker.position.lng,
                    marker.position.lat,
                    Line::from(Span::styled(
                        text,
                        Style::default()
                            .fg(ratatui::style::Color::White)
                            .bg(self.theme.background)
                            .add_modifier(Modifier::BOLD),
                    )),
                );
            }
        }
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.primary
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(self.title(), Style::default().fg(self.theme.label)));

        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(self.theme.background)
            .x_bounds(self.viewport.x_bounds())
            .y_bounds(self.viewport.y_bounds())
            .paint(|ctx| self.paint(ctx))
            .render(area, buf);
    }
}
