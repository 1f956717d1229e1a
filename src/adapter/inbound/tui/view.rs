//! Screen layout: the map underneath, floating panels on top.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::event::Focus;
use super::map::{MapWidget, Viewport};
use super::theme::Theme;
use crate::adapter::outbound::notifier::{Alert, AlertSlot};
use crate::app::{ClockZone, Field, FlightDeck, FlightPanel, WeatherStyle};
use crate::domain::AirportCode;
use crate::port::MapCanvas;

const FMS_WIDTH: u16 = 34;
const CLOCK_WIDTH: u16 = 18;
const LEGEND_WIDTH: u16 = 28;
const LEGEND_HEIGHT: u16 = 6;
const ALERT_WIDTH: u16 = 52;

/// View state that is not part of the flight deck.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub viewport: Viewport,
    pub alerts: AlertSlot,
    pub clock_zone: ClockZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    Center,
}

/// A `width` x `height` box in `corner` of `area`, one cell in from the
/// edge and shrunk to fit.
#[must_use]
pub fn anchored(area: Rect, width: u16, height: u16, corner: Corner) -> Rect {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let width = width.min(inner.width);
    let height = height.min(inner.height);
    let right = inner.x + inner.width - width;
    let bottom = inner.y + inner.height - height;
    let (x, y) = match corner {
        Corner::TopLeft => (inner.x, inner.y),
        Corner::TopRight => (right, inner.y),
        Corner::BottomRight => (right, bottom),
        Corner::Center => (
            inner.x + (inner.width - width) / 2,
            inner.y + (inner.height - height) / 2,
        ),
    };
    Rect { x, y, width, height }
}

pub fn draw<C: MapCanvas>(
    frame: &mut Frame<'_>,
    deck: &FlightDeck<C>,
    ui: &UiState,
    clock: &str,
    theme: &Theme,
) {
    let area = frame.area();

    let canvas = deck.canvas();
    frame.render_widget(
        MapWidget::new(canvas.overlays(), canvas.tile_layers(), &ui.viewport, theme)
            .focused(ui.focus == Focus::Map),
        area,
    );

    draw_fms(frame, area, deck, ui, theme);
    draw_clock(frame, area, clock, ui.clock_zone, theme);
    draw_legend(frame, area, theme);

    if let Some(alert) = ui.alerts.current() {
        draw_alert(frame, area, &alert, theme);
    }
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background))
}

fn input_line<'a>(label: &'a str, code: &AirportCode, focused: bool, theme: &Theme) -> Line<'a> {
    let value_style = if focused {
        Style::default()
            .fg(theme.secondary)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(theme.secondary)
    };
    let cursor = if focused && !code.is_full() { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{label:<5}"), Style::default().fg(theme.label)),
        Span::styled(format!(" {}{cursor} ", code.as_str()), value_style),
    ])
}

fn data_line<'a>(label: &'a str, value: String, style: Style, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<6}"), Style::default().fg(theme.label)),
        Span::styled(value, style),
    ])
}

fn flight_lines(panel: FlightPanel, theme: &Theme) -> Vec<Line<'static>> {
    let data = Style::default().fg(theme.data);
    let wx = match panel.condition_style {
        WeatherStyle::Hazard => Style::default()
            .fg(theme.hazard)
            .add_modifier(Modifier::BOLD),
        WeatherStyle::Nominal => Style::default().fg(theme.nominal),
    };
    let mut lines = vec![
        Line::from(""),
        data_line("DIST", panel.distance, data, theme),
        data_line("ETE", panel.ete, data, theme),
        data_line("WX", panel.condition, wx, theme),
        data_line("WIND", panel.wind, data, theme),
    ];
    if let Some(visibility) = panel.visibility {
        lines.push(data_line("VIS", visibility, data, theme));
    }
    lines
}

fn draw_fms<C: MapCanvas>(
    frame: &mut Frame<'_>,
    area: Rect,
    deck: &FlightDeck<C>,
    ui: &UiState,
    theme: &Theme,
) {
    let input = deck.input();
    let mut lines = vec![
        input_line("DEP", input.field(Field::Origin), ui.focus == Focus::Origin, theme),
        input_line("ARR", input.field(Field::Dest), ui.focus == Focus::Dest, theme),
        Line::from(""),
    ];

    let button = if deck.is_loading() {
        Span::styled(
            "[ CALCULATING... ]",
            Style::default().fg(theme.disabled),
        )
    } else {
        Span::styled(
            "[ EXECUTE FLIGHT PLAN ]",
            Style::default()
                .fg(theme.background)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(button).alignment(Alignment::Center));

    if let Some(panel) = deck.flight_panel() {
        lines.extend(flight_lines(panel, theme));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let rect = anchored(area, FMS_WIDTH, height, Corner::TopLeft);
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(panel(" FMS ", theme)), rect);
}

fn draw_clock(frame: &mut Frame<'_>, area: Rect, clock: &str, zone: ClockZone, theme: &Theme) {
    let rect = anchored(area, CLOCK_WIDTH, 3, Corner::TopRight);
    let line = Line::from(vec![
        Span::styled(
            clock.to_string(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {zone}"), Style::default().fg(theme.label)),
    ]);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(panel("", theme)),
        rect,
    );
}

fn draw_legend(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let swatch = |color: Color, text: &'static str| {
        Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(text, Style::default().fg(theme.label)),
        ])
    };
    let lines = vec![
        swatch(theme.light_rain, "LIGHT RAIN"),
        swatch(theme.moderate_rain, "MODERATE"),
        swatch(theme.heavy_rain, "HEAVY / STORM"),
        Line::from(vec![
            Span::styled("╌ ", Style::default().fg(theme.hazard)),
            Span::styled("SIGMET (NO-FLY)", Style::default().fg(theme.label)),
        ]),
    ];
    let rect = anchored(area, LEGEND_WIDTH, LEGEND_HEIGHT, Corner::BottomRight);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(panel(" RADAR & HAZARDS ", theme)),
        rect,
    );
}

/// Rows for the alert box: the wrapped message plus border, blank line and
/// hint.
fn alert_height(message: &str, width: u16) -> u16 {
    let chars = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    chars
        .div_ceil(width.saturating_sub(2).max(1))
        .saturating_add(4)
}

fn draw_alert(frame: &mut Frame<'_>, area: Rect, alert: &Alert, theme: &Theme) {
    let width = ALERT_WIDTH.min(area.width.saturating_sub(2));
    let rect = anchored(area, width, alert_height(&alert.message, width), Corner::Center);

    let text = vec![
        Line::from(Span::styled(
            alert.message.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER / ESC to dismiss",
            Style::default().fg(theme.label),
        ))
        .alignment(Alignment::Center),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(theme.hazard))
        .title(Span::styled(
            format!(" {} ", alert.title),
            Style::default()
                .fg(theme.hazard)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
        rect,
    );
}
