//! The compact resource panel: title, one line per resource, status.

use minimon_core::{Report, Resource, TICK_PERIOD};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme::{BG, FG, OK, SUB, WARN};
use super::util::{placeholder_line, resource_line, status_line};

pub const PANEL_WIDTH: u16 = 56;
pub const PANEL_HEIGHT: u16 = 11;

pub fn draw_panel(f: &mut ratatui::Frame<'_>, area: Rect, r: Option<&Report>) {
    let area = Rect {
        width: area.width.min(PANEL_WIDTH),
        height: area.height.min(PANEL_HEIGHT),
        ..area
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "System Resources",
            Style::default().fg(FG).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Refreshes every {}s", TICK_PERIOD.as_secs_f64()),
            Style::default().fg(SUB),
        )),
        Line::default(),
    ];

    for res in Resource::ALL {
        let line = match r {
            Some(rep) => {
                let color = if rep.flags.is_hot(res) { WARN } else { FG };
                let mut style = Style::default().fg(color);
                if rep.snapshot.is_stale(res) {
                    style = style.add_modifier(Modifier::DIM);
                }
                Span::styled(resource_line(res, rep), style)
            }
            None => Span::styled(placeholder_line(res), Style::default().fg(SUB)),
        };
        lines.push(Line::from(line));
    }

    let status_color = match r {
        Some(rep) if rep.flags.any_hot => WARN,
        Some(_) => OK,
        None => SUB,
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        status_line(r),
        Style::default()
            .fg(status_color)
            .add_modifier(Modifier::BOLD),
    )));

    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SUB))
            .style(Style::default().bg(BG)),
    );
    f.render_widget(p, area);
}
