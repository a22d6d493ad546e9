use super::super::format::{
    attribution_text, badge_text, checkbox, copy_label, step_number, truncate_text, wrap_text,
    CONNECTOR_STEM, INDENT, OR_DIVIDER,
};
use super::super::{HomeEntry, HOME_BLURB, HOME_STACK, HOME_TITLE};
use super::App;
use crate::catalog::Phase;
use crate::layout::{ConnectorKind, Row};
use crate::routes::Route;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use std::time::Instant;

const TRACK: &str = "▌ ";
const NO_TRACK: &str = "  ";
/// Terminal columns taken by `TRACK` or `NO_TRACK`.
const TRACK_COLUMNS: usize = 2;
const FOOTER_HINT: &str = "q quit | tab view | j/k move | pgup/pgdn page | enter open/toggle/copy | space toggle | c copy | o link | ? help";

impl App {
    pub(in crate::viewer) fn draw(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(2),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_header(frame, layout[0]);
        self.draw_tabs(frame, layout[1]);
        match self.route {
            Route::Home => self.draw_home(frame, layout[2]),
            Route::Workflow => self.draw_workflow(frame, layout[2], now),
        }
        self.draw_footer(frame, layout[3]);

        if self.show_help {
            self.draw_help(frame);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let (done, gates) = self.progress();
        let line1 = Line::from(vec![Span::styled(
            "Workflow Prompts",
            Style::default().add_modifier(Modifier::BOLD),
        )]);
        let line2 = Line::from(vec![
            Span::raw("Gates: "),
            Span::styled(format!("{done}/{gates}"), progress_style(done, gates)),
            Span::raw(" | Path: "),
            Span::raw(self.route.path()),
        ]);
        let paragraph = Paragraph::new(vec![line1, line2]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles = Route::ALL.iter().map(|route| {
            Span::styled(route.label(), Style::default().add_modifier(Modifier::BOLD))
        });
        let tabs = Tabs::new(titles)
            .select(self.route.index())
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(tabs, area);
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2) as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                HOME_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(wrap_text(HOME_BLURB, width).into_iter().map(Line::from));
        lines.push(Line::from(""));
        let selected = self.selected_home_entry();
        for entry in HomeEntry::ALL {
            let style = if entry == selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(format!("  {}  ", entry.label()), style)));
        }
        lines.push(Line::from(""));
        let chips = HOME_STACK
            .iter()
            .map(|tech| Span::styled(format!(" {tech} "), Style::default().fg(Color::DarkGray)))
            .collect::<Vec<_>>();
        lines.push(Line::from(chips));

        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Home"));
        frame.render_widget(paragraph, area);
    }

    fn draw_workflow(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
        let rows = self.rows();
        let selected = self.selected_row(&rows);
        let width = area.width.saturating_sub(2) as usize;
        let mut lines = Vec::new();
        let mut selected_line = None;
        for (index, row) in rows.iter().enumerate() {
            let is_selected = selected == Some(index);
            let focus = self.row_lines(row, is_selected, width, now, &mut lines);
            if is_selected {
                selected_line = focus;
            }
        }

        let height = area.height.saturating_sub(2);
        if let Some(line) = selected_line {
            self.scroll_to(line as u16, height);
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Workflow"))
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn scroll_to(&mut self, line: u16, height: u16) {
        if height == 0 {
            return;
        }
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }

    /// Append the lines for one row; returns the line to keep in view when focused.
    fn row_lines(
        &self,
        row: &Row,
        is_selected: bool,
        width: usize,
        now: Instant,
        lines: &mut Vec<Line<'static>>,
    ) -> Option<usize> {
        let track = row.track();
        let body_width = wrap_width(width);
        match row {
            Row::GroupHeader { phase, label } => {
                lines.push(Line::from(vec![
                    track_span(track),
                    Span::styled(
                        label.to_uppercase(),
                        Style::default()
                            .fg(phase.color())
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
                None
            }
            Row::StepHeader {
                position,
                trigger,
                badge,
                loop_back,
                ..
            } => {
                for (idx, chunk) in wrap_text(trigger, body_width).into_iter().enumerate() {
                    let lead = if idx == 0 {
                        format!("{:<4}", step_number(*position))
                    } else {
                        INDENT.to_string()
                    };
                    lines.push(Line::from(vec![
                        track_span(track),
                        Span::styled(lead, Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(chunk, Style::default().fg(Color::Gray)),
                    ]));
                }
                if let Some(badges) = badge_text(*badge, *loop_back) {
                    lines.push(Line::from(vec![
                        track_span(track),
                        Span::raw(INDENT),
                        Span::styled(
                            badges,
                            Style::default()
                                .fg(Color::Magenta)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]));
                }
                None
            }
            Row::Prompt {
                target,
                label,
                text,
                attribution,
                ..
            } => {
                if let Some(label) = label {
                    lines.push(Line::from(vec![
                        track_span(track),
                        Span::raw(INDENT),
                        Span::styled(*label, Style::default().add_modifier(Modifier::BOLD)),
                    ]));
                }
                let prompt_style = Style::default().fg(Color::White);
                for chunk in wrap_text(text, body_width.saturating_sub(2).max(1)) {
                    lines.push(Line::from(vec![
                        track_span(track),
                        Span::raw(INDENT),
                        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
                        Span::styled(chunk, prompt_style),
                    ]));
                }
                let copied = self.flash.is_copied(*target, now);
                let copy_style = if copied {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                let focus = lines.len();
                lines.push(Line::from(vec![
                    track_span(track),
                    Span::raw(INDENT),
                    Span::styled(copy_label(copied), selected_style(copy_style, is_selected)),
                ]));
                if let Some(attribution) = attribution {
                    lines.push(Line::from(vec![
                        track_span(track),
                        Span::raw(INDENT),
                        Span::styled(
                            truncate_text(&attribution_text(attribution), body_width),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]));
                }
                Some(focus)
            }
            Row::OrDivider { .. } => {
                lines.push(Line::from(vec![
                    track_span(track),
                    Span::raw(INDENT),
                    Span::styled(OR_DIVIDER, Style::default().add_modifier(Modifier::BOLD)),
                ]));
                None
            }
            Row::Annotation { text, .. } => {
                for chunk in wrap_text(text, body_width) {
                    lines.push(Line::from(vec![
                        track_span(track),
                        Span::raw(INDENT),
                        Span::styled(
                            chunk,
                            Style::default()
                                .fg(Color::DarkGray)
                                .add_modifier(Modifier::ITALIC),
                        ),
                    ]));
                }
                None
            }
            Row::Connector(connector) => {
                let stem = Line::from(vec![
                    track_span(track),
                    Span::styled(CONNECTOR_STEM, Style::default().fg(Color::DarkGray)),
                ]);
                let gate_style = if connector.checked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let gate_style = match connector.kind {
                    ConnectorKind::Within => gate_style,
                    ConnectorKind::Transition => gate_style.add_modifier(Modifier::BOLD),
                };
                lines.push(stem.clone());
                let focus = lines.len();
                lines.push(Line::from(vec![
                    track_span(track),
                    Span::styled(
                        format!("{} {}", checkbox(connector.checked), connector.label),
                        selected_style(gate_style, is_selected),
                    ),
                ]));
                lines.push(stem);
                Some(focus)
            }
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let message = self.message.as_deref().unwrap_or(FOOTER_HINT);
        let message = truncate_text(message, area.width as usize);
        let paragraph =
            Paragraph::new(message).style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(paragraph, area);
    }

    fn draw_help(&self, frame: &mut Frame) {
        let area = centered_rect(70, 70, frame.area());
        let lines = vec![
            Line::from("Keys:"),
            Line::from("  q / Esc: quit (Esc closes help first)"),
            Line::from("  Tab / Shift+Tab: switch between Home and Workflow"),
            Line::from("  Up/Down or j/k: move selection"),
            Line::from("  PageUp/PageDown: move five rows"),
            Line::from("  Enter: open entry, toggle gate, or copy prompt"),
            Line::from("  Space: toggle the selected gate"),
            Line::from("  c: copy the selected prompt"),
            Line::from("  o: open the selected prompt's attribution link"),
            Line::from("  ?: toggle help"),
            Line::from(""),
            Line::from("Gates reset when the viewer exits."),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Columns left for wrapped text after the track and indent.
fn wrap_width(width: usize) -> usize {
    width.saturating_sub(TRACK_COLUMNS + INDENT.len()).max(8)
}

fn track_span(track: Option<Phase>) -> Span<'static> {
    match track {
        Some(phase) => Span::styled(TRACK, Style::default().fg(phase.color())),
        None => Span::raw(NO_TRACK),
    }
}

fn selected_style(style: Style, selected: bool) -> Style {
    if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn progress_style(done: usize, gates: usize) -> Style {
    if gates > 0 && done == gates {
        Style::default().fg(Color::Green)
    } else if done > 0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
