// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! The query-builder screen.
//!
//! Left column: archive, time range, IP filter and the readiness
//! checklist. Right column: the site list with its cursor. Bottom: the
//! generated command (or the fill-in prompt) and the key hints.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use flowforge_common::config::Config;
use flowforge_common::models::archive::Archive;
use flowforge_common::models::site;
use flowforge_core::clipboard;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Term;
use super::state::{Action, Focus, FormState};
use crate::terminal::colors::tui as palette;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Back to the access gate.
    Lock,
    Quit,
}

pub fn run(terminal: &mut Term, cfg: &Config) -> Result<Outcome> {
    let mut state = FormState::new();

    loop {
        terminal.draw(|f| draw(f, &state))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.apply(key) {
            Action::Quit => return Ok(Outcome::Quit),
            Action::Lock => return Ok(Outcome::Lock),
            Action::CopyRequested => {
                let command = state.command();
                if !command.is_empty() && !cfg.no_copy && clipboard::copy(&command) {
                    state.copied_at = Some(Instant::now());
                }
            }
            Action::None => {}
        }
    }
}

fn draw(f: &mut Frame, state: &FormState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Min(12),    // body
            Constraint::Length(5),  // command panel
            Constraint::Length(1),  // key hints
        ])
        .split(f.size());

    draw_header(f, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    draw_left_column(f, columns[0], state);
    draw_site_list(f, columns[1], state);
    draw_command_panel(f, rows[2], state);
    draw_key_hints(f, rows[3]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " FLOWFORGE ",
            Style::default()
                .fg(palette::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "— nfdump query builder",
            Style::default().fg(palette::MUTED),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_left_column(f: &mut Frame, area: Rect, state: &FormState) {
    let blocks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // archive
            Constraint::Length(6), // time range
            Constraint::Length(4), // ip
            Constraint::Min(6),    // checklist
        ])
        .split(area);

    draw_archive(f, blocks[0], state);
    draw_time_range(f, blocks[1], state);
    draw_ip(f, blocks[2], state);
    draw_checklist(f, blocks[3], state);
}

fn draw_archive(f: &mut Frame, area: Rect, state: &FormState) {
    let lines: Vec<Line> = [Archive::Nfsen, Archive::S3]
        .iter()
        .map(|choice| {
            let marker = if state.archive == *choice { "(•)" } else { "( )" };
            let style = if state.archive == *choice {
                Style::default().fg(palette::TEXT)
            } else {
                Style::default().fg(palette::MUTED)
            };
            Line::styled(
                format!(" {marker} {} — {}", choice.label(), choice.hint()),
                style,
            )
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(titled_block("Archive", state.focus == Focus::Archive)),
        area,
    );
}

fn draw_time_range(f: &mut Frame, area: Rect, state: &FormState) {
    let lines = vec![
        input_line("Start date", &state.start_date, "YYYY-MM-DD", state.focus == Focus::StartDate),
        input_line("Start time", &state.start_time, "HH:MM", state.focus == Focus::StartTime),
        input_line("End date  ", &state.end_date, "YYYY-MM-DD", state.focus == Focus::EndDate),
        input_line("End time  ", &state.end_time, "HH:MM", state.focus == Focus::EndTime),
    ];

    let focused = matches!(
        state.focus,
        Focus::StartDate | Focus::StartTime | Focus::EndDate | Focus::EndTime
    );
    f.render_widget(
        Paragraph::new(lines).block(titled_block("Time range", focused)),
        area,
    );
}

fn draw_ip(f: &mut Frame, area: Rect, state: &FormState) {
    let mut lines = vec![input_line(
        "Address   ",
        &state.ip,
        "e.g. 203.151.32.99",
        state.focus == Focus::Ip,
    )];

    if state.ip_warning() {
        lines.push(Line::styled(
            " Enter a valid IPv4 address",
            Style::default().fg(palette::WARNING),
        ));
    }

    f.render_widget(
        Paragraph::new(lines).block(titled_block("IP filter", state.focus == Focus::Ip)),
        area,
    );
}

fn draw_checklist(f: &mut Frame, area: Rect, state: &FormState) {
    let lines = vec![
        checklist_line("Archive selected", true),
        checklist_line("Date range set", state.dates_set()),
        checklist_line(
            format!("Sites selected ({})", state.selection.len()),
            !state.selection.is_empty(),
        ),
        checklist_line("IP address valid", state.ip_ok()),
    ];

    f.render_widget(
        Paragraph::new(lines).block(titled_block("Required", false)),
        area,
    );
}

fn draw_site_list(f: &mut Frame, area: Rect, state: &FormState) {
    let lines: Vec<Line> = site::CATALOG
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let selected = state.selection.contains(s.id);
            let marker = if selected { "[x]" } else { "[ ]" };
            let cursor = if state.focus == Focus::Sites && state.cursor == idx {
                "›"
            } else {
                " "
            };

            let name_style = if selected {
                Style::default().fg(palette::OK)
            } else {
                Style::default().fg(palette::TEXT)
            };

            Line::from(vec![
                Span::styled(format!("{cursor} {marker} "), Style::default().fg(palette::FOCUS)),
                Span::styled(format!("{:<10}", s.name), name_style),
                Span::styled(s.group.label(), Style::default().fg(palette::MUTED)),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(titled_block(
            "Sites — space toggle · a all · x clear · 1/2/3 groups",
            state.focus == Focus::Sites,
        )),
        area,
    );
}

fn draw_command_panel(f: &mut Frame, area: Rect, state: &FormState) {
    let command = state.command();

    let title = if state.copied_recently() {
        Span::styled(
            " Generated command — ✓ copied ",
            Style::default().fg(palette::OK),
        )
    } else {
        Span::styled(" Generated command ", Style::default().fg(palette::PRIMARY))
    };

    let body = if command.is_empty() {
        Paragraph::new(Line::styled(
            "Fill in the remaining fields to generate the command.",
            Style::default().fg(palette::MUTED),
        ))
    } else {
        Paragraph::new(Line::styled(
            command,
            Style::default().fg(palette::COMMAND),
        ))
        .wrap(Wrap { trim: false })
    };

    f.render_widget(
        body.block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_key_hints(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new(Line::styled(
            " Tab next field · Enter copy · Esc lock · Ctrl-C quit",
            Style::default().fg(palette::MUTED),
        )),
        area,
    );
}

fn titled_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(palette::FOCUS)
    } else {
        Style::default().fg(palette::MUTED)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {title} "))
}

fn checklist_line(label: impl Into<String>, done: bool) -> Line<'static> {
    let (mark, mark_color) = if done {
        ("✓", palette::OK)
    } else {
        ("○", palette::PENDING)
    };
    let text_color = if done { palette::TEXT } else { palette::MUTED };

    Line::from(vec![
        Span::styled(format!(" {mark} "), Style::default().fg(mark_color)),
        Span::styled(label.into(), Style::default().fg(text_color)),
    ])
}

fn input_line<'a>(label: &'a str, value: &'a str, placeholder: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(palette::FOCUS)
    } else {
        Style::default().fg(palette::MUTED)
    };

    let mut spans = vec![Span::styled(format!(" {label}  "), label_style)];

    if value.is_empty() && !focused {
        spans.push(Span::styled(placeholder, Style::default().fg(palette::MUTED)));
    } else {
        spans.push(Span::styled(value, Style::default().fg(palette::TEXT)));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(palette::FOCUS)));
    }

    Line::from(spans)
}
