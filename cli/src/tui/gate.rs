// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! The access-gate screen: a single password prompt in a centered box.
//!
//! The verdict is paced by `flowforge_core::gate`, so the "checking"
//! notice gets one draw before the wait starts. Input is masked by
//! default; F2 reveals it.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use flowforge_core::gate;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::Term;
use crate::terminal::colors::tui as palette;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Granted,
    Quit,
}

#[derive(Default)]
struct GateState {
    password: String,
    reveal: bool,
    checking: bool,
    error: Option<&'static str>,
}

pub async fn run(terminal: &mut Term) -> Result<Outcome> {
    let mut state = GateState::default();

    loop {
        terminal.draw(|f| draw(f, &state))?;

        if state.checking {
            // The notice is on screen; now run the paced check.
            let granted = gate::verify(&state.password).await;
            state.checking = false;

            if granted {
                return Ok(Outcome::Granted);
            }
            state.error = Some(gate::REJECTION);
            state.password.clear();
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => return Ok(Outcome::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Outcome::Quit);
            }
            KeyCode::Enter if !state.password.is_empty() => {
                state.checking = true;
                state.error = None;
            }
            KeyCode::Backspace => {
                state.password.pop();
            }
            KeyCode::F(2) => state.reveal = !state.reveal,
            KeyCode::Char(c) => state.password.push(c),
            _ => {}
        }
    }
}

fn draw(f: &mut Frame, state: &GateState) {
    let area = centered_rect(52, 9, f.size());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette::PRIMARY))
        .title(Span::styled(
            " FLOWFORGE ",
            Style::default()
                .fg(palette::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let shown: String = if state.reveal {
        state.password.clone()
    } else {
        "•".repeat(state.password.chars().count())
    };

    let status = if state.checking {
        Line::styled("Checking password...", Style::default().fg(palette::PENDING))
    } else if let Some(error) = state.error {
        Line::styled(error, Style::default().fg(palette::WARNING))
    } else {
        Line::raw("")
    };

    let lines = vec![
        Line::raw(""),
        Line::styled(
            "Enter the access password to continue.",
            Style::default().fg(palette::TEXT),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Password: ", Style::default().fg(palette::FOCUS)),
            Span::styled(shown, Style::default().fg(palette::TEXT)),
            Span::styled("█", Style::default().fg(palette::FOCUS)),
        ]),
        status,
        Line::raw(""),
        Line::styled(
            "Enter submit · F2 reveal · Esc quit",
            Style::default().fg(palette::MUTED),
        ),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Left),
        area,
    );
}

/// A `width` x `height` rect centered inside `r`, clamped to its size.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
