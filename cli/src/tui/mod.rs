// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Full-Screen Builder UI
//!
//! Two screens on the alternate screen buffer: the access gate, then the
//! query form. Terminal setup and teardown live here so a failure on
//! either screen still restores the caller's terminal.

pub mod form;
pub mod gate;
pub mod state;

use std::io;

use anyhow::{Result, anyhow};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flowforge_common::config::Config;
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run(cfg: &Config) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow!("failed to enable raw mode: {e}; a real terminal (TTY) is required")
    })?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(anyhow!("failed to initialize terminal: {e}"));
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_screens(&mut terminal, cfg).await;

    // Always attempt cleanup, and surface its error only if the screens
    // themselves succeeded.
    let cleanup = restore_terminal(&mut terminal);
    result.and(cleanup)
}

async fn run_screens(terminal: &mut Term, cfg: &Config) -> Result<()> {
    loop {
        match gate::run(terminal).await? {
            gate::Outcome::Quit => return Ok(()),
            gate::Outcome::Granted => {
                if form::run(terminal, cfg)? == form::Outcome::Quit {
                    return Ok(());
                }
                // Locking the form loops back to a fresh gate.
            }
        }
    }
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
