// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Form state and its keystroke reducer.
//!
//! The whole screen is an explicit state struct plus a pure transition
//! function over key events; rendering reads the state and never mutates
//! it. Side effects (the clipboard) are signalled through `Action` and
//! performed by the event loop.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flowforge_common::models::{
    archive::Archive,
    selection::Selection,
    site::{self, Group},
    timebound::TimeBound,
};
use flowforge_common::validate;
use flowforge_core::command::QueryRequest;

/// How long the "copied" confirmation stays visible.
pub const COPIED_TTL: Duration = Duration::from_secs(2);

/// Which form field currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Archive,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
    Sites,
    Ip,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Archive,
        Focus::StartDate,
        Focus::StartTime,
        Focus::EndDate,
        Focus::EndTime,
        Focus::Sites,
        Focus::Ip,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// What the event loop should do after a keystroke was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Copy the current command, if there is one.
    CopyRequested,
    /// Return to the access gate.
    Lock,
    Quit,
}

pub struct FormState {
    pub archive: Archive,
    pub selection: Selection,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub ip: String,
    pub focus: Focus,
    /// Cursor row in the site list, indexing the catalog.
    pub cursor: usize,
    pub copied_at: Option<Instant>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            archive: Archive::Nfsen,
            selection: Selection::new(),
            start_date: String::new(),
            // Times are prefilled with the edge-of-day defaults the
            // original pickers used; only the dates start empty.
            start_time: "00:00".to_string(),
            end_date: String::new(),
            end_time: "23:59".to_string(),
            ip: String::new(),
            focus: Focus::Archive,
            cursor: 0,
            copied_at: None,
        }
    }

    pub fn request(&self) -> QueryRequest {
        QueryRequest {
            archive: self.archive,
            selection: self.selection.clone(),
            start: TimeBound::new(self.start_date.clone(), self.start_time.clone()),
            end: TimeBound::new(self.end_date.clone(), self.end_time.clone()),
            ip: self.ip.clone(),
        }
    }

    /// The generated command, or empty while the form is incomplete.
    pub fn command(&self) -> String {
        self.request().render()
    }

    pub fn dates_set(&self) -> bool {
        !self.start_date.is_empty() && !self.end_date.is_empty()
    }

    pub fn ip_ok(&self) -> bool {
        validate::is_valid_ipv4(&self.ip)
    }

    /// The inline hint: present but malformed IP text.
    pub fn ip_warning(&self) -> bool {
        !self.ip.is_empty() && !self.ip_ok()
    }

    pub fn copied_recently(&self) -> bool {
        self.copied_at.is_some_and(|at| at.elapsed() < COPIED_TTL)
    }

    /// Applies one key press and reports what the event loop should do.
    pub fn apply(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Action::Quit;
            }
            KeyCode::Esc => return Action::Lock,
            KeyCode::Enter => return Action::CopyRequested,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Archive => self.apply_archive(key.code),
            Focus::Sites => self.apply_sites(key.code),
            _ => self.apply_text(key.code),
        }

        Action::None
    }

    fn apply_archive(&mut self, code: KeyCode) {
        if matches!(
            code,
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
        ) {
            self.archive = match self.archive {
                Archive::Nfsen => Archive::S3,
                Archive::S3 => Archive::Nfsen,
            };
        }
    }

    fn apply_sites(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(site::CATALOG.len() - 1);
            }
            KeyCode::Char(' ') => {
                self.selection.toggle(site::CATALOG[self.cursor].id);
            }
            KeyCode::Char('a') => self.selection.select_all(),
            KeyCode::Char('x') => self.selection.clear(),
            KeyCode::Char('1') => self.selection.toggle_group(Group::Iig),
            KeyCode::Char('2') => self.selection.toggle_group(Group::Nix),
            KeyCode::Char('3') => self.selection.toggle_group(Group::Dc3),
            _ => {}
        }
    }

    fn apply_text(&mut self, code: KeyCode) {
        let field = match self.focus {
            Focus::StartDate => &mut self.start_date,
            Focus::StartTime => &mut self.start_time,
            Focus::EndDate => &mut self.end_date,
            Focus::EndTime => &mut self.end_time,
            Focus::Ip => &mut self.ip,
            Focus::Archive | Focus::Sites => return,
        };

        match code {
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Char(c) if !c.is_control() => field.push(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_cycles_and_wraps() {
        let mut state = FormState::new();
        for _ in 0..Focus::ORDER.len() {
            state.apply(press(KeyCode::Tab));
        }
        assert_eq!(state.focus, Focus::Archive);

        state.apply(press(KeyCode::BackTab));
        assert_eq!(state.focus, Focus::Ip);
    }

    #[test]
    fn test_typing_goes_to_the_focused_field() {
        let mut state = FormState::new();
        state.focus = Focus::Ip;
        for c in "10.0.0.1".chars() {
            state.apply(press(KeyCode::Char(c)));
        }
        assert_eq!(state.ip, "10.0.0.1");
        assert!(state.ip_ok());

        state.apply(press(KeyCode::Backspace));
        assert_eq!(state.ip, "10.0.0.");
        assert!(state.ip_warning());
    }

    #[test]
    fn test_space_toggles_site_under_cursor() {
        let mut state = FormState::new();
        state.focus = Focus::Sites;
        state.apply(press(KeyCode::Down));
        state.apply(press(KeyCode::Char(' ')));
        assert!(state.selection.contains("Tokyo"));

        state.apply(press(KeyCode::Char(' ')));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_site_hotkeys_do_not_leak_into_text_fields() {
        let mut state = FormState::new();
        state.focus = Focus::StartDate;
        state.apply(press(KeyCode::Char('1')));
        assert!(state.selection.is_empty());
        assert_eq!(state.start_date, "1");
    }

    #[test]
    fn test_archive_flips_with_space() {
        let mut state = FormState::new();
        state.apply(press(KeyCode::Char(' ')));
        assert_eq!(state.archive, Archive::S3);
        state.apply(press(KeyCode::Char(' ')));
        assert_eq!(state.archive, Archive::Nfsen);
    }

    #[test]
    fn test_control_actions() {
        let mut state = FormState::new();
        assert_eq!(state.apply(press(KeyCode::Esc)), Action::Lock);
        assert_eq!(state.apply(press(KeyCode::Enter)), Action::CopyRequested);
        assert_eq!(
            state.apply(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_command_appears_once_the_form_is_complete() {
        let mut state = FormState::new();
        assert_eq!(state.command(), "");

        state.start_date = "2024-01-01".to_string();
        state.end_date = "2024-01-02".to_string();
        state.ip = "203.151.32.99".to_string();
        assert_eq!(state.command(), "");

        state.focus = Focus::Sites;
        state.apply(press(KeyCode::Char(' ')));
        assert!(state.command().starts_with("nfdump -M"));
    }
}
