// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::Color;

// General Purpose
pub const TEXT_DEFAULT: Color = Color::TrueColor {
    r: 212,
    g: 212,
    b: 212,
}; // Very Light Gray

pub const SEPARATOR: Color = Color::BrightBlack;

pub const PRIMARY: Color = Color::TrueColor {
    r: 255,
    g: 204,
    b: 102,
}; // Soft Gold/Amber

pub const SECONDARY: Color = Color::TrueColor {
    r: 102,
    g: 204,
    b: 255,
}; // Soft Sky Blue

// The generated command itself
pub const COMMAND: Color = Color::TrueColor {
    r: 140,
    g: 230,
    b: 140,
}; // Pale Green

/// Palette twins for the full-screen UI, which draws through ratatui
/// instead of `colored`.
pub mod tui {
    use ratatui::style::Color;

    pub const TEXT: Color = Color::Rgb(212, 212, 212);
    pub const PRIMARY: Color = Color::Rgb(255, 204, 102);
    pub const FOCUS: Color = Color::Rgb(102, 204, 255);
    pub const COMMAND: Color = Color::Rgb(140, 230, 140);
    pub const OK: Color = Color::Rgb(140, 230, 140);
    pub const PENDING: Color = Color::Rgb(235, 200, 80);
    pub const WARNING: Color = Color::Rgb(235, 110, 110);
    pub const MUTED: Color = Color::DarkGray;
}
