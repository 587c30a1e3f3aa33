// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! One-shot command generation from flags.
//!
//! Runs the same pure core as the interactive form but without the gate:
//! a local invocation has no equivalent of the hosted page the gate was
//! protecting. The rendered command goes to stdout so it can be piped;
//! decorations and diagnostics stay on stderr.

use anyhow::bail;
use colored::*;
use flowforge_common::models::archive::Archive;
use flowforge_common::models::selection::Selection;
use flowforge_common::models::site;
use flowforge_common::models::timebound::TimeBound;
use flowforge_common::{config::Config, success, validate, warn};
use flowforge_core::{clipboard, command::QueryRequest};

use crate::terminal::{
    colors,
    print::{self, Print},
};

pub fn generate(
    archive: &str,
    sites: &[String],
    from: &str,
    to: &str,
    ip: &str,
    copy: bool,
    cfg: &Config,
) -> anyhow::Result<()> {
    let archive: Archive = archive.parse()?;

    let mut selection = Selection::new();
    for requested in sites {
        let Some(s) = site::find(requested) else {
            bail!("unknown site '{requested}', run `flowforge sites` for the catalog");
        };
        if selection.contains(s.id) {
            warn!("site '{}' given more than once, keeping the first", s.id);
            continue;
        }
        selection.toggle(s.id);
    }

    let request = QueryRequest {
        archive,
        selection,
        start: parse_bound(from, "00:00"),
        end: parse_bound(to, "23:59"),
        ip: ip.trim().to_string(),
    };

    // Mirrors the form's inline hint: a warning, never a blocker.
    if !request.ip.is_empty() && !validate::is_valid_ipv4(&request.ip) {
        warn!("'{}' does not look like an IPv4 address, generating anyway", request.ip);
    }

    let rendered = request.render();
    if rendered.is_empty() {
        bail!("incomplete query: both dates, at least one site and an IP filter are required");
    }

    Print::header("generated command");
    println!("{rendered}");

    print::divider();
    print::centerln(
        &format!(
            "{} · {} site(s) · {} → {}",
            request.archive.label(),
            request.selection.len(),
            request.start.day_dir(),
            request.end.day_dir(),
        )
        .color(colors::TEXT_DEFAULT),
    );

    if copy {
        if cfg.no_copy {
            warn!("--copy ignored because --no-copy is set");
        } else if clipboard::copy(&rendered) {
            success!("Command copied to clipboard");
        }
    }

    Ok(())
}

/// Splits `"YYYY-MM-DD HH:MM"` into a bound. A missing time falls back to
/// the same edge-of-day default the form prefills.
fn parse_bound(input: &str, default_time: &str) -> TimeBound {
    match input.trim().split_once([' ', 'T']) {
        Some((date, time)) => TimeBound::new(date, time.trim()),
        None => TimeBound::new(input.trim(), default_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound_with_time() {
        assert_eq!(
            parse_bound("2024-01-01 08:30", "00:00"),
            TimeBound::new("2024-01-01", "08:30")
        );
        assert_eq!(
            parse_bound("2024-01-01T08:30", "00:00"),
            TimeBound::new("2024-01-01", "08:30")
        );
    }

    #[test]
    fn test_parse_bound_defaults_the_time() {
        assert_eq!(
            parse_bound(" 2024-01-02 ", "23:59"),
            TimeBound::new("2024-01-02", "23:59")
        );
    }
}
