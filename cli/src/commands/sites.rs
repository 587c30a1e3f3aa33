// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Prints the compiled-in site catalog, grouped by collector group.

use flowforge_common::config::Config;
use flowforge_common::models::site::{self, Group};

use crate::terminal::print::{self, GLOBAL_KEY_WIDTH, Print};

pub fn sites(json: bool, _cfg: &Config) -> anyhow::Result<()> {
    if json {
        let catalog: Vec<_> = site::CATALOG.iter().collect();
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let longest = site::CATALOG.iter().map(|s| s.id.len()).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(longest + 4);

    for group in Group::ALL {
        Print::header(group.label());
        for s in site::in_group(group) {
            print::aligned_line(s.id, s.name);
        }
    }

    Ok(())
}
