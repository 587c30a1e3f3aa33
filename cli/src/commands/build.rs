// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use flowforge_common::config::Config;

use crate::tui;

/// Launches the interactive two-screen builder.
pub async fn build(cfg: &Config) -> anyhow::Result<()> {
    tui::run(cfg).await
}
