// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Best-effort clipboard access.
//!
//! A failed write (no display server, denied permission, missing
//! provider) is logged and swallowed; callers only learn about it through
//! the `false` return, which the UI renders as the absence of the
//! "copied" confirmation.

use flowforge_common::error;

/// Places `text` on the system clipboard. Returns whether it worked.
pub fn copy(text: &str) -> bool {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| {
        clipboard.set_text(text.to_owned())
    });

    match result {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to copy command to clipboard: {e}");
            false
        }
    }
}
