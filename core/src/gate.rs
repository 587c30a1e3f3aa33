// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Access Gate
//!
//! A constant-string passphrase check in front of the builder screen.
//!
//! This is not a security boundary: the secret ships inside the binary
//! and anyone with the file has it. It exists to keep the two-screen
//! flow of prompt, short pause, verdict. No lockout, no attempt
//! tracking.

use std::time::Duration;

/// Pacing delay before the verdict is reported. Pure UX, not work.
pub const VERDICT_DELAY: Duration = Duration::from_millis(1000);

/// Message shown on mismatch. Generic on purpose.
pub const REJECTION: &str = "Incorrect password, please try again.";

const PASSPHRASE: &str = "Admin@inet!mateetongboonnark_tabezazaza123_123";

/// Checks `input` against the compiled-in passphrase after the fixed
/// pacing delay.
pub async fn verify(input: &str) -> bool {
    tokio::time::sleep(VERDICT_DELAY).await;
    input == PASSPHRASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_exact_passphrase_is_accepted() {
        assert!(verify("Admin@inet!mateetongboonnark_tabezazaza123_123").await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_everything_else_is_rejected() {
        assert!(!verify("").await);
        assert!(!verify("admin").await);
        // Near misses fail like any other input.
        assert!(!verify("Admin@inet!mateetongboonnark_tabezazaza123_12").await);
    }
}
