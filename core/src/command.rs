// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Formatter
//!
//! Maps the assembled query state onto a single `nfdump` invocation.
//!
//! The grammar is fixed and must be reproduced exactly, since the output
//! is pasted into a shell on the collector host:
//!
//! ```text
//! nfdump -M <prefix>/<site:site:...> -T -R <Y/M/D/nfcapd.YMDHM>:<Y/M/D/nfcapd.YMDHM> -o '<fmt>' 'ip <addr>'
//! ```
//!
//! Rendering is pure and deterministic. An incomplete request renders to
//! the empty string, which is the "fill in the form" signal rather than
//! an error. Note that a present-but-invalid IP still renders: validity
//! only drives a hint in the UI, and that behavior is pinned.

use flowforge_common::models::archive::Archive;
use flowforge_common::models::selection::Selection;
use flowforge_common::models::timebound::TimeBound;

/// The flow-query tool the command drives.
pub const TOOL: &str = "nfdump";

/// Column layout handed to `nfdump -o`. Fixed; operators' downstream
/// parsing depends on it.
pub const OUTPUT_FORMAT: &str =
    "fmt:%ts %td %pr %sap -> %dap %pkt %byt %fl %in %out %flg %bps %sas %das";

/// Everything needed to render one query command.
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    pub archive: Archive,
    pub selection: Selection,
    pub start: TimeBound,
    pub end: TimeBound,
    /// Free text. Deliberately not validated here.
    pub ip: String,
}

impl QueryRequest {
    /// A command can be produced once both dates, at least one site and
    /// some IP text are present. The archive always has a value and the
    /// times are prefilled, so neither gates readiness.
    pub fn is_complete(&self) -> bool {
        self.start.is_set()
            && self.end.is_set()
            && !self.selection.is_empty()
            && !self.ip.is_empty()
    }

    /// The generated command, or the empty string while incomplete.
    pub fn render(&self) -> String {
        if !self.is_complete() {
            return String::new();
        }

        format!(
            "{TOOL} -M {prefix}/{sites} -T -R {start}:{end} -o '{fmt}' 'ip {ip}'",
            prefix = self.archive.prefix(),
            sites = self.selection.join(":"),
            start = self.start,
            end = self.end,
            fmt = OUTPUT_FORMAT,
            ip = self.ip,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> QueryRequest {
        let mut selection = Selection::new();
        selection.toggle("Phoenix");
        QueryRequest {
            archive: Archive::Nfsen,
            selection,
            start: TimeBound::new("2024-01-01", "00:00"),
            end: TimeBound::new("2024-01-02", "23:59"),
            ip: "203.151.32.99".to_string(),
        }
    }

    #[test]
    fn test_renders_exact_grammar() {
        assert_eq!(
            request().render(),
            "nfdump -M /home/nfsen/nfsen/profiles-data/live/Phoenix -T \
             -R 2024/01/01/nfcapd.202401010000:2024/01/02/nfcapd.202401022359 \
             -o 'fmt:%ts %td %pr %sap -> %dap %pkt %byt %fl %in %out %flg %bps %sas %das' \
             'ip 203.151.32.99'"
        );
    }

    #[test]
    fn test_s3_archive_prefix() {
        let mut req = request();
        req.archive = Archive::S3;
        assert!(req.render().starts_with("nfdump -M /mnt/s3test/Phoenix "));
    }

    #[test]
    fn test_sites_joined_in_selection_order() {
        let mut req = request();
        req.selection.toggle("Zeus");
        req.selection.toggle("Tokyo");
        assert!(req.render().contains("/Phoenix:Zeus:Tokyo "));
    }

    #[test]
    fn test_incomplete_requests_render_empty() {
        let mut no_start = request();
        no_start.start = TimeBound::default();
        assert_eq!(no_start.render(), "");

        let mut no_end = request();
        no_end.end = TimeBound::default();
        assert_eq!(no_end.render(), "");

        let mut no_sites = request();
        no_sites.selection.clear();
        assert_eq!(no_sites.render(), "");

        let mut no_ip = request();
        no_ip.ip.clear();
        assert_eq!(no_ip.render(), "");
    }

    #[test]
    fn test_invalid_ip_still_renders() {
        // Validity gates a hint, not generation.
        let mut req = request();
        req.ip = "999.1.1.1".to_string();
        assert!(req.render().ends_with("'ip 999.1.1.1'"));
    }
}
