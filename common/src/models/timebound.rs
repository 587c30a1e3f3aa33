// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Time Bound
//!
//! One end of the query range: a calendar date (`YYYY-MM-DD`) paired with
//! a clock time (`HH:MM`). The components are only ever split on their
//! separators and substituted verbatim: there is no timezone handling and
//! no parsing validation. Malformed input produces a malformed but
//! non-crashing archive reference, which is the documented contract.

use std::fmt;

/// Filename prefix of a capture file inside the archive. Fixed by nfdump.
pub const CAPTURE_PREFIX: &str = "nfcapd";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeBound {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Clock time, `HH:MM`.
    pub time: String,
}

impl TimeBound {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self { date: date.into(), time: time.into() }
    }

    /// `true` once a date has been entered. The time fields are prefilled
    /// and never gate readiness on their own.
    pub fn is_set(&self) -> bool {
        !self.date.is_empty()
    }

    /// Day directory inside the archive: `YYYY/MM/DD`.
    pub fn day_dir(&self) -> String {
        let (year, month, day) = split3(&self.date, '-');
        format!("{year}/{month}/{day}")
    }

    /// Capture filename for this bound: `nfcapd.YYYYMMDDHHMM`.
    pub fn capture_file(&self) -> String {
        let (year, month, day) = split3(&self.date, '-');
        let (hour, minute, _) = split3(&self.time, ':');
        format!("{CAPTURE_PREFIX}.{year}{month}{day}{hour}{minute}")
    }
}

impl fmt::Display for TimeBound {
    /// Full archive reference: `YYYY/MM/DD/nfcapd.YYYYMMDDHHMM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day_dir(), self.capture_file())
    }
}

/// First three fields of `s` split on `sep`; missing fields come back
/// empty. Extra fields are dropped, mirroring destructuring assignment.
fn split3(s: &str, sep: char) -> (&str, &str, &str) {
    let mut it = s.split(sep);
    let a = it.next().unwrap_or("");
    let b = it.next().unwrap_or("");
    let c = it.next().unwrap_or("");
    (a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_dir_and_capture_file() {
        let bound = TimeBound::new("2024-01-02", "23:59");
        assert_eq!(bound.day_dir(), "2024/01/02");
        assert_eq!(bound.capture_file(), "nfcapd.202401022359");
        assert_eq!(bound.to_string(), "2024/01/02/nfcapd.202401022359");
    }

    #[test]
    fn test_components_are_substituted_verbatim() {
        // Garbage in, garbage out, but never a panic.
        let bound = TimeBound::new("2024-1-2", "7:5");
        assert_eq!(bound.to_string(), "2024/1/2/nfcapd.20241275");

        let empty = TimeBound::default();
        assert_eq!(empty.day_dir(), "//");
        assert_eq!(empty.capture_file(), "nfcapd.");
    }

    #[test]
    fn test_extra_separators_are_dropped() {
        let bound = TimeBound::new("2024-01-02-junk", "00:00:30");
        assert_eq!(bound.day_dir(), "2024/01/02");
        assert_eq!(bound.capture_file(), "nfcapd.202401020000");
    }
}
