// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Archive Selection
//!
//! Which flow archive the query runs against. Exactly two exist and the
//! path prefixes are deliberately compiled in; pointing the tool at a
//! different archive is a code change.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Archive {
    /// Live nfsen profile data, roughly the last 30 days.
    #[default]
    Nfsen,
    /// The S3-backed mirror holding everything older.
    S3,
}

impl Archive {
    /// Filesystem prefix the site directories live under.
    pub fn prefix(&self) -> &'static str {
        match self {
            Archive::Nfsen => "/home/nfsen/nfsen/profiles-data/live",
            Archive::S3 => "/mnt/s3test",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Archive::Nfsen => "nfsen",
            Archive::S3 => "s3",
        }
    }

    /// Short description shown next to the choice in the UI.
    pub fn hint(&self) -> &'static str {
        match self {
            Archive::Nfsen => "last 30 days",
            Archive::S3 => "older than 30 days",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown archive '{0}', expected 'nfsen' or 's3'")]
pub struct ParseArchiveError(String);

impl FromStr for Archive {
    type Err = ParseArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nfsen" => Ok(Archive::Nfsen),
            "s3" => Ok(Archive::S3),
            _ => Err(ParseArchiveError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lookup() {
        assert_eq!(Archive::Nfsen.prefix(), "/home/nfsen/nfsen/profiles-data/live");
        assert_eq!(Archive::S3.prefix(), "/mnt/s3test");
    }

    #[test]
    fn test_parse() {
        assert_eq!("nfsen".parse(), Ok(Archive::Nfsen));
        assert_eq!(" S3 ".parse(), Ok(Archive::S3));
        assert!("glacier".parse::<Archive>().is_err());
    }
}
