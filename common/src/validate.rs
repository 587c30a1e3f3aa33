// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Input validation predicates.
//!
//! `is_valid_ipv4` is intentionally not `Ipv4Addr::from_str`: the std
//! parser rejects leading zeros, while the accepted dialect here allows
//! them (`010.001.002.003` is fine). The predicate only drives the inline
//! hint and the readiness checklist; it never blocks command generation.

/// Four dot-separated all-digit groups, each 1–3 characters and at most
/// 255. No IPv6, no CIDR, no hostnames.
pub fn is_valid_ipv4(text: &str) -> bool {
    let mut groups = 0;

    for group in text.split('.') {
        groups += 1;
        if groups > 4 {
            return false;
        }
        if group.is_empty() || group.len() > 3 {
            return false;
        }
        if !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let Ok(value) = group.parse::<u16>() else {
            return false;
        };
        if value > 255 {
            return false;
        }
    }

    groups == 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_dotted_quads() {
        assert!(is_valid_ipv4("203.151.32.99"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
    }

    #[test]
    fn test_accepts_leading_zeros() {
        // std would reject these; the UI dialect does not.
        assert!(is_valid_ipv4("010.001.002.003"));
        assert!(is_valid_ipv4("099.1.1.1"));
    }

    #[test]
    fn test_rejects_out_of_range_octets() {
        assert!(!is_valid_ipv4("999.1.1.1"));
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.1.1.2550"));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
        assert!(!is_valid_ipv4("1..2.3"));
        assert!(!is_valid_ipv4("1.2.3.4."));
        assert!(!is_valid_ipv4("a.b.c.d"));
        assert!(!is_valid_ipv4("1.2.3.-4"));
        assert!(!is_valid_ipv4("2001:db8::1"));
    }
}
