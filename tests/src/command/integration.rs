// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]

//! End-to-end checks: selection operations feeding the formatter, plus
//! the access gate. These walk the same path the UI and the `generate`
//! subcommand drive.

use flowforge_common::models::archive::Archive;
use flowforge_common::models::selection::Selection;
use flowforge_common::models::site::Group;
use flowforge_common::models::timebound::TimeBound;
use flowforge_core::command::QueryRequest;
use flowforge_core::gate;

const REFERENCE_COMMAND: &str = "nfdump -M /home/nfsen/nfsen/profiles-data/live/Phoenix -T \
     -R 2024/01/01/nfcapd.202401010000:2024/01/02/nfcapd.202401022359 \
     -o 'fmt:%ts %td %pr %sap -> %dap %pkt %byt %fl %in %out %flg %bps %sas %das' \
     'ip 203.151.32.99'";

fn phoenix_request() -> QueryRequest {
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
fn reference_command_renders_byte_for_byte() {
    assert_eq!(phoenix_request().render(), REFERENCE_COMMAND);
}

#[test]
fn group_flow_selects_and_renders_in_order() {
    let mut request = phoenix_request();
    // Phoenix is already in; completing IIG appends only Archer, then
    // the NIX group follows in catalog order.
    request.selection.toggle_group(Group::Iig);
    request.selection.toggle_group(Group::Nix);

    let rendered = request.render();
    assert!(rendered.contains("/Phoenix:Archer:Tokyo:Zeus "));

    // Flipping both groups off empties the selection, and the command
    // with it.
    request.selection.toggle_group(Group::Iig);
    request.selection.toggle_group(Group::Nix);
    assert_eq!(request.render(), "");
}

#[test]
fn select_all_covers_every_site() {
    let mut request = phoenix_request();
    request.selection.select_all();
    assert!(
        request
            .render()
            .contains("/Phoenix:Tokyo:Zeus:Archer:IDC32NIX:IDC32IIG:IDC3NIX:IDC3IIG ")
    );
}

#[test]
fn missing_fields_suppress_the_command_independently() {
    let complete = phoenix_request();

    let mut req = complete.clone();
    req.start = TimeBound::default();
    assert_eq!(req.render(), "");

    let mut req = complete.clone();
    req.end = TimeBound::default();
    assert_eq!(req.render(), "");

    let mut req = complete.clone();
    req.selection.clear();
    assert_eq!(req.render(), "");

    let mut req = complete.clone();
    req.ip.clear();
    assert_eq!(req.render(), "");

    assert_eq!(complete.render(), REFERENCE_COMMAND);
}

#[test]
fn malformed_ip_is_not_a_blocker() {
    let mut request = phoenix_request();
    request.ip = "not-an-ip".to_string();
    assert!(request.render().ends_with("'ip not-an-ip'"));
}

#[tokio::test(start_paused = true)]
async fn gate_accepts_only_the_exact_passphrase() {
    assert!(gate::verify("Admin@inet!mateetongboonnark_tabezazaza123_123").await);
    assert!(!gate::verify("Admin@inet!").await);
    assert!(!gate::verify("").await);
}
