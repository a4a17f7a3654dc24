// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-event policies steering a view-tree hit test.
//!
//! A small scene with the three non-default policies in play:
//! - a full-screen overlay with `box-none` (itself untouchable, its badge not),
//! - a disabled panel with `none` (whole subtree removed from hit testing),
//! - a modal shield with `box-only` (swallows pointers, children unreachable).
//!
//! Run:
//! - `cargo run -p thicket_demos --example pointer_policy`

use kurbo::{Point, Rect};
use thicket_pointer_policy::PointerEvents;
use thicket_view_tree::{NodeId, Tree, ViewNode};

fn main() {
    let mut tree = Tree::new();

    let root = tree.insert(
        None,
        ViewNode {
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
            ..ViewNode::default()
        },
    );

    // A plain button in the content layer.
    let button = tree.insert(
        Some(root),
        ViewNode {
            bounds: Rect::new(20.0, 20.0, 120.0, 60.0),
            ..ViewNode::default()
        },
    );

    // A disabled panel: `none` takes it and its label out of hit testing.
    let disabled_panel = tree.insert(
        Some(root),
        ViewNode {
            bounds: Rect::new(20.0, 100.0, 200.0, 200.0),
            ..ViewNode::default()
        },
    );
    let _label = tree.insert(
        Some(disabled_panel),
        ViewNode {
            bounds: Rect::new(30.0, 110.0, 190.0, 140.0),
            ..ViewNode::default()
        },
    );
    tree.set_pointer_events_attr(disabled_panel, Some("none"))
        .unwrap();

    // A toast overlay covering the whole window. `box-none` keeps the
    // content underneath interactive; only its dismiss badge takes input.
    let overlay = tree.insert(
        Some(root),
        ViewNode {
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
            z_index: 10,
            ..ViewNode::default()
        },
    );
    let badge = tree.insert(
        Some(overlay),
        ViewNode {
            bounds: Rect::new(340.0, 10.0, 390.0, 40.0),
            ..ViewNode::default()
        },
    );
    tree.set_pointer_events_attr(overlay, Some("box-none"))
        .unwrap();

    // A modal shield over the right half. `box-only` swallows everything
    // that lands on it, including points over its own decoration child.
    let shield = tree.insert(
        Some(root),
        ViewNode {
            bounds: Rect::new(250.0, 100.0, 400.0, 300.0),
            z_index: 20,
            ..ViewNode::default()
        },
    );
    let _decoration = tree.insert(
        Some(shield),
        ViewNode {
            bounds: Rect::new(260.0, 110.0, 390.0, 290.0),
            ..ViewNode::default()
        },
    );
    let policy: PointerEvents = "box-only".parse().unwrap();
    tree.set_pointer_events(shield, policy);

    // Unknown keywords fail instead of silently defaulting.
    let err = tree
        .set_pointer_events_attr(overlay, Some("box-nonne"))
        .unwrap_err();
    println!("rejected style value: {err}");
    println!();

    let names: Vec<(NodeId, &str)> = vec![
        (root, "root"),
        (button, "button"),
        (disabled_panel, "disabled_panel"),
        (overlay, "overlay"),
        (badge, "badge"),
        (shield, "shield"),
    ];
    let name_of = |id: NodeId| {
        names
            .iter()
            .find(|(n, _)| *n == id)
            .map(|(_, name)| *name)
            .unwrap_or("?")
    };

    let probes = [
        (Point::new(50.0, 40.0), "on the button, under the overlay"),
        (Point::new(100.0, 150.0), "on the disabled panel's label"),
        (Point::new(360.0, 25.0), "on the overlay's dismiss badge"),
        (Point::new(300.0, 200.0), "on the modal shield's decoration"),
        (Point::new(200.0, 250.0), "on empty background"),
    ];

    for (point, what) in probes {
        match tree.hit_test_point(point) {
            Some(hit) => println!(
                "({:>5.1}, {:>5.1}) {what}: -> {} (local {:.1}, {:.1})",
                point.x, point.y,
                name_of(hit.node),
                hit.local_point.x,
                hit.local_point.y,
            ),
            None => println!("({:>5.1}, {:>5.1}) {what}: -> no hit", point.x, point.y),
        }
    }
}
