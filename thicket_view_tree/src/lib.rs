// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket View Tree: a Kurbo-native view tree with policy-aware hit testing.
//!
//! This crate is the consumer side of [`thicket_pointer_policy`]: a hierarchy
//! of view nodes with local bounds, transforms, optional clips, z-order, and
//! a per-node [`PointerEvents`](thicket_pointer_policy::PointerEvents)
//! policy, plus a top-down [`Tree::hit_test_point`] traversal that combines
//! the policy with geometric containment at every node it visits.
//!
//! ## Not a layout engine
//!
//! This crate does not measure or arrange anything. Upstream code computes
//! positions and sizes with whatever layout system it likes and mirrors the
//! results into this tree; this tree only answers "which node should receive
//! a pointer at this point?".
//!
//! ## API overview
//!
//! - [`Tree`]: container managing nodes and the hit-test traversal.
//! - [`ViewNode`]: per-node local data (bounds, transform, optional clip, z,
//!   flags, pointer-events policy).
//! - [`NodeFlags`]: visibility and child-clipping controls.
//! - [`NodeId`]: generational handle of a node.
//! - [`Hit`]: traversal result (node, root→node path, local pointer position).
//!
//! Key operations:
//! - [`Tree::insert`] → [`NodeId`]; [`Tree::remove`]; [`Tree::reparent`].
//! - Setters: [`Tree::set_bounds`], [`Tree::set_transform`],
//!   [`Tree::set_clip`], [`Tree::set_z_index`], [`Tree::set_flags`],
//!   [`Tree::set_pointer_events`], and the string boundary
//!   [`Tree::set_pointer_events_attr`].
//! - [`Tree::hit_test_point`] walks front-to-back and top-down, gating each
//!   step on the node's policy.
//!
//! ## Hit-testing model
//!
//! The traversal descends from the roots, composing transforms on the way
//! down. At each node it computes whether the point is inside the node's
//! bounds and clip, whether the node's clip (for nodes with
//! [`NodeFlags::CLIP_CHILDREN`]) permits descending, and then lets the
//! node's policy narrow those findings. Children are tried front to back;
//! the first descendant hit wins over the node itself, so deeper nodes win
//! and higher z wins among siblings. Children of a non-clipping node may be
//! hit outside their parent's bounds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{Hit, Tree};
pub use types::{NodeFlags, NodeId, ViewNode};
