// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the view tree: node identifiers, flags, and local data.

use kurbo::{Affine, Rect, RoundedRect};
use thicket_pointer_policy::PointerEvents;

/// Identifier for a node in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and child clipping.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node participates in hit testing at all. A node without this flag
        /// hides its entire subtree from the traversal, regardless of policy.
        const VISIBLE = 0b0000_0001;
        /// The node's clip, when present, also bounds hit testing of its
        /// descendants. Without this flag the clip masks only the node
        /// itself and children may be hit outside it (overflow-visible).
        const CLIP_CHILDREN = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::CLIP_CHILDREN
    }
}

/// Local data for a view node.
#[derive(Clone, Debug)]
pub struct ViewNode {
    /// Local (untransformed) bounds.
    pub bounds: Rect,
    /// Local transform relative to parent space.
    pub transform: Affine,
    /// Optional local clip (rounded-rect), in local coordinates.
    pub clip: Option<RoundedRect>,
    /// Z-order within the parent. Higher is in front.
    pub z_index: i32,
    /// Visibility and clipping flags.
    pub flags: NodeFlags,
    /// Pointer-event dispatch policy. Defaults to [`PointerEvents::Auto`];
    /// changed only by explicit assignment.
    pub pointer_events: PointerEvents,
}

impl Default for ViewNode {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            transform: Affine::IDENTITY,
            clip: None,
            z_index: 0,
            flags: NodeFlags::default(),
            pointer_events: PointerEvents::Auto,
        }
    }
}
