// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-node evaluation rule a hit-test traversal applies.
//!
//! A traversal visits a node knowing two things the policy does not:
//! whether the pointer is geometrically inside the node, and whether the
//! tree layer permits descending into its children at all (a collapsed
//! subtree, an exhausted depth budget, a clip the point is outside of).
//! [`HitTestDecision::evaluate`] combines those with the node's
//! [`PointerEvents`] and hands back the two go/no-go bits the traversal
//! acts on. It is pure and total; the caller owns everything else.

use crate::PointerEvents;

/// What a hit-test traversal should do at one node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HitTestDecision {
    /// Test the node itself against the pointer.
    pub test_self: bool,
    /// Recurse into the node's children.
    pub test_children: bool,
}

impl HitTestDecision {
    /// Combine a node's policy with the traversal's geometric findings.
    ///
    /// - `point_inside_self`: the pointer lies within the node's own bounds
    ///   (and clip, if any), in the node's local coordinates.
    /// - `may_recurse_into_children`: the tree layer permits descending into
    ///   the node's children, independent of policy.
    ///
    /// The policy can only narrow what geometry allows, never widen it:
    /// a node the pointer is outside of is never self-tested, and a
    /// subtree the traversal may not enter is never entered.
    pub const fn evaluate(
        policy: PointerEvents,
        point_inside_self: bool,
        may_recurse_into_children: bool,
    ) -> Self {
        Self {
            test_self: point_inside_self && policy.allows_self(),
            test_children: may_recurse_into_children && policy.allows_children(),
        }
    }

    /// Whether this decision skips the node's entire subtree.
    pub const fn skips_subtree(self) -> bool {
        !self.test_self && !self.test_children
    }
}
