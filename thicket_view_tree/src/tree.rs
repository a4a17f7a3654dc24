// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, the policy-aware hit test.

use alloc::vec::Vec;
use kurbo::{Affine, Point, Rect, RoundedRect, Shape};
use smallvec::SmallVec;
use thicket_pointer_policy::decision::HitTestDecision;
use thicket_pointer_policy::{ParsePointerEventsError, PointerEvents};

use crate::types::{NodeFlags, NodeId, ViewNode};

/// A view tree with per-node pointer-event policy.
///
/// Nodes live in a generational arena: a removed node's slot may be reused,
/// but its old [`NodeId`] stays stale forever. All mutating and reading
/// operations take effect immediately; there is no commit step, and world
/// transforms are composed on the fly during [`Tree::hit_test_point`].
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use thicket_pointer_policy::PointerEvents;
/// use thicket_view_tree::{Tree, ViewNode};
///
/// let mut tree = Tree::new();
/// let root = tree.insert(
///     None,
///     ViewNode {
///         bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
///         ..ViewNode::default()
///     },
/// );
/// let overlay = tree.insert(
///     Some(root),
///     ViewNode {
///         bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
///         pointer_events: PointerEvents::BoxNone,
///         ..ViewNode::default()
///     },
/// );
///
/// // The overlay covers everything but is transparent to pointers.
/// let hit = tree.hit_test_point(Point::new(50.0, 50.0)).unwrap();
/// assert_eq!(hit.node, root);
/// assert_ne!(hit.node, overlay);
/// ```
#[derive(Debug, Default)]
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    /// monotonic insertion counter; slot indices stop encoding age once the
    /// free list is in play
    next_seq: u64,
}

/// Result of a hit test.
#[derive(Clone, Debug)]
pub struct Hit {
    /// The node that accepted the pointer.
    pub node: NodeId,
    /// Path from root to node (inclusive).
    pub path: Vec<NodeId>,
    /// Pointer position in the accepted node's local coordinates.
    pub local_point: Point,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    seq: u64,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    view: ViewNode,
}

impl Node {
    fn new(generation: u32, seq: u64, view: ViewNode) -> Self {
        Self {
            generation,
            seq,
            parent: None,
            children: SmallVec::new(),
            view,
        }
    }
}

/// One level of the iterative hit-test descent.
#[derive(Debug)]
struct DescendFrame {
    id: NodeId,
    tf: Affine,
    local: Point,
    test_self: bool,
    children: SmallVec<[NodeId; 4]>,
    next_child: usize,
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node as a child of `parent` (or as a root if `None`).
    ///
    /// The node's [`ViewNode::pointer_events`] starts at whatever the caller
    /// put in `view`; `ViewNode::default()` gives [`PointerEvents::Auto`].
    /// A stale `parent` id is ignored and the new node becomes a root,
    /// matching the setters' convention for stale ids.
    pub fn insert(&mut self, parent: Option<NodeId>, view: ViewNode) -> NodeId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, seq, view));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, seq, view)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node and its subtree. The removed ids become stale immediately.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        // Free the subtree with an explicit worklist so the depth of the
        // tree never bounds the call stack.
        let mut pending: Vec<NodeId> = Vec::new();
        pending.push(id);
        while let Some(cur) = pending.pop() {
            pending.extend_from_slice(&self.node(cur).children);
            self.nodes[cur.idx()] = None;
            self.free_list.push(cur.idx());
        }
    }

    /// Reparent `id` under `new_parent` (or detach it into a root).
    ///
    /// The node is appended to the new parent's child list, placing it in
    /// front of its new siblings at equal z. A stale `new_parent` is treated
    /// as `None`: the node detaches into a root rather than panicking or
    /// attaching under whatever node now occupies the slot.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
    }

    /// Update local bounds.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.view.bounds = bounds;
        }
    }

    /// Update the local transform (relative to parent space).
    pub fn set_transform(&mut self, id: NodeId, tf: Affine) {
        if let Some(n) = self.node_opt_mut(id) {
            n.view.transform = tf;
        }
    }

    /// Update the local clip.
    pub fn set_clip(&mut self, id: NodeId, clip: Option<RoundedRect>) {
        if let Some(n) = self.node_opt_mut(id) {
            n.view.clip = clip;
        }
    }

    /// Update the z-index.
    pub fn set_z_index(&mut self, id: NodeId, z: i32) {
        if let Some(n) = self.node_opt_mut(id) {
            n.view.z_index = z;
        }
    }

    /// Update node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.view.flags = flags;
        }
    }

    /// Assign a pointer-event policy directly.
    pub fn set_pointer_events(&mut self, id: NodeId, policy: PointerEvents) {
        if let Some(n) = self.node_opt_mut(id) {
            n.view.pointer_events = policy;
        }
    }

    /// Assign a pointer-event policy from a style attribute.
    ///
    /// This is the string boundary: `None` (absent) and `Some("")` mean the
    /// default policy, the four keywords select their variant, and anything
    /// else fails with [`ParsePointerEventsError`] *without touching the
    /// node's current policy*. Stale ids parse but assign nothing, matching
    /// the other setters.
    pub fn set_pointer_events_attr(
        &mut self,
        id: NodeId,
        attr: Option<&str>,
    ) -> Result<(), ParsePointerEventsError> {
        let policy = PointerEvents::from_attr(attr)?;
        self.set_pointer_events(id, policy);
        Ok(())
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A [`NodeId`] is live if its slot exists and its generation matches the
    /// generation currently stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).parent
    }

    /// Get the children of a node, or an empty slice if the node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        if !self.is_alive(id) {
            return &[];
        }
        &self.node(id).children
    }

    /// Returns the pointer-event policy of a node if the identifier is live.
    pub fn pointer_events(&self, id: NodeId) -> Option<PointerEvents> {
        if !self.is_alive(id) {
            return None;
        }
        Some(self.node(id).view.pointer_events)
    }

    /// Returns the flags of a node if the identifier is live.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        if !self.is_alive(id) {
            return None;
        }
        Some(self.node(id).view.flags)
    }

    /// Returns the z-index of a node if the identifier is live.
    pub fn z_index(&self, id: NodeId) -> Option<i32> {
        if !self.is_alive(id) {
            return None;
        }
        Some(self.node(id).view.z_index)
    }

    /// Hit test a world-space point and return the node that should receive
    /// the pointer, if any.
    ///
    /// The traversal proceeds top-down from the roots, front to back:
    ///
    /// - Nodes without [`NodeFlags::VISIBLE`] hide their whole subtree.
    /// - At each node the point is mapped into local coordinates through the
    ///   composed transform; containment in bounds and clip decides whether
    ///   the node itself is under the pointer, and (for nodes with
    ///   [`NodeFlags::CLIP_CHILDREN`]) whether descent is permitted at all.
    /// - The node's [`PointerEvents`] policy then narrows those findings:
    ///   it can make the node transparent to pointers, stop descent, or both.
    /// - Children are tried in descending z-order (later siblings first on
    ///   ties); the first descendant hit wins over the node itself. Roots
    ///   break z ties by insertion recency: the newest root is in front.
    ///
    /// Children of a non-clipping node may be hit outside their parent's
    /// bounds. Degenerate (non-invertible) transforms never match.
    pub fn hit_test_point(&self, point: Point) -> Option<Hit> {
        for root in self.roots_front_to_back() {
            if let Some(hit) = self.hit_descend(root, point) {
                return Some(hit);
            }
        }
        None
    }

    // --- internals ---

    /// Access a live node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        self.nodes[parent.idx()]
            .as_mut()
            .expect("dangling parent NodeId")
            .children
            .push(id);
        self.nodes[id.idx()]
            .as_mut()
            .expect("dangling NodeId")
            .parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.nodes[parent.idx()]
            .as_mut()
            .expect("dangling parent NodeId");
        p.children.retain(|c| *c != id);
        self.nodes[id.idx()]
            .as_mut()
            .expect("dangling NodeId")
            .parent = None;
    }

    /// All root nodes, front to back: descending z, newest insertion first
    /// on ties.
    fn roots_front_to_back(&self) -> SmallVec<[NodeId; 4]> {
        let mut roots: SmallVec<[NodeId; 4]> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| match n {
                Some(n) if n.parent.is_none() =>
                {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "NodeId uses 32-bit indices by design."
                    )]
                    Some(NodeId::new(i as u32, n.generation))
                }
                _ => None,
            })
            .collect();
        // Stable ascending sort on (z, seq), then reverse: descending z with
        // the most recently inserted root first on ties. Slot index cannot
        // stand in for age here because the free list reuses slots.
        roots.sort_by_key(|id| {
            let n = self.node(*id);
            (n.view.z_index, n.seq)
        });
        roots.reverse();
        roots
    }

    /// Children of `id`, front to back: descending z, later siblings first on ties.
    fn children_front_to_back(&self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        let mut children = self.node(id).children.clone();
        // Stable ascending sort keeps sibling order among equal z; reversing
        // then yields descending z with the *later* sibling first on ties.
        children.sort_by_key(|id| self.node(*id).view.z_index);
        children.reverse();
        children
    }

    /// Build the descent frame for one node, or `None` if its flags, clip,
    /// or policy take the whole subtree out of consideration.
    fn frame_for(&self, id: NodeId, parent_tf: Affine, point: Point) -> Option<DescendFrame> {
        let node = self.node(id);
        if !node.view.flags.contains(NodeFlags::VISIBLE) {
            return None;
        }

        let tf = parent_tf * node.view.transform;
        let local = tf.inverse() * point;

        let in_clip = node.view.clip.is_none_or(|clip| clip.contains(local));
        let inside = node.view.bounds.contains(local) && in_clip;
        let may_recurse = in_clip || !node.view.flags.contains(NodeFlags::CLIP_CHILDREN);

        let decision = HitTestDecision::evaluate(node.view.pointer_events, inside, may_recurse);
        if decision.skips_subtree() {
            return None;
        }

        let children = if decision.test_children {
            self.children_front_to_back(id)
        } else {
            SmallVec::new()
        };
        Some(DescendFrame {
            id,
            tf,
            local,
            test_self: decision.test_self,
            children,
            next_child: 0,
        })
    }

    /// Depth-first descent below one root, on an explicit frame stack so the
    /// depth of the tree never bounds the call stack.
    ///
    /// A frame's children are tried in order before the frame itself; the
    /// frame becomes the hit only once its children are exhausted and its
    /// policy and geometry allowed a self-test.
    fn hit_descend(&self, root: NodeId, point: Point) -> Option<Hit> {
        let mut stack: Vec<DescendFrame> = Vec::new();
        stack.push(self.frame_for(root, Affine::IDENTITY, point)?);
        while let Some(top) = stack.last_mut() {
            if top.next_child < top.children.len() {
                let child = top.children[top.next_child];
                top.next_child += 1;
                let tf = top.tf;
                if let Some(frame) = self.frame_for(child, tf, point) {
                    stack.push(frame);
                }
            } else if top.test_self {
                let node = top.id;
                let local_point = top.local;
                let path = stack.iter().map(|frame| frame.id).collect();
                return Some(Hit {
                    node,
                    path,
                    local_point,
                });
            } else {
                stack.pop();
            }
        }
        None
    }
}
