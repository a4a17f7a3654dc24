// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Pointer Policy: per-node pointer-event dispatch policy.
//!
//! This crate defines [`PointerEvents`], a closed four-variant policy that a
//! view tree attaches to each node to control participation in pointer
//! hit testing, together with [`HitTestDecision`](decision::HitTestDecision),
//! the pure rule a hit-test traversal applies at every node it visits.
//!
//! The policy answers two independent questions:
//!
//! - may the node *itself* accept the pointer, and
//! - may the traversal *descend into its children*?
//!
//! | Variant | Self | Children |
//! |---|---|---|
//! | [`PointerEvents::Auto`] (default) | yes | yes |
//! | [`PointerEvents::None`] | no | no |
//! | [`PointerEvents::BoxNone`] | no | yes |
//! | [`PointerEvents::BoxOnly`] | yes | no |
//!
//! The policy is deliberately dumb data: it carries no geometry and performs
//! no traversal. A scene tree (for example `thicket_view_tree`) combines it
//! with containment checks it computes itself and feeds both into
//! [`HitTestDecision::evaluate`](decision::HitTestDecision::evaluate).
//!
//! ## Parsing
//!
//! Style systems usually carry the policy as a small keyword vocabulary
//! (`"auto"`, `"none"`, `"box-none"`, `"box-only"`). [`PointerEvents`]
//! implements [`FromStr`] over exactly that vocabulary, and
//! [`PointerEvents::from_attr`] additionally treats an absent attribute as
//! the default. Unknown keywords fail with [`ParsePointerEventsError`];
//! they are never coerced to a default, so an authoring typo surfaces at the
//! boundary instead of silently producing an interactive node.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

pub mod decision;

/// Pointer-event dispatch policy for one view node.
///
/// Controls whether the node itself and/or its descendants participate in
/// pointer hit testing. Every node holds exactly one value; freshly created
/// nodes default to [`PointerEvents::Auto`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PointerEvents {
    /// The node and its descendants both participate in hit testing.
    #[default]
    Auto,
    /// Neither the node nor any of its descendants participate.
    None,
    /// The node itself is transparent to pointers, but its descendants
    /// still participate.
    BoxNone,
    /// The node itself participates, but the traversal never descends into
    /// its descendants.
    BoxOnly,
}

impl PointerEvents {
    /// Whether this policy lets the node itself accept a pointer.
    pub const fn allows_self(self) -> bool {
        matches!(self, Self::Auto | Self::BoxOnly)
    }

    /// Whether this policy lets a traversal descend into the node's children.
    pub const fn allows_children(self) -> bool {
        matches!(self, Self::Auto | Self::BoxNone)
    }

    /// The canonical style keyword for this policy.
    pub const fn as_keyword(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
            Self::BoxNone => "box-none",
            Self::BoxOnly => "box-only",
        }
    }

    /// Parse an optional style attribute.
    ///
    /// An absent attribute means the author never specified a policy, which
    /// is the default ([`PointerEvents::Auto`]). A present attribute goes
    /// through the same strict keyword parse as [`FromStr`].
    pub fn from_attr(attr: Option<&str>) -> Result<Self, ParsePointerEventsError> {
        match attr {
            Some(raw) => raw.parse(),
            None => Ok(Self::Auto),
        }
    }
}

impl FromStr for PointerEvents {
    type Err = ParsePointerEventsError;

    /// Parse a style keyword.
    ///
    /// The empty string is accepted as the default: property pipelines that
    /// reset a style value to "nothing" mean "unspecified", not "invalid".
    /// Every other unknown string is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "auto" => Ok(Self::Auto),
            "none" => Ok(Self::None),
            "box-none" => Ok(Self::BoxNone),
            "box-only" => Ok(Self::BoxOnly),
            other => Err(ParsePointerEventsError {
                keyword: String::from(other),
            }),
        }
    }
}

impl fmt::Display for PointerEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_keyword())
    }
}

/// Error returned when a string does not name a pointer-events policy.
///
/// Carries the rejected input so callers can report which keyword was wrong.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsePointerEventsError {
    keyword: String,
}

impl ParsePointerEventsError {
    /// The input that failed to parse.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl fmt::Display for ParsePointerEventsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized pointer-events keyword {:?} (expected one of \
             \"auto\", \"none\", \"box-none\", \"box-only\")",
            self.keyword
        )
    }
}

impl core::error::Error for ParsePointerEventsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn default_is_auto() {
        assert_eq!(PointerEvents::default(), PointerEvents::Auto);
    }

    #[test]
    fn keywords_round_trip() {
        for policy in [
            PointerEvents::Auto,
            PointerEvents::None,
            PointerEvents::BoxNone,
            PointerEvents::BoxOnly,
        ] {
            assert_eq!(policy.as_keyword().parse(), Ok(policy));
        }
    }

    #[test]
    fn parse_keywords() {
        assert_eq!("auto".parse(), Ok(PointerEvents::Auto));
        assert_eq!("none".parse(), Ok(PointerEvents::None));
        assert_eq!("box-none".parse(), Ok(PointerEvents::BoxNone));
        assert_eq!("box-only".parse(), Ok(PointerEvents::BoxOnly));
    }

    #[test]
    fn empty_and_absent_mean_default() {
        assert_eq!("".parse(), Ok(PointerEvents::Auto));
        assert_eq!(PointerEvents::from_attr(None), Ok(PointerEvents::Auto));
        assert_eq!(
            PointerEvents::from_attr(Some("box-none")),
            Ok(PointerEvents::BoxNone)
        );
    }

    #[test]
    fn unknown_keywords_fail_instead_of_defaulting() {
        for bad in ["None", "BOX-NONE", "box_none", "all", "visiblePainted", " auto"] {
            let err = bad.parse::<PointerEvents>().unwrap_err();
            assert_eq!(err.keyword(), bad);
        }
        assert!(PointerEvents::from_attr(Some("boxnone")).is_err());
    }

    #[test]
    fn error_message_names_the_offender() {
        let err = "nope".parse::<PointerEvents>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"nope\""), "message should quote the input: {msg}");
    }

    #[test]
    fn predicates_match_the_policy_table() {
        let table = [
            (PointerEvents::Auto, true, true),
            (PointerEvents::None, false, false),
            (PointerEvents::BoxNone, false, true),
            (PointerEvents::BoxOnly, true, false),
        ];
        for (policy, self_ok, children_ok) in table {
            assert_eq!(policy.allows_self(), self_ok, "{policy}");
            assert_eq!(policy.allows_children(), children_ok, "{policy}");
        }
    }
}
