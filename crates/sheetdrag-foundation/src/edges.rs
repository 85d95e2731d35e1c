//! Edge sets for scrollable areas.
//!
//! An [`EdgeSet`] is a plain value: it is computed from live scroll geometry
//! when needed and never updated in place behind the caller's back.

use bitflags::bitflags;
use std::fmt;

use crate::axis::Axis;

bitflags! {
    /// Set of edges of a scrollable area.
    ///
    /// Used both for "edges the content can still scroll toward" and for
    /// configuration such as the edges a drag is allowed to claim.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EdgeSet: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;

        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

/// A single edge of a scrollable area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// All edges in canonical order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// The scroll axis this edge terminates.
    pub fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Vertical,
            Edge::Left | Edge::Right => Axis::Horizontal,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

impl From<Edge> for EdgeSet {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => EdgeSet::TOP,
            Edge::Bottom => EdgeSet::BOTTOM,
            Edge::Left => EdgeSet::LEFT,
            Edge::Right => EdgeSet::RIGHT,
        }
    }
}

impl EdgeSet {
    /// Builds a set containing every edge for which `predicate` holds.
    pub fn from_predicate(mut predicate: impl FnMut(Edge) -> bool) -> Self {
        Edge::ALL
            .into_iter()
            .filter(|edge| predicate(*edge))
            .fold(EdgeSet::empty(), |set, edge| set | EdgeSet::from(edge))
    }

    /// Returns true if `edge` is a member of this set.
    #[inline]
    pub fn has(self, edge: Edge) -> bool {
        self.contains(edge.into())
    }

    /// Iterates the member edges in canonical order.
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |edge| self.has(*edge))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for EdgeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for edge in self.edges() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(edge.name())?;
            first = false;
        }
        Ok(())
    }
}
