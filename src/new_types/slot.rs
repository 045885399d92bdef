use super::node::Node;

/// A cell of the set's table.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Slot {
    /// never used; a probe that reaches it stops.
    Empty,
    Occupied(Node),
    /// removed; lookups stop here, insertion probes step over it.
    Tombstone,
}

impl Slot {
    pub fn node(&self) -> Option<&Node> {
        match self {
            Slot::Occupied(node) => Some(node),
            _ => None,
        }
    }
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }
}
