use crate::{Cost, Direction, NodeID};

/// A weighted connection between two neighboring traversable Nodes.
///
/// Edges are always stored in both directions, so for every Edge `a -> b` the Graph also
/// holds `b -> a` with the same weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// The Node the Edge starts at
	pub from: NodeID,
	/// The Node the Edge leads to
	pub to: NodeID,
	/// The cost of walking along the Edge
	pub weight: Cost,
}

impl Edge {
	pub(crate) fn new(from: NodeID, to: NodeID, direction: Direction) -> Edge {
		Edge {
			from,
			to,
			weight: direction.cost(),
		}
	}

	/// The same Edge walked the other way
	pub fn reversed(&self) -> Edge {
		Edge {
			from: self.to,
			to: self.from,
			weight: self.weight,
		}
	}
}
