use crate::{Cost, Graph, NodeID, Point};

use std::fmt;
use std::ops::Index;

/// A Path through the Graph, from a start Node to a goal Node.
///
/// The first Node is always the start and the last one is always the goal. A Path from a Node to
/// itself contains just that Node and has a cost of 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
	nodes: Vec<NodeID>,
	cost: Cost,
}

impl Path {
	/// Creates a Path from its Nodes and their total cost
	pub fn new(nodes: Vec<NodeID>, cost: Cost) -> Path {
		Path { nodes, cost }
	}

	/// The summed weight of all Edges along the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of Nodes, including start and goal
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if the Path has no Nodes
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The first Node
	pub fn start(&self) -> Option<NodeID> {
		self.nodes.first().copied()
	}

	/// The last Node
	pub fn goal(&self) -> Option<NodeID> {
		self.nodes.last().copied()
	}

	/// The Nodes in walking order
	pub fn nodes(&self) -> &[NodeID] {
		&self.nodes
	}

	/// Returns an Iterator over the Nodes in walking order
	pub fn iter(&self) -> std::slice::Iter<'_, NodeID> {
		self.nodes.iter()
	}

	/// Converts the Nodes to `(x, y)` Points on the pixel Grid of `graph`, the Graph that was
	/// searched for this Path
	pub fn points(&self, graph: &Graph) -> Vec<Point> {
		self.nodes.iter().map(|&n| graph.point_of(n)).collect()
	}

	/// Unwraps the list of Nodes
	pub fn into_nodes(self) -> Vec<NodeID> {
		self.nodes
	}
}

impl Index<usize> for Path {
	type Output = NodeID;
	fn index(&self, index: usize) -> &NodeID {
		&self.nodes[index]
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a NodeID;
	type IntoIter = std::slice::Iter<'a, NodeID>;
	fn into_iter(self) -> Self::IntoIter {
		self.nodes.iter()
	}
}

impl PartialEq<Vec<NodeID>> for Path {
	fn eq(&self, rhs: &Vec<NodeID>) -> bool {
		&self.nodes == rhs
	}
}

impl<'a> PartialEq<&'a [NodeID]> for Path {
	fn eq(&self, rhs: &&'a [NodeID]) -> bool {
		self.nodes.as_slice() == *rhs
	}
}

impl fmt::Display for Path {
	/// `Path[3 nodes, cost 2.828]: 0 -> 4 -> 8`
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let plural = if self.nodes.len() == 1 { "" } else { "s" };
		write!(
			f,
			"Path[{} node{}, cost {:.3}]:",
			self.nodes.len(),
			plural,
			self.cost
		)?;
		for (i, node) in self.nodes.iter().enumerate() {
			let separator = if i == 0 { " " } else { " -> " };
			write!(f, "{}{}", separator, node)?;
		}
		Ok(())
	}
}
