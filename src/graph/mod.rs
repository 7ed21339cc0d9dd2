//! The weighted maze Graph and how it is built from a [`Grid`](crate::Grid).

mod adjacency;
pub use adjacency::{Adjacency, Edges, SLOTS};

mod builder;

mod connectivity;

use crate::error::Result;
use crate::{Direction, Edge, NodeID, Point};

/// An 8-connected Graph over the pixels of a maze, with a designated entry and exit Node.
///
/// A Graph is usually created with [`Graph::build`] and is read-only afterwards, so it can be
/// shared between threads and searched any number of times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
	adjacency: Adjacency,
	entry: NodeID,
	exit: NodeID,
}

impl Graph {
	/// Assembles a Graph from a prepared adjacency table.
	///
	/// Fails if `entry` or `exit` is not a Node of the table.
	pub fn from_parts(adjacency: Adjacency, entry: NodeID, exit: NodeID) -> Result<Graph> {
		adjacency.check_node(entry)?;
		adjacency.check_node(exit)?;
		Ok(Graph {
			adjacency,
			entry,
			exit,
		})
	}

	/// The Node where the maze starts
	pub fn entry(&self) -> NodeID {
		self.entry
	}

	/// The Node where the maze ends
	pub fn exit(&self) -> NodeID {
		self.exit
	}

	/// The number of columns of the source Grid
	pub fn width(&self) -> usize {
		self.adjacency.width()
	}

	/// The number of rows of the source Grid
	pub fn height(&self) -> usize {
		self.adjacency.height()
	}

	/// The number of Nodes, including walls
	pub fn node_count(&self) -> usize {
		self.adjacency.node_count()
	}

	/// The number of directed Edges
	pub fn link_count(&self) -> usize {
		self.adjacency.link_count()
	}

	/// The `(x, y)` position of a Node
	pub fn point_of(&self, node: NodeID) -> Point {
		self.adjacency.point_of(node)
	}

	/// The underlying adjacency table
	pub fn adjacency(&self) -> &Adjacency {
		&self.adjacency
	}

	/// All Edges starting at `node`
	pub fn edges(&self, node: NodeID) -> Result<Edges> {
		self.adjacency.edges(node)
	}

	/// The Edge from `node` in `direction`, if there is one
	pub fn edge(&self, node: NodeID, direction: Direction) -> Result<Option<Edge>> {
		self.adjacency.edge(node, direction)
	}
}
