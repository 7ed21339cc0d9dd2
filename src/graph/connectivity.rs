use super::Graph;
use crate::error::Result;
use crate::{NodeID, Queue};

impl Graph {
	/// All Nodes that can be reached from `start`, in breadth-first order.
	///
	/// The first element is always `start` itself. Walls and isolated pixels only reach
	/// themselves.
	///
	/// ## Examples
	/// ```
	/// use maze_pathfinding::{Graph, TileGrid};
	///
	/// let grid: TileGrid = "
	/// S.#.
	/// ..#E
	/// ".parse().unwrap();
	/// let graph = Graph::build(&grid).unwrap();
	///
	/// let mut reachable = graph.reachable_from(graph.entry()).unwrap();
	/// reachable.sort();
	/// assert_eq!(reachable, vec![0, 1, 4, 5]);
	/// assert!(!graph.is_connected(graph.entry(), graph.exit()).unwrap());
	/// ```
	pub fn reachable_from(&self, start: NodeID) -> Result<Vec<NodeID>> {
		let mut order = vec![];
		self.breadth_first(start, |node| {
			order.push(node);
			false
		})?;
		Ok(order)
	}

	/// `true` if there is any Path between `a` and `b`
	pub fn is_connected(&self, a: NodeID, b: NodeID) -> Result<bool> {
		self.adjacency.check_node(b)?;
		self.breadth_first(a, |node| node == b)
	}

	/// Visits every Node reachable from `start` until `visit` returns `true`.
	///
	/// Returns whether the traversal was stopped early.
	fn breadth_first(&self, start: NodeID, mut visit: impl FnMut(NodeID) -> bool) -> Result<bool> {
		self.adjacency.check_node(start)?;

		let mut seen = vec![false; self.node_count()];
		let mut queue = Queue::new();
		seen[start] = true;
		queue.insert(start);

		while !queue.is_empty() {
			let current = queue.pop()?;
			if visit(current) {
				return Ok(true);
			}
			for edge in self.edges(current)? {
				if !seen[edge.to] {
					seen[edge.to] = true;
					queue.insert(edge.to);
				}
			}
		}
		Ok(false)
	}
}

#[cfg(test)]
mod tests {
	use crate::error::{Error, InvalidArgument};
	use crate::{Graph, TileGrid};

	#[test]
	fn diagonal_connects() {
		let grid: TileGrid = "
S.#
..#
#.E
"
		.parse()
		.unwrap();
		let graph = Graph::build(&grid).unwrap();
		assert!(graph.is_connected(0, 8).unwrap());
		assert!(graph.is_connected(8, 0).unwrap());
		let reachable = graph.reachable_from(0).unwrap();
		assert_eq!(reachable[0], 0);
		assert_eq!(reachable.len(), 6);
	}

	#[test]
	fn wall_reaches_itself() {
		let grid: TileGrid = "S#E".parse().unwrap();
		let graph = Graph::build(&grid).unwrap();
		assert_eq!(graph.reachable_from(1).unwrap(), vec![1]);
		assert!(!graph.is_connected(0, 2).unwrap());
	}

	#[test]
	fn out_of_range() {
		let grid: TileGrid = "S.E".parse().unwrap();
		let graph = Graph::build(&grid).unwrap();
		assert_eq!(
			graph.is_connected(0, 3),
			Err(Error::InvalidArgument(InvalidArgument::NodeOutOfRange {
				node: 3,
				len: 3
			}))
		);
	}
}
