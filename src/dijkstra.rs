use crate::error::{Error, Result};
use crate::{Cost, Graph, MinHeap, NodeID, Path, PrioNode, SearchConfig};

use log::debug;

/// Searches the shortest Path from the entry to the exit of a maze, using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// See [`shortest_path`] for details.
///
/// ## Examples
/// ```
/// use maze_pathfinding::{dijkstra_search, Graph, SearchConfig, TileGrid};
///
/// let grid: TileGrid = "
/// S#.
/// .#.
/// ..E
/// ".parse().unwrap();
/// let graph = Graph::build(&grid).unwrap();
///
/// let path = dijkstra_search(&graph, &SearchConfig::default()).unwrap();
/// // the wall at (1, 1) keeps the Path from cutting the corner
/// assert_eq!(path, vec![0, 3, 6, 7, 8]);
/// assert_eq!(path.cost(), 4.0);
/// ```
pub fn dijkstra_search(graph: &Graph, config: &SearchConfig) -> Result<Path> {
	shortest_path(graph, graph.entry(), graph.exit(), config)
}

/// Searches the shortest Path from `start` to `goal`.
///
/// The frontier is a [`MinHeap`] large enough for every Edge of the Graph, since each Node
/// is expanded at most once and relaxes each of its Edges at most once. Outdated heap records
/// of Nodes that were reached more cheaply in the meantime are skipped.
///
/// ## Returns
/// The Path including `start` and `goal`. If `start == goal`, the Path is just that Node with
/// a cost of 0.
///
/// ## Errors
/// - [`Error::Unreachable`] if no Path exists, or if the search gave up after
/// 	[`max_expansions`](SearchConfig::max_expansions)
/// - [`Error::InvalidArgument`] if `start` or `goal` is not part of the Graph
pub fn shortest_path(
	graph: &Graph,
	start: NodeID,
	goal: NodeID,
	config: &SearchConfig,
) -> Result<Path> {
	graph.adjacency().check_node(start)?;
	graph.adjacency().check_node(goal)?;

	let len = graph.node_count();
	let mut distance = vec![Cost::INFINITY; len];
	let mut previous: Vec<Option<NodeID>> = vec![None; len];
	let mut next = MinHeap::with_capacity(graph.link_count() + 1)?;

	distance[start] = 0.0;
	next.insert(PrioNode::new(start, 0.0))?;

	let mut expanded = 0;

	while !next.is_empty() {
		let PrioNode {
			node: current_id,
			priority: current_cost,
		} = next.remove_min()?;

		if current_cost > distance[current_id] {
			continue;
		}

		if current_id == goal {
			let steps = {
				let mut steps = vec![goal];
				let mut current = goal;
				while let Some(prev) = previous[current] {
					steps.push(prev);
					current = prev;
				}
				steps.reverse();
				steps
			};
			debug!(
				"found path of cost {} with {} steps after {} expansions",
				current_cost,
				steps.len(),
				expanded
			);
			return Ok(Path::new(steps, current_cost));
		}

		if config.max_expansions.map_or(false, |max| expanded >= max) {
			debug!("giving up after {} expansions", expanded);
			break;
		}
		expanded += 1;

		for edge in graph.edges(current_id)? {
			let other_cost = current_cost + edge.weight;
			if other_cost < distance[edge.to] {
				distance[edge.to] = other_cost;
				previous[edge.to] = Some(current_id);
				next.insert(PrioNode::new(edge.to, other_cost))?;
			}
		}
	}

	debug!(
		"{:?} is not reachable from {:?}",
		graph.point_of(goal),
		graph.point_of(start)
	);
	Err(Error::Unreachable {
		from: start,
		to: goal,
	})
}
