use super::{Adjacency, Graph};
use crate::error::{Error, Marker, Result};
use crate::{Direction, Grid, NodeID, Point};

use log::{debug, warn};

impl Graph {
	/// Builds the Graph of a maze.
	///
	/// Every traversable pixel is linked with its traversable neighbors in all 8 directions.
	/// Straight links cost `1`, diagonal links cost `√2`. A diagonal link is only created if
	/// both pixels it passes between are traversable as well, so a Path can never squeeze
	/// through the corner where two walls touch.
	///
	/// If several pixels are marked as entry (or exit), the first one in row-major order is used.
	///
	/// ## Errors
	/// - [`Error::Configuration`] if the Grid has no entry or no exit pixel (entry is checked first)
	/// - [`Error::InvalidArgument`] if the Grid is empty or too large
	///
	/// ## Examples
	/// ```
	/// use maze_pathfinding::{Direction, Graph, TileGrid};
	///
	/// let grid: TileGrid = "
	/// S.
	/// #E
	/// ".parse().unwrap();
	///
	/// let graph = Graph::build(&grid).unwrap();
	/// assert_eq!((graph.entry(), graph.exit()), (0, 3));
	///
	/// // the wall at (0, 1) blocks the diagonal from S to E
	/// assert!(graph.edge(0, Direction::SouthEast).unwrap().is_none());
	/// assert!(graph.edge(0, Direction::East).unwrap().is_some());
	/// ```
	pub fn build<G: Grid + ?Sized>(grid: &G) -> Result<Graph> {
		let (width, height) = (grid.width(), grid.height());
		debug!("building graph for a {}x{} grid", width, height);

		let mut adjacency = Adjacency::new(width, height)?;
		let mut entry = None;
		let mut exit = None;

		for index in 0..adjacency.node_count() {
			if grid.is_traversable(index) {
				for direction in forward_links(grid, index) {
					adjacency.link(index, direction)?;
				}
			}

			if entry.is_none() && grid.is_entry(index) {
				entry = Some(index);
			}
			if exit.is_none() && grid.is_exit(index) {
				exit = Some(index);
			}
		}

		finish(adjacency, entry, exit)
	}

	/// Same as [`build`](Graph::build), but scans the rows of the Grid in parallel.
	///
	/// The resulting Graph is identical to the one created by `build`.
	#[cfg(feature = "parallel")]
	pub fn build_parallel<G: Grid + Sync + ?Sized>(grid: &G) -> Result<Graph> {
		use rayon::prelude::*;

		let (width, height) = (grid.width(), grid.height());
		debug!("building graph for a {}x{} grid in parallel", width, height);

		let mut adjacency = Adjacency::new(width, height)?;

		let rows: Vec<Vec<(NodeID, Direction)>> = (0..height)
			.into_par_iter()
			.map(|y| {
				let mut links = vec![];
				for index in y * width..(y + 1) * width {
					if grid.is_traversable(index) {
						links.extend(forward_links(grid, index).map(|dir| (index, dir)));
					}
				}
				links
			})
			.collect();

		for (index, direction) in rows.into_iter().flatten() {
			adjacency.link(index, direction)?;
		}

		let len = adjacency.node_count();
		let entry = (0..len).into_par_iter().find_first(|&i| grid.is_entry(i));
		let exit = (0..len).into_par_iter().find_first(|&i| grid.is_exit(i));

		finish(adjacency, entry, exit)
	}
}

/// The forward directions (E, SE, S, SW) in which the traversable pixel at `index` gets linked
fn forward_links<'a, G: Grid + ?Sized>(
	grid: &'a G,
	index: NodeID,
) -> impl Iterator<Item = Direction> + 'a {
	let pos = grid.point_of(index);
	Direction::FORWARD
		.into_iter()
		.filter(move |&direction| can_link(grid, pos, direction))
}

fn can_link<G: Grid + ?Sized>(grid: &G, pos: Point, direction: Direction) -> bool {
	let size = (grid.width(), grid.height());
	let is_open = |dir: Direction| {
		dir.step(pos, size)
			.and_then(|p| grid.index_of(p))
			.map_or(false, |i| grid.is_traversable(i))
	};
	is_open(direction) && direction.flanks().map_or(true, |(a, b)| is_open(a) && is_open(b))
}

fn finish(adjacency: Adjacency, entry: Option<NodeID>, exit: Option<NodeID>) -> Result<Graph> {
	let Some(entry) = entry else {
		warn!("maze has no entry point");
		return Err(Error::Configuration(Marker::Entry));
	};
	let Some(exit) = exit else {
		warn!("maze has no exit point");
		return Err(Error::Configuration(Marker::Exit));
	};
	debug!(
		"graph has {} links, entry at {:?}, exit at {:?}",
		adjacency.link_count() / 2,
		adjacency.point_of(entry),
		adjacency.point_of(exit),
	);
	Graph::from_parts(adjacency, entry, exit)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Tile, TileGrid};
	use Direction::*;

	fn build(map: &str) -> Graph {
		Graph::build(&map.parse::<TileGrid>().unwrap()).unwrap()
	}

	#[test]
	fn open_row() {
		let graph = build("S.E");
		assert_eq!(graph.link_count(), 4);
		assert_eq!(graph.edge(0, East).unwrap().map(|e| e.to), Some(1));
		assert_eq!(graph.edge(1, West).unwrap().map(|e| e.to), Some(0));
		assert_eq!(graph.edge(1, East).unwrap().map(|e| e.weight), Some(1.0));
		assert_eq!(graph.edge(2, East).unwrap(), None);
	}

	#[test]
	fn open_square_has_all_diagonals() {
		let graph = build(
			"
S..
...
..E
",
		);
		// 12 straight and 8 diagonal links, each stored twice
		assert_eq!(graph.link_count(), 2 * (12 + 8));
		assert_eq!(graph.edges(4).unwrap().count(), 8);
		let edge = graph.edge(4, NorthEast).unwrap().unwrap();
		assert_eq!(edge.to, 2);
		assert_eq!(edge.weight, std::f64::consts::SQRT_2);
	}

	#[test]
	fn no_corner_cutting() {
		// the only connection between S and E is the diagonal between two walls
		let graph = build(
			"
S#
#E
",
		);
		assert_eq!(graph.link_count(), 0);
		assert_eq!(graph.edge(0, SouthEast).unwrap(), None);
		assert_eq!(graph.edge(3, NorthWest).unwrap(), None);

		let graph = build(
			"
#S
E#
",
		);
		assert_eq!(graph.edge(1, SouthWest).unwrap(), None);
		assert_eq!(graph.edge(2, NorthEast).unwrap(), None);
	}

	#[test]
	fn one_wall_still_blocks_diagonal() {
		let graph = build(
			"
S.
#E
",
		);
		assert_eq!(graph.edge(0, SouthEast).unwrap(), None);
		assert!(graph.edge(0, East).unwrap().is_some());
		assert!(graph.edge(1, South).unwrap().is_some());
	}

	#[test]
	fn walls_have_no_edges() {
		let graph = build(
			"
S#.
.#.
..E
",
		);
		assert_eq!(graph.edges(1).unwrap().count(), 0);
		assert_eq!(graph.edges(4).unwrap().count(), 0);
		// and nothing links into them
		for node in 0..graph.node_count() {
			for edge in graph.edges(node).unwrap() {
				assert!(edge.to != 1 && edge.to != 4);
			}
		}
	}

	#[test]
	fn missing_markers() {
		let grid: TileGrid = "..E".parse().unwrap();
		assert_eq!(
			Graph::build(&grid).unwrap_err(),
			Error::Configuration(Marker::Entry)
		);
		let grid: TileGrid = "S..".parse().unwrap();
		assert_eq!(
			Graph::build(&grid).unwrap_err(),
			Error::Configuration(Marker::Exit)
		);
		// entry is reported first
		let grid: TileGrid = "...".parse().unwrap();
		assert_eq!(
			Graph::build(&grid).unwrap_err(),
			Error::Configuration(Marker::Entry)
		);
	}

	#[test]
	fn first_marker_wins() {
		let mut grid: TileGrid = "
.S.
S.E
E..
"
		.parse()
		.unwrap();
		let graph = Graph::build(&grid).unwrap();
		assert_eq!(graph.entry(), 1);
		assert_eq!(graph.exit(), 5);

		grid.set_tile((1, 0), Tile::Open);
		let graph = Graph::build(&grid).unwrap();
		assert_eq!(graph.entry(), 3);
	}

	#[cfg(feature = "parallel")]
	#[test]
	fn parallel_matches_sequential() {
		let grid: TileGrid = "
.#....#..
S#.##.#.#
...#..#..
##.#.##.E
.....#...
"
		.parse()
		.unwrap();
		assert_eq!(
			Graph::build_parallel(&grid).unwrap(),
			Graph::build(&grid).unwrap()
		);

		let grid: TileGrid = "S..".parse().unwrap();
		assert_eq!(
			Graph::build_parallel(&grid).unwrap_err(),
			Error::Configuration(Marker::Exit)
		);
	}
}
