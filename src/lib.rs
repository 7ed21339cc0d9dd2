#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to solve mazes drawn as color-labeled images.
//!
//! ## Introduction
//! A maze is a raster image where every pixel is either a wall or traversable. One pixel marks
//! the entry and one marks the exit. This crate turns such an image into a weighted Graph and
//! searches the shortest Path between those two pixels.
//!
//! Every pixel is a Node. Traversable Nodes are linked with their traversable neighbors in all
//! 8 directions: straight steps cost `1`, diagonal steps cost `√2`. A diagonal step is only
//! allowed if both pixels next to it are traversable as well, so that a Path never squeezes
//! through the gap where two walls touch at their corners:
//! ```text
//! S #      S may not step to E, since that would pass between the two walls
//! # E
//! ```
//! The Path is then found with Dijkstra's Algorithm on top of a purpose-built fixed-capacity
//! [`MinHeap`].
//!
//! ## Examples
//! Solving a maze in one go:
//! ```
//! use maze_pathfinding::prelude::*;
//!
//! // S = entry, E = exit, # = wall
//! let grid: TileGrid = "
//! S.#..
//! .##.#
//! ....E
//! ".parse().unwrap();
//!
//! let path = maze_pathfinding::solve(&grid).unwrap();
//! // Nodes are the row-major indices of the pixels
//! assert_eq!(path, vec![0, 5, 10, 11, 12, 13, 14]);
//! ```
//! Building the Graph once and searching it separately:
//! ```
//! # use maze_pathfinding::prelude::*;
//! # let grid: TileGrid = "
//! # S.#..
//! # .##.#
//! # ....E
//! # ".parse().unwrap();
//! let graph = Graph::build(&grid).unwrap();
//!
//! let path = dijkstra_search(&graph, &SearchConfig::default()).unwrap();
//! // (0, 1) -> (1, 2) would cut the corner of the wall at (1, 1)
//! assert_eq!(path.cost(), 6.0);
//! assert_eq!(
//!     path.points(&graph),
//!     vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (3, 2), (4, 2)],
//! );
//!
//! // the Graph can be searched between any two Nodes
//! let other = shortest_path(&graph, 3, graph.exit(), &SearchConfig::default());
//! assert!(other.is_ok());
//! ```
//! Any type that can classify its pixels can be used as a [`Grid`]. With the default `image`
//! feature, [`ImageGrid`] reads the classification from the colors of an RGBA image, as
//! configured by a [`Palette`].
//!
//! ## Errors
//! Every failure is reported through [`Error`]: a maze without an entry or exit is a
//! [`Error::Configuration`], a maze where the exit cannot be reached is [`Error::Unreachable`].
//!
//! ## Features
//! - `parallel` (default): [`Graph::build_parallel`] scans the rows of the Grid with rayon
//! - `image` (default): [`ImageGrid`] and [`Palette`]

/// The Type used to reference a Node in the Graph: the row-major index of its pixel
pub type NodeID = usize;

/// A shorthand for `(x, y)` Points on the Grid
pub type Point = (usize, usize);

/// The Type of Edge weights and Path costs
pub type Cost = f64;

pub mod error;
pub use error::{Error, Marker, Result};

mod direction;
pub use direction::{Direction, DIAGONAL_COST, STRAIGHT_COST};

mod edge;
pub use edge::Edge;

pub mod grid;
pub use grid::{Grid, Tile, TileGrid};
#[cfg(feature = "image")]
pub use grid::{ImageGrid, Palette};

mod queue;
pub use queue::Queue;

mod heap;
pub use heap::{MinHeap, PrioNode};

pub mod graph;
pub use graph::Graph;

mod path;
pub use path::Path;

mod search_config;
pub use search_config::SearchConfig;

mod dijkstra;
pub use dijkstra::{dijkstra_search, shortest_path};

/// Builds the Graph of `grid` and searches the shortest Path from its entry to its exit.
///
/// This is a shorthand for [`Graph::build`] followed by [`dijkstra_search`] with the default
/// [`SearchConfig`]. Build the Graph yourself to search it more than once.
pub fn solve<G: Grid + ?Sized>(grid: &G) -> Result<Path> {
	let graph = Graph::build(grid)?;
	dijkstra_search(&graph, &SearchConfig::default())
}

/// The most commonly used items of this crate
pub mod prelude {
	pub use crate::{
		dijkstra_search, shortest_path, Direction, Error, Graph, Grid, Path, SearchConfig, Tile,
		TileGrid,
	};

	#[cfg(feature = "image")]
	pub use crate::{ImageGrid, Palette};
}
