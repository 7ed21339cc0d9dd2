//! The pixel Grid a maze Graph is built from.

use crate::error::{Error, InvalidArgument, Result};
use crate::graph::SLOTS;
use crate::{NodeID, Point};

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "image")]
mod image_grid;
#[cfg(feature = "image")]
pub use image_grid::{ImageGrid, Palette};

/// A rectangular Grid of classified pixels.
///
/// Pixels are addressed by their row-major index `y * width + x`. The Graph builder never looks
/// at the pixels themselves, only at these classifications, so any storage format works.
///
/// Entry and Exit pixels are usually also traversable, but this is up to the implementation.
pub trait Grid {
	/// The number of columns
	fn width(&self) -> usize;
	/// The number of rows
	fn height(&self) -> usize;
	/// `false` for walls
	fn is_traversable(&self, index: NodeID) -> bool;
	/// `true` if the pixel marks the start of the maze
	fn is_entry(&self, index: NodeID) -> bool;
	/// `true` if the pixel marks the end of the maze
	fn is_exit(&self, index: NodeID) -> bool;

	/// The total number of pixels
	fn len(&self) -> usize {
		self.width() * self.height()
	}

	/// `true` if the Grid has no pixels
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The row-major index of `(x, y)`, or `None` if the Point is outside of the Grid
	fn index_of(&self, (x, y): Point) -> Option<NodeID> {
		if x < self.width() && y < self.height() {
			Some(y * self.width() + x)
		} else {
			None
		}
	}

	/// The `(x, y)` Point of a row-major index
	fn point_of(&self, index: NodeID) -> Point {
		(index % self.width(), index / self.width())
	}
}

/// The classification of a single [`TileGrid`] cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tile {
	/// Not traversable
	Wall,
	/// Traversable
	#[default]
	Open,
	/// Traversable start of the maze
	Entry,
	/// Traversable end of the maze
	Exit,
}

impl Tile {
	/// The character used in the text representation of a [`TileGrid`]
	pub fn as_char(self) -> char {
		match self {
			Tile::Wall => '#',
			Tile::Open => '.',
			Tile::Entry => 'S',
			Tile::Exit => 'E',
		}
	}
}

impl TryFrom<char> for Tile {
	type Error = InvalidArgument;
	fn try_from(c: char) -> std::result::Result<Tile, InvalidArgument> {
		match c {
			'#' => Ok(Tile::Wall),
			'.' | ' ' => Ok(Tile::Open),
			'S' => Ok(Tile::Entry),
			'E' => Ok(Tile::Exit),
			_ => Err(InvalidArgument::UnknownTile(c)),
		}
	}
}

/// A [`Grid`] stored as a plain list of [`Tile`]s.
///
/// It can be parsed from a character map with one line per row:
/// `#` is a wall, `.` or a space is open, `S` is the entry and `E` the exit.
///
/// ## Examples
/// ```
/// use maze_pathfinding::{Grid, Tile, TileGrid};
///
/// let grid: TileGrid = "
/// S.#
/// #.E
/// ".parse().unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (3, 2));
/// assert_eq!(grid.tile((1, 1)), Some(Tile::Open));
/// assert!(grid.is_entry(0));
/// assert!(grid.is_exit(5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
	width: usize,
	height: usize,
	tiles: Vec<Tile>,
}

impl TileGrid {
	/// Creates a TileGrid from row-major `tiles`.
	///
	/// Fails if either dimension is 0, if the Grid is too large to build a Graph for, or if `tiles`
	/// does not have exactly `width * height` entries.
	pub fn new(width: usize, height: usize, tiles: Vec<Tile>) -> Result<TileGrid> {
		let expected = tile_count(width, height)?;
		if tiles.len() != expected {
			return Err(InvalidArgument::TileCount {
				expected,
				found: tiles.len(),
			}
			.into());
		}
		Ok(TileGrid {
			width,
			height,
			tiles,
		})
	}

	/// Creates a TileGrid where every Tile is open.
	///
	/// The size is checked before anything is allocated.
	pub fn open(width: usize, height: usize) -> Result<TileGrid> {
		let len = tile_count(width, height)?;
		TileGrid::new(width, height, vec![Tile::Open; len])
	}

	/// The Tile at `pos`, if it is inside the Grid
	pub fn tile(&self, pos: Point) -> Option<Tile> {
		self.index_of(pos).map(|i| self.tiles[i])
	}

	/// Replaces the Tile at `pos`. Points outside of the Grid are ignored.
	pub fn set_tile(&mut self, pos: Point, tile: Tile) {
		if let Some(i) = self.index_of(pos) {
			self.tiles[i] = tile;
		}
	}

	/// All Tiles in row-major order
	pub fn tiles(&self) -> &[Tile] {
		&self.tiles
	}
}

/// `width * height`, limited to sizes a Graph can be built for
fn tile_count(width: usize, height: usize) -> Result<usize> {
	if width == 0 || height == 0 {
		return Err(InvalidArgument::EmptyGrid { width, height }.into());
	}
	let len = width
		.checked_mul(height)
		.filter(|n| n.checked_mul(SLOTS).is_some())
		.ok_or(InvalidArgument::GridTooLarge { width, height })?;
	Ok(len)
}

impl Grid for TileGrid {
	fn width(&self) -> usize {
		self.width
	}
	fn height(&self) -> usize {
		self.height
	}
	fn is_traversable(&self, index: NodeID) -> bool {
		self.tiles.get(index).map_or(false, |&t| t != Tile::Wall)
	}
	fn is_entry(&self, index: NodeID) -> bool {
		self.tiles.get(index) == Some(&Tile::Entry)
	}
	fn is_exit(&self, index: NodeID) -> bool {
		self.tiles.get(index) == Some(&Tile::Exit)
	}
}

impl FromStr for TileGrid {
	type Err = Error;

	/// Parses a character map. Leading and trailing blank lines are skipped, so that the map can
	/// start on its own line in a raw string.
	fn from_str(s: &str) -> Result<TileGrid> {
		let rows: Vec<&str> = s
			.lines()
			.skip_while(|line| line.trim().is_empty())
			.collect();
		let end = rows
			.iter()
			.rposition(|line| !line.trim().is_empty())
			.map_or(0, |i| i + 1);
		let rows = &rows[..end];

		let width = rows.first().map_or(0, |row| row.chars().count());
		let mut tiles = Vec::with_capacity(width * rows.len());
		for (y, row) in rows.iter().enumerate() {
			let found = row.chars().count();
			if found != width {
				return Err(InvalidArgument::RaggedRow {
					row: y,
					expected: width,
					found,
				}
				.into());
			}
			for c in row.chars() {
				tiles.push(Tile::try_from(c)?);
			}
		}
		TileGrid::new(width, rows.len(), tiles)
	}
}

impl fmt::Display for TileGrid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for row in self.tiles.chunks(self.width) {
			for tile in row {
				write!(f, "{}", tile.as_char())?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}
