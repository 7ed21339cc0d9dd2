//! Errors reported by graph construction, the search structures and the search itself.

use crate::{Direction, NodeID};
use std::fmt;

/// A Result with the crate's [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The two marker pixels a maze needs to be solvable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
	/// The pixel where the Path starts
	Entry,
	/// The pixel where the Path ends
	Exit,
}

impl fmt::Display for Marker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Marker::Entry => f.write_str("entry"),
			Marker::Exit => f.write_str("exit"),
		}
	}
}

/// Everything that can go wrong in this crate.
///
/// None of these are fatal. The caller decides whether to abort or retry with different input.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
	/// The Grid has no pixel of the given [`Marker`] kind
	Configuration(Marker),
	/// A [`MinHeap`](crate::MinHeap) was asked to hold more records than it has room for
	CapacityExceeded {
		/// The fixed capacity of the heap
		capacity: usize,
	},
	/// `remove_min` on an empty [`MinHeap`](crate::MinHeap)
	EmptyHeap,
	/// `pop` on an empty [`Queue`](crate::Queue)
	EmptyQueue,
	/// An argument was outside of its valid range
	InvalidArgument(InvalidArgument),
	/// No Path connects the two Nodes
	Unreachable {
		/// Where the search started
		from: NodeID,
		/// The Node that could not be reached
		to: NodeID,
	},
}

/// The details of an [`Error::InvalidArgument`]
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidArgument {
	/// A heap or queue was created without any room
	ZeroCapacity,
	/// A Node index that is not part of the Graph
	NodeOutOfRange {
		/// The offending index
		node: NodeID,
		/// The number of Nodes in the Graph
		len: usize,
	},
	/// A direction number outside of `0..8`
	DirectionOutOfRange(i128),
	/// A link that would leave the Grid
	NoNeighbor {
		/// The Node the link starts at
		node: NodeID,
		/// The direction that points off the Grid
		direction: Direction,
	},
	/// A Grid without any pixels
	EmptyGrid {
		/// width of the Grid
		width: usize,
		/// height of the Grid
		height: usize,
	},
	/// A Grid whose adjacency table would not fit in memory
	GridTooLarge {
		/// width of the Grid
		width: usize,
		/// height of the Grid
		height: usize,
	},
	/// The number of tiles does not match `width * height`
	TileCount {
		/// `width * height`
		expected: usize,
		/// the number of tiles provided
		found: usize,
	},
	/// A row of a character map has a different length than the first one
	RaggedRow {
		/// index of the row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of this row
		found: usize,
	},
	/// A character that does not describe any tile
	UnknownTile(char),
	/// A heap record with a `NaN` priority
	NanPriority,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::Configuration(marker) => write!(f, "maze has no {} point", marker),
			Error::CapacityExceeded { capacity } => {
				write!(f, "heap is full (capacity {})", capacity)
			}
			Error::EmptyHeap => f.write_str("can't remove from an empty heap"),
			Error::EmptyQueue => f.write_str("can't pop from an empty queue"),
			Error::InvalidArgument(arg) => write!(f, "invalid argument: {}", arg),
			Error::Unreachable { from, to } => {
				write!(f, "node {} is not reachable from node {}", to, from)
			}
		}
	}
}

impl fmt::Display for InvalidArgument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			InvalidArgument::ZeroCapacity => f.write_str("capacity must be greater than 0"),
			InvalidArgument::NodeOutOfRange { node, len } => {
				write!(f, "node {} is out of range (graph has {} nodes)", node, len)
			}
			InvalidArgument::DirectionOutOfRange(n) => {
				write!(f, "direction {} is out of range 0..8", n)
			}
			InvalidArgument::NoNeighbor { node, direction } => {
				write!(f, "node {} has no neighbor to the {}", node, direction)
			}
			InvalidArgument::EmptyGrid { width, height } => {
				write!(f, "grid of size {}x{} has no pixels", width, height)
			}
			InvalidArgument::GridTooLarge { width, height } => {
				write!(f, "grid of size {}x{} is too large", width, height)
			}
			InvalidArgument::TileCount { expected, found } => {
				write!(f, "expected {} tiles, found {}", expected, found)
			}
			InvalidArgument::RaggedRow {
				row,
				expected,
				found,
			} => write!(
				f,
				"row {} has {} tiles, expected {}",
				row, found, expected
			),
			InvalidArgument::UnknownTile(c) => write!(f, "unknown tile {:?}", c),
			InvalidArgument::NanPriority => f.write_str("priority must not be NaN"),
		}
	}
}

impl std::error::Error for Error {}

impl From<InvalidArgument> for Error {
	fn from(arg: InvalidArgument) -> Error {
		Error::InvalidArgument(arg)
	}
}
