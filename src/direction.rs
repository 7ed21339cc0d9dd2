use crate::{error::InvalidArgument, Cost, Point};
use std::fmt;

/// The cost of an axis-aligned step
pub const STRAIGHT_COST: Cost = 1.0;
/// The cost of a diagonal step
pub const DIAGONAL_COST: Cost = std::f64::consts::SQRT_2;

/// One of the 8 compass directions a Node can link in.
///
/// The discriminant is the slot number in the adjacency table. Directions are numbered clockwise,
/// starting at East, in image coordinates (y grows downwards):
/// ```text
///  5 6 7     NW N NE
///   \|/        \|/
///  4-o-0     W -o- E
///   /|\        /|\
///  3 2 1     SW S SE
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	/// `+x`
	East = 0,
	/// `+x +y`
	SouthEast = 1,
	/// `+y`
	South = 2,
	/// `-x +y`
	SouthWest = 3,
	/// `-x`
	West = 4,
	/// `-x -y`
	NorthWest = 5,
	/// `-y`
	North = 6,
	/// `+x -y`
	NorthEast = 7,
}
use self::Direction::*;

const UNIT_CIRCLE: [(isize, isize); 8] = [
	(1, 0),
	(1, 1),
	(0, 1),
	(-1, 1),
	(-1, 0),
	(-1, -1),
	(0, -1),
	(1, -1),
];

impl Direction {
	/// All directions, ordered by slot number
	pub const ALL: [Direction; 8] = [
		East, SouthEast, South, SouthWest, West, NorthWest, North, NorthEast,
	];

	/// The directions a row-major scan has to link in to cover every pair of neighbors once.
	pub const FORWARD: [Direction; 4] = [East, SouthEast, South, SouthWest];

	/// The slot number of this direction
	pub fn num(self) -> usize {
		self as usize
	}

	/// The direction pointing back, i.e. `(num + 4) % 8`
	pub fn opposite(self) -> Direction {
		Self::ALL[(self.num() + 4) % 8]
	}

	/// `true` for the four diagonals
	pub fn is_diagonal(self) -> bool {
		self.num() % 2 == 1
	}

	/// The weight of a single step in this direction
	pub fn cost(self) -> Cost {
		if self.is_diagonal() {
			DIAGONAL_COST
		} else {
			STRAIGHT_COST
		}
	}

	/// The `(dx, dy)` of one step
	pub fn offset(self) -> (isize, isize) {
		UNIT_CIRCLE[self.num()]
	}

	/// The two axis-aligned directions next to a diagonal.
	///
	/// A diagonal step is only allowed if both of these are open, otherwise it would squeeze
	/// between two touching walls.
	///
	/// Returns `None` for axis-aligned directions.
	pub fn flanks(self) -> Option<(Direction, Direction)> {
		if self.is_diagonal() {
			let n = self.num();
			Some((Self::ALL[(n + 7) % 8], Self::ALL[(n + 1) % 8]))
		} else {
			None
		}
	}

	/// The Point one step from `pos` in this direction, or `None` if it leaves a
	/// `width` by `height` Grid.
	pub fn step(self, pos: Point, (width, height): (usize, usize)) -> Option<Point> {
		let (dx, dy) = self.offset();
		let x = pos.0.checked_add_signed(dx)?;
		let y = pos.1.checked_add_signed(dy)?;
		if x < width && y < height {
			Some((x, y))
		} else {
			None
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			East => "E",
			SouthEast => "SE",
			South => "S",
			SouthWest => "SW",
			West => "W",
			NorthWest => "NW",
			North => "N",
			NorthEast => "NE",
		})
	}
}

macro_rules! impl_try_from {
	($($type:ty),+) => {$(
		impl TryFrom<$type> for Direction {
			type Error = InvalidArgument;
			fn try_from(val: $type) -> Result<Direction, InvalidArgument> {
				usize::try_from(val)
					.ok()
					.and_then(|n| Direction::ALL.get(n).copied())
					.ok_or(InvalidArgument::DirectionOutOfRange(val as i128))
			}
		}
		impl From<Direction> for $type {
			fn from(dir: Direction) -> $type {
				dir as $type
			}
		}
	)+}
}

impl_try_from!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opposite() {
		for dir in Direction::ALL {
			assert_eq!(dir.opposite().opposite(), dir);
			assert_eq!(dir.opposite().num(), (dir.num() + 4) % 8);
			let (dx, dy) = dir.offset();
			assert_eq!(dir.opposite().offset(), (-dx, -dy));
		}
	}

	#[test]
	fn flanks() {
		assert_eq!(SouthEast.flanks(), Some((East, South)));
		assert_eq!(SouthWest.flanks(), Some((South, West)));
		assert_eq!(NorthWest.flanks(), Some((West, North)));
		assert_eq!(NorthEast.flanks(), Some((North, East)));
		assert_eq!(East.flanks(), None);
	}

	#[test]
	fn step() {
		assert_eq!(East.step((0, 0), (3, 1)), Some((1, 0)));
		assert_eq!(East.step((2, 0), (3, 1)), None);
		assert_eq!(NorthWest.step((0, 1), (3, 3)), None);
		assert_eq!(SouthWest.step((1, 1), (3, 3)), Some((0, 2)));
	}

	#[test]
	fn try_from() {
		assert_eq!(Direction::try_from(3usize), Ok(SouthWest));
		assert_eq!(Direction::try_from(7u8), Ok(NorthEast));
		assert_eq!(
			Direction::try_from(8usize),
			Err(InvalidArgument::DirectionOutOfRange(8))
		);
		assert_eq!(
			Direction::try_from(-1i32),
			Err(InvalidArgument::DirectionOutOfRange(-1))
		);
		assert_eq!(usize::from(North), 6);
	}

	#[test]
	fn cost() {
		assert_eq!(East.cost(), 1.0);
		assert_eq!(SouthEast.cost(), std::f64::consts::SQRT_2);
	}
}
