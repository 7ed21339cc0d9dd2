use crate::error::{InvalidArgument, Result};
use crate::{Direction, Edge, NodeID, Point};

/// The number of directional slots per Node
pub const SLOTS: usize = 8;

/// A size-checked adjacency table of a `width` by `height` pixel Grid.
///
/// Every Node has one slot per [`Direction`]. Since the weight of an Edge only depends on its
/// direction, a slot just records whether the Edge exists, using one bit per direction.
///
/// Linking is always symmetric: [`link`](Adjacency::link) sets the slot on the origin Node and
/// the opposite slot on the neighbor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adjacency {
	width: usize,
	height: usize,
	slots: Vec<u8>,
}

fn bit(direction: Direction) -> u8 {
	1 << direction.num()
}

impl Adjacency {
	/// Creates a table without any links.
	///
	/// Fails if the Grid has no pixels or if `width * height * 8` slots do not fit in a `usize`.
	pub fn new(width: usize, height: usize) -> Result<Adjacency> {
		if width == 0 || height == 0 {
			return Err(InvalidArgument::EmptyGrid { width, height }.into());
		}
		let node_count = width
			.checked_mul(height)
			.filter(|n| n.checked_mul(SLOTS).is_some())
			.ok_or(InvalidArgument::GridTooLarge { width, height })?;
		Ok(Adjacency {
			width,
			height,
			slots: vec![0; node_count],
		})
	}

	/// The number of columns of the Grid
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of rows of the Grid
	pub fn height(&self) -> usize {
		self.height
	}

	/// The number of Nodes, i.e. `width * height`
	pub fn node_count(&self) -> usize {
		self.slots.len()
	}

	/// The number of occupied slots over all Nodes.
	///
	/// Every Edge is stored in both directions, so this is twice the number of undirected links.
	pub fn link_count(&self) -> usize {
		self.slots.iter().map(|s| s.count_ones() as usize).sum()
	}

	/// The `(x, y)` position of a Node
	pub fn point_of(&self, node: NodeID) -> Point {
		(node % self.width, node / self.width)
	}

	pub(crate) fn check_node(&self, node: NodeID) -> Result<()> {
		if node < self.slots.len() {
			Ok(())
		} else {
			Err(InvalidArgument::NodeOutOfRange {
				node,
				len: self.slots.len(),
			}
			.into())
		}
	}

	/// The Node one step from `node` in `direction`, or `None` at the border of the Grid.
	///
	/// This does not look at the links, just at the geometry.
	pub fn neighbor(&self, node: NodeID, direction: Direction) -> Result<Option<NodeID>> {
		self.check_node(node)?;
		Ok(direction
			.step(self.point_of(node), (self.width, self.height))
			.map(|(x, y)| y * self.width + x))
	}

	/// Links `node` with its neighbor in `direction`, in both directions.
	///
	/// Returns the Edge from `node` to the neighbor. Fails if `node` is out of range or if the
	/// neighbor would be outside of the Grid.
	pub fn link(&mut self, node: NodeID, direction: Direction) -> Result<Edge> {
		let to = self
			.neighbor(node, direction)?
			.ok_or(InvalidArgument::NoNeighbor { node, direction })?;
		self.slots[node] |= bit(direction);
		self.slots[to] |= bit(direction.opposite());
		Ok(Edge::new(node, to, direction))
	}

	/// `true` if `node` has an Edge in `direction`
	pub fn is_linked(&self, node: NodeID, direction: Direction) -> Result<bool> {
		self.check_node(node)?;
		Ok(self.slots[node] & bit(direction) != 0)
	}

	/// The Edge from `node` in `direction`, if there is one
	pub fn edge(&self, node: NodeID, direction: Direction) -> Result<Option<Edge>> {
		if !self.is_linked(node, direction)? {
			return Ok(None);
		}
		Ok(self
			.neighbor(node, direction)?
			.map(|to| Edge::new(node, to, direction)))
	}

	/// Same as [`edge`](Adjacency::edge), but with a raw slot number.
	///
	/// Slot numbers outside of `0..8` are an [`InvalidArgument`].
	pub fn slot(&self, node: NodeID, slot: usize) -> Result<Option<Edge>> {
		self.edge(node, Direction::try_from(slot)?)
	}

	/// All Edges starting at `node`, ordered by direction
	pub fn edges(&self, node: NodeID) -> Result<Edges> {
		self.check_node(node)?;
		Ok(Edges {
			node,
			width: self.width,
			mask: self.slots[node],
			next: 0,
		})
	}

	/// The number of Edges starting at `node`
	pub fn degree(&self, node: NodeID) -> Result<usize> {
		self.check_node(node)?;
		Ok(self.slots[node].count_ones() as usize)
	}
}

/// Iterator over the Edges of a single Node. See [`Adjacency::edges`].
#[derive(Clone, Debug)]
pub struct Edges {
	node: NodeID,
	width: usize,
	mask: u8,
	next: usize,
}

impl Iterator for Edges {
	type Item = Edge;
	fn next(&mut self) -> Option<Edge> {
		while self.next < SLOTS {
			let direction = Direction::ALL[self.next];
			self.next += 1;
			if self.mask & bit(direction) != 0 {
				// links never leave the Grid, so the neighbor exists
				let (dx, dy) = direction.offset();
				let to = self.node as isize + dy * self.width as isize + dx;
				return Some(Edge::new(self.node, to as NodeID, direction));
			}
		}
		None
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = if self.next < SLOTS {
			(self.mask >> self.next).count_ones() as usize
		} else {
			0
		};
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for Edges {}
impl std::iter::FusedIterator for Edges {}
