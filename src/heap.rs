use crate::error::{Error, InvalidArgument, Result};
use crate::{Cost, NodeID};

use std::cmp::Ordering;

/// A Node together with the priority it is stored under in a [`MinHeap`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrioNode {
	/// The Node
	pub node: NodeID,
	/// Lower priorities are removed first
	pub priority: Cost,
}

impl PrioNode {
	/// Creates a new PrioNode
	pub fn new(node: NodeID, priority: Cost) -> PrioNode {
		PrioNode { node, priority }
	}
}

#[derive(Clone, Copy, Debug)]
struct Slot {
	record: PrioNode,
	// insertion counter, so that equal priorities come out in the order they went in
	seq: u64,
}

impl Slot {
	fn cmp(&self, rhs: &Slot) -> Ordering {
		self.record
			.priority
			.total_cmp(&rhs.record.priority)
			.then(self.seq.cmp(&rhs.seq))
	}
}

/// A binary min-heap with a fixed capacity.
///
/// Records are ordered by ascending [`priority`](PrioNode::priority). Records with the same
/// priority are removed in the order they were inserted.
///
/// ## Examples
/// ```
/// use maze_pathfinding::{MinHeap, PrioNode};
///
/// let mut heap = MinHeap::with_capacity(3).unwrap();
/// heap.insert(PrioNode::new(0, 2.5)).unwrap();
/// heap.insert(PrioNode::new(1, 0.5)).unwrap();
/// heap.insert(PrioNode::new(2, 1.0)).unwrap();
///
/// // the heap is full
/// assert!(heap.insert(PrioNode::new(3, 0.0)).is_err());
///
/// assert_eq!(heap.remove_min().unwrap().node, 1);
/// assert_eq!(heap.remove_min().unwrap().node, 2);
/// assert_eq!(heap.remove_min().unwrap().node, 0);
/// assert!(heap.remove_min().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap {
	data: Vec<Slot>,
	capacity: usize,
	next_seq: u64,
}

impl MinHeap {
	/// Creates an empty MinHeap that can hold up to `capacity` records.
	///
	/// A `capacity` of 0 is an [`InvalidArgument`].
	pub fn with_capacity(capacity: usize) -> Result<MinHeap> {
		if capacity == 0 {
			return Err(InvalidArgument::ZeroCapacity.into());
		}
		Ok(MinHeap {
			data: Vec::with_capacity(capacity),
			capacity,
			next_seq: 0,
		})
	}

	/// The number of records in the heap
	pub fn size(&self) -> usize {
		self.data.len()
	}

	/// Same as [`size`](MinHeap::size)
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// `true` if there is nothing to remove
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// The maximum number of records
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// The record [`remove_min`](MinHeap::remove_min) would return, if any
	pub fn peek(&self) -> Option<PrioNode> {
		self.data.first().map(|slot| slot.record)
	}

	/// Inserts a record in `O(log n)`.
	///
	/// Fails with [`Error::CapacityExceeded`] if the heap is full, or with an
	/// [`InvalidArgument`] if the priority is `NaN`.
	pub fn insert(&mut self, record: PrioNode) -> Result<()> {
		if record.priority.is_nan() {
			return Err(InvalidArgument::NanPriority.into());
		}
		if self.data.len() == self.capacity {
			return Err(Error::CapacityExceeded {
				capacity: self.capacity,
			});
		}
		let slot = Slot {
			record,
			seq: self.next_seq,
		};
		self.next_seq += 1;

		// sift up: move parents down until the new record fits
		self.data.push(slot);
		let mut index = self.data.len() - 1;
		while index > 0 {
			let parent = parent(index);
			if self.data[parent].cmp(&slot) != Ordering::Greater {
				break;
			}
			self.data[index] = self.data[parent];
			index = parent;
		}
		self.data[index] = slot;
		Ok(())
	}

	/// Removes and returns the record with the lowest priority in `O(log n)`.
	///
	/// Fails with [`Error::EmptyHeap`] if there is nothing to remove.
	pub fn remove_min(&mut self) -> Result<PrioNode> {
		let last = self.data.pop().ok_or(Error::EmptyHeap)?;
		if self.data.is_empty() {
			return Ok(last.record);
		}
		let min = std::mem::replace(&mut self.data[0], last);
		self.sift_down(0);
		Ok(min.record)
	}

	fn sift_down(&mut self, mut index: usize) {
		let size = self.data.len();
		loop {
			let mut next = index;
			for child in [left_child(index), right_child(index)] {
				if child < size && self.data[child].cmp(&self.data[next]) == Ordering::Less {
					next = child;
				}
			}
			if next == index {
				return;
			}
			self.data.swap(index, next);
			index = next;
		}
	}
}

fn parent(index: usize) -> usize {
	(index - 1) / 2
}

fn left_child(index: usize) -> usize {
	2 * index + 1
}

fn right_child(index: usize) -> usize {
	2 * index + 2
}
