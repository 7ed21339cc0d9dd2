use crate::error::{Error, InvalidArgument, Result};
use crate::NodeID;

/// A FIFO queue of Node indices on top of a growing circular buffer.
///
/// Used for the breadth-first passes over the Graph. When the buffer is full it doubles in size,
/// so [`insert`](Queue::insert) is amortized `O(1)`.
///
/// ## Examples
/// ```
/// use maze_pathfinding::Queue;
///
/// let mut queue = Queue::with_capacity(2).unwrap();
/// queue.insert(4);
/// queue.insert(2);
/// queue.insert(0); // grows the buffer
///
/// assert_eq!(queue.pop(), Ok(4));
/// assert_eq!(queue.pop(), Ok(2));
/// assert_eq!(queue.pop(), Ok(0));
/// assert!(queue.pop().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Queue {
	data: Vec<NodeID>,
	head: usize,
	size: usize,
}

impl Queue {
	/// Creates an empty Queue with room for a single element
	pub fn new() -> Queue {
		Queue {
			data: vec![0; 1],
			head: 0,
			size: 0,
		}
	}

	/// Creates an empty Queue with room for `capacity` elements before it has to grow.
	///
	/// A `capacity` of 0 is an [`InvalidArgument`].
	pub fn with_capacity(capacity: usize) -> Result<Queue> {
		if capacity == 0 {
			return Err(InvalidArgument::ZeroCapacity.into());
		}
		Ok(Queue {
			data: vec![0; capacity],
			head: 0,
			size: 0,
		})
	}

	/// The number of elements in the Queue
	pub fn size(&self) -> usize {
		self.size
	}

	/// Same as [`size`](Queue::size)
	pub fn len(&self) -> usize {
		self.size
	}

	/// `true` if there is nothing to pop
	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// The number of elements that fit before the buffer grows
	pub fn capacity(&self) -> usize {
		self.data.len()
	}

	/// Appends `value` to the back of the Queue
	pub fn insert(&mut self, value: NodeID) {
		if self.size == self.data.len() {
			self.grow();
		}
		let tail = (self.head + self.size) % self.data.len();
		self.data[tail] = value;
		self.size += 1;
	}

	/// Removes and returns the oldest element, or [`Error::EmptyQueue`]
	pub fn pop(&mut self) -> Result<NodeID> {
		if self.size == 0 {
			return Err(Error::EmptyQueue);
		}
		let value = self.data[self.head];
		self.head = (self.head + 1) % self.data.len();
		self.size -= 1;
		Ok(value)
	}

	/// Doubles the buffer, unwrapping the elements so that the head is at 0 again
	fn grow(&mut self) {
		let len = self.data.len();
		let mut data = vec![0; len * 2];
		for (i, slot) in data.iter_mut().take(self.size).enumerate() {
			*slot = self.data[(self.head + i) % len];
		}
		self.data = data;
		self.head = 0;
	}
}

impl Default for Queue {
	fn default() -> Queue {
		Queue::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_capacity() {
		assert_eq!(
			Queue::with_capacity(0).unwrap_err(),
			Error::InvalidArgument(InvalidArgument::ZeroCapacity)
		);
	}

	#[test]
	fn empty_pop() {
		let mut queue = Queue::new();
		assert_eq!(queue.pop(), Err(Error::EmptyQueue));
		queue.insert(1);
		assert_eq!(queue.pop(), Ok(1));
		assert_eq!(queue.pop(), Err(Error::EmptyQueue));
	}

	#[test]
	fn order_after_resize() {
		let mut queue = Queue::new();
		for i in 0..37 {
			queue.insert(i);
		}
		assert_eq!(queue.size(), 37);
		assert_eq!(queue.capacity(), 64);
		for i in 0..37 {
			assert_eq!(queue.pop(), Ok(i));
		}
		assert!(queue.is_empty());
	}

	#[test]
	fn order_after_wrapping_resize() {
		let mut queue = Queue::with_capacity(4).unwrap();
		queue.insert(0);
		queue.insert(1);
		queue.insert(2);
		assert_eq!(queue.pop(), Ok(0));
		assert_eq!(queue.pop(), Ok(1));
		// head is at 2 now, so these wrap around the end of the buffer
		queue.insert(3);
		queue.insert(4);
		queue.insert(5);
		assert_eq!(queue.capacity(), 4);
		// full and wrapped, this one has to unwrap while growing
		queue.insert(6);
		assert_eq!(queue.capacity(), 8);

		let popped: Vec<_> = std::iter::from_fn(|| queue.pop().ok()).collect();
		assert_eq!(popped, vec![2, 3, 4, 5, 6]);
	}
}
