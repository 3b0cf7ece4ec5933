// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded ring buffer for diagnostic events.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// A circular buffer with fixed capacity.
///
/// When full, pushing evicts the oldest element. Iteration is oldest first.
///
/// ```
/// use yadadri360::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::default());
/// buffer.push(1);
/// buffer.push(2);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1).
    ///
    /// Meant for tests that need tiny buffers.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element, evicting the oldest when at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{
        DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        MIN_DIAGNOSTICS_BUFFER_CAPACITY,
    };

    #[test]
    fn config_defaults_match_domain_bounds() {
        assert_eq!(
            BufferCapacity::default().value(),
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(
            BufferCapacity::new(0).value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(
            BufferCapacity::new(usize::MAX).value(),
            MAX_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for i in 1..=5 {
            buffer.push(i);
        }
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn zero_raw_capacity_still_holds_one() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(50));
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 50);
    }
}
