use std::collections::VecDeque;
use std::fmt;

/// Bounded history that always holds at least one item.
///
/// Newest item lives at the front. There is no way to pop or clear, so `latest`
/// never fails.
pub struct History<T> {
    deque: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> Clone for History<T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.deque.iter().rev()).finish()
    }
}

impl<T> History<T> {
    /// Capacity below one is raised to one.
    pub fn new(first: T, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut deque = VecDeque::with_capacity(capacity);
        deque.push_front(first);

        Self { deque, capacity }
    }

    /// Pushes the newest item, dropping the oldest ones beyond `capacity`.
    /// Returns how many items were dropped.
    pub fn push(&mut self, item: T, capacity: usize) -> usize {
        self.capacity = capacity.max(1);
        self.deque.push_front(item);

        let excess = self.deque.len().saturating_sub(self.capacity);
        self.deque.truncate(self.capacity);

        excess
    }

    /// Changes the bound, dropping the oldest items beyond it.
    /// Returns how many items were dropped.
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        self.capacity = capacity.max(1);

        let excess = self.deque.len().saturating_sub(self.capacity);
        self.deque.truncate(self.capacity);

        excess
    }

    #[inline]
    pub fn latest(&self) -> &T {
        &self.deque[0]
    }

    /// Item right before the latest one
    #[inline]
    pub fn previous(&self) -> Option<&T> {
        self.deque.get(1)
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Newest first
    #[inline]
    pub fn recent(&self) -> impl Iterator<Item = &'_ T> {
        self.deque.iter()
    }

    /// Oldest first
    #[inline]
    pub fn chronological(&self) -> impl Iterator<Item = &'_ T> {
        self.deque.iter().rev()
    }
}
