//! Sorted linked frontier for best-first searches.
//!
//! Entries form a singly linked chain in ascending priority order. Nodes
//! live in a slot vector and link to each other by index; freed slots are
//! recycled, so a long search does not allocate once the chain has reached
//! its peak length.
//!
//! Extracting the minimum is O(1); an ordered insert scans from the head
//! and is O(len). There is no decrease-key.

use std::fmt;

const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Slot<T> {
    item: Option<T>,
    priority: f64,
    next: usize,
}

/// Error returned when popping or peeking an empty frontier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmptyFrontier;

impl fmt::Display for EmptyFrontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the priority queue is empty")
    }
}

impl std::error::Error for EmptyFrontier {}

/// A priority queue kept as a sorted linked chain.
///
/// Lower priorities come out first. Among equal priorities, entries come
/// out in insertion order.
#[derive(Debug)]
pub struct OrderedFrontier<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> OrderedFrontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Append `item` at the tail without looking at priorities.
    ///
    /// Meant for seeding an empty frontier. The entry takes the tail's
    /// priority (or `0.0` when empty) so later ordered inserts still see an
    /// ascending chain, but calling this on a populated frontier gives the
    /// new entry the same precedence as the current last one regardless of
    /// its real priority.
    pub fn push_back(&mut self, item: T) {
        let priority = if self.tail == NIL {
            0.0
        } else {
            self.slots[self.tail].priority
        };
        let idx = self.alloc(item, priority, NIL);
        if self.tail == NIL {
            self.head = idx;
        } else {
            self.slots[self.tail].next = idx;
        }
        self.tail = idx;
        self.len += 1;
    }

    /// Insert `item` keeping the chain sorted by ascending `priority`.
    ///
    /// The entry goes after every entry whose priority is `<=` its own.
    pub fn push_ordered(&mut self, item: T, priority: f64) {
        // Last entry that keeps precedence over the new one.
        let mut prev = NIL;
        let mut cur = self.head;
        while cur != NIL && self.slots[cur].priority <= priority {
            prev = cur;
            cur = self.slots[cur].next;
        }

        let idx = self.alloc(item, priority, cur);
        if prev == NIL {
            self.head = idx;
        } else {
            self.slots[prev].next = idx;
        }
        if cur == NIL {
            self.tail = idx;
        }
        self.len += 1;
    }

    /// Remove and return the entry with the lowest priority.
    pub fn pop_front(&mut self) -> Result<T, EmptyFrontier> {
        if self.head == NIL {
            return Err(EmptyFrontier);
        }
        let idx = self.head;
        let slot = &mut self.slots[idx];
        let item = slot.item.take().ok_or(EmptyFrontier)?;
        self.head = slot.next;
        slot.next = NIL;
        if self.head == NIL {
            self.tail = NIL;
        }
        self.free.push(idx);
        self.len -= 1;
        Ok(item)
    }

    /// The entry with the lowest priority, without removing it.
    pub fn peek_front(&self) -> Result<&T, EmptyFrontier> {
        if self.head == NIL {
            return Err(EmptyFrontier);
        }
        self.slots[self.head].item.as_ref().ok_or(EmptyFrontier)
    }

    /// Priority of the front entry.
    pub fn peek_priority(&self) -> Result<f64, EmptyFrontier> {
        if self.head == NIL {
            return Err(EmptyFrontier);
        }
        Ok(self.slots[self.head].priority)
    }

    /// Whether the frontier has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Remove every entry, keeping the allocated slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Iterate over `(item, priority)` pairs from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            frontier: self,
            cur: self.head,
        }
    }

    fn alloc(&mut self, item: T, priority: f64, next: usize) -> usize {
        let slot = Slot {
            item: Some(item),
            priority,
            next,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }
}

impl<T> Default for OrderedFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over a [`OrderedFrontier`].
pub struct Iter<'a, T> {
    frontier: &'a OrderedFrontier<T>,
    cur: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cur != NIL {
            let slot = &self.frontier.slots[self.cur];
            self.cur = slot.next;
            if let Some(item) = slot.item.as_ref() {
                return Some((item, slot.priority));
            }
        }
        None
    }
}
