//! Navigation state: a stack of visited locations with a cursor.
//!
//! Mirrors the browser session history. Pushing drops any forward entries,
//! replacing rewrites the current entry, and traversal only moves the cursor.

use crate::location::Location;

/// Session history owned by a router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The current location.
    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether there is an entry behind the cursor.
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// Whether there is an entry ahead of the cursor.
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Navigate to `to`, resolved against the current location.
    ///
    /// Returns the new current location, or `None` when `to` points outside
    /// the app (another origin), in which case the history is unchanged.
    /// Pushing the location that is already current is a no-op.
    pub fn push(&mut self, to: &str) -> Option<&Location> {
        let next = self.current().resolve(to)?;
        if next != *self.current() {
            tracing::debug!(from = %self.current(), to = %next, "push");
            self.entries.truncate(self.index + 1);
            self.entries.push(next);
            self.index += 1;
        }
        Some(self.current())
    }

    /// Replace the current entry with `to`, resolved against it.
    pub fn replace(&mut self, to: &str) -> Option<&Location> {
        let next = self.current().resolve(to)?;
        tracing::debug!(from = %self.current(), to = %next, "replace");
        self.entries[self.index] = next;
        Some(self.current())
    }

    /// Move the cursor by `delta` entries. Out-of-range moves are ignored.
    pub fn go(&mut self, delta: isize) -> &Location {
        let target = self.index.checked_add_signed(delta);
        match target {
            Some(target) if target < self.entries.len() => {
                tracing::debug!(from = self.index, to = target, "traverse");
                self.index = target;
            }
            _ => tracing::trace!(delta, "traversal out of range ignored"),
        }
        self.current()
    }

    /// Move one entry back.
    pub fn back(&mut self) -> &Location {
        self.go(-1)
    }

    /// Move one entry forward.
    pub fn forward(&mut self) -> &Location {
        self.go(1)
    }

    /// Reconcile with a location reported by the browser after a traversal
    /// (`popstate`).
    ///
    /// The cursor moves to the closest entry equal to `location`, so a jump
    /// of several entries lands where the browser did. A location found
    /// nowhere in the stack replaces the current entry.
    pub fn sync(&mut self, location: Location) -> &Location {
        if location == *self.current() {
            return self.current();
        }

        let nearest = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| **entry == location)
            .min_by_key(|(index, _)| index.abs_diff(self.index))
            .map(|(index, _)| index);

        match nearest {
            Some(index) => {
                tracing::debug!(from = self.index, to = index, "sync traverse");
                self.index = index;
            }
            None => {
                tracing::debug!(to = %location, "sync replaced current entry");
                self.entries[self.index] = location;
            }
        }
        self.current()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::default())
    }
}
