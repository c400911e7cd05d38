use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Proof of write ownership over a [`ValueCell`].
///
/// Tokens are minted by [`ValueCell::take_over`]. Only the most recently minted
/// token can write; older ones are silently rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriterToken {
    generation: u64,
}

impl WriterToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Single-writer, multi-reader scalar cell.
///
/// Handles are cheap to clone and all observe the same value. Exactly one
/// writer owns the cell at a time: a new writer calls [`take_over`] and every
/// previous owner's writes start failing.
///
/// [`take_over`]: ValueCell::take_over
pub struct ValueCell<T: Copy> {
    inner: Rc<ValueCellInner<T>>,
}

struct ValueCellInner<T> {
    value: Cell<T>,
    generation: Cell<u64>,
}

impl<T: Copy> ValueCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(ValueCellInner {
                value: Cell::new(initial),
                generation: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.get()
    }

    /// Become the sole writer, invalidating every earlier token.
    pub fn take_over(&self) -> WriterToken {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        WriterToken { generation }
    }

    /// Drop ownership without handing it to anyone. No token can write until
    /// the next `take_over`.
    pub fn release(&self, token: WriterToken) {
        if self.is_owner(token) {
            self.inner.generation.set(token.generation + 1);
        }
    }

    pub fn is_owner(&self, token: WriterToken) -> bool {
        self.inner.generation.get() == token.generation
    }

    /// Write `value` if `token` still owns the cell. Returns whether the write
    /// landed.
    pub fn set(&self, token: WriterToken, value: T) -> bool {
        if !self.is_owner(token) {
            return false;
        }
        self.inner.value.set(value);
        true
    }
}

impl<T: Copy> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCell")
            .field("value", &self.get())
            .field("generation", &self.inner.generation.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/value_cell_tests.rs"]
mod tests;
