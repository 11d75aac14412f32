//! Lifecycle-recording element fixtures.
//!
//! - [`Ledger`]: shared counters for constructions, clones and drops.
//! - [`Tracked`]: a value that reports to a [`Ledger`] when it is created,
//!   cloned or dropped.
//!
//! Every `Tracked` made from a ledger must eventually be dropped exactly
//! once; [`Ledger::live`] going negative (a double drop) or staying
//! positive after the container is gone (a leak) both show up as a
//! mismatch.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    created: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
}

/// Shared lifecycle counters for a family of [`Tracked`] values.
#[derive(Clone, Default)]
pub struct Ledger {
    counts: Rc<Counts>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked value registered with this ledger.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        bump(&self.counts.created);
        Tracked {
            value,
            ledger: self.clone(),
        }
    }

    /// Values created through [`track`](Self::track).
    pub fn created(&self) -> usize {
        self.counts.created.get()
    }

    /// Values created by cloning a tracked value.
    pub fn cloned(&self) -> usize {
        self.counts.cloned.get()
    }

    /// Tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Values currently alive. Negative means something was dropped twice.
    pub fn live(&self) -> isize {
        (self.created() + self.cloned()) as isize - self.dropped() as isize
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("created", &self.created())
            .field("cloned", &self.cloned())
            .field("dropped", &self.dropped())
            .finish()
    }
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

/// A value whose clones and drops are counted by a [`Ledger`].
pub struct Tracked<T> {
    pub value: T,
    ledger: Ledger,
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        bump(&self.ledger.counts.cloned);
        Self {
            value: self.value.clone(),
            ledger: self.ledger.clone(),
        }
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        bump(&self.ledger.counts.dropped);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
