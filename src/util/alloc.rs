use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// Counts how many of the [`DropToken`]s it has handed out have been dropped.
#[derive(Debug, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn token(&self) -> DropToken {
        DropToken(Rc::clone(&self.0))
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// A value that bumps its counter when dropped. Clones report to the same counter.
#[derive(Debug, Clone)]
pub struct DropToken(Rc<Cell<usize>>);

impl Drop for DropToken {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
