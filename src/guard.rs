//! Edit-transaction guard
//!
//! Programmatic buffer replacements (paste, suggestion insertion, `SetText`)
//! make the host widget echo change notifications back at the edit box.
//! Handlers check [`EditGuard::is_active`] and ignore those echoes. The edit
//! box holds an [`EditTransaction`] from each `Cmd::SetText` it emits until
//! the host answers `Msg::TextApplied`; hosts may open their own as well.
//! The guard is released when the last transaction drops.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag that is set while a programmatic edit is in progress
#[derive(Debug, Clone, Default)]
pub struct EditGuard {
    depth: Rc<Cell<usize>>,
}

impl EditGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transaction. Transactions nest.
    pub fn begin(&self) -> EditTransaction {
        self.depth.set(self.depth.get() + 1);
        EditTransaction {
            depth: Rc::clone(&self.depth),
        }
    }

    pub fn is_active(&self) -> bool {
        self.depth.get() > 0
    }
}

/// Held for the duration of one programmatic edit
#[derive(Debug)]
#[must_use = "the guard is released as soon as the transaction is dropped"]
pub struct EditTransaction {
    depth: Rc<Cell<usize>>,
}

impl Drop for EditTransaction {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}
