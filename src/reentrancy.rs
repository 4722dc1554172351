//! Debug-only detection of comparator reentry.
//!
//! The ordered engine calls the user's comparator while a lookup is in
//! flight or while nodes are being relinked. A comparator that reaches back
//! into the same engine at that point would observe a half-rotated tree. In
//! debug builds such a nested call panics; in release builds the check
//! compiles to nothing.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-engine flag marking that a comparator-driven section is running.
#[derive(Debug, Default)]
pub(crate) struct ReentryCheck {
    #[cfg(debug_assertions)]
    busy: Cell<Option<&'static str>>,
    // Same auto traits in every profile: Send, never Sync.
    _unsync: PhantomData<Cell<()>>,
}

impl ReentryCheck {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(None),
            _unsync: PhantomData,
        }
    }

    /// Marks the start of `op`. Panics (debug only) if another section is
    /// still open on the same engine.
    #[inline]
    pub(crate) fn section(&self, op: &'static str) -> Section<'_> {
        #[cfg(debug_assertions)]
        {
            if let Some(outer) = self.busy.replace(Some(op)) {
                panic!("ordered engine re-entered by `{op}` while `{outer}` was running");
            }
            Section { check: self }
        }

        #[cfg(not(debug_assertions))]
        {
            let _ = op;
            Section { _check: PhantomData }
        }
    }
}

/// Open section; closes on drop.
pub(crate) struct Section<'a> {
    #[cfg(debug_assertions)]
    check: &'a ReentryCheck,
    #[cfg(not(debug_assertions))]
    _check: PhantomData<&'a ReentryCheck>,
}

impl Drop for Section<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.check.busy.set(None);
    }
}
