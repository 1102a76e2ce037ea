//! Slot-by-slot guess entry.
//!
//! A draft mirrors a row of guess boxes: values are placed left to right,
//! and the whole row can be cleared before submission.

use crate::{Guess, MastermindError, MastermindErrorKind, MastermindResult};
use tracing::{debug, instrument};

/// A guess being filled in one slot at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessDraft {
    slots: Vec<Option<i32>>,
    cursor: usize,
}

impl GuessDraft {
    /// Creates an empty draft with `length` slots.
    #[instrument]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
            cursor: 0,
        }
    }

    /// Places `value` in the next empty slot.
    ///
    /// # Errors
    ///
    /// Returns `GuessFull` once every slot is filled.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn place(&mut self, value: i32) -> MastermindResult<()> {
        let Some(slot) = self.slots.get_mut(self.cursor) else {
            return Err(MastermindError::new(MastermindErrorKind::GuessFull(
                self.slots.len(),
            )));
        };
        *slot = Some(value);
        self.cursor += 1;
        debug!(filled = self.cursor, "Placed value in draft");
        Ok(())
    }

    /// Clears every slot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.cursor = 0;
    }

    /// Returns true when every slot holds a value.
    pub fn is_complete(&self) -> bool {
        self.cursor == self.slots.len()
    }

    /// The current slots.
    pub fn slots(&self) -> &[Option<i32>] {
        &self.slots
    }

    /// Snapshot of the draft as a [`Guess`], unset slots included.
    pub fn to_guess(&self) -> Guess {
        Guess::new(self.slots.clone())
    }
}
