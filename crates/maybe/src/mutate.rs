//! In-place state transitions.
//!
//! These are the only operations that change which variant an existing `O`
//! holds. Each one swaps the whole variant; the contained value is never
//! handed out mutably.

use core::mem;

use crate::O;

impl<T> O<T> {
    /// Forces the value to `Some(val)`, dropping whatever was held before.
    pub fn insert(&mut self, val: T) -> &mut Self {
        tracing::trace!(was_some = self.is_some(), now_some = true, "insert");
        *self = O::Some(val);
        self
    }

    /// Fills an empty slot with `val` and returns the contained value.
    /// If a value is already present `val` is dropped.
    pub fn get_or_insert(&mut self, val: T) -> &T {
        self.get_or_insert_with(|| val)
    }

    /// Like [`O::get_or_insert`], calling `f` only when the slot is empty.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &T {
        if let O::None = self {
            tracing::trace!(was_some = false, now_some = true, "get_or_insert");
            *self = O::Some(f());
        }
        // An early `return val` for the `Some` case would keep `self`
        // borrowed across the fill, which the borrow checker rejects. The
        // slot is checked again instead: the `if let` above leaves it `Some`
        // in every path, and nothing between the two can reset it.
        match self {
            O::Some(val) => &*val,
            O::None => unreachable!("get_or_insert_with left the slot empty"),
        }
    }

    /// Like [`O::get_or_insert`], filling an empty slot with `T::default()`.
    pub fn get_or_insert_default(&mut self) -> &T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    /// Moves the value out, leaving `None` behind.
    pub fn take(&mut self) -> O<T> {
        tracing::trace!(was_some = self.is_some(), now_some = false, "take");
        mem::replace(self, O::None)
    }

    /// Stores `val` and returns the previous state.
    pub fn replace(&mut self, val: T) -> O<T> {
        tracing::trace!(was_some = self.is_some(), now_some = true, "replace");
        mem::replace(self, O::Some(val))
    }

    /// Takes the value only if `pred` accepts it; otherwise leaves `self`
    /// untouched and returns `None`.
    pub fn take_if<P: FnOnce(&T) -> bool>(&mut self, pred: P) -> O<T> {
        if self.is_some_and(pred) {
            self.take()
        } else {
            O::None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{none, some, O};

    #[test]
    fn insert_chains() {
        let mut o: O<u8> = none();
        let taken = o.insert(1).insert(2).take();
        assert_eq!(taken, some(2));
        assert!(o.is_none());
    }
}
