//! Circular buffer shared by the fixed and growable queues
//!
//! ```text
//! capacity 8, head 5, size 5, tail (5 + 5) mod 8 = 2
//!
//!   index:  0   1   2   3   4   5   6   7
//!         [ d | e | . | . | . | a | b | c ]
//!                   ^tail       ^head
//! ```
//!
//! `write` never checks for a full ring. Whether that is a hazard or a
//! precondition is the caller's business.

use super::policy::Wrap;
use super::repr::Repr;
use crate::{util, Result};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::marker::PhantomData;

pub(crate) struct Ring<R: Repr, W: Wrap> {
    store: Box<[R::Slot]>,
    head: usize,
    tail: usize,
    size: usize,
    _policy: PhantomData<fn() -> (R, W)>,
}

impl<R: Repr, W: Wrap> Ring<R, W> {
    /// Ring with `requested` rounded up to a power of two
    pub(crate) fn new(requested: usize) -> Self {
        Self::from_store(vacant_store::<R>(util::capacity_for(requested)))
    }

    pub(crate) fn try_new(requested: usize) -> Result<Self> {
        let capacity = util::try_capacity_for(requested)?;
        Ok(Self::from_store(try_vacant_store::<R>(capacity)?))
    }

    fn from_store(store: Box<[R::Slot]>) -> Self {
        debug_assert!(store.len().is_power_of_two());
        Self {
            store,
            head: 0,
            tail: 0,
            size: 0,
            _policy: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.store.len()
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.size == self.store.len()
    }

    /// Store `value` at `tail`, overwriting whatever is there
    #[inline(always)]
    pub(crate) fn write(&mut self, value: i32) {
        self.store[self.tail] = R::pack(value);
        self.tail = W::next(self.tail, self.store.len());
        self.size += 1;
    }

    /// Take the element at `head`, or the empty marker when `size == 0`
    #[inline(always)]
    pub(crate) fn read(&mut self) -> R::Output {
        if self.size == 0 {
            return R::EMPTY;
        }
        let value = R::take(&mut self.store[self.head]);
        self.head = W::next(self.head, self.store.len());
        self.size -= 1;
        value
    }

    /// Move the live elements, oldest first, to the start of a new store of
    /// `capacity` slots
    ///
    /// `capacity` must be a power of two no smaller than `size`.
    pub(crate) fn relocate(&mut self, capacity: usize) {
        let store = vacant_store::<R>(capacity);
        self.move_into(store);
    }

    pub(crate) fn try_relocate(&mut self, capacity: usize) -> Result<()> {
        let store = try_vacant_store::<R>(capacity)?;
        self.move_into(store);
        Ok(())
    }

    fn move_into(&mut self, mut store: Box<[R::Slot]>) {
        debug_assert!(store.len().is_power_of_two());
        debug_assert!(store.len() >= self.size);
        let mut index = self.head;
        for slot in store.iter_mut().take(self.size) {
            core::mem::swap(slot, &mut self.store[index]);
            index = W::next(index, self.store.len());
        }
        self.store = store;
        self.head = 0;
        self.tail = self.size & (self.store.len() - 1);
    }

    #[cfg(test)]
    pub(crate) fn positions(&self) -> (usize, usize) {
        (self.head, self.tail)
    }
}

impl<R: Repr, W: Wrap> core::fmt::Debug for Ring<R, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ring")
            .field("repr", &R::NAME)
            .field("wrap", &W::NAME)
            .field("capacity", &self.store.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("size", &self.size)
            .finish()
    }
}

fn vacant_store<R: Repr>(capacity: usize) -> Box<[R::Slot]> {
    let mut store = Vec::with_capacity(capacity);
    store.resize_with(capacity, R::vacant);
    store.into_boxed_slice()
}

fn try_vacant_store<R: Repr>(capacity: usize) -> Result<Box<[R::Slot]>> {
    let mut store = Vec::new();
    store.try_reserve_exact(capacity)?;
    store.resize_with(capacity, R::vacant);
    Ok(store.into_boxed_slice())
}
