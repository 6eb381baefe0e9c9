// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{self, Debug, Display, Formatter};

use thiserror::Error;

/// The reasons a [`BoundedStack`][BoundedStack] can't be constructed.
///
/// [BoundedStack]: struct.BoundedStack.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// A stack must be able to hold at least one value.
    #[error("capacity must be at least 1, got {capacity}")]
    InvalidCapacity {
        /// The capacity that was asked for.
        capacity: usize,
    },
    /// The size given for a backing store is larger than the store itself.
    #[error("invalid size {size} for a backing store of {len} cells")]
    InvalidState {
        /// The size that was asked for.
        size: usize,
        /// The number of cells in the backing store.
        len: usize,
    },
    /// A cell below the given size holds no value.
    #[error("cell {index} is below the stack size {size} but holds no value")]
    VacantCell {
        /// The index of the first empty cell.
        index: usize,
        /// The size that was asked for.
        size: usize,
    },
    /// The backing store for the requested capacity couldn't be allocated.
    #[error("cannot allocate {capacity} cells")]
    AllocationFailed {
        /// The capacity that was asked for.
        capacity: usize,
    },
}

/// Returned by [`pop()`][pop] and [`peek()`][peek] when there's nothing on the
/// stack, naming the operation which was refused.
///
/// [pop]: struct.BoundedStack.html#method.pop
/// [peek]: struct.BoundedStack.html#method.peek
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StackEmpty {
    /// A [`pop()`][pop] found no value to remove.
    ///
    /// [pop]: struct.BoundedStack.html#method.pop
    #[error("stack is empty, cannot pop")]
    Pop,
    /// A [`peek()`][peek] found no value to look at.
    ///
    /// [peek]: struct.BoundedStack.html#method.peek
    #[error("stack is empty, cannot peek")]
    Peek,
}

/// Returned by [`push()`][push] when the stack has no free cell left.
///
/// The value that couldn't be pushed is handed back to you, and can be
/// recovered with [`into_inner()`][into_inner].
///
/// # Examples
///
/// ```rust
/// # use boundstack::BoundedStack;
/// let mut stack = BoundedStack::new(1).unwrap();
/// stack.push("first").unwrap();
/// let error = stack.push("second").unwrap_err();
/// assert_eq!("second", error.into_inner());
/// ```
///
/// [push]: struct.BoundedStack.html#method.push
/// [into_inner]: #method.into_inner
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackFull<A>(pub A);

impl<A> StackFull<A> {
    /// Take back the value which was rejected.
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> Debug for StackFull<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("StackFull(..)")
    }
}

impl<A> Display for StackFull<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("stack is full, cannot push new element")
    }
}

impl<A> std::error::Error for StackFull<A> {}
