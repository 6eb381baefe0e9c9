// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::alloc::{handle_alloc_error, Layout};
use std::fmt::{Debug, Display, Error, Formatter};

use tracing::{debug, trace};

use crate::error::{ConstructError, StackEmpty, StackFull};

/// The capacity of a stack constructed with [`Default::default()`][Default].
///
/// [Default]: https://doc.rust-lang.org/std/default/trait.Default.html
pub const DEFAULT_CAPACITY: usize = 10;

/// A last in, first out stack with a fixed number of cells.
///
/// All the memory the stack will ever need is allocated up front, and the
/// stack never grows: pushing onto a full stack gives you a
/// [`StackFull`][StackFull] error back, and popping off an empty one gives
/// you [`StackEmpty`][StackEmpty].
///
/// # Examples
///
/// ```rust
/// # use boundstack::{BoundedStack, StackFull};
/// let mut stack = BoundedStack::new(3).unwrap();
/// stack.push(10).unwrap();
/// stack.push(20).unwrap();
/// stack.push(30).unwrap();
/// assert_eq!("10;20;30", stack.list());
/// assert_eq!(Err(StackFull(40)), stack.push(40));
///
/// assert_eq!(Ok(30), stack.pop());
/// assert_eq!(Ok(&20), stack.peek());
/// assert_eq!(2, stack.size());
/// ```
///
/// [StackFull]: struct.StackFull.html
/// [StackEmpty]: enum.StackEmpty.html
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedStack<A> {
    slots: Vec<Option<A>>,
    size: usize,
}

impl<A> BoundedStack<A> {
    /// Construct an empty stack which can hold up to `capacity` values.
    ///
    /// Fails with [`ConstructError::InvalidCapacity`][InvalidCapacity] if
    /// `capacity` is `0`, and with
    /// [`ConstructError::AllocationFailed`][AllocationFailed] if the cells
    /// can't be allocated.
    ///
    /// [InvalidCapacity]: enum.ConstructError.html#variant.InvalidCapacity
    /// [AllocationFailed]: enum.ConstructError.html#variant.AllocationFailed
    pub fn new(capacity: usize) -> Result<Self, ConstructError> {
        if capacity < 1 {
            return Err(ConstructError::InvalidCapacity { capacity });
        }
        let mut slots = reserve_cells(capacity)?;
        slots.resize_with(capacity, || None);
        Ok(Self { slots, size: 0 })
    }

    /// Construct a stack on top of an existing set of cells.
    ///
    /// The stack takes ownership of `cells` and uses it directly as its
    /// backing store, without copying it. The capacity of the stack is
    /// `cells.len()`, and the cells in `0..size` become the stack's content,
    /// from the bottom up. Any values found above `size` are dropped.
    ///
    /// This is the inverse of [`into_raw()`][into_raw], and is meant for
    /// restoring a stack you've previously saved.
    ///
    /// # Errors
    ///
    /// * [`InvalidCapacity`][InvalidCapacity] if `cells` is empty.
    /// * [`InvalidState`][InvalidState] if `size` is larger than `cells.len()`.
    /// * [`VacantCell`][VacantCell] if any cell below `size` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boundstack::BoundedStack;
    /// let cells = vec![Some("A"), Some("B"), None, None];
    /// let mut stack = BoundedStack::from_raw(cells, 2).unwrap();
    /// assert_eq!(4, stack.capacity());
    /// assert_eq!(Ok("B"), stack.pop());
    /// ```
    ///
    /// [into_raw]: #method.into_raw
    /// [InvalidCapacity]: enum.ConstructError.html#variant.InvalidCapacity
    /// [InvalidState]: enum.ConstructError.html#variant.InvalidState
    /// [VacantCell]: enum.ConstructError.html#variant.VacantCell
    pub fn from_raw(mut cells: Vec<Option<A>>, size: usize) -> Result<Self, ConstructError> {
        if cells.is_empty() {
            return Err(ConstructError::InvalidCapacity { capacity: 0 });
        }
        if size > cells.len() {
            return Err(ConstructError::InvalidState {
                size,
                len: cells.len(),
            });
        }
        if let Some(index) = cells[..size].iter().position(Option::is_none) {
            return Err(ConstructError::VacantCell { index, size });
        }
        let stale = cells[size..].iter().filter(|cell| cell.is_some()).count();
        if stale > 0 {
            debug!(stale, size, "dropping values above the top of a restored stack");
            cells[size..].iter_mut().for_each(|cell| *cell = None);
        }
        Ok(Self { slots: cells, size })
    }

    /// Take the stack apart into its backing cells and its size.
    ///
    /// Every cell below the returned size is `Some`, every cell above it is
    /// `None`. Passing both back to [`from_raw()`][from_raw] gives you an
    /// identical stack.
    ///
    /// [from_raw]: #method.from_raw
    pub fn into_raw(self) -> (Vec<Option<A>>, usize) {
        (self.slots, self.size)
    }

    /// Push a value onto the top of the stack.
    ///
    /// If the stack is full, it's left untouched and `value` is returned to
    /// you inside the [`StackFull`][StackFull] error.
    ///
    /// [StackFull]: struct.StackFull.html
    pub fn push(&mut self, value: A) -> Result<(), StackFull<A>> {
        if self.is_full() {
            trace!(capacity = self.capacity(), "push rejected: stack is full");
            return Err(StackFull(value));
        }
        self.slots[self.size] = Some(value);
        self.size += 1;
        Ok(())
    }

    /// Remove the top value from the stack and return it.
    ///
    /// The cell it occupied is left empty, so the stack holds no trace of
    /// the value after this.
    pub fn pop(&mut self) -> Result<A, StackEmpty> {
        let top = self.top_index(StackEmpty::Pop)?;
        let value = self.slots[top].take().ok_or(StackEmpty::Pop)?;
        self.size = top;
        Ok(value)
    }

    /// Get a reference to the top value without removing it.
    pub fn peek(&self) -> Result<&A, StackEmpty> {
        let top = self.top_index(StackEmpty::Peek)?;
        self.slots[top].as_ref().ok_or(StackEmpty::Peek)
    }

    /// Render the stack's values from the bottom up, separated by `;`.
    ///
    /// An empty stack renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boundstack::BoundedStack;
    /// let mut stack = BoundedStack::new(4).unwrap();
    /// assert_eq!("", stack.list());
    /// stack.push("A").unwrap();
    /// stack.push("B").unwrap();
    /// assert_eq!("A;B", stack.list());
    /// ```
    pub fn list(&self) -> String
    where
        A: Display,
    {
        self.to_string()
    }

    /// Get the number of values currently on the stack.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the maximum number of values the stack can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Test if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Test if the stack has no free cells left.
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    fn top_index(&self, refused: StackEmpty) -> Result<usize, StackEmpty> {
        self.size.checked_sub(1).ok_or_else(|| {
            trace!(%refused, "rejected");
            refused
        })
    }

    pub(crate) fn occupied(&self) -> impl Iterator<Item = &A> {
        self.slots[..self.size].iter().flatten()
    }
}

/// Reserve room for exactly `capacity` cells, without letting an oversized
/// request panic or abort.
pub(crate) fn reserve_cells<A>(capacity: usize) -> Result<Vec<Option<A>>, ConstructError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(capacity)
        .map_err(|_| ConstructError::AllocationFailed { capacity })?;
    Ok(cells)
}

impl<A> Default for BoundedStack<A> {
    fn default() -> Self {
        match Self::new(DEFAULT_CAPACITY) {
            Ok(stack) => stack,
            // A nonzero constant capacity only fails when the allocator does.
            Err(_) => handle_alloc_error(Layout::new::<[Option<A>; DEFAULT_CAPACITY]>()),
        }
    }
}

impl<A> Display for BoundedStack<A>
where
    A: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for (index, value) in self.occupied().enumerate() {
            if index > 0 {
                f.write_str(";")?;
            }
            Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl<A> Debug for BoundedStack<A>
where
    A: Debug,
{
    /// Debug implementation for `BoundedStack`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use boundstack::BoundedStack;
    /// let mut stack = BoundedStack::new(3).unwrap();
    /// stack.push(1).unwrap();
    /// stack.push(2).unwrap();
    /// assert_eq!("BoundedStack[2/3][1, 2]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "BoundedStack[{}/{}]", self.size, self.capacity())?;
        f.debug_list().entries(self.occupied()).finish()
    }
}
