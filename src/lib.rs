// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A last in, first out stack with a capacity fixed at construction time.
//!
//! [`BoundedStack`][BoundedStack] allocates all its cells up front and never
//! grows. Instead of reallocating or silently dropping values, it tells you
//! when you've run out of room or run out of values:
//!
//!   * [`push()`][push] on a full stack returns [`StackFull`][StackFull],
//!     which hands you back the value you tried to push.
//!   * [`pop()`][pop] and [`peek()`][peek] on an empty stack return
//!     [`StackEmpty`][StackEmpty].
//!   * Constructors return [`ConstructError`][ConstructError] when asked for
//!     a zero capacity, a capacity too large to allocate, or given an
//!     inconsistent backing store.
//!
//! In every case the stack is left exactly as it was before the failed call.
//!
//! # Example
//!
//! ```rust
//! # use boundstack::{BoundedStack, StackEmpty};
//! let mut stack = BoundedStack::new(3).unwrap();
//! stack.push(10).unwrap();
//! stack.push(20).unwrap();
//! stack.push(30).unwrap();
//!
//! // The stack renders from the bottom up.
//! assert_eq!("10;20;30", stack.list());
//!
//! // It's full, so the value comes straight back.
//! assert_eq!(111, stack.push(111).unwrap_err().into_inner());
//!
//! while let Ok(value) = stack.pop() {
//!     println!("popped {}", value);
//! }
//! assert_eq!(Err(StackEmpty::Peek), stack.peek());
//! ```
//!
//! # Saving and Restoring
//!
//! [`into_raw()`][into_raw] takes a stack apart into its backing cells and
//! its size, and [`from_raw()`][from_raw] puts it back together. The cells are
//! moved, not copied, so the stack you get back owns them exclusively.
//!
//! # Thread Safety
//!
//! There's none built in: a `BoundedStack` is a plain value, mutated through
//! `&mut self`. If you need to share one between threads, put it behind a
//! [`Mutex`][Mutex].
//!
//! # Feature Flags
//!
//! There's one feature flag available, `serde`, which implements
//! `Serialize` and `Deserialize` for [`BoundedStack`][BoundedStack]. A stack
//! is saved as its capacity plus its values from the bottom up, and the
//! restored stack goes through the same validation as
//! [`from_raw()`][from_raw].
//!
//! [BoundedStack]: struct.BoundedStack.html
//! [push]: struct.BoundedStack.html#method.push
//! [pop]: struct.BoundedStack.html#method.pop
//! [peek]: struct.BoundedStack.html#method.peek
//! [from_raw]: struct.BoundedStack.html#method.from_raw
//! [into_raw]: struct.BoundedStack.html#method.into_raw
//! [StackFull]: struct.StackFull.html
//! [StackEmpty]: enum.StackEmpty.html
//! [ConstructError]: enum.ConstructError.html
//! [Mutex]: https://doc.rust-lang.org/std/sync/struct.Mutex.html

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod error;
#[cfg(feature = "serde")]
mod persist;
mod stack;

pub use self::error::{ConstructError, StackEmpty, StackFull};
pub use self::stack::{BoundedStack, DEFAULT_CAPACITY};
