// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Walks a number stack and a text stack through every success and failure
//! path, logging what happens. Set `RUST_LOG=trace` to also see the events
//! the stack itself emits.

use std::fmt::Display;

use boundstack::{BoundedStack, ConstructError, StackEmpty, StackFull};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn push_all<A: Display>(stack: &mut BoundedStack<A>, values: Vec<A>) -> Result<(), StackFull<A>> {
    for value in values {
        stack.push(value)?;
    }
    info!(list = %stack.list(), "pushed");
    Ok(())
}

fn drain<A: Display>(stack: &mut BoundedStack<A>) -> StackEmpty {
    loop {
        match stack.pop() {
            Ok(value) => info!(%value, "popped"),
            Err(empty) => return empty,
        }
    }
}

fn number_stack() -> Result<(), ConstructError> {
    let mut numbers = BoundedStack::new(3)?;
    if let Err(full) = push_all(&mut numbers, vec![10, 20, 30]) {
        error!(value = full.into_inner(), "unexpected overflow");
    }
    if let Ok(top) = numbers.peek() {
        info!(top, list = %numbers.list(), "peeked");
    }
    if let Ok(top) = numbers.pop() {
        info!(top, list = %numbers.list(), "popped");
    }
    if let Err(full) = push_all(&mut numbers, vec![99, 111]) {
        let message = full.to_string();
        info!(error = %message, rejected = full.into_inner(), "caught expected overflow");
    }
    let empty = drain(&mut numbers);
    info!(error = %empty, "caught expected underflow");
    Ok(())
}

fn text_stack() -> Result<(), ConstructError> {
    let mut texts = BoundedStack::new(4)?;
    if let Err(full) = push_all(&mut texts, vec!["A", "B", "C"]) {
        error!(value = full.into_inner(), "unexpected overflow");
    }
    if let Ok(top) = texts.peek() {
        info!(top, list = %texts.list(), "peeked");
    }
    if let Ok(top) = texts.pop() {
        info!(top, list = %texts.list(), "popped");
    }
    if let Err(full) = push_all(&mut texts, vec!["D", "E", "F"]) {
        let message = full.to_string();
        info!(error = %message, rejected = full.into_inner(), list = %texts.list(), "caught expected overflow");
    }

    let untouched: BoundedStack<&str> = BoundedStack::new(2)?;
    if let Err(empty) = untouched.peek() {
        info!(error = %empty, "caught expected underflow on peek");
    }
    Ok(())
}

fn main() -> Result<(), ConstructError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    number_stack()?;
    text_stack()?;

    if let Err(error) = BoundedStack::<u8>::new(0) {
        info!(%error, "caught expected construction failure");
    }
    info!("all walkthroughs done");
    Ok(())
}
