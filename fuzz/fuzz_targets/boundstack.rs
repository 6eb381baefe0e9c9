#![no_main]
use arbitrary::Arbitrary;
use boundstack::{BoundedStack, StackEmpty, StackFull};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    Pop,
    Peek,
    List,
    Restore,
}

use self::Action::*;

fuzz_target!(|input: (u8, Vec<Action>)| {
    let capacity = input.0 as usize;
    let mut stack = match BoundedStack::new(capacity) {
        Ok(stack) => stack,
        Err(_) => {
            assert_eq!(0, capacity);
            return;
        }
    };
    let mut model: Vec<String> = Vec::new();
    for action in input.1 {
        match action {
            Push(data) => {
                if model.len() < capacity {
                    assert_eq!(Ok(()), stack.push(data.clone()));
                    model.push(data);
                } else {
                    assert_eq!(Err(StackFull(data.clone())), stack.push(data));
                }
            }
            Pop => assert_eq!(model.pop().ok_or(StackEmpty::Pop), stack.pop()),
            Peek => assert_eq!(model.last().ok_or(StackEmpty::Peek), stack.peek()),
            List => assert_eq!(model.join(";"), stack.list()),
            Restore => {
                let (cells, size) = stack.into_raw();
                stack = BoundedStack::from_raw(cells, size).unwrap();
            }
        }
        assert_eq!(model.len(), stack.size());
        assert_eq!(capacity, stack.capacity());
    }
});
