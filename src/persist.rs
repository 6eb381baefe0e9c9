// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `serde` support, saving a stack as its capacity plus its values from the
//! bottom up.

use ::serde::de::{Deserialize, Deserializer, Error as _};
use ::serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::stack::{reserve_cells, BoundedStack};

struct Items<'a, A>(&'a BoundedStack<A>);

impl<'a, A> Serialize for Items<'a, A>
where
    A: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.occupied())
    }
}

impl<A> Serialize for BoundedStack<A>
where
    A: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BoundedStack", 2)?;
        state.serialize_field("capacity", &self.capacity())?;
        state.serialize_field("items", &Items(self))?;
        state.end()
    }
}

#[derive(::serde::Deserialize)]
#[serde(rename = "BoundedStack")]
struct Saved<A> {
    capacity: usize,
    items: Vec<A>,
}

impl<'de, A> Deserialize<'de> for BoundedStack<A>
where
    A: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Saved { capacity, items } = Saved::deserialize(deserializer)?;
        let size = items.len();
        if size > capacity {
            return Err(D::Error::custom(format!(
                "{} items don't fit in a stack of capacity {}",
                size, capacity
            )));
        }
        let mut cells = reserve_cells(capacity).map_err(D::Error::custom)?;
        cells.extend(items.into_iter().map(Some));
        cells.resize_with(capacity, || None);
        BoundedStack::from_raw(cells, size).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use crate::{BoundedStack, StackEmpty};

    #[test]
    fn saves_capacity_and_items() {
        let mut stack = BoundedStack::new(3).unwrap();
        stack.push(10).unwrap();
        stack.push(20).unwrap();
        assert_eq!(
            r#"{"capacity":3,"items":[10,20]}"#,
            serde_json::to_string(&stack).unwrap()
        );
    }

    #[test]
    fn restores_a_saved_stack() {
        let mut stack: BoundedStack<String> =
            serde_json::from_str(r#"{"capacity":4,"items":["A","B","D"]}"#).unwrap();
        assert_eq!(4, stack.capacity());
        assert_eq!("A;B;D", stack.list());
        assert_eq!(Ok("D".to_string()), stack.pop());
        stack.push("E".to_string()).unwrap();
        stack.push("F".to_string()).unwrap();
        assert!(stack.is_full());
    }

    #[test]
    fn save_and_restore_preserves_equality() {
        let mut stack = BoundedStack::new(5).unwrap();
        for value in &[3u8, 1, 4] {
            stack.push(*value).unwrap();
        }
        let json = serde_json::to_string(&stack).unwrap();
        let restored: BoundedStack<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(stack, restored);

        let empty: BoundedStack<u8> = serde_json::from_str(r#"{"capacity":1,"items":[]}"#).unwrap();
        assert_eq!(Err(StackEmpty::Peek), empty.peek());
    }

    #[test]
    fn rejects_invalid_saves() {
        let overfull = serde_json::from_str::<BoundedStack<u8>>(r#"{"capacity":1,"items":[1,2]}"#);
        assert!(overfull.is_err());
        let zero = serde_json::from_str::<BoundedStack<u8>>(r#"{"capacity":0,"items":[]}"#);
        let message = zero.unwrap_err().to_string();
        assert!(message.starts_with("capacity must be at least 1"));
    }

    #[test]
    fn rejects_unallocatable_capacity() {
        let huge = serde_json::from_str::<BoundedStack<u8>>(
            r#"{"capacity":18446744073709551615,"items":[]}"#,
        );
        let message = huge.unwrap_err().to_string();
        assert!(message.starts_with("cannot allocate 18446744073709551615 cells"));
    }
}
