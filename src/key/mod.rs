use std::fmt;

use serde::{Deserialize, Serialize};

/// Map key. Strings are used as-is, integers are coerced to their decimal
/// representation, so `collection.set(7, ..)` and `collection.get("7")`
/// address the same entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key(value.clone())
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key(value.to_owned())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0
    }
}

macro_rules! key_from_int {
    ($($int:ty),*) => {$(
        impl From<$int> for Key {
            fn from(value: $int) -> Self {
                Key(value.to_string())
            }
        }
    )*};
}

key_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
