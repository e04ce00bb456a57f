// SPDX-License-Identifier: MIT OR Apache-2.0

/**
Builds the trailing data for a log call out of heterogeneous values.

Each expression is converted with [`Value::from`](crate::Value).

```rust
use consolog::{Value, args};

let data = args!["user", 42, true, serde_json::json!({"id": 7})];
assert_eq!(data.len(), 4);
assert_eq!(data[1], Value::Int(42));

let none = args![];
assert!(none.is_empty());
```
*/
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
