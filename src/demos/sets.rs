//! Set operations and short-circuit evaluation with truthy passthrough.
//!
//! Rust's `&&` and `||` short-circuit but always yield a `bool`. The
//! `or_value` and `and_value` helpers keep the short-circuit and hand back
//! the deciding operand itself, so `or_value(None, || Some("Default"))` is
//! `Some("Default")` and `and_value(vec![], || ...)` is the empty vec.

use log::debug;
use rustc_hash::FxHashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::{Result, RpsError};

/// Unordered set with idempotent insert and checked remove.
#[derive(Clone, Debug)]
pub struct DemoSet<T> {
    items: FxHashSet<T>,
}

impl<T> Default for DemoSet<T> {
    fn default() -> Self {
        Self {
            items: FxHashSet::default(),
        }
    }
}

impl<T: Eq + Hash + Debug> DemoSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element. Returns false if it was already present.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Remove an element that must be present.
    pub fn remove(&mut self, item: &T) -> Result<()> {
        if self.items.remove(item) {
            Ok(())
        } else {
            Err(RpsError::NotFound(format!("{:?}", item)))
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Elements in ascending order, for stable printing.
    pub fn sorted(&self) -> Vec<&T>
    where
        T: Ord,
    {
        let mut items: Vec<&T> = self.items.iter().collect();
        items.sort();
        items
    }
}

/// Truthiness of a value: zero, empty and absent values are falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for &str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for &[T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|v| v.is_truthy())
    }
}

/// `left or right`: `left` if truthy, otherwise the evaluated `right`.
///
/// `right` is not evaluated when `left` is truthy. Both operands share one
/// type, so mixed-type expressions need the right side lifted into `T`.
pub fn or_value<T: Truthy>(left: T, right: impl FnOnce() -> T) -> T {
    if left.is_truthy() {
        left
    } else {
        right()
    }
}

/// `left and right`: `left` if falsy, otherwise the evaluated `right`.
///
/// `right` is not evaluated when `left` is falsy. As with `or_value`,
/// both operands share one type.
pub fn and_value<T: Truthy>(left: T, right: impl FnOnce() -> T) -> T {
    if left.is_truthy() {
        right()
    } else {
        left
    }
}

/// `x / y > 1`, guarded so a zero divisor never reaches the division.
///
/// An overflowing quotient (`i64::MIN / -1`) counts as false.
pub fn safe_ratio_above_one(x: i64, y: i64) -> bool {
    y != 0 && x.checked_div(y).is_some_and(|q| q > 1)
}

/// The demonstration lines printed by the `sets` command.
///
/// Fails with `NotFound` if the removal target is missing.
pub fn demo_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();

    let mut set = DemoSet::new();
    for item in [1, 3, 5, 3] {
        if !set.add(item) {
            debug!("{} already in set", item);
        }
    }
    lines.push(format!("set after adding 1, 3, 5, 3: {:?}", set.sorted()));

    set.remove(&5)?;
    lines.push(format!("set after removing 5: {:?}", set.sorted()));

    let (x, y) = (10, 0);
    lines.push(format!("y != 0 and x / y > 1: {}", safe_ratio_above_one(x, y)));
    lines.push(format!("x > 5 or y < 0: {}", x > 5 || y < 0));

    let data: Vec<i64> = Vec::new();
    let gated = and_value(data.clone(), || vec![data.len() as i64]);
    lines.push(format!("data and [len(data)]: {:?}", gated));

    let value: Option<&str> = None;
    lines.push(format!("value or \"Default\": {:?}", or_value(value, || Some("Default"))));

    let mut ran = Vec::new();
    let kept = or_value(true, || {
        ran.push("This won't run");
        false
    });
    lines.push(format!("True or side effect: {} (side effects: {:?})", kept, ran));

    let mut ran = Vec::new();
    let fell_through = or_value(false, || {
        ran.push("This will run");
        false
    });
    lines.push(format!("False or side effect: {} (side effects: {:?})", fell_through, ran));

    Ok(lines)
}
