//! Summation with an optional start accumulator.
//!
//! `total(items, start)` is `start` plus every item, folded left to right.
//! An empty sequence gives back `start` unchanged. Element types that cannot
//! be added are rejected by the trait bounds at compile time.
//!
//! ```
//! use rps_lab::demos::aggregate::{sum, total};
//!
//! assert_eq!(sum([1, 2, 3, 4, 5]), 15);
//! assert_eq!(total([1, 2, 3, 4, 5], 10), 25);
//! assert_eq!(total(Vec::<i32>::new(), 5), 5);
//! ```

use rustc_hash::FxHashMap;
use std::ops::Add;

/// Start accumulator plus the sum of the sequence.
pub fn total<I, T>(items: I, start: T) -> T
where
    I: IntoIterator<Item = T>,
    T: Add<Output = T>,
{
    items.into_iter().fold(start, |acc, x| acc + x)
}

/// Sum with a zero start accumulator.
pub fn sum<I, T>(items: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Add<Output = T> + Default,
{
    total(items, T::default())
}

/// Complex number with just enough arithmetic to be summed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl std::iter::Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        total(iter, Complex::default())
    }
}

/// Renders like `(9+12j)`.
impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im < 0.0 {
            write!(f, "({}-{}j)", self.re, -self.im)
        } else {
            write!(f, "({}+{}j)", self.re, self.im)
        }
    }
}

/// Sum of every even element.
pub fn even_sum(items: &[i64]) -> i64 {
    sum(items.iter().copied().filter(|x| x % 2 == 0))
}

/// Sum of a map's values.
pub fn value_sum<K>(map: &FxHashMap<K, i64>) -> i64 {
    sum(map.values().copied())
}

/// Sum of each row.
pub fn row_sums(matrix: &[Vec<i64>]) -> Vec<i64> {
    matrix.iter().map(|row| sum(row.iter().copied())).collect()
}

/// Sum of each column. Short rows contribute only to the columns they have.
pub fn column_sums(matrix: &[Vec<i64>]) -> Vec<i64> {
    let width = matrix.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|col| sum(matrix.iter().filter_map(|row| row.get(col).copied())))
        .collect()
}

/// The demonstration lines printed by the `sums` command.
pub fn demo_lines() -> Vec<String> {
    let numbers = [1i64, 2, 3, 4, 5];
    let complex = [Complex::new(1.0, 2.0), Complex::new(3.0, 4.0), Complex::new(5.0, 6.0)];
    let scores: FxHashMap<&str, i64> = [("Alice", 95), ("Bob", 85), ("Charlie", 75)].into_iter().collect();
    let matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];

    vec![
        format!("sum of {:?}: {}", numbers, sum(numbers)),
        format!("sum of {:?} starting at 10: {}", numbers, total(numbers, 10)),
        format!("sum of 1..=10: {}", sum(1..=10i64)),
        format!("sum of even numbers in {:?}: {}", numbers, even_sum(&numbers)),
        format!("sum of complex numbers: {}", complex.iter().copied().sum::<Complex>()),
        format!("total score: {}", value_sum(&scores)),
        format!("row sums: {:?}", row_sums(&matrix)),
        format!("column sums: {:?}", column_sums(&matrix)),
        format!("empty sum starting at 5: {}", total(Vec::<i64>::new(), 5)),
    ]
}
