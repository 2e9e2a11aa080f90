use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};


/// Numeric type usable as an edge weight / path cost
/// Sums report overflow instead of wrapping or panicking
pub trait Cost: Zero + PartialOrd + Copy + Debug {

    /// self + other, None when the result is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            fn checked_sum(self, other: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &other)
            }
        }
    )*};
}

macro_rules! float_cost {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            // finite + finite running off to infinity counts as overflow
            fn checked_sum(self, other: Self) -> Option<Self> {
                let sum = self + other;
                if sum.is_infinite() && self.is_finite() && other.is_finite() {
                    None
                } else {
                    Some(sum)
                }
            }
        }
    )*};
}

integer_cost!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_cost!(f32, f64);
