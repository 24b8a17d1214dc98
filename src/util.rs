extern crate num_traits;

use std::{
    fmt::{Display, Formatter},
    ops::{AddAssign, Deref},
};

use num_traits::{ToPrimitive, Unsigned};

/// Monotonic tally used by the evaluation report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter<T>(T)
where
    T: Copy + Unsigned + AddAssign;

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    #[inline]
    pub fn new(counter: T) -> Self {
        Self(counter)
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 += T::one();
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign + ToPrimitive,
{
    /// `self` as a percentage of `total`; zero when `total` is zero.
    pub fn percent_of(&self, total: Counter<T>) -> f64 {
        match (self.0.to_f64(), total.0.to_f64()) {
            (Some(part), Some(total)) if total > 0.0 => part / total * 100.0,
            _ => 0.0,
        }
    }
}

impl<T> Deref for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AddAssign for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl<T> Display for Counter<T>
where
    T: Copy + Unsigned + AddAssign + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
