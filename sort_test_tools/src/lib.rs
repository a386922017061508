use std::fmt::Debug;

/// Element types every sort implementation under test must handle. These are the integers that
/// convert to `f64` without loss.
pub trait Element: Copy + Ord + Into<f64> + Send + Debug + 'static {}

impl<T> Element for T where T: Copy + Ord + Into<f64> + Send + Debug + 'static {}

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Element;
}

pub mod patterns;
