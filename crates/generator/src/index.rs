use std::fmt::{Debug, Display};

use atoi::FromRadix10Checked;

/// The type used for node ids of a generated graph.
///
/// Generation itself works on `usize` and converts into the target type when
/// a component is committed to the global edge list.
pub trait Idx: Copy + Ord + Debug + Display + Send + Sync + Sized + 'static {
    fn new(idx: usize) -> Self;

    fn index(self) -> usize;

    /// Parses a decimal number from the start of `bytes` and returns it
    /// together with the number of consumed bytes.
    ///
    /// The number is `None` if it does not fit into `Self`.
    fn parse(bytes: &[u8]) -> (Option<Self>, usize);
}

macro_rules! impl_idx {
    ($TYPE:ty) => {
        impl Idx for $TYPE {
            #[inline]
            fn new(idx: usize) -> Self {
                assert!(idx <= <$TYPE>::MAX as usize);
                idx as $TYPE
            }

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            #[inline]
            fn parse(bytes: &[u8]) -> (Option<Self>, usize) {
                FromRadix10Checked::from_radix_10_checked(bytes)
            }
        }
    };
}

impl_idx!(u32);
impl_idx!(u64);
impl_idx!(usize);
