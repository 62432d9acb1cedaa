use core::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// Fixed-width integers that can be stored in an [`Array`](super::Array).
///
/// `Default` provides the zero value used by [`Array::allocate`](super::Array::allocate).
/// This is a sealed trait.
pub trait Element: private::Sealed + Copy + Ord + Default + Debug + 'static {}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl Element for $ty {}
        )*
    };
}

impl_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Number of bytes occupied by `elements` values of `T`.
#[inline]
pub(crate) fn bytes_of<T>(elements: usize) -> usize {
    elements.saturating_mul(core::mem::size_of::<T>())
}
