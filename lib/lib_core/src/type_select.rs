use std::{mem::ManuallyDrop, ptr};

/// A compile-time list of candidate types, written as a tuple `(A, B, ...)`.
///
/// Implemented for tuples of one to eight members. The unit tuple has no impl, so an
/// empty candidate list fails to compile. The trait is sealed: [`MultiValue`] trusts
/// `Storage` and [`TypeList::drop_member`] to describe the real member layout.
///
/// ```compile_fail
/// struct Handles;
///
/// impl lib_core::TypeList for Handles {
///     const SIZES: &'static [usize] = &[1];
///     const ALIGNS: &'static [usize] = &[1];
///     type Storage = u8;
///
///     fn type_name(_: usize) -> &'static str {
///         "u8"
///     }
///
///     unsafe fn drop_member(_: usize, _: *mut u8) {}
/// }
/// ```
///
/// [`MultiValue`]: crate::MultiValue
pub trait TypeList: private::Sealed {
    const SIZES: &'static [usize];
    const ALIGNS: &'static [usize];

    const LEN: usize = Self::SIZES.len();
    const MAX_SIZE: usize = max_of(Self::SIZES);
    const MAX_ALIGN: usize = max_of(Self::ALIGNS);

    /// Index of the member with the largest size. Ties go to the first listed.
    const LARGEST: usize = largest_index(Self::SIZES);

    /// Storage that every member fits into at offset zero, with the strictest member
    /// alignment.
    type Storage;

    fn type_name(index: usize) -> &'static str;

    /// Drops the member at `index` in place.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live, properly aligned value of the member type at `index`.
    /// The value must not be used again afterwards.
    unsafe fn drop_member(index: usize, ptr: *mut u8);
}

/// Resolves the member type at position `I` of a [`TypeList`].
pub trait TypeAt<const I: usize> {
    type Output;
}

/// Marks `Self` as the member of `L` found at position `I`.
///
/// `I` is inferred at use sites. A list with duplicate members makes the inference
/// ambiguous, which keeps member types distinct.
///
/// Sealed like [`TypeList`], so `INDEX` always names the union field `Self` is stored in:
///
/// ```compile_fail
/// struct Big([u64; 16]);
///
/// impl lib_core::Member<(u8,), lib_core::At<7>> for Big {
///     const INDEX: usize = 0;
/// }
/// ```
pub trait Member<L: TypeList, I>: Sized + private::SealedMember<L, I> {
    const INDEX: usize;
}

/// Type-level position used by [`Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct At<const N: usize>;

/// Names the largest of the listed types, first-listed winning ties.
///
/// ```
/// let x: lib_core::largest_of!(u32, u64, u8) = 7u64;
/// # let _ = x;
/// ```
///
/// Only usable with concrete types, since the selection is a const expression.
#[macro_export]
macro_rules! largest_of {
    ($($T:ty),+ $(,)?) => {
        <($($T,)+) as $crate::hidden::TypeAt<{ <($($T,)+) as $crate::TypeList>::LARGEST }>>::Output
    };
}

pub const fn max_of(values: &[usize]) -> usize {
    let mut result = 0;
    let mut i = 0;
    while i < values.len() {
        if values[i] > result {
            result = values[i];
        }
        i += 1;
    }

    result
}

pub const fn largest_index(sizes: &[usize]) -> usize {
    assert!(!sizes.is_empty(), "candidate type list is empty");

    let mut result = 0;
    let mut i = 1;
    while i < sizes.len() {
        if sizes[i] > sizes[result] {
            result = i;
        }
        i += 1;
    }

    result
}

mod private {
    pub trait Sealed {}

    pub trait SealedMember<L, I> {}
}

macro_rules! type_member {
    (($($All:ident),+), $idx:literal, $T:ident) => {
        impl<$($All),+> TypeAt<$idx> for ($($All,)+) {
            type Output = $T;
        }

        impl<$($All),+> private::SealedMember<($($All,)+), At<$idx>> for $T {}

        impl<$($All),+> Member<($($All,)+), At<$idx>> for $T {
            const INDEX: usize = $idx;
        }
    };
}

macro_rules! type_list {
    ($Union:ident, $all:tt, { $($idx:literal => $T:ident . $field:ident),+ $(,)? }) => {
        #[doc(hidden)]
        #[allow(dead_code)]
        #[repr(C)]
        pub union $Union<$($T),+> {
            $($field: ManuallyDrop<$T>,)+
        }

        impl<$($T),+> private::Sealed for ($($T,)+) {}

        impl<$($T),+> TypeList for ($($T,)+) {
            const SIZES: &'static [usize] = &[$(size_of::<$T>()),+];
            const ALIGNS: &'static [usize] = &[$(align_of::<$T>()),+];

            type Storage = $Union<$($T),+>;

            fn type_name(index: usize) -> &'static str {
                match index {
                    $($idx => std::any::type_name::<$T>(),)+
                    _ => "<out of range>",
                }
            }

            unsafe fn drop_member(index: usize, ptr: *mut u8) {
                match index {
                    $($idx => unsafe { ptr::drop_in_place(ptr.cast::<$T>()) },)+
                    _ => {}
                }
            }
        }

        $(type_member!($all, $idx, $T);)+
    };
}

type_list!(Storage1, (A), { 0 => A.a });
type_list!(Storage2, (A, B), { 0 => A.a, 1 => B.b });
type_list!(Storage3, (A, B, C), { 0 => A.a, 1 => B.b, 2 => C.c });
type_list!(Storage4, (A, B, C, D), { 0 => A.a, 1 => B.b, 2 => C.c, 3 => D.d });
type_list!(Storage5, (A, B, C, D, E), {
    0 => A.a, 1 => B.b, 2 => C.c, 3 => D.d, 4 => E.e,
});
type_list!(Storage6, (A, B, C, D, E, F), {
    0 => A.a, 1 => B.b, 2 => C.c, 3 => D.d, 4 => E.e, 5 => F.f,
});
type_list!(Storage7, (A, B, C, D, E, F, G), {
    0 => A.a, 1 => B.b, 2 => C.c, 3 => D.d, 4 => E.e, 5 => F.f, 6 => G.g,
});
type_list!(Storage8, (A, B, C, D, E, F, G, H), {
    0 => A.a, 1 => B.b, 2 => C.c, 3 => D.d, 4 => E.e, 5 => F.f, 6 => G.g, 7 => H.h,
});
