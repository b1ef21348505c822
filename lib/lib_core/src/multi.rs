use std::{fmt, mem::MaybeUninit};

use crate::{Member, StorageError, StorageResult, TypeList};

/// Holds at most one value out of the member types of `L`, in one shared region.
///
/// The region is `L::Storage`, sized and aligned for the largest member. A discriminant
/// records which member is live, and every accessor checks it.
///
/// ```
/// use lib_core::MultiValue;
///
/// let mut value = MultiValue::<(u8, String)>::new();
/// value.set(String::from("quad"));
/// assert!(value.get::<u8, _>().is_err());
/// assert_eq!(value.get::<String, _>().unwrap(), "quad");
/// ```
pub struct MultiValue<L: TypeList> {
    raw: MaybeUninit<L::Storage>,
    live: Option<usize>,
}

impl<L: TypeList> MultiValue<L> {
    pub const fn new() -> Self {
        Self {
            raw: MaybeUninit::uninit(),
            live: None,
        }
    }

    pub fn with<X: Member<L, I>, I>(value: X) -> Self {
        let mut result = Self::new();
        result.set(value);

        result
    }

    /// Index within `L` of the live member.
    pub fn which(&self) -> Option<usize> {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_none()
    }

    pub fn type_name(&self) -> Option<&'static str> {
        self.live.map(L::type_name)
    }

    pub fn holds<X: Member<L, I>, I>(&self) -> bool {
        self.live == Some(X::INDEX)
    }

    /// Stores `value` and marks `X` live, dropping whatever was live before.
    pub fn set<X: Member<L, I>, I>(&mut self, value: X) -> &mut X {
        self.reset();

        // `L::Storage` is a `repr(C)` union, so every member starts at its base.
        let ptr = self.raw.as_mut_ptr().cast::<X>();
        unsafe { ptr.write(value) };
        self.live = Some(X::INDEX);

        unsafe { &mut *ptr }
    }

    pub fn get<X: Member<L, I>, I>(&self) -> StorageResult<&X> {
        self.check::<X, I>()?;

        Ok(unsafe { &*self.raw.as_ptr().cast::<X>() })
    }

    pub fn get_mut<X: Member<L, I>, I>(&mut self) -> StorageResult<&mut X> {
        self.check::<X, I>()?;

        Ok(unsafe { &mut *self.raw.as_mut_ptr().cast::<X>() })
    }

    /// Moves the live `X` out, leaving the holder empty.
    pub fn take<X: Member<L, I>, I>(&mut self) -> StorageResult<X> {
        self.check::<X, I>()?;

        self.live = None;
        Ok(unsafe { self.raw.as_ptr().cast::<X>().read() })
    }

    /// Drops the live value, if any.
    pub fn reset(&mut self) {
        if let Some(index) = self.live.take() {
            tracing::trace!(ty = L::type_name(index), index, "releasing multi-value member");

            unsafe { L::drop_member(index, self.raw.as_mut_ptr().cast::<u8>()) };
        }
    }

    fn check<X: Member<L, I>, I>(&self) -> StorageResult<()> {
        match self.live {
            Some(index) if index == X::INDEX => Ok(()),
            Some(index) => Err(StorageError::type_mismatch::<X>(L::type_name(index))),
            None => Err(StorageError::empty_access::<X>()),
        }
    }
}

impl<L: TypeList> Drop for MultiValue<L> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<L: TypeList> Default for MultiValue<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: TypeList> fmt::Debug for MultiValue<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiValue")
            .field("which", &self.live)
            .field("type_name", &self.type_name())
            .finish()
    }
}
