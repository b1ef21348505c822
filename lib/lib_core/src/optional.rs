use std::{fmt, mem::MaybeUninit};

use crate::{Occupied, StorageError, StorageResult};

/// A single slot that holds zero or one `T` without ever default-constructing it.
///
/// The value is created only by [`construct`](Self::construct) and destroyed only by
/// [`reset`](Self::reset) or when the slot is dropped.
pub struct OptionalValue<T> {
    raw: MaybeUninit<T>,
    present: bool,
}

impl<T> OptionalValue<T> {
    pub const fn new() -> Self {
        Self {
            raw: MaybeUninit::uninit(),
            present: false,
        }
    }

    pub fn with_value(value: T) -> Self {
        let mut result = Self::new();
        result.raw.write(value);
        result.present = true;

        result
    }

    pub fn has_value(&self) -> bool {
        self.present
    }

    /// Places `value` into the empty slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot already holds a value. Use [`try_construct`](Self::try_construct)
    /// to get the value back instead.
    #[track_caller]
    pub fn construct(&mut self, value: T) -> &mut T {
        assert!(
            !self.present,
            "construct on an occupied OptionalValue<{}>",
            std::any::type_name::<T>()
        );

        self.present = true;
        self.raw.write(value)
    }

    pub fn try_construct(&mut self, value: T) -> Result<&mut T, Occupied<T>> {
        if self.present {
            return Err(Occupied(value));
        }

        self.present = true;
        Ok(self.raw.write(value))
    }

    /// Drops the live value, if any. Calling this on an empty slot does nothing.
    pub fn reset(&mut self) {
        if self.present {
            tracing::trace!(ty = std::any::type_name::<T>(), "releasing optional value");

            // Cleared first so a panicking destructor cannot lead to a second drop.
            self.present = false;
            unsafe { self.raw.assume_init_drop() };
        }
    }

    pub fn get(&self) -> StorageResult<&T> {
        if self.present {
            Ok(unsafe { self.raw.assume_init_ref() })
        } else {
            Err(StorageError::empty_access::<T>())
        }
    }

    pub fn get_mut(&mut self) -> StorageResult<&mut T> {
        if self.present {
            Ok(unsafe { self.raw.assume_init_mut() })
        } else {
            Err(StorageError::empty_access::<T>())
        }
    }

    /// Moves the value out, leaving the slot empty.
    pub fn take(&mut self) -> Option<T> {
        if self.present {
            self.present = false;
            Some(unsafe { self.raw.assume_init_read() })
        } else {
            None
        }
    }

    /// Stores `value`, returning the previous value if there was one.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let previous = self.take();
        self.present = true;
        self.raw.write(value);

        previous
    }

    pub fn as_option(&self) -> Option<&T> {
        self.get().ok()
    }

    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        self.get_mut().ok()
    }
}

impl<T> Drop for OptionalValue<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OptionalValue<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::with_value(value.clone()),
            None => Self::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("OptionalValue").field(value).finish(),
            None => f.write_str("OptionalValue(<empty>)"),
        }
    }
}

impl<T: PartialEq> PartialEq for OptionalValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl<T: Eq> Eq for OptionalValue<T> {}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::with_value(value),
            None => Self::new(),
        }
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    fn from(mut value: OptionalValue<T>) -> Self {
        value.take()
    }
}
