use std::fmt;

pub type StorageResult<T> = Result<T, StorageError>;

/// Misuse of a storage container. These are caller bugs, not runtime conditions.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Read of a container that holds no value.
    #[error("empty access: no live value of type `{requested}`")]
    EmptyAccess { requested: &'static str },

    /// Read of a multi-value for a member that is not the live one.
    #[error("type mismatch: requested `{requested}` but `{live}` is live")]
    TypeMismatch {
        requested: &'static str,
        live: &'static str,
    },
}

impl StorageError {
    pub fn empty_access<T>() -> Self {
        Self::EmptyAccess {
            requested: std::any::type_name::<T>(),
        }
    }

    pub fn type_mismatch<T>(live: &'static str) -> Self {
        Self::TypeMismatch {
            requested: std::any::type_name::<T>(),
            live,
        }
    }
}

/// Returned by [`OptionalValue::try_construct`](crate::OptionalValue::try_construct)
/// when the slot is already occupied. Hands the rejected value back.
#[derive(thiserror::Error, PartialEq, Eq)]
#[error("slot already holds a live `{}`", std::any::type_name::<T>())]
pub struct Occupied<T>(pub T);

impl<T> Occupied<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Occupied<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Occupied")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}
