//! Value-storage primitives shared by the engine crates.
//!
//! [`OptionalValue`] is a single slot with an explicit liveness bit, [`MultiValue`] is a
//! tagged union over a tuple of member types, and [`TypeList`] computes the storage
//! bounds both of them rely on at compile time.

mod error;
mod multi;
mod optional;
mod type_select;
pub use error::*;
pub use multi::*;
pub use optional::*;
pub use type_select::*;

#[doc(hidden)]
pub mod hidden {
    pub use crate::type_select::TypeAt;
}
