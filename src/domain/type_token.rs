// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime type witness for declared property value types.
//!
//! This module provides the `TypeToken` type, which captures the runtime
//! identity of a Rust type (`TypeId` plus type name) so that a property
//! descriptor can carry its declared value type as data.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A runtime witness of a declared value type.
///
/// `TypeToken` records which Rust type a property descriptor declares for its
/// values, and which source/target types a converter operates on. Two tokens
/// are equal exactly when they witness the same type; the captured type name
/// is carried for diagnostics only and never participates in equality.
///
/// # Examples
///
/// ```
/// use propcfg::domain::type_token::TypeToken;
///
/// let token = TypeToken::of::<i64>();
/// assert_eq!(token, TypeToken::of::<i64>());
/// assert_ne!(token, TypeToken::of::<u64>());
/// assert_eq!(token.name(), "i64");
/// ```
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Creates the token witnessing the type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::type_token::TypeToken;
    ///
    /// let token = TypeToken::of::<String>();
    /// assert_eq!(token.name(), std::any::type_name::<String>());
    /// ```
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeToken {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the `TypeId` of the witnessed type.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::type_token::TypeToken;
    /// use std::any::TypeId;
    ///
    /// let token = TypeToken::of::<bool>();
    /// assert_eq!(token.id(), TypeId::of::<bool>());
    /// ```
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the name of the witnessed type.
    ///
    /// The name comes from `std::any::type_name` and is intended for
    /// diagnostics; it is not guaranteed to be unique or stable across
    /// compiler versions.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::type_token::TypeToken;
    ///
    /// let token = TypeToken::of::<f64>();
    /// assert_eq!(token.name(), "f64");
    /// ```
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeToken").field(&self.name).finish()
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
