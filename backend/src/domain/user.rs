//! Registered user data model.
//!
//! Usernames and email addresses are opaque strings. Any string the client
//! sends is stored verbatim: no trimming, case folding or shape checks are
//! applied, and uniqueness follows the store's default collation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique login handle chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Wrap a username exactly as supplied.
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }
}

/// Contact address, unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Wrap an email address exactly as supplied.
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}

macro_rules! string_newtype_conversions {
    ($name:ident) => {
        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_newtype_conversions!(Username);
string_newtype_conversions!(EmailAddress);

/// Store-assigned identifier. Never supplied by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier read back from storage.
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registration command: the fields a client supplies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    email: EmailAddress,
}

impl NewUser {
    /// Build from the requested username and email.
    ///
    /// # Examples
    /// ```
    /// use registration::domain::{EmailAddress, NewUser, Username};
    ///
    /// let user = NewUser::new(Username::new("shoaib"), EmailAddress::new("shoaib@example.com"));
    /// assert_eq!(user.username().as_ref(), "shoaib");
    /// ```
    pub fn new(username: Username, email: EmailAddress) -> Self {
        Self { username, email }
    }

    /// Requested username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `username` and `email` are each unique across all records.
/// - Records are never updated or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: Username,
    email: EmailAddress,
}

impl User {
    /// Assemble a record from stored components.
    pub fn new(id: UserId, username: Username, email: EmailAddress) -> Self {
        Self {
            id,
            username,
            email,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Unique email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
