//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! to and from domain types.

use diesel::prelude::*;

use crate::domain::{EmailAddress, NewUser, User, UserId, Username};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(
            UserId::from_raw(row.id),
            Username::new(row.username),
            EmailAddress::new(row.email),
        )
    }
}

/// Insertable struct for creating user records. `id` is left to SQLite.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow {
    pub username: String,
    pub email: String,
}

impl From<&NewUser> for NewUserRow {
    fn from(user: &NewUser) -> Self {
        Self {
            username: user.username().to_string(),
            email: user.email().to_string(),
        }
    }
}
