//! Diesel table definitions.
//!
//! These must match `backend/migrations` exactly. SQLite stores
//! `INTEGER PRIMARY KEY` values as 64-bit integers, hence `BigInt`.

diesel::table! {
    /// Registered users.
    ///
    /// `username` and `email` each carry a `UNIQUE` constraint; `id` is
    /// assigned by SQLite (`AUTOINCREMENT`) and never reused.
    users (id) {
        /// Primary key assigned on insert.
        id -> BigInt,
        /// Unique login handle.
        username -> Text,
        /// Unique contact address.
        email -> Text,
    }
}
