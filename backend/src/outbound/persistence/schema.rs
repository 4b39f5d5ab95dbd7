//! Diesel table definition for the PostgreSQL schema.
//!
//! The table is assumed to pre-exist; this definition must match it exactly.
//! `diesel print-schema` against a live database regenerates it.

diesel::table! {
    /// User accounts table.
    ///
    /// `id` is the store-assigned primary key; `password` holds the hex
    /// digest, never plaintext.
    users (id) {
        /// Primary key, assigned by the store on insert.
        id -> Int4,
        /// Login name; uniqueness is the store's concern.
        username -> Varchar,
        /// Password digest (lower-case hex).
        password -> Varchar,
        /// Contact address.
        email -> Varchar,
    }
}
