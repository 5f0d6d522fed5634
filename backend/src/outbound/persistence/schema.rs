//! Diesel table definitions for the profile store.

diesel::table! {
    /// Stored user profiles. `id` is assigned by the database sequence.
    user_profiles (id) {
        id -> Int4,
        username -> Varchar,
        email -> Varchar,
        phone -> Varchar,
    }
}
