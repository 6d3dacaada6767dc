//! Diesel schema for credential persistence.

diesel::table! {
    /// User records with hashed credentials.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Unique login name.
        #[max_length = 255]
        username -> Varchar,
        /// Opaque one-way password hash.
        #[max_length = 255]
        password_hash -> Varchar,
    }
}
