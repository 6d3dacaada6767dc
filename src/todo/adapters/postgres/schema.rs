//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records scoped to an owning user.
    todos (id) {
        /// Todo identifier.
        id -> Uuid,
        /// Owning user identifier.
        user_id -> Uuid,
        /// Todo title.
        #[max_length = 255]
        task -> Varchar,
        /// Optional calendar-date deadline.
        deadline -> Nullable<Date>,
        /// Priority level.
        #[max_length = 50]
        priority -> Varchar,
        /// Completion flag.
        is_completed -> Bool,
        /// Creation timestamp, the insertion-order tiebreak source.
        created_at -> Timestamptz,
    }
}
