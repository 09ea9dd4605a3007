use thiserror::Error;

/// Errors raised while building a [`crate::table::Table`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A field was declared with an empty key.
    #[error("field #{index} has an empty key")]
    EmptyKey {
        /// Position of the field in the declaration.
        index: usize,
    },

    /// Two fields share the same key.
    #[error("duplicate field key '{0}'")]
    DuplicateKey(String),
}

/// Errors raised while turning dynamic data into a [`crate::record::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The value is not a JSON object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// The identifier property is absent or not a string/number.
    #[error("missing or non-scalar identifier '{0}'")]
    MissingId(String),
}
