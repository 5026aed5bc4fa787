//! Error types for the activity data model

/// Errors raised by model validation
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Activity is missing its id
    #[error("activity has an empty id")]
    EmptyId,

    /// Activity is missing its title
    #[error("activity '{id}' has an empty title")]
    EmptyTitle {
        /// Id of the offending activity
        id: String,
    },

    /// Section name not in the canonical set
    #[error("unknown content section: '{0}'")]
    UnknownSection(String),
}
