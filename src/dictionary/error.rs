use thiserror::Error;

/// Warnings raised by dictionary operations.
///
/// Both leave the dictionary exactly as it was; the front end shows the
/// message in an alert.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DictionaryError {
    /// A search matched no names.
    #[error("Animal name is not present! Nothing matches \"{query}\".")]
    NoMatch { query: String },

    /// An insert named an animal that is already listed.
    #[error("\"{name}\" is already in the dictionary!")]
    Duplicate { name: String },
}
