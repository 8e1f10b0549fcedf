// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use wahlbericht_domain::UnknownParty;
use wahlbericht_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from persistence errors and represent the API
/// contract. Errors surface to the presentation layer undecorated; there is
/// no retry policy and no partial-result degradation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A party returned by the store has no entry in the display color table.
    ///
    /// This signals a stale color table and must fail loudly, never fall
    /// back to a default color.
    UnknownParty {
        /// The party name that failed to resolve.
        party: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::UnknownParty { party } => {
                write!(f, "Party '{party}' has no entry in the display color table")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<UnknownParty> for ApiError {
    fn from(err: UnknownParty) -> Self {
        Self::UnknownParty { party: err.party }
    }
}

/// Translates a persistence error into an API error.
///
/// This translation is explicit and ensures persistence errors are not
/// leaked directly to the presentation layer.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::ElectionNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Election"),
            message: format!("Election {id} does not exist"),
        },
        PersistenceError::ConstituencyNotFound {
            election_id,
            constituency_id,
        } => ApiError::ResourceNotFound {
            resource_type: String::from("Constituency"),
            message: format!(
                "No winner recorded for constituency {constituency_id} in election {election_id}"
            ),
        },
        PersistenceError::PartyNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Party"),
            message: format!("Party {id} does not exist"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
