//! Error types for the activities service

use std::path::PathBuf;

use thiserror::Error;

/// Rejections from roster mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The named activity was never seeded
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    /// The email is already on the roster
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    /// The email is not on the roster
    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },
}

impl RegistryError {
    pub fn activity(&self) -> &str {
        match self {
            RegistryError::ActivityNotFound { activity }
            | RegistryError::AlreadySignedUp { activity, .. }
            | RegistryError::NotRegistered { activity, .. } => activity,
        }
    }
}

/// Failures while building the registry at startup.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}
