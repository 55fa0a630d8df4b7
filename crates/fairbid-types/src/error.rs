//! Error types for the fairbid auction engine.
//!
//! All errors use the `FB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Project errors
//! - 2xx: Bid errors
//! - 3xx: Store errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{ProjectId, ProjectStatus, UserId};

/// Central error enum for all fairbid operations.
#[derive(Debug, Error)]
pub enum FairbidError {
    // =================================================================
    // Project Errors (1xx)
    // =================================================================
    /// The referenced project does not exist.
    #[error("FB_ERR_100: Project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The project is not in the state the operation requires
    /// (already closed, already awarded, or lost a racing award).
    #[error("FB_ERR_101: Invalid project state: {project_id} is {status}")]
    InvalidState {
        project_id: ProjectId,
        status: ProjectStatus,
    },

    // =================================================================
    // Bid Errors (2xx)
    // =================================================================
    /// Manual hire named a freelancer with no active bid on the project.
    #[error("FB_ERR_200: No bid from freelancer {freelancer_id} on project {project_id}")]
    BidderNotFound {
        project_id: ProjectId,
        freelancer_id: UserId,
    },

    // =================================================================
    // Store Errors (3xx)
    // =================================================================
    /// Underlying persistence failure.
    #[error("FB_ERR_300: Store error: {reason}")]
    Store { reason: String },

    /// Conditional update lost against a concurrent writer.
    #[error("FB_ERR_301: Version conflict updating project {project_id}")]
    VersionConflict { project_id: ProjectId },

    /// A store call exceeded its deadline.
    #[error("FB_ERR_302: Timed out: {reason}")]
    Timeout { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("FB_ERR_900: Internal error: {0}")]
    Internal(String),

    /// I/O error (disk, network).
    #[error("FB_ERR_901: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, FairbidError>;

// Conversion from std::io::Error
impl From<std::io::Error> for FairbidError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
