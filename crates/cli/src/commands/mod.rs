//! Command implementations, one module per command group.

pub mod account;
pub mod cart;
pub mod chat;
pub mod listings;
pub mod stats;
pub mod theme;

use thiserror::Error;

use ecofinds_core::CategoryError;
use ecofinds_store::{AuthError, KvError};

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    /// Registration or login failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Writing to the store failed.
    #[error(transparent)]
    Storage(#[from] KvError),

    /// The command needs an active session.
    #[error("No active session. Log in first.")]
    NotLoggedIn,

    /// An unknown category label was given.
    #[error(transparent)]
    Category(#[from] CategoryError),

    /// A condition or theme label did not parse.
    #[error("{0}")]
    InvalidArgument(String),

    /// The referenced listing does not exist.
    #[error("No listing with ID {0}")]
    UnknownListing(String),

    /// Only the seller may change a listing.
    #[error("Listing {0} belongs to another seller")]
    NotYourListing(String),

    /// An image file could not be read.
    #[error("Failed to read image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
