//! Channel Reaper Domain Layer
//!
//! Core types shared by every other crate in the workspace. Like any domain
//! layer it has no external dependencies: it only describes what a channel
//! snapshot looks like and which operations the reaper needs from the
//! workspace platform.
//!
//! ## Key Concepts
//!
//! - **Channel**: an immutable snapshot of a conversation, fetched once per run
//! - **History message**: the timestamp and subtype of a recent message
//! - **Archived channel**: the record kept for the admin notice and report
//! - **WorkspaceApi**: the seam between reaping logic and the platform client

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod channel;
pub mod traits;

// Re-exports for convenience
pub use channel::{ArchivedChannel, Channel, HistoryMessage};
pub use traits::WorkspaceApi;
