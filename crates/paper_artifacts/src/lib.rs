//! # Artifact Store Module
//!
//! This module provides functionality for persisting the write-once output
//! files produced by the document pipelines (uploads, audio tracks,
//! conversation scripts, slide decks, and analyses).
//!
//! Every artifact is keyed by a fresh opaque identifier, so concurrent
//! requests never contend for the same file and no collision handling is
//! needed beyond a sufficiently random token.

mod store;

pub use store::fs::FsArtifactStore;
pub use store::{ArtifactId, ArtifactKind, ArtifactStore};
