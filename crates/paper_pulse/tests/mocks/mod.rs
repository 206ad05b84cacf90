pub mod analyst;
pub mod extractor;
pub mod script_writer;
pub mod store;
pub mod synthesizer;

/// Error type the mock collaborators fail with.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockFailure(pub String);
