//! Layer and job assembly: descriptions plus built commands become a scheduler payload.

/// Job-level assembly and submission.
pub mod job;
/// Per-layer resolution and dependency wiring.
pub mod layer;
