//! Hand-off of an assembled [`Job`] to the scheduler.
//!
//! The transport itself lives behind [`Submitter`]; this crate only decides what is sent.

use crate::{assemble::job::Job, foundation::error::FarmResult};

/// Spool-directory submitter.
pub mod spool;

/// Receipt returned by a [`Submitter`] for a launched job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionHandle {
    pub job_name: String,
    /// Transport-specific identifier (spool file path, scheduler job id, ...).
    pub receipt: String,
}

/// Performs the actual transport of a job to the scheduling system.
pub trait Submitter {
    /// Launches `job`. Called once per submission; no retries are attempted by callers.
    fn launch(&mut self, job: &Job) -> FarmResult<SubmissionHandle>;
}
