use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use crate::{
    assemble::job::Job,
    foundation::error::{FarmError, FarmResult},
    submit::{SubmissionHandle, Submitter},
};

/// Writes each job descriptor to `<dir>/<job name>.json` for a spool-watching dispatcher.
#[derive(Clone, Debug)]
pub struct SpoolSubmitter {
    pub dir: PathBuf,
    pub overwrite: bool,
}

impl SpoolSubmitter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: false,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Where `job_name` would be written.
    pub fn spool_path(&self, job_name: &str) -> FarmResult<PathBuf> {
        if job_name.trim().is_empty()
            || job_name.contains(['/', '\\'])
            || job_name == "."
            || job_name == ".."
        {
            return Err(FarmError::submission(format!(
                "job name '{job_name}' cannot be used as a spool file name"
            )));
        }
        Ok(self.dir.join(format!("{job_name}.json")))
    }
}

impl Submitter for SpoolSubmitter {
    fn launch(&mut self, job: &Job) -> FarmResult<SubmissionHandle> {
        let path = self.spool_path(&job.name)?;
        ensure_dir(&self.dir)?;

        if !self.overwrite && path.exists() {
            return Err(FarmError::submission(format!(
                "spool file '{}' already exists",
                path.display()
            )));
        }

        write_job(&path, job)?;
        tracing::debug!(path = %path.display(), "spooled job descriptor");

        Ok(SubmissionHandle {
            job_name: job.name.clone(),
            receipt: path.display().to_string(),
        })
    }
}

fn ensure_dir(dir: &Path) -> FarmResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        FarmError::submission(format!(
            "failed to create spool directory '{}': {e}",
            dir.display()
        ))
    })
}

fn write_job(path: &Path, job: &Job) -> FarmResult<()> {
    let f = File::create(path).map_err(|e| {
        FarmError::submission(format!("failed to create '{}': {e}", path.display()))
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, job)
        .map_err(|e| FarmError::serde(format!("failed to encode job '{}': {e}", job.name)))?;
    w.flush().map_err(|e| {
        FarmError::submission(format!("failed to write '{}': {e}", path.display()))
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/submit/spool.rs"]
mod tests;
