use crate::{
    assemble::layer::{Layer, build_layer},
    command::{BuildMode, RenderCommand, build_layer_command},
    config::SubmitConfig,
    foundation::error::FarmResult,
    model::{JobData, LayerType},
    services::ServiceRegistry,
    submit::{SubmissionHandle, Submitter},
};

/// The submission payload: job metadata plus its chained layers in submission order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub name: String,
    pub show: String,
    pub shot: String,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cores: Option<u32>,
    pub layers: Vec<Layer>,
}

impl Job {
    pub fn new(
        name: impl Into<String>,
        show: impl Into<String>,
        shot: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            show: show.into(),
            shot: shot.into(),
            user: user.into(),
            facility: None,
            max_cores: None,
            layers: vec![],
        }
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn set_facility(&mut self, facility: impl Into<String>) {
        self.facility = Some(facility.into());
    }

    pub fn set_max_cores(&mut self, max_cores: u32) {
        self.max_cores = Some(max_cores);
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// A layer's command as it would be submitted, for display before submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerPreview {
    pub name: String,
    pub layer_type: LayerType,
    pub command: RenderCommand,
}

/// Builds [`Job`]s from [`JobData`] against one configuration and service registry.
#[derive(Clone, Copy)]
pub struct JobAssembler<'a> {
    config: &'a SubmitConfig,
    registry: &'a dyn ServiceRegistry,
}

impl<'a> JobAssembler<'a> {
    /// Uses the services declared in `config` as the registry.
    pub fn new(config: &'a SubmitConfig) -> Self {
        Self {
            config,
            registry: config,
        }
    }

    pub fn with_registry(mut self, registry: &'a dyn ServiceRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Builds every layer in order, each linked to the one before it.
    ///
    /// The first failing layer aborts the whole job.
    #[tracing::instrument(skip(self, data), fields(job = %data.name, layers = data.layers.len()))]
    pub fn assemble(&self, data: &JobData) -> FarmResult<Job> {
        let mut job = Job::new(&data.name, &data.show, &data.shot, &data.username);

        for layer_data in &data.layers {
            let command = build_layer_command(layer_data, self.config, BuildMode::Submit)?;
            let layer = build_layer(layer_data, command, job.layers.last(), self.registry)?;
            job.add_layer(layer);
        }

        if let Some(facility) = &data.facility {
            job.set_facility(facility);
        }
        if let Some(max_cores) = data.max_cores.filter(|&c| c > 0) {
            job.set_max_cores(max_cores);
        }

        tracing::info!(job = %job.name, layers = job.layers.len(), "assembled job");
        Ok(job)
    }

    /// Builds each layer's command in preview mode. Never fails on missing input.
    pub fn preview_commands(&self, data: &JobData) -> Vec<LayerPreview> {
        data.layers
            .iter()
            .map(|layer| {
                let command = build_layer_command(layer, self.config, BuildMode::Preview)
                    .unwrap_or_else(|err| RenderCommand::Line(format!("Error: {err}")));
                LayerPreview {
                    name: layer.name.clone(),
                    layer_type: layer.layer_type(),
                    command,
                }
            })
            .collect()
    }

    /// Assembles the job and hands it to `submitter` exactly once.
    ///
    /// Nothing is submitted when assembly fails. Submission errors are returned unchanged.
    pub fn submit(
        &self,
        data: &JobData,
        submitter: &mut dyn Submitter,
    ) -> FarmResult<SubmissionHandle> {
        let job = self.assemble(data)?;
        let handle = submitter.launch(&job)?;
        tracing::info!(job = %job.name, receipt = %handle.receipt, "submitted job");
        Ok(handle)
    }
}

/// Assembles `data` with `config` as both configuration and service registry and submits it.
pub fn submit_job(
    data: &JobData,
    config: &SubmitConfig,
    submitter: &mut dyn Submitter,
) -> FarmResult<SubmissionHandle> {
    JobAssembler::new(config).submit(data, submitter)
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/job.rs"]
mod tests;
