//! farmjob turns render job descriptions into render-farm submission payloads.
//!
//! A job is an ordered list of layers. Each layer names a render engine and its parameters;
//! farmjob builds the engine's command line, resolves how many cores a task may use, wires the
//! layer to the one before it, and hands the finished [`Job`] to a [`Submitter`].
//!
//! # Pipeline overview
//!
//! 1. **Build**: `LayerData -> RenderCommand` through [`BuildCommand`], in [`BuildMode::Submit`]
//!    (fails fast on missing input) or [`BuildMode::Preview`] (never fails, for display).
//! 2. **Assemble**: `LayerData + RenderCommand -> Layer` (threadable, cores, service, limits,
//!    dependency on the previous layer).
//! 3. **Submit**: `Job -> SubmissionHandle` via a single [`Submitter::launch`] call.
//!
//! Configuration (dynamic command templates, default executables, services) is an explicit
//! [`SubmitConfig`] value; nothing is read from process-wide state.
#![forbid(unsafe_code)]

mod assemble;
mod config;
mod foundation;
mod model;
mod services;

/// Per-engine command construction.
pub mod command;
/// Job submission transports.
pub mod submit;

pub use assemble::job::{Job, JobAssembler, LayerPreview, submit_job};
pub use assemble::layer::{DependKind, Layer, LayerDepend, build_layer, resolve_threadable};
pub use command::{BuildCommand, BuildContext, BuildMode, RenderCommand, build_layer_command};
pub use config::{Executables, RenderCmdTemplate, ServiceProfile, SubmitConfig};
pub use foundation::core::{FRAME_END_TOKEN, FRAME_START_TOKEN, FRAME_TOKEN, is_animation_range};
pub use foundation::error::{FarmError, FarmResult};
pub use model::{
    BlenderParams, DependType, DynamicArg, DynamicParams, JobData, LayerCommand, LayerData,
    LayerType, MayaParams, NukeParams, ShellParams,
};
pub use services::{NoServices, ServiceRegistry};
pub use submit::spool::SpoolSubmitter;
pub use submit::{SubmissionHandle, Submitter};
