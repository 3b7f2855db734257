//! Per-engine command construction.
//!
//! Every layer type implements [`BuildCommand`]. Named engines (Maya, Nuke, Blender, Shell)
//! produce an argument list so values with spaces never get re-tokenized; the config-driven
//! engine produces a single line that is shell-split before execution.
//!
//! Builders run in one of two [`BuildMode`]s. `Submit` fails fast on missing required input;
//! `Preview` never fails on missing input and returns a displayable placeholder instead.

use std::fmt;

use crate::{
    config::SubmitConfig,
    foundation::error::{FarmError, FarmResult},
    model::{LayerCommand, LayerData},
};

/// Blender command builder.
pub mod blender;
/// Config-driven command builder.
pub mod dynamic;
/// Flag classification and value formatting.
pub mod flag;
/// Maya command builder.
pub mod maya;
/// Nuke command builder.
pub mod nuke;
/// User-authored shell command lines.
pub mod shell;
/// POSIX shell word splitting and joining.
pub mod shell_words;

/// Whether missing required input is fatal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildMode {
    /// Missing required input is a [`FarmError::Validation`].
    #[default]
    Submit,
    /// Missing required input degrades to a placeholder command for display.
    Preview,
}

impl BuildMode {
    pub fn is_preview(self) -> bool {
        matches!(self, Self::Preview)
    }

    /// Resolves a missing required input.
    ///
    /// In `Submit` mode this is a validation error carrying `message`; in `Preview` mode the
    /// `placeholder` is returned instead.
    pub fn missing_input(
        self,
        message: impl Into<String>,
        placeholder: RenderCommand,
    ) -> FarmResult<RenderCommand> {
        match self {
            Self::Submit => Err(FarmError::validation(message)),
            Self::Preview => {
                let message = message.into();
                tracing::debug!(%message, "preview placeholder for missing input");
                Ok(placeholder)
            }
        }
    }

    /// Like [`BuildMode::missing_input`] with a diagnostic line as the preview placeholder.
    pub fn missing_input_line(self, message: impl Into<String>) -> FarmResult<RenderCommand> {
        let message = message.into();
        let placeholder = RenderCommand::Line(format!("Error: {message}"));
        self.missing_input(message, placeholder)
    }
}

/// A built render command.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RenderCommand {
    /// Pre-joined command line, shell-split before execution.
    Line(String),
    /// Argument list, each entry executed verbatim.
    Args(Vec<String>),
}

impl RenderCommand {
    /// The tokens to execute.
    pub fn into_tokens(self) -> FarmResult<Vec<String>> {
        match self {
            Self::Line(line) => shell_words::split_shell_words(&line),
            Self::Args(args) => Ok(args),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Line(line) => line.trim().is_empty(),
            Self::Args(args) => args.is_empty(),
        }
    }
}

impl fmt::Display for RenderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => f.write_str(line),
            Self::Args(args) => f.write_str(&shell_words::join_shell_words(args)),
        }
    }
}

/// Inputs a builder may read besides its own parameters.
#[derive(Clone, Copy, Debug)]
pub struct BuildContext<'a> {
    pub config: &'a SubmitConfig,
    /// The layer's frame range (`N-M` or a single frame/token).
    pub layer_range: &'a str,
    pub mode: BuildMode,
}

impl<'a> BuildContext<'a> {
    pub fn new(config: &'a SubmitConfig, layer_range: &'a str, mode: BuildMode) -> Self {
        Self {
            config,
            layer_range,
            mode,
        }
    }
}

/// Builds the render command for one layer type.
pub trait BuildCommand {
    fn build_command(&self, ctx: &BuildContext<'_>) -> FarmResult<RenderCommand>;
}

impl BuildCommand for LayerCommand {
    fn build_command(&self, ctx: &BuildContext<'_>) -> FarmResult<RenderCommand> {
        match self {
            Self::Dynamic(p) => p.build_command(ctx),
            Self::Maya(p) => p.build_command(ctx),
            Self::Nuke(p) => p.build_command(ctx),
            Self::Blender(p) => p.build_command(ctx),
            Self::Shell(p) => p.build_command(ctx),
        }
    }
}

/// Builds the command for `layer` in the given mode.
#[tracing::instrument(
    skip(layer, config),
    fields(layer = %layer.name, layer_type = %layer.layer_type())
)]
pub fn build_layer_command(
    layer: &LayerData,
    config: &SubmitConfig,
    mode: BuildMode,
) -> FarmResult<RenderCommand> {
    let ctx = BuildContext::new(config, &layer.layer_range, mode);
    layer.cmd.build_command(&ctx)
}

/// `Some` only for present, non-empty values.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/command/mod.rs"]
mod tests;
