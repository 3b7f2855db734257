use crate::{
    command::{BuildCommand, BuildContext, RenderCommand, shell_words},
    foundation::error::FarmResult,
    model::ShellParams,
};

impl BuildCommand for ShellParams {
    /// The user's command line, split with shell quoting rules.
    ///
    /// Only an absent command is missing input; blank text is an empty command in both modes.
    fn build_command(&self, ctx: &BuildContext<'_>) -> FarmResult<RenderCommand> {
        let Some(line) = self.command_text_box.as_deref() else {
            return ctx.mode.missing_input(
                "no shell command provided, cannot submit job",
                RenderCommand::Args(vec![]),
            );
        };

        match shell_words::split_shell_words(line) {
            Ok(args) => Ok(RenderCommand::Args(args)),
            Err(err) if ctx.mode.is_preview() => {
                tracing::debug!(%err, "shell command preview left unsplit");
                Ok(RenderCommand::Line(line.to_string()))
            }
            Err(err) => Err(err),
        }
    }
}
