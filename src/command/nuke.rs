use crate::{
    command::{BuildCommand, BuildContext, RenderCommand, non_empty},
    foundation::{core::FRAME_TOKEN, error::FarmResult},
    model::NukeParams,
};

impl BuildCommand for NukeParams {
    /// `nuke -F <frame> [-X <write nodes>] -x <file>`
    fn build_command(&self, ctx: &BuildContext<'_>) -> FarmResult<RenderCommand> {
        let Some(nuke_file) = non_empty(&self.nuke_file) else {
            return ctx
                .mode
                .missing_input_line("no Nuke file provided, cannot submit job");
        };

        let mut args = vec![
            ctx.config.executables.nuke.clone(),
            "-F".to_string(),
            FRAME_TOKEN.to_string(),
        ];
        if let Some(write_nodes) = non_empty(&self.write_nodes) {
            args.extend(["-X".to_string(), write_nodes.to_string()]);
        }
        args.extend(["-x".to_string(), nuke_file.to_string()]);
        Ok(RenderCommand::Args(args))
    }
}
