use crate::{
    command::{BuildCommand, BuildContext, RenderCommand, non_empty},
    foundation::{
        core::{FRAME_END_TOKEN, FRAME_START_TOKEN},
        error::FarmResult,
    },
    model::MayaParams,
};

impl BuildCommand for MayaParams {
    /// `Render -r file -s <start> -e <end> [-cam <camera>] <file>`
    fn build_command(&self, ctx: &BuildContext<'_>) -> FarmResult<RenderCommand> {
        let Some(maya_file) = non_empty(&self.maya_file) else {
            return ctx
                .mode
                .missing_input_line("no Maya file provided, cannot submit job");
        };

        let mut args = vec![
            ctx.config.executables.maya.clone(),
            "-r".to_string(),
            "file".to_string(),
            "-s".to_string(),
            FRAME_START_TOKEN.to_string(),
            "-e".to_string(),
            FRAME_END_TOKEN.to_string(),
        ];
        if let Some(camera) = non_empty(&self.camera) {
            args.extend(["-cam".to_string(), camera.to_string()]);
        }
        args.push(maya_file.to_string());
        Ok(RenderCommand::Args(args))
    }
}
