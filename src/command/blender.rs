use crate::{
    command::{BuildCommand, BuildContext, RenderCommand, non_empty},
    foundation::{
        core::{FRAME_END_TOKEN, FRAME_START_TOKEN, FRAME_TOKEN, is_animation_range},
        error::FarmResult,
    },
    model::BlenderParams,
};

impl BuildCommand for BlenderParams {
    /// `blender -b -noaudio <file> [-S <scene>] [--use-compositing] [-o <out>] [-F <format>]`
    /// followed by `-s <start> -e <end> -a` for `N-M` ranges or `-f <frame>` otherwise.
    fn build_command(&self, ctx: &BuildContext<'_>) -> FarmResult<RenderCommand> {
        let Some(blender_file) = non_empty(&self.blender_file) else {
            return ctx
                .mode
                .missing_input_line("no Blender file provided, cannot submit job");
        };

        let executable = non_empty(&self.blender_executable)
            .unwrap_or(ctx.config.executables.blender.as_str());

        let mut args = vec![
            executable.to_string(),
            "-b".to_string(),
            "-noaudio".to_string(),
            blender_file.to_string(),
        ];
        // -S must follow the file: blender applies arguments in order.
        if let Some(scene) = non_empty(&self.scene) {
            args.extend(["-S".to_string(), scene.to_string()]);
        }
        if self.use_compositing {
            args.push("--use-compositing".to_string());
        }
        if let Some(output_path) = non_empty(&self.output_path) {
            args.extend(["-o".to_string(), output_path.to_string()]);
        }
        if let Some(output_format) = non_empty(&self.output_format) {
            args.extend(["-F".to_string(), output_format.to_string()]);
        }

        if is_animation_range(ctx.layer_range) {
            args.extend([
                "-s".to_string(),
                FRAME_START_TOKEN.to_string(),
                "-e".to_string(),
                FRAME_END_TOKEN.to_string(),
                "-a".to_string(),
            ]);
        } else {
            args.extend(["-f".to_string(), FRAME_TOKEN.to_string()]);
        }

        Ok(RenderCommand::Args(args))
    }
}
