use crate::{
    command::{BuildCommand, BuildContext, RenderCommand, flag},
    foundation::error::FarmResult,
    model::DynamicParams,
};

impl BuildCommand for DynamicParams {
    /// The engine's configured base command followed by each argument in declaration order.
    ///
    /// Solo flags are emitted bare, plain flags as `flag value`, and anything else that has a
    /// value as a positional argument. Missing mandatory values show up as a sentinel rather
    /// than failing the build.
    fn build_command(&self, ctx: &BuildContext<'_>) -> FarmResult<RenderCommand> {
        let Some(template) = ctx.config.render_cmds.get(&self.engine) else {
            return ctx
                .mode
                .missing_input_line(format!("unrecognized layer type {}", self.engine));
        };

        let mut line = template.command.clone();
        for arg in &self.args {
            if flag::is_solo_flag(&arg.flag) {
                line.push(' ');
                line.push_str(flag::solo_flag_text(&arg.flag));
                continue;
            }

            let Some(value) =
                flag::format_value(&arg.flag, arg.value.as_deref(), arg.is_path, arg.is_mandatory)
            else {
                continue;
            };

            line.push(' ');
            if flag::is_flag(&arg.flag) {
                line.push_str(&arg.flag);
                line.push(' ');
            }
            line.push_str(&value);
        }

        Ok(RenderCommand::Line(line))
    }
}
