use super::*;
use crate::{
    config::SubmitConfig,
    model::{LayerCommand, ShellParams},
    services::NoServices,
};

fn shell_layer(name: &str) -> LayerData {
    LayerData::new(
        name,
        LayerCommand::Shell(ShellParams {
            command_text_box: Some("echo hi".to_string()),
        }),
    )
}

fn registry() -> SubmitConfig {
    SubmitConfig::default()
        .with_service("maya", true)
        .with_service("shell", false)
}

fn echo() -> RenderCommand {
    RenderCommand::Args(vec!["echo".to_string(), "hi".to_string()])
}

#[test]
fn override_cores_decides_threadable() {
    let reg = registry();
    assert!(!resolve_threadable(&shell_layer("l").with_cores(1.0), &reg));
    assert!(resolve_threadable(&shell_layer("l").with_cores(0.0), &reg));
    assert!(resolve_threadable(&shell_layer("l").with_cores(-1.0), &reg));
    assert!(resolve_threadable(&shell_layer("l").with_cores(8.0), &reg));
    assert!(!resolve_threadable(&shell_layer("l").with_cores(1.5), &reg));
    assert!(resolve_threadable(&shell_layer("l").with_cores(2.0), &reg));
}

#[test]
fn override_cores_beats_the_service() {
    let layer = shell_layer("l").with_services(["maya"]).with_cores(1.0);
    assert!(!resolve_threadable(&layer, &registry()));
}

#[test]
fn first_registered_service_decides_threadable() {
    let reg = registry();
    assert!(resolve_threadable(&shell_layer("l").with_services(["maya", "shell"]), &reg));
    assert!(!resolve_threadable(&shell_layer("l").with_services(["shell", "maya"]), &reg));
    assert!(!resolve_threadable(&shell_layer("l").with_services(["houdini", "maya"]), &reg));
    assert!(!resolve_threadable(&shell_layer("l"), &reg));
    assert!(!resolve_threadable(&shell_layer("l").with_services(["maya"]), &NoServices));
}

#[test]
fn cores_pass_through_only_when_overridden() {
    let mut layer = shell_layer("l").with_services(["maya"]);
    layer.cores = 16.0;
    let built = build_layer(&layer, echo(), None, &registry()).unwrap();
    assert_eq!(built.cores, None);
    assert!(built.threadable);

    let built = build_layer(&layer.with_cores(4.0), echo(), None, &registry()).unwrap();
    assert_eq!(built.cores, Some(4.0));
}

#[test]
fn built_layer_carries_metadata_and_first_service() {
    let layer = shell_layer("render")
        .with_range("1-100")
        .with_chunk(10)
        .with_services(["shell", "maya"])
        .with_limits(["nuke_license"])
        .with_memory_mb(8192);

    let built = build_layer(&layer, echo(), None, &registry()).unwrap();
    assert_eq!(built.name, "render");
    assert_eq!(built.command, vec!["echo", "hi"]);
    assert_eq!(built.chunk, 10);
    assert_eq!(built.range, "1-100");
    assert_eq!(built.service.as_deref(), Some("shell"));
    assert_eq!(built.limits, vec!["nuke_license".to_string()]);
    assert_eq!(built.memory_mb, Some(8192));
    assert!(!built.threadable);
    assert_eq!(built.depend, None);
}

#[test]
fn line_commands_are_split_into_tokens() {
    let cmd = RenderCommand::Line(r#"kick -i "/a b.ass""#.to_string());
    let built = build_layer(&shell_layer("l"), cmd, None, &NoServices).unwrap();
    assert_eq!(built.command, vec!["kick", "-i", "/a b.ass"]);

    let bad = RenderCommand::Line(r#"kick -i "/a b.ass"#.to_string());
    assert!(build_layer(&shell_layer("l"), bad, None, &NoServices).is_err());
}

#[test]
fn dependency_kind_follows_depend_type() {
    let first = build_layer(&shell_layer("a"), echo(), None, &NoServices).unwrap();

    let all = build_layer(
        &shell_layer("b").with_depend(DependType::Layer),
        echo(),
        Some(&first),
        &NoServices,
    )
    .unwrap();
    assert_eq!(
        all.depend,
        Some(LayerDepend {
            on_layer: "a".to_string(),
            kind: DependKind::All,
        })
    );

    let frame = build_layer(
        &shell_layer("c").with_depend(DependType::Frame),
        echo(),
        Some(&first),
        &NoServices,
    )
    .unwrap();
    assert_eq!(frame.depend.map(|d| d.kind), Some(DependKind::FrameByFrame));

    let none = build_layer(&shell_layer("d"), echo(), Some(&first), &NoServices).unwrap();
    assert_eq!(none.depend, None);
}

#[test]
fn dependency_without_previous_layer_is_a_no_op() {
    let built = build_layer(
        &shell_layer("a").with_depend(DependType::Layer),
        echo(),
        None,
        &NoServices,
    )
    .unwrap();
    assert_eq!(built.depend, None);
}
