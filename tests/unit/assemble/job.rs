use super::*;
use crate::{
    assemble::layer::{DependKind, LayerDepend},
    foundation::error::FarmError,
    model::{BlenderParams, DependType, LayerCommand, LayerData, MayaParams, ShellParams},
};

#[derive(Default)]
struct RecordingSubmitter {
    launched: Vec<Job>,
    fail: bool,
}

impl Submitter for RecordingSubmitter {
    fn launch(&mut self, job: &Job) -> FarmResult<SubmissionHandle> {
        if self.fail {
            return Err(FarmError::submission("scheduler unreachable"));
        }
        self.launched.push(job.clone());
        Ok(SubmissionHandle {
            job_name: job.name.clone(),
            receipt: format!("job-{}", self.launched.len()),
        })
    }
}

fn shell(name: &str, line: &str) -> LayerData {
    LayerData::new(
        name,
        LayerCommand::Shell(ShellParams {
            command_text_box: Some(line.to_string()),
        }),
    )
}

fn job_data(layers: Vec<LayerData>) -> JobData {
    JobData {
        name: "sh010_lighting".to_string(),
        shot: "sh010".to_string(),
        show: "testing".to_string(),
        username: "artist".to_string(),
        facility: None,
        max_cores: None,
        layers,
    }
}

#[test]
fn layers_chain_only_where_a_dependency_is_requested() {
    let data = job_data(vec![
        shell("sim", "echo sim"),
        shell("render", "echo render").with_depend(DependType::Layer),
        shell("publish", "echo publish"),
    ]);
    let config = SubmitConfig::default();

    let job = JobAssembler::new(&config).assemble(&data).unwrap();
    let names: Vec<_> = job.layers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["sim", "render", "publish"]);

    assert_eq!(job.layers[0].depend, None);
    assert_eq!(
        job.layers[1].depend,
        Some(LayerDepend {
            on_layer: "sim".to_string(),
            kind: DependKind::All,
        })
    );
    assert_eq!(job.layers[2].depend, None);
}

#[test]
fn dependencies_only_point_at_the_immediately_previous_layer() {
    let data = job_data(vec![
        shell("a", "echo a"),
        shell("b", "echo b"),
        shell("c", "echo c").with_depend(DependType::Frame),
    ]);
    let config = SubmitConfig::default();

    let job = JobAssembler::new(&config).assemble(&data).unwrap();
    let depend = job.layer("c").and_then(|l| l.depend.clone()).unwrap();
    assert_eq!(depend.on_layer, "b");
    assert_eq!(depend.kind, DependKind::FrameByFrame);
}

#[test]
fn job_metadata_facility_and_max_cores_are_applied() {
    let mut data = job_data(vec![shell("a", "echo a")]);
    data.facility = Some("cloud".to_string());
    data.max_cores = Some(64);
    let config = SubmitConfig::default();

    let job = JobAssembler::new(&config).assemble(&data).unwrap();
    assert_eq!(job.name, "sh010_lighting");
    assert_eq!(job.show, "testing");
    assert_eq!(job.shot, "sh010");
    assert_eq!(job.user, "artist");
    assert_eq!(job.facility.as_deref(), Some("cloud"));
    assert_eq!(job.max_cores, Some(64));

    data.max_cores = Some(0);
    data.facility = None;
    let job = JobAssembler::new(&config).assemble(&data).unwrap();
    assert_eq!(job.max_cores, None);
    assert_eq!(job.facility, None);
}

#[test]
fn registry_override_controls_threadable() {
    let data = job_data(vec![shell("a", "echo a").with_services(["maya"])]);
    let config = SubmitConfig::default().with_service("maya", true);

    let job = JobAssembler::new(&config).assemble(&data).unwrap();
    assert!(job.layers[0].threadable);

    let job = JobAssembler::new(&config)
        .with_registry(&crate::services::NoServices)
        .assemble(&data)
        .unwrap();
    assert!(!job.layers[0].threadable);
}

#[test]
fn submit_launches_exactly_once() {
    let data = job_data(vec![shell("a", "echo a"), shell("b", "echo b")]);
    let config = SubmitConfig::default();
    let mut submitter = RecordingSubmitter::default();

    let handle = submit_job(&data, &config, &mut submitter).unwrap();
    assert_eq!(handle.job_name, "sh010_lighting");
    assert_eq!(handle.receipt, "job-1");
    assert_eq!(submitter.launched.len(), 1);
    assert_eq!(submitter.launched[0].layers.len(), 2);
}

#[test]
fn a_failing_layer_prevents_any_submission() {
    let data = job_data(vec![
        shell("ok", "echo ok"),
        LayerData::new("broken", LayerCommand::Maya(MayaParams::default())),
        shell("never", "echo never"),
    ]);
    let config = SubmitConfig::default();
    let mut submitter = RecordingSubmitter::default();

    let err = submit_job(&data, &config, &mut submitter).unwrap_err();
    assert!(err.is_validation());
    assert!(submitter.launched.is_empty());
}

#[test]
fn submission_errors_propagate_unchanged() {
    let data = job_data(vec![shell("a", "echo a")]);
    let config = SubmitConfig::default();
    let mut submitter = RecordingSubmitter {
        fail: true,
        ..RecordingSubmitter::default()
    };

    let err = submit_job(&data, &config, &mut submitter).unwrap_err();
    assert!(matches!(err, FarmError::Submission(ref m) if m == "scheduler unreachable"));
}

#[test]
fn preview_shows_every_layer_without_failing() {
    let data = job_data(vec![
        LayerData::new("maya", LayerCommand::Maya(MayaParams::default())),
        LayerData::new("shell", LayerCommand::Shell(ShellParams::default())),
        LayerData::new(
            "blender",
            LayerCommand::Blender(BlenderParams {
                blender_file: Some("/a.blend".to_string()),
                ..BlenderParams::default()
            }),
        )
        .with_range("1-10"),
    ]);
    let config = SubmitConfig::default();

    let previews = JobAssembler::new(&config).preview_commands(&data);
    assert_eq!(previews.len(), 3);
    assert_eq!(previews[0].layer_type, LayerType::Maya);
    assert!(previews[0].command.to_string().starts_with("Error:"));
    assert!(previews[1].command.is_empty());
    assert!(previews[2].command.to_string().ends_with("-a"));
}
