use super::*;

fn spool_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("spool_unit").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn job(name: &str) -> Job {
    Job::new(name, "testing", "sh010", "artist")
}

#[test]
fn launch_writes_a_parseable_descriptor() {
    let dir = spool_dir("writes");
    let mut submitter = SpoolSubmitter::new(&dir);

    let handle = submitter.launch(&job("comp_v001")).unwrap();
    assert_eq!(handle.job_name, "comp_v001");

    let path = dir.join("comp_v001.json");
    assert_eq!(handle.receipt, path.display().to_string());
    let back: Job = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
    assert_eq!(back, job("comp_v001"));
}

#[test]
fn existing_spool_file_is_refused_unless_overwriting() {
    let dir = spool_dir("overwrite");
    let mut submitter = SpoolSubmitter::new(&dir);
    submitter.launch(&job("dup")).unwrap();

    let err = submitter.launch(&job("dup")).unwrap_err();
    assert!(matches!(err, FarmError::Submission(_)));

    let mut submitter = submitter.with_overwrite(true);
    submitter.launch(&job("dup")).unwrap();
}

#[test]
fn job_names_that_escape_the_spool_are_rejected() {
    let submitter = SpoolSubmitter::new("target/spool_unit/names");
    for name in ["", "  ", "a/b", "..\\x", ".."] {
        assert!(submitter.spool_path(name).is_err(), "{name:?}");
    }
    assert!(submitter.spool_path("sh010.comp").is_ok());
}
