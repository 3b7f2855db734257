use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "farmjob", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each layer's command without failing on missing input.
    Preview(JobArgs),
    /// Assemble the job and print the submission payload as JSON.
    Assemble(JobArgs),
    /// Assemble the job and write it to a spool directory.
    Submit(SubmitArgs),
}

#[derive(Parser, Debug)]
struct JobArgs {
    /// Input job description JSON.
    #[arg(long)]
    job: PathBuf,

    /// Submit configuration JSON (command templates, executables, services).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SubmitArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Spool directory the dispatcher picks jobs up from.
    #[arg(long)]
    spool: PathBuf,

    /// Replace an existing spool file with the same job name.
    #[arg(long)]
    overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Preview(args) => cmd_preview(args),
        Command::Assemble(args) => cmd_assemble(args),
        Command::Submit(args) => cmd_submit(args),
    }
}

fn read_job_json(path: &Path) -> anyhow::Result<farmjob::JobData> {
    let f = File::open(path).with_context(|| format!("open job '{}'", path.display()))?;
    let r = BufReader::new(f);
    let job: farmjob::JobData =
        serde_json::from_reader(r).with_context(|| "parse job JSON")?;
    Ok(job)
}

fn load_inputs(args: &JobArgs) -> anyhow::Result<(farmjob::JobData, farmjob::SubmitConfig)> {
    let job = read_job_json(&args.job)?;
    let config = match &args.config {
        Some(path) => farmjob::SubmitConfig::from_json_file(path)?,
        None => farmjob::SubmitConfig::default(),
    };
    Ok((job, config))
}

fn cmd_preview(args: JobArgs) -> anyhow::Result<()> {
    let (job, config) = load_inputs(&args)?;

    let assembler = farmjob::JobAssembler::new(&config);
    for preview in assembler.preview_commands(&job) {
        println!("{} [{}]: {}", preview.name, preview.layer_type, preview.command);
    }
    Ok(())
}

fn cmd_assemble(args: JobArgs) -> anyhow::Result<()> {
    let (job, config) = load_inputs(&args)?;
    job.validate()?;

    let assembled = farmjob::JobAssembler::new(&config).assemble(&job)?;
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &assembled)
        .with_context(|| "write job payload")?;
    println!();
    Ok(())
}

fn cmd_submit(args: SubmitArgs) -> anyhow::Result<()> {
    let (job, config) = load_inputs(&args.job)?;
    job.validate()?;

    let mut submitter = farmjob::SpoolSubmitter::new(&args.spool).with_overwrite(args.overwrite);
    let handle = farmjob::submit_job(&job, &config, &mut submitter)?;

    eprintln!("submitted {} -> {}", handle.job_name, handle.receipt);
    Ok(())
}
