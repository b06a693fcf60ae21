//! mbiss: MBI-SS burnout survey CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mbiss::config::{default_config_json, load_config, Config, CONFIG_FILENAME};
use mbiss::form::SurveyForm;
use mbiss::questionnaire::Variant;
use mbiss::reporter::{ConsoleReporter, JsonReporter};
use mbiss::store::{CsvResultStore, ImageUpload, MediaStore, ResultStore, StoreSummary};
use mbiss::submission::{Submission, SurveySession};
use mbiss::{Response, Scorer, SurveyError};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// mbiss: Maslach Burnout Inventory - Student Survey
#[derive(Parser, Debug)]
#[command(name = "mbiss")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: search .mbissrc.json in current dir and parents)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Questionnaire variant (overrides config)
    #[arg(long, value_enum, global = true)]
    variant: Option<Variant>,

    /// Result table path (overrides config)
    #[arg(long, global = true)]
    results: Option<PathBuf>,

    /// Directory for uploaded images (overrides config)
    #[arg(long, global = true)]
    media_dir: Option<PathBuf>,

    /// Verbose output and debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the active questionnaire
    Questions {
        /// Output format as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Score a response and append it to the result table
    Submit {
        /// JSON file with ratings per subscale (default: interactive form)
        #[arg(long, short)]
        answers: Option<PathBuf>,

        /// Image to attach (jpg, jpeg or png; extended variant only)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Acknowledge the consent statement without being asked
        #[arg(long)]
        consent: bool,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Quiet mode (one line)
        #[arg(long, short)]
        quiet: bool,
    },

    /// Summarize stored submissions
    Results {
        /// Output format as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Create .mbissrc.json with default thresholds
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("MBISS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "mbiss=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Commands::Init { ref dir } => run_init(args.variant, dir.as_deref()),
        Commands::Questions { json } => {
            let questionnaire = effective_config(&args)?.scoring_profile().questionnaire;
            if json {
                println!("{}", JsonReporter::new().pretty().report_questions(&questionnaire));
            } else {
                ConsoleReporter::new().report_questions(&questionnaire);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Submit {
            ref answers,
            ref image,
            consent,
            json,
            quiet,
        } => run_submit(
            &effective_config(&args)?,
            answers.as_deref(),
            image.as_deref(),
            consent,
            json,
            quiet,
        ),
        Commands::Results { json } => run_results(&effective_config(&args)?, json, args.verbose),
    }
}

/// Config file merged with the global CLI overrides
fn effective_config(args: &Args) -> Result<Config> {
    let work_dir = std::env::current_dir().context("Failed to get current directory")?;
    Ok(load_config(&work_dir, args.config.as_deref())?.merge_with_cli(
        args.variant,
        args.results.as_deref(),
        args.media_dir.as_deref(),
    ))
}

fn result_store(config: &Config) -> CsvResultStore {
    let store = CsvResultStore::new(config.results_file());
    if config.scoring_profile().accepts_media {
        store.with_image_column()
    } else {
        store
    }
}

fn run_submit(
    config: &Config,
    answers: Option<&Path>,
    image: Option<&Path>,
    consent: bool,
    json: bool,
    quiet: bool,
) -> Result<ExitCode> {
    let profile = config.scoring_profile();

    let (response, consent) = match answers {
        Some(path) => (read_answers(path)?, consent),
        None => {
            let stdin = io::stdin();
            let mut form = SurveyForm::new(stdin.lock(), io::stderr());
            let consent = if profile.requires_consent && !consent {
                form.ask_consent().context("Failed to read consent")?
            } else {
                consent
            };
            if profile.requires_consent && !consent {
                return Ok(rejected(&SurveyError::ConsentRequired));
            }
            let response = form
                .collect(&profile.questionnaire)
                .context("Failed to read answers")?;
            (response, consent)
        }
    };

    let mut submission = Submission::new(response);
    submission.consent = consent;
    if let Some(path) = image {
        match ImageUpload::from_path(path) {
            Ok(upload) => submission = submission.with_image(upload),
            Err(e) => return Ok(rejected(&e)),
        }
    }

    let mut session = SurveySession::new(Scorer::new(profile.clone()), result_store(config))
        .with_media(MediaStore::new(config.media_dir()));
    let now = chrono::Local::now().naive_local();

    let outcome = match session.submit(&submission, now) {
        Ok(outcome) => outcome,
        Err(e) if e.is_rejection() => return Ok(rejected(&e)),
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", JsonReporter::new().pretty().report(&profile, &outcome));
    } else if quiet {
        ConsoleReporter::new().report_quiet(&outcome);
    } else {
        ConsoleReporter::new().report(&profile, &outcome);
        eprintln!(
            "{}: Your responses have been saved to {}",
            "Done".green().bold(),
            config.results_file().display()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn read_answers(path: &Path) -> Result<Response> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in answers: {}", path.display()))
}

fn rejected(err: &SurveyError) -> ExitCode {
    eprintln!("{}: {}", "Rejected".red().bold(), err);
    ExitCode::from(1)
}

fn run_results(config: &Config, json: bool, verbose: bool) -> Result<ExitCode> {
    let store = result_store(config);
    let records = store.load()?;
    let summary = StoreSummary::from_records(&records);

    if json {
        println!("{}", JsonReporter::new().pretty().report_summary(&records, &summary));
    } else {
        let mut reporter = ConsoleReporter::new();
        if verbose {
            reporter = reporter.verbose();
        }
        reporter.report_summary(&records, &summary);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(variant: Option<Variant>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let variant = variant.unwrap_or_default();
    std::fs::write(&config_path, default_config_json(variant)).with_context(|| {
        format!("Failed to write config to {}", config_path.display())
    })?;

    println!(
        "{}: Created {} with variant={}",
        "Done".green().bold(),
        config_path.display(),
        variant
    );
    Ok(ExitCode::SUCCESS)
}
