mod cli;

use cli::Args;
use lockstate::adapters::outbound::console::{StderrProgressReporter, VerificationDiff};
use lockstate::adapters::outbound::filesystem::FileSystemReader;
use lockstate::application::dto::{OutputFormat, RenderRequest};
use lockstate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use lockstate::application::read_models::LockStateReadModelBuilder;
use lockstate::application::use_cases::RenderLockStateUseCase;
use lockstate::config::{self, ConfigFile};
use lockstate::lock_state::services::DuplicateDisplay;
use lockstate::shared::error::ExitCode;
use lockstate::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Effective options after merging CLI flags over the config file
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    duplicate_display: DuplicateDisplay,
    verify: Option<PathBuf>,
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = load_config(&args)?.unwrap_or_default();
    let settings = resolve_settings(&args, config)?;

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Create use case with injected dependencies
    let use_case = RenderLockStateUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        progress_reporter,
    );

    let request = RenderRequest::new(
        args.report.clone(),
        settings.duplicate_display,
        settings.verify,
    );
    let response = use_case.execute(request)?;

    if let Some(verification) = response.verification.as_ref() {
        VerificationDiff::for_stderr().print(verification);
    }

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }

    let model = LockStateReadModelBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.format).format(&model)?;

    let presenter_type = PresenterType::from_output(args.output);
    let written_to = match &presenter_type {
        PresenterType::File(path) => Some(path.clone()),
        PresenterType::Stdout => None,
    };
    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    if let Some(path) = written_to {
        if !args.quiet {
            eprintln!("✅ Output complete: {}", path.display());
        }
    }

    if response.is_out_of_date() {
        Ok(ExitCode::LockStateOutOfDate)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Loads `--config` if given, otherwise looks next to the report
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => {
            let config = config::load_config_from_path(path)?;
            if !args.quiet {
                eprintln!("📋 Loaded config from: {}", path.display());
            }
            Ok(Some(config))
        }
        None => {
            let dir = report_directory(&args.report);
            let config = config::discover_config(dir)?;
            if config.is_some() && !args.quiet {
                eprintln!(
                    "📋 Auto-discovered config file: {}",
                    dir.join(config::CONFIG_FILENAME).display()
                );
            }
            Ok(config)
        }
    }
}

fn report_directory(report: &Path) -> &Path {
    match report.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn resolve_settings(args: &Args, config: ConfigFile) -> Result<Settings> {
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };

    let duplicate_display =
        if args.collapse_duplicates || config.collapse_duplicates.unwrap_or(false) {
            DuplicateDisplay::Collapsed
        } else {
            DuplicateDisplay::Verbatim
        };

    Ok(Settings {
        format,
        duplicate_display,
        verify: args.verify.clone().or(config.verify),
    })
}
