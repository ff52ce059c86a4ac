// MeterMatch CLI - headless sheet parsing and meter code matching

mod exit_codes;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_CONFIG, EXIT_INPUT, EXIT_SUCCESS, EXIT_UNRESOLVED};
use input::read_matrix;
use metermatch_io::xlsx::SheetSelector;
use metermatch_io::{report, table};
use metermatch_recon::MatchConfig;

#[derive(Parser)]
#[command(name = "mmatch")]
#[command(about = "Parse sheet tables and reconcile meter codes across sheets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the first worksheet into headers + row objects (JSON)
    #[command(after_help = "\
Examples:
  mmatch parse meters.xlsx
  mmatch parse meters.csv -o table.json")]
    Parse {
        /// Input spreadsheet or CSV file
        input: PathBuf,

        /// Write JSON to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Match meter keys from one file against a lookup built from another
    #[command(after_help = "\
Exit code 1 indicates unresolved meters; the result file is still written.

Examples:
  mmatch match meters.xlsx codes.xlsx
  mmatch match meters.xlsx codes.xlsx --config match.toml
  mmatch match meters.xlsx codes.xlsx --result out.xlsx --report report.txt
  mmatch match meters.csv codes.csv --json --no-result")]
    Match {
        /// File holding the meter key column
        first: PathBuf,

        /// File holding the meter → code lookup columns
        second: PathBuf,

        /// TOML config with sheet/column addressing (defaults apply if omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Result spreadsheet path (overrides the config's result_file)
        #[arg(long)]
        result: Option<PathBuf>,

        /// Also write a plain-text summary report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Print the full report as JSON to stdout
        #[arg(long)]
        json: bool,

        /// Skip writing the result spreadsheet
        #[arg(long)]
        no_result: bool,
    },

    /// Validate a match config without running
    #[command(after_help = "\
Examples:
  mmatch validate match.toml")]
    Validate {
        /// Path to the TOML config file
        config: PathBuf,
    },
}

struct CliError {
    code: u8,
    message: String,
}

fn cli_err(code: u8, message: impl Into<String>) -> CliError {
    CliError { code, message: message.into() }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input, output } => cmd_parse(input, output),
        Commands::Match { first, second, config, result, report, json, no_result } => {
            cmd_match(first, second, config, result, report, json, no_result)
        }
        Commands::Validate { config } => cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            ExitCode::from(err.code)
        }
    }
}

fn cmd_parse(input: PathBuf, output: Option<PathBuf>) -> Result<(), CliError> {
    let matrix = read_matrix(&input, SheetSelector::First)
        .map_err(|e| cli_err(EXIT_INPUT, format!("{}: {e}", input.display())))?;
    let parsed = table::parse_table(&matrix)
        .map_err(|e| cli_err(EXIT_INPUT, format!("{}: {e}", input.display())))?;

    let json = serde_json::to_string_pretty(&parsed)
        .map_err(|e| cli_err(EXIT_INPUT, format!("JSON serialization error: {e}")))?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json).map_err(|e| {
                cli_err(EXIT_INPUT, format!("cannot write {}: {e}", path.display()))
            })?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    eprintln!("{} columns, {} rows", parsed.headers.len(), parsed.rows.len());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_match(
    first: PathBuf,
    second: PathBuf,
    config_path: Option<PathBuf>,
    result_path: Option<PathBuf>,
    report_path: Option<PathBuf>,
    json: bool,
    no_result: bool,
) -> Result<(), CliError> {
    let config = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| cli_err(EXIT_CONFIG, format!("cannot read config: {e}")))?;
            MatchConfig::from_toml(&text).map_err(|e| cli_err(EXIT_CONFIG, e.to_string()))?
        }
        None => MatchConfig::default(),
    };

    let first_selector = match config.first_sheet_name.as_deref() {
        Some(name) => SheetSelector::Named(name),
        None => SheetSelector::First,
    };
    let second_selector = match config.second_sheet_name.as_deref() {
        Some(name) => SheetSelector::Named(name),
        None => SheetSelector::SecondOrFirst,
    };

    let first_sheet = read_matrix(&first, first_selector)
        .map_err(|e| cli_err(EXIT_INPUT, format!("{}: {e}", first.display())))?;
    let second_sheet = read_matrix(&second, second_selector)
        .map_err(|e| cli_err(EXIT_INPUT, format!("{}: {e}", second.display())))?;

    let match_report = metermatch_recon::run(&config, &first_sheet, &second_sheet)
        .map_err(|e| cli_err(EXIT_CONFIG, e.to_string()))?;

    if !no_result {
        let path = result_path.unwrap_or_else(|| PathBuf::from(&match_report.meta.result_file));
        report::write_result_file(&match_report, &path)
            .map_err(|e| cli_err(EXIT_INPUT, format!("cannot write result: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(path) = report_path {
        std::fs::write(&path, report::text_report(&match_report)).map_err(|e| {
            cli_err(EXIT_INPUT, format!("cannot write {}: {e}", path.display()))
        })?;
        eprintln!("wrote {}", path.display());
    }

    if json {
        let json_str = serde_json::to_string_pretty(&match_report)
            .map_err(|e| cli_err(EXIT_INPUT, format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    }

    let s = &match_report.summary;
    eprintln!(
        "{} meters — {} matched, {} not matched",
        s.total, s.matched, s.not_matched
    );

    if s.not_matched > 0 {
        return Err(cli_err(EXIT_UNRESOLVED, "unresolved meters found"));
    }
    Ok(())
}

fn cmd_validate(config: PathBuf) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&config)
        .map_err(|e| cli_err(EXIT_CONFIG, format!("cannot read config: {e}")))?;
    let parsed = MatchConfig::from_toml(&text).map_err(|e| cli_err(EXIT_CONFIG, e.to_string()))?;

    eprintln!(
        "config ok: keys from row {} of sheet 1, lookup {}→{} from row {}",
        parsed.first_sheet_start_row,
        parsed.second_sheet_meter_column,
        parsed.second_sheet_code_column,
        parsed.second_sheet_start_row,
    );
    Ok(())
}
