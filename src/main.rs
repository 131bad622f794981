mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::AppError;
use crate::input::{builtin_roster, load_roster};
use crate::model::profile::ScoringProfile;
use crate::pipeline::stage3_scores::{build_score_matrix, score_applicants};
use crate::pipeline::stage4_report::{Stage4Input, write_reports};
use crate::report::json::render_scored_applicants_json;
use crate::report::text::render_heatmap_text;

#[derive(Parser, Debug)]
#[command(name = "teamfit", version)]
#[command(about = "Distance-based compatibility scoring of applicants against a team")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every applicant against the team and print the results as JSON
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Roster JSON with "team" and "applicants"; the built-in sample is used when omitted
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Directory for scored_applicants.json, score_matrix.tsv and heatmap.txt
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Print the pairwise heatmap to stderr
    #[arg(long)]
    heatmap: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    input: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    heatmap: bool,
    verbose: bool,
}

fn main() {
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };
    if let Err(err) = logging::init_logging(config.verbose).map_err(AppError::Logging) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    if let Err(err) = run(&config) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn parse_args<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let Command::Run(args) = cli.command;
    Ok(RunConfig {
        input: args.input,
        out_dir: args.out,
        heatmap: args.heatmap,
        verbose: args.verbose,
    })
}

fn run(config: &RunConfig) -> Result<(), AppError> {
    let roster = match &config.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading roster");
            load_roster(path)?
        }
        None => {
            tracing::info!("no --input given; using the built-in sample roster");
            builtin_roster()?
        }
    };

    let profile = ScoringProfile::default_v1();
    tracing::debug!(
        attributes = roster.schema().len(),
        max_pairwise_distance = profile.max_pairwise_distance,
        "scoring roster"
    );
    let scored = score_applicants(roster.team(), roster.applicants(), &profile)?;
    let matrix = build_score_matrix(roster.team(), roster.applicants(), &profile)?;

    if config.heatmap {
        eprint!("{}", render_heatmap_text(&matrix));
    }

    if let Some(out_dir) = &config.out_dir {
        let input = Stage4Input {
            scored: &scored,
            matrix: &matrix,
        };
        write_reports(&input, out_dir).map_err(|source| AppError::Report {
            path: out_dir.clone(),
            source,
        })?;
    }

    println!("{}", render_scored_applicants_json(&scored)?);
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
