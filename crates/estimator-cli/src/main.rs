//! Estimator CLI.

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use estimator_cli::cli::{Cli, Command, OutputArg};
use estimator_cli::commands::{
    run_bedtime, run_convert, run_flags, run_rps, run_split, run_tip_presets,
};
use estimator_cli::logging::{LogConfig, init_logging};
use estimator_cli::summary::{
    bedtime_headline, conversion_headline, quiz_headline, quiz_table, scales_table,
    session_headline, session_table, split_headline, split_table, tip_presets_table, to_json,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = LogConfig::from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "command failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let json = cli.output == OutputArg::Json;
    match &cli.command {
        Command::Split(args) => {
            let split = run_split(args);
            if json {
                println!("{}", to_json(&split)?);
            } else {
                println!("{}", split_headline(&split));
                println!("{}", split_table(&split));
                println!("{}", tip_presets_table(&run_tip_presets(args)));
            }
        }
        Command::Convert(args) => {
            let conversion = run_convert(args);
            if json {
                println!("{}", to_json(&conversion)?);
            } else {
                println!("{}", conversion_headline(&conversion));
            }
        }
        Command::Bedtime(args) => {
            let estimate = run_bedtime(args, Local::now().date_naive())?;
            if json {
                println!("{}", to_json(&estimate)?);
            } else {
                println!("{}", bedtime_headline(&estimate));
            }
        }
        Command::Scales => {
            if json {
                println!("{}", to_json(&estimator_model::TemperatureScale::ALL)?);
            } else {
                println!("{}", scales_table());
            }
        }
        Command::Rps(args) => {
            let report = run_rps(args)?;
            if json {
                println!("{}", to_json(&report)?);
            } else {
                println!("{}", session_table(&report));
                println!("{}", session_headline(&report));
                println!("Seed: {}", report.seed);
            }
        }
        Command::Flags(args) => {
            let report = run_flags(args)?;
            if json {
                println!("{}", to_json(&report)?);
            } else {
                println!("{}", quiz_table(&report));
                println!("{}", quiz_headline(&report));
                println!("Seed: {}", report.seed);
            }
        }
    }
    Ok(())
}
