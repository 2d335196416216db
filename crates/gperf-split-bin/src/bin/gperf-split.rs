use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use gperf_split::{run, SplitConfig};
use log::LevelFilter;

const USAGE: &str = "usage: gperf-split <input .gperf> <input source> <output header>";

/// Moves the type declarations of a gperf generated source file into a
/// separate header and includes that header in their place.
#[derive(Parser, Debug)]
#[command(name = "gperf-split", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// gperf grammar description the source was generated from
    grammar: PathBuf,
    /// Generated source, rewritten in place
    source: PathBuf,
    /// Header to create
    header: PathBuf,
    /// Print more (-v info, -vv debug)
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(log_level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "{:7}{}", record.level(), record.args()))
        .parse_default_env()
        .init();
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion => {
                println!("{}", USAGE);
                process::exit(1);
            }
            _ => e.exit(),
        },
    }
}

fn main() -> anyhow::Result<()> {
    let args = parse_args();
    init_logging(match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    });

    run(&SplitConfig::default(), &args.grammar, &args.source, &args.header).with_context(
        || {
            format!(
                "failed to split {} into {}",
                args.source.display(),
                args.header.display()
            )
        },
    )?;
    Ok(())
}
