use anyhow::Context;
use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    Args, Parser, ValueHint,
};
use io_function::{IoBiFunction, IoFunction};
use log::{info, Level};
use std::{io, path::Path, path::PathBuf};

/// Logging options.
#[derive(Args, Clone)]
struct LoggingOpt {
    /// The logging level to use.
    #[arg(
        short, long, default_value_t = Level::Info,
        // Needed because enum is foreign so can't use ValueEnum derive.
        value_parser = PossibleValuesParser::new(["trace", "debug", "info", "warn", "error"]).map(|s| s.parse::<Level>().unwrap()),
        ignore_case = true
    )]
    log_level: Level,
}

/// Check whether a path is a directory using composed io functions.
#[derive(Parser, Clone)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    log_opt: LoggingOpt,

    /// The path to check. Defaults to the working directory.
    #[arg(value_hint = ValueHint::AnyPath)]
    path: Option<PathBuf>,

    /// Don't follow a symlink at the end of the path.
    #[arg(long)]
    no_follow: bool,
}

fn is_directory(path: &Path, follow_links: bool) -> io::Result<bool> {
    let metadata = if follow_links {
        path.metadata()?
    } else {
        path.symlink_metadata()?
    };
    Ok(metadata.is_dir())
}

fn not(value: bool) -> io::Result<bool> {
    Ok(!value)
}

fn main() -> anyhow::Result<()> {
    let opt = Cli::parse();
    simple_logger::init_with_level(opt.log_opt.log_level)?;

    let path = match opt.path {
        Some(path) => path,
        None => std::env::current_dir().context("Reading working directory.")?,
    };
    let follow = !opt.no_follow;

    let is_dir = is_directory
        .apply(path.as_path(), follow)
        .with_context(|| format!("Checking {}", path.display()))?;
    info!("{} is a directory: {is_dir}", path.display());

    let is_not_dir = is_directory.and_then(|b: bool| !b);
    info!(
        "{} is not a directory: {}",
        path.display(),
        is_not_dir.apply(path.as_path(), follow)?
    );

    let described = not.and_then(|is_file: bool| {
        if is_file {
            "not a directory"
        } else {
            "directory"
        }
    });
    let describe = is_directory.and_then_io(described);
    println!("{}: {}", path.display(), describe.apply(path.as_path(), follow)?);

    Ok(())
}
