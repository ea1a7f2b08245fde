use std::{path::PathBuf, process::exit};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use crate::{
    activate::CondaActivator,
    bootstrap::{Step, bootstrap},
    config::Config,
    env::{Exports, Shell},
    error::Res,
    layout::{Layout, resolve_self_directory},
    util::init_logger,
};

/// Activate the iDDS development environment.
///
/// Prints shell code on stdout, use as: eval "$(tools/env/idds-env)"
#[derive(Parser)]
#[command(author, version, about, long_about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Shell flavor of the printed script (posix, csh, fish)
    #[arg(long, global = true)]
    shell: Option<Shell>,

    /// Log each step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Publish the project root and activate the environment (default)
    Activate,
    /// Print the resolved directories and shell without activating anything
    Show,
}

pub fn run() {
    let cli = Cli::parse();

    init_logger(if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    });

    if let Err(err) = run_command(&cli) {
        eprintln!("error: {}: {}", err.step(), err);
        exit(1);
    }
}

fn run_command(cli: &Cli) -> Res<()> {
    debug!("Step: {}", Step::Resolve);
    let script = resolve_self_directory()?;

    debug!("Step: {}", Step::Configure);
    let config = Config::load(&script)?;

    match cli.command.as_ref().unwrap_or(&Command::Activate) {
        Command::Activate => activate(script, &config, cli.shell),
        Command::Show => show(script, &config, cli.shell),
    }
}

fn activate(script: PathBuf, config: &Config, shell: Option<Shell>) -> Res<()> {
    let shell = shell.unwrap_or(config.conda.shell);
    let activator = CondaActivator::locate(config.conda.executable.clone(), shell);

    let mut exports = Exports::new();
    let done = bootstrap(script, &config.layout, &activator, &mut exports)?;

    // Nothing reaches stdout unless every step succeeded
    print!("{}{}", exports.render(shell), done.activation.script);
    Ok(())
}

fn show(script: PathBuf, config: &Config, shell: Option<Shell>) -> Res<()> {
    let layout = Layout::compute(script, config.layout.levels, &config.layout.environment)?;

    println!("script:      {}", layout.script().display());
    println!("tools:       {}", layout.tools().display());
    println!("root:        {}", layout.root().display());
    println!("environment: {}", layout.environment().display());
    println!("variable:    {}", config.layout.variable);
    println!("shell:       {}", shell.unwrap_or(config.conda.shell));
    Ok(())
}
