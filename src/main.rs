mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::cli::{Args, Cli};
use crate::config::Config;
use anyhow::Context;
use log::info;
use simplelog::WriteLogger;
use std::io::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Cli::from_env() {
        Ok(Cli::Run(args)) => args,
        Ok(Cli::Help) => {
            cli::print_usage();
            return ExitCode::SUCCESS;
        }
        Ok(Cli::Version) => {
            cli::print_version();
            return ExitCode::SUCCESS;
        }
        Ok(Cli::Controls) => {
            cli::print_controls();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("serpent: {e}");
            eprintln!("Use '-h, --help' for help.");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(score) => {
            println!("Game over. Score: {score}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.downcast_ref::<std::io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
            {
                return ExitCode::SUCCESS;
            }
            eprintln!("serpent: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<u32> {
    if let Some(path) = args.log_file.as_deref() {
        WriteLogger::init(
            log::LevelFilter::Debug,
            simplelog::Config::default(),
            fs_err::File::create(path).context("failed to create log file")?,
        )
        .context("failed to initialize logger")?;
    }
    let config = if let Some(path) = args.config.as_deref() {
        Config::load(path, false)
    } else {
        Config::load(&Config::default_path()?, true)
    }
    .context("failed to load configuration")?;
    let options = config.options.resolve(&args);
    options.validate()?;
    info!(
        "starting serpent: {}×{} board, initial snake length {}",
        options.width, options.height, options.start_length,
    );
    let app = App::new(options).context("failed to start session")?;
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    r.map_err(Into::into)
}
