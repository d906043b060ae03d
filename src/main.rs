mod commands;
mod data;
mod image;
mod options;
mod project;
mod render;
mod report;

use std::process;

use structopt::StructOpt;

use crate::options::{Options, Subcommand};

fn main() {
    let options = Options::from_args();

    let log_filter = match options.global.verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let log_env = env_logger::Env::default()
        .default_filter_or(format!("palletize={0},layerpack={0}", log_filter));

    env_logger::Builder::from_env(log_env)
        .format_module_path(false)
        .init();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    match options.command {
        Subcommand::Plan(plan_options) => commands::plan(plan_options)?,
        Subcommand::Render(render_options) => commands::render(render_options)?,
        Subcommand::Packages(packages_options) => commands::packages(packages_options)?,
    }

    Ok(())
}
