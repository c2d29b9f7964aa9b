mod commands;
mod terminal;

use cgpa_common::config::Config;
use commands::{CommandLine, Commands, calc, grades, shell};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_color: commands.no_color,
        quiet: commands.quiet,
        json: false,
    };

    terminal::init(&cfg);
    logging::init_logging(commands.verbose)?;

    match commands.command {
        Commands::Shell => {
            print::banner(cfg.quiet);
            print::header("interactive session", cfg.quiet);
            shell::shell(&cfg)
        }
        Commands::Calc { courses, json } => {
            let cfg = Config { json, ..cfg };
            if !cfg.json {
                print::banner(cfg.quiet);
            }
            calc::calc(courses, &cfg)
        }
        Commands::Grades => {
            print::header("grade point reference", cfg.quiet);
            grades::grades(&cfg)
        }
    }
}
