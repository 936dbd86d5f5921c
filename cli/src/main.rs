mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CalcArgs, CommandLine, Commands, calc, list};
use keygr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    let cfg = match &commands.command {
        Commands::Calc(args) => config_for(args, commands.no_banner),
        Commands::List => Config {
            no_banner: commands.no_banner,
            ..Config::default()
        },
    };

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Calc(args) => {
            print::header("calculating keys", cfg.quiet);
            calc::calc(args.ssid, args.mac, &cfg)
        }
        Commands::List => {
            print::header("supported routers", cfg.quiet);
            list::list();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn config_for(args: &CalcArgs, no_banner: bool) -> Config {
    Config {
        quiet: args.quiet,
        show_algorithm: args.show_algorithm,
        parallel: args.parallel,
        no_banner,
    }
}
