use clap::Parser;

use token_guard::cli::{Cli, Commands};
use token_guard::commands::{run_check, run_config, run_extract, run_init, run_presets};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Extract(args) => run_extract(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
        Commands::Presets => run_presets(&cli),
    };

    std::process::exit(exit_code);
}
