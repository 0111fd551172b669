mod commands;
mod terminal;

use commands::{CommandLine, Commands, describe, mate, tricks};
use kennel_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        seed: commands.seed,
        no_color: commands.no_color,
    };

    logging::init_logging(&cfg)?;
    print::banner(cfg.quiet);

    let result = match commands.command {
        Commands::Describe { breed, sex, name } => {
            print::header("dog record", cfg.quiet);
            describe::describe(&breed, &sex, name.as_deref().unwrap_or(""), &cfg)
        }
        Commands::Bark { dog, count } => tricks::bark(&dog, count, &cfg),
        Commands::Chew { dog, stuff } => tricks::chew(&dog, &stuff, &cfg),
        Commands::Mate { first, second, litter } => {
            print::header("pairing", cfg.quiet);
            mate::mate(&first, &second, litter, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
