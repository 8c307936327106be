//! Ballo CLI: the `ballo` command.

mod cli;
mod commands;
mod config;
mod logging;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use support::Context;

fn main() {
    let cli = Cli::parse();

    let config = support::load_config_or_exit(&cli.global);
    logging::init(config.log.filter.as_deref());
    let on = support::reference_date_or_exit(&cli.global, &config);
    tracing::debug!(%on, "reference date");
    let ctx = Context { config, on };

    match cli.command {
        Commands::Age { birth_date, json } => commands::age::run(&ctx, birth_date, json),

        Commands::Category {
            stored,
            birth,
            json,
        } => commands::category::run(&ctx, stored, birth, json),

        Commands::Couple {
            stored,
            birth1,
            birth2,
            json,
        } => commands::couple::run(&ctx, stored, birth1, birth2, json),

        Commands::Classes { entries, json } => commands::classes::run(entries, json),

        Commands::Pair { roster, out, json } => commands::pair::run(&ctx, roster, out, json),

        Commands::Anomalies { roster, json } => commands::anomalies::run(&ctx, roster, json),

        Commands::Eligible {
            competition,
            couple,
            roster,
            json,
        } => commands::eligible::run(&ctx, competition, couple, roster, json),

        Commands::Presets {
            group,
            syllabus,
            competition,
            out,
            json,
        } => commands::presets::run(group, syllabus, competition, out, json),
    }
}
