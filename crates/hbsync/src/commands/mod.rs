use clap::ArgMatches;
use tracing::error;

use hbsync_core::events;

pub mod helpers;

mod add;
mod list;
mod refresh;
mod remove;
mod status;
mod url;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("url", sub_matches)) => url::handle_url_command(sub_matches),
        Some(("add", sub_matches)) => add::handle_add_command(sub_matches),
        Some(("remove", sub_matches)) => remove::handle_remove_command(sub_matches),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("refresh", sub_matches)) => refresh::handle_refresh_command(sub_matches).await,
        Some(("status", sub_matches)) => status::handle_status_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
