use clap::ArgMatches;
use tracing::info;

use hbsync_core::storage::storage_file_path;

use super::helpers::{load_config_with_warning, open_dashboard};

pub(crate) fn handle_status_command(
    _matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.status_started");

    let config = load_config_with_warning();
    let dashboard = open_dashboard();
    let controls = dashboard.table_controls();

    let url = if dashboard.has_url() {
        dashboard.url()
    } else {
        "(not set)"
    };
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    println!("📊 hbsync status:");
    println!("   Node URL:        {}", url);
    println!("   Processes:       {}", dashboard.registry().len());
    println!("   Storage file:    {}", storage_file_path().display());
    println!("   Request timeout: {}s", config.http.timeout().as_secs());
    println!("   Connect timeout: {}s", config.http.connect_timeout().as_secs());
    println!("   User agent:      {}", config.http.user_agent());
    println!("   Refresh all:     {}", yes_no(controls.can_refresh_all));
    println!("   Remove all:      {}", yes_no(controls.can_remove_all));

    info!(
        event = "cli.status_completed",
        url_set = dashboard.has_url(),
        process_count = dashboard.registry().len()
    );

    Ok(())
}
