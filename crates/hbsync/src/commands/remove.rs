use clap::ArgMatches;
use tracing::{info, warn};

use super::helpers::open_dashboard;

pub(crate) fn handle_remove_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = open_dashboard();

    if matches.get_flag("all") {
        info!(event = "cli.remove_all_started");
        let count = dashboard.remove_all();
        if count == 0 {
            println!("No processes to remove.");
        } else {
            println!("✅ Removed {} process(es).", count);
        }
        info!(event = "cli.remove_all_completed", count = count);
        return Ok(());
    }

    let process_id = matches
        .get_one::<String>("process")
        .ok_or("Process ID argument is required")?;

    info!(event = "cli.remove_started", process_id = %process_id);

    match dashboard.remove_process(process_id) {
        Some(record) => {
            println!("✅ Stopped monitoring process {}", record.id);
            info!(event = "cli.remove_completed", process_id = %record.id);
        }
        None => {
            // Removing an unknown id is not an error.
            println!("Process '{}' was not being monitored.", process_id);
            warn!(event = "cli.remove_not_found", process_id = %process_id);
        }
    }

    Ok(())
}
