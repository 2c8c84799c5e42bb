use clap::ArgMatches;
use tracing::{error, info};

use hbsync_core::{ProcessAdder, events};

use super::helpers::open_dashboard;

pub(crate) fn handle_add_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let input = matches
        .get_one::<String>("process")
        .ok_or("Process ID argument is required")?;

    info!(event = "cli.add_started", process_id = %input);

    let mut dashboard = open_dashboard();

    let mut adder = ProcessAdder::new();
    adder.set_draft(input.as_str());

    if adder.is_duplicate(dashboard.registry()) {
        eprintln!("❌ Process '{}' is already being monitored.", input);
        error!(event = "cli.add_failed", process_id = %input, reason = "duplicate");
        return Err(format!("Process '{}' is already being monitored", input).into());
    }

    let Some(process_id) = adder.take(dashboard.registry()) else {
        eprintln!("❌ Process ID cannot be empty.");
        error!(event = "cli.add_failed", reason = "empty_id");
        return Err("Process ID cannot be empty".into());
    };

    match dashboard.add_process(&process_id) {
        Ok(()) => {
            println!("✅ Monitoring process {}", process_id);
            if !dashboard.has_url() {
                println!("   Set a node URL with 'hbsync url <URL>' before refreshing.");
            }
            info!(
                event = "cli.add_completed",
                process_id = %process_id,
                total = dashboard.registry().len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to add process: {}", e);
            error!(event = "cli.add_failed", process_id = %process_id, error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
