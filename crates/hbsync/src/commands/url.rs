use clap::ArgMatches;
use tracing::{error, info};

use hbsync_core::{UrlEditor, events};

use super::helpers::open_dashboard;

pub(crate) fn handle_url_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = open_dashboard();

    if matches.get_flag("clear") {
        info!(event = "cli.url_clear_started");
        dashboard.save_url("")?;
        println!("✅ Node URL cleared.");
        info!(event = "cli.url_clear_completed");
        return Ok(());
    }

    let Some(input) = matches.get_one::<String>("url") else {
        if dashboard.has_url() {
            println!("{}", dashboard.url());
        } else {
            println!("No node URL set.");
            println!("Set one with: hbsync url <URL>");
        }
        return Ok(());
    };

    info!(event = "cli.url_set_started", url = %input);

    let mut editor = UrlEditor::new(dashboard.url());
    editor.set_draft(input.as_str());

    let Some(value) = editor.commit_value() else {
        eprintln!("❌ Invalid URL: '{}'", input.trim());
        eprintln!("   Expected an absolute URL such as https://your-hb-node.com");
        error!(event = "cli.url_set_failed", url = %input, reason = "invalid_url");
        return Err(format!("Invalid URL: '{}'", input.trim()).into());
    };

    match dashboard.save_url(&value) {
        Ok(()) => {
            println!("✅ Node URL set to {}", dashboard.url());
            info!(event = "cli.url_set_completed", url = %dashboard.url());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to save node URL: {}", e);
            error!(event = "cli.url_set_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
