use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use hbsync_core::{HttpSlotSource, Notice, ProcessRow, Reconciler, events};

use super::helpers::{first_error, load_config_with_warning, open_dashboard, report_notices};

#[derive(Serialize)]
struct RefreshOutput<'a> {
    notices: &'a [Notice],
    rows: Vec<ProcessRow>,
}

pub(crate) async fn handle_refresh_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let target = matches.get_one::<String>("process");

    info!(
        event = "cli.refresh_started",
        process_id = target.map(String::as_str),
        json_output = json_output
    );

    let config = load_config_with_warning();
    let mut dashboard = open_dashboard();

    let source = match HttpSlotSource::new(&config.http) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("❌ Failed to create HTTP client: {}", e);
            error!(event = "cli.refresh_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };
    let reconciler = Reconciler::new(source);

    let notices = match target {
        Some(process_id) => reconciler.refresh_one(&mut dashboard, process_id).await,
        None => reconciler.refresh_all(&mut dashboard).await,
    };

    // Only the displayed rows are affected; rows outside a single refresh keep
    // their unloaded state and show as "No data".
    let rows: Vec<ProcessRow> = match target {
        Some(process_id) => dashboard
            .rows()
            .into_iter()
            .filter(|row| &row.id == process_id)
            .collect(),
        None => dashboard.rows(),
    };

    let failure = if json_output {
        let output = RefreshOutput {
            notices: &notices,
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        first_error(&notices)
    } else {
        let failure = report_notices(&notices);
        if !rows.is_empty() {
            let formatter = crate::table::TableFormatter::new(&rows);
            formatter.print_table(&rows);
        }
        failure
    };

    if let Some(notice) = failure {
        error!(event = "cli.refresh_failed", notice = %notice);
        return Err(notice.to_string().into());
    }

    info!(
        event = "cli.refresh_completed",
        count = dashboard.registry().len()
    );

    Ok(())
}
