use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use hbsync_core::{ProcessRow, TableControls};

use super::helpers::open_dashboard;

#[derive(Serialize)]
struct ListOutput<'a> {
    url: Option<&'a str>,
    controls: TableControls,
    rows: Vec<ProcessRow>,
}

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let dashboard = open_dashboard();
    let rows = dashboard.rows();
    let count = rows.len();

    if json_output {
        let output = ListOutput {
            url: dashboard.has_url().then(|| dashboard.url()),
            controls: dashboard.table_controls(),
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if dashboard.has_url() {
            println!("Node: {}", dashboard.url());
        } else {
            println!("Node: (not set)");
        }

        if rows.is_empty() {
            println!("No processes added yet.");
            println!("Add one with: hbsync add <PROCESS_ID>");
        } else {
            println!("Monitored processes:");
            let formatter = crate::table::TableFormatter::new(&rows);
            formatter.print_table(&rows);
            println!("Run 'hbsync refresh' to fetch slot data.");
        }
    }

    info!(event = "cli.list_completed", count = count);

    Ok(())
}
