use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("hbsync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Monitor slot sync status of processes on a HyperBEAM node")
        .long_about("hbsync tracks process IDs on a HyperBEAM node and compares each process's computed slot with the node's current slot, showing whether the process is synced or behind. The node URL and process list are saved between runs; slot data is fetched fresh on every refresh.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("url")
                .about("Show or set the HyperBEAM node URL")
                .arg(
                    Arg::new("url")
                        .help("Base URL of the node, e.g. https://your-hb-node.com")
                        .index(1)
                )
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .help("Unset the saved node URL")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("url")
                )
        )
        .subcommand(
            Command::new("add")
                .about("Start monitoring a process")
                .arg(
                    Arg::new("process")
                        .help("Process ID to monitor")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("remove")
                .about("Stop monitoring a process")
                .arg(
                    Arg::new("process")
                        .help("Process ID to remove")
                        .required_unless_present("all")
                        .index(1)
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Remove every monitored process")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("process")
                )
        )
        .subcommand(
            Command::new("list")
                .about("Show monitored processes")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("refresh")
                .about("Fetch current and target slots and show sync status")
                .long_about(
                    "Fetches slot data from the node and prints the sync table.\n\n\
                    Without a process ID every monitored process is refreshed concurrently.\n\
                    Processes whose data could not be fetched show 'No data'."
                )
                .arg(
                    Arg::new("process")
                        .help("Refresh only this process")
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("status")
                .about("Show node URL, storage location and HTTP settings")
        )
}
