use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// User-facing outcome of a refresh, the terminal's stand-in for a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// No node URL is configured; nothing was fetched.
    UrlNotSet,
    /// The requested process is not in the registry; nothing was fetched.
    NotTracked { process_id: String },
    /// At least one of the two slot requests failed for this process.
    PartialFailure { process_id: String },
    /// The fetch task for this process died unexpectedly.
    FetchFailed { process_id: String },
    /// A refresh-all run finished.
    AllRefreshed { count: usize },
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::AllRefreshed { .. } => NoticeLevel::Success,
            Notice::PartialFailure { .. } => NoticeLevel::Warning,
            Notice::UrlNotSet | Notice::NotTracked { .. } | Notice::FetchFailed { .. } => {
                NoticeLevel::Error
            }
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::UrlNotSet => write!(f, "Please set a HyperBEAM node URL first"),
            Notice::NotTracked { process_id } => {
                write!(f, "Process '{}' is not tracked", process_id)
            }
            Notice::PartialFailure { process_id } => {
                write!(f, "Some data could not be fetched for {}", process_id)
            }
            Notice::FetchFailed { process_id } => {
                write!(f, "Failed to fetch slot data for {}", process_id)
            }
            Notice::AllRefreshed { count } => write!(f, "Refreshed all processes ({})", count),
        }
    }
}
