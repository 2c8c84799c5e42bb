/// Device path segment every process endpoint lives under.
const PROCESS_DEVICE: &str = "~process@1.0";

/// The two polling URLs for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEndpoints {
    /// `{base}/{id}~process@1.0/slot/current`
    pub target: String,
    /// `{base}/{id}~process@1.0/compute/at-slot`
    pub current: String,
}

impl SlotEndpoints {
    /// Build both URLs by literal concatenation. Nothing is escaped or normalized.
    pub fn new(base_url: &str, process_id: &str) -> Self {
        Self {
            target: format!("{base_url}/{process_id}{PROCESS_DEVICE}/slot/current"),
            current: format!("{base_url}/{process_id}{PROCESS_DEVICE}/compute/at-slot"),
        }
    }
}
