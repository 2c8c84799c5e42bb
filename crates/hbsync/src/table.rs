use hbsync_core::ProcessRow;

pub struct TableFormatter {
    id_width: usize,
    current_width: usize,
    target_width: usize,
    status_width: usize,
}

impl TableFormatter {
    pub fn new(rows: &[ProcessRow]) -> Self {
        let id_width = rows
            .iter()
            .map(|r| r.id.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(10, 50); // Between "Process ID" header and reasonable terminal width

        let current_width = rows
            .iter()
            .map(|r| r.current.chars().count())
            .max()
            .unwrap_or(0)
            .max(12);

        let target_width = rows
            .iter()
            .map(|r| r.target.chars().count())
            .max()
            .unwrap_or(0)
            .max(11);

        Self {
            id_width,
            current_width,
            target_width,
            status_width: 8,
        }
    }

    pub fn print_table(&self, rows: &[ProcessRow]) {
        self.print_header();
        for row in rows {
            self.print_row(row);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
    }

    fn print_footer(&self) {
        println!("{}", self.bottom_border());
    }

    fn print_row(&self, row: &ProcessRow) {
        println!("{}", self.format_row(row));
    }

    fn format_row(&self, row: &ProcessRow) -> String {
        format!(
            "│ {} │ {:>width_current$} │ {:>width_target$} │ {} │",
            truncate(&row.id, self.id_width),
            row.current,
            row.target,
            truncate(row.status.label(), self.status_width),
            width_current = self.current_width,
            width_target = self.target_width,
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_id$} │ {:<width_current$} │ {:<width_target$} │ {:<width_status$} │",
            "Process ID",
            "Current Slot",
            "Target Slot",
            "Status",
            width_id = self.id_width,
            width_current = self.current_width,
            width_target = self.target_width,
            width_status = self.status_width,
        )
    }

    fn top_border(&self) -> String {
        self.border('┌', '┬', '┐')
    }

    fn separator(&self) -> String {
        self.border('├', '┼', '┤')
    }

    fn bottom_border(&self) -> String {
        self.border('└', '┴', '┘')
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        format!(
            "{}{}{}{}{}{}{}{}{}",
            left,
            "─".repeat(self.id_width + 2),
            middle,
            "─".repeat(self.current_width + 2),
            middle,
            "─".repeat(self.target_width + 2),
            middle,
            "─".repeat(self.status_width + 2),
            right,
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) so multi-byte ids stay intact.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
