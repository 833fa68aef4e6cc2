//! Console renderer for profiler reports and classified failures
//! Contains all formatting, emojis, and terminal-specific display logic

use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table,
};

use super::ReportRenderer;
use crate::i18n;
use crate::types::{ErrorKind, Locale, ProfileReport};

/// Renderer for terminal output with configurable presentation
pub struct CliRenderer {
    /// Whether to include emoji icons in headers and status markers
    pub use_emojis: bool,
}

impl CliRenderer {
    /// Create a new CLI renderer with default settings (emojis enabled)
    pub fn new() -> Self {
        Self { use_emojis: true }
    }

    /// Create a CLI renderer without emoji chrome (for plain-text logs)
    ///
    /// This only affects headers and status markers; canonical localized
    /// messages keep their trailing marker regardless.
    pub fn without_emojis() -> Self {
        Self { use_emojis: false }
    }

    /// Render a classified failure as the user-facing line for `locale`
    pub fn render_failure(&self, kind: ErrorKind, locale: Locale) -> String {
        let message = i18n::message_for(kind, locale);
        if self.use_emojis {
            format!("🚨 [{kind}] {message}")
        } else {
            format!("[{kind}] {message}")
        }
    }

    fn format_header(&self) -> String {
        if self.use_emojis {
            "\n⏱️ PIPELINE TIMING\n".to_string()
        } else {
            "\nPIPELINE TIMING\n".to_string()
        }
    }

    fn stage_status(&self, skipped: bool) -> &'static str {
        match (skipped, self.use_emojis) {
            (true, true) => "⏭ skipped",
            (true, false) => "skipped",
            (false, true) => "✔ completed",
            (false, false) => "completed",
        }
    }
}

impl ReportRenderer for CliRenderer {
    fn render(&self, report: &ProfileReport) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header());

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Stage").add_attribute(Attribute::Bold),
            Cell::new("Duration (ms)").add_attribute(Attribute::Bold),
            Cell::new("Duration (s)").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

        for stage in &report.stages {
            table.add_row(vec![
                Cell::new(&stage.name),
                Cell::new(stage.duration_ms.to_string()),
                Cell::new(&stage.duration_s),
                Cell::new(self.stage_status(stage.skipped)),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Total: {} ms ({} s) | Slowest stage: {}\n",
            report.total_ms, report.total_s, report.slowest
        ));

        output
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}
