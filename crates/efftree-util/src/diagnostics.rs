use std::io::Write;

use console::Style;

/// Sink for non-fatal, human-readable resolution warnings.
///
/// The resolver reports conditions like "dependency has no candidate" here
/// instead of writing to the console directly, so callers decide where the
/// warnings end up. Warnings never affect control flow.
pub trait Diagnostics {
    fn warn(&mut self, message: &str);
}

/// Writes warnings to stderr with a bold yellow `warning` label.
#[derive(Debug, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn warn(&mut self, message: &str) {
        let yellow_bold = Style::new().yellow().bold();
        let _ = writeln!(
            std::io::stderr(),
            "{:>12} {message}",
            yellow_bold.apply_to("warning"),
        );
    }
}

/// Buffers warnings in memory; used by tests and embedding callers.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    warnings: Vec<String>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
