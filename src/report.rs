/// Diagnostics reporter for startup and tooling status lines
///
/// Pure formatting plus a thin output seam. Secrets never pass through here:
/// callers hand over derived facts (database name, server version), not raw
/// connection strings.

/// Result of one reported step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { detail: Option<String> },
    Failure { detail: String },
}

impl Outcome {
    pub fn success() -> Self {
        Outcome::Success { detail: None }
    }

    pub fn success_with(detail: impl Into<String>) -> Self {
        Outcome::Success {
            detail: Some(detail.into()),
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Outcome::Failure {
            detail: detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Format a step outcome into a single status line
pub fn format_status(step: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success { detail: Some(detail) } => format!("✅ {}: {}", step, detail),
        Outcome::Success { detail: None } => format!("✅ {}", step),
        Outcome::Failure { detail } => format!("❌ {}: {}", step, detail),
    }
}

/// Output seam for step reporting
///
/// The bootstrap sequencer reports each step through this trait, which lets
/// tests observe exactly which steps ran.
pub trait Reporter {
    fn report(&mut self, step: &str, outcome: &Outcome);
}

/// Reporter writing status lines to standard output
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, step: &str, outcome: &Outcome) {
        println!("{}", format_status(step, outcome));
    }
}

/// Reporter that records (step, succeeded) pairs, for tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingReporter {
    pub entries: Vec<(String, bool)>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn report(&mut self, step: &str, outcome: &Outcome) {
        self.entries.push((step.to_string(), outcome.is_success()));
    }
}
