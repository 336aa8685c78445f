use crate::types::{Action, Check};

/// Result of a successful run, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Dry run: nothing was written.
    Previewed { action: Action, checks: Vec<Check> },
    /// The bulk write was accepted.
    Applied { action: Action, checks: Vec<Check> },
}

impl Outcome {
    pub fn checks(&self) -> &[Check] {
        match self {
            Outcome::Previewed { checks, .. } | Outcome::Applied { checks, .. } => checks,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Outcome::Previewed { action, checks } => render_preview(checks, *action),
            Outcome::Applied { action, checks } => render_report(checks, *action),
        }
    }
}

/// Lists the checks a dry run would change.
pub fn render_preview(checks: &[Check], action: Action) -> String {
    let header = format!(
        "[DRY RUN] Would {} {} checks:",
        action.preview_verb(),
        checks.len()
    );
    render_list(header, checks)
}

/// Lists the checks changed by a successful bulk write.
pub fn render_report(checks: &[Check], action: Action) -> String {
    let header = format!("{} {} checks:", action.applied_verb(), checks.len());
    render_list(header, checks)
}

fn render_list(header: String, checks: &[Check]) -> String {
    let mut lines = Vec::with_capacity(checks.len() + 1);
    lines.push(header);
    for c in checks {
        lines.push(format!("  - {} (id={})", c.display_name(), c.id));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
