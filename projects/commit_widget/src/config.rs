use interfaces_github_branch_commit::index::RepoBranch;
use serde::Deserialize;

/// Host-supplied widget configuration. Every field is optional; the widget
/// must render something even when the user has not finished configuring it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WidgetConfig {
    pub account: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
}

impl WidgetConfig {
    /// A complete identity, or `None` when any field is absent or empty.
    pub fn resolve(&self) -> Option<RepoBranch> {
        let account = non_empty(self.account.as_deref())?;
        let repo = non_empty(self.repo.as_deref())?;
        let branch = non_empty(self.branch.as_deref())?;

        Some(RepoBranch::new(account, repo, branch))
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}
