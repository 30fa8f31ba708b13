use crate::timeline::LastCommit;

/// Textual content of one widget entry. Actual layout, fonts, and colors
/// are the host's concern.
pub fn render_text(entry: &LastCommit) -> String {
    format!(
        "{account}/{repo}'s {branch} Latest Commit\n{message}\nby {author} at {commit_date}\nUpdated at {updated}",
        account = entry.branch.account,
        repo = entry.branch.repo,
        branch = entry.branch.branch,
        message = entry.commit.message,
        author = entry.commit.author,
        commit_date = entry.commit.date,
        updated = entry.date.format("%m-%d-%Y %H:%M"),
    )
}
