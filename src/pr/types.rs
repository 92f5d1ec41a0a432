/// Represents the parsed components of a GitHub PR URL.
/// Extracted by parse_pr_url() in pr/mod.rs.
#[derive(Debug, Clone)]
pub struct PrUrl {
    pub owner: String,
    pub repo: String,
    pub pr_number: u64,
}

/// The diff for a single changed file, carved out of the raw unified diff
/// by the partitioner in diff.rs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// File path relative to the repository root (e.g., "src/auth/login.py")
    pub path: String,
    /// Every line of the file's diff block except the `diff --git` header,
    /// rejoined with newlines. Hunk headers and +/- markers are preserved.
    pub body: String,
}
