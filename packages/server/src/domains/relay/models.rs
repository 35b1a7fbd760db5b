/// What one relay pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelaySummary {
    /// Matching links found on the page
    pub discovered: usize,
    /// Links already in the seen-set
    pub skipped: usize,
    /// Announcements posted and recorded
    pub announced: usize,
    /// Files that got an error announcement or could not be recorded
    pub failed: usize,
    /// Set when the page itself could not be fetched
    pub page_error: Option<String>,
}

/// Result of relaying a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Announced,
    Failed,
}
