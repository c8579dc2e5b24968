//! GitHub API constants.

/// GitHub API Header
pub const GITHUB_API_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API Version
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub JSON media type
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
