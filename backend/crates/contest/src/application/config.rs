//! Application Configuration
//!
//! Configuration for the Contest application layer.

/// Contest application configuration
#[derive(Debug, Clone)]
pub struct ContestConfig {
    /// File extensions accepted for project submissions
    pub allowed_extensions: Vec<String>,
    /// Upper bound on the stored project file, in bytes
    ///
    /// Uploads are buffered fully in memory before hitting the database,
    /// so this must stay small. The HTTP layer enforces a matching body
    /// limit; this is the authoritative check.
    pub max_upload_bytes: usize,
    /// Whether enrolled participants may view the winner list
    ///
    /// The creator can always view it. Default is creator-only.
    pub winners_visible_to_participants: bool,
}

impl Default for ContestConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: ["pdf", "doc", "docx", "txt"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_upload_bytes: 10 * 1024 * 1024, // 10 MiB
            winners_visible_to_participants: false,
        }
    }
}

impl ContestConfig {
    /// Body limit for the upload route (file plus multipart overhead)
    pub fn request_body_limit(&self) -> usize {
        self.max_upload_bytes + 64 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let config = ContestConfig::default();
        assert_eq!(config.allowed_extensions, ["pdf", "doc", "docx", "txt"]);
        assert!(!config.winners_visible_to_participants);
    }

    #[test]
    fn test_body_limit_exceeds_upload_cap() {
        let config = ContestConfig::default();
        assert!(config.request_body_limit() > config.max_upload_bytes);
    }
}
