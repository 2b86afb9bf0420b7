use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Alternative store profile; the embedded reference store when `None`.
    pub profile_path: Option<PathBuf>,
    /// Pasted input above this size is refused by the extractor.
    pub max_input_bytes: usize,
}
