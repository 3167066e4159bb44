mod init;
pub use init::{init_logging, parse_rotation, LoggingError};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used by the label manager.
pub const LOG_FILENAME: &str = "resource-labels.log";
/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    /// Default level when RUST_LOG is not set.
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: crate::utils::default_data_dir().join("logs"),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
