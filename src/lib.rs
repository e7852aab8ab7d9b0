// Library interface for workoutrs modules
// The binary in main.rs is the only place a batch is actually run

pub mod batch;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use batch::{BatchReport, BatchRunner, RecordOutcome};
pub use config::AppConfig;
pub use dispatch::{read_package, sample_packages, UnknownCodePolicy};
pub use error::{ImportError, RecordError, Result, WorkoutRsError};
pub use export::{Language, OutputFormat};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{SensorPackage, Summary, WorkoutKind};
pub use running::Running;
pub use swimming::Swimming;
pub use training::{Training, TrainingBase, Workout};
pub use walking::SportsWalking;
