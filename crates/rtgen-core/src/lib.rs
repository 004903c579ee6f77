pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod generator;
pub mod mock;
pub mod model;
pub mod paths;
pub mod patterns;
pub mod scan;
pub mod storage;
pub mod template;

pub use config::{Config, ConfigError, PathsConfig, ScanConfig, TemplateConfig};
pub use error::GenerateError;
pub use generator::{GeneratedTest, InFlight, Outcome, PlannedTest, TestGenerator};
pub use mock::MockSynthesizer;
pub use model::{
    Bindings, Classified, ComponentIdentity, ExportStyle, FileKind, ImportStatement, MockBody,
    MockDeclaration, MockField, SourceLocation,
};
pub use paths::{derive_component_identity, PathDeriver};
pub use scan::ImportScanner;
pub use storage::{FileSystem, Host, LocalFileSystem, Notification, NotificationLevel};
pub use template::TemplateAssembler;
