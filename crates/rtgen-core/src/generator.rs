//! The generation pipeline: derive paths, analyze the source, assemble and write.

use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::GenerateError;
use crate::export;
use crate::mock::MockSynthesizer;
use crate::model::{
    Classified, ComponentIdentity, ExportStyle, FileKind, ImportStatement, MockDeclaration,
    SourceLocation,
};
use crate::paths::{derive_component_identity, PathDeriver};
use crate::scan::ImportScanner;
use crate::storage::{FileSystem, Host, Notification};
use crate::template::TemplateAssembler;

/// Everything derived for one source file, before anything is written.
#[derive(Debug, Clone)]
pub struct PlannedTest {
    pub source_path: PathBuf,
    pub test_path: PathBuf,
    pub identity: ComponentIdentity,
    pub kind: FileKind,
    /// Import path of the component inside the generated test.
    pub import_path: String,
    pub export_style: Classified<ExportStyle>,
    pub imports: Classified<Vec<ImportStatement>>,
    pub mocks: Vec<MockDeclaration>,
    pub content: String,
}

impl PlannedTest {
    fn summary(&self) -> GeneratedTest {
        GeneratedTest {
            source_path: self.source_path.clone(),
            test_path: self.test_path.clone(),
            identity: self.identity.clone(),
            kind: self.kind,
            export_style: self.export_style,
            mock_count: self.mocks.len(),
            source_readable: !self.imports.is_fallback(),
        }
    }
}

/// Summary of a written test file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedTest {
    pub source_path: PathBuf,
    pub test_path: PathBuf,
    pub identity: ComponentIdentity,
    pub kind: FileKind,
    pub export_style: Classified<ExportStyle>,
    pub mock_count: usize,
    pub source_readable: bool,
}

/// Result of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// The test file was written.
    Created(GeneratedTest),
    /// The destination existed and the host declined to overwrite it.
    Skipped { test_path: PathBuf },
}

impl Outcome {
    pub fn test_path(&self) -> &Path {
        match self {
            Outcome::Created(test) => &test.test_path,
            Outcome::Skipped { test_path } => test_path,
        }
    }
}

/// Destinations currently being generated.
///
/// Acquiring a destination returns a guard that releases it on drop.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    paths: Arc<Mutex<HashSet<PathBuf>>>,
}

impl InFlight {
    /// Claims `path`, or returns `None` when another invocation holds it.
    pub fn try_acquire(&self, path: &Path) -> Option<InFlightGuard> {
        let mut paths = self.paths.lock().unwrap_or_else(|e| e.into_inner());
        if !paths.insert(path.to_path_buf()) {
            return None;
        }
        Some(InFlightGuard {
            paths: Arc::clone(&self.paths),
            path: path.to_path_buf(),
        })
    }

    pub fn is_held(&self, path: &Path) -> bool {
        self.paths
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(path)
    }
}

/// Releases an in-flight destination when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    paths: Arc<Mutex<HashSet<PathBuf>>>,
    path: PathBuf,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.paths
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.path);
    }
}

/// Generates test skeletons for component files.
pub struct TestGenerator<F: FileSystem> {
    fs: F,
    paths: PathDeriver,
    scanner: ImportScanner,
    mocks: MockSynthesizer,
    assembler: TemplateAssembler,
    markup_extensions: Vec<String>,
    in_flight: InFlight,
}

impl<F: FileSystem> TestGenerator<F> {
    /// Creates a generator with the default configuration.
    pub fn new(fs: F) -> Self {
        Self::with_config(fs, &Config::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(fs: F, config: &Config) -> Self {
        let paths = PathDeriver::new(&config.paths);
        Self {
            fs,
            mocks: MockSynthesizer::new(paths.clone(), config.template.clone()),
            paths,
            scanner: ImportScanner::new(config.scan.clone()),
            assembler: TemplateAssembler::new(config.template.clone()),
            markup_extensions: config.scan.markup_extensions.clone(),
            in_flight: InFlight::default(),
        }
    }

    /// Destinations currently being generated by this generator.
    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    /// Derives and renders the test for `location` without writing anything.
    pub async fn plan(&self, location: &SourceLocation) -> Result<PlannedTest, GenerateError> {
        let test_path = self
            .paths
            .derive_test_path(&location.workspace_root, &location.original_path)?;
        self.analyze(location, test_path).await
    }

    /// Generates and writes the test file for `location`.
    ///
    /// Errors are reported to the host before being returned.
    pub async fn generate(
        &self,
        location: &SourceLocation,
        host: &dyn Host,
    ) -> Result<Outcome, GenerateError> {
        match self.run(location, host).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                let message = if err.is_input_error() {
                    err.to_string()
                } else {
                    format!("Error creating test file: {}", err)
                };
                host.notify(Notification::error(message));
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        location: &SourceLocation,
        host: &dyn Host,
    ) -> Result<Outcome, GenerateError> {
        if location.original_path.as_os_str().is_empty() {
            return Err(GenerateError::NoInput);
        }

        let test_path = self
            .paths
            .derive_test_path(&location.workspace_root, &location.original_path)?;

        let _guard = self
            .in_flight
            .try_acquire(&test_path)
            .ok_or_else(|| GenerateError::InFlight(test_path.clone()))?;

        if self.fs.exists(&test_path).await && !host.confirm_overwrite(&test_path).await {
            info!(path = %test_path.display(), "test file exists, not overwriting");
            host.notify(Notification::info(format!(
                "Test file already exists: {}",
                test_path.display()
            )));
            return Ok(Outcome::Skipped { test_path });
        }

        let planned = self.analyze(location, test_path).await?;
        if planned.imports.is_fallback() {
            host.notify(Notification::warning(format!(
                "Could not read {}, generating a test without mocks",
                planned.source_path.display()
            )));
        }

        self.fs
            .write(&planned.test_path, &planned.content)
            .await
            .map_err(|e| GenerateError::write(&planned.test_path, e))?;

        info!(
            path = %planned.test_path.display(),
            component = %planned.identity,
            mocks = planned.mocks.len(),
            "wrote test file"
        );
        host.notify(Notification::info(format!(
            "Test file created: {}",
            planned.test_path.display()
        )));

        Ok(Outcome::Created(planned.summary()))
    }

    async fn analyze(
        &self,
        location: &SourceLocation,
        test_path: PathBuf,
    ) -> Result<PlannedTest, GenerateError> {
        let original = &location.original_path;
        let relative = self.paths.relative_path(&location.workspace_root, original)?;

        let identity = derive_component_identity(original);
        let kind = FileKind::from_path(original, self.markup_extensions.as_slice());
        let import_path = self.paths.derive_component_import_path(relative);

        let (export_style, imports) = match self.fs.read_to_string(original).await {
            Ok(text) => (
                export::classify(&text, &identity),
                Classified::Matched(self.scanner.scan(&text)),
            ),
            Err(err) => {
                warn!(
                    path = %original.display(),
                    error = %err,
                    "source unreadable, generating without export detection or mocks"
                );
                (export::unreadable(), Classified::Fallback(Vec::new()))
            }
        };

        let mocks = self.mocks.synthesize_all(imports.value());
        let content = self
            .assembler
            .assemble(&identity, *export_style.value(), kind, &import_path, &mocks);

        debug!(
            component = %identity,
            ?kind,
            imports = imports.value().len(),
            "planned test file"
        );

        Ok(PlannedTest {
            source_path: original.clone(),
            test_path,
            identity,
            kind,
            import_path,
            export_style,
            imports,
            mocks,
            content,
        })
    }
}
