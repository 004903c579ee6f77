mod common;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Notify;

use common::{MemoryFileSystem, RecordingHost, CARD_SOURCE};
use rtgen_core::scan::mocked_modules;
use rtgen_core::{
    Classified, Config, ExportStyle, FileKind, GenerateError, ImportScanner, NotificationLevel,
    Outcome, SourceLocation, TestGenerator,
};

fn card_location() -> SourceLocation {
    SourceLocation::new("/proj", "/proj/src/components/Card.tsx")
}

#[tokio::test]
async fn test_end_to_end_markup_component() {
    let fs = MemoryFileSystem::new().with_file("/proj/src/components/Card.tsx", CARD_SOURCE);
    let generator = TestGenerator::new(fs.clone());
    let host = RecordingHost::default();

    let outcome = generator.generate(&card_location(), &host).await.unwrap();

    let expected_path = PathBuf::from("/proj/tests/components/Card.test.tsx");
    let Outcome::Created(test) = outcome else {
        panic!("expected a created test file");
    };
    assert_eq!(test.test_path, expected_path);
    assert_eq!(test.identity.as_str(), "Card");
    assert_eq!(test.kind, FileKind::Markup);
    assert_eq!(test.export_style, Classified::Matched(ExportStyle::Default));
    assert_eq!(test.mock_count, 4);
    assert!(test.source_readable);

    let content = fs.get(&expected_path).unwrap();
    assert!(content.contains("import Card from \"@/components/Card\"\n"));
    assert!(content.contains("import { render, screen } from \"@testing-library/react\""));
    assert!(content.contains("it(\"renders without crashing\""));
    assert!(content.contains("it(\"handles user interactions\""));
    assert_eq!(
        mocked_modules(&content),
        vec!["react", "@/components/ui", "@/lib/api", "@/Avatar"]
    );

    assert_eq!(
        host.messages(),
        vec![format!("Test file created: {}", expected_path.display())]
    );
}

#[tokio::test]
async fn test_route_page_identity() {
    let fs = MemoryFileSystem::new().with_file(
        "/proj/app/dashboard/page.tsx",
        "export default function DashboardPage() {\n  return null\n}\n",
    );
    let generator = TestGenerator::new(fs);
    let location = SourceLocation::new("/proj", "/proj/app/dashboard/page.tsx");

    let planned = generator.plan(&location).await.unwrap();
    assert_eq!(planned.identity.as_str(), "DashboardPage");
    assert_eq!(planned.test_path, PathBuf::from("/proj/tests/app/dashboard/page.test.tsx"));
    assert!(planned.content.contains("import DashboardPage from \"@/app/dashboard/page\""));
    assert!(!planned.export_style.is_fallback());
}

#[tokio::test]
async fn test_plain_module_named_export() {
    let fs = MemoryFileSystem::new().with_file(
        "/proj/src/lib/formatters.ts",
        "import dayjs from 'dayjs'\n\nexport const Formatters = { date: dayjs }\n",
    );
    let generator = TestGenerator::new(fs);
    let location = SourceLocation::new("/proj", "/proj/src/lib/formatters.ts");

    let planned = generator.plan(&location).await.unwrap();
    assert_eq!(planned.kind, FileKind::Plain);
    assert_eq!(planned.export_style, Classified::Matched(ExportStyle::Named));
    assert!(planned.content.contains("import { Formatters } from \"@/lib/formatters\""));
    assert!(planned.content.contains("expect(Formatters).toBeDefined()"));
    assert!(!planned.content.contains("@testing-library"));
    assert!(planned.content.starts_with("jest.mock(\"dayjs\""));
}

#[tokio::test]
async fn test_unreadable_source_degrades_to_fallbacks() {
    let fs = MemoryFileSystem::new();
    let generator = TestGenerator::new(fs.clone());
    let host = RecordingHost::default();

    let outcome = generator.generate(&card_location(), &host).await.unwrap();
    let Outcome::Created(test) = outcome else {
        panic!("expected a created test file");
    };
    assert_eq!(test.export_style, Classified::Fallback(ExportStyle::Default));
    assert_eq!(test.mock_count, 0);
    assert!(!test.source_readable);

    let content = fs.get("/proj/tests/components/Card.test.tsx").unwrap();
    assert!(content.starts_with("import { render, screen }"));
    assert!(content.contains("import Card from \"@/components/Card\""));
    let notifications = host.notifications.lock().unwrap();
    let levels: Vec<_> = notifications.iter().map(|n| n.level).collect();
    assert_eq!(levels, vec![NotificationLevel::Warning, NotificationLevel::Info]);
    assert!(notifications[0].message.contains("/proj/src/components/Card.tsx"));
}

#[tokio::test]
async fn test_existing_destination_declined() {
    let fs = MemoryFileSystem::new()
        .with_file("/proj/src/components/Card.tsx", CARD_SOURCE)
        .with_file("/proj/tests/components/Card.test.tsx", "// hand written");
    let generator = TestGenerator::new(fs.clone());
    let host = RecordingHost::default();

    let outcome = generator.generate(&card_location(), &host).await.unwrap();
    assert!(matches!(outcome, Outcome::Skipped { .. }));
    assert_eq!(
        fs.get("/proj/tests/components/Card.test.tsx").as_deref(),
        Some("// hand written")
    );
    assert_eq!(host.prompts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_existing_destination_overwritten_when_confirmed() {
    let fs = MemoryFileSystem::new()
        .with_file("/proj/src/components/Card.tsx", CARD_SOURCE)
        .with_file("/proj/tests/components/Card.test.tsx", "// hand written");
    let generator = TestGenerator::new(fs.clone());
    let host = RecordingHost::allowing_overwrite();

    let outcome = generator.generate(&card_location(), &host).await.unwrap();
    assert!(matches!(outcome, Outcome::Created(_)));
    let content = fs.get("/proj/tests/components/Card.test.tsx").unwrap();
    assert!(content.contains("describe(\"Card\""));
}

#[tokio::test]
async fn test_outside_workspace_is_input_error() {
    let generator = TestGenerator::new(MemoryFileSystem::new());
    let host = RecordingHost::default();
    let location = SourceLocation::new("/proj", "/elsewhere/Card.tsx");

    let err = generator.generate(&location, &host).await.unwrap_err();
    assert!(matches!(err, GenerateError::OutsideWorkspace { .. }));
    assert!(err.is_input_error());

    let notes = host.notifications.lock().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Error);
    assert!(notes[0].message.starts_with("File is not in a workspace"));
}

#[tokio::test]
async fn test_missing_input_is_input_error() {
    let generator = TestGenerator::new(MemoryFileSystem::new());
    let host = RecordingHost::default();
    let location = SourceLocation::new("/proj", "");

    let err = generator.generate(&location, &host).await.unwrap_err();
    assert!(matches!(err, GenerateError::NoInput));
    assert_eq!(host.messages(), vec!["No file selected".to_string()]);
}

#[tokio::test]
async fn test_write_failure_is_reported() {
    let fs = MemoryFileSystem::new()
        .with_file("/proj/src/components/Card.tsx", CARD_SOURCE)
        .failing_writes();
    let generator = TestGenerator::new(fs);
    let host = RecordingHost::default();

    let err = generator.generate(&card_location(), &host).await.unwrap_err();
    assert!(matches!(err, GenerateError::Write { .. }));
    assert!(!err.is_input_error());
    assert!(host.messages()[0].starts_with("Error creating test file: "));
    assert!(!generator.in_flight().is_held(Path::new("/proj/tests/components/Card.test.tsx")));
}

#[tokio::test]
async fn test_concurrent_invocations_on_one_destination() {
    let gate = Arc::new(Notify::new());
    let fs = MemoryFileSystem::new()
        .with_file("/proj/src/components/Card.tsx", CARD_SOURCE)
        .with_write_gate(Arc::clone(&gate));
    let generator = TestGenerator::new(fs);
    let first_host = RecordingHost::default();
    let second_host = RecordingHost::default();
    let location = card_location();

    let (first, second) = tokio::join!(generator.generate(&location, &first_host), async {
        let result = generator.generate(&location, &second_host).await;
        gate.notify_one();
        result
    });

    assert!(matches!(first, Ok(Outcome::Created(_))));
    assert!(matches!(second, Err(GenerateError::InFlight(_))));
    assert!(!generator.in_flight().is_held(Path::new("/proj/tests/components/Card.test.tsx")));
}

#[tokio::test]
async fn test_round_trip_of_generated_imports() {
    let fs = MemoryFileSystem::new().with_file("/proj/src/components/Card.tsx", CARD_SOURCE);
    let generator = TestGenerator::new(fs);

    let planned = generator.plan(&card_location()).await.unwrap();
    let rescanned = ImportScanner::default().scan(&planned.content);

    // Only the component import survives: the rendering import is test infrastructure.
    assert_eq!(rescanned.len(), 1);
    assert_eq!(rescanned[0].module_path, planned.import_path);
    assert_eq!(rescanned[0].bindings.default.as_deref(), Some("Card"));

    let mock_paths: Vec<String> = planned.mocks.iter().map(|m| m.module_path.clone()).collect();
    assert_eq!(mocked_modules(&planned.content), mock_paths);
    assert_eq!(planned.imports.value().len(), mock_paths.len());
}

#[tokio::test]
async fn test_custom_config_paths() {
    let mut config = Config::default();
    config.paths.tests_dir = "__tests__".to_string();
    config.paths.alias_prefix = "~/".to_string();
    let fs = MemoryFileSystem::new().with_file("/proj/src/components/Card.tsx", CARD_SOURCE);
    let generator = TestGenerator::with_config(fs, &config);

    let planned = generator.plan(&card_location()).await.unwrap();
    assert_eq!(planned.test_path, PathBuf::from("/proj/__tests__/components/Card.test.tsx"));
    assert!(planned.content.contains("import Card from \"~/components/Card\""));
    assert!(planned.content.contains("jest.mock(\"~/components/ui\""));
}

#[tokio::test]
async fn test_outcome_serializes_with_status() {
    let fs = MemoryFileSystem::new().with_file("/proj/src/components/Card.tsx", CARD_SOURCE);
    let generator = TestGenerator::new(fs);
    let outcome = generator
        .generate(&card_location(), &RecordingHost::default())
        .await
        .unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "created");
    assert_eq!(json["identity"], "Card");
    assert_eq!(json["kind"], "markup");
    assert_eq!(json["export_style"]["outcome"], "matched");
    assert_eq!(json["export_style"]["value"], "default");
}
