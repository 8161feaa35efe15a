//! Scaffold service driven through the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use namer_adapters::{LocalFilesystem, MemoryFilesystem, PreviewFilesystem};
use namer_core::{application::ApplicationError, prelude::*};
use tempfile::TempDir;

fn name(s: &str) -> ProjectName {
    ProjectName::parse(s).unwrap()
}

/// `/tpl` template with a nested source tree, seeded in memory.
fn seeded_template() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.add_file(
        "/tpl/UnrealSlateAppTemplate.uproject",
        r#"{ "Modules": [ { "Name": "UnrealSlateAppTemplate" } ] }"#,
    );
    fs.add_file(
        "/tpl/Source/UnrealSlateAppTemplate.Target.cs",
        "public class UnrealSlateAppTemplateTarget : TargetRules {}",
    );
    fs.add_file(
        "/tpl/Source/UnrealSlateAppTemplate/UnrealSlateAppTemplate.cpp",
        "#include \"UnrealSlateAppTemplate.h\"\nclass UnrealSlateAppTemplate {};",
    );
    fs.add_file(
        "/tpl/Source/UnrealSlateAppTemplate/Private/Window.cpp",
        "// no token",
    );
    fs.add_dir("/out");
    fs
}

fn request(project: &str, target: &str) -> ScaffoldRequest {
    ScaffoldRequest {
        name: name(project),
        target_path: PathBuf::from(target),
        template_root: PathBuf::from("/tpl"),
    }
}

#[test]
fn scaffold_renames_paths_and_contents() {
    let fs = seeded_template();
    let service = ScaffoldService::new(Box::new(fs.clone()), TemplateLayout::default());

    let report = service.scaffold(&request("MyApp", "/out")).unwrap();

    assert_eq!(report.root, PathBuf::from("/out/MyApp"));
    assert_eq!(report.files, 4);
    // root, Source, Source/MyApp, Source/MyApp/Private
    assert_eq!(report.directories, 4);

    assert_eq!(
        fs.read_file("/out/MyApp/Source/MyApp/MyApp.cpp").as_deref(),
        Some("#include \"MyApp.h\"\nclass MyApp {};")
    );
    assert_eq!(
        fs.read_file("/out/MyApp/Source/MyApp.Target.cs").as_deref(),
        Some("public class MyAppTarget : TargetRules {}")
    );
    assert_eq!(
        fs.read_file("/out/MyApp/Source/MyApp/Private/Window.cpp").as_deref(),
        Some("// no token")
    );
    assert_eq!(
        fs.read_file("/out/MyApp/MyApp.uproject").as_deref(),
        Some(r#"{ "Modules": [ { "Name": "MyApp" } ] }"#)
    );
}

#[test]
fn template_is_left_untouched() {
    let fs = seeded_template();
    let before = fs.list_files();
    let service = ScaffoldService::new(Box::new(fs.clone()), TemplateLayout::default());

    service.scaffold(&request("MyApp", "/out")).unwrap();

    let template_files = |files: Vec<PathBuf>| -> Vec<PathBuf> {
        files.into_iter().filter(|p| p.starts_with("/tpl")).collect()
    };
    assert_eq!(template_files(fs.list_files()), template_files(before));
    for file in template_files(fs.list_files()) {
        assert!(!file.to_string_lossy().contains("MyApp"));
    }
}

#[test]
fn events_follow_pre_order() {
    let fs = seeded_template();
    let service = ScaffoldService::new(Box::new(fs), TemplateLayout::default());

    let mut seen = Vec::new();
    service
        .scaffold_with(&request("Foo", "/out"), |event| {
            let line = match event {
                ScaffoldEvent::RootCreated(p) => format!("root {}", p.display()),
                ScaffoldEvent::TemplateResolved(p) => format!("template {}", p.display()),
                ScaffoldEvent::DirectoryCreated(p) => format!("dir {}", p.display()),
                ScaffoldEvent::FileWritten(p) => format!("file {}", p.display()),
            };
            seen.push(line);
        })
        .unwrap();

    assert_eq!(
        seen,
        vec![
            "root /out/Foo",
            "template /tpl",
            "dir /out/Foo/Source",
            "dir /out/Foo/Source/Foo",
            "dir /out/Foo/Source/Foo/Private",
            "file /out/Foo/Source/Foo/Private/Window.cpp",
            "file /out/Foo/Source/Foo/Foo.cpp",
            "file /out/Foo/Source/Foo.Target.cs",
            "file /out/Foo/Foo.uproject",
        ]
    );
}

#[test]
fn existing_root_aborts_without_writing() {
    let fs = seeded_template();
    fs.add_file("/out/MyApp/keep.txt", "mine");
    let service = ScaffoldService::new(Box::new(fs.clone()), TemplateLayout::default());

    let err = service.scaffold(&request("MyApp", "/out")).unwrap_err();

    assert!(err.is_root_creation_failure());
    assert_eq!(fs.read_file("/out/MyApp/keep.txt").as_deref(), Some("mine"));
    assert!(!fs.exists(Path::new("/out/MyApp/Source")));
}

#[test]
fn missing_descriptor_fails_after_mirror_without_rollback() {
    let fs = MemoryFilesystem::new();
    fs.add_file("/tpl/Source/a.txt", "UnrealSlateAppTemplate");
    fs.add_dir("/out");
    let service = ScaffoldService::new(Box::new(fs.clone()), TemplateLayout::default());

    let err = service.scaffold(&request("Foo", "/out")).unwrap_err();

    assert!(matches!(
        err,
        NamerError::Application(ApplicationError::Filesystem { .. })
    ));
    assert_eq!(fs.read_file("/out/Foo/Source/a.txt").as_deref(), Some("Foo"));
}

#[test]
fn mirror_twice_overwrites_files() {
    let fs = seeded_template();
    let service = ScaffoldService::new(Box::new(fs.clone()), TemplateLayout::default());
    let source = Path::new("/tpl/Source");

    service.mirror_dir(source, Path::new("/out"), &name("Foo")).unwrap();
    fs.add_file("/out/Source/Foo.Target.cs", "edited");
    let dst = service.mirror_dir(source, Path::new("/out"), &name("Foo")).unwrap();

    assert_eq!(dst, PathBuf::from("/out/Source"));
    assert_eq!(
        fs.read_file("/out/Source/Foo.Target.cs").as_deref(),
        Some("public class FooTarget : TargetRules {}")
    );
}

#[test]
fn end_to_end_on_disk() {
    let template = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let tpl = template.path().join("UnrealSlateAppTemplate");
    fs::create_dir_all(tpl.join("Source")).unwrap();
    fs::write(
        tpl.join("Source/UnrealSlateAppTemplate.cpp"),
        "class UnrealSlateAppTemplate {};",
    )
    .unwrap();
    fs::write(tpl.join("UnrealSlateAppTemplate.uproject"), "{}").unwrap();

    let service =
        ScaffoldService::new(Box::new(LocalFilesystem::new()), TemplateLayout::default());
    let request = ScaffoldRequest {
        name: name("MyApp"),
        target_path: service.validate_target_path(out.path()).unwrap(),
        template_root: tpl.clone(),
    };
    service.scaffold(&request).unwrap();

    let cpp = out.path().join("MyApp/Source/MyApp.cpp");
    assert_eq!(fs::read_to_string(cpp).unwrap(), "class MyApp {};");
    assert!(out.path().join("MyApp/MyApp.uproject").is_file());
}

#[test]
fn missing_target_path_creates_nothing() {
    let out = TempDir::new().unwrap();
    let missing = out.path().join("does-not-exist");
    let service =
        ScaffoldService::new(Box::new(LocalFilesystem::new()), TemplateLayout::default());

    let err = service.validate_target_path(&missing).unwrap_err();

    assert!(matches!(
        err,
        NamerError::Application(ApplicationError::PathNotFound { .. })
    ));
    assert!(!missing.exists());
}

#[test]
fn preview_plans_without_writing() {
    let template = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let tpl = template.path();
    fs::create_dir_all(tpl.join("Source/UnrealSlateAppTemplate")).unwrap();
    fs::write(
        tpl.join("Source/UnrealSlateAppTemplate/x.h"),
        "UnrealSlateAppTemplate",
    )
    .unwrap();
    fs::write(tpl.join("UnrealSlateAppTemplate.uproject"), "{}").unwrap();

    let preview = PreviewFilesystem::new();
    let service = ScaffoldService::new(Box::new(preview.clone()), TemplateLayout::default());
    let request = ScaffoldRequest {
        name: name("Bar"),
        target_path: out.path().to_path_buf(),
        template_root: tpl.to_path_buf(),
    };
    service.scaffold(&request).unwrap();

    let root = out.path().join("Bar");
    assert!(!root.exists());
    assert_eq!(
        preview.planned(),
        vec![
            root.clone(),
            root.join("Bar.uproject"),
            root.join("Source"),
            root.join("Source/Bar"),
            root.join("Source/Bar/x.h"),
        ]
    );
}
