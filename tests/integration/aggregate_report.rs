//! Integration tests for report contents

use super::test_utils::{example_tree, screens_dir, write_file, EXAMPLE_REPORT};
use gather::{aggregate, AggregateError, Aggregator, AggregatorConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_example_tree_report() {
    let temp = TempDir::new().unwrap();
    let screens = example_tree(&temp);
    let output = temp.path().join("codeFiles.txt");

    aggregate(&screens, &output).unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert_eq!(report, EXAMPLE_REPORT);
    assert!(!report.contains("firebase_options.dart"));
    assert!(!report.contains("ignored"));
}

#[test]
fn test_missing_marker_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let start = temp.path().join("some_other_app").join("lib");
    write_file(&start, "main.dart", "void main(){}");
    let output = temp.path().join("codeFiles.txt");

    let err = aggregate(&start, &output).unwrap_err();
    assert!(matches!(err, AggregateError::Configuration { .. }));
    assert!(!output.exists(), "no report may be written");
}

#[test]
fn test_ignored_file_excluded_in_every_directory() {
    let temp = TempDir::new().unwrap();
    let screens = screens_dir(&temp);
    write_file(&screens, "firebase_options.dart", "secret");
    write_file(&screens, "a/firebase_options.dart", "secret");
    write_file(&screens, "a/b/firebase_options.dart", "secret");
    write_file(&screens, "a/b/view.dart", "class View {}");
    let output = temp.path().join("out.txt");

    let summary = aggregate(&screens, &output).unwrap();
    assert_eq!(summary.ignored_files, 3);

    let report = fs::read_to_string(&output).unwrap();
    assert!(!report.contains("secret"));
    assert!(report.contains("roohbaru_app/lib/screens/a/b/view.dart: [\nclass View {}\n]\n\n"));
    // Folders holding only ignored files get the placeholder
    assert!(report.contains("roohbaru_app/lib/screens/a: no code files are added in this folder yet\n\n"));
}

#[test]
fn test_extension_filter() {
    let temp = TempDir::new().unwrap();
    let screens = screens_dir(&temp);
    write_file(&screens, "x.txt", "plain text");
    write_file(&screens, "x.dart", "dart code");
    let output = temp.path().join("out.txt");

    aggregate(&screens, &output).unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(!report.contains("x.txt"));
    assert!(report.contains("roohbaru_app/lib/screens/x.dart: [\ndart code\n]\n\n"));
}

#[test]
fn test_placeholder_has_no_file_blocks() {
    let temp = TempDir::new().unwrap();
    let screens = screens_dir(&temp);
    write_file(&screens, "assets/logo.png", [0x89, 0x50, 0x4e, 0x47]);
    write_file(&screens, "assets/readme.md", "# assets");
    let output = temp.path().join("out.txt");

    aggregate(&screens, &output).unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains(
        "roohbaru_app/lib/screens/assets: no code files are added in this folder yet\n\n"
    ));
    assert!(!report.contains("logo.png"));
    assert!(!report.contains("readme.md"));
}

#[test]
fn test_block_format() {
    let temp = TempDir::new().unwrap();
    let screens = screens_dir(&temp);
    write_file(&screens, "foo.py", "print(1)");
    let output = temp.path().join("out.txt");

    aggregate(&screens, &output).unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("roohbaru_app/lib/screens/foo.py: [\nprint(1)\n]\n\n"));
}

#[test]
fn test_repeat_runs_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    let screens = example_tree(&temp);
    write_file(&screens, "settings/settings.dart", "class Settings {}\n");
    write_file(&screens, "settings/theme.css", "body { margin: 0; }\n");
    let output = temp.path().join("out.txt");

    aggregate(&screens, &output).unwrap();
    let first = fs::read(&output).unwrap();
    aggregate(&screens, &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_existing_report_is_overwritten() {
    let temp = TempDir::new().unwrap();
    let screens = example_tree(&temp);
    let output = temp.path().join("out.txt");
    fs::write(&output, "left over from an older run\n".repeat(100)).unwrap();

    aggregate(&screens, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), EXAMPLE_REPORT);
}

#[test]
fn test_unreadable_file_is_omitted_but_run_completes() {
    let temp = TempDir::new().unwrap();
    let screens = screens_dir(&temp);
    write_file(&screens, "a.dart", "class A {}");
    write_file(&screens, "b.dart", [0xff, 0xfe, 0xfd]);
    write_file(&screens, "c.dart", "class C {}");
    let output = temp.path().join("out.txt");

    let summary = aggregate(&screens, &output).unwrap();
    assert_eq!(summary.qualifying_files, 3);
    assert_eq!(summary.files_written, 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].path, "roohbaru_app/lib/screens/b.dart");

    let report = fs::read_to_string(&output).unwrap();
    assert_eq!(
        report,
        "roohbaru_app/lib/screens/a.dart: [\nclass A {}\n]\n\n\
         roohbaru_app/lib/screens/c.dart: [\nclass C {}\n]\n\n"
    );
}

#[test]
fn test_traversal_is_preorder_with_sorted_siblings() {
    let temp = TempDir::new().unwrap();
    let screens = screens_dir(&temp);
    write_file(&screens, "z.js", "z");
    write_file(&screens, "b/inner.ts", "b");
    write_file(&screens, "a.js", "a");
    write_file(&screens, "a_dir/deep/x.java", "x");

    let output = temp.path().join("out.txt");
    aggregate(&screens, &output).unwrap();
    let report = fs::read_to_string(&output).unwrap();

    let labels: Vec<&str> = report
        .split("\n\n")
        .filter_map(|block| block.split(':').next())
        .filter(|label| label.starts_with("roohbaru_app"))
        .collect();
    assert_eq!(
        labels,
        vec![
            "roohbaru_app/lib/screens/a.js",
            "roohbaru_app/lib/screens/z.js",
            "roohbaru_app/lib/screens/a_dir",
            "roohbaru_app/lib/screens/a_dir/deep/x.java",
            "roohbaru_app/lib/screens/b/inner.ts",
        ]
    );
}

#[test]
fn test_custom_configuration() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("my_crate").join("src");
    write_file(&src, "lib.rs", "pub fn f() {}");
    write_file(&src, "build.rs", "fn main() {}");
    write_file(&src, "main.dart", "void main(){}");
    let output = temp.path().join("snapshot.txt");

    let config = AggregatorConfig {
        allowed_extensions: vec![".rs".to_string()],
        ignored_file_names: vec!["build.rs".to_string()],
        root_marker: "my_crate".to_string(),
        output_file: output.clone(),
    };
    let summary = Aggregator::new(config).aggregate(&src).unwrap();

    assert_eq!(summary.files_written, 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "my_crate/src/lib.rs: [\npub fn f() {}\n]\n\n"
    );
}

#[test]
fn test_line_endings_are_normalized() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("roohbaru_app").join("lib");
    write_file(&root, "a.dart", "line1\r\nline2\rline3");
    let output = temp.path().join("out.txt");

    aggregate(&root, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "roohbaru_app/lib/a.dart: [\nline1\nline2\nline3\n]\n\n"
    );
}

#[cfg(unix)]
#[test]
fn test_unlistable_folder_gets_no_placeholder() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let screens = screens_dir(&temp);
    write_file(&screens, "home.dart", "class Home {}");
    write_file(&screens, "locked/secret.dart", "class Secret {}");
    let locked = screens.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still list the folder
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let output = temp.path().join("out.txt");
    let result = aggregate(&screens, &output);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let summary = result.unwrap();

    assert_eq!(
        summary.unreadable_directories,
        vec!["roohbaru_app/lib/screens/locked".to_string()]
    );
    assert!(!summary.is_complete());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "roohbaru_app/lib/screens/home.dart: [\nclass Home {}\n]\n\n"
    );
}
