//! Edge case and error handling tests for replant


use harness::{TestTree, run_replant};

#[test]
fn test_empty_tree() {
    let tree = TestTree::new();
    std::fs::create_dir(tree.path().join("src")).unwrap();

    let (stdout, _stderr, success) = run_replant(tree.path(), &[]);
    assert!(success, "empty tree should succeed");
    assert!(
        stdout.contains("0 files scanned"),
        "summary should report zero files: {}",
        stdout
    );
}

#[test]
fn test_deeply_nested_files() {
    let tree = TestTree::new();
    tree.add_file(
        "src/components/Kanban/Board/Column/Column.tsx",
        "import Card from '@/components/KanbanCard';\n",
    );

    let (_stdout, _stderr, success) = run_replant(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        tree.read_file("src/components/Kanban/Board/Column/Column.tsx"),
        "import Card from '@/components/KanbanCard/KanbanCard';\n"
    );
}

#[test]
fn test_readonly_noop_file_does_not_abort() {
    let tree = TestTree::new();
    let path = tree.add_file("src/types.ts", "export interface User {}\n");

    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(&path, perms.clone()).unwrap();

    let (_stdout, _stderr, success) = run_replant(tree.path(), &[]);
    assert!(success, "no-op file is never opened for writing");

    perms.set_readonly(false);
    std::fs::set_permissions(&path, perms).unwrap();
}

#[cfg(unix)]
#[test]
fn test_readonly_changed_file_aborts_run() {
    let tree = TestTree::new();
    let path = tree.add_file("src/App.tsx", "import Foo from '@/components/Foo';\n");

    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(&path, perms.clone()).unwrap();

    // Permission bits don't bind root; nothing to observe in that case.
    if std::fs::OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    let (_stdout, stderr, success) = run_replant(tree.path(), &[]);
    assert!(!success, "unwritable changed file should abort the run");
    assert!(
        stderr.contains("cannot rewrite"),
        "stderr should name the failure: {}",
        stderr
    );

    perms.set_readonly(false);
    std::fs::set_permissions(&path, perms).unwrap();
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_aborts_but_keeps_earlier_rewrites() {
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::new();
    tree.add_file("src/a_first.ts", "import Foo from '@/components/Foo';\n");
    let locked = tree.add_file("src/b_locked.ts", "import Bar from '@/pages/Bar';\n");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits don't bind root; nothing to observe in that case.
    if std::fs::read_to_string(&locked).is_ok() {
        return;
    }

    let (_stdout, stderr, success) = run_replant(tree.path(), &[]);
    assert!(!success, "unreadable file should abort the run");
    assert!(stderr.contains("cannot rewrite"), "stderr: {}", stderr);
    // Files processed before the failure are not rolled back.
    assert_eq!(
        tree.read_file("src/a_first.ts"),
        "import Foo from '@/components/Foo/Foo';\n"
    );

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o644)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_skipped() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_file("src/real.ts", "import Foo from '@/components/Foo';\n");
    symlink(
        tree.path().join("src/real.ts"),
        tree.path().join("src/link.ts"),
    )
    .unwrap();

    let (stdout, _stderr, success) = run_replant(tree.path(), &[]);
    assert!(success);
    assert!(
        stdout.contains("1 files scanned"),
        "symlink should not be scanned: {}",
        stdout
    );
}

#[test]
fn test_hidden_file_skipped_by_default_visited_with_all() {
    let tree = TestTree::new();
    let content = "import Foo from '@/components/Foo';\n";
    tree.add_file("src/.hidden.tsx", content);

    let (_stdout, _stderr, success) = run_replant(tree.path(), &[]);
    assert!(success);
    assert_eq!(tree.read_file("src/.hidden.tsx"), content);

    let (_stdout, _stderr, success) = run_replant(tree.path(), &["-a"]);
    assert!(success);
    assert_eq!(
        tree.read_file("src/.hidden.tsx"),
        "import Foo from '@/components/Foo/Foo';\n"
    );
}

#[test]
fn test_crlf_content_preserved() {
    let tree = TestTree::new();
    tree.add_file(
        "src/win.ts",
        "import Foo from '@/components/Foo';\r\nexport {};\r\n",
    );

    let (_stdout, _stderr, success) = run_replant(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        tree.read_file("src/win.ts"),
        "import Foo from '@/components/Foo/Foo';\r\nexport {};\r\n"
    );
}

#[test]
fn test_import_on_same_line_as_code() {
    // The pattern is substring-based, not line-based.
    let tree = TestTree::new();
    tree.add_file(
        "src/oneline.ts",
        "import A from '@/components/A'; import B from '@/hooks/useB';\n",
    );

    let (_stdout, _stderr, success) = run_replant(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        tree.read_file("src/oneline.ts"),
        "import A from '@/components/A/A'; import B from '@/hooks/useB/useB';\n"
    );
}

#[test]
fn test_export_from_is_also_rewritten() {
    // Re-exports share the `from '@/...'` shape, so they are rewritten too.
    let tree = TestTree::new();
    tree.add_file(
        "src/index.ts",
        "export { Badge } from '@/components/Badge';\n",
    );

    let (_stdout, _stderr, success) = run_replant(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        tree.read_file("src/index.ts"),
        "export { Badge } from '@/components/Badge/Badge';\n"
    );
}

mod cli {
    //! CLI-surface assertions via assert_cmd

    use assert_cmd::Command;
    use predicates::prelude::*;

    use super::harness::TestTree;

    #[test]
    fn test_missing_root_error_message() {
        let tree = TestTree::new();

        Command::cargo_bin("replant")
            .unwrap()
            .current_dir(tree.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot access 'src'"));
    }

    #[test]
    fn test_version_flag() {
        Command::cargo_bin("replant")
            .unwrap()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("replant"));
    }

    #[test]
    fn test_help_mentions_flags() {
        Command::cargo_bin("replant")
            .unwrap()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--json"))
            .stdout(predicate::str::contains("--ignore"));
    }

    #[test]
    fn test_json_summary_for_empty_tree() {
        let tree = TestTree::new();
        std::fs::create_dir(tree.path().join("src")).unwrap();

        Command::cargo_bin("replant")
            .unwrap()
            .arg("--json")
            .current_dir(tree.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("\"scanned\": 0"));
    }
}
