//! Unit tests for the CLI runtime.

use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use unseen_config::Config;
use unseen_host::{DocumentId, EditorHost};

use crate::config::ConfigLoader;
use crate::{AppError, OutputFormat, Session, run_with_loader};

struct StaticConfigLoader;

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(Config::default())
    }
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn write(&self, name: &str, text: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(self.dir.path().join(name)).expect("utf-8 path");
        fs::write(&path, text).expect("write fixture");
        path
    }

    fn read(path: &Utf8PathBuf) -> String {
        fs::read_to_string(path).expect("read fixture")
    }
}

#[fixture]
fn workspace() -> Workspace {
    Workspace {
        dir: TempDir::new().expect("temporary directory"),
    }
}

struct Run {
    exit: ExitCode,
    stdout: String,
    stderr: String,
}

fn invoke(args: &[&str]) -> Run {
    let argv = std::iter::once("unseen")
        .chain(args.iter().copied())
        .map(OsString::from);
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let exit = run_with_loader(argv, &mut stdout, &mut stderr, &StaticConfigLoader);
    Run {
        exit,
        stdout: String::from_utf8(stdout).expect("stdout utf-8"),
        stderr: String::from_utf8(stderr).expect("stderr utf-8"),
    }
}

#[rstest]
fn check_reports_each_finding(workspace: Workspace) {
    let path = workspace.write("notes.txt", "A\u{200B}B\nx\u{A0}\u{A0}y\n");

    let run = invoke(&["check", path.as_str()]);

    assert_eq!(run.exit, ExitCode::from(1));
    let lines: Vec<&str> = run.stdout.lines().collect();
    assert_eq!(
        lines,
        [
            format!(
                "{path}:1:2: error: Invalid Character (U+200B zero-width or directional mark) \
                 [invisible_character_mention]"
            ),
            format!(
                "{path}:2:2: error: Invalid Character (U+00A0 no-break space) \
                 [invisible_character_mention]"
            ),
            format!(
                "{path}:2:3: error: Invalid Character (U+00A0 no-break space) \
                 [invisible_character_mention]"
            ),
        ]
    );
    assert!(run.stderr.is_empty());
}

#[rstest]
fn check_passes_clean_files(workspace: Workspace) {
    let path = workspace.write("plain.txt", "tabs\tand\r\nnewlines\n");

    let run = invoke(&["check", path.as_str()]);

    assert_eq!(run.exit, ExitCode::SUCCESS);
    assert!(run.stdout.is_empty());
}

#[rstest]
fn check_emits_json_lines(workspace: Workspace) {
    let path = workspace.write("bom.txt", "\u{FEFF}text");

    let run = invoke(&["check", "--format", "json", path.as_str()]);

    assert_eq!(run.exit, ExitCode::from(1));
    let value: serde_json::Value =
        serde_json::from_str(run.stdout.trim_end()).expect("one JSON object");
    assert_eq!(value["path"], path.as_str());
    assert_eq!(value["line"], 1);
    assert_eq!(value["column"], 1);
    assert_eq!(value["endColumn"], 2);
    assert_eq!(value["codePoint"], "U+FEFF");
    assert_eq!(value["kind"], "byte order mark or reserved");
    assert_eq!(value["code"], "invisible_character_mention");
    assert_eq!(value["severity"], "error");
}

#[rstest]
fn check_reports_duplicate_paths_once(workspace: Workspace) {
    let path = workspace.write("twice.txt", "\u{AD}");

    let run = invoke(&["check", path.as_str(), path.as_str()]);

    assert_eq!(run.stdout.lines().count(), 1);
}

#[rstest]
fn missing_file_is_an_error_but_others_are_checked(workspace: Workspace) {
    let present = workspace.write("present.txt", "\u{2060}");
    let missing = workspace.dir.path().join("missing.txt");
    let missing_text = missing.to_str().expect("utf-8 path");

    let run = invoke(&["check", missing_text, present.as_str()]);

    assert_eq!(run.exit, ExitCode::from(2));
    assert!(run.stderr.contains("failed to read"));
    assert_eq!(run.stdout.lines().count(), 1);
}

#[rstest]
fn check_releases_documents_that_fail_to_dispatch(workspace: Workspace) {
    let present = workspace.write("present.txt", "\u{200D}");
    let mut stderr = Vec::new();
    let mut session = Session::open(&[present], false, &mut stderr);
    let vanished = workspace.dir.path().join("vanished.txt");
    let vanished = Utf8PathBuf::from_path_buf(vanished).expect("utf-8 path");
    let document = DocumentId::new("file:///vanished.txt");
    session.documents.push((document.clone(), vanished));

    let mut stdout = Vec::new();
    session
        .check(OutputFormat::Human, &mut stdout, &mut stderr)
        .expect("reports are written");

    assert_eq!(session.failures, 1);
    assert_eq!(session.findings, 1);
    assert!(session.dispatcher.host().active_document().is_none());
    assert!(session.dispatcher.findings(&document).is_empty());
    let stderr = String::from_utf8(stderr).expect("stderr utf-8");
    assert!(stderr.contains("vanished.txt"));
}

#[rstest]
fn clean_rewrites_files(workspace: Workspace) {
    let dirty = workspace.write("dirty.txt", "x\u{A0}\u{A0}y\r\n\u{202E}z");
    let plain = workspace.write("plain.txt", "nothing here");

    let run = invoke(&["clean", dirty.as_str(), plain.as_str()]);

    assert_eq!(run.exit, ExitCode::SUCCESS);
    assert_eq!(Workspace::read(&dirty), "xy\r\nz");
    assert_eq!(Workspace::read(&plain), "nothing here");
    assert_eq!(
        run.stdout,
        format!(
            "{dirty}: removed 3 invisible character(s)\n{plain}: no invisible characters\n"
        )
    );
}

#[rstest]
fn dry_run_leaves_files_alone(workspace: Workspace) {
    let dirty = workspace.write("dirty.txt", "a\u{200C}b");

    let run = invoke(&["clean", "--dry-run", dirty.as_str()]);

    assert_eq!(run.exit, ExitCode::SUCCESS);
    assert_eq!(Workspace::read(&dirty), "a\u{200C}b");
    assert_eq!(
        run.stdout,
        format!("{dirty}: would remove 1 invisible character(s)\n")
    );
}

#[rstest]
fn cleaned_file_checks_clean(workspace: Workspace) {
    let dirty = workspace.write("dirty.txt", "\u{0007}bell\u{0085}");

    assert_eq!(invoke(&["clean", dirty.as_str()]).exit, ExitCode::SUCCESS);
    let run = invoke(&["check", dirty.as_str()]);

    assert_eq!(run.exit, ExitCode::SUCCESS);
    assert_eq!(Workspace::read(&dirty), "bell\u{0085}");
}

#[rstest]
fn missing_paths_are_a_usage_error() {
    let run = invoke(&["check"]);

    assert_eq!(run.exit, ExitCode::from(2));
    assert!(run.stderr.contains("<PATH>"));
}

#[rstest]
fn help_goes_to_stdout() {
    let run = invoke(&["--help"]);

    assert_eq!(run.exit, ExitCode::SUCCESS);
    assert!(run.stdout.contains("check"));
    assert!(run.stdout.contains("clean"));
}
