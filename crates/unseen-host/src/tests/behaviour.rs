//! Behavioural tests for the editor lifecycle using `rstest-bdd`.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::tests::support::{TestWorld, strip_quotes, unescape};
use crate::{DocumentId, Outcome, Trigger};

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::new())
}

fn document(value: &str) -> DocumentId {
    DocumentId::new(strip_quotes(value))
}

#[given("an open document {uri} containing {text}")]
fn given_open_document(world: &RefCell<TestWorld>, uri: String, text: String) {
    world
        .borrow_mut()
        .dispatcher
        .host_mut()
        .open(document(&uri), unescape(strip_quotes(&text)));
}

#[given("the document {uri} has focus")]
fn given_focus(world: &RefCell<TestWorld>, uri: String) {
    world
        .borrow_mut()
        .dispatcher
        .host_mut()
        .focus(Some(document(&uri)));
}

#[given("edits to {uri} are rejected")]
fn given_edits_rejected(world: &RefCell<TestWorld>, uri: String) {
    world
        .borrow_mut()
        .dispatcher
        .host_mut()
        .reject_edits(document(&uri));
}

#[when("the extension is activated")]
fn when_activated(world: &RefCell<TestWorld>) {
    world.borrow_mut().dispatch(Trigger::Activated);
}

#[when("the document is about to be saved")]
fn when_will_save(world: &RefCell<TestWorld>) {
    world.borrow_mut().dispatch(Trigger::WillSave);
}

#[when("the clean command runs")]
fn when_clean_command(world: &RefCell<TestWorld>) {
    world.borrow_mut().dispatch(Trigger::CleanCommand);
}

#[when("the document {uri} is closed")]
fn when_closed(world: &RefCell<TestWorld>, uri: String) {
    let closed = document(&uri);
    let mut state = world.borrow_mut();
    state.dispatcher.host_mut().close(&closed);
    state.dispatch(Trigger::DocumentClosed { document: closed });
}

#[when("focus moves to no editor")]
fn when_focus_lost(world: &RefCell<TestWorld>) {
    world
        .borrow_mut()
        .dispatch(Trigger::ActiveEditorChanged { document: None });
}

#[then("{count} finding is published for {uri}")]
fn then_single_published(world: &RefCell<TestWorld>, count: usize, uri: String) {
    assert_eq!(world.borrow().published_count(&document(&uri)), Some(count));
}

#[then("{count} findings are published for {uri}")]
fn then_published(world: &RefCell<TestWorld>, count: usize, uri: String) {
    assert_eq!(world.borrow().published_count(&document(&uri)), Some(count));
}

#[then("finding {ordinal} starts at line {line} column {column}")]
fn then_finding_starts(world: &RefCell<TestWorld>, ordinal: usize, line: u32, column: u32) {
    let state = world.borrow();
    let focused = state
        .dispatcher
        .host()
        .documents()
        .next()
        .map(|(id, _)| id.clone())
        .expect("a document should be open");
    let diagnostic = state
        .dispatcher
        .findings(&focused)
        .get(ordinal.saturating_sub(1))
        .cloned()
        .unwrap_or_else(|| panic!("finding {ordinal} missing"));
    assert_eq!(diagnostic.range.start.line, line);
    assert_eq!(diagnostic.range.start.character, column);
}

#[then("the document {uri} reads {text}")]
fn then_document_reads(world: &RefCell<TestWorld>, uri: String, text: String) {
    let state = world.borrow();
    assert_eq!(
        state.dispatcher.host().text(&document(&uri)),
        Some(unescape(strip_quotes(&text)).as_str())
    );
}

#[then("the dispatch fails")]
fn then_dispatch_fails(world: &RefCell<TestWorld>) {
    assert!(world.borrow().last_error.is_some(), "expected a dispatch error");
}

#[then("no findings are stored")]
fn then_store_empty(world: &RefCell<TestWorld>) {
    assert!(world.borrow().dispatcher.store().is_empty());
}

#[then("the dispatcher is idle")]
fn then_idle(world: &RefCell<TestWorld>) {
    assert_eq!(world.borrow().last_outcome, Some(Outcome::Idle));
}

#[then("nothing is published for {uri}")]
fn then_nothing_published(world: &RefCell<TestWorld>, uri: String) {
    assert_eq!(world.borrow().published_count(&document(&uri)), None);
}

#[scenario(
    path = "tests/features/editor_lifecycle.feature",
    name = "Activation publishes findings for the focused document"
)]
fn activation_publishes_findings(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/editor_lifecycle.feature",
    name = "Positions follow line breaks"
)]
fn positions_follow_line_breaks(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/editor_lifecycle.feature",
    name = "Cleaning removes every invisible character"
)]
fn cleaning_removes_characters(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/editor_lifecycle.feature",
    name = "A rejected clean keeps the findings"
)]
fn rejected_clean_keeps_findings(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/editor_lifecycle.feature",
    name = "Closing a document clears its findings"
)]
fn closing_clears_findings(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/editor_lifecycle.feature",
    name = "Losing focus does nothing"
)]
fn losing_focus_does_nothing(world: RefCell<TestWorld>) {
    drop(world);
}
