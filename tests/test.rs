use lazy_static::lazy_static;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tiger_complete::{
    analyze_at, complete, compute_block_path, find_settings, take_reports, Candidate,
    CandidateKind, CompletionOptions, ContextType, EntityKind, InsertFormat, LogReport,
    ModifierCategory, Registry, Settings,
};

lazy_static! {
    static ref TEST_MUTEX: Mutex<()> = Mutex::new(());
}

/// Marks the cursor position in the fixture files.
const CURSOR: char = '‸';

struct Fixture {
    lines: Vec<String>,
    line: usize,
    column: usize,
    entity: String,
}

fn load_fixture(pathname: &str) -> Fixture {
    let path = PathBuf::from(pathname);
    let contents = read_to_string(&path).unwrap();
    let mut cursor = None;
    let mut lines = Vec::new();
    for (nr, line) in contents.lines().enumerate() {
        if let Some(pos) = line.find(CURSOR) {
            cursor = Some((nr, line[..pos].chars().count()));
        }
        lines.push(line.replace(CURSOR, ""));
    }
    let (line, column) = cursor.expect("fixture has a cursor marker");
    let entity = EntityKind::from_path(&path).expect("fixture path has an entity type").to_string();
    Fixture { lines, line, column, entity }
}

fn complete_fixture(pathname: &str) -> Vec<Candidate> {
    let fixture = load_fixture(pathname);
    complete(
        Registry::builtin(),
        &fixture.lines,
        fixture.line,
        fixture.column,
        &fixture.entity,
        &CompletionOptions::default(),
    )
}

fn find<'a>(candidates: &'a [Candidate], label: &str) -> Option<&'a Candidate> {
    candidates.iter().find(|c| c.label == label)
}

fn take_report(vec: &mut Vec<LogReport>, pathname: &Path, msg_contains: &str) -> Option<LogReport> {
    for (i, report) in vec.iter().enumerate() {
        if report.msg.contains(msg_contains) && report.pointers[0].loc.pathname() == pathname {
            let result = (*report).clone();
            vec.remove(i);
            return Some(result);
        }
    }
    None
}

#[test]
fn test_trait_modifier_block() {
    let fixture = load_fixture("tests/files/common/traits/scenario1.txt");
    assert_eq!(fixture.entity, "trait");
    let block_path = compute_block_path(&fixture.lines, fixture.line, fixture.column);
    assert_eq!(block_path.depth, 2);
    assert_eq!(block_path.path, vec!["modifier"]);

    let context = analyze_at(
        Registry::builtin(),
        &fixture.lines,
        fixture.line,
        fixture.column,
        &fixture.entity,
    )
    .unwrap();
    assert_eq!(context.modifier_category, Some(ModifierCategory::Character));

    let candidates = complete_fixture("tests/files/common/traits/scenario1.txt");
    assert!(!candidates.is_empty());
    assert!(candidates.iter().all(|c| c.kind == CandidateKind::Modifier));
    assert!(find(&candidates, "diplomacy").is_some());
    assert!(find(&candidates, "development_growth").is_none());
    assert!(find(&candidates, "category").is_none());
}

#[test]
fn test_event_option() {
    let candidates = complete_fixture("tests/files/events/scenario2.txt");
    let name = find(&candidates, "name").expect("option field");
    assert_eq!(name.kind, CandidateKind::Field);
    let add_gold = find(&candidates, "add_gold").expect("character effect");
    assert_eq!(add_gold.kind, CandidateKind::Effect);
    assert_eq!(add_gold.insert_text, "add_gold = ${1:0.0}");
    assert!(find(&candidates, "add_building").is_none());
    assert!(find(&candidates, "age").is_none());
}

#[test]
fn test_block_value() {
    let candidates = complete_fixture("tests/files/common/scripted_effects/scenario3.txt");
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].label, "{ }");
    assert_eq!(candidates[0].insert_format, InsertFormat::Snippet);
}

#[test]
fn test_unknown_scope() {
    let fixture = load_fixture("tests/files/common/scripted_effects/scenario4.txt");
    let context = analyze_at(
        Registry::builtin(),
        &fixture.lines,
        fixture.line,
        fixture.column,
        &fixture.entity,
    )
    .unwrap();
    assert!(context.unknown_scope);
    assert_eq!(context.context_type, ContextType::Effect);

    let candidates = complete_fixture("tests/files/common/scripted_effects/scenario4.txt");
    assert!(find(&candidates, "add_gold").is_some());
    assert!(find(&candidates, "add_building").is_some());
    assert!(find(&candidates, "change_development_level").is_some());

    let candidates = complete_fixture("tests/files/common/scripted_effects/province_scope.txt");
    assert!(find(&candidates, "add_gold").is_none());
    assert!(find(&candidates, "add_building").is_some());
}

#[test]
fn test_block_snippet_opens_block() {
    let mut lines = vec!["befriend_effect = {".to_owned(), "\tadd_opinion = ".to_owned()];
    let before = compute_block_path(&lines, 1, 15);
    let candidates =
        complete(Registry::builtin(), &lines, 1, 15, "scripted_effect", &CompletionOptions::default());
    assert_eq!(candidates.len(), 1);

    // Type the snippet, and put the cursor where its `$0` was.
    let typed = format!("{}{}", lines[1], candidates[0].insert_text);
    let mut new_lines: Vec<String> = typed.split('\n').map(str::to_owned).collect();
    let cursor_line = new_lines.iter().position(|l| l.contains("$0")).unwrap();
    let cursor_column = new_lines[cursor_line].find("$0").unwrap();
    new_lines[cursor_line] = new_lines[cursor_line].replace("$0", "");
    lines.truncate(1);
    lines.extend(new_lines);

    let after = compute_block_path(&lines, 1 + cursor_line, cursor_column);
    assert_eq!(after.depth, before.depth + 1);
    let mut expected = before.path.clone();
    expected.push("add_opinion".to_owned());
    assert_eq!(after.path, expected);

    // Inside the new block, only the fields of add_opinion are offered.
    let candidates = complete(
        Registry::builtin(),
        &lines,
        1 + cursor_line,
        cursor_column,
        "scripted_effect",
        &CompletionOptions::default(),
    );
    assert!(find(&candidates, "target").is_some());
    assert!(find(&candidates, "add_gold").is_none());
}

#[test]
fn test_whole_document_rescan() {
    let fixture = load_fixture("tests/files/common/scripted_effects/scenario4.txt");
    let first = compute_block_path(&fixture.lines, fixture.line, fixture.column);
    let second = compute_block_path(&fixture.lines, fixture.line, fixture.column);
    assert_eq!(first, second);
    let end = compute_block_path(&fixture.lines, fixture.lines.len(), 0);
    assert_eq!(end.depth, 0);
    assert!(end.path.is_empty());
}

#[test]
fn test_settings_and_extensions() {
    let _guard = TEST_MUTEX.lock().unwrap();
    take_reports();

    let settings_path =
        find_settings(Path::new("tests/files/common/traits/scenario1.txt")).expect("settings file");
    assert_eq!(settings_path, PathBuf::from("tests/files/ck3-complete.toml"));
    let settings = Settings::load(&settings_path).unwrap();
    assert_eq!(settings.max_enum_choices, 3);
    assert_eq!(settings.schema_extensions, vec![PathBuf::from("tests/files/schema/extra.json")]);

    let mut registry = Registry::builtin().clone();
    settings.load_extensions(&mut registry).unwrap();

    let mut reports = take_reports();
    take_report(&mut reports, &settings_path, "unknown setting `colour`")
        .expect("unknown setting report");
    let extension = PathBuf::from("tests/files/schema/extra.json");
    take_report(&mut reports, &extension, "unknown entity type `not_an_entity`")
        .expect("unknown entity report");
    take_report(&mut reports, &extension, "`add_gold` replaces the built-in definition")
        .expect("override report");
    assert!(reports.is_empty(), "unexpected reports: {reports:?}");

    let fixture = load_fixture("tests/files/common/traits/scenario1.txt");
    let lines = vec![fixture.lines[0].clone(), "\tsorting".to_owned()];
    let candidates =
        complete(&registry, &lines, 1, 8, "trait", &settings.completion_options());
    let field = find(&candidates, "sorting_priority").expect("field from extension");
    assert_eq!(field.insert_text, "sorting_priority = ${1:0}");

    let lines = vec![fixture.lines[0].clone(), "\tcategory = ".to_owned()];
    let candidates = complete(&registry, &lines, 1, 12, "trait", &settings.completion_options());
    assert!(find(&candidates, "personality").is_some());

    assert!(registry.triggers().contains("is_my_mod_loaded"));
    assert!(!Registry::builtin().triggers().contains("is_my_mod_loaded"));
}

#[test]
fn test_missing_settings_file() {
    let _guard = TEST_MUTEX.lock().unwrap();
    assert!(Settings::load(Path::new("tests/files/no_such_file.toml")).is_err());
    let mut registry = Registry::builtin().clone();
    assert!(registry.load_extension(Path::new("tests/files/schema/missing.json")).is_err());
}
