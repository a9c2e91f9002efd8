use question_bank_import::config::Config;
use question_bank_import::error::{AppError, BankError, FileError};
use question_bank_import::models::{load_bank, QuestionBank, Taxonomy};
use question_bank_import::orchestrator::App;
use serde_json::{json, Value as JsonValue};
use std::fs;
use std::path::Path;

const MAIN_DB: &str = "questions-polish.json";

fn config_in(dir: &Path, sources: &[&str]) -> Config {
    Config {
        source_files: sources
            .iter()
            .map(|s| dir.join(s).to_string_lossy().to_string())
            .collect(),
        main_db_file: dir.join(MAIN_DB).to_string_lossy().to_string(),
        ..Config::default()
    }
}

fn write_json(dir: &Path, name: &str, value: &JsonValue) {
    fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn q(id: &str, text: &str) -> JsonValue {
    json!({"id": id, "question": text, "answers": ["A", "B", "C", "D"], "correct": 1})
}

fn seed_bank(dir: &Path) {
    write_json(
        dir,
        MAIN_DB,
        &json!({
            "categories": {
                "geografia_polski": {
                    "name": "Geografia Polski",
                    "color": "#228B22",
                    "icon": "🗺️",
                    "questions": [q("a1", "Jaka jest stolica Polski?")]
                }
            }
        }),
    );
}

fn reload(dir: &Path) -> QuestionBank {
    load_bank(&dir.join(MAIN_DB)).unwrap()
}

#[test]
fn test_id_duplicate_dropped_new_record_appended() {
    let dir = tempfile::tempdir().unwrap();
    seed_bank(dir.path());
    write_json(
        dir.path(),
        "dodatkowe-pytania.json",
        &json!([q("a1", "Cokolwiek innego?"), q("a2", "Nowe pytanie?")]),
    );

    let config = config_in(dir.path(), &["dodatkowe-pytania.json"]);
    let mut app = App::initialize(config, Taxonomy::default()).unwrap();
    let summary = app.run().unwrap();

    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.invalid, 0);
    assert!(summary.persisted);

    let bank = reload(dir.path());
    assert_eq!(bank.total_questions(), 2);
    let ids: Vec<&str> = bank
        .questions()
        .filter_map(|q| q.get("id").and_then(JsonValue::as_str))
        .collect();
    assert!(ids.contains(&"a2"));
    assert_eq!(ids.iter().filter(|id| **id == "a1").count(), 1);
}

#[test]
fn test_legacy_bank_records_do_not_block_import() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        MAIN_DB,
        &json!({
            "categories": {
                "geografia_polski": {
                    "name": "Geografia Polski",
                    "color": "#228B22",
                    "icon": "🗺️",
                    "questions": [
                        {"id": "old1", "question": "Stare?", "correct": 0},
                        {"id": "old2", "question": "Bez odpowiedzi", "difficulty": 3}
                    ]
                }
            }
        }),
    );
    write_json(
        dir.path(),
        "src.json",
        &json!([q("old1", "Inna treść?"), q("geo_9", "stare"), q("geo_10", "Świeże pytanie?")]),
    );

    let config = config_in(dir.path(), &["src.json"]);
    let summary = App::initialize(config, Taxonomy::default())
        .unwrap()
        .run()
        .unwrap();

    // 旧记录参与查重：old1 按 ID、geo_9 按题干被跳过
    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.skipped, 2);

    let bank = reload(dir.path());
    let records = &bank.categories["geografia_polski"].questions;
    assert_eq!(records.len(), 3);
    assert_eq!(
        JsonValue::Object(records[0].clone()),
        json!({"id": "old1", "question": "Stare?", "correct": 0})
    );
    assert_eq!(records[1].get("difficulty"), Some(&json!(3)));
    assert_eq!(records[2].get("id"), Some(&json!("geo_10")));
}

#[test]
fn test_merge_keeps_null_fields_and_key_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(MAIN_DB),
        r##"{
  "categories": {
    "geografia_polski": {
      "name": "Geografia Polski",
      "color": "#228B22",
      "icon": "🗺️",
      "questions": [
        {"category": "geo", "id": "a1", "question": "Stolica?", "answers": ["A", "B", "C", "D"], "correct": 0, "image": null}
      ]
    }
  }
}"##,
    )
    .unwrap();
    fs::write(
        dir.path().join("src.json"),
        r#"[{"question": "Gdzie leży Hel?", "id": "geo_2", "explanation": null, "answers": ["A", "B", "C", "D"], "correct": 2, "source": "atlas"}]"#,
    )
    .unwrap();

    let config = config_in(dir.path(), &["src.json"]);
    App::initialize(config.clone(), Taxonomy::default())
        .unwrap()
        .run()
        .unwrap();

    let text = fs::read_to_string(&config.main_db_file).unwrap();
    let saved: JsonValue = serde_json::from_str(&text).unwrap();
    let questions = saved["categories"]["geografia_polski"]["questions"]
        .as_array()
        .unwrap();
    let keys = |value: &JsonValue| -> Vec<String> {
        value.as_object().unwrap().keys().cloned().collect()
    };

    assert_eq!(
        keys(&questions[0]),
        vec!["category", "id", "question", "answers", "correct", "image"]
    );
    assert_eq!(questions[0]["image"], JsonValue::Null);
    assert_eq!(
        keys(&questions[1]),
        vec!["question", "id", "explanation", "answers", "correct", "source"]
    );
    assert_eq!(questions[1]["explanation"], JsonValue::Null);
    assert!(text.contains("\"image\": null"));
    assert!(text.contains("\"explanation\": null"));
}

#[test]
fn test_backup_matches_main_after_run() {
    let dir = tempfile::tempdir().unwrap();
    seed_bank(dir.path());
    write_json(dir.path(), "src.json", &json!([q("geo_2", "Gdzie leży Hel?")]));

    let config = config_in(dir.path(), &["src.json"]);
    App::initialize(config.clone(), Taxonomy::default())
        .unwrap()
        .run()
        .unwrap();

    let main = fs::read_to_string(&config.main_db_file).unwrap();
    let backup = fs::read_to_string(config.backup_file()).unwrap();
    assert_eq!(main, backup);
    assert!(main.contains("Gdzie leży Hel?"));
    assert!(main.contains("🗺️"));
}

#[test]
fn test_all_distinct_records_accepted_count_preserved() {
    let dir = tempfile::tempdir().unwrap();
    seed_bank(dir.path());
    write_json(
        dir.path(),
        "one.json",
        &json!([q("geo_10", "Pierwsze?"), q("sci_1", "Ile atomów?")]),
    );
    write_json(
        dir.path(),
        "two.json",
        &json!({"questions": [q("hist_world_1", "Kiedy upadł Rzym?"), q("geo_world_1", "Największy ocean?")]}),
    );

    let config = config_in(dir.path(), &["one.json", "two.json"]);
    let summary = App::initialize(config, Taxonomy::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.accepted, 4);
    assert_eq!(summary.merge.total_added(), 4);
    let bank = reload(dir.path());
    assert_eq!(bank.total_questions(), 5);
    // 三个模板分类被自动创建
    for category in ["nauka_polska", "historia_swiata", "geografia_swiata"] {
        assert!(bank.categories.contains_key(category), "{}", category);
    }
}

#[test]
fn test_cross_file_near_duplicate_and_invalid() {
    let dir = tempfile::tempdir().unwrap();
    seed_bank(dir.path());
    write_json(dir.path(), "one.json", &json!([q("geo_3", "Gdzie jest Giewont?")]));
    write_json(
        dir.path(),
        "two.json",
        &json!([
            q("geo_4", "gdzie jest giewont"),
            q("geo_5", "  JAKA JEST STOLICA POLSKI  "),
            {"id": "geo_6", "question": "Bez odpowiedzi", "correct": 4}
        ]),
    );

    let config = config_in(dir.path(), &["one.json", "two.json", "missing.json"]);
    let summary = App::initialize(config, Taxonomy::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.invalid, 1);
    assert_eq!(reload(dir.path()).total_questions(), 2);
}

#[test]
fn test_unknown_category_records_dropped() {
    let dir = tempfile::tempdir().unwrap();
    seed_bank(dir.path());
    write_json(
        dir.path(),
        "src.json",
        &json!([q("sport_1", "Kto wygrał?"), q("geo_7", "Najwyższy szczyt Tatr?")]),
    );

    let config = config_in(dir.path(), &["src.json"]);
    let summary = App::initialize(config, Taxonomy::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.merge.total_added(), 1);
    assert_eq!(summary.merge.dropped.get("sport_polski"), Some(&1));
    let bank = reload(dir.path());
    assert!(!bank.categories.contains_key("sport_polski"));
    assert_eq!(bank.total_questions(), 2);
}

#[test]
fn test_substituted_taxonomy_creates_custom_category() {
    let dir = tempfile::tempdir().unwrap();
    seed_bank(dir.path());
    write_json(dir.path(), "src.json", &json!([q("sport_1", "Kto wygrał?")]));

    let mut taxonomy = Taxonomy::default();
    taxonomy.templates.insert(
        "sport_polski".to_string(),
        question_bank_import::models::CategoryTemplate {
            name: "Sport Polski".to_string(),
            color: "#FF4500".to_string(),
            icon: "⚽".to_string(),
        },
    );

    let config = config_in(dir.path(), &["src.json"]);
    let mut app = App::initialize(config, taxonomy).unwrap();
    app.run().unwrap();

    assert_eq!(app.bank().categories["sport_polski"].questions.len(), 1);
    assert_eq!(reload(dir.path()).categories["sport_polski"].icon, "⚽");
}

#[test]
fn test_nothing_new_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    seed_bank(dir.path());
    write_json(dir.path(), "src.json", &json!([q("a1", "Powtórka")]));

    let config = config_in(dir.path(), &["src.json"]);
    let summary = App::initialize(config.clone(), Taxonomy::default())
        .unwrap()
        .run()
        .unwrap();

    assert!(!summary.persisted);
    assert!(!Path::new(&config.backup_file()).exists());
}

#[test]
fn test_missing_or_empty_bank_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), &[]);
    assert!(matches!(
        App::initialize(config.clone(), Taxonomy::default()),
        Err(AppError::File(FileError::NotFound { .. }))
    ));

    fs::write(&config.main_db_file, "{}").unwrap();
    assert!(matches!(
        App::initialize(config, Taxonomy::default()),
        Err(AppError::Bank(BankError::Empty { .. }))
    ));
}

#[test]
fn test_persistence_failure_is_error() {
    let dir = tempfile::tempdir().unwrap();
    seed_bank(dir.path());
    write_json(dir.path(), "src.json", &json!([q("geo_8", "Nowe?")]));

    let mut config = config_in(dir.path(), &["src.json"]);
    config.backup_suffix = "/nested/backup".to_string();

    let mut app = App::initialize(config, Taxonomy::default()).unwrap();
    assert!(matches!(
        app.run(),
        Err(AppError::File(FileError::WriteFailed { .. }))
    ));
    // 主文件未被覆盖
    assert_eq!(reload(dir.path()).total_questions(), 1);
}
