use super::*;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use storeshot_prompt::{MockupRecord, PromptRecord, PromptRequest, generate_prompts};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn unique_temp_dir() -> PathBuf {
    let id = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "storeshot-output-test-{}-{}",
        std::process::id(),
        id
    ))
}

#[test]
fn writes_prompts_into_created_directory() {
    let dir = unique_temp_dir().join("nested");
    let mut request = PromptRequest::new("Zen", "Health", "calm in 5 minutes");
    request.count = Some(2);
    let records = generate_prompts(&request).records;

    let path = write_records(&records, WriteOptions::prompts(&dir)).expect("write prompts");
    assert_eq!(path, dir.join(PROMPTS_FILE_NAME));

    let contents = fs::read_to_string(&path).expect("read prompts");
    assert!(contents.starts_with("[\n  {\n    \"index\": 1,"));
    let parsed: Vec<PromptRecord> = serde_json::from_str(&contents).expect("parse prompts");
    assert_eq!(parsed, records);

    fs::remove_dir_all(dir.parent().expect("temp parent")).ok();
}

#[test]
fn mockup_records_use_their_own_file_name() {
    let dir = unique_temp_dir();
    let records = vec![MockupRecord {
        index: 1,
        screen_description: "Home dashboard".to_string(),
        prompt: "Create a 9:16 portrait image.".to_string(),
    }];

    let path = write_records(&records, WriteOptions::mockups(&dir)).expect("write mockups");
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(MOCKUP_PROMPTS_FILE_NAME));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read mockups"))
            .expect("parse mockups");
    assert_eq!(value[0]["screen_description"], "Home dashboard");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn empty_record_set_is_rejected() {
    let dir = unique_temp_dir();
    let records: Vec<PromptRecord> = Vec::new();
    let error = write_records(&records, WriteOptions::prompts(&dir)).expect_err("empty records");
    assert!(matches!(error, OutputError::EmptyRecords));
    assert!(!dir.exists());
}
