//! Request files answered through the command layer.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser as _;
use riddle_cli::{
    command::{self, CommandArgs, CommandError},
    dto::{self, AdapterError, RiddleRequest},
};
use riddle_generator::{RiddleGenerator, RiddleOptions, RiddleSeed};

fn write_request(name: &str, payload: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("riddle-cli-{}-{name}.json", std::process::id()));
    fs::write(&path, payload).unwrap();
    path
}

fn run_request(path: &Path) -> Result<(), CommandError> {
    let args = CommandArgs::parse_from(["riddle", "--request", path.to_str().unwrap()]);
    command::run(&args)
}

#[test]
fn test_valid_request_file() {
    let path = write_request("valid", r#"{"options": {"size": 4, "secrets": 1}}"#);
    let result = run_request(&path);
    fs::remove_file(&path).unwrap();
    result.unwrap();
}

#[test]
fn test_invalid_request_file() {
    let path = write_request("invalid", r#"{"options": {"secrets": 25}}"#);
    let result = run_request(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(
        result,
        Err(CommandError::Adapter(AdapterError::Options(_)))
    ));
}

#[test]
fn test_request_honors_max_tries() {
    let generator = RiddleGenerator::new(RiddleOptions::default()).unwrap();
    let failing = (0..200)
        .map(RiddleSeed::from)
        .find(|&seed| generator.generate_with_seed(seed).is_err())
        .unwrap();
    let payload = format!(r#"{{"options": {{"seed": "{failing}"}}}}"#);
    let path = write_request("max-tries", &payload);
    let args = CommandArgs::parse_from([
        "riddle",
        "--request",
        path.to_str().unwrap(),
        "--max-tries",
        "1",
    ]);
    let result = command::run(&args);
    fs::remove_file(&path).unwrap();
    assert!(matches!(
        result,
        Err(CommandError::Adapter(AdapterError::Generation(_)))
    ));
}

#[test]
fn test_request_serializes_only_set_fields() {
    let request: RiddleRequest =
        serde_json::from_str(r#"{"options": {"categories": 3}}"#).unwrap();
    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"options":{"categories":3}}"#
    );
}

#[test]
fn test_secrets_become_questions() {
    let payload = r#"{"options": {"size": 6, "categories": 6, "secrets": 3}}"#;
    let response = dto::handle_request(payload).unwrap();
    assert_eq!(response.questions.len(), 3);
    for question in &response.questions {
        assert!(question.starts_with("Where is ") && question.ends_with(" ?"));
    }
}
