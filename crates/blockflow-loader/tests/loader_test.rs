//! Integration tests for FsFlowRepository and choose_flow against a real directory.

use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};

use blockflow_loader::{
  FixedSelector, FlowFile, FlowRepository, FlowSelector, FsFlowRepository, LoaderError,
  PromptSelector, choose_flow,
};

fn write_flow(dir: &Path, name: &str, content: &str, age_secs: u64) {
  let path = dir.join(name);
  fs::write(&path, content).expect("failed to write flow file");
  let modified = SystemTime::now() - Duration::from_secs(age_secs);
  File::options()
    .write(true)
    .open(&path)
    .and_then(|f| f.set_modified(modified))
    .expect("failed to set mtime");
}

const SCENARIO: &str = r#"{
  "meta": { "projectName": "Demo", "version": "1.0" },
  "blocks": [
    { "id": "a", "type": "giris", "data": { "title": "Start", "body": "Hi" } },
    { "id": "b", "type": "gelisme", "data": { "title": "Mid", "body": "Work" } }
  ],
  "connections": [{ "from": "a", "to": "b" }]
}"#;

#[tokio::test]
async fn test_list_sorts_newest_first_and_filters_extension() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_flow(dir.path(), "old.json", "{}", 300);
  write_flow(dir.path(), "new.json", "{}", 10);
  write_flow(dir.path(), "middle.json", "{}", 100);
  write_flow(dir.path(), "notes.txt", "{}", 1);
  fs::create_dir(dir.path().join("nested.json")).unwrap();

  let repository = FsFlowRepository::new(dir.path());
  let files = repository.list().await.unwrap();

  let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
  assert_eq!(names, vec!["new.json", "middle.json", "old.json"]);
  assert_eq!(files[0].path, dir.path().join("new.json"));
}

#[tokio::test]
async fn test_missing_directory() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  let missing = dir.path().join("json-files");

  let repository = FsFlowRepository::new(&missing);
  let result = repository.list().await;
  assert!(matches!(result, Err(LoaderError::DirectoryNotFound { path }) if path == missing));
}

#[tokio::test]
async fn test_choose_flow_with_empty_directory() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_flow(dir.path(), "readme.md", "", 0);

  let repository = FsFlowRepository::new(dir.path());
  let result = choose_flow(&repository, &mut FixedSelector::new(1)).await;
  assert!(matches!(result, Err(LoaderError::NoFlowFiles { .. })));
}

#[tokio::test]
async fn test_choose_and_load_selected_flow() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_flow(dir.path(), "empty.json", "{}", 10);
  write_flow(dir.path(), "scenario.json", SCENARIO, 60);

  let repository = FsFlowRepository::new(dir.path());
  let mut selector = PromptSelector::new(&b"x\n2\n"[..], Vec::new());
  let file = choose_flow(&repository, &mut selector).await.unwrap();
  assert_eq!(file.name, "scenario.json");

  let menu = String::from_utf8(selector.into_output()).unwrap();
  assert!(menu.contains("[1] empty.json\n[2] scenario.json\n"));

  let document = repository.load(&file.path).await.unwrap();
  assert_eq!(document.meta.display_name(), "Demo");
  assert_eq!(document.blocks.len(), 2);
  assert_eq!(document.connections.len(), 1);
}

#[tokio::test]
async fn test_load_rejects_malformed_json() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_flow(dir.path(), "broken.json", "{ \"blocks\": [", 0);

  let repository = FsFlowRepository::new(dir.path());
  let result = repository.load(&dir.path().join("broken.json")).await;

  let err = result.unwrap_err();
  assert!(matches!(err, LoaderError::Parse { .. }));
  assert!(err.to_string().contains("broken.json"));
}

#[tokio::test]
async fn test_load_rejects_wrong_shape() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_flow(dir.path(), "shape.json", r#"{ "blocks": {} }"#, 0);

  let repository = FsFlowRepository::new(dir.path());
  let result = repository.load(&dir.path().join("shape.json")).await;
  assert!(matches!(result, Err(LoaderError::Parse { .. })));
}

#[tokio::test]
async fn test_load_missing_file() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");

  let repository = FsFlowRepository::new(dir.path());
  let result = repository.load(&dir.path().join("gone.json")).await;
  assert!(matches!(result, Err(LoaderError::Read { .. })));
}

/// Selector that ignores its listing and always returns the same index.
struct OutOfRangeSelector(usize);

impl FlowSelector for OutOfRangeSelector {
  fn select(&mut self, _files: &[FlowFile]) -> Result<usize, LoaderError> {
    Ok(self.0)
  }
}

#[tokio::test]
async fn test_choose_flow_rejects_out_of_range_index() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  write_flow(dir.path(), "a.json", "{}", 20);
  write_flow(dir.path(), "b.json", "{}", 10);

  let repository = FsFlowRepository::new(dir.path());
  let err = choose_flow(&repository, &mut OutOfRangeSelector(2))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    LoaderError::InvalidSelection {
      choice: 3,
      available: 2
    }
  ));

  let file = choose_flow(&repository, &mut OutOfRangeSelector(1))
    .await
    .unwrap();
  assert_eq!(file.name, "a.json");
}
