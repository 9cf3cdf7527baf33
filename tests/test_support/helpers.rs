use super::TestResult;
use simple_fs::{SPath, ensure_dir, read_to_string};
use std::time::{SystemTime, UNIX_EPOCH};

/// Creates a fresh `tests/.out/{prefix}_{now_ms}` directory for one test.
pub fn new_out_dir_path(prefix: &str) -> TestResult<SPath> {
	let now_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
	let dir = SPath::new(format!("tests/.out/{prefix}_{now_ms}"));
	ensure_dir(&dir)?;

	Ok(dir)
}

/// Writes `content` to `file_name` under `dir` and returns the file path.
pub fn write_fixture(dir: &SPath, file_name: &str, content: &str) -> TestResult<SPath> {
	let file_path = dir.join(file_name);
	std::fs::write(&file_path, content)?;

	Ok(file_path)
}

pub fn read_fixture(file_path: &SPath) -> TestResult<String> {
	Ok(read_to_string(file_path)?)
}
