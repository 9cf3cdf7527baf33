use crate::{Error, PatchConfig, PatchStatus, Result, SUCCESS_MSG, Substitution};
use simple_fs::{SPath, read_to_string};
use std::fs;
use std::io::Write;
use tracing::{debug, info};

/// Reads the whole file as UTF-8 text.
pub fn read_content(file_path: &SPath) -> Result<String> {
	let content = read_to_string(file_path).map_err(|err| Error::io_read_file(file_path.as_str(), err))?;
	debug!(file_path = file_path.as_str(), bytes = content.len(), "read file");
	Ok(content)
}

/// Truncates the file and writes `content` in full.
pub fn write_content(file_path: &SPath, content: &str) -> Result<()> {
	fs::write(file_path, content).map_err(|err| Error::io_write_file(file_path.as_str(), err))?;
	debug!(file_path = file_path.as_str(), bytes = content.len(), "wrote file");
	Ok(())
}

/// Reads `file_path`, applies `substitution` to the full text, and writes the result back.
///
/// The write happens even when nothing matched.
pub fn patch_file(file_path: &SPath, substitution: &Substitution) -> Result<PatchStatus> {
	let original = read_content(file_path)?;
	let patched = substitution.apply(&original);

	info!(
		file_path = file_path.as_str(),
		replacements = patched.count,
		pattern = substitution.pattern(),
		"substituted"
	);

	write_content(file_path, &patched.content)?;

	Ok(PatchStatus {
		file_path: file_path.to_string(),
		replacements: patched.count,
		original_len: original.len(),
		patched_len: patched.content.len(),
	})
}

/// Patches the configured file, then writes the confirmation line to `out`.
pub fn run_with(config: &PatchConfig, out: &mut impl Write) -> Result<PatchStatus> {
	let status = patch_file(&config.file_path, &config.substitution)?;
	writeln!(out, "{SUCCESS_MSG}")?;
	Ok(status)
}

/// Patches the listing screen test in the working directory and prints the confirmation line.
pub fn run() -> Result<PatchStatus> {
	let mut stdout = std::io::stdout().lock();
	run_with(&PatchConfig::default(), &mut stdout)
}
