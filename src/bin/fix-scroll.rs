use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// -- Logging (stderr only, stdout carries the confirmation line)
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	// -- Patch
	let status = scroll_fix::run()?;
	tracing::debug!(
		file_path = status.file_path(),
		replacements = status.replacements(),
		removed_bytes = status.removed_bytes(),
		"done"
	);

	Ok(())
}
