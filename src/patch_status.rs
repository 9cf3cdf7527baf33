/// What one patch run did to its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchStatus {
	pub file_path: String,
	pub replacements: usize,
	pub original_len: usize,
	pub patched_len: usize,
}

impl PatchStatus {
	pub fn file_path(&self) -> &str {
		&self.file_path
	}

	pub fn replacements(&self) -> usize {
		self.replacements
	}

	/// False when the pattern did not occur. The file is still rewritten in that case.
	pub fn changed(&self) -> bool {
		self.replacements > 0
	}

	pub fn removed_bytes(&self) -> usize {
		self.original_len.saturating_sub(self.patched_len)
	}
}
