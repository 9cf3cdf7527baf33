use crate::Substitution;
use simple_fs::SPath;

/// Instrumented test file rewritten by `run`, relative to the working directory.
pub const TARGET_PATH: &str = "app/src/androidTest/java/com/android/sample/screen/ListingScreenTest.kt";

pub const SCROLL_THEN_CLICK: &str = ".performScrollTo().performClick()";

pub const CLICK: &str = ".performClick()";

pub const SUCCESS_MSG: &str = "Fixed all performScrollTo() calls";

/// The explicit parameters of one patch run.
///
/// `PatchConfig::default()` is the only value the binary ever uses.
#[derive(Debug, Clone)]
pub struct PatchConfig {
	pub file_path: SPath,
	pub substitution: Substitution,
}

impl PatchConfig {
	pub fn new(file_path: impl Into<SPath>, substitution: Substitution) -> Self {
		Self {
			file_path: file_path.into(),
			substitution,
		}
	}

	/// Same substitution, different file. Used to point the run at a fixture.
	pub fn with_file_path(mut self, file_path: impl Into<SPath>) -> Self {
		self.file_path = file_path.into();
		self
	}
}

impl Default for PatchConfig {
	fn default() -> Self {
		Self {
			file_path: SPath::new(TARGET_PATH),
			substitution: Substitution::from_const(SCROLL_THEN_CLICK, CLICK),
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
