use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	#[display("Cannot {op} file '{path}'. Cause: {cause}")]
	FileAccess {
		op: FileOp,
		path: String,
		cause: AccessCause,
	},

	#[display("Substitution pattern cannot be empty")]
	EmptyPattern,

	// -- Externals
	#[from]
	Io(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FileOp {
	#[display("read")]
	Read,
	#[display("write")]
	Write,
}

/// The underlying failure behind a `FileAccess` error.
#[derive(Debug, Display, From)]
pub enum AccessCause {
	#[from]
	Io(std::io::Error),

	#[from]
	SimpleFs(simple_fs::Error),
}

// region:    --- Constructors

impl Error {
	pub fn io_read_file(path: impl Into<String>, cause: impl Into<AccessCause>) -> Self {
		Self::FileAccess {
			op: FileOp::Read,
			path: path.into(),
			cause: cause.into(),
		}
	}

	pub fn io_write_file(path: impl Into<String>, cause: impl Into<AccessCause>) -> Self {
		Self::FileAccess {
			op: FileOp::Write,
			path: path.into(),
			cause: cause.into(),
		}
	}

	/// True for any read or write failure on the target file.
	pub fn is_file_access(&self) -> bool {
		matches!(self, Self::FileAccess { .. })
	}

	pub fn file_op(&self) -> Option<FileOp> {
		match self {
			Self::FileAccess { op, .. } => Some(*op),
			_ => None,
		}
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::FileAccess {
				cause: AccessCause::Io(err),
				..
			} => Some(err),
			Self::FileAccess {
				cause: AccessCause::SimpleFs(err),
				..
			} => Some(err),
			Self::Io(err) => Some(err),
			_ => None,
		}
	}
}

// endregion: --- Error Boilerplate

// region:    --- Tests


// endregion: --- Tests
