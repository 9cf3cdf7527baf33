use crate::{Error, Result};

/// A literal search/replace pair. No pattern syntax, matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
	pattern: String,
	replacement: String,
}

/// The text after one substitution pass, with the number of replaced occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
	pub content: String,
	pub count: usize,
}

impl Substitution {
	pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
		let pattern = pattern.into();
		if pattern.is_empty() {
			return Err(Error::EmptyPattern);
		}

		Ok(Self {
			pattern,
			replacement: replacement.into(),
		})
	}

	/// Infallible form for the crate's own non-empty literals.
	pub(crate) fn from_const(pattern: &'static str, replacement: &'static str) -> Self {
		debug_assert!(!pattern.is_empty());
		Self {
			pattern: pattern.to_string(),
			replacement: replacement.to_string(),
		}
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn replacement(&self) -> &str {
		&self.replacement
	}

	/// Replaces every non-overlapping occurrence, scanning left to right.
	pub fn apply(&self, content: &str) -> Substituted {
		let mut out = String::with_capacity(content.len());
		let mut last = 0;
		let mut count = 0;

		for (idx, matched) in content.match_indices(self.pattern.as_str()) {
			out.push_str(&content[last..idx]);
			out.push_str(&self.replacement);
			last = idx + matched.len();
			count += 1;
		}
		out.push_str(&content[last..]);

		Substituted { content: out, count }
	}
}

/// Pure literal substitution of all occurrences of `from` by `to`.
///
/// Unlike `str::replace`, an empty `from` matches nothing and returns the content
/// unchanged, instead of inserting `to` between every character.
pub fn substitute(content: &str, from: &str, to: &str) -> String {
	if from.is_empty() {
		return content.to_string();
	}

	Substitution {
		pattern: from.to_string(),
		replacement: to.to_string(),
	}
	.apply(content)
	.content
}

// region:    --- Tests


// endregion: --- Tests
