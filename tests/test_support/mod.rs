//! Fixture directories and files under `tests/.out/`.
//! Note: Must be declared with `mod test_support;` in each test file.

#![allow(unused)] // Not every test file uses every helper.

mod helpers;

pub use helpers::*;

type TestResult<T> = core::result::Result<T, Box<dyn std::error::Error>>;
