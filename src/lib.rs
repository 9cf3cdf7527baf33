// region:    --- Modules

mod error;
mod patch_config;
mod patch_status;
mod patcher;
mod substitution;

pub use error::*;
pub use patch_config::*;
pub use patch_status::*;
pub use patcher::*;
pub use substitution::*;

// endregion: --- Modules
