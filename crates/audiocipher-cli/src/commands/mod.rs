//! CLI command implementations.

pub mod assets;
pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
pub mod inspect;
pub mod morse;
pub mod play;
pub mod scales;
pub mod schemes;
