//! Utility layer for packaging a project directory into a deployable zip
//! archive and resolving manifest content from a URL or a local path.

pub mod content;
pub mod error;
pub mod manifest;
pub mod packager;
pub mod result;
pub mod tpl;
pub mod utils;

pub use content::Locator;
pub use error::Error;
pub use packager::Packager;
