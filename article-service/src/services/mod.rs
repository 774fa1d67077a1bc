//! Business logic: provider seam, prompt assembly, markdown pipeline.

pub mod markdown;
pub mod prompt;
pub mod providers;
