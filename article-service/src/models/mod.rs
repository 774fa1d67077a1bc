//! Data model for outlines and SEO metadata.
//!
//! Nothing here is persisted; these are the shapes the generative model is
//! asked to emit and the service returns to the wizard client.

mod outline;
mod seo;

pub use outline::{Outline, Section, SectionStatus};
pub use seo::{KeywordBuckets, SeoInfo, SeoOutlineEntry};
