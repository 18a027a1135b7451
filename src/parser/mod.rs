//! Parsers for the markdown and JSON inputs.
//!
//! Every parser here is total: a miss is reported as `None` or an empty
//! value and the caller decides the fallback.

pub mod deps;
pub mod frontmatter;
pub mod record;
