mod error;
mod extractor;
mod titles;
mod utils;

pub use error::{ChangelogError, Result};
pub use extractor::{extract_entry, extract_entry_from_file};
pub use titles::TargetTitles;
