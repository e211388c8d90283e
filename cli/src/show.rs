use std::path::Path;

use version::Tag;

use crate::error::{CliError, Result};

pub fn execute(tag: String, changelog_path: String) -> Result<()> {
    let tag = Tag::new(tag);
    tag.validate()?;

    let path = Path::new(&changelog_path);
    let entry = changelog::extract_entry_from_file(path, tag.as_str()).map_err(|e| {
        CliError::Changelog(e).with_context(format!(
            "Failed to get changelog entry from '{}'",
            path.display()
        ))
    })?;

    println!("{entry}");

    Ok(())
}
