use std::path::Path;

use github::{GitHubClient, ReleaseParams};
use tokio::runtime::Runtime;
use version::Tag;

use crate::error::{CliError, Result};
use crate::ui;

#[derive(Debug, Clone)]
pub struct ReleaseArgs {
    pub tag: Option<String>,
    pub git_ref: Option<String>,
    pub title: Option<String>,
    pub changelog_path: String,
    pub repo: String,
    pub token: String,
    pub api_url: String,
    pub verbose: bool,
}

pub fn execute(args: ReleaseArgs) -> Result<()> {
    let tag = resolve_tag(args.tag.as_deref(), args.git_ref.as_deref())?;
    tag.validate()?;

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| tag.as_str().to_string());
    let (repo_owner, repo_name) = split_repo(&args.repo)?;

    if args.verbose {
        println!("Releasing tag '{tag}' as '{title}' in '{}'", args.repo);
        println!("Reading changelog from '{}'", args.changelog_path);
    }

    let changelog_path = Path::new(&args.changelog_path);
    let entry = changelog::extract_entry_from_file(changelog_path, tag.as_str()).map_err(|e| {
        CliError::Changelog(e).with_context(format!(
            "Failed to get changelog entry from '{}'",
            changelog_path.display()
        ))
    })?;

    if args.verbose {
        println!("Found changelog entry ({} bytes)", entry.len());
    }

    // Create async runtime for the release creation request
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;

    let client = GitHubClient::new(args.api_url.as_str())?;
    let release = rt.block_on(client.create_release(ReleaseParams {
        tag_name: tag.as_str(),
        title: &title,
        body: &entry,
        repo_owner,
        repo_name,
        auth_token: &args.token,
    }))?;

    ui::success_message(&format!("Created release '{}'", release.name));
    ui::info_message(&release.url);

    Ok(())
}

/// An explicitly passed tag takes precedence; otherwise the tag name is
/// derived from the git ref (the 'GITHUB_REF' set by GitHub Actions on tag
/// pushes).
fn resolve_tag(tag: Option<&str>, git_ref: Option<&str>) -> Result<Tag> {
    match (tag, git_ref) {
        (Some(tag), _) => Ok(Tag::new(tag)),
        (None, Some(git_ref)) => Ok(Tag::from_git_ref(git_ref)?),
        (None, None) => Err(CliError::Other(
            "No tag to release: set --tag or --git-ref (or the INPUT_TAG_NAME/GITHUB_REF environment variables)"
                .to_string(),
        )),
    }
}

fn split_repo(repo: &str) -> Result<(&str, &str)> {
    repo.split_once('/')
        .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())
        .ok_or_else(|| {
            CliError::Other(format!(
                "Expected repository on the format 'owner/name', but got '{repo}'"
            ))
        })
}
