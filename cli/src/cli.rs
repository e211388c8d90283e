use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "relog")]
#[command(
    author,
    version,
    about = "Create GitHub releases from your changelog entries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a GitHub release described by the changelog entry for a tag
    Release {
        /// Tag to release, e.g. 'v1.2.3' (leading 'v' is optional)
        #[clap(long, env = "INPUT_TAG_NAME")]
        tag: Option<String>,

        /// Fully-qualified git ref to release, e.g. 'refs/tags/v1.2.3';
        /// used when --tag is not set
        #[clap(long, env = "GITHUB_REF")]
        git_ref: Option<String>,

        /// Title of the release; defaults to the tag name
        #[clap(long, env = "INPUT_RELEASE_TITLE")]
        title: Option<String>,

        /// Path to the changelog file
        #[clap(long, env = "INPUT_CHANGELOG_PATH", default_value = "CHANGELOG.md")]
        changelog: String,

        /// Repository on the format 'owner/name'
        #[clap(long, env = "GITHUB_REPOSITORY")]
        repo: String,

        /// Token used to authenticate against the GitHub API
        #[clap(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Base URL of the GitHub API
        #[clap(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
        api_url: String,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Print the changelog entry for a tag without creating a release
    Show {
        /// Tag to look up, e.g. 'v1.2.3'
        tag: String,

        /// Path to the changelog file
        #[clap(long, default_value = "CHANGELOG.md")]
        changelog: String,
    },
}
