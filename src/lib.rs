pub mod client;
pub mod config;
pub mod error;
pub mod pager;
pub mod reference;
pub mod render;
pub mod source;
pub mod types;

use std::io::Write;

use futures::TryStreamExt;
use log::{debug, info};

pub use client::GitHubClient;
pub use config::{FetchConfig, GitHubConfig};
pub use error::{FetchError, Result};
pub use pager::comment_pages;
pub use reference::IssueRef;
pub use render::{format_date, IssueDocument, DATE_FORMAT};
pub use source::IssueSource;
pub use types::{CommentPage, GitHubComment, GitHubIssue, GitHubUser, Repository};

/// Renders one issue (with comments) or one pull request diff.
pub struct IssueFetcher<S = GitHubClient> {
    source: S,
    per_page: u8,
}

impl IssueFetcher<GitHubClient> {
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::from_env())
    }

    pub fn with_config(config: FetchConfig) -> Result<Self> {
        let per_page = config.github.per_page;
        let client = GitHubClient::with_config(config)?;
        Ok(Self::with_source(client).per_page(per_page))
    }
}

impl<S: IssueSource> IssueFetcher<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            per_page: GitHubConfig::default().per_page,
        }
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Builds the issue document: the issue block followed by every comment
    /// block, in listing order. Nothing is returned if any page fails.
    pub async fn render_issue(&self, repo: &Repository, number: u64) -> Result<IssueDocument> {
        let issue = self.source.fetch_issue(repo, number).await?;

        let mut doc = IssueDocument::new();
        doc.push_issue(&issue);

        let mut pages = Box::pin(comment_pages(&self.source, repo, number, self.per_page));
        let mut total = 0usize;
        while let Some(comments) = pages.try_next().await? {
            for comment in &comments {
                doc.push_comment(comment);
            }
            total += comments.len();
        }

        info!("Rendered {}#{} with {} comments", repo.full_name, number, total);
        Ok(doc)
    }

    pub async fn fetch_diff(&self, repo: &Repository, number: u64) -> Result<String> {
        let diff = self.source.fetch_pr_diff(repo, number).await?;
        info!(
            "Fetched diff for {}#{} ({} bytes)",
            repo.full_name,
            number,
            diff.len()
        );
        Ok(diff)
    }

    /// Renders `reference` completely, then writes it to `out` in one call.
    pub async fn write_to<W: Write>(&self, reference: &IssueRef, out: &mut W) -> Result<()> {
        let repo = reference.repository();
        debug!(
            "Rendering {} as {}",
            reference,
            if reference.is_pull_request { "pull request" } else { "issue" }
        );

        let bytes = if reference.is_pull_request {
            self.fetch_diff(&repo, reference.number).await?.into_bytes()
        } else {
            self.render_issue(&repo, reference.number).await?.into_bytes()
        };

        out.write_all(&bytes).map_err(FetchError::Output)?;
        out.flush().map_err(FetchError::Output)
    }
}

/// Whole-program flow: validate the argument, load the credential, parse the
/// URL, then fetch and write.
pub async fn run<W: Write>(url: Option<&str>, config: FetchConfig, out: &mut W) -> Result<()> {
    let url = url
        .filter(|url| !url.is_empty())
        .ok_or(FetchError::MissingArgument)?;
    if config.github.token().is_none() {
        return Err(FetchError::MissingCredential(config.github.token_env_var));
    }
    let reference = IssueRef::parse(url)?;

    let fetcher = IssueFetcher::with_config(config)?;
    fetcher.write_to(&reference, out).await
}

pub struct IssueFetcherBuilder {
    config: FetchConfig,
}

impl IssueFetcherBuilder {
    pub fn new() -> Self {
        Self {
            config: FetchConfig::default(),
        }
    }

    pub fn token_env_var(mut self, var_name: impl Into<String>) -> Self {
        self.config.github.token_env_var = var_name.into();
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.github.api_base_url = url.into();
        self
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.config.github.per_page = per_page;
        self
    }

    pub fn build(self) -> Result<IssueFetcher> {
        IssueFetcher::with_config(self.config)
    }
}

impl Default for IssueFetcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
