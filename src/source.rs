use async_trait::async_trait;
use http::Uri;

use crate::error::Result;
use crate::types::{CommentPage, GitHubIssue, Repository};

/// The remote calls needed to render an issue or pull request.
#[async_trait]
pub trait IssueSource: Send + Sync {
    async fn fetch_issue(&self, repo: &Repository, number: u64) -> Result<GitHubIssue>;

    /// Fetches the first page of an issue's comments.
    async fn fetch_comments(
        &self,
        repo: &Repository,
        number: u64,
        per_page: u8,
    ) -> Result<CommentPage>;

    /// Follows a `next` link returned with a previous page.
    async fn fetch_comment_page(&self, next: &Uri) -> Result<CommentPage>;

    /// Fetches the unified diff of a pull request.
    async fn fetch_pr_diff(&self, repo: &Repository, number: u64) -> Result<String>;
}
