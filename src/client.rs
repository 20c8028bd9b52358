use async_trait::async_trait;
use http::Uri;
use log::debug;
use octocrab::models::issues::{Comment, Issue};
use octocrab::{Octocrab, Page};

use crate::config::{FetchConfig, DEFAULT_API_BASE_URL};
use crate::error::{FetchError, Result};
use crate::source::IssueSource;
use crate::types::{CommentPage, GitHubComment, GitHubIssue, GitHubUser, Repository};

/// `IssueSource` backed by the GitHub REST API.
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client, failing with `MissingCredential` before any
    /// connection is made when the token variable is unset or empty.
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        let token = config
            .github
            .token()
            .ok_or_else(|| FetchError::MissingCredential(config.github.token_env_var.clone()))?;

        let mut builder = Octocrab::builder().personal_token(token);

        if !config.github.api_base_url.is_empty()
            && config.github.api_base_url != DEFAULT_API_BASE_URL
        {
            builder = builder
                .base_uri(config.github.api_base_url.as_str())
                .map_err(|e| FetchError::Config(format!("Invalid base URI: {}", e)))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| FetchError::Config(format!("Failed to build GitHub client: {}", e)))?;

        Ok(Self { octocrab })
    }
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn fetch_issue(&self, repo: &Repository, number: u64) -> Result<GitHubIssue> {
        debug!("Fetching issue #{} in {}", number, repo.full_name);

        let issue = self
            .octocrab
            .issues(&repo.owner, &repo.name)
            .get(number)
            .await?;

        Ok(convert_issue(issue))
    }

    async fn fetch_comments(
        &self,
        repo: &Repository,
        number: u64,
        per_page: u8,
    ) -> Result<CommentPage> {
        debug!("Fetching comments for #{} in {}", number, repo.full_name);

        let comments_page: Page<Comment> = self
            .octocrab
            .issues(&repo.owner, &repo.name)
            .list_comments(number)
            .per_page(per_page)
            .send()
            .await?;

        Ok(convert_comment_page(comments_page))
    }

    async fn fetch_comment_page(&self, next: &Uri) -> Result<CommentPage> {
        debug!("Following comments link {}", next);

        let comments_page: Option<Page<Comment>> =
            self.octocrab.get_page(&Some(next.clone())).await?;

        Ok(comments_page
            .map(convert_comment_page)
            .unwrap_or_default())
    }

    async fn fetch_pr_diff(&self, repo: &Repository, number: u64) -> Result<String> {
        debug!("Fetching diff for PR #{} in {}", number, repo.full_name);

        let diff = self
            .octocrab
            .pulls(&repo.owner, &repo.name)
            .get_diff(number)
            .await?;

        Ok(diff)
    }
}

fn convert_comment_page(page: Page<Comment>) -> CommentPage {
    CommentPage {
        comments: page.items.into_iter().map(convert_comment).collect(),
        next: page.next,
    }
}

fn convert_issue(issue: Issue) -> GitHubIssue {
    GitHubIssue {
        number: issue.number,
        title: issue.title,
        body: issue.body,
        user: GitHubUser {
            id: issue.user.id.0,
            login: issue.user.login,
        },
        created_at: issue.created_at,
        html_url: issue.html_url.to_string(),
    }
}

fn convert_comment(comment: Comment) -> GitHubComment {
    GitHubComment {
        id: comment.id.0,
        user: GitHubUser {
            id: comment.user.id.0,
            login: comment.user.login,
        },
        body: comment.body,
        created_at: comment.created_at,
    }
}
