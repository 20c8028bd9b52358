//! Tagged plain-text rendering of an issue and its comments.
//!
//! ```text
//! <github_issue><title>{title}</title><date>{date}</date>
//! {body}
//! </github_issue>
//! <comment><user>{login}</user><date>{date}</date>
//! {body}
//! </comment>
//! ```
//!
//! Content is written as-is, without escaping.

use chrono::{DateTime, Utc};

use crate::types::{GitHubComment, GitHubIssue};

/// e.g. `Monday, 04 Mar 2024`
pub const DATE_FORMAT: &str = "%A, %d %b %Y";

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Append-only output buffer, written out once it is complete.
#[derive(Debug, Default)]
pub struct IssueDocument {
    buf: String,
}

impl IssueDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_issue(&mut self, issue: &GitHubIssue) {
        self.buf.push_str("<github_issue><title>");
        self.buf.push_str(&issue.title);
        self.buf.push_str("</title><date>");
        self.buf.push_str(&format_date(&issue.created_at));
        self.buf.push_str("</date>\n");
        self.buf.push_str(issue.body.as_deref().unwrap_or_default());
        self.ensure_newline();
        self.buf.push_str("</github_issue>\n");
    }

    pub fn push_comment(&mut self, comment: &GitHubComment) {
        self.buf.push_str("<comment><user>");
        self.buf.push_str(&comment.user.login);
        self.buf.push_str("</user><date>");
        self.buf.push_str(&format_date(&comment.created_at));
        self.buf.push_str("</date>\n");
        self.buf.push_str(comment.body.as_deref().unwrap_or_default());
        self.ensure_newline();
        self.buf.push_str("</comment>\n");
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_bytes()
    }

    fn ensure_newline(&mut self) {
        if !self.buf.is_empty() && !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
    }
}
