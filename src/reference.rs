use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FetchError, Result};
use crate::types::Repository;

const ISSUE_URL_PATTERN: &str =
    r"^https://github\.com/([A-Za-z0-9_-]+)/([A-Za-z0-9_-]+)/(issues|pull)/([0-9]+)$";

fn issue_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ISSUE_URL_PATTERN).expect("issue url pattern is valid"))
}

/// An issue or pull request located by its web URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub is_pull_request: bool,
}

impl IssueRef {
    /// Parses `https://github.com/<owner>/<repo>/(issues|pull)/<number>`,
    /// ignoring anything from the first `#` on.
    pub fn parse(url: &str) -> Result<Self> {
        let url = match url.find('#') {
            Some(idx) => &url[..idx],
            None => url,
        };

        let captures = issue_url_regex()
            .captures(url)
            .ok_or_else(|| FetchError::InvalidUrl {
                url: url.to_string(),
                pattern: ISSUE_URL_PATTERN.to_string(),
            })?;

        let number: u64 = captures[4].parse()?;
        if number == 0 {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
                pattern: ISSUE_URL_PATTERN.to_string(),
            });
        }

        Ok(Self {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
            number,
            is_pull_request: &captures[3] == "pull",
        })
    }

    pub fn repository(&self) -> Repository {
        Repository::new(&self.owner, &self.repo)
    }
}

impl FromStr for IssueRef {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue_url() {
        let r = IssueRef::parse("https://github.com/tokio-rs/tokio/issues/6800").unwrap();
        assert_eq!(r.owner, "tokio-rs");
        assert_eq!(r.repo, "tokio");
        assert_eq!(r.number, 6800);
        assert!(!r.is_pull_request);
    }

    #[test]
    fn test_parse_pull_url() {
        let r = IssueRef::parse("https://github.com/o/r/pull/42").unwrap();
        assert_eq!(r.repository(), Repository::new("o", "r"));
        assert_eq!(r.number, 42);
        assert!(r.is_pull_request);
    }

    #[test]
    fn test_fragment_is_ignored() {
        let plain = IssueRef::parse("https://github.com/rust-lang/rust/issues/1").unwrap();
        let anchored =
            IssueRef::parse("https://github.com/rust-lang/rust/issues/1#issuecomment-123").unwrap();
        assert_eq!(plain, anchored);

        let r: IssueRef = "https://github.com/o/r/pull/7#discussion_r99".parse().unwrap();
        assert!(r.is_pull_request);
        assert_eq!(r.number, 7);
    }

    #[test]
    fn test_pull_flag_comes_from_path_kind() {
        // An owner literally named "pull" is still an issue URL.
        let r = IssueRef::parse("https://github.com/pull/repo/issues/3").unwrap();
        assert!(!r.is_pull_request);
        assert_eq!(r.owner, "pull");
    }

    #[test]
    fn test_invalid_urls() {
        let bad = [
            "",
            "#",
            "not-a-url",
            "https://github.com",
            "https://github.com/o/r",
            "https://github.com/o/r/issues",
            "https://github.com/o/r/issues/",
            "https://github.com/o/r/pulls/42",
            "https://github.com/o/r/issues/42/",
            "https://github.com/o/r/issues/-1",
            "https://github.com/o/r/issues/4a2",
            "http://github.com/o/r/issues/42",
            "https://gitlab.com/o/r/issues/42",
            "https://github.com/o.x/r/issues/42",
            "https://github.com/o/r/discussions/42",
            " https://github.com/o/r/issues/42",
            "https://github.com/o/r/issues/42?x=1",
            "https://github.com/ö/r/issues/42",
        ];
        for url in bad {
            match IssueRef::parse(url) {
                Err(FetchError::InvalidUrl { .. }) => {}
                other => panic!("{url:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_url_message_names_stripped_input() {
        let err = IssueRef::parse("https://example.com/x#frag").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("\"https://example.com/x\" does not match"));
        assert!(!message.contains("frag"));
    }

    #[test]
    fn test_number_zero_is_rejected() {
        for url in [
            "https://github.com/o/r/issues/0",
            "https://github.com/o/r/pull/000#top",
        ] {
            assert!(matches!(
                IssueRef::parse(url),
                Err(FetchError::InvalidUrl { .. })
            ));
        }
        assert_eq!(IssueRef::parse("https://github.com/o/r/issues/010").unwrap().number, 10);
    }

    #[test]
    fn test_number_overflow() {
        let err = IssueRef::parse("https://github.com/o/r/issues/99999999999999999999999").unwrap_err();
        assert!(matches!(err, FetchError::NumberParse(_)));
    }

    #[test]
    fn test_display() {
        let r = IssueRef::parse("https://github.com/o/r/issues/5").unwrap();
        assert_eq!(r.to_string(), "o/r#5");
    }
}
