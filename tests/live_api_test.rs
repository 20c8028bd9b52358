//! Live GitHub API tests.
//!
//! These hit api.github.com and need GITHUB_TOKEN.
//! Run with: cargo test --test live_api_test -- --ignored --nocapture

use github_issue_text::{FetchConfig, IssueFetcher, IssueRef, Repository};

fn has_token() -> bool {
    if FetchConfig::default().github.token().is_none() {
        eprintln!("Skipping: GITHUB_TOKEN not set");
        return false;
    }
    true
}

#[tokio::test]
#[ignore]
async fn test_fetch_issue_with_comments() {
    if !has_token() {
        return;
    }

    let fetcher = IssueFetcher::new().expect("Failed to create fetcher");
    let doc = fetcher
        .render_issue(&Repository::new("tokio-rs", "tokio"), 6800)
        .await
        .expect("Should render issue");

    let text = doc.as_str();
    println!("{}", &text[..text.len().min(500)]);
    assert!(text.starts_with("<github_issue><title>"));
    assert!(text.contains("</github_issue>\n"));
}

#[tokio::test]
#[ignore]
async fn test_fetch_pr_diff() {
    if !has_token() {
        return;
    }

    let fetcher = IssueFetcher::new().expect("Failed to create fetcher");
    let reference = IssueRef::parse("https://github.com/tokio-rs/axum/pull/2865").unwrap();

    let mut out = Vec::new();
    fetcher
        .write_to(&reference, &mut out)
        .await
        .expect("Should fetch diff");

    let diff = String::from_utf8(out).unwrap();
    assert!(diff.starts_with("diff --git"));
    assert!(!diff.contains("<github_issue>"));
}

#[tokio::test]
#[ignore]
async fn test_issue_not_found() {
    if !has_token() {
        return;
    }

    let fetcher = IssueFetcher::new().unwrap();
    let result = fetcher
        .render_issue(&Repository::new("tokio-rs", "axum"), 9999999)
        .await;
    assert!(result.is_err(), "Should return error for non-existent issue");
}
