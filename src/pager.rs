use futures::stream::{self, Stream};
use http::Uri;
use log::debug;

use crate::error::{FetchError, Result};
use crate::source::IssueSource;
use crate::types::{CommentPage, GitHubComment, Repository};

enum Cursor {
    Start,
    Next(Uri),
    Done,
}

/// Lazily walks an issue's comment listing, one request per poll.
///
/// The first request lists the issue's comments; each later one follows the
/// `next` link the server returned with the previous page, unchanged. The
/// stream ends after the first page without a link. An error is yielded once
/// and ends the stream.
pub fn comment_pages<'a, S>(
    source: &'a S,
    repo: &'a Repository,
    number: u64,
    per_page: u8,
) -> impl Stream<Item = Result<Vec<GitHubComment>>> + 'a
where
    S: IssueSource + ?Sized,
{
    stream::try_unfold(Cursor::Start, move |cursor| async move {
        let CommentPage { comments, next } = match cursor {
            Cursor::Start => source.fetch_comments(repo, number, per_page).await?,
            Cursor::Next(link) => source.fetch_comment_page(&link).await?,
            Cursor::Done => return Ok(None),
        };
        debug!("Got {} comments (next: {:?})", comments.len(), next);

        let cursor = match next {
            Some(link) => Cursor::Next(link),
            None => Cursor::Done,
        };
        Ok::<_, FetchError>(Some((comments, cursor)))
    })
}
