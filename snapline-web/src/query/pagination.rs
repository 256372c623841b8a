use shared::models::PostPage;

/// Number of posts requested per feed page.
pub const FEED_PAGE_SIZE: u32 = 6;

/// The feed starts at page 1.
pub const FIRST_PAGE: u32 = 1;

/// Cursor for the page after the ones already fetched, if the server
/// indicated one exists.
///
/// The predicate is the last page's `next` field; the cursor is simply the
/// number of pages fetched so far plus one. No total count is consulted.
#[must_use]
pub fn next_page_param(pages: &[PostPage]) -> Option<u32> {
    let last = pages.last()?;
    if last.has_next() {
        Some(pages.len() as u32 + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(next: Option<&str>) -> PostPage {
        PostPage {
            count: None,
            next: next.map(str::to_string),
            previous: None,
            results: Vec::new(),
        }
    }

    #[test]
    fn test_first_page_with_next_yields_two() {
        let pages = vec![page(Some("/api/post?limit=6&page=2"))];
        assert_eq!(next_page_param(&pages), Some(2));
    }

    #[test]
    fn test_first_page_without_next_stops() {
        let pages = vec![page(None)];
        assert_eq!(next_page_param(&pages), None);
    }

    #[test]
    fn test_cursor_tracks_pages_fetched() {
        let pages = vec![
            page(Some("/api/post?limit=6&page=2")),
            page(Some("/api/post?limit=6&page=3")),
            page(Some("/api/post?limit=6&page=4")),
        ];
        assert_eq!(next_page_param(&pages), Some(4));
    }

    #[test]
    fn test_only_last_page_is_consulted() {
        let pages = vec![page(Some("/api/post?limit=6&page=2")), page(None)];
        assert_eq!(next_page_param(&pages), None);
    }

    #[test]
    fn test_no_pages_no_cursor() {
        assert_eq!(next_page_param(&[]), None);
    }
}
