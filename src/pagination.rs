//! Exhaustive pagination traversal ("list-all").
//!
//! Every list-capable resource reuses [`collect_all_pages`] to turn its
//! single-page list operation into one complete sequence. Page fetches are
//! strictly sequential; the loop either returns the whole result set or the
//! first error, never a partial result.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::EcsmError;

/// Page size used by list-all when the caller leaves it unset.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Position within a paginated result set. `page_num` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page_num: u32,
    /// Items per page. `0` means "let the server decide" on a single-page
    /// list; list-all substitutes [`DEFAULT_PAGE_SIZE`].
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_num: 1,
            page_size: 0,
        }
    }
}

impl PageQuery {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
        }
    }
}

/// One page of a larger result set, as the ECSM list endpoints return it.
/// `total` counts all matching items across every page; the items key on the
/// wire is `"list"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub total: u64,
    pub page_num: u32,
    pub page_size: u32,
    #[serde(rename = "list", default = "Vec::new")]
    pub items: Vec<T>,
}

/// One fetched page as seen by the traversal loop.
///
/// Resources whose list endpoint returns a bare array (no envelope with a
/// total) report `total: 0` and pair it with [`ListAllPolicy::ShortPage`],
/// which never consults the total.
#[derive(Debug)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> From<Paged<T>> for PageData<T> {
    fn from(page: Paged<T>) -> Self {
        Self {
            total: page.total,
            items: page.items,
        }
    }
}

/// Termination policy for the traversal, configured per resource family.
///
/// Both policies exist in the server's pagination semantics; they are kept
/// as explicit configuration rather than unified. Either way an empty page
/// always stops the loop, which also guards against a misreported total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAllPolicy {
    /// Stop once the accumulated count reaches the reported `total`.
    TotalCount,
    /// Stop after a page shorter than the requested page size.
    ShortPage,
}

/// Drive `fetch_page` until the result set is exhausted, concatenating the
/// pages in order.
///
/// The traversal always starts at page 1 regardless of what the caller put
/// in its options, and defaults `page_size` to [`DEFAULT_PAGE_SIZE`] when 0.
pub async fn collect_all_pages<T, F, Fut>(
    page_size: u32,
    policy: ListAllPolicy,
    mut fetch_page: F,
) -> Result<Vec<T>, EcsmError>
where
    F: FnMut(PageQuery) -> Fut,
    Fut: Future<Output = Result<PageData<T>, EcsmError>>,
{
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };

    let mut all_items = Vec::new();
    let mut page_num = 1u32;

    loop {
        let page = fetch_page(PageQuery::new(page_num, page_size)).await?;
        let fetched = page.items.len();

        if fetched == 0 {
            break;
        }

        all_items.extend(page.items);
        tracing::debug!(page_num, fetched, collected = all_items.len(), "fetched page");

        let exhausted = match policy {
            ListAllPolicy::TotalCount => all_items.len() as u64 >= page.total,
            ListAllPolicy::ShortPage => (fetched as u32) < page_size,
        };
        if exhausted {
            break;
        }

        page_num += 1;
    }

    Ok(all_items)
}
