// SPDX-License-Identifier: GPL-3.0-only

use futures::{StreamExt, TryStreamExt};

use crate::{
    core::{
        api::DataSource,
        error::{DexError, FetchStep},
    },
    entities::PokemonSummary,
};

/// Index offset of the first entry of a 1-based `page`
pub fn page_offset(page: u32, page_size: usize) -> usize {
    (page.max(1) as usize - 1).saturating_mul(page_size)
}

/// Loads one page of summaries, an empty list if anything failed.
///
/// A failed detail fetch fails the whole page, no partial page is ever returned.
pub async fn load_page<S>(
    source: &S,
    page: u32,
    page_size: usize,
    max_concurrent: usize,
) -> Vec<PokemonSummary>
where
    S: DataSource + ?Sized,
{
    match try_load_page(source, page, page_size, max_concurrent).await {
        Ok(summaries) => summaries,
        Err(e) => {
            log::warn!("Failed to load page {page}: {e}");
            Vec::new()
        }
    }
}

/// Same as [`load_page`] but reports why the page could not be loaded
pub async fn try_load_page<S>(
    source: &S,
    page: u32,
    page_size: usize,
    max_concurrent: usize,
) -> Result<Vec<PokemonSummary>, DexError>
where
    S: DataSource + ?Sized,
{
    let offset = page_offset(page, page_size);
    let entries = source
        .list(offset, page_size)
        .await
        .map_err(|e| DexError::index(FetchStep::List, e))?;

    log::debug!("Page {page}: fetching details of {} entries", entries.len());

    // buffered keeps the index order whatever order the requests complete in
    futures::stream::iter(entries)
        .map(|entry| async move {
            let details = source
                .detail(&entry.url)
                .await
                .map_err(|e| DexError::index(FetchStep::Detail, e))?;
            Ok::<_, DexError>(PokemonSummary::from_details(&details, entry.url))
        })
        .buffered(max_concurrent.max(1))
        .try_collect()
        .await
}
