//! Caller-side paging over `listings_by_contract_address`.

use marketplace_types::ListingsResponse;
use tracing::{info, warn};

use crate::connection::QueryConnection;
use crate::{MarketplaceQueryClient, Result};

/// Follows the token-id cursor from `start_after` until the contract returns
/// an empty page. Each page is one `list_listings_by_contract` call. Stops
/// early if a page's last token id equals the cursor it was requested with.
pub async fn collect_listings<C: QueryConnection>(
    client: &MarketplaceQueryClient<C>,
    nft_contract: &str,
    limit: Option<u32>,
    start_after: Option<String>,
) -> Result<ListingsResponse> {
    let mut cursor = start_after;
    let mut listings = Vec::new();
    loop {
        let page = client
            .list_listings_by_contract(nft_contract, limit, cursor.as_deref())
            .await?;
        let Some(last) = page.last_token_id().map(str::to_owned) else {
            break;
        };
        if cursor.as_deref() == Some(last.as_str()) {
            warn!(cursor = %last, "Cursor did not advance, stopping");
            break;
        }
        info!(page = page.listings.len(), cursor = %last, "Fetched page");
        listings.extend(page.listings);
        cursor = Some(last);
    }
    Ok(ListingsResponse { listings })
}
