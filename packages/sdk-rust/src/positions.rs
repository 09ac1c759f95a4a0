//! Portfolio helpers over already-fetched accounts.
//!
//! A fetcher lists the owner's Token-2022 accounts, derives one position
//! address per NFT and fetches those; these helpers do the pure parts in
//! between.

use solana_sdk::pubkey::Pubkey;

use crate::state::parse_token_account;
use crate::types::{PositionEntry, PositionNftAccount};

/// Keep token accounts that hold a single position NFT.
///
/// Accounts that fail to parse (too short for the SPL layout) are skipped.
pub fn collect_position_nfts<'a, I>(token_accounts: I) -> Vec<PositionNftAccount>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    token_accounts
        .into_iter()
        .filter_map(|(address, data)| {
            let account = parse_token_account(data).ok()?;
            account.is_position_nft().then_some(PositionNftAccount {
                position_nft:         account.mint,
                position_nft_account: address,
            })
        })
        .collect()
}

/// Largest total liquidity first. Stable, so equal positions keep their order.
pub fn sort_by_liquidity(entries: &mut [PositionEntry]) {
    entries.sort_by(|a, b| b.state.total_liquidity().cmp(&a.state.total_liquidity()));
}

/// Positions belonging to `pool`, order preserved.
pub fn filter_by_pool(entries: impl IntoIterator<Item = PositionEntry>, pool: &Pubkey) -> Vec<PositionEntry> {
    entries.into_iter().filter(|e| e.state.pool == *pool).collect()
}
