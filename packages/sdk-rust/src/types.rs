//! Derived result types shared across the SDK.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::state::PositionState;

/// Fees and rewards a position can claim right now. Computed, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnclaimedAmount {
    pub fee_token_a: u128,
    pub fee_token_b: u128,
    /// One entry per position reward channel, in channel order.
    pub rewards:     Vec<u128>,
}

/// A token account holding exactly one position NFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionNftAccount {
    pub position_nft:         Pubkey,
    pub position_nft_account: Pubkey,
}

/// A decoded position together with the accounts it was found through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub position_nft_account: Pubkey,
    pub position:             Pubkey,
    pub state:                PositionState,
}
