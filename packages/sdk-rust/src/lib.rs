//! cp-amm Rust SDK
//!
//! Off-chain decoder and fee math for cp-amm (DAMM v2) pools and positions.
//! Hand it raw account bytes from any RPC client and it returns typed account
//! state and the fees and rewards a position can claim, bit-for-bit with the
//! on-chain program. No network access, no Anchor dependency.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cp_amm_sdk::{parse_pool, parse_position, unclaimed_amount};
//!
//! fn report(pool_data: &[u8], position_data: &[u8]) -> cp_amm_sdk::Result<()> {
//!     let pool     = parse_pool(pool_data)?;
//!     let position = parse_position(position_data)?;
//!
//!     let owed = unclaimed_amount(&pool, &position);
//!     println!("Fee token A: {}", owed.fee_token_a);
//!     println!("Fee token B: {}", owed.fee_token_b);
//!     println!("Rewards:     {:?}", owed.rewards);
//!     Ok(())
//! }
//! ```
//!
//! # Feature Overview
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`parse_pool`] | Decode a `Pool` account |
//! | [`parse_position`] | Decode a `Position` account |
//! | [`decode`] | Decode either kind by [`RecordKind`] |
//! | [`PoolState::to_bytes`] / [`PositionState::to_bytes`] | Re-encode, padding included |
//! | [`unclaimed_amount`] | Claimable fees per side plus pending rewards |
//! | [`parse_token_account`] | Decode a packed SPL token account |
//! | [`positions::collect_position_nfts`] | Pick position NFTs out of token accounts |

mod codec;
pub mod constants;
pub mod error;
pub mod math;
pub mod positions;
pub mod state;
pub mod types;

pub use error::{Error, Result};
pub use math::unclaimed_amount;
pub use state::{
    decode, parse_pool, parse_position, parse_token_account, Accumulator, PoolState,
    PositionState, Record, RecordKind,
};
pub use types::*;
