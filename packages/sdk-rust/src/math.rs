//! Wide-integer helpers and unclaimed fee / reward math.
//!
//! Mirrors the on-chain arithmetic exactly so off-chain estimates match on-chain
//! results: every 128-bit operation wraps, shifts truncate toward zero, and the
//! fixed-point multiply keeps the program's shift order.

use crate::constants::{LIQUIDITY_PRE_SHIFT, LIQUIDITY_SCALE};
use crate::state::{Accumulator, PoolState, PositionState};
use crate::types::UnclaimedAmount;

// ─── Wide integers ────────────────────────────────────────────────────────────

/// Assemble a `u128` from its little-endian 64-bit halves.
pub const fn u128_from_words(lo: u64, hi: u64) -> u128 {
    ((hi as u128) << 64) | lo as u128
}

/// Split a `u128` into `(lo, hi)` 64-bit halves.
pub const fn u128_to_words(value: u128) -> (u64, u64) {
    (value as u64, (value >> 64) as u64)
}

// ─── Fees ─────────────────────────────────────────────────────────────────────

/// Fee accrued on one side since the position's checkpoint.
///
/// `((liquidity >> 32) × (fee_per_liquidity − checkpoint)) >> (64 − 32)`
///
/// Liquidity is pre-shifted so the Q64.64 product stays inside 128 bits; the
/// low 32 bits of liquidity are dropped. Do not reassociate.
pub fn accrued_fee(
    total_liquidity:   u128,
    fee_per_liquidity: &Accumulator,
    checkpoint:        &Accumulator,
) -> u128 {
    let per_unit_delta = fee_per_liquidity.to_u128().wrapping_sub(checkpoint.to_u128());
    (total_liquidity >> LIQUIDITY_PRE_SHIFT).wrapping_mul(per_unit_delta)
        >> (LIQUIDITY_SCALE - LIQUIDITY_PRE_SHIFT)
}

/// Fee owed on one side: the settled `pending` amount plus [`accrued_fee`].
pub fn pending_fee_for_side(
    pending:           u64,
    total_liquidity:   u128,
    fee_per_liquidity: &Accumulator,
    checkpoint:        &Accumulator,
) -> u128 {
    (pending as u128).wrapping_add(accrued_fee(total_liquidity, fee_per_liquidity, checkpoint))
}

/// Compute `(fee_a, fee_b)` owed to a position: settled pending fees plus the
/// fees accrued since the last checkpoint.
pub fn pending_fees_for_position(pool: &PoolState, pos: &PositionState) -> (u128, u128) {
    let liquidity = pos.total_liquidity();

    let fee_a = pending_fee_for_side(
        pos.fee_a_pending,
        liquidity,
        &pool.fee_a_per_liquidity,
        &pos.fee_a_per_token_checkpoint,
    );
    let fee_b = pending_fee_for_side(
        pos.fee_b_pending,
        liquidity,
        &pool.fee_b_per_liquidity,
        &pos.fee_b_per_token_checkpoint,
    );
    (fee_a, fee_b)
}

// ─── Unclaimed ────────────────────────────────────────────────────────────────

/// Fees and rewards a position can claim right now.
///
/// Rewards are the settled `reward_pendings` of each channel, in channel order,
/// whether or not the pool has initialized that channel.
pub fn unclaimed_amount(pool: &PoolState, pos: &PositionState) -> UnclaimedAmount {
    let (fee_token_a, fee_token_b) = pending_fees_for_position(pool, pos);
    let rewards = pos
        .reward_infos
        .iter()
        .map(|info| info.reward_pendings as u128)
        .collect();

    tracing::trace!(
        fee_token_a = %fee_token_a,
        fee_token_b = %fee_token_b,
        liquidity = %pos.total_liquidity(),
        "computed unclaimed amount"
    );

    UnclaimedAmount { fee_token_a, fee_token_b, rewards }
}
