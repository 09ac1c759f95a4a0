//! On-chain account deserialization.
//!
//! Parses raw account bytes for cp-amm `Pool` (1112 bytes) and `Position`
//! (408 bytes), plus the packed SPL token account used to hold position NFTs.
//! Fields are read in declaration order at fixed offsets mirroring the Anchor
//! zero-copy layout exactly; padding is kept so a decoded record re-encodes to
//! the same bytes.

use std::fmt;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::codec::{Reader, Writer};
use crate::constants::{
    DISCRIMINATOR_LEN, NUM_REWARDS, POOL_DISCRIMINATOR, POOL_LEN, POSITION_DISCRIMINATOR,
    POSITION_LEN,
};
use crate::error::{Error, Result};

// ─── Record kinds ─────────────────────────────────────────────────────────────

/// The account layouts this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Pool,
    Position,
}

impl RecordKind {
    pub const fn discriminator(self) -> [u8; 8] {
        match self {
            RecordKind::Pool => POOL_DISCRIMINATOR,
            RecordKind::Position => POSITION_DISCRIMINATOR,
        }
    }

    /// Encoded size including the discriminator.
    pub const fn encoded_len(self) -> usize {
        match self {
            RecordKind::Pool => POOL_LEN,
            RecordKind::Position => POSITION_LEN,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Pool => f.write_str("pool"),
            RecordKind::Position => f.write_str("position"),
        }
    }
}

/// A decoded account of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    Pool(Box<PoolState>),
    Position(PositionState),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Pool(_) => RecordKind::Pool,
            Record::Position(_) => RecordKind::Position,
        }
    }
}

// ─── Accumulator ──────────────────────────────────────────────────────────────

/// A 32-byte cumulative per-unit accumulator (fee or reward per liquidity).
///
/// Stored on chain as `[u8; 32]`; only the low 16 bytes carry the Q64.64 value.
/// Kept distinct from plain `u128` fields so the widths never mix silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accumulator(pub [u8; 32]);

impl Accumulator {
    /// Reinterpret as a wide integer: the low 16 bytes, little-endian.
    /// The upper 16 bytes are ignored.
    pub fn to_u128(&self) -> u128 {
        let mut lo = [0u8; 16];
        lo.copy_from_slice(&self.0[..16]);
        u128::from_le_bytes(lo)
    }

    /// Upper 16 bytes are zero.
    pub fn from_u128(value: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<u128> for Accumulator {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

// ─── Pool ─────────────────────────────────────────────────────────────────────

/// Base fee schedule (40 bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseFeeStruct {
    pub cliff_fee_numerator: u64,
    pub fee_scheduler_mode:  u8,
    pub padding_0:           [u8; 5],
    pub number_of_period:    u16,
    pub period_frequency:    u64,
    pub reduction_factor:    u64,
    pub padding_1:           u64,
}

impl BaseFeeStruct {
    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            cliff_fee_numerator: r.read_u64()?,
            fee_scheduler_mode:  r.read_u8()?,
            padding_0:           r.read_array()?,
            number_of_period:    r.read_u16()?,
            period_frequency:    r.read_u64()?,
            reduction_factor:    r.read_u64()?,
            padding_1:           r.read_u64()?,
        })
    }

    fn write(&self, w: &mut Writer) {
        w.put_u64(self.cliff_fee_numerator);
        w.put_u8(self.fee_scheduler_mode);
        w.put_bytes(&self.padding_0);
        w.put_u16(self.number_of_period);
        w.put_u64(self.period_frequency);
        w.put_u64(self.reduction_factor);
        w.put_u64(self.padding_1);
    }
}

/// Volatility-driven fee component (96 bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicFeeStruct {
    pub initialized:                u8,
    pub padding:                    [u8; 7],
    pub max_volatility_accumulator: u32,
    pub variable_fee_control:       u32,
    pub bin_step:                   u16,
    pub filter_period:              u16,
    pub decay_period:               u16,
    pub reduction_factor:           u16,
    pub last_update_timestamp:      u64,
    pub bin_step_u128:              u128,
    pub sqrt_price_reference:       u128,
    pub volatility_accumulator:     u128,
    pub volatility_reference:       u128,
}

impl DynamicFeeStruct {
    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            initialized:                r.read_u8()?,
            padding:                    r.read_array()?,
            max_volatility_accumulator: r.read_u32()?,
            variable_fee_control:       r.read_u32()?,
            bin_step:                   r.read_u16()?,
            filter_period:              r.read_u16()?,
            decay_period:               r.read_u16()?,
            reduction_factor:           r.read_u16()?,
            last_update_timestamp:      r.read_u64()?,
            bin_step_u128:              r.read_u128()?,
            sqrt_price_reference:       r.read_u128()?,
            volatility_accumulator:     r.read_u128()?,
            volatility_reference:       r.read_u128()?,
        })
    }

    fn write(&self, w: &mut Writer) {
        w.put_u8(self.initialized);
        w.put_bytes(&self.padding);
        w.put_u32(self.max_volatility_accumulator);
        w.put_u32(self.variable_fee_control);
        w.put_u16(self.bin_step);
        w.put_u16(self.filter_period);
        w.put_u16(self.decay_period);
        w.put_u16(self.reduction_factor);
        w.put_u64(self.last_update_timestamp);
        w.put_u128(self.bin_step_u128);
        w.put_u128(self.sqrt_price_reference);
        w.put_u128(self.volatility_accumulator);
        w.put_u128(self.volatility_reference);
    }
}

/// Fee configuration block at the head of the pool (160 bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolFeesStruct {
    pub base_fee:             BaseFeeStruct,
    pub protocol_fee_percent: u8,
    pub partner_fee_percent:  u8,
    pub referral_fee_percent: u8,
    pub padding_0:            [u8; 5],
    pub dynamic_fee:          DynamicFeeStruct,
    pub padding_1:            [u64; 2],
}

impl PoolFeesStruct {
    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            base_fee:             BaseFeeStruct::read(r)?,
            protocol_fee_percent: r.read_u8()?,
            partner_fee_percent:  r.read_u8()?,
            referral_fee_percent: r.read_u8()?,
            padding_0:            r.read_array()?,
            dynamic_fee:          DynamicFeeStruct::read(r)?,
            padding_1:            r.read_u64_array()?,
        })
    }

    fn write(&self, w: &mut Writer) {
        self.base_fee.write(w);
        w.put_u8(self.protocol_fee_percent);
        w.put_u8(self.partner_fee_percent);
        w.put_u8(self.referral_fee_percent);
        w.put_bytes(&self.padding_0);
        self.dynamic_fee.write(w);
        w.put_u64_slice(&self.padding_1);
    }
}

/// Lifetime totals kept by the pool (80 bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolMetrics {
    pub total_lp_a_fee:       u128,
    pub total_lp_b_fee:       u128,
    pub total_protocol_a_fee: u64,
    pub total_protocol_b_fee: u64,
    pub total_partner_a_fee:  u64,
    pub total_partner_b_fee:  u64,
    pub total_position:       u64,
    pub padding:              u64,
}

impl PoolMetrics {
    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            total_lp_a_fee:       r.read_u128()?,
            total_lp_b_fee:       r.read_u128()?,
            total_protocol_a_fee: r.read_u64()?,
            total_protocol_b_fee: r.read_u64()?,
            total_partner_a_fee:  r.read_u64()?,
            total_partner_b_fee:  r.read_u64()?,
            total_position:       r.read_u64()?,
            padding:              r.read_u64()?,
        })
    }

    fn write(&self, w: &mut Writer) {
        w.put_u128(self.total_lp_a_fee);
        w.put_u128(self.total_lp_b_fee);
        w.put_u64(self.total_protocol_a_fee);
        w.put_u64(self.total_protocol_b_fee);
        w.put_u64(self.total_partner_a_fee);
        w.put_u64(self.total_partner_b_fee);
        w.put_u64(self.total_position);
        w.put_u64(self.padding);
    }
}

/// One pool-level reward channel (192 bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardInfo {
    pub initialized:                             u8,
    pub reward_token_flag:                       u8,
    pub padding_0:                               [u8; 6],
    pub padding_1:                               [u8; 8],
    pub mint:                                    Pubkey,
    pub vault:                                   Pubkey,
    pub funder:                                  Pubkey,
    pub reward_duration:                         u64,
    pub reward_duration_end:                     u64,
    pub reward_rate:                             u128,
    pub reward_per_token_stored:                 Accumulator,
    pub last_update_time:                        u64,
    pub cumulative_seconds_with_empty_liquidity: u64,
}

impl RewardInfo {
    pub fn is_initialized(&self) -> bool {
        self.initialized != 0
    }

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            initialized:                             r.read_u8()?,
            reward_token_flag:                       r.read_u8()?,
            padding_0:                               r.read_array()?,
            padding_1:                               r.read_array()?,
            mint:                                    r.read_pubkey()?,
            vault:                                   r.read_pubkey()?,
            funder:                                  r.read_pubkey()?,
            reward_duration:                         r.read_u64()?,
            reward_duration_end:                     r.read_u64()?,
            reward_rate:                             r.read_u128()?,
            reward_per_token_stored:                 r.read_accumulator()?,
            last_update_time:                        r.read_u64()?,
            cumulative_seconds_with_empty_liquidity: r.read_u64()?,
        })
    }

    fn write(&self, w: &mut Writer) {
        w.put_u8(self.initialized);
        w.put_u8(self.reward_token_flag);
        w.put_bytes(&self.padding_0);
        w.put_bytes(&self.padding_1);
        w.put_pubkey(&self.mint);
        w.put_pubkey(&self.vault);
        w.put_pubkey(&self.funder);
        w.put_u64(self.reward_duration);
        w.put_u64(self.reward_duration_end);
        w.put_u128(self.reward_rate);
        w.put_accumulator(&self.reward_per_token_stored);
        w.put_u64(self.last_update_time);
        w.put_u64(self.cumulative_seconds_with_empty_liquidity);
    }
}

/// Deserialized cp-amm `Pool` account state.
///
/// Layout (after 8-byte Anchor discriminator):
/// ```text
/// pool_fees(160)  token_a_mint(32)  token_b_mint(32)  token_a_vault(32)
/// token_b_vault(32)  whitelisted_vault(32)  partner(32)  liquidity(16)
/// padding(16)  protocol_a_fee(8)  protocol_b_fee(8)  partner_a_fee(8)
/// partner_b_fee(8)  sqrt_min_price(16)  sqrt_max_price(16)  sqrt_price(16)
/// activation_point(8)  activation_type(1)  pool_status(1)  token_a_flag(1)
/// token_b_flag(1)  collect_fee_mode(1)  pool_type(1)  padding_0(2)
/// fee_a_per_liquidity(32)  fee_b_per_liquidity(32)
/// permanent_lock_liquidity(16)  metrics(80)  padding_1(80)
/// reward_infos(2 × 192)  = 1112 bytes
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub pool_fees:                PoolFeesStruct,
    pub token_a_mint:             Pubkey,
    pub token_b_mint:             Pubkey,
    pub token_a_vault:            Pubkey,
    pub token_b_vault:            Pubkey,
    pub whitelisted_vault:        Pubkey,
    pub partner:                  Pubkey,
    /// Total liquidity across all positions.
    pub liquidity:                u128,
    pub padding:                  u128,
    pub protocol_a_fee:           u64,
    pub protocol_b_fee:           u64,
    pub partner_a_fee:            u64,
    pub partner_b_fee:            u64,
    pub sqrt_min_price:           u128,
    pub sqrt_max_price:           u128,
    pub sqrt_price:               u128,
    pub activation_point:         u64,
    pub activation_type:          u8,
    pub pool_status:              u8,
    pub token_a_flag:             u8,
    pub token_b_flag:             u8,
    pub collect_fee_mode:         u8,
    pub pool_type:                u8,
    pub padding_0:                [u8; 2],
    /// Cumulative token-A fee per unit of liquidity, Q64.64.
    pub fee_a_per_liquidity:      Accumulator,
    /// Cumulative token-B fee per unit of liquidity, Q64.64.
    pub fee_b_per_liquidity:      Accumulator,
    pub permanent_lock_liquidity: u128,
    pub metrics:                  PoolMetrics,
    pub padding_1:                [u64; 10],
    pub reward_infos:             [RewardInfo; NUM_REWARDS],
}

impl PoolState {
    pub const DISCRIMINATOR: [u8; 8] = POOL_DISCRIMINATOR;
    pub const LEN: usize = POOL_LEN;

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            pool_fees:                PoolFeesStruct::read(r)?,
            token_a_mint:             r.read_pubkey()?,
            token_b_mint:             r.read_pubkey()?,
            token_a_vault:            r.read_pubkey()?,
            token_b_vault:            r.read_pubkey()?,
            whitelisted_vault:        r.read_pubkey()?,
            partner:                  r.read_pubkey()?,
            liquidity:                r.read_u128()?,
            padding:                  r.read_u128()?,
            protocol_a_fee:           r.read_u64()?,
            protocol_b_fee:           r.read_u64()?,
            partner_a_fee:            r.read_u64()?,
            partner_b_fee:            r.read_u64()?,
            sqrt_min_price:           r.read_u128()?,
            sqrt_max_price:           r.read_u128()?,
            sqrt_price:               r.read_u128()?,
            activation_point:         r.read_u64()?,
            activation_type:          r.read_u8()?,
            pool_status:              r.read_u8()?,
            token_a_flag:             r.read_u8()?,
            token_b_flag:             r.read_u8()?,
            collect_fee_mode:         r.read_u8()?,
            pool_type:                r.read_u8()?,
            padding_0:                r.read_array()?,
            fee_a_per_liquidity:      r.read_accumulator()?,
            fee_b_per_liquidity:      r.read_accumulator()?,
            permanent_lock_liquidity: r.read_u128()?,
            metrics:                  PoolMetrics::read(r)?,
            padding_1:                r.read_u64_array()?,
            reward_infos:             [RewardInfo::read(r)?, RewardInfo::read(r)?],
        })
    }

    /// Re-encode to the on-chain byte layout, discriminator included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = Writer::with_capacity(Self::LEN);
        w.put_bytes(&Self::DISCRIMINATOR);
        self.pool_fees.write(&mut w);
        w.put_pubkey(&self.token_a_mint);
        w.put_pubkey(&self.token_b_mint);
        w.put_pubkey(&self.token_a_vault);
        w.put_pubkey(&self.token_b_vault);
        w.put_pubkey(&self.whitelisted_vault);
        w.put_pubkey(&self.partner);
        w.put_u128(self.liquidity);
        w.put_u128(self.padding);
        w.put_u64(self.protocol_a_fee);
        w.put_u64(self.protocol_b_fee);
        w.put_u64(self.partner_a_fee);
        w.put_u64(self.partner_b_fee);
        w.put_u128(self.sqrt_min_price);
        w.put_u128(self.sqrt_max_price);
        w.put_u128(self.sqrt_price);
        w.put_u64(self.activation_point);
        w.put_u8(self.activation_type);
        w.put_u8(self.pool_status);
        w.put_u8(self.token_a_flag);
        w.put_u8(self.token_b_flag);
        w.put_u8(self.collect_fee_mode);
        w.put_u8(self.pool_type);
        w.put_bytes(&self.padding_0);
        w.put_accumulator(&self.fee_a_per_liquidity);
        w.put_accumulator(&self.fee_b_per_liquidity);
        w.put_u128(self.permanent_lock_liquidity);
        self.metrics.write(&mut w);
        w.put_u64_slice(&self.padding_1);
        self.reward_infos.iter().for_each(|info| info.write(&mut w));
        w.into_inner()
    }
}

/// Deserialize a `Pool` account from raw bytes.
pub fn parse_pool(data: &[u8]) -> Result<PoolState> {
    let mut r = open(data, RecordKind::Pool)?;
    let pool = PoolState::read(&mut r)?;
    tracing::trace!(len = data.len(), consumed = r.offset(), "decoded pool account");
    Ok(pool)
}

// ─── Position ─────────────────────────────────────────────────────────────────

/// Lifetime fee claims of a position (16 bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionMetrics {
    pub total_claimed_a_fee: u64,
    pub total_claimed_b_fee: u64,
}

/// Per-position view of one reward channel (48 bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRewardInfo {
    /// `reward_per_token_stored` snapshot at the position's last update.
    pub reward_per_token_checkpoint: Accumulator,
    /// Rewards settled into the position but not yet claimed.
    pub reward_pendings:             u64,
    pub total_claimed_rewards:       u64,
}

impl UserRewardInfo {
    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            reward_per_token_checkpoint: r.read_accumulator()?,
            reward_pendings:             r.read_u64()?,
            total_claimed_rewards:       r.read_u64()?,
        })
    }

    fn write(&self, w: &mut Writer) {
        w.put_accumulator(&self.reward_per_token_checkpoint);
        w.put_u64(self.reward_pendings);
        w.put_u64(self.total_claimed_rewards);
    }
}

/// Deserialized cp-amm `Position` account state.
///
/// Layout (after 8-byte Anchor discriminator):
/// ```text
/// pool(32)  nft_mint(32)  fee_a_per_token_checkpoint(32)
/// fee_b_per_token_checkpoint(32)  fee_a_pending(8)  fee_b_pending(8)
/// unlocked_liquidity(16)  vested_liquidity(16)  permanent_locked_liquidity(16)
/// metrics(16)  reward_infos(2 × 48)  padding(6 × 16)  = 408 bytes
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionState {
    pub pool:                       Pubkey,
    pub nft_mint:                   Pubkey,
    /// `fee_a_per_liquidity` snapshot at the position's last update.
    pub fee_a_per_token_checkpoint: Accumulator,
    /// `fee_b_per_liquidity` snapshot at the position's last update.
    pub fee_b_per_token_checkpoint: Accumulator,
    /// Fees settled into the position but not yet claimed.
    pub fee_a_pending:              u64,
    pub fee_b_pending:              u64,
    pub unlocked_liquidity:         u128,
    pub vested_liquidity:           u128,
    pub permanent_locked_liquidity: u128,
    pub metrics:                    PositionMetrics,
    pub reward_infos:               [UserRewardInfo; NUM_REWARDS],
    pub padding:                    [u128; 6],
}

impl PositionState {
    pub const DISCRIMINATOR: [u8; 8] = POSITION_DISCRIMINATOR;
    pub const LEN: usize = POSITION_LEN;

    /// Unlocked + vested + permanently locked liquidity (wrapping).
    pub fn total_liquidity(&self) -> u128 {
        self.unlocked_liquidity
            .wrapping_add(self.vested_liquidity)
            .wrapping_add(self.permanent_locked_liquidity)
    }

    fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            pool:                       r.read_pubkey()?,
            nft_mint:                   r.read_pubkey()?,
            fee_a_per_token_checkpoint: r.read_accumulator()?,
            fee_b_per_token_checkpoint: r.read_accumulator()?,
            fee_a_pending:              r.read_u64()?,
            fee_b_pending:              r.read_u64()?,
            unlocked_liquidity:         r.read_u128()?,
            vested_liquidity:           r.read_u128()?,
            permanent_locked_liquidity: r.read_u128()?,
            metrics: PositionMetrics {
                total_claimed_a_fee: r.read_u64()?,
                total_claimed_b_fee: r.read_u64()?,
            },
            reward_infos:               [UserRewardInfo::read(r)?, UserRewardInfo::read(r)?],
            padding:                    r.read_u128_array()?,
        })
    }

    /// Re-encode to the on-chain byte layout, discriminator included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut w = Writer::with_capacity(Self::LEN);
        w.put_bytes(&Self::DISCRIMINATOR);
        w.put_pubkey(&self.pool);
        w.put_pubkey(&self.nft_mint);
        w.put_accumulator(&self.fee_a_per_token_checkpoint);
        w.put_accumulator(&self.fee_b_per_token_checkpoint);
        w.put_u64(self.fee_a_pending);
        w.put_u64(self.fee_b_pending);
        w.put_u128(self.unlocked_liquidity);
        w.put_u128(self.vested_liquidity);
        w.put_u128(self.permanent_locked_liquidity);
        w.put_u64(self.metrics.total_claimed_a_fee);
        w.put_u64(self.metrics.total_claimed_b_fee);
        self.reward_infos.iter().for_each(|info| info.write(&mut w));
        w.put_u128_slice(&self.padding);
        w.into_inner()
    }
}

/// Deserialize a `Position` account from raw bytes.
pub fn parse_position(data: &[u8]) -> Result<PositionState> {
    let mut r = open(data, RecordKind::Position)?;
    let position = PositionState::read(&mut r)?;
    tracing::trace!(len = data.len(), consumed = r.offset(), "decoded position account");
    Ok(position)
}

// ─── Kind dispatch ────────────────────────────────────────────────────────────

/// Decode `data` as the account layout named by `kind`.
pub fn decode(data: &[u8], kind: RecordKind) -> Result<Record> {
    match kind {
        RecordKind::Pool => parse_pool(data).map(|pool| Record::Pool(Box::new(pool))),
        RecordKind::Position => parse_position(data).map(Record::Position),
    }
}

/// Check the discriminator and return a reader positioned just past it.
fn open(data: &[u8], kind: RecordKind) -> Result<Reader<'_>> {
    let mut r = Reader::new(data);
    let found: [u8; DISCRIMINATOR_LEN] = r.read_array()?;
    let expected = kind.discriminator();
    if found != expected {
        return Err(Error::TagMismatch { kind, expected, found });
    }
    Ok(r)
}

// ─── SPL token account ────────────────────────────────────────────────────────

/// Packed SPL token account.
///
/// Layout:
/// ```text
/// mint(32)  owner(32)  amount(8)  delegate(4+32)  state(1)
/// is_native(4+8)  delegated_amount(8)  close_authority(4+32)  = 165 bytes
/// ```
/// `COption` tags are a little-endian `u32`; zero means `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAccount {
    pub mint:             Pubkey,
    pub owner:            Pubkey,
    pub amount:           u64,
    pub delegate:         Option<Pubkey>,
    pub state:            u8,
    pub is_native:        Option<u64>,
    pub delegated_amount: u64,
    pub close_authority:  Option<Pubkey>,
}

impl TokenAccount {
    /// A position NFT account holds exactly one token of its mint.
    pub fn is_position_nft(&self) -> bool {
        self.amount == 1
    }
}

/// Deserialize a packed SPL token account (Token or Token-2022).
///
/// Token-2022 extension data after byte 165 is ignored. A shorter buffer fails
/// at the first field that does not fit.
pub fn parse_token_account(data: &[u8]) -> Result<TokenAccount> {
    let mut r = Reader::new(data);
    Ok(TokenAccount {
        mint:             r.read_pubkey()?,
        owner:            r.read_pubkey()?,
        amount:           r.read_u64()?,
        delegate:         read_coption(&mut r, Reader::read_pubkey)?,
        state:            r.read_u8()?,
        is_native:        read_coption(&mut r, Reader::read_u64)?,
        delegated_amount: r.read_u64()?,
        close_authority:  read_coption(&mut r, Reader::read_pubkey)?,
    })
}

/// The value slot is always present on the wire, set or not.
fn read_coption<'a, T>(
    r: &mut Reader<'a>,
    read: impl FnOnce(&mut Reader<'a>) -> Result<T>,
) -> Result<Option<T>> {
    let tag = r.read_u32()?;
    let value = read(r)?;
    Ok((tag != 0).then_some(value))
}
