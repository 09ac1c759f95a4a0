//! Program identifiers, account discriminators and layout sizes.

use solana_sdk::pubkey::Pubkey;

// ─── Well-known program IDs ───────────────────────────────────────────────────

/// cp-amm (DAMM v2) program that owns pool and position accounts.
pub const CP_AMM_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("cpamdpZCGKUy5JxQXB4dcpGPiikHawvSWAd6mEn1sGG");

/// Metaplex token metadata program.
pub const METADATA_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
/// Classic SPL Token program.
pub const TOKEN_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
/// Position NFTs are minted under Token-2022.
pub const TOKEN_2022_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
/// Wrapped SOL mint.
pub const NATIVE_MINT: Pubkey = solana_sdk::pubkey!("So11111111111111111111111111111111111111112");

// ─── Anchor account discriminators ────────────────────────────────────────────

/// `sha256("account:Pool")[..8]`
pub const POOL_DISCRIMINATOR: [u8; 8] = [241, 154, 109, 4, 17, 177, 109, 188];
/// `sha256("account:Position")[..8]`
pub const POSITION_DISCRIMINATOR: [u8; 8] = [170, 188, 143, 228, 122, 64, 247, 208];

pub const DISCRIMINATOR_LEN: usize = 8;

// ─── Account sizes (discriminator included) ──────────────────────────────────

/// 8 + pool_fees(160) + keys(192) + liquidity/padding(32) + fees(32) + prices(48)
/// + activation/flags(16) + fee_per_liquidity(64) + permanent_lock(16)
/// + metrics(80) + padding(80) + reward_infos(2 × 192) = 1112
pub const POOL_LEN: usize = 1112;

/// 8 + keys(64) + checkpoints(64) + pending(16) + liquidity(48) + metrics(16)
/// + reward_infos(2 × 48) + padding(96) = 408
pub const POSITION_LEN: usize = 408;

/// Packed SPL token account (extensions, if any, follow and are ignored).
pub const TOKEN_ACCOUNT_LEN: usize = 165;

pub const NUM_REWARDS: usize = 2;

// ─── Fixed-point ─────────────────────────────────────────────────────────────

/// Fractional bits of the fee-per-liquidity accumulators (Q64.64).
pub const LIQUIDITY_SCALE: u32 = 64;

/// Bits dropped from liquidity before the multiply; the rest of the scale is
/// shifted out of the product.
pub const LIQUIDITY_PRE_SHIFT: u32 = 32;
