mod common;

use common::*;
use cp_amm_sdk::{
    decode, parse_pool, parse_position, Error, PoolState, PositionState, Record, RecordKind,
};
use solana_sdk::pubkey::Pubkey;

fn pk(tag: u8) -> Pubkey {
    Pubkey::new_from_array(key(tag))
}

// ─── Pool ─────────────────────────────────────────────────────────────────────

fn populated_pool() -> Vec<u8> {
    let mut b = pool_buffer();

    // base fee
    put_u64(&mut b, 8, 2_500_000);
    b[16] = 1;
    put(&mut b, 17, &[0xd1, 0xd2, 0xd3, 0xd4, 0xd5]);
    put_u16(&mut b, 22, 180);
    put_u64(&mut b, 24, 60);
    put_u64(&mut b, 32, 1_000);
    put_u64(&mut b, 40, 0xdead_beef);
    b[48] = 20;
    b[49] = 30;
    b[50] = 10;
    put(&mut b, 51, &[0xe1; 5]);

    // dynamic fee
    b[56] = 1;
    put(&mut b, 57, &[0xf7; 7]);
    put_u32(&mut b, 64, 14_460_000);
    put_u32(&mut b, 68, 5_000);
    put_u16(&mut b, 72, 1);
    put_u16(&mut b, 74, 10);
    put_u16(&mut b, 76, 120);
    put_u16(&mut b, 78, 5_000);
    put_u64(&mut b, 80, 1_700_000_000);
    put_words(&mut b, 88, 1, 1);
    put_words(&mut b, 104, 2, 0);
    put_words(&mut b, 120, 3, 4);
    put_words(&mut b, 136, 0, 5);
    put_u64(&mut b, 152, 11);
    put_u64(&mut b, 160, 12);

    for (i, offset) in (168..360).step_by(32).enumerate() {
        put(&mut b, offset, &key(i as u8 + 1));
    }

    put_words(&mut b, 360, 123, 456);
    put_words(&mut b, 376, 0x55, 0x66);
    put_u64(&mut b, 392, 101);
    put_u64(&mut b, 400, 102);
    put_u64(&mut b, 408, 103);
    put_u64(&mut b, 416, 104);
    put_words(&mut b, 424, 4_295_048_016, 0);
    put_words(&mut b, 440, 0, 0x0001_0000);
    put_words(&mut b, 456, 0x8000_0000_0000_0000, 1);
    put_u64(&mut b, 472, 999);
    put(&mut b, 480, &[1, 2, 3, 4, 5, 6, 0xaa, 0xbb]);

    put_accumulator(&mut b, 488, 1u128 << 70);
    // nonzero upper half is kept verbatim but ignored numerically
    put(&mut b, 504, &[0x99; 16]);
    put_accumulator(&mut b, 520, 77);
    put_words(&mut b, 552, 9, 0);

    put_words(&mut b, 568, 1, 2);
    put_words(&mut b, 584, 3, 4);
    for (i, offset) in (600..648).step_by(8).enumerate() {
        put_u64(&mut b, offset, 200 + i as u64);
    }
    for (i, offset) in (648..728).step_by(8).enumerate() {
        put_u64(&mut b, offset, 300 + i as u64);
    }

    for (ch, base) in [728usize, 920].into_iter().enumerate() {
        let ch = ch as u8;
        b[base] = 1 - ch;
        b[base + 1] = ch;
        put(&mut b, base + 2, &[0xc0 + ch; 6]);
        put(&mut b, base + 8, &[0xc8 + ch; 8]);
        put(&mut b, base + 16, &key(10 + ch));
        put(&mut b, base + 48, &key(20 + ch));
        put(&mut b, base + 80, &key(30 + ch));
        put_u64(&mut b, base + 112, 86_400);
        put_u64(&mut b, base + 120, 1_800_000_000 + ch as u64);
        put_words(&mut b, base + 128, 500 + ch as u64, 1);
        put_accumulator(&mut b, base + 144, (ch as u128 + 1) << 64);
        put_u64(&mut b, base + 176, 1_750_000_000);
        put_u64(&mut b, base + 184, 42 + ch as u64);
    }
    b
}

#[test]
fn pool_fields_land_at_documented_offsets() {
    let pool = parse_pool(&populated_pool()).unwrap();

    let base = &pool.pool_fees.base_fee;
    assert_eq!(base.cliff_fee_numerator, 2_500_000);
    assert_eq!(base.fee_scheduler_mode, 1);
    assert_eq!(base.padding_0, [0xd1, 0xd2, 0xd3, 0xd4, 0xd5]);
    assert_eq!(base.number_of_period, 180);
    assert_eq!(base.period_frequency, 60);
    assert_eq!(base.reduction_factor, 1_000);
    assert_eq!(base.padding_1, 0xdead_beef);
    assert_eq!(pool.pool_fees.protocol_fee_percent, 20);
    assert_eq!(pool.pool_fees.partner_fee_percent, 30);
    assert_eq!(pool.pool_fees.referral_fee_percent, 10);
    assert_eq!(pool.pool_fees.padding_0, [0xe1; 5]);

    let dynamic = &pool.pool_fees.dynamic_fee;
    assert_eq!(dynamic.initialized, 1);
    assert_eq!(dynamic.padding, [0xf7; 7]);
    assert_eq!(dynamic.max_volatility_accumulator, 14_460_000);
    assert_eq!(dynamic.variable_fee_control, 5_000);
    assert_eq!(dynamic.bin_step, 1);
    assert_eq!(dynamic.filter_period, 10);
    assert_eq!(dynamic.decay_period, 120);
    assert_eq!(dynamic.reduction_factor, 5_000);
    assert_eq!(dynamic.last_update_timestamp, 1_700_000_000);
    assert_eq!(dynamic.bin_step_u128, (1u128 << 64) + 1);
    assert_eq!(dynamic.sqrt_price_reference, 2);
    assert_eq!(dynamic.volatility_accumulator, (4u128 << 64) + 3);
    assert_eq!(dynamic.volatility_reference, 5u128 << 64);
    assert_eq!(pool.pool_fees.padding_1, [11, 12]);

    assert_eq!(pool.token_a_mint, pk(1));
    assert_eq!(pool.token_b_mint, pk(2));
    assert_eq!(pool.token_a_vault, pk(3));
    assert_eq!(pool.token_b_vault, pk(4));
    assert_eq!(pool.whitelisted_vault, pk(5));
    assert_eq!(pool.partner, pk(6));

    assert_eq!(pool.liquidity, (456u128 << 64) + 123);
    assert_eq!(pool.padding, (0x66u128 << 64) + 0x55);
    assert_eq!(
        [pool.protocol_a_fee, pool.protocol_b_fee, pool.partner_a_fee, pool.partner_b_fee],
        [101, 102, 103, 104]
    );
    assert_eq!(pool.sqrt_min_price, 4_295_048_016);
    assert_eq!(pool.sqrt_max_price, 0x0001_0000u128 << 64);
    assert_eq!(pool.sqrt_price, (1u128 << 64) + 0x8000_0000_0000_0000);
    assert_eq!(pool.activation_point, 999);
    assert_eq!(
        [
            pool.activation_type,
            pool.pool_status,
            pool.token_a_flag,
            pool.token_b_flag,
            pool.collect_fee_mode,
            pool.pool_type,
        ],
        [1, 2, 3, 4, 5, 6]
    );
    assert_eq!(pool.padding_0, [0xaa, 0xbb]);

    assert_eq!(pool.fee_a_per_liquidity.to_u128(), 1u128 << 70);
    assert_eq!(pool.fee_a_per_liquidity.as_bytes()[16..], [0x99; 16]);
    assert_eq!(pool.fee_b_per_liquidity.to_u128(), 77);
    assert_eq!(pool.permanent_lock_liquidity, 9);

    let m = &pool.metrics;
    assert_eq!(m.total_lp_a_fee, (2u128 << 64) + 1);
    assert_eq!(m.total_lp_b_fee, (4u128 << 64) + 3);
    assert_eq!(
        [
            m.total_protocol_a_fee,
            m.total_protocol_b_fee,
            m.total_partner_a_fee,
            m.total_partner_b_fee,
            m.total_position,
            m.padding,
        ],
        [200, 201, 202, 203, 204, 205]
    );
    assert_eq!(pool.padding_1, [300, 301, 302, 303, 304, 305, 306, 307, 308, 309]);

    for (ch, info) in pool.reward_infos.iter().enumerate() {
        let c = ch as u8;
        assert_eq!(info.initialized, 1 - c);
        assert_eq!(info.is_initialized(), ch == 0);
        assert_eq!(info.reward_token_flag, c);
        assert_eq!(info.padding_0, [0xc0 + c; 6]);
        assert_eq!(info.padding_1, [0xc8 + c; 8]);
        assert_eq!(info.mint, pk(10 + c));
        assert_eq!(info.vault, pk(20 + c));
        assert_eq!(info.funder, pk(30 + c));
        assert_eq!(info.reward_duration, 86_400);
        assert_eq!(info.reward_duration_end, 1_800_000_000 + ch as u64);
        assert_eq!(info.reward_rate, (1u128 << 64) + 500 + ch as u128);
        assert_eq!(info.reward_per_token_stored.to_u128(), (ch as u128 + 1) << 64);
        assert_eq!(info.last_update_time, 1_750_000_000);
        assert_eq!(info.cumulative_seconds_with_empty_liquidity, 42 + ch as u64);
    }
}

#[test]
fn pool_reencodes_byte_for_byte() {
    let bytes = populated_pool();
    assert_eq!(parse_pool(&bytes).unwrap().to_bytes(), bytes);
}

// ─── Position ─────────────────────────────────────────────────────────────────

fn populated_position() -> Vec<u8> {
    let mut b = position_buffer();
    put(&mut b, 8, &key(1));
    put(&mut b, 40, &key(2));
    put_accumulator(&mut b, 72, 1u128 << 39);
    put(&mut b, 88, &[0x5a; 16]);
    put_accumulator(&mut b, 104, 1u128 << 90);
    put_u64(&mut b, 136, 1_000);
    put_u64(&mut b, 144, 2_000);
    put_words(&mut b, 152, 10, 0);
    put_words(&mut b, 168, 0, 20);
    put_words(&mut b, 184, 30, 30);
    put_u64(&mut b, 200, 7);
    put_u64(&mut b, 208, 8);
    for (ch, base) in [216usize, 264].into_iter().enumerate() {
        put_accumulator(&mut b, base, 1_000 + ch as u128);
        put_u64(&mut b, base + 32, 5 - 5 * ch as u64);
        put_u64(&mut b, base + 40, 60 + ch as u64);
    }
    for (i, offset) in (312..408).step_by(16).enumerate() {
        put_words(&mut b, offset, i as u64, 0xee);
    }
    b
}

#[test]
fn position_fields_land_at_documented_offsets() {
    let pos = parse_position(&populated_position()).unwrap();

    assert_eq!(pos.pool, pk(1));
    assert_eq!(pos.nft_mint, pk(2));
    assert_eq!(pos.fee_a_per_token_checkpoint.to_u128(), 1u128 << 39);
    assert_eq!(pos.fee_a_per_token_checkpoint.as_bytes()[16..], [0x5a; 16]);
    assert_eq!(pos.fee_b_per_token_checkpoint.to_u128(), 1u128 << 90);
    assert_eq!(pos.fee_a_pending, 1_000);
    assert_eq!(pos.fee_b_pending, 2_000);
    assert_eq!(pos.unlocked_liquidity, 10);
    assert_eq!(pos.vested_liquidity, 20u128 << 64);
    assert_eq!(pos.permanent_locked_liquidity, (30u128 << 64) + 30);
    assert_eq!(pos.total_liquidity(), (50u128 << 64) + 40);
    assert_eq!(pos.metrics.total_claimed_a_fee, 7);
    assert_eq!(pos.metrics.total_claimed_b_fee, 8);

    assert_eq!(pos.reward_infos[0].reward_per_token_checkpoint.to_u128(), 1_000);
    assert_eq!(pos.reward_infos[0].reward_pendings, 5);
    assert_eq!(pos.reward_infos[0].total_claimed_rewards, 60);
    assert_eq!(pos.reward_infos[1].reward_per_token_checkpoint.to_u128(), 1_001);
    assert_eq!(pos.reward_infos[1].reward_pendings, 0);
    assert_eq!(pos.reward_infos[1].total_claimed_rewards, 61);

    for (i, word) in pos.padding.iter().enumerate() {
        assert_eq!(*word, (0xeeu128 << 64) + i as u128);
    }
}

#[test]
fn position_reencodes_byte_for_byte() {
    let bytes = populated_position();
    assert_eq!(parse_position(&bytes).unwrap().to_bytes(), bytes);
}

// ─── Validation ───────────────────────────────────────────────────────────────

#[test]
fn any_other_tag_is_rejected() {
    for i in 0..8 {
        let mut bytes = populated_pool();
        bytes[i] ^= 0x01;
        assert!(matches!(
            parse_pool(&bytes),
            Err(Error::TagMismatch { kind: RecordKind::Pool, .. })
        ));
    }

    let mut bytes = populated_position();
    bytes[7] = 0;
    assert!(matches!(
        parse_position(&bytes),
        Err(Error::TagMismatch { kind: RecordKind::Position, .. })
    ));
}

#[test]
fn kinds_are_not_interchangeable() {
    assert!(matches!(
        decode(&populated_pool(), RecordKind::Position),
        Err(Error::TagMismatch { kind: RecordKind::Position, .. })
    ));
    assert!(matches!(
        decode(&populated_position(), RecordKind::Pool),
        Err(Error::TagMismatch { kind: RecordKind::Pool, .. })
    ));
}

#[test]
fn short_discriminator_is_buffer_too_short() {
    let full = populated_pool();
    for len in 0..8 {
        assert_eq!(
            parse_pool(&full[..len]),
            Err(Error::BufferTooShort { offset: 0, needed: 8, len })
        );
    }
}

#[test]
fn truncation_mid_field_is_buffer_too_short() {
    // liquidity low word spans 360..368
    let pool = populated_pool();
    assert_eq!(
        parse_pool(&pool[..365]),
        Err(Error::BufferTooShort { offset: 360, needed: 8, len: 365 })
    );

    // one byte short of the trailing padding
    let position = populated_position();
    assert_eq!(
        parse_position(&position[..PositionState::LEN - 1]),
        Err(Error::BufferTooShort { offset: 400, needed: 8, len: PositionState::LEN - 1 })
    );
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut bytes = populated_pool();
    let expected = parse_pool(&bytes).unwrap();
    bytes.extend_from_slice(&[0xff; 64]);
    assert_eq!(parse_pool(&bytes).unwrap(), expected);

    let mut bytes = populated_position();
    let expected = parse_position(&bytes).unwrap();
    bytes.push(1);
    assert_eq!(decode(&bytes, RecordKind::Position).unwrap(), Record::Position(expected));
}

#[test]
fn decoded_state_serializes_to_json() {
    let pool: PoolState = parse_pool(&populated_pool()).unwrap();
    let json = serde_json::to_string(&pool).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pool_fees"]["base_fee"]["cliff_fee_numerator"], 2_500_000);
    assert_eq!(value["activation_point"], 999);

    let back: PoolState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pool);
}
