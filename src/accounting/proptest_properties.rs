//! Property-based tests using `proptest` for engine invariants.
//!
//! 1. **Curve round trip**: `reserves_to_price(price_to_reserves(p))` is `p`.
//! 2. **Monotone accumulator**: accrual over any time sequence never
//!    lowers `reward_per_position_stored` or raises borrowed liquidity.
//! 3. **Dilution clamp**: accrued borrowed liquidity stays non-negative.
//! 4. **Conservation**: collateral owed to every position sums to the
//!    collateral credited by accrual.
//! 5. **Median bounds**: the median lies within the inputs' range and does
//!    not depend on input order.

use proptest::prelude::*;

use super::{accrue, accrue_detailed, reconcile_position};
use crate::domain::{
    Decimals, Fraction, Lendgine, LendgineInfo, LendginePosition, Pair, PairInfo, Percent, Price,
    Token, TokenAddress, TokenAmount,
};
use crate::market::median_price;
use crate::math::{price_to_reserves, reserves_to_price, RateParams};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok(addr_byte: u8, dec: u8) -> Token {
    let Ok(d) = Decimals::new(dec) else {
        panic!("valid decimals");
    };
    Token::new(1, TokenAddress::from_bytes([addr_byte; 20]), d)
}

fn frac(n: u64, d: u64) -> Fraction {
    let Ok(f) = Fraction::new(n, d) else {
        panic!("valid fraction");
    };
    f
}

fn make_pair(bound: u64, base_dec: u8, spec_dec: u8) -> Pair {
    let (base, spec) = (tok(1, base_dec), tok(2, spec_dec));
    let price = Price::from_fraction(&Fraction::from_integer(bound), spec, base);
    let Ok(pair) = Pair::new(base, spec, tok(3, 18), price) else {
        panic!("valid pair");
    };
    pair
}

fn make_lendgine() -> Lendgine {
    let bound = Price::from_fraction(&Fraction::from_integer(5u8), tok(1, 18), tok(2, 6));
    let Ok(l) = Lendgine::new(tok(1, 18), tok(2, 6), tok(3, 18), bound) else {
        panic!("valid lendgine");
    };
    l
}

fn share(raw: u64) -> TokenAmount {
    TokenAmount::from_raw(tok(3, 18), raw)
}

fn make_info(lendgine: &Lendgine, liquidity: u64, borrowed: u64, sizes: &[u64]) -> LendgineInfo {
    LendgineInfo {
        total_liquidity: share(liquidity),
        total_liquidity_borrowed: share(borrowed),
        total_supply: share(borrowed),
        total_position_size: share(sizes.iter().sum()),
        last_update: 0,
        ..LendgineInfo::empty(lendgine)
    }
}

/// Steep enough that long gaps drive dilution into the clamp.
fn steep_params() -> RateParams {
    let Ok(p) = RateParams::new(
        Percent::new(frac(1, 2)),
        Percent::new(Fraction::from_integer(40u8)),
        Percent::new(Fraction::from_integer(400u16)),
    ) else {
        panic!("valid params");
    };
    p
}

// ---------------------------------------------------------------------------
// 1. Curve round trip
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn curve_round_trip(
        bound in 1u64..10_000,
        num in 0u64..=1_000,
        liquidity in 1u64..1_000_000,
        base_dec in 0u8..=18,
        spec_dec in 0u8..=18,
    ) {
        let pair = make_pair(bound, base_dec, spec_dec);
        // price = bound * num / 1000, always within [0, bound]
        let price = pair.bound().multiply(&frac(num, 1_000));
        let lp = TokenAmount::from_units(pair.lp_token(), &Fraction::from_integer(liquidity));
        let Ok((base_amount, speculative_amount)) = price_to_reserves(&price, &lp, &pair) else {
            panic!("price within bound");
        };
        let info = PairInfo { base_amount, speculative_amount, total_lp_supply: lp };
        let Ok(recovered) = reserves_to_price(&info, &pair) else {
            panic!("reserves on the curve");
        };
        prop_assert_eq!(recovered, price);
    }
}

// ---------------------------------------------------------------------------
// 2–3. Accrual monotonicity and clamp
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn accrual_is_monotone(
        liquidity in 0u64..1_000_000,
        borrowed in 1u64..1_000_000,
        steps in prop::collection::vec(0u64..400_000_000, 1..8),
    ) {
        let l = make_lendgine();
        let params = steep_params();
        let mut info = make_info(&l, liquidity, borrowed, &[liquidity + borrowed]);
        for now in steps {
            let Ok(next) = accrue(&l, &info, &params, now) else {
                panic!("accrual of a valid snapshot");
            };
            prop_assert!(next.reward_per_position_stored.raw() >= info.reward_per_position_stored.raw());
            prop_assert!(next.total_liquidity_borrowed.raw() <= info.total_liquidity_borrowed.raw());
            prop_assert!(!next.total_liquidity_borrowed.raw().is_negative());
            prop_assert!(next.last_update >= info.last_update);
            info = next;
        }
    }

    #[test]
    fn dilution_never_exceeds_borrowed(
        borrowed in 1u64..1_000_000,
        now in 0u64..u64::from(u32::MAX),
    ) {
        let l = make_lendgine();
        let info = make_info(&l, 0, borrowed, &[borrowed]);
        let Ok(outcome) = accrue_detailed(&l, &info, &steep_params(), now) else {
            panic!("accrual of a valid snapshot");
        };
        prop_assert!(outcome.dilution.raw() <= info.total_liquidity_borrowed.raw());
        let Ok(remaining) = info.total_liquidity_borrowed.checked_sub(&outcome.dilution) else {
            panic!("same token");
        };
        prop_assert_eq!(outcome.info.total_liquidity_borrowed, remaining);
    }
}

// ---------------------------------------------------------------------------
// 4. Conservation across positions
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn owed_collateral_is_conserved(
        borrowed in 1u64..1_000_000,
        sizes in prop::collection::vec(1u64..1_000_000, 1..6),
        now in 1u64..100_000_000,
    ) {
        let l = make_lendgine();
        let info = make_info(&l, 0, borrowed, &sizes);
        let Ok(outcome) = accrue_detailed(&l, &info, &steep_params(), now) else {
            panic!("accrual of a valid snapshot");
        };
        let mut total = TokenAmount::zero(l.token1());
        for size in sizes {
            let position = LendginePosition { size: share(size), ..LendginePosition::empty(&l) };
            let Ok(settled) = reconcile_position(&outcome.info, &position) else {
                panic!("matching tokens");
            };
            let Ok(sum) = total.checked_add(&settled.tokens_owed) else {
                panic!("same token");
            };
            total = sum;
        }
        prop_assert_eq!(total, outcome.collateral);
    }
}

// ---------------------------------------------------------------------------
// 5. Median bounds
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn median_within_range_and_order_free(
        values in prop::collection::vec(prop::option::of(1u64..1_000_000), 1..10),
    ) {
        prop_assume!(values.iter().any(Option::is_some));
        let (base, quote) = (tok(1, 18), tok(2, 6));
        let quotes: Vec<Option<Price>> = values
            .iter()
            .map(|v| v.map(|n| Price::from_fraction(&frac(n, 1_000), base, quote)))
            .collect();
        let Ok(median) = median_price(quotes.clone()) else {
            panic!("at least one quote");
        };
        let present: Vec<&Price> = quotes.iter().flatten().collect();
        let (Some(min), Some(max)) = (
            present.iter().map(|p| p.raw()).min(),
            present.iter().map(|p| p.raw()).max(),
        ) else {
            panic!("non-empty");
        };
        prop_assert!(median.raw() >= min && median.raw() <= max);

        let reversed: Vec<Option<Price>> = quotes.into_iter().rev().collect();
        prop_assert_eq!(median_price(reversed), Ok(median));
    }
}
