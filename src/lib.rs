//! # Lendgine Engine
//!
//! Exact-rational valuation and accrual engine for power-perpetual
//! lendgine markets.
//!
//! Lenders supply bounded-range liquidity to a *lendgine*; borrowers mint
//! leveraged exposure against it and pay a utilization-based interest
//! rate that dilutes the borrowed principal into collateral owed to
//! lenders. This crate is the client-side projection of that protocol
//! state:
//!
//! - **Price/reserve curve**: reserves ↔ implied price, LP valuation.
//! - **Jump-rate model**: utilization → borrow rate → supply rate.
//! - **Accrual and position accounting**: time-based dilution into a
//!   reward-per-position accumulator, lazy per-position settlement, and
//!   estimators for deposit, withdraw, mint, burn and pair-burn sizing.
//! - **Lendgine selection**: long/short partitioning and bound neighbors.
//! - **Oracle aggregation**: exact median of reference prices.
//!
//! Every magnitude is an arbitrary-precision rational, so results are
//! bit-identical across runs and never drift from integer settlement.
//! All functions are pure over immutable snapshots; the crate performs no
//! I/O and holds no mutable state.
//!
//! # Quick Start
//!
//! ```rust
//! use lendgine_engine::accounting::{accrue, reconcile_position};
//! use lendgine_engine::config::RateModel;
//! use lendgine_engine::domain::{
//!     Decimals, Fraction, Lendgine, LendgineInfo, LendginePosition, Price, Token, TokenAddress,
//!     TokenAmount,
//! };
//!
//! // 1. Identify the market
//! let usdc = Token::new(1, TokenAddress::from_bytes([1u8; 20]), Decimals::MAX);
//! let weth = Token::new(1, TokenAddress::from_bytes([2u8; 20]), Decimals::MAX);
//! let share = Token::new(1, TokenAddress::from_bytes([3u8; 20]), Decimals::MAX);
//! let bound = Price::from_fraction(&Fraction::from_integer(3000), usdc, weth);
//! let lendgine = Lendgine::new(usdc, weth, share, bound).expect("valid lendgine");
//!
//! // 2. A snapshot read from the protocol: 80 of 100 liquidity borrowed
//! let units = |n: u64| TokenAmount::from_units(share, &Fraction::from_integer(n));
//! let info = LendgineInfo {
//!     total_liquidity: units(20),
//!     total_liquidity_borrowed: units(80),
//!     total_supply: units(80),
//!     total_position_size: units(100),
//!     last_update: 1_700_000_000,
//!     ..LendgineInfo::empty(&lendgine)
//! };
//!
//! // 3. Project it one day forward and settle a lender
//! let params = RateModel::Pmmp.params();
//! let accrued = accrue(&lendgine, &info, &params, 1_700_086_400).expect("accrued");
//! let position = LendginePosition { size: units(100), ..LendginePosition::empty(&lendgine) };
//! let settled = reconcile_position(&accrued, &position).expect("reconciled");
//!
//! assert!(accrued.total_liquidity_borrowed.raw() < info.total_liquidity_borrowed.raw());
//! assert!(!settled.tokens_owed.is_zero());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Collaborator │  StateReader / ReferencePriceSource (I/O lives here)
//! └──────┬───────┘
//!        │ snapshots
//!        ▼
//! ┌──────────────┐
//! │  accounting   │  accrue, reconcile, estimators   market: selection, oracle
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │     math      │  price/reserve curve, jump-rate model
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    domain     │  Fraction, TokenAmount, Price, Pair, Lendgine, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Fraction`](domain::Fraction), [`TokenAmount`](domain::TokenAmount), [`Price`](domain::Price), [`Lendgine`](domain::Lendgine), etc. |
//! | [`math`] | Price/reserve curve, jump-rate model, [`div_round`](math::div_round) |
//! | [`accounting`] | [`accrue`](accounting::accrue), [`reconcile_position`](accounting::reconcile_position), estimators |
//! | [`market`] | Lendgine selection and oracle median |
//! | [`config`] | [`RateModel`](config::RateModel) table and [`ProtocolConfig`](config::ProtocolConfig) loading |
//! | [`traits`] | [`FromConfig`](traits::FromConfig), [`StateReader`](traits::StateReader), [`ReferencePriceSource`](traits::ReferencePriceSource) |
//! | [`error`] | [`EngineError`](error::EngineError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and functions |

pub mod accounting;
pub mod config;
pub mod domain;
pub mod error;
pub mod market;
pub mod math;
pub mod prelude;
pub mod traits;
