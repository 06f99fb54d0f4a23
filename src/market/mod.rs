//! Market navigation and oracle aggregation.
//!
//! Lendgines are partitioned into long and short sides relative to a base
//! token and navigated by bound with [`next_highest`] / [`next_lowest`].
//! The oracle helpers merge external reference prices into one exact
//! median.

mod oracle;
mod selection;

pub use oracle::{median_from_source, median_price, median_price_for, orient_price};
pub use selection::{
    is_long_lendgine, next_highest, next_lowest, partition_by_orientation, pick_long, pick_short,
    select_default_lendgine, Anchor,
};
