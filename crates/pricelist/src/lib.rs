//! Price-list aggregate.
//!
//! A price list is a carrier's rate card: zones grouping destination
//! countries, and per-zone prices at weight brackets. It is validated as a
//! whole at construction and immutable afterwards except for deactivation.

pub mod price_list;
pub mod rate;
pub mod version;
pub mod zone;

pub use price_list::{CreatePriceList, PriceList, PriceListStatus};
pub use rate::Rate;
pub use version::Version;
pub use zone::{Zone, ZoneId};
