//! Product catalog for matchup
//!
//! A product lookup is decoration on a result page. It never changes the
//! outcome or the explanation text, and a failed lookup degrades to the
//! category's static fallback record.

mod lookup;
mod pick;

pub use lookup::{CatalogError, CatalogLookup, CatalogResult, ProductRecord, StaticCatalog};
pub use pick::{product_for, ProductPick, ProductSource};
