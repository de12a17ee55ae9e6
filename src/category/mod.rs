//! Category registry for matchup
//!
//! One engine, five configurations. Everything that varies between product
//! categories lives in a static `CategoryConfig`; dispatch is a lookup by
//! `CategoryKey`.
//!
//! # Design Principles
//!
//! - Configurations are `'static` and never mutated
//! - Guard, fast-path and rollback tables are data, not control flow
//! - Every table can be audited with `CategoryConfig::validate`

mod bodywash;
mod cleanser;
mod condition;
mod conditioner;
mod config;
mod errors;
mod hairwash;
mod key;
mod lotion;

pub use condition::Condition;
pub use config::{
    CategoryConfig, ChoiceDef, Counterfactual, Exclusion, FastPathRule, Guard, Ingredient,
    OutcomeBundle, RollbackRule, SlotDef, StaticProduct, UsageModifier,
};
pub use errors::{ConfigError, ConfigErrorCode, ConfigResult};
pub use key::{CategoryKey, UnknownCategory};

/// Configuration registered for `key`.
pub fn config(key: CategoryKey) -> &'static CategoryConfig {
    match key {
        CategoryKey::HairWash => &hairwash::CONFIG,
        CategoryKey::BodyWash => &bodywash::CONFIG,
        CategoryKey::Cleanser => &cleanser::CONFIG,
        CategoryKey::Conditioner => &conditioner::CONFIG,
        CategoryKey::Lotion => &lotion::CONFIG,
    }
}

/// Resolves a routed path segment to its configuration.
pub fn lookup(segment: &str) -> Result<&'static CategoryConfig, UnknownCategory> {
    segment.parse::<CategoryKey>().map(config)
}

/// Every registered configuration, in menu order.
pub fn all() -> impl Iterator<Item = &'static CategoryConfig> {
    CategoryKey::ALL.into_iter().map(config)
}
