//! Product choice for a rendered result

use serde::Serialize;

use super::lookup::{CatalogError, CatalogLookup, ProductRecord};
use crate::category::CategoryConfig;
use crate::content::Explanation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductSource {
    /// Fixed product named by the rollback rule that fired
    Rollback,
    Catalog,
    /// Static record after a failed lookup
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPick {
    pub source: ProductSource,
    /// `None` when the lookup failed and the category has no fallback
    pub product: Option<ProductRecord>,
    /// Lookup failure, when there was one
    #[serde(skip)]
    pub failure: Option<String>,
}

/// Chooses the product shown beside `explanation`.
pub fn product_for(
    config: &CategoryConfig,
    catalog: &dyn CatalogLookup,
    explanation: &Explanation,
) -> ProductPick {
    let fixed = explanation.rollback.as_ref().and_then(|note| {
        config
            .rollbacks
            .iter()
            .find(|rule| rule.name == note.rule)
            .and_then(|rule| rule.product.as_ref())
    });
    if let Some(product) = fixed {
        return ProductPick {
            source: ProductSource::Rollback,
            product: Some(ProductRecord::from_static(config.key, product)),
            failure: None,
        };
    }

    match catalog.find(config.key, config.featured_product) {
        Ok(product) => ProductPick {
            source: ProductSource::Catalog,
            product: Some(product),
            failure: None,
        },
        Err(err) => fallback(config, err),
    }
}

fn fallback(config: &CategoryConfig, err: CatalogError) -> ProductPick {
    ProductPick {
        source: ProductSource::Fallback,
        product: config
            .fallback_product
            .as_ref()
            .map(|p| ProductRecord::from_static(config.key, p)),
        failure: Some(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogResult, StaticCatalog};
    use crate::category::{config, CategoryKey};
    use crate::content::generate;
    use crate::resolver::resolve;
    use crate::signals::AnswerSet;

    struct Broken;

    impl CatalogLookup for Broken {
        fn find(&self, category: CategoryKey, _: Option<&str>) -> CatalogResult<ProductRecord> {
            Err(CatalogError::NoProduct(category))
        }
    }

    fn explain(key: CategoryKey, pairs: &[(&str, &str)]) -> Explanation {
        let cfg = config(key);
        let answers = pairs
            .iter()
            .fold(AnswerSet::new(), |a, (slot, value)| a.with_answer(cfg, slot, value));
        generate(cfg, &resolve(cfg, &answers).unwrap()).unwrap()
    }

    #[test]
    fn test_rollback_product_skips_lookup() {
        let cfg = config(CategoryKey::Cleanser);
        let explanation = explain(
            CategoryKey::Cleanser,
            &[
                ("skin", "dry-sensitive"),
                ("issue", "sting-red"),
                ("scene", "night-clean"),
                ("avoid", "strong-fragrance"),
            ],
        );
        assert!(explanation.rollback.is_some());

        let pick = product_for(cfg, &Broken, &explanation);
        assert_eq!(pick.source, ProductSource::Rollback);
        assert_eq!(pick.product.unwrap().brand, "Avène");
    }

    #[test]
    fn test_lookup_failure_falls_back() {
        let cfg = config(CategoryKey::HairWash);
        let explanation = explain(
            CategoryKey::HairWash,
            &[("scalp", "oily"), ("issue", "itch-dandruff")],
        );

        let pick = product_for(cfg, &Broken, &explanation);
        assert_eq!(pick.source, ProductSource::Fallback);
        assert!(pick.product.is_some());
        assert!(pick.failure.is_some());
    }

    #[test]
    fn test_fallback_may_be_empty() {
        let cfg = config(CategoryKey::Conditioner);
        let explanation = explain(
            CategoryKey::Conditioner,
            &[
                ("target", "tangle"),
                ("hair", "short"),
                ("use", "tips-quick"),
                ("avoid", "strong-fragrance"),
            ],
        );

        let pick = product_for(cfg, &StaticCatalog::default(), &explanation);
        assert_eq!(pick.source, ProductSource::Fallback);
        assert!(pick.product.is_none());
    }

    #[test]
    fn test_catalog_hit() {
        let cfg = config(CategoryKey::Lotion);
        let catalog = StaticCatalog::from_json(
            r#"[{"category": "lotion", "brand": "Listed", "name": "Body Milk"}]"#,
        )
        .unwrap();
        let explanation = explain(
            CategoryKey::Lotion,
            &[
                ("group", "stable-maintain"),
                ("issue", "none"),
                ("scene", "ac-room"),
                ("avoid", "none"),
            ],
        );

        let pick = product_for(cfg, &catalog, &explanation);
        assert_eq!(pick.source, ProductSource::Catalog);
        assert_eq!(pick.product.unwrap().brand, "Listed");
    }
}
