//! # Price Catalog Module
//!
//! The catalog holds two fixed tables, populated at construction time and
//! never mutated afterwards:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        PriceCatalog                                 │
//! │                                                                     │
//! │  Base prices (all sellable products)                                │
//! │  ┌──────────┬───────────┐                                           │
//! │  │ Product  │ TotalPrice│      Discount rules (subset)              │
//! │  ├──────────┼───────────┤      ┌──────────┬───────────┬──────────┐  │
//! │  │   "A"    │   $0.50   │      │ Product  │ threshold │ unit     │  │
//! │  │   "B"    │   $0.30   │      ├──────────┼───────────┼──────────┤  │
//! │  │   "C"    │   $0.20   │      │   "A"    │     3     │  $0.30   │  │
//! │  │   "D"    │   $0.15   │      │   "B"    │     2     │  $0.15   │  │
//! │  └──────────┴───────────┘      └──────────┴───────────┴──────────┘  │
//! │                                                                     │
//! │  Invariant: every product with a discount rule also has a base      │
//! │  price. Lookups on products outside the base table are errors.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discount eligibility is evaluated uniformly over the rule table
//! (`count % threshold == 0`); there is no per-product branching, so new
//! rules are one `with_discount` call away.
//!
//! The catalog is an explicit value passed into each [`Checkout`] session,
//! not a process-wide singleton, so tests can substitute their own tables.
//!
//! [`Checkout`]: crate::checkout::Checkout

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroU32;

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::TotalPrice;
use crate::product::Product;

// =============================================================================
// Discount Rule
// =============================================================================

/// A bulk discount rule for one product.
///
/// The rule fires on the scan that makes the product's running count an
/// exact multiple of `threshold`. On that scan the charged price is
/// `unit_price` instead of the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    /// Every `threshold`-th scan of the product is charged at the
    /// discounted unit price. NonZero: a zero threshold would make the
    /// multiple check meaningless.
    pub threshold: NonZeroU32,

    /// The discounted unit price charged on the triggering scan.
    pub unit_price: TotalPrice,
}

impl DiscountRule {
    /// Creates a rule from a threshold and a discounted unit price.
    ///
    /// ## Panics
    /// Panics if `threshold` is zero. Rules are constructed from fixed
    /// configuration at startup, so a zero threshold is a programming
    /// error, not a runtime condition.
    pub fn new(threshold: u32, unit_price: TotalPrice) -> Self {
        DiscountRule {
            threshold: NonZeroU32::new(threshold).expect("discount threshold must be non-zero"),
            unit_price,
        }
    }

    /// Checks whether a post-scan count triggers this rule.
    #[inline]
    pub fn applies_at(&self, count: usize) -> bool {
        count % self.threshold.get() as usize == 0
    }
}

// =============================================================================
// Price Catalog
// =============================================================================

/// Static mapping from product to prices.
///
/// ## Example
/// ```rust
/// use tally_core::catalog::PriceCatalog;
/// use tally_core::money::TotalPrice;
/// use tally_core::product::Product;
///
/// let catalog = PriceCatalog::new()
///     .with_price(Product::new("A"), TotalPrice::from_cents(50))
///     .with_discount(Product::new("A"), 3, TotalPrice::from_cents(30));
///
/// let price = catalog.base_price(&Product::new("A")).unwrap();
/// assert_eq!(price.cents(), 50);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceCatalog {
    /// Base unit price for every sellable product.
    base: HashMap<Product, TotalPrice>,

    /// Discount rules for the subset of products that carry one.
    discounts: HashMap<Product, DiscountRule>,
}

impl PriceCatalog {
    /// Creates an empty catalog. Populate with `with_price`/`with_discount`.
    pub fn new() -> Self {
        PriceCatalog::default()
    }

    /// The reference catalog used throughout the tests and docs:
    /// A=50, B=30, C=20, D=15; every third A charged at 30, every second
    /// B at 15.
    pub fn standard() -> Self {
        PriceCatalog::new()
            .with_price(Product::new("A"), TotalPrice::from_cents(50))
            .with_price(Product::new("B"), TotalPrice::from_cents(30))
            .with_price(Product::new("C"), TotalPrice::from_cents(20))
            .with_price(Product::new("D"), TotalPrice::from_cents(15))
            .with_discount(Product::new("A"), 3, TotalPrice::from_cents(30))
            .with_discount(Product::new("B"), 2, TotalPrice::from_cents(15))
    }

    /// Adds a base price entry (chainable).
    pub fn with_price(mut self, product: Product, price: TotalPrice) -> Self {
        self.base.insert(product, price);
        self
    }

    /// Adds a discount rule entry (chainable).
    pub fn with_discount(mut self, product: Product, threshold: u32, unit_price: TotalPrice) -> Self {
        self.discounts
            .insert(product, DiscountRule::new(threshold, unit_price));
        self
    }

    /// Returns the base unit price for a product.
    ///
    /// ## Errors
    /// `UnknownProduct` if the product has no base price entry.
    pub fn base_price(&self, product: &Product) -> CheckoutResult<TotalPrice> {
        self.base
            .get(product)
            .copied()
            .ok_or_else(|| CheckoutError::UnknownProduct {
                code: product.code().to_string(),
            })
    }

    /// Returns the discounted unit price for a product.
    ///
    /// ## Errors
    /// `NoDiscountRule` if the product has no discount rule.
    pub fn discount_price(&self, product: &Product) -> CheckoutResult<TotalPrice> {
        self.discount_rule(product)
            .map(|rule| rule.unit_price)
            .ok_or_else(|| CheckoutError::NoDiscountRule {
                code: product.code().to_string(),
            })
    }

    /// Returns the discount rule for a product, if it has one.
    #[inline]
    pub fn discount_rule(&self, product: &Product) -> Option<&DiscountRule> {
        self.discounts.get(product)
    }

    /// Checks whether a product has a base price entry.
    #[inline]
    pub fn contains(&self, product: &Product) -> bool {
        self.base.contains_key(product)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_base_prices() {
        let catalog = PriceCatalog::standard();

        for (code, cents) in [("A", 50), ("B", 30), ("C", 20), ("D", 15)] {
            let price = catalog.base_price(&Product::new(code)).unwrap();
            assert_eq!(price.cents(), cents, "base price of {}", code);
        }
    }

    #[test]
    fn test_standard_discount_prices() {
        let catalog = PriceCatalog::standard();

        let a = catalog.discount_price(&Product::new("A")).unwrap();
        assert_eq!(a.cents(), 30);

        let b = catalog.discount_price(&Product::new("B")).unwrap();
        assert_eq!(b.cents(), 15);
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let catalog = PriceCatalog::standard();

        let err = catalog.base_price(&Product::new("Z")).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::UnknownProduct {
                code: "Z".to_string()
            }
        );
    }

    #[test]
    fn test_product_without_rule_has_no_discount_price() {
        let catalog = PriceCatalog::standard();

        let err = catalog.discount_price(&Product::new("C")).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::NoDiscountRule {
                code: "C".to_string()
            }
        );
        assert!(catalog.discount_rule(&Product::new("C")).is_none());
    }

    #[test]
    fn test_rule_applies_at_multiples_of_threshold() {
        let rule = DiscountRule::new(3, TotalPrice::from_cents(30));

        assert!(!rule.applies_at(1));
        assert!(!rule.applies_at(2));
        assert!(rule.applies_at(3));
        assert!(!rule.applies_at(4));
        assert!(rule.applies_at(6));
    }

    #[test]
    #[should_panic(expected = "discount threshold must be non-zero")]
    fn test_zero_threshold_rejected() {
        DiscountRule::new(0, TotalPrice::from_cents(10));
    }

    #[test]
    fn test_custom_catalog_is_independent() {
        let catalog = PriceCatalog::new()
            .with_price(Product::new("COKE-330"), TotalPrice::from_cents(129))
            .with_discount(Product::new("COKE-330"), 6, TotalPrice::from_cents(99));

        assert!(catalog.contains(&Product::new("COKE-330")));
        assert!(!catalog.contains(&Product::new("A")));

        let rule = catalog.discount_rule(&Product::new("COKE-330")).unwrap();
        assert_eq!(rule.threshold.get(), 6);
        assert_eq!(rule.unit_price.cents(), 99);
    }
}
