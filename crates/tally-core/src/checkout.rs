//! # Checkout Module
//!
//! Orchestrates one checkout session: scanning items, applying discount
//! eligibility, tracking the running total.
//!
//! ## Scan Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        scan(product)                                │
//! │                                                                     │
//! │  resolve base price ──► unknown product? ──► Err, nothing committed │
//! │          │                                                          │
//! │          ▼                                                          │
//! │  append to ledger  (count is evaluated AFTER the append)            │
//! │          │                                                          │
//! │          ▼                                                          │
//! │  rule for product AND count % threshold == 0 ?                      │
//! │     │yes                        │no                                 │
//! │     ▼                           ▼                                   │
//! │  charge discounted unit      charge base unit                       │
//! │          │                      │                                   │
//! │          └──────────┬───────────┘                                   │
//! │                     ▼                                               │
//! │            running_total += charged                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount Charging Semantics
//! The rule charges the discounted *unit* price on the triggering scan
//! only; earlier units of the same product were already charged at base
//! price and are not re-adjusted. Three A's therefore cost 50+50+30 = 130,
//! not a bundled 3-for-90.
//!
//! ## Thread Safety
//! A `Checkout` is a single-threaded session object. For shared access
//! across threads, wrap it in [`SharedCheckout`](crate::shared::SharedCheckout).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::catalog::PriceCatalog;
use crate::error::CheckoutResult;
use crate::ledger::ScanLedger;
use crate::money::TotalPrice;
use crate::product::Product;

// =============================================================================
// Checkout Session
// =============================================================================

/// One checkout session.
///
/// Owns its own ledger, running total, and catalog; sessions are fully
/// independent of each other. Create a fresh `Checkout` per customer.
///
/// ## Example
/// ```rust
/// use tally_core::checkout::Checkout;
/// use tally_core::product::Product;
///
/// let mut checkout = Checkout::new();
/// checkout.scan(Product::new("A")).unwrap();
/// checkout.scan(Product::new("B")).unwrap();
///
/// assert_eq!(checkout.total_price().cents(), 80);
/// ```
#[derive(Debug, Clone)]
pub struct Checkout {
    catalog: PriceCatalog,
    ledger: ScanLedger,
    running_total: TotalPrice,
    opened_at: DateTime<Utc>,
}

impl Checkout {
    /// Creates a session over the standard catalog.
    pub fn new() -> Self {
        Checkout::with_catalog(PriceCatalog::standard())
    }

    /// Creates a session over a caller-supplied catalog.
    ///
    /// This is the seam for tests and for embedders with their own price
    /// tables: the catalog is plain data, not a process-wide singleton.
    pub fn with_catalog(catalog: PriceCatalog) -> Self {
        Checkout {
            catalog,
            ledger: ScanLedger::new(),
            running_total: TotalPrice::zero(),
            opened_at: Utc::now(),
        }
    }

    /// Scans one product: records it in the ledger and adds its charged
    /// price to the running total.
    ///
    /// The charged price for this individual scan is the discounted unit
    /// price when the product has a discount rule and the post-scan count
    /// is an exact multiple of the rule threshold; otherwise it is the
    /// base price.
    ///
    /// ## Errors
    /// `UnknownProduct` if the catalog has no base price for `product`.
    /// A failed scan commits nothing: the ledger and running total are
    /// untouched, so discount eligibility for later scans is unaffected.
    pub fn scan(&mut self, product: Product) -> CheckoutResult<()> {
        // Price lookup happens before the append so an unknown product
        // cannot leave a half-committed scan behind.
        let base = self.catalog.base_price(&product)?;

        self.ledger.add(product.clone());
        let count = self.ledger.count_of(&product);

        let charged = match self.catalog.discount_rule(&product) {
            Some(rule) if rule.applies_at(count) => {
                debug!(product = %product, count, charged = %rule.unit_price, "scan: discount applied");
                rule.unit_price
            }
            _ => {
                debug!(product = %product, count, charged = %base, "scan: base price");
                base
            }
        };

        self.running_total += charged;
        Ok(())
    }

    /// Returns the current running total.
    ///
    /// `TotalPrice` is a value type, so the returned amount is an
    /// independent copy; later scans do not reach back into it.
    #[inline]
    pub fn total_price(&self) -> TotalPrice {
        self.running_total
    }

    /// Returns the catalog's base unit price for a product.
    ///
    /// ## Errors
    /// `UnknownProduct` if the product has no base price entry.
    pub fn product_price(&self, product: &Product) -> CheckoutResult<TotalPrice> {
        self.catalog.base_price(product)
    }

    /// Returns the catalog's discounted unit price for a product.
    ///
    /// ## Errors
    /// `NoDiscountRule` if the product has no discount rule.
    pub fn discounted_price(&self, product: &Product) -> CheckoutResult<TotalPrice> {
        self.catalog.discount_price(product)
    }

    /// Read-only view of the scan history.
    #[inline]
    pub fn ledger(&self) -> &ScanLedger {
        &self.ledger
    }

    /// When this session was opened.
    #[inline]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Summary snapshot for display or serialization.
    pub fn totals(&self) -> CheckoutTotals {
        CheckoutTotals::from(self)
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Checkout::new()
    }
}

// =============================================================================
// Checkout Totals
// =============================================================================

/// Session summary for API responses and receipts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTotals {
    /// Total number of scans in the session.
    pub items_scanned: usize,

    /// Number of distinct products scanned.
    pub distinct_products: usize,

    /// Running total in cents.
    pub total_cents: u64,
}

impl From<&Checkout> for CheckoutTotals {
    fn from(checkout: &Checkout) -> Self {
        let distinct: HashSet<&Product> = checkout.ledger.entries().iter().collect();
        CheckoutTotals {
            items_scanned: checkout.ledger.len(),
            distinct_products: distinct.len(),
            total_cents: checkout.running_total.cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckoutError;

    fn scan_all(checkout: &mut Checkout, codes: &[&str]) {
        for code in codes {
            checkout.scan(Product::new(*code)).unwrap();
        }
    }

    #[test]
    fn test_scanning_an_individual_product() {
        for (code, cents) in [("A", 50), ("B", 30), ("C", 20), ("D", 15)] {
            let mut checkout = Checkout::new();
            checkout.scan(Product::new(code)).unwrap();
            assert_eq!(
                checkout.total_price(),
                TotalPrice::from_cents(cents),
                "total after scanning one {}",
                code
            );
        }
    }

    #[test]
    fn test_scanning_one_of_each_product() {
        let mut checkout = Checkout::new();
        scan_all(&mut checkout, &["A", "B", "C", "D"]);

        assert_eq!(checkout.total_price(), TotalPrice::from_cents(115));
    }

    #[test]
    fn test_three_a_trigger_the_discount() {
        let mut checkout = Checkout::new();
        scan_all(&mut checkout, &["A", "A", "A"]);

        // 50 + 50 + 30: first two at base, third charged at the discounted
        // unit price. Not a 3-for-90 bundle.
        assert_eq!(checkout.total_price(), TotalPrice::from_cents(130));
    }

    #[test]
    fn test_two_b_trigger_the_discount() {
        let mut checkout = Checkout::new();
        scan_all(&mut checkout, &["B", "B"]);

        assert_eq!(checkout.total_price(), TotalPrice::from_cents(45)); // 30 + 15
    }

    #[test]
    fn test_three_a_and_two_b() {
        let mut checkout = Checkout::new();
        scan_all(&mut checkout, &["A", "A", "A", "B", "B"]);

        assert_eq!(checkout.total_price(), TotalPrice::from_cents(175)); // 130 + 45
    }

    #[test]
    fn test_discount_repeats_at_every_multiple() {
        let mut checkout = Checkout::new();
        scan_all(&mut checkout, &["A", "A", "A", "A", "A", "A"]);

        // Two triggering scans (3rd and 6th): (50+50+30) * 2
        assert_eq!(checkout.total_price(), TotalPrice::from_cents(260));

        let mut checkout = Checkout::new();
        scan_all(&mut checkout, &["B", "B", "B", "B", "B"]);

        // 30 + 15 + 30 + 15 + 30
        assert_eq!(checkout.total_price(), TotalPrice::from_cents(120));
    }

    #[test]
    fn test_interleaving_does_not_change_per_scan_charges() {
        let mut checkout = Checkout::new();
        scan_all(&mut checkout, &["A", "B", "A", "B", "A"]);

        // A counts reach 1, 2, 3 regardless of the B's in between:
        // 50 + 30 + 50 + 15 + 30
        assert_eq!(checkout.total_price(), TotalPrice::from_cents(175));
        assert_eq!(checkout.ledger().count_of(&Product::new("A")), 3);
        assert_eq!(checkout.ledger().count_of(&Product::new("B")), 2);
    }

    #[test]
    fn test_unknown_product_commits_nothing() {
        let mut checkout = Checkout::new();
        scan_all(&mut checkout, &["A", "A"]);

        let err = checkout.scan(Product::new("Z")).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::UnknownProduct {
                code: "Z".to_string()
            }
        );

        // Ledger and total untouched by the failed scan
        assert_eq!(checkout.ledger().len(), 2);
        assert_eq!(checkout.total_price(), TotalPrice::from_cents(100));

        // The next A still sees count 3 and triggers the discount
        checkout.scan(Product::new("A")).unwrap();
        assert_eq!(checkout.total_price(), TotalPrice::from_cents(130));
    }

    #[test]
    fn test_price_queries() {
        let checkout = Checkout::new();

        assert_eq!(
            checkout.product_price(&Product::new("A")).unwrap(),
            TotalPrice::from_cents(50)
        );
        assert_eq!(
            checkout.discounted_price(&Product::new("B")).unwrap(),
            TotalPrice::from_cents(15)
        );
        assert!(matches!(
            checkout.product_price(&Product::new("Z")),
            Err(CheckoutError::UnknownProduct { .. })
        ));
        assert!(matches!(
            checkout.discounted_price(&Product::new("D")),
            Err(CheckoutError::NoDiscountRule { .. })
        ));
    }

    #[test]
    fn test_total_price_is_an_independent_copy() {
        let mut checkout = Checkout::new();
        checkout.scan(Product::new("A")).unwrap();

        let snapshot = checkout.total_price();
        checkout.scan(Product::new("A")).unwrap();

        assert_eq!(snapshot, TotalPrice::from_cents(50));
        assert_eq!(checkout.total_price(), TotalPrice::from_cents(100));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Checkout::new();
        let mut second = Checkout::new();

        first.scan(Product::new("A")).unwrap();
        second.scan(Product::new("B")).unwrap();

        assert_eq!(first.total_price(), TotalPrice::from_cents(50));
        assert_eq!(second.total_price(), TotalPrice::from_cents(30));
    }

    #[test]
    fn test_custom_catalog_rule_table_generality() {
        // A third product with its own threshold works without any code
        // change; eligibility is driven purely by the rule table.
        let catalog = PriceCatalog::standard()
            .with_price(Product::new("E"), TotalPrice::from_cents(100))
            .with_discount(Product::new("E"), 4, TotalPrice::from_cents(60));

        let mut checkout = Checkout::with_catalog(catalog);
        for _ in 0..4 {
            checkout.scan(Product::new("E")).unwrap();
        }

        // 100 + 100 + 100 + 60
        assert_eq!(checkout.total_price(), TotalPrice::from_cents(360));
    }

    #[test]
    fn test_totals_summary() {
        let mut checkout = Checkout::new();
        scan_all(&mut checkout, &["A", "A", "B"]);

        let totals = checkout.totals();
        assert_eq!(totals.items_scanned, 3);
        assert_eq!(totals.distinct_products, 2);
        assert_eq!(totals.total_cents, 130); // 50 + 50 + 30

        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["itemsScanned"], 3);
        assert_eq!(json["totalCents"], 130);
    }
}
