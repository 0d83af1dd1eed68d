//! # Scan Ledger Module
//!
//! Append-only history of the products scanned in one checkout session.
//!
//! The ledger is deliberately narrow: callers can append and count, and get
//! a read-only view of the history, but nothing outside this module can
//! rewrite it. Discount eligibility depends on exact per-product counts, so
//! the scan history must not be editable after the fact.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Ordered, append-only record of scanned products.
///
/// Order is insertion order. The ledger grows for the lifetime of one
/// checkout session; there is no upper bound and no removal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanLedger {
    entries: Vec<Product>,
}

impl ScanLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        ScanLedger::default()
    }

    /// Appends a product to the end of the ledger.
    pub fn add(&mut self, product: Product) {
        self.entries.push(product);
    }

    /// Counts how many entries equal `product`.
    ///
    /// Only scans of this specific product contribute; interleaved scans of
    /// other products do not affect the count. O(n) over the ledger, which
    /// is fine for checkout-sized histories.
    pub fn count_of(&self, product: &Product) -> usize {
        self.entries.iter().filter(|p| *p == product).count()
    }

    /// Number of scans recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if nothing has been scanned yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of the scan history, in scan order.
    #[inline]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }
}
