//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Catalog lookup miss                                                │
//! │  ├── UnknownProduct   - product has no base price entry             │
//! │  └── NoDiscountRule   - product has no discount rule                │
//! │                                                                     │
//! │  Both surface synchronously to the caller of the operation that     │
//! │  triggered them. No retry, no partial state, no logging layer:      │
//! │  scanning a product the catalog does not know about is a            │
//! │  configuration/usage error the embedding application must handle.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the product code)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Checkout pricing errors.
///
/// A failed operation leaves the checkout session exactly as it was: a scan
/// that errors commits nothing to the ledger or the running total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Product has no entry in the base price catalog.
    ///
    /// ## When This Occurs
    /// - Scanning a product the catalog was never configured with
    /// - Querying the base price of an unregistered product
    #[error("Unknown product: {code}")]
    UnknownProduct { code: String },

    /// Product has no discount rule.
    ///
    /// Only a subset of catalog products carry a bulk rule; asking for the
    /// discounted unit price of any other product is a usage error, not a
    /// zero-discount answer.
    #[error("No discount rule for product: {code}")]
    NoDiscountRule { code: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
