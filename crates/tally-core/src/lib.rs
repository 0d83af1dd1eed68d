//! # tally-core: Pure Checkout Pricing Logic
//!
//! This crate is the **heart** of Tally. It computes the total price for a
//! sequence of scanned retail items, applying per-item base pricing and
//! quantity-threshold discount rules, as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Tally Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │          Embedding Application (POS front end, kiosk)         │  │
//! │  │        scan barcode ──► show total ──► print receipt          │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │ in-process API                   │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │               ★ tally-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌─────────┐ ┌────────┐ │  │
//! │  │  │ product │ │  money   │ │ catalog │ │ ledger  │ │checkout│ │  │
//! │  │  │ Product │ │TotalPrice│ │ prices  │ │ history │ │session │ │  │
//! │  │  └─────────┘ └──────────┘ └─────────┘ └─────────┘ └────────┘ │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The `Product` identifier
//! - [`money`] - `TotalPrice` with integer arithmetic (no floating point!)
//! - [`catalog`] - Base prices and the discount rule table
//! - [`ledger`] - Append-only scan history
//! - [`checkout`] - Session orchestration
//! - [`shared`] - Optional thread-safe session wrapper
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same scans,
//!    same total
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (u64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **No Singletons**: The catalog is a value injected per session, so
//!    every session is independent and test-substitutable
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Checkout, Product, TotalPrice};
//!
//! let mut checkout = Checkout::new();
//! checkout.scan(Product::new("A"))?;
//! checkout.scan(Product::new("A"))?;
//! checkout.scan(Product::new("A"))?;
//!
//! // Every third A is charged at the discounted unit price:
//! // 50 + 50 + 30
//! assert_eq!(checkout.total_price(), TotalPrice::from_cents(130));
//! # Ok::<(), tally_core::CheckoutError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod money;
pub mod product;
pub mod shared;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Checkout` instead of
// `use tally_core::checkout::Checkout`

pub use catalog::{DiscountRule, PriceCatalog};
pub use checkout::{Checkout, CheckoutTotals};
pub use error::{CheckoutError, CheckoutResult};
pub use ledger::ScanLedger;
pub use money::TotalPrice;
pub use product::Product;
pub use shared::SharedCheckout;
