//! # Product Module
//!
//! The `Product` identifier used as the key for every catalog lookup.
//!
//! A product is nothing more than its code ("A", "COKE-330", ...). Equality
//! and hashing are by code value, case-sensitive, so a `Product` can key a
//! `HashMap` directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a sellable item.
///
/// ## Example
/// ```rust
/// use tally_core::product::Product;
///
/// let a = Product::new("A");
/// assert_eq!(a, Product::new("A"));
/// assert_ne!(a, Product::new("a")); // case-sensitive
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Product(String);

impl Product {
    /// Creates a product from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Product(code.into())
    }

    /// Returns the product code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Product {
    fn from(code: &str) -> Self {
        Product::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equality_is_by_code() {
        assert_eq!(Product::new("A"), Product::new("A"));
        assert_ne!(Product::new("A"), Product::new("B"));
        assert_ne!(Product::new("A"), Product::new("a"));
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut prices = HashMap::new();
        prices.insert(Product::new("A"), 50u64);

        assert_eq!(prices.get(&Product::new("A")), Some(&50));
        assert_eq!(prices.get(&Product::new("Z")), None);
    }

    #[test]
    fn test_display_shows_code() {
        assert_eq!(format!("{}", Product::new("COKE-330")), "COKE-330");
    }
}
