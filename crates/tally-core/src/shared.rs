//! # Shared Checkout State
//!
//! Optional thread-safe wrapper around a [`Checkout`] session.
//!
//! The core contract is single-threaded: one cashier, one till, one
//! session. Some embedders (a Tauri/desktop front end dispatching commands
//! from multiple threads, for instance) need shared access, so this module
//! provides it as an additive wrapper rather than baking a lock into
//! `Checkout` itself.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple command handlers may access/modify the session
//! 2. Only one handler should modify it at a time
//! 3. Scan operations are quick, so a plain `Mutex` beats an `RwLock`

use std::sync::{Arc, Mutex};

use crate::checkout::Checkout;

/// Cloneable handle to a checkout session shared across threads.
#[derive(Debug, Clone)]
pub struct SharedCheckout {
    inner: Arc<Mutex<Checkout>>,
}

impl SharedCheckout {
    /// Wraps a session for shared access.
    pub fn new(checkout: Checkout) -> Self {
        SharedCheckout {
            inner: Arc::new(Mutex::new(checkout)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = shared.with_checkout(|c| c.total_price());
    /// ```
    pub fn with_checkout<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Checkout) -> R,
    {
        let checkout = self.inner.lock().expect("Checkout mutex poisoned");
        f(&checkout)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// shared.with_checkout_mut(|c| c.scan(product))?;
    /// ```
    pub fn with_checkout_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Checkout) -> R,
    {
        let mut checkout = self.inner.lock().expect("Checkout mutex poisoned");
        f(&mut checkout)
    }
}

impl Default for SharedCheckout {
    fn default() -> Self {
        SharedCheckout::new(Checkout::new())
    }
}
