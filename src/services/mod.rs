//! External collaborators.
//!
//! # Services
//!
//! - [`upload`] - document upload to the storage backend
//! - [`wallet`] - wallet extension integration (Petra and compatible)
//!
//! # JavaScript Bindings
//!
//! The wallet service binds to `src/js/wallet.js`, which talks to the
//! extension injected into the page.

pub mod upload;
pub mod wallet;

pub use upload::*;
pub use wallet::*;
