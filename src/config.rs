//! Application configuration.
//!
//! Centralized configuration for the GiveHub frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Storage API base URL.
///
/// The object-storage backend that fundraiser documents are uploaded to.
pub const STORAGE_URL: &str = "http://localhost:3000";

/// Wallet provider identity.
///
/// Name of the browser extension the identity control connects to.
/// Exactly one provider is supported.
pub const WALLET_PROVIDER: &str = "petra";

/// Application name.
///
/// Displayed in the document title.
pub const APP_NAME: &str = "GiveHub";
