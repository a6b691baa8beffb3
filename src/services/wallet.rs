//! Wrapper for the injected Aptos-compatible wallet extension (Petra).

use leptos::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::config::WALLET_PROVIDER;
use crate::types::{AppError, AppResult};

/// Account information returned by the wallet extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    pub address: String,
    #[serde(default)]
    pub public_key: Option<String>,
}

/// Wallet-connection capability shared through the Leptos context.
///
/// The extension owns the real connection state; this object mirrors the
/// observed `connected`/`address` pair into signals and forwards
/// connect/disconnect requests to the browser bridge. Views read the
/// signals and never write them directly.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub connected: ReadSignal<bool>,
    pub address: ReadSignal<Option<String>>,
    set_connected: WriteSignal<bool>,
    set_address: WriteSignal<Option<String>>,
}

impl WalletContext {
    /// Create a disconnected wallet context.
    pub fn new() -> Self {
        let (connected, set_connected) = create_signal(false);
        let (address, set_address) = create_signal(None::<String>);

        Self {
            connected,
            address,
            set_connected,
            set_address,
        }
    }

    /// Fetch the context provided by `App`.
    pub fn use_wallet() -> Self {
        use_context::<WalletContext>().expect("WalletContext to be provided")
    }

    /// Check whether the named wallet extension is injected into the page.
    pub fn is_available(provider: &str) -> bool {
        let window = web_sys::window().expect("no global window");

        let has_provider = js_sys::Reflect::get(&window, &JsValue::from_str(provider))
            .map(|v| !v.is_null() && !v.is_undefined())
            .unwrap_or(false);

        if has_provider {
            log::info!("✅ {} extension detected", provider);
        } else {
            log::warn!("⚠️  No {} extension found", provider);
        }

        has_provider
    }

    /// Connect to the named provider and mirror the returned account.
    pub async fn connect(&self, provider: &str) -> AppResult<WalletAccount> {
        if !Self::is_available(provider) {
            return Err(AppError::Wallet(format!(
                "No {} extension found. Please install it and reload the page.",
                provider
            )));
        }

        log::info!("🔌 Connecting to {} wallet...", provider);

        let result = JsFuture::from(connect_wallet(provider))
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to connect wallet: {:?}", e)))?;

        let account: WalletAccount = serde_wasm_bindgen::from_value(result)
            .map_err(|e| AppError::Wallet(format!("Failed to parse account: {}", e)))?;

        log::info!("✅ Wallet connected: {}", account.address);

        self.set_connected.set(true);
        self.set_address.set(Some(account.address.clone()));

        Ok(account)
    }

    /// Disconnect from the extension and clear the mirrored state.
    pub async fn disconnect(&self) -> AppResult<()> {
        JsFuture::from(disconnect_wallet(WALLET_PROVIDER))
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to disconnect wallet: {:?}", e)))?;

        log::info!("👋 Wallet disconnected");

        self.set_connected.set(false);
        self.set_address.set(None);

        Ok(())
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Import of the JavaScript bridge functions from wallet.js
#[wasm_bindgen(module = "/src/js/wallet.js")]
extern "C" {
    #[wasm_bindgen(js_name = "connectWallet")]
    fn connect_wallet(provider: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "disconnectWallet")]
    fn disconnect_wallet(provider: &str) -> js_sys::Promise;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserialization() {
        let json = r#"{
            "address": "0x1234567890abcdef",
            "publicKey": "0xfeedface"
        }"#;

        let account: WalletAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.address, "0x1234567890abcdef");
        assert_eq!(account.public_key.as_deref(), Some("0xfeedface"));
    }

    #[test]
    fn test_account_without_public_key() {
        let json = r#"{"address": "0xabc"}"#;

        let account: WalletAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.public_key, None);
    }

    #[test]
    fn test_context_starts_disconnected() {
        let runtime = create_runtime();

        let wallet = WalletContext::new();
        assert!(!wallet.connected.get_untracked());
        assert_eq!(wallet.address.get_untracked(), None);

        runtime.dispose();
    }
}
