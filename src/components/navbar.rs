//! Navigation bar with wallet connection.

use leptos::*;
use leptos_router::A;

use crate::config::WALLET_PROVIDER;
use crate::services::wallet::WalletContext;

/// Shorten an account address for display: first 8 characters plus an
/// ellipsis. Addresses shorter than that keep all their characters.
pub fn shorten_address(address: Option<&str>) -> Option<String> {
    let address = address?;
    Some(format!("{}...", address.chars().take(8).collect::<String>()))
}

/// Label of the identity control for the given wallet state.
fn identity_label(connected: bool, address: Option<&str>) -> String {
    if connected {
        shorten_address(address).unwrap_or_default()
    } else {
        "SignIn".to_string()
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet = WalletContext::use_wallet();
    let (error, set_error) = create_signal(None::<String>);

    // Connect when disconnected, disconnect otherwise. The extension may
    // reject either call; the failure surfaces as a one-line indicator.
    let on_identity_click = move |_| {
        spawn_local(async move {
            set_error.set(None);

            let result = if wallet.connected.get_untracked() {
                wallet.disconnect().await
            } else {
                wallet.connect(WALLET_PROVIDER).await.map(|_| ())
            };

            if let Err(e) = result {
                log::error!("❌ {}", e);
                set_error.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <div>
            <nav class="navbar">
                <div class="navbar-left">
                    <h1 class="logo">"Logo"</h1>
                </div>
                <div class="navbar-links">
                    <A href="/auction">"Auction"</A>
                    <A href="/grants">"Grants"</A>
                    <A href="/charity">"Charity"</A>
                </div>
                <div class="navbar-right">
                    <button
                        class="identity-button"
                        class:connected=move || wallet.connected.get()
                        on:click=on_identity_click
                    >
                        {move || identity_label(wallet.connected.get(), wallet.address.get().as_deref())}
                    </button>
                    <Show
                        when=move || error.get().is_some()
                        fallback=|| view! { }
                    >
                        <span class="wallet-error">
                            {move || error.get().unwrap_or_default()}
                        </span>
                    </Show>
                </div>
            </nav>
            <hr/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_absent_address() {
        assert_eq!(shorten_address(None), None);
    }

    #[test]
    fn test_shorten_long_address() {
        assert_eq!(
            shorten_address(Some("0x1234567890ab")).as_deref(),
            Some("0x123456...")
        );
    }

    #[test]
    fn test_shorten_short_address() {
        // Shorter than the cutoff: whole string plus the ellipsis.
        assert_eq!(shorten_address(Some("0xab")).as_deref(), Some("0xab..."));
    }

    #[test]
    fn test_label_when_disconnected() {
        assert_eq!(identity_label(false, None), "SignIn");
        assert_eq!(identity_label(false, Some("0x1234567890ab")), "SignIn");
    }

    #[test]
    fn test_label_when_connected() {
        assert_eq!(identity_label(true, Some("0x1234567890ab")), "0x123456...");
    }

    #[test]
    fn test_label_when_connected_without_address() {
        assert_eq!(identity_label(true, None), "");
    }
}
