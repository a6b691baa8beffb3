//! GiveHub - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for a small giving dapp: connect a wallet from
//! the navigation bar, and upload fundraiser documents to remote storage
//! from the charity page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (links + wallet identity control)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /         HomePage                                      │
//! │  ├── /auction  AuctionPage                                   │
//! │  ├── /grants   GrantsPage                                    │
//! │  └── /charity  CharityPage ── FundraiserForm                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - hardcoded development configuration
//! - [`types`] - common types (AppError, etc.)
//! - [`components`] - UI components (Navbar, FundraiserForm, pages)
//! - [`services`] - external collaborators (upload, wallet)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One wallet capability for the whole app; views read it from context.
    provide_context(WalletContext::new());

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Navbar/>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/auction" view=AuctionPage/>
                    <Route path="/grants" view=GrantsPage/>
                    <Route path="/charity" view=CharityPage/>
                </Routes>
            </main>
        </Router>
    }
}
