//! UI Components for the GiveHub application.
//!
//! # Layout Components
//! - [`Navbar`] - navigation bar with the wallet identity control
//!
//! # Feature Components
//! - [`FundraiserForm`] - document upload for charity fundraisers
//!
//! # Pages
//! - [`HomePage`], [`AuctionPage`], [`GrantsPage`], [`CharityPage`]

mod fundraiser_form;
mod navbar;
mod pages;

pub use fundraiser_form::*;
pub use navbar::*;
pub use pages::*;
