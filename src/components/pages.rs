//! Route pages.
//!
//! One component per navigation destination. Auction and Grants are
//! placeholders for now; Charity hosts the fundraiser form.

use leptos::*;

use crate::components::FundraiserForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"GiveHub"</h1>
            <p class="subtitle">
                "Auctions, grants and charity fundraisers, settled on-chain."
            </p>
        </div>
    }
}

#[component]
pub fn AuctionPage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Auction"</h1>
            <p class="subtitle">"Browse and bid on live auctions."</p>
        </div>
    }
}

#[component]
pub fn GrantsPage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Grants"</h1>
            <p class="subtitle">"Community grant rounds."</p>
        </div>
    }
}

#[component]
pub fn CharityPage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Charity"</h1>
            <p class="subtitle">
                "Create a fundraiser and upload its supporting document."
            </p>
        </div>
        <FundraiserForm/>
    }
}
