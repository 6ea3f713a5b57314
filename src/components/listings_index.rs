//! Index view: every listing as a card linking to its show page.
use leptos::*;
use crate::models::listing::Listing;

#[component]
pub fn ListingsIndex(listings: Vec<Listing>) -> impl IntoView {
    let body = if listings.is_empty() {
        view! { <p class="empty">"No listings yet."</p> }.into_view()
    } else {
        listings
            .into_iter()
            .map(|listing| view! { <ListingCard listing=listing/> })
            .collect_view()
    };

    view! {
        <h3>"All Listings"</h3>
        <div class="listings">{body}</div>
    }
}

#[component]
fn ListingCard(listing: Listing) -> impl IntoView {
    let href = format!("/listings/{}", listing.id);
    let image = listing.image_url().to_string();
    let price = listing.display_price();
    let title = listing.title;

    view! {
        <a class="listing-link" href=href>
            <div class="card listing-card">
                <img class="card-img" src=image alt="listing image"/>
                <div class="card-body">
                    <p class="card-text">
                        <b>{title}</b>
                        <br/>
                        "₹ " {price} " / night"
                    </p>
                </div>
            </div>
        </a>
    }
}
