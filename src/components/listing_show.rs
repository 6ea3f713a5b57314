//! Show view for a single listing, with its reviews resolved.
use leptos::*;
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::models::listing::ListingWithReviews;

#[component]
pub fn ListingShow(details: ListingWithReviews) -> impl IntoView {
    let ListingWithReviews { listing, reviews } = details;

    let edit_href = format!("/listings/{}/edit", listing.id);
    let delete_action = format!("/listings/{}?_method=DELETE", listing.id);
    let image = listing.image_url().to_string();
    let price = listing.display_price();
    let place = format!("{}, {}", listing.location, listing.country);
    let form_listing_id = listing.id.clone();
    let list_listing_id = listing.id;
    let title = listing.title;
    let description = listing.description;

    view! {
        <div class="show">
            <h3>{title}</h3>
            <div class="card show-card">
                <img class="card-img" src=image alt="listing image"/>
                <div class="card-body">
                    <p class="card-text">{description}</p>
                    <p class="card-text">"₹ " {price} " / night"</p>
                    <p class="card-text">{place}</p>
                </div>
            </div>
            <div class="actions">
                <a class="btn" href=edit_href>"Edit"</a>
                <form method="POST" action=delete_action>
                    <button type="submit" class="btn btn-dark">"Delete"</button>
                </form>
            </div>
            <hr/>
            <ReviewForm listing_id=form_listing_id/>
            <ReviewsList listing_id=list_listing_id reviews=reviews/>
        </div>
    }
}
