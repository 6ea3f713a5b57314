use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(listing_id: String, reviews: Vec<Review>) -> impl IntoView {
    let items = if reviews.is_empty() {
        view! { <p class="empty">"No reviews yet."</p> }.into_view()
    } else {
        reviews
            .into_iter()
            .map(|review| {
                let action = format!("/listings/{}/reviews/{}?_method=DELETE", listing_id, review.id);
                let stars = review.stars();
                let posted = review.created_at.format("%b %d, %Y").to_string();
                view! {
                    <div class="card review-card">
                        <p class="stars">{stars}</p>
                        <p>{review.comment}</p>
                        <p class="posted">{posted}</p>
                        <form method="POST" action=action>
                            <button type="submit" class="btn btn-sm">"Delete"</button>
                        </form>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="reviews">
            <h4>"All Reviews"</h4>
            {items}
        </div>
    }
}
