use leptos::*;

#[component]
pub fn ReviewForm(listing_id: String) -> impl IntoView {
    let action = format!("/listings/{listing_id}/reviews");

    view! {
        <div class="review-form">
            <h4>"Leave a Review"</h4>
            <form method="POST" action=action>
                <label for="rating">"Rating"</label>
                <input id="rating" type="range" name="review[rating]" min="1" max="5" value="3"/>

                <label for="comment">"Comments"</label>
                <textarea id="comment" name="review[comment]" rows="4" cols="30"></textarea>

                <button type="submit" class="btn">"Submit"</button>
            </form>
        </div>
    }
}
