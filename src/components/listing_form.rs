use leptos::*;
use crate::models::listing::Listing;

/// Creation form; every field starts empty.
#[component]
pub fn NewListingForm() -> impl IntoView {
    let values = FormValues::default();
    view! {
        <ListingForm
            heading="Create a New Listing"
            action="/listings"
            submit_label="Add"
            values=values
        />
    }
}

/// Edit form pre-populated from `listing`; submits as PUT.
#[component]
pub fn EditListingForm(listing: Listing) -> impl IntoView {
    let action = format!("/listings/{}?_method=PUT", listing.id);
    let values = FormValues::from(&listing);
    view! {
        <ListingForm
            heading="Edit your Listing"
            action=action
            submit_label="Edit"
            values=values
        />
    }
}

/// Field values a listing form starts out with.
#[derive(Debug, Clone, Default)]
struct FormValues {
    title: String,
    description: String,
    image: String,
    price: String,
    location: String,
    country: String,
}

impl From<&Listing> for FormValues {
    fn from(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            description: listing.description.clone(),
            image: listing.image.clone().unwrap_or_default(),
            price: listing.price.to_string(),
            location: listing.location.clone(),
            country: listing.country.clone(),
        }
    }
}

#[component]
fn ListingForm(
    #[prop(into)] heading: String,
    #[prop(into)] action: String,
    #[prop(into)] submit_label: String,
    values: FormValues,
) -> impl IntoView {
    let FormValues {
        title,
        description,
        image,
        price,
        location,
        country,
    } = values;

    view! {
        <div class="form-page">
            <h3>{heading}</h3>
            <form method="POST" action=action class="listing-form">
                <label for="title">"Title"</label>
                <input id="title" type="text" name="listing[title]" placeholder="Enter a catchy title" value=title/>

                <label for="description">"Description"</label>
                <textarea id="description" name="listing[description]" rows="4">{description}</textarea>

                <label for="image">"Image Link"</label>
                <input id="image" type="text" name="listing[image]" placeholder="Enter image URL/Link" value=image/>

                <label for="price">"Price"</label>
                <input id="price" type="number" name="listing[price]" min="0" step="any" placeholder="1200" value=price/>

                <label for="country">"Country"</label>
                <input id="country" type="text" name="listing[country]" placeholder="India" value=country/>

                <label for="location">"Location"</label>
                <input id="location" type="text" name="listing[location]" placeholder="Jaipur, Rajasthan" value=location/>

                <button type="submit" class="btn">{submit_label}</button>
            </form>
        </div>
    }
}
