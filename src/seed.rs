use crate::models::listing::ListingInput;

fn listing(
    title: &str,
    description: &str,
    image: Option<&str>,
    price: f64,
    location: &str,
    country: &str,
) -> ListingInput {
    ListingInput {
        title: title.to_string(),
        description: description.to_string(),
        image: image.map(str::to_string),
        price,
        location: location.to_string(),
        country: country.to_string(),
    }
}

/// Sample listings loaded by the `init_db` binary.
pub fn sample_listings() -> Vec<ListingInput> {
    vec![
        listing(
            "Cozy Beachfront Cottage",
            "Escape to this charming beachfront cottage for a relaxing getaway. Enjoy stunning ocean views and easy access to the beach.",
            Some("https://images.unsplash.com/photo-1552733407-5d5c46c3bb3b?auto=format&fit=crop&w=800&q=60"),
            1500.0,
            "Malibu",
            "United States",
        ),
        listing(
            "Modern Loft in Downtown",
            "Stay in the heart of the city in this stylish loft apartment. Perfect for urban explorers!",
            Some("https://images.unsplash.com/photo-1501785888041-af3ef285b470?auto=format&fit=crop&w=800&q=60"),
            1200.0,
            "New York City",
            "United States",
        ),
        listing(
            "Mountain Retreat",
            "Unplug and unwind in this peaceful mountain cabin. Surrounded by nature, it's a perfect place to recharge.",
            None,
            1000.0,
            "Aspen",
            "United States",
        ),
        listing(
            "Historic Villa in Tuscany",
            "Experience the charm of Tuscany in this beautifully restored villa. Explore the rolling hills and vineyards.",
            Some("https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=800&q=60"),
            2500.0,
            "Florence",
            "Italy",
        ),
        listing(
            "Secluded Treehouse Getaway",
            "Live among the treetops in this unique treehouse retreat. A true nature lover's paradise.",
            Some("https://images.unsplash.com/photo-1488462237308-ecaa28b729d7?auto=format&fit=crop&w=800&q=60"),
            800.0,
            "Portland",
            "United States",
        ),
        listing(
            "Rustic Cabin by the Lake",
            "Spend your days fishing and kayaking on the serene lake. This cozy cabin is perfect for outdoor enthusiasts.",
            None,
            900.0,
            "Lake Tahoe",
            "United States",
        ),
    ]
}
