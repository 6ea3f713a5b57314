//! Page chrome shared by every rendered view: head, navbar and footer.
use leptos::*;

#[component]
pub fn Layout(title: String, children: Children) -> impl IntoView {
    let title = format!("{title} | Wanderlust");
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <link rel="stylesheet" href="/assets/style.css"/>
            </head>
            <body>
                <Navbar/>
                <main class="container">{children()}</main>
                <Footer/>
            </body>
        </html>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="brand" href="/listings">"Wanderlust"</a>
            <a href="/listings">"All Listings"</a>
            <a href="/listings/new">"Add New Listing"</a>
        </nav>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© Wanderlust Private Limited"</p>
        </footer>
    }
}
