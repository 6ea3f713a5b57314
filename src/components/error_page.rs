use leptos::*;

#[component]
pub fn ErrorPage(status: u16, message: String) -> impl IntoView {
    view! {
        <div class="error-page">
            <h4>{status.to_string()}</h4>
            <p class="error-message">{message}</p>
            <a class="btn" href="/listings">"Back to listings"</a>
        </div>
    }
}
