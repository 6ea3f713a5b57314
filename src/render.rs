use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use leptos::*;

use crate::components::layout::Layout;

/// Renders `content` inside the site layout as a complete HTML document.
pub fn render_page<F, N>(status: StatusCode, title: impl Into<String>, content: F) -> HttpResponse
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let title = title.into();
    let html = leptos::ssr::render_to_string(move || {
        let body = content().into_view();
        view! {
            <Layout title=title>
                {body}
            </Layout>
        }
    });

    HttpResponse::build(status)
        .content_type(header::ContentType::html())
        .body(format!("<!DOCTYPE html>{html}"))
}

/// `302 Found` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
