use std::collections::HashMap;

use actix_web::{http::StatusCode, web, HttpResponse};
use leptos::*;
use tracing::info;

use crate::components::{
    listing_form::{EditListingForm, NewListingForm},
    listing_show::ListingShow,
    listings_index::ListingsIndex,
};
use crate::db::Database;
use crate::error::AppError;
use crate::models::listing::ListingInput;
use crate::render::{redirect, render_page};
use crate::routes::not_found;

pub const LISTING_NOT_FOUND: &str = "Listing you requested for does not exist!";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/listings")
            .route(web::get().to(index))
            .route(web::post().to(create))
            .default_service(web::to(not_found)),
    )
    // Registered before "/listings/{id}" so "new" is not taken for an id
    .service(
        web::resource("/listings/new")
            .route(web::get().to(new_form))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/listings/{id}")
            .route(web::get().to(show))
            .route(web::put().to(update))
            .route(web::delete().to(destroy))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/listings/{id}/edit")
            .route(web::get().to(edit_form))
            .default_service(web::to(not_found)),
    );
}

fn listing_not_found() -> AppError {
    AppError::NotFound(LISTING_NOT_FOUND.to_string())
}

async fn index(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let listings = db.list_listings().await?;
    Ok(render_page(StatusCode::OK, "All Listings", move || {
        view! { <ListingsIndex listings=listings/> }
    }))
}

async fn new_form() -> HttpResponse {
    render_page(StatusCode::OK, "New Listing", || view! { <NewListingForm/> })
}

async fn show(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let details = db
        .find_listing_with_reviews(&path)
        .await?
        .ok_or_else(listing_not_found)?;
    let title = details.listing.title.clone();

    Ok(render_page(StatusCode::OK, title, move || {
        view! { <ListingShow details=details/> }
    }))
}

async fn create(
    db: web::Data<Database>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let input = ListingInput::from_form(&form)?;
    let listing = db.insert_listing(&input).await?;
    info!(listing_id = %listing.id, title = %listing.title, "New listing added");
    Ok(redirect("/listings"))
}

async fn edit_form(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let listing = db.find_listing(&path).await?.ok_or_else(listing_not_found)?;
    Ok(render_page(StatusCode::OK, "Edit Listing", move || {
        view! { <EditListingForm listing=listing/> }
    }))
}

async fn update(
    db: web::Data<Database>,
    path: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = ListingInput::from_form(&form)?;
    db.update_listing(&id, &input).await?.ok_or_else(listing_not_found)?;
    Ok(redirect(&format!("/listings/{id}")))
}

async fn destroy(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if !db.delete_listing(&id).await? {
        info!(listing_id = %id, "Nothing to delete");
    }
    Ok(redirect("/listings"))
}
