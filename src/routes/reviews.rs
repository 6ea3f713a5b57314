use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::Database;
use crate::error::AppError;
use crate::models::review::ReviewInput;
use crate::render::redirect;
use crate::routes::listings::LISTING_NOT_FOUND;
use crate::routes::not_found;

pub const REVIEW_NOT_FOUND: &str = "Review you requested for does not exist!";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/listings/{id}/reviews")
            .route(web::post().to(create))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/listings/{id}/reviews/{review_id}")
            .route(web::delete().to(destroy))
            .default_service(web::to(not_found)),
    );
}

async fn create(
    db: web::Data<Database>,
    path: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let listing_id = path.into_inner();
    let input = ReviewInput::from_form(&form)?;
    let review = db
        .add_review(&listing_id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(LISTING_NOT_FOUND.to_string()))?;

    info!(listing_id = %listing_id, review_id = %review.id, "New review saved");
    Ok(redirect(&format!("/listings/{listing_id}")))
}

async fn destroy(
    db: web::Data<Database>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (listing_id, review_id) = path.into_inner();
    if !db.remove_review(&listing_id, &review_id).await? {
        return Err(AppError::NotFound(REVIEW_NOT_FOUND.to_string()));
    }
    Ok(redirect(&format!("/listings/{listing_id}")))
}
