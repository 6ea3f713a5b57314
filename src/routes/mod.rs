//! HTTP surface: route table, method override and the catch-all.
use std::collections::HashMap;

use actix_files::Files;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse},
    http::Method,
    middleware::Logger,
    web, App, HttpRequest, HttpResponse,
};
use tracing::debug;

use crate::db::Database;
use crate::error::{AppError, PAGE_NOT_FOUND};
use crate::render::redirect;

pub mod listings;
pub mod reviews;

/// Builds the application around an already-initialized store.
pub fn create_app(
    db: web::Data<Database>,
    assets_dir: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(db)
        .app_data(form_config())
        .wrap_fn(|mut req, srv| {
            override_method(&mut req);
            srv.call(req)
        })
        .wrap(Logger::default())
        .service(
            web::resource("/")
                .route(web::get().to(root))
                .default_service(web::to(not_found)),
        )
        .configure(listings::configure)
        .configure(reviews::configure)
        .service(Files::new("/assets", assets_dir))
        .default_service(web::to(not_found))
}

/// Lets HTML forms reach PUT and DELETE routes via `POST ...?_method=PUT`.
pub fn override_method(req: &mut ServiceRequest) {
    if req.method() != Method::POST {
        return;
    }

    let requested = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.get("_method").map(|m| m.to_ascii_uppercase()));
    let method = match requested.as_deref() {
        Some("PUT") => Method::PUT,
        Some("PATCH") => Method::PATCH,
        Some("DELETE") => Method::DELETE,
        _ => return,
    };

    debug!(path = req.path(), %method, "overriding POST method");
    req.head_mut().method = method;
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req: &HttpRequest| AppError::BadRequest(err.to_string()).into())
}

async fn root() -> HttpResponse {
    redirect("/listings")
}

/// Terminal handler for unknown paths and undeclared methods on known ones.
pub(crate) async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(PAGE_NOT_FOUND.to_string()))
}
