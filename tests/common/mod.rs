#![allow(dead_code)]

use actix_web::{body::MessageBody, dev::ServiceResponse, http::header, test, web};
use wanderlust::db::Database;

// In-memory store with the schema in place
pub async fn test_db() -> web::Data<Database> {
    let db = Database::new(":memory:").unwrap();
    db.create_schema().await.unwrap();
    web::Data::new(db)
}

pub fn listing_form<'a>(title: &'a str, price: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("listing[title]", title),
        ("listing[description]", "Cozy"),
        ("listing[price]", price),
        ("listing[location]", "X"),
        ("listing[country]", "Y"),
    ]
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).unwrap()
}
