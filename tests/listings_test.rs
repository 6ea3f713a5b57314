use actix_web::{http::StatusCode, test};
use wanderlust::error::PAGE_NOT_FOUND;
use wanderlust::routes::create_app;

mod common;
use common::{body_text, listing_form, location, test_db};

#[actix_web::test]
async fn test_root_redirects_to_index() {
    let db = test_db().await;
    let app = test::init_service(create_app(db, "assets")).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/listings");
}

#[actix_web::test]
async fn test_create_listing_appears_in_index_once() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;

    let req = test::TestRequest::post()
        .uri("/listings")
        .set_form(listing_form("Cabin in the Woods", "100"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/listings");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/listings").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert_eq!(html.matches("Cabin in the Woods").count(), 1);
    assert!(html.contains("100"));

    let listings = db.list_listings().await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].price, 100.0);
}

#[actix_web::test]
async fn test_create_without_price_is_rejected() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;

    let form: Vec<_> = listing_form("Cabin", "100")
        .into_iter()
        .filter(|(key, _)| *key != "listing[price]")
        .collect();
    let req = test::TestRequest::post().uri("/listings").set_form(form).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let html = body_text(resp).await;
    assert!(html.contains("listing.price"));
    assert!(html.contains("is required"));
    assert_eq!(db.count_listings().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_create_with_negative_price_is_rejected() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;

    let req = test::TestRequest::post()
        .uri("/listings")
        .set_form(listing_form("Cabin", "-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.count_listings().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_non_form_body_reaches_error_page() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;

    let req = test::TestRequest::post()
        .uri("/listings")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"listing":{"title":"Cabin"}}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("error-message"));
    assert_eq!(db.count_listings().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_new_form_renders() {
    let db = test_db().await;
    let app = test::init_service(create_app(db, "assets")).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/listings/new").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Create a New Listing"));
    assert!(html.contains("listing[title]"));
}

#[actix_web::test]
async fn test_show_and_edit_form() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;
    let req = test::TestRequest::post()
        .uri("/listings")
        .set_form(listing_form("Lakeside Lodge", "250"))
        .to_request();
    test::call_service(&app, req).await;
    let id = db.list_listings().await.unwrap()[0].id.clone();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/listings/{id}")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Lakeside Lodge"));
    assert!(html.contains("No reviews yet."));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/listings/{id}/edit")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Edit your Listing"));
    assert!(html.contains("Lakeside Lodge"));
}

#[actix_web::test]
async fn test_update_via_method_override() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;
    let listing = db
        .insert_listing(&wanderlust::models::listing::ListingInput {
            title: "Old Title".into(),
            description: "Cozy".into(),
            image: None,
            price: 100.0,
            location: "X".into(),
            country: "Y".into(),
        })
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/listings/{}?_method=PUT", listing.id))
        .set_form(listing_form("New Title", "150"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/listings/{}", listing.id));

    let stored = db.find_listing(&listing.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "New Title");
    assert_eq!(stored.price, 150.0);
}

#[actix_web::test]
async fn test_invalid_update_keeps_listing() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;
    let req = test::TestRequest::post()
        .uri("/listings")
        .set_form(listing_form("Keep Me", "100"))
        .to_request();
    test::call_service(&app, req).await;
    let id = db.list_listings().await.unwrap()[0].id.clone();

    let req = test::TestRequest::put()
        .uri(&format!("/listings/{id}"))
        .set_form(listing_form("", "100"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = db.find_listing(&id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Keep Me");
}

#[actix_web::test]
async fn test_update_missing_listing_is_not_found() {
    let db = test_db().await;
    let app = test::init_service(create_app(db, "assets")).await;

    let req = test::TestRequest::put()
        .uri("/listings/does-not-exist")
        .set_form(listing_form("Cabin", "100"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_listing() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;
    let req = test::TestRequest::post()
        .uri("/listings")
        .set_form(listing_form("Short Stay", "80"))
        .to_request();
    test::call_service(&app, req).await;
    let id = db.list_listings().await.unwrap()[0].id.clone();

    let req = test::TestRequest::post()
        .uri(&format!("/listings/{id}?_method=DELETE"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/listings");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/listings/{id}")).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(db.count_listings().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_unknown_path_is_not_found() {
    let db = test_db().await;
    let app = test::init_service(create_app(db, "assets")).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains(PAGE_NOT_FOUND));
}

#[actix_web::test]
async fn test_undeclared_method_on_known_path_is_not_found() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;
    let listing = db
        .insert_listing(&wanderlust::models::listing::ListingInput {
            title: "Cabin".into(),
            description: "Cozy".into(),
            image: None,
            price: 100.0,
            location: "X".into(),
            country: "Y".into(),
        })
        .await
        .unwrap();

    let requests = [
        test::TestRequest::post().uri("/"),
        test::TestRequest::delete().uri("/listings"),
        test::TestRequest::post().uri("/listings/new"),
        test::TestRequest::post().uri(&format!("/listings/{}", listing.id)),
        test::TestRequest::put().uri(&format!("/listings/{}/edit", listing.id)),
    ];
    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_text(resp).await.contains(PAGE_NOT_FOUND));
    }
    assert!(db.find_listing(&listing.id).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_edit_form_for_missing_listing_is_not_found() {
    let db = test_db().await;
    let app = test::init_service(create_app(db, "assets")).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/listings/does-not-exist/edit").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("does not exist"));
}

#[actix_web::test]
async fn test_create_with_huge_price_is_rejected() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "assets")).await;

    let req = test::TestRequest::post()
        .uri("/listings")
        .set_form(listing_form("Palace", "1e300"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("must be less than or equal to"));
    assert_eq!(db.count_listings().await.unwrap(), 0);
}
