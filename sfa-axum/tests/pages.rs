use axum::http::StatusCode;
use axum_test::{TestServer, TestServerConfig};
use rstest::*;
use serde_json::Value;
use sfa_axum::{config::AxumConfig, router};
use sfa_core::models::ProductId;

mod app;
use app::{BROKEN_ID, BROKEN_TITLE, MemoryCatalog};

#[fixture]
fn catalog() -> MemoryCatalog {
    MemoryCatalog::seeded()
}

/// A server that, like a browser, sends back the cookies it is given.
fn browser(catalog: &MemoryCatalog) -> TestServer {
    let router = router(catalog.clone(), AxumConfig::default()).unwrap();
    TestServer::new_with_config(
        router,
        TestServerConfig {
            save_cookies: true,
            ..Default::default()
        },
    )
    .unwrap()
}

/// Where `needle` first appears in `text`, for checking display order.
fn position(text: &str, needle: &str) -> usize {
    text.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found"))
}

#[rstest]
#[test_log::test(tokio::test)]
async fn root_redirects_to_list(catalog: MemoryCatalog) {
    let response = browser(&catalog).get("/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/products");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn list_shows_every_product(catalog: MemoryCatalog) {
    let response = browser(&catalog).get("/products").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("<title>Products - Admin</title>"));
    assert!(body.contains("Showing 5 of 5 products"));
    assert!(body.contains("Legends Naga Bracelet"));
    assert!(body.contains("$695.00"));
    assert!(body.contains("&#9733; 4.6 (400)"));
    assert!(body.contains("All Categories"));
    assert!(body.contains("Jewelery"));
    assert!(body.contains("Price: High to Low"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn list_applies_url_parameters(catalog: MemoryCatalog) {
    let response = browser(&catalog)
        .get("/products?category=jewelery&sort=price-desc")
        .await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Showing 2 of 5 products"));
    assert!(!body.contains("Foldsack Backpack"));
    assert!(position(&body, "Legends Naga Bracelet") < position(&body, "White Gold Princess Ring"));
    assert!(body.contains(r#"<option value="price-desc" selected>"#));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn list_searches_case_insensitively(catalog: MemoryCatalog) {
    let body = browser(&catalog).get("/products?search=GOLD").await.text();
    assert!(body.contains("Showing 1 of 5 products"));
    assert!(body.contains("White Gold Princess Ring"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn empty_view_offers_to_clear(catalog: MemoryCatalog) {
    let body = browser(&catalog)
        .get("/products?search=no%20such%20thing")
        .await
        .text();
    assert!(body.contains("Showing 0 of 5 products"));
    assert!(body.contains("No products found matching your criteria."));
    assert!(body.contains(r#"action="/products/actions/clear""#));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn list_failure(catalog: MemoryCatalog) {
    catalog.fail_list();
    let response = browser(&catalog).get("/products").await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(response.text().contains("Failed to load products: API error: 500"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn filters_apply_without_refetching(catalog: MemoryCatalog) {
    let server = browser(&catalog);
    server.get("/products").await.assert_status_ok();

    let response = server
        .post("/products/actions/filter")
        .form(&[("search", ""), ("category", "jewelery"), ("sort", "price-asc")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        "/products?category=jewelery&sort=price-asc"
    );

    let body = server
        .get("/products?category=jewelery&sort=price-asc")
        .await
        .text();
    assert!(body.contains("Showing 2 of 5 products"));
    assert!(position(&body, "White Gold Princess Ring") < position(&body, "Legends Naga Bracelet"));
    assert_eq!(catalog.list_calls(), 1);

    let response = server.post("/products/actions/clear").await;
    assert_eq!(response.header("location"), "/products");
    let body = server.get("/products").await.text();
    assert!(body.contains("Showing 5 of 5 products"));
    assert_eq!(catalog.list_calls(), 1);

    // a plain reload fetches again
    server.get("/products").await.assert_status_ok();
    assert_eq!(catalog.list_calls(), 2);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn delete_removes_product_locally(catalog: MemoryCatalog) {
    let server = browser(&catalog);
    server.get("/products?category=jewelery").await.assert_status_ok();

    let response = server.post("/products/7/delete").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/products?category=jewelery");

    let body = server.get("/products?category=jewelery").await.text();
    assert!(body.contains("Confirm Deletion"));
    assert!(body.contains("<strong>White Gold Princess Ring</strong>"));
    assert!(body.contains("Delete Product"));

    let response = server.post("/products/actions/delete/confirm").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/products?category=jewelery");
    assert_eq!(catalog.deleted(), vec![ProductId(7)]);

    let body = server.get("/products?category=jewelery").await.text();
    assert!(!body.contains("Confirm Deletion"));
    assert!(!body.contains("White Gold Princess Ring"));
    assert!(body.contains("Showing 1 of 4 products"));
    assert_eq!(catalog.list_calls(), 1);

    // the service never really deleted it, and a reload says so
    let body = server.get("/products?category=jewelery").await.text();
    assert!(body.contains("White Gold Princess Ring"));
    assert_eq!(catalog.list_calls(), 2);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn failed_delete_keeps_dialog_open(catalog: MemoryCatalog) {
    let server = browser(&catalog);
    server.get("/products").await.assert_status_ok();

    server.post(&format!("/products/{BROKEN_ID}/delete")).await;
    server.post("/products/actions/delete/confirm").await;

    let body = server.get("/products").await.text();
    assert!(body.contains("Confirm Deletion"));
    assert!(body.contains("API error: 500"));
    assert!(body.contains("Curved Gaming Monitor"));
    assert!(body.contains("Showing 5 of 5 products"));
    assert!(catalog.deleted().is_empty());

    server.post("/products/actions/delete/cancel").await;
    let body = server.get("/products").await.text();
    assert!(!body.contains("Confirm Deletion"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn actions_without_working_set_redirect(catalog: MemoryCatalog) {
    let server = browser(&catalog);

    let response = server.post("/products/actions/delete/confirm").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/products");

    let response = server.post("/products/not-a-number/delete").await;
    assert_eq!(response.header("location"), "/products");
    assert!(catalog.deleted().is_empty());
}

#[rstest]
#[test_log::test(tokio::test)]
async fn detail_page(catalog: MemoryCatalog) {
    let response = browser(&catalog).get("/products/2").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("<title>Legends Naga Bracelet | Aqtar</title>"));
    assert!(body.contains("(400 reviews)"));
    assert!(body.contains("$695.00"));
    assert!(body.contains("&#9733;&#9733;&#9733;&#9733;&#9734;"));
    assert!(body.contains(r#"href="/products/2/edit""#));
}

#[rstest]
#[case::unknown("999")]
#[case::not_a_number("abc")]
#[test_log::test(tokio::test)]
async fn missing_product(catalog: MemoryCatalog, #[case] id: &str) {
    let response = browser(&catalog).get(&format!("/products/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.text();
    assert!(body.contains("Product not found"));
    assert!(body.contains(r#"href="/products""#));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn detail_failure(catalog: MemoryCatalog) {
    let response = browser(&catalog).get(&format!("/products/{BROKEN_ID}")).await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(response.text().contains("API error: 500"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn create_form_defaults(catalog: MemoryCatalog) {
    let response = browser(&catalog).get("/products/create").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("<title>Create Product | Aqtar</title>"));
    assert!(body.contains(r#"<img src="&#x2F;placeholder.svg""#));
    assert!(body.contains(r#"<option value="men&#x27;s clothing" selected>"#));
    assert!(body.contains(r#"name="price" type="number" value="""#));
    assert!(body.contains(r#"name="rate" type="number" value="0""#));
    assert!(!body.contains("Product ID cannot be changed"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn create_with_blank_price(catalog: MemoryCatalog) {
    let response = browser(&catalog)
        .post("/products/create")
        .form(&[
            ("title", "Canvas Tote"),
            ("price", ""),
            ("description", "Carries things"),
            ("category", "women's clothing"),
            ("image", ""),
            ("rate", "4.5"),
            ("count", "12abc"),
        ])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/products");

    let created = catalog.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].title, "Canvas Tote");
    assert_eq!(created[0].price, 0.0);
    assert_eq!(created[0].rating.rate, 4.5);
    assert_eq!(created[0].rating.count, 12);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn failed_create_keeps_input(catalog: MemoryCatalog) {
    let response = browser(&catalog)
        .post("/products/create")
        .form(&[
            ("title", BROKEN_TITLE),
            ("price", "12.50"),
            ("description", "Never saved"),
            ("category", "electronics"),
        ])
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let body = response.text();
    assert!(body.contains("API error: 400"));
    assert!(body.contains(r#"value="12.50""#));
    assert!(body.contains(">Never saved</textarea>"));
    assert!(body.contains(r#"<option value="electronics" selected>"#));
    assert!(catalog.created().is_empty());
}

#[rstest]
#[test_log::test(tokio::test)]
async fn edit_form(catalog: MemoryCatalog) {
    let response = browser(&catalog).get("/products/3/edit").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("<title>Edit Product | Aqtar</title>"));
    assert!(body.contains("Product ID cannot be changed"));
    assert!(body.contains(r#"value="Portable Hard Drive""#));
    assert!(body.contains(r#"value="64""#));
    assert!(body.contains(r#"<option value="electronics" selected>"#));
    assert!(body.contains("Save Changes"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn edit_submits_full_record(catalog: MemoryCatalog) {
    let response = browser(&catalog)
        .post("/products/3/edit")
        .form(&[
            ("title", "Portable Hard Drive 4TB"),
            ("price", "89.99"),
            ("description", "Twice the space"),
            ("category", "electronics"),
            ("image", "https://images.example.com/3.jpg"),
            ("rate", "3.3"),
            ("count", "203"),
        ])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/products/3");

    let updated = catalog.updated();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].id, ProductId(3));
    assert_eq!(updated[0].data.price, 89.99);
    assert_eq!(updated[0].data.rating.count, 203);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn failed_edit(catalog: MemoryCatalog) {
    let server = browser(&catalog);

    let response = server.get(&format!("/products/{BROKEN_ID}/edit")).await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let response = server
        .post(&format!("/products/{BROKEN_ID}/edit"))
        .form(&[("title", "Flat Gaming Monitor"), ("price", "10")])
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let body = response.text();
    assert!(body.contains("API error: 500"));
    assert!(body.contains(r#"value="Flat Gaming Monitor""#));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn placeholder_image(catalog: MemoryCatalog) {
    let response = browser(&catalog).get("/placeholder.svg").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/svg+xml");
    assert!(response.text().starts_with("<svg"));
}

#[rstest]
#[test_log::test(tokio::test)]
async fn json_view(catalog: MemoryCatalog) {
    let response = browser(&catalog)
        .get("/api/products?category=jewelery&sort=price-asc")
        .await;
    response.assert_status_ok();

    let view = response.json::<Value>();
    assert_eq!(view["total"], 5);
    assert_eq!(view["shown"], 2);
    assert_eq!(view["products"][0]["id"], 7);
    assert_eq!(view["products"][1]["id"], 2);
    assert_eq!(view["query"]["category"], "jewelery");
    assert_eq!(view["categories"][0], "men's clothing");
}

#[rstest]
#[test_log::test(tokio::test)]
async fn json_view_failure(catalog: MemoryCatalog) {
    catalog.fail_list();
    browser(&catalog)
        .get("/api/products")
        .await
        .assert_status(StatusCode::BAD_GATEWAY);
}

#[rstest]
#[test_log::test(tokio::test)]
async fn openapi_document(catalog: MemoryCatalog) {
    let server = browser(&catalog);

    let health = server.get("/health").await.json::<Value>();
    assert_eq!(health["status"], "ok");

    let api = server.get("/docs/api.json").await.json::<Value>();
    assert_eq!(api["info"]["title"], "Storefront Admin API");
    assert!(api["paths"]["/api/products"]["get"].is_object());
    assert!(api["paths"]["/health"]["get"].is_object());
}
