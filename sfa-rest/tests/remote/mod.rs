use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::time::Duration;

// A stand-in for the remote product service. Some ids are reserved to
// provoke specific failures:
// - 500 answers every request with an internal server error
// - 999 answers a read with an empty 200, as fakestoreapi.com does
// - 3 answers an update without echoing the id
// - 13 refuses to be deleted
// Creates titled "reject me" are refused; "no id" is accepted with a reply
// that names no id, and "no body" with an empty reply.
pub fn products() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }),
        json!({
            "id": 2,
            "title": "John Hardy Women's Legends Naga Bracelet",
            "price": 695,
            "description": "From our Legends Collection",
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
            "rating": { "rate": 4.6, "count": 400 }
        }),
        json!({
            "id": 3,
            "title": "WD 2TB Elements Portable External Hard Drive",
            "price": 64,
            "description": "USB 3.0 and USB 2.0 compatibility",
            "category": "electronics",
            "image": "",
            "rating": { "rate": 3.3, "count": 203 }
        }),
    ]
}

pub fn router() -> Router {
    let service = Router::new()
        .route("/products", get(list).post(create))
        .route("/products/{id}", get(read).put(update).delete(remove));

    Router::new()
        .nest("/slow", Router::new().route("/products", get(slow)))
        .merge(service)
}

/// Serve the stand-in on a random local port, returning its base URL.
pub async fn spawn() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router()).await.unwrap() });
    format!("http://{address}")
}

async fn list() -> Json<Vec<Value>> {
    Json(products())
}

async fn slow() -> Json<Vec<Value>> {
    tokio::time::sleep(Duration::from_millis(500)).await;
    Json(products())
}

async fn read(Path(id): Path<u64>) -> Response {
    match id {
        500 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        999 => StatusCode::OK.into_response(),
        _ => match products().into_iter().find(|product| product["id"] == id) {
            Some(product) => Json(product).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        },
    }
}

async fn create(Json(mut body): Json<Value>) -> Response {
    match body["title"].as_str() {
        Some("reject me") => return StatusCode::BAD_REQUEST.into_response(),
        Some("no id") => return Json(body).into_response(),
        Some("no body") => return StatusCode::CREATED.into_response(),
        _ => {}
    }
    body["id"] = json!(21);
    Json(body).into_response()
}

async fn update(Path(id): Path<u64>, Json(mut body): Json<Value>) -> Response {
    match id {
        500 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        3 => {
            if let Some(object) = body.as_object_mut() {
                object.remove("id");
            }
            Json(body).into_response()
        }
        _ => {
            body["id"] = json!(id);
            Json(body).into_response()
        }
    }
}

async fn remove(Path(id): Path<u64>) -> Response {
    match id {
        13 | 500 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({ "id": id })).into_response(),
    }
}
