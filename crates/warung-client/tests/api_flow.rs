//! End-to-end tests of the API layer against a mock backend.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use warung_client::api::{ApiClient, AuthApi, CartApi, CategoryApi, MenuApi, OrderApi};
use warung_client::config::ApiConfig;
use warung_client::models::auth::LoginRequest;
use warung_client::models::menu::{MenuFilter, MenuPatch, NewMenu};
use warung_client::models::order::OrderStatus;
use warung_client::{ApiError, SessionStore};

fn client_for(server: &MockServer) -> (ApiClient, SessionStore) {
    let session = SessionStore::new();
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
        connect_timeout_seconds: 5,
    };
    let client = ApiClient::new(&config, session.clone()).unwrap();
    (client, session)
}

fn user_json() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Budi",
        "email": "budi@example.com",
        "phone": "0812000111",
        "role": "CUSTOMER",
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn seed_session(session: &SessionStore) {
    let user = serde_json::from_value(user_json()).unwrap();
    session.store_login("acc-1".to_string(), "ref-1".to_string(), user);
}

fn menu_json(id: i32, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "Pedas",
        "price": 15000.0,
        "image_url": null,
        "is_available": true,
        "stock": 10,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "category": { "id": 2, "name": "Makanan" }
    })
}

fn cart_json(quantity: u32) -> serde_json::Value {
    json!({
        "id": 5,
        "user_id": 1,
        "items": [{
            "id": 11,
            "quantity": quantity,
            "subtotal": 15000.0 * quantity as f64,
            "menu": { "id": 7, "name": "Nasi Goreng", "price": 15000.0, "image_url": null }
        }],
        "total_quantity": quantity,
        "total_price": 15000.0 * quantity as f64
    })
}

fn order_json(status: &str) -> serde_json::Value {
    json!({
        "id": 3,
        "order_number": "ORD-0003",
        "status": status,
        "total_price": 30000.0,
        "address": "Jl. Merdeka No. 10, Bandung",
        "created_at": "2024-01-02T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "items": [{
            "id": 21,
            "menu_id": 7,
            "quantity": 2,
            "unit_price": 15000.0,
            "subtotal": 30000.0,
            "menu": { "id": 7, "name": "Nasi Goreng", "image_url": null }
        }]
    })
}

#[tokio::test]
async fn login_stores_tokens_and_user() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    let auth = AuthApi::new(client);

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "email": "budi@example.com", "password": "rahasia1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login berhasil",
            "data": {
                "user": user_json(),
                "accessToken": "acc-1",
                "refreshToken": "ref-1"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = auth
        .login(&LoginRequest {
            email: "budi@example.com".to_string(),
            password: "rahasia1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.name, "Budi");
    assert!(session.is_logged_in());
    assert_eq!(session.access_token().as_deref(), Some("acc-1"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref-1"));
    assert_eq!(session.user().unwrap().email, "budi@example.com");
}

#[tokio::test]
async fn login_rejection_maps_to_wrong_credentials() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    let auth = AuthApi::new(client);

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = auth
        .login(&LoginRequest {
            email: "budi@example.com".to_string(),
            password: "salah".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Email atau password salah");
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn register_conflict_means_email_taken() {
    let server = MockServer::start().await;
    let (client, _session) = client_for(&server);
    let auth = AuthApi::new(client);

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let err = auth
        .register(&warung_client::models::auth::RegisterRequest {
            name: "Budi".to_string(),
            email: "budi@example.com".to_string(),
            phone: None,
            password: "rahasia1".to_string(),
            confirm_password: "rahasia1".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Email sudah terdaftar");
}

#[tokio::test]
async fn expired_access_token_is_refreshed_and_call_retried_once() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let auth = AuthApi::new(client);

    // First attempt with the stale token is rejected.
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", "Bearer acc-1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/refresh"))
        .and(body_json(json!({ "refreshToken": "ref-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Token diperbarui",
            "data": { "accessToken": "acc-2" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The retry must carry the rotated token.
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", "Bearer acc-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "OK",
            "data": { "user": user_json() }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = auth.profile().await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(session.access_token().as_deref(), Some("acc-2"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref-1"));
}

#[tokio::test]
async fn failed_refresh_clears_session_and_forces_relogin() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let auth = AuthApi::new(client);

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = auth.profile().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(err.to_string(), "Sesi expired, silakan login kembali");
    assert!(!session.is_logged_in());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn authenticated_call_without_session_never_hits_the_network() {
    let server = MockServer::start().await;
    let (client, _session) = client_for(&server);
    let categories = CategoryApi::new(client);

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = categories.list().await.unwrap_err();
    assert!(matches!(err, ApiError::NotLoggedIn));
    assert_eq!(err.to_string(), "Silakan login terlebih dahulu");
}

#[tokio::test]
async fn failed_envelope_surfaces_server_message() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let cart = CartApi::new(client);

    Mock::given(method("POST"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Stok tidak mencukupi"
        })))
        .mount(&server)
        .await;

    let err = cart.add_item(7, 99).await.unwrap_err();
    assert_eq!(err.to_string(), "Stok tidak mencukupi");
}

#[tokio::test]
async fn menu_list_passes_filters_as_query_params() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let menus = MenuApi::new(client);

    Mock::given(method("GET"))
        .and(path("/menus"))
        .and(query_param("categoryId", "2"))
        .and(query_param("is_available", "true"))
        .and(query_param("search", "ayam"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [menu_json(7, "Ayam Goreng")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = MenuFilter {
        category_id: Some(2),
        is_available: Some(true),
        search: Some("ayam".to_string()),
    };
    let list = menus.list(&filter).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Ayam Goreng");
    assert_eq!(list[0].category.name, "Makanan");
}

#[tokio::test]
async fn menu_create_sends_multipart_form() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let menus = MenuApi::new(client);

    Mock::given(method("POST"))
        .and(path("/menus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Menu dibuat",
            "data": menu_json(9, "Es Teh")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let new_menu = NewMenu {
        name: "Es Teh".to_string(),
        description: None,
        price: 5000.0,
        category_id: 2,
        is_available: true,
        stock: Some(50),
        image: None,
    };
    let created = menus.create(&new_menu).await.unwrap();
    assert_eq!(created.id, 9);

    // The backend expects a multipart body for menu create.
    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"), "{content_type}");
}

#[tokio::test]
async fn menu_create_attaches_image_part_with_guessed_mime() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let menus = MenuApi::new(client);

    let image_path = std::env::temp_dir().join("warung-menu-upload.png");
    tokio::fs::write(&image_path, b"\x89PNG\r\n\x1a\n")
        .await
        .unwrap();

    Mock::given(method("POST"))
        .and(path("/menus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Menu dibuat",
            "data": menu_json(10, "Es Jeruk")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let new_menu = NewMenu {
        name: "Es Jeruk".to_string(),
        description: None,
        price: 6000.0,
        category_id: 2,
        is_available: true,
        stock: None,
        image: Some(image_path.clone()),
    };
    menus.create(&new_menu).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"image\""), "{body}");
    assert!(body.contains("filename=\"warung-menu-upload.png\""), "{body}");
    // MIME is guessed from the file extension.
    assert!(body.contains("image/png"), "{body}");

    tokio::fs::remove_file(&image_path).await.ok();
}

#[tokio::test]
async fn menu_update_patches_only_the_given_fields() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let menus = MenuApi::new(client);

    Mock::given(method("PATCH"))
        .and(path("/menus/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Menu diupdate",
            "data": menu_json(9, "Es Teh Manis")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let patch = MenuPatch {
        name: Some("Es Teh Manis".to_string()),
        price: Some(6000.0),
        ..Default::default()
    };
    let updated = menus.update(9, &patch).await.unwrap();
    assert_eq!(updated.name, "Es Teh Manis");

    // Absent fields stay out of the multipart body entirely.
    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"name\""), "{body}");
    assert!(body.contains("Es Teh Manis"), "{body}");
    assert!(body.contains("name=\"price\""), "{body}");
    assert!(!body.contains("name=\"stock\""), "{body}");
    assert!(!body.contains("name=\"is_available\""), "{body}");
}

#[tokio::test]
async fn order_create_maps_empty_cart_rejection() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let orders = OrderApi::new(client);

    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = orders.create("Jl. Merdeka No. 10, Bandung").await.unwrap_err();
    assert_eq!(err.to_string(), "Keranjang kosong atau data tidak valid");
}

#[tokio::test]
async fn order_status_update_round_trip() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let orders = OrderApi::new(client);

    Mock::given(method("PATCH"))
        .and(path("/orders/status"))
        .and(body_json(json!({ "orderNumber": "ORD-0003", "status": "PROCESSING" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Status diupdate",
            "data": order_json("PROCESSING")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = orders
        .update_status("ORD-0003", OrderStatus::Processing)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Processing);
}

#[tokio::test]
async fn cart_remove_returns_updated_cart() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let cart = CartApi::new(client);

    Mock::given(method("DELETE"))
        .and(path("/items/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Item dihapus",
            "data": cart_json(1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = cart.remove_item(7).await.unwrap();
    assert_eq!(updated.total_quantity, 1);
}

#[tokio::test]
async fn logout_clears_session_even_when_server_errors() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let auth = AuthApi::new(client);

    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    auth.logout().await.unwrap();
    assert!(!session.is_logged_in());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn forbidden_maps_to_access_message() {
    let server = MockServer::start().await;
    let (client, session) = client_for(&server);
    seed_session(&session);
    let orders = OrderApi::new(client);

    Mock::given(method("GET"))
        .and(path("/orders/all"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = orders.list_all().await.unwrap_err();
    assert_eq!(err.to_string(), "Anda tidak memiliki akses");
}
