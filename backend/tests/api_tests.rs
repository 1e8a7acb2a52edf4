//! End-to-end API tests over the assembled router

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use dairysight_backend::config::{Config, DataConfig, JwtConfig, ServerConfig};
use dairysight_backend::{create_app, AppState, NotificationCenter, Stores};
use shared::{UserAccount, UserRole};

fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 3600,
        },
        data: DataConfig {
            seed_demo_data: false,
            settlement_delay_secs: 3,
            notification_dismiss_secs: 5,
        },
    }
}

async fn test_app() -> Router {
    let stores = Stores::new();
    stores
        .add_user(UserAccount {
            email: "admin@dairy.com".to_string(),
            password_hash: bcrypt::hash("admin123", 4).unwrap(),
            name: "Super Admin".to_string(),
            role: UserRole::Admin,
        })
        .await;

    create_app(AppState {
        stores,
        notifications: NotificationCenter::new(Duration::from_secs(60)),
        config: Arc::new(test_config()),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login_token(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"email": "admin@dairy.com", "password": "admin123"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::get("/api/v1/farmers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn a_tampered_token_is_rejected() {
    let app = test_app().await;
    let token = login_token(&app).await;
    let tampered = format!("{}x", token);

    let response = app
        .oneshot(
            Request::get("/api/v1/farmers")
                .header(header::AUTHORIZATION, format!("Bearer {}", tampered))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::post("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"email": "admin@dairy.com", "password": "nope"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn session_lookup_reflects_the_signed_token() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let response = app
        .oneshot(
            Request::get("/api/v1/auth/session")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], "admin@dairy.com");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn farmer_registration_round_trips_in_camel_case() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/v1/farmers")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "firstName": "John",
                        "lastName": "Kamau",
                        "phone": "0712345678",
                        "idNumber": "12345678",
                        "farmName": "Kamau Farm",
                        "location": "Limuru",
                        "county": "Kiambu",
                        "cattleCount": 3,
                        "bankName": "Equity Bank",
                        "accountNumber": "0123456789",
                        "accountName": "John Kamau"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["totalDeliveries"], 0);
    let farmer_id = body["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::post(format!("/api/v1/farmers/{}/approve", farmer_id))
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["farmer"]["status"], "active");
    assert!(body["message"].as_str().unwrap().contains("approved"));
}

#[tokio::test]
async fn validation_failures_report_the_field() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let response = app
        .oneshot(
            Request::post("/api/v1/farmers")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "firstName": "John",
                        "lastName": "Kamau",
                        "phone": "12345",
                        "idNumber": "12345678",
                        "farmName": "Kamau Farm",
                        "location": "Limuru",
                        "county": "Kiambu",
                        "cattleCount": 3,
                        "bankName": "Equity Bank",
                        "accountNumber": "0123456789",
                        "accountName": "John Kamau"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "phone");
}

#[tokio::test]
async fn malformed_bodies_keep_the_error_envelope() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let response = app
        .oneshot(
            Request::post("/api/v1/farmers")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "body");
}

#[tokio::test]
async fn an_unknown_grade_keeps_the_error_envelope() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let response = app
        .oneshot(
            Request::post("/api/v1/milk-intake")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "farmerId": uuid::Uuid::new_v4(),
                        "quantity": 20,
                        "quality": "D"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn notifications_round_trip_over_http() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/v1/notifications")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"title": "Milk intake recorded", "variant": "default"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let id = body["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::post(format!("/api/v1/notifications/{}/dismiss", id))
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::get("/api/v1/notifications")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unknown_resources_are_404_with_the_resource_name() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/farmers/{}", uuid::Uuid::new_v4()))
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Farmer not found");
}
