use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use tempfile::TempDir;

use greenfuture_portal_service::api;
use greenfuture_portal_service::storage::{JsonFileStore, UserStore};

fn store_in(dir: &TempDir) -> web::Data<JsonFileStore> {
    web::Data::new(JsonFileStore::new(dir.path().join("db.json")))
}

async fn post_auth(store: web::Data<JsonFileStore>, body: Value) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(store)
            .service(web::scope("/api").route("/auth", web::post().to(api::auth::authenticate))),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth")
        .set_json(&body)
        .to_request();
    let res = test::call_service(&app, req).await;
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    (status, body)
}

fn signup(name: &str, email: &str, password: &str) -> Value {
    json!({ "name": name, "email": email, "password": password, "action": "signup" })
}

fn login(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password, "action": "login" })
}

#[actix_web::test]
async fn invalid_email_rejected_for_both_actions() {
    let dir = TempDir::new().unwrap();

    for email in ["janeexample.com", "jane@example", "jane doe@example.com", ""] {
        for action in ["signup", "login"] {
            let body = json!({
                "name": "Jane",
                "email": email,
                "password": "Secret1!",
                "action": action,
            });
            let (status, body) = post_auth(store_in(&dir), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "email {:?} action {}", email, action);
            assert_eq!(body["error"], "Invalid email format");
        }
    }

    // Validation runs before any storage access: nothing was written
    let store = store_in(&dir);
    assert!(store.load_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn weak_passwords_rejected_for_both_actions() {
    let dir = TempDir::new().unwrap();
    let expected = "Password must be at least 8 characters long and contain at least one number and one special character.";

    // 7 chars / no digit / no letter / no symbol / symbol outside allowed set
    for password in ["short1!", "Secrets!", "12345678!", "Secret12", "Secret1#"] {
        for action in ["signup", "login"] {
            let body = json!({
                "name": "Jane",
                "email": "jane@example.com",
                "password": password,
                "action": action,
            });
            let (status, body) = post_auth(store_in(&dir), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "password {:?} action {}", password, action);
            assert_eq!(body["error"], expected);
        }
    }

    let store = store_in(&dir);
    assert!(store.load_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn signup_then_login_round_trip() {
    let dir = TempDir::new().unwrap();

    let (status, body) =
        post_auth(store_in(&dir), signup("Jane", "jane@example.com", "Secret1!")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User created successfully");
    // Signup acknowledges without echoing the created record
    assert!(body.get("user").is_none());

    let (status, body) = post_auth(store_in(&dir), login("jane@example.com", "Secret1!")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Jane");
    assert_eq!(body["user"]["email"], "jane@example.com");
    assert!(body["user"]["id"].is_i64());
    // The password never travels back to the client
    assert!(body["user"].get("password").is_none());
}

#[actix_web::test]
async fn duplicate_signup_is_a_conflict() {
    let dir = TempDir::new().unwrap();

    let (status, _) =
        post_auth(store_in(&dir), signup("Jane", "jane@example.com", "Secret1!")).await;
    assert_eq!(status, StatusCode::OK);

    // Same email, different everything else
    let (status, body) =
        post_auth(store_in(&dir), signup("Janet", "jane@example.com", "Other2$x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already exists");

    let store = store_in(&dir);
    assert_eq!(store.load_all().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn wrong_password_is_unauthorized() {
    let dir = TempDir::new().unwrap();

    post_auth(store_in(&dir), signup("Jane", "jane@example.com", "Secret1!")).await;

    let (status, body) = post_auth(store_in(&dir), login("jane@example.com", "Wrong99?")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn unknown_email_is_unauthorized() {
    let dir = TempDir::new().unwrap();

    let (status, body) = post_auth(store_in(&dir), login("ghost@example.com", "Secret1!")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn rejected_signup_appends_nothing() {
    let dir = TempDir::new().unwrap();

    let (status, _) = post_auth(store_in(&dir), signup("Jane", "jane@example.com", "short1!")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let store = store_in(&dir);
    assert!(store.load_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn unknown_action_is_rejected() {
    let dir = TempDir::new().unwrap();

    let body = json!({
        "email": "jane@example.com",
        "password": "Secret1!",
        "action": "reset",
    });
    let (status, body) = post_auth(store_in(&dir), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid action");
}

#[actix_web::test]
async fn signup_without_name_defaults_to_empty() {
    let dir = TempDir::new().unwrap();

    let body = json!({
        "email": "anon@example.com",
        "password": "Secret1!",
        "action": "signup",
    });
    let (status, _) = post_auth(store_in(&dir), body).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_auth(store_in(&dir), login("anon@example.com", "Secret1!")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "");
}

#[actix_web::test]
async fn malformed_database_file_is_a_server_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("db.json"), "{not json").unwrap();

    let (status, body) = post_auth(store_in(&dir), login("jane@example.com", "Secret1!")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // Generic body, no diagnostic detail
    assert_eq!(body["error"], "Internal server error");
}
