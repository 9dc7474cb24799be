use connector::{AppConfig, AppState, DatabaseService, SmsService};
use rocket::Config;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::{Client, LocalResponse};
use rocket_cors::{AllowedOrigins, CorsOptions};
use serial_test::serial;
use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tempfile::TempDir;

static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

struct TestRocket {
    rocket: rocket::Rocket<rocket::Build>,
    _temp_dir: TempDir, // Keep alive for cleanup
}

fn create_test_rocket() -> TestRocket {
    // Create temporary directory for this test's database
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let database_url = temp_dir
        .path()
        .join(format!("test_{}.db", test_id))
        .to_string_lossy()
        .to_string();

    unsafe {
        env::set_var("CONNECTOR_DATABASE_URL", &database_url);
        env::set_var("CONNECTOR_ACCOUNT_SID", "AC_test");
        env::set_var("CONNECTOR_AUTH_TOKEN", "test_token");
        env::set_var("CONNECTOR_SMS_FROM", "+15109441564");
        // Nothing listens here; outbound sends fail fast instead of
        // reaching a real provider.
        env::set_var("CONNECTOR_SMS_API_BASE", "http://127.0.0.1:9");
    }

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // Initialize services
    let database =
        Arc::new(DatabaseService::new(&config.database_url).expect("Failed to initialize database"));
    let sms = Arc::new(SmsService::new(&config).expect("Failed to initialize SMS client"));

    // Create app state
    let state = AppState {
        config: config.clone(),
        database,
        sms,
    };

    // Configure CORS
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .to_cors()
        .expect("Failed to create CORS configuration");

    let rocket_config = Config {
        port: state.config.port,
        address: state.config.host.parse().expect("Invalid host address"),
        ..Config::default()
    };

    let rocket = rocket::custom(&rocket_config)
        .manage(state)
        .attach(cors)
        .attach(connector::RequestLogger)
        .mount("/", connector::routes::get_routes());

    TestRocket {
        rocket,
        _temp_dir: temp_dir,
    }
}

fn json_body(response: LocalResponse<'_>) -> serde_json::Value {
    let body = response.into_string().expect("Response body");
    serde_json::from_str(&body).expect("Valid JSON")
}

fn register_volunteer(client: &Client, name: &str, email: &str, phone: &str) -> serde_json::Value {
    let response = client
        .post("/api/v1/register/volunteer")
        .header(ContentType::JSON)
        .body(
            serde_json::json!({
                "name": name,
                "email": email,
                "phone_number": phone,
                "password": "secret"
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    json_body(response)
}

fn register_organization(client: &Client, name: &str, email: &str) -> serde_json::Value {
    let response = client
        .post("/api/v1/register/organization")
        .header(ContentType::JSON)
        .body(
            serde_json::json!({
                "name": name,
                "email": email,
                "password": "orgsecret",
                "address": "683 Sutter St, San Francisco",
                "category_code": 1
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    json_body(response)
}

fn login(client: &Client, path: &str, email: &str, password: &str) -> Status {
    let response = client
        .post(path)
        .header(ContentType::JSON)
        .body(serde_json::json!({ "email": email, "password": password }).to_string())
        .dispatch();
    response.status()
}

#[test]
#[serial]
fn test_health_check() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");
    let response = client.get("/api/v1/health").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response);
    assert_eq!(json["status"], "ok");
}

#[test]
#[serial]
fn test_categories_seeded() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");
    let response = client.get("/api/v1/categories").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response);
    let categories = json.as_array().expect("array of categories");
    assert!(!categories.is_empty());
    assert_eq!(categories[0]["category_code"], 1);
}

#[test]
#[serial]
fn test_volunteer_registration_round_trip() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    let volunteer = register_volunteer(&client, "Kami", "kami@kami.com", "+12163921002");
    assert_eq!(volunteer["name"], "Kami");
    assert_eq!(volunteer["email"], "kami@kami.com");
    assert_eq!(volunteer["phone_number"], "+12163921002");
    // The stored password never appears in responses
    assert!(volunteer.get("password").is_none());

    // Looking the volunteer up by email (login) finds the stored record
    let status = login(&client, "/api/v1/login/volunteer", "kami@kami.com", "secret");
    assert_eq!(status, Status::Ok);
}

#[test]
#[serial]
fn test_volunteer_login_failures() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_volunteer(&client, "Kami", "kami@kami.com", "+12163921002");

    // Unknown email
    let status = login(
        &client,
        "/api/v1/login/volunteer",
        "nobody@example.com",
        "secret",
    );
    assert_eq!(status, Status::Unauthorized);

    // Wrong password
    let status = login(&client, "/api/v1/login/volunteer", "kami@kami.com", "wrong");
    assert_eq!(status, Status::Unauthorized);
}

#[test]
#[serial]
fn test_organization_registration_with_invalid_category() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    let response = client
        .post("/api/v1/register/organization")
        .header(ContentType::JSON)
        .body(
            serde_json::json!({
                "name": "HackOak",
                "email": "hello@hackoak.org",
                "password": "orgsecret",
                "address": "683 Sutter St, San Francisco",
                "category_code": 9999
            })
            .to_string(),
        )
        .dispatch();

    assert_eq!(response.status(), Status::Conflict);
}

#[test]
#[serial]
fn test_membership_symmetry() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_volunteer(&client, "Kami", "kami@kami.com", "+12163921002");
    let organization = register_organization(&client, "HackOak", "hello@hackoak.org");
    let org_id = organization["organization_id"].as_i64().expect("org id");

    // Volunteer joins the organization
    assert_eq!(
        login(&client, "/api/v1/login/volunteer", "kami@kami.com", "secret"),
        Status::Ok
    );
    let response = client
        .post(format!("/api/v1/organizations/{org_id}/join"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    // Volunteer's side of the traversal includes the organization
    let response = client.get("/api/v1/me/organizations").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let organizations = json_body(response);
    assert_eq!(organizations.as_array().expect("array").len(), 1);
    assert_eq!(organizations[0]["name"], "HackOak");

    // The symmetric traversal includes the volunteer
    assert_eq!(
        login(
            &client,
            "/api/v1/login/organization",
            "hello@hackoak.org",
            "orgsecret"
        ),
        Status::Ok
    );
    let response = client
        .get(format!("/api/v1/organizations/{org_id}/volunteers"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let volunteers = json_body(response);
    assert_eq!(volunteers.as_array().expect("array").len(), 1);
    assert_eq!(volunteers[0]["name"], "Kami");
}

#[test]
#[serial]
fn test_membership_removal_isolation() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    let kami = register_volunteer(&client, "Kami", "kami@kami.com", "+12163921002");
    let noor = register_volunteer(&client, "Noor", "noor@example.com", "+14155550100");
    let organization = register_organization(&client, "HackOak", "hello@hackoak.org");
    let org_id = organization["organization_id"].as_i64().expect("org id");
    let kami_id = kami["volunteer_id"].as_i64().expect("volunteer id");
    let noor_id = noor["volunteer_id"].as_i64().expect("volunteer id");

    // Both volunteers join
    assert_eq!(
        login(&client, "/api/v1/login/volunteer", "kami@kami.com", "secret"),
        Status::Ok
    );
    let response = client
        .post(format!("/api/v1/organizations/{org_id}/join"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    assert_eq!(
        login(
            &client,
            "/api/v1/login/volunteer",
            "noor@example.com",
            "secret"
        ),
        Status::Ok
    );
    let response = client
        .post(format!("/api/v1/organizations/{org_id}/join"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    // The organization removes Kami's membership
    assert_eq!(
        login(
            &client,
            "/api/v1/login/organization",
            "hello@hackoak.org",
            "orgsecret"
        ),
        Status::Ok
    );
    let response = client
        .delete(format!("/api/v1/organizations/{org_id}/volunteers/{kami_id}"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    // The unrelated membership is untouched
    let response = client
        .get(format!("/api/v1/organizations/{org_id}/volunteers"))
        .dispatch();
    let volunteers = json_body(response);
    let names: Vec<_> = volunteers
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v["volunteer_id"].as_i64().expect("id"))
        .collect();
    assert_eq!(names, vec![noor_id]);

    // Removing an already-removed membership is not found
    let response = client
        .delete(format!("/api/v1/organizations/{org_id}/volunteers/{kami_id}"))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
#[serial]
fn test_join_requires_volunteer_session() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    let organization = register_organization(&client, "HackOak", "hello@hackoak.org");
    let org_id = organization["organization_id"].as_i64().expect("org id");

    // No session at all
    let response = client
        .post(format!("/api/v1/organizations/{org_id}/join"))
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);

    // Organization session cannot join itself
    assert_eq!(
        login(
            &client,
            "/api/v1/login/organization",
            "hello@hackoak.org",
            "orgsecret"
        ),
        Status::Ok
    );
    let response = client
        .post(format!("/api/v1/organizations/{org_id}/join"))
        .dispatch();
    assert_eq!(response.status(), Status::Forbidden);
}

#[test]
#[serial]
fn test_logout_clears_session() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_volunteer(&client, "Kami", "kami@kami.com", "+12163921002");
    assert_eq!(
        login(&client, "/api/v1/login/volunteer", "kami@kami.com", "secret"),
        Status::Ok
    );

    let response = client.get("/api/v1/me/organizations").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let response = client.post("/api/v1/logout").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let response = client.get("/api/v1/me/organizations").dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
}

#[test]
#[serial]
fn test_volunteer_request_reports_per_recipient_outcomes() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    register_volunteer(&client, "Kami", "kami@kami.com", "+12163921002");
    let organization = register_organization(&client, "HackOak", "hello@hackoak.org");
    let org_id = organization["organization_id"].as_i64().expect("org id");

    assert_eq!(
        login(&client, "/api/v1/login/volunteer", "kami@kami.com", "secret"),
        Status::Ok
    );
    let response = client
        .post(format!("/api/v1/organizations/{org_id}/join"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    assert_eq!(
        login(
            &client,
            "/api/v1/login/organization",
            "hello@hackoak.org",
            "orgsecret"
        ),
        Status::Ok
    );

    // The provider endpoint is unreachable, so the dispatch outcome is a
    // per-recipient error record rather than an aborted request.
    let response = client
        .post(format!("/api/v1/organizations/{org_id}/volunteer-request"))
        .header(ContentType::JSON)
        .body(
            serde_json::json!({
                "message": "HackOak needs 30 volunteers today from 2pm to 7pm. Can you make it?"
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let json = json_body(response);
    assert_eq!(json["ok"], true);
    let dispatched = json["dispatched"].as_array().expect("dispatch records");
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0]["recipient"], "+12163921002");
    assert!(dispatched[0]["message_sid"].is_null());
    assert!(dispatched[0]["error"].is_string());
}

#[test]
#[serial]
fn test_inbound_sms_reply_is_fixed() {
    let test_rocket = create_test_rocket();
    let client = Client::tracked(test_rocket.rocket).expect("valid rocket instance");

    // Same acknowledgment regardless of payload content
    let bodies = [
        "From=%2B12163921002&Body=YES",
        "From=%2B14155550100&Body=maybe%20later",
        "Body=",
    ];

    let mut replies = Vec::new();
    for body in bodies {
        let response = client
            .post("/sms")
            .header(ContentType::Form)
            .body(body)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::XML));
        replies.push(response.into_string().expect("reply body"));
    }

    assert!(replies.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(replies[0].contains("<Response><Message>"));

    // GET delivery gets the same reply
    let response = client.get("/sms").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.into_string().expect("reply body"),
        replies[0]
    );
}
