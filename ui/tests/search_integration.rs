//! End-to-end search flow: app start, Search button, Enter in the query field, failure surfacing.

mod common;

use campus_business::{SearchFilters, UserSearchCompute};
use egui::accesskit::Role;
use kittest::Queryable;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{SEARCH_PATH, TestCtx, step_until, user_json};

#[tokio::test]
async fn test_initial_search_populates_table() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", ""))
        .and(query_param("role", ""))
        .and(query_param("status", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usuarios": [user_json(1, "Ana Perez", true), user_json(2, "Luis Gomez", false)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::new_app(mock_server);
    let harness = ctx.harness_mut();

    step_until(harness, |h| h.query_by_label("user2@school.example").is_some()).await;

    assert!(harness.query_by_label("user1@school.example").is_some());
    assert!(harness.query_all_by_label("Luis Gomez").next().is_some());
    assert_eq!(harness.query_all_by_label("03/09/2024 08:00").count(), 2);
    assert!(harness.query_by_label("No users found").is_none());
}

#[tokio::test]
async fn test_search_button_sends_current_filters() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "usuarios": [] })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", "eva ruiz"))
        .and(query_param("status", "inactive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usuarios": [user_json(7, "Eva Ruiz", false)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::new_app(mock_server);
    let harness = ctx.harness_mut();

    step_until(harness, |h| h.query_by_label("No users found").is_some()).await;

    harness
        .state_mut()
        .state
        .ctx
        .update::<SearchFilters>(|filters| {
            filters.query = "eva ruiz".to_owned();
            filters.status = "inactive".to_owned();
        });
    harness.step();
    harness.get_by_label("🔍 Search").click();

    step_until(harness, |h| h.query_by_label("user7@school.example").is_some()).await;

    assert!(harness.query_all_by_label("Eva Ruiz").next().is_some());
    assert!(harness.query_by_label("Activate").is_some());
}

#[tokio::test]
async fn test_enter_in_query_field_submits_search() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "usuarios": [] })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", "ana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usuarios": [user_json(9, "Ana Perez", true)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::new_app(mock_server);
    let harness = ctx.harness_mut();

    step_until(harness, |h| h.query_by_label("No users found").is_some()).await;

    harness.get_by_role(Role::TextInput).focus();
    harness.step();
    harness.get_by_role(Role::TextInput).type_text("ana");
    harness.step();
    assert_eq!(harness.state().state.ctx.state::<SearchFilters>().query, "ana");

    harness.key_press(egui::Key::Enter);

    step_until(harness, |h| h.query_by_label("user9@school.example").is_some()).await;

    assert!(harness.query_by_label("user9@school.example").is_some());
    assert!(harness.query_by_label("No users found").is_none());
}

#[tokio::test]
async fn test_failed_search_shows_error_and_keeps_rows() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usuarios": [user_json(1, "Ana Perez", true)]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", "boom"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::new_app(mock_server);
    let harness = ctx.harness_mut();

    step_until(harness, |h| h.query_by_label("user1@school.example").is_some()).await;

    harness
        .state_mut()
        .state
        .ctx
        .update::<SearchFilters>(|filters| filters.query = "boom".to_owned());
    harness.step();
    harness.get_by_label("🔍 Search").click();

    step_until(harness, |h| {
        h.query_by_label_contains("search returned status 503")
            .is_some()
    })
    .await;

    assert!(
        harness
            .query_by_label_contains("search returned status 503")
            .is_some()
    );
    assert!(harness.query_by_label("user1@school.example").is_some());

    let compute = harness
        .state()
        .state
        .ctx
        .cached::<UserSearchCompute>()
        .expect("search compute is registered");
    assert_eq!(compute.users.len(), 1);
}
