use std::time::Duration;

use campus_business::{UserRecord, UserSearchCompute};
use campus_ui::CampusApp;
use campus_ui::state::State;
use egui_kittest::Harness;
use wiremock::MockServer;

pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;
pub const SEARCH_PATH: &str = "/institucional/filtro-usuarios";

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

impl<'a> TestCtx<'a, CampusApp> {
    /// Starts the app against `mock_server`. Mount mocks before calling: the
    /// initial search is dispatched while the app is constructed.
    pub fn new_app(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = CampusApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Lets spawned commands and the mock server make progress.
pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Steps `harness` until `done` holds or the attempts run out.
#[allow(unused)]
pub async fn step_until<T>(harness: &mut Harness<'_, T>, done: impl Fn(&Harness<'_, T>) -> bool) {
    for _ in 0..40 {
        harness.step();
        if done(harness) {
            return;
        }
        yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
    }
}

/// A `State` whose search compute already holds `users`; nothing is fetched.
#[allow(unused)]
pub fn seeded_state(users: Vec<UserRecord>) -> State {
    let mut state = State::test("http://campus.test".to_owned());
    state.ctx.record_compute(UserSearchCompute::loaded(users));
    state
}

#[allow(unused)]
pub fn user(id: u64, full_name: &str, group: &str, is_active: bool) -> UserRecord {
    UserRecord {
        id,
        full_name: full_name.to_owned(),
        email: format!("{}@school.example", full_name.to_lowercase().replace(' ', ".")),
        group: group.to_owned(),
        is_active,
        last_login: None,
        profile_picture: None,
    }
}

#[allow(unused)]
pub fn user_json(id: u64, full_name: &str, is_active: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "full_name": full_name,
        "email": format!("user{id}@school.example"),
        "group": "Profesor",
        "is_active": is_active,
        "last_login": "03/09/2024 08:00",
        "profile_picture": null,
    })
}
