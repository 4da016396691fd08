use std::rc::Rc;

use login_core::graphql::{LoggedUserQuery, LoginMutation};
use login_core::models::LoginVariables;
use login_core::testing::{MemoryHistory, MemoryStorage, MockTransport, MockedResponse, RecordingNotifier};
use login_core::{ClientConfig, ClientError, LoginFlow};
use serde_json::json;
use tracing_subscriber::EnvFilter;

pub type TestFlow = LoginFlow<Rc<MockTransport>, Rc<MemoryStorage>, Rc<RecordingNotifier>, Rc<MemoryHistory>>;

/// Capabilities kept alongside the flow so tests can inspect them.
pub struct Harness {
    pub flow: TestFlow,
    pub transport: Rc<MockTransport>,
    pub storage: Rc<MemoryStorage>,
    pub notifier: Rc<RecordingNotifier>,
    pub history: Rc<MemoryHistory>,
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("login_core=debug".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

pub fn harness(mocks: Vec<MockedResponse>) -> Harness {
    init_tracing();

    let transport = Rc::new(MockTransport::new(mocks));
    let storage = Rc::new(MemoryStorage::new());
    let notifier = Rc::new(RecordingNotifier::new());
    let history = Rc::new(MemoryHistory::new("/login"));

    let flow = LoginFlow::new(
        ClientConfig::default(),
        Rc::clone(&transport),
        Rc::clone(&storage),
        Rc::clone(&notifier),
        Rc::clone(&history),
    );

    Harness {
        flow,
        transport,
        storage,
        notifier,
        history,
    }
}

pub fn credentials() -> LoginVariables {
    LoginVariables {
        loginid: "loginid".into(),
        password: "password".into(),
    }
}

pub fn anonymous_session() -> MockedResponse {
    MockedResponse::data::<LoggedUserQuery>(&(), json!({ "loggedUser": null })).unwrap()
}

pub fn logged_in_session() -> MockedResponse {
    MockedResponse::data::<LoggedUserQuery>(&(), json!({ "loggedUser": { "id": "1" } })).unwrap()
}

pub fn accepted_login() -> MockedResponse {
    MockedResponse::data::<LoginMutation>(
        &credentials(),
        json!({ "login": { "result": true, "user": { "accessToken": { "token": "token" } } } }),
    )
    .unwrap()
}

pub fn rejected_login() -> MockedResponse {
    MockedResponse::data::<LoginMutation>(
        &credentials(),
        json!({ "login": { "result": false, "user": { "accessToken": null } } }),
    )
    .unwrap()
}

pub fn failed_login() -> MockedResponse {
    MockedResponse::error::<LoginMutation>(&credentials(), ClientError::Transport("connection refused".into()))
        .unwrap()
}

pub fn success_mocks() -> Vec<MockedResponse> {
    vec![anonymous_session(), accepted_login()]
}

pub fn error_mocks() -> Vec<MockedResponse> {
    vec![anonymous_session(), rejected_login()]
}
