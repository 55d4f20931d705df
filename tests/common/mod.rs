//! In-memory stand-ins for the server, the browser window and the page.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use splitbook_frontend::api::{ApiClient, ApiRequest, ApiResponse, HttpMethod, Transport};
use splitbook_frontend::controller::{Controller, Host, PageState};
use splitbook_frontend::error::ApiError;
use splitbook_frontend::form::ExpenseForm;
use yew::Callback;

#[derive(Default)]
struct Routes {
    responses: HashMap<(HttpMethod, String), ApiResponse>,
    calls: Vec<ApiRequest>,
}

/// Answers each `(method, url)` with a fixed response; unknown routes get 404.
#[derive(Clone, Default)]
pub struct FakeServer {
    routes: Rc<RefCell<Routes>>,
}

impl FakeServer {
    pub fn respond(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.routes.borrow_mut().responses.insert(
            (method, url.to_string()),
            ApiResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.routes.borrow().calls.clone()
    }

    pub fn count(&self, method: HttpMethod, url: &str) -> usize {
        self.routes
            .borrow()
            .calls
            .iter()
            .filter(|c| c.method == method && c.url == url)
            .count()
    }

    /// Parsed body of the most recent call to `url` that carried one.
    pub fn last_body(&self, url: &str) -> Option<serde_json::Value> {
        self.routes
            .borrow()
            .calls
            .iter()
            .rev()
            .filter(|c| c.url == url)
            .find_map(|c| c.body.as_deref())
            .map(|b| serde_json::from_str(b).expect("request body is JSON"))
    }

    pub fn forget_calls(&self) {
        self.routes.borrow_mut().calls.clear();
    }
}

impl Transport for FakeServer {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut routes = self.routes.borrow_mut();
        let key = (request.method, request.url.clone());
        let response = routes.responses.get(&key).cloned().unwrap_or(ApiResponse {
            status: 404,
            body: "not found".to_string(),
        });
        routes.calls.push(request);
        Ok(response)
    }
}

#[derive(Clone, Default)]
pub struct RecordingHost {
    pub alerts: Rc<RefCell<Vec<String>>>,
    pub navigations: Rc<RefCell<Vec<String>>>,
}

impl Host for RecordingHost {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}

pub struct Page {
    pub controller: Controller<FakeServer, RecordingHost>,
    pub host: RecordingHost,
    pub state: Rc<RefCell<PageState>>,
}

pub fn page(server: &FakeServer) -> Page {
    let host = RecordingHost::default();
    let state = Rc::new(RefCell::new(PageState::new(ExpenseForm::default())));
    let view = {
        let state = Rc::clone(&state);
        Callback::from(move |action| state.borrow_mut().apply(action))
    };
    let controller = Controller::new(ApiClient::new(server.clone(), ""), host.clone(), view);
    Page {
        controller,
        host,
        state,
    }
}
