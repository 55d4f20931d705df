//! JSON client for the expense server; every failure is logged and becomes `None`.

use std::rc::Rc;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::error::ApiError;
use crate::models::{Budget, BudgetSaved, BudgetUpdate, ExpenseCreated, ExpenseList, NewExpense};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body; its presence also sets `Content-Type: application/json`.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post_json<B: Serialize>(url: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(serde_json::to_string(body)?),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one round trip. The browser implementation is [`HttpTransport`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch`-backed transport; session cookies ride along with every call.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        }
        .credentials(RequestCredentials::Include);

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)?
                    .send()
                    .await?
            }
            None => builder.send().await?,
        };

        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

pub struct ApiClient<T> {
    transport: Rc<T>,
    base_url: String,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            base_url: self.base_url.clone(),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    /// `base_url` is prefixed to every path; empty means same origin.
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport: Rc::new(transport),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Option<R> {
        let url = request.url.clone();
        match self.try_call(request).await {
            Ok(value) => Some(value),
            Err(ApiError::Status { status, body }) => {
                tracing::error!(%url, status, %body, "API error");
                None
            }
            Err(err) => {
                tracing::error!(%url, error = %err, "API call failed");
                None
            }
        }
    }

    async fn try_call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Option<R> {
        match ApiRequest::post_json(self.url(path), body) {
            Ok(request) => self.call(request).await,
            Err(err) => {
                tracing::error!(path, error = %err, "could not encode request body");
                None
            }
        }
    }

    pub async fn budget(&self) -> Option<Budget> {
        self.call(ApiRequest::get(self.url("/api/budget"))).await
    }

    pub async fn save_budget(&self, amount: f64) -> Option<BudgetSaved> {
        self.post("/api/budget", &BudgetUpdate { amount }).await
    }

    pub async fn expenses(&self) -> Option<ExpenseList> {
        self.call(ApiRequest::get(self.url("/api/expenses"))).await
    }

    pub async fn add_expense(&self, expense: &NewExpense) -> Option<ExpenseCreated> {
        self.post("/api/expense", expense).await
    }

    /// Report downloads are page navigations, not fetches.
    pub fn report_url(&self, period: &str) -> String {
        self.url(&format!("/api/report/{}", period))
    }
}
