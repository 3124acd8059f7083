//! Scripted transport shared by the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use pedidos_api::{AdminConfig, ApiClient, ApiRequest, ApiResponse, HttpTransport};
use pedidos_core::{AdminError, AdminResult};

pub const API: &str = "http://catalog.test";
pub const AUTH: &str = "http://auth.test";

/// Replies with queued responses in order and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<AdminResult<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.replies
            .lock()
            .push_back(Err(AdminError::network(message)));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// `METHOD url` of every request, in order
    pub fn log(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url))
            .collect()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> AdminResult<ApiResponse> {
        self.requests.lock().push(request.clone());
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(AdminError::network("no scripted reply left")))
    }
}

pub fn config() -> AdminConfig {
    AdminConfig {
        auth_base_url: AUTH.to_string(),
        api_base_url: API.to_string(),
        ..AdminConfig::default()
    }
}

pub fn client(transport: &Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::with_transport(&config(), transport.clone()).unwrap()
}

pub const ONE_PRODUCT: &str = r#"{"success":true,"data":[{"_id":"1","nombre":"X","precio":10,"stock":2,"activo":true,"categoria":"Otros"}]}"#;
