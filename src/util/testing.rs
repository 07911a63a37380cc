// src/util/testing.rs

use anyhow::Result;
use std::collections::{HashMap, VecDeque};
use std::env;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{ApiRequest, Method, Notifier, RawResponse, Transport};
use crate::domain::DomainError;

#[derive(Debug, Clone)]
enum Reply {
    Response(RawResponse),
    NetworkFailure(String),
}

#[derive(Debug, Default)]
struct MockState {
    replies: HashMap<(Method, String), VecDeque<Reply>>,
    requests: Vec<ApiRequest>,
}

/// Shared mock transport for testing the API client and controllers
///
/// Replies are configured per method and path. When several replies are
/// queued for the same route they are served in order and the last one
/// repeats. Every request is recorded, and clones share the same state so a
/// test can keep one handle while the client owns another.
///
/// # Examples
///
/// ```
/// use notes_client::application::{ApiClient, Method};
/// use notes_client::util::testing::MockTransport;
///
/// let transport = MockTransport::builder()
///     .with_response(Method::Get, "/tag/all", 200, "[]")
///     .build();
/// let client = ApiClient::new("http://localhost:8080", transport.clone());
///
/// client.request(Method::Get, "/tag/all", None).unwrap();
/// assert_eq!(transport.requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder::new()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every request sent so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state().requests.clone()
    }

    /// Method and path of every request sent so far
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.state()
            .requests
            .iter()
            .map(|r| (r.method, r.path.clone()))
            .collect()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, DomainError> {
        let mut state = self.state();
        state.requests.push(request.clone());

        let key = (request.method, request.path.clone());
        let reply = match state.replies.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::NetworkFailure(message)) => Err(DomainError::RequestFailed(message)),
            None => Err(DomainError::RequestFailed(format!(
                "No response configured for {} {}",
                request.method, request.path
            ))),
        }
    }
}

/// Builder for MockTransport
///
/// Provides a fluent interface for configuring replies.
pub struct MockTransportBuilder {
    replies: HashMap<(Method, String), VecDeque<Reply>>,
}

impl MockTransportBuilder {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
        }
    }

    /// Queue one reply for a route
    pub fn with_response(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.replies
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Reply::Response(RawResponse::new(status, body)));
        self
    }

    /// Queue several replies for a route, served in order
    pub fn with_responses(mut self, method: Method, path: &str, replies: Vec<(u16, &str)>) -> Self {
        for (status, body) in replies {
            self = self.with_response(method, path, status, body);
        }
        self
    }

    /// Make a route fail before any response arrives
    pub fn with_network_failure(mut self, method: Method, path: &str, message: &str) -> Self {
        self.replies
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Reply::NetworkFailure(message.to_string()));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            state: Arc::new(Mutex::new(MockState {
                replies: self.replies,
                requests: vec![],
            })),
        }
    }
}

impl Default for MockTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

/// Notifier that keeps every message for later inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Success(message) => Some(message),
                Notification::Failure(_) => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Failure(message) => Some(message),
                Notification::Success(_) => None,
            })
            .collect()
    }

    fn push(&self, notification: Notification) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(Notification::Success(message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.push(Notification::Failure(message.to_string()));
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
