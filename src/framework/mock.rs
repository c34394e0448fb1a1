//! # Mock Framework
//!
//! Utilities for testing clients and actors in isolation.
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations up front with `expect_*().return_ok(..)`,
//!   hand out [`MockClient::client`], then [`MockClient::verify`] at the end.
//!   Use this when a real actor depends on a mocked one (a sale actor whose
//!   player and product dependencies are scripted).
//! - [`create_mock_client`] plus the `expect_*` free functions: drive the
//!   receiving end by hand and inspect every payload. Use this to unit test
//!   the payload a domain client builds.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

type ActionMatcher<T> = Box<dyn Fn(&<T as ActorEntity>::Action) -> bool + Send>;

/// A queued request the mock is prepared to answer.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        matcher: Option<ActionMatcher<T>>,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;
type Mismatches = Arc<Mutex<Vec<String>>>;

/// Answer sent for a request that does not match the next expectation.
#[derive(Debug, Error)]
#[error("mock mismatch: {0}")]
pub struct MockMismatch(pub String);

fn reject<T: ActorEntity>(request: ResourceRequest<T>, reason: String, mismatches: &Mismatches) {
    fn err(reason: &str) -> FrameworkError {
        FrameworkError::EntityError(Box::new(MockMismatch(reason.to_string())))
    }
    // Recorded before replying so `verify` right after the call sees it.
    mismatches.lock().unwrap().push(reason.clone());
    match request {
        ResourceRequest::Create { respond_to, .. } => {
            let _ = respond_to.send(Err(err(&reason)));
        }
        ResourceRequest::Get { respond_to, .. } => {
            let _ = respond_to.send(Err(err(&reason)));
        }
        ResourceRequest::Update { respond_to, .. } => {
            let _ = respond_to.send(Err(err(&reason)));
        }
        ResourceRequest::Delete { respond_to, .. } => {
            let _ = respond_to.send(Err(err(&reason)));
        }
        ResourceRequest::Action { respond_to, .. } => {
            let _ = respond_to.send(Err(err(&reason)));
        }
    }
}

fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
    mismatches: &Mismatches,
) {
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
            if id == expected {
                let _ = respond_to.send(response);
            } else {
                reject(
                    ResourceRequest::Get { id: id.clone(), respond_to },
                    format!("expected get of {}, got get of {}", expected, id),
                    mismatches,
                );
            }
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, update, respond_to },
            Some(Expectation::Update { id: expected, response }),
        ) => {
            if id == expected {
                let _ = respond_to.send(response);
            } else {
                reject(
                    ResourceRequest::Update { id: id.clone(), update, respond_to },
                    format!("expected update of {}, got update of {}", expected, id),
                    mismatches,
                );
            }
        }
        (
            ResourceRequest::Action { id, action, respond_to },
            Some(Expectation::Action { id: expected, matcher, response }),
        ) => {
            let action_ok = matcher.as_ref().map_or(true, |m| m(&action));
            if id == expected && action_ok {
                let _ = respond_to.send(response);
            } else {
                let reason = format!("expected action on {}, got {:?} on {}", expected, action, id);
                reject::<T>(ResourceRequest::Action { id, action, respond_to }, reason, mismatches);
            }
        }
        (request, None) => reject(request, "request with no expectation left".into(), mismatches),
        (request, Some(_)) => reject(request, "request of the wrong kind".into(), mismatches),
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are answered strictly in the order they were queued. Gets,
/// updates and actions must target the expected id, and an action must pass
/// its [`matching`](ActionExpectationBuilder::matching) predicate if one was
/// given. A request that does not match is answered with a [`MockMismatch`]
/// entity error and recorded, so [`MockClient::verify`] fails.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_action(ProductId(1))
///     .matching(|a| matches!(a, ProductAction::Withdraw(2)))
///     .return_ok(ProductActionResult::Withdraw(8));
///
/// let client = ProductClient::new(mock.client());
/// // ...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Mismatches,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches: Mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let seen = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation, &seen);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            matcher: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any request mismatched or any queued expectation was never
    /// consumed.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {}", mismatches.join("; "));
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Get { id: self.id, response });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Queue<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Id, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update { id: self.id, response });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    matcher: Option<ActionMatcher<T>>,
    expectations: Queue<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Only accept actions for which `predicate` holds.
    pub fn matching<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T::Action) -> bool + Send + 'static,
    {
        self.matcher = Some(Box::new(predicate));
        self
    }

    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                id: self.id,
                matcher: self.matcher,
                response,
            });
    }
}

// =============================================================================
// MANUAL RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next message if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next message if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next message if it is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, update, respond_to }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Returns the next message if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Player, PlayerCreate, PlayerId};
    use crate::player_actor::{PlayerAction, PlayerActionResult};

    fn is_mismatch(err: &FrameworkError) -> bool {
        matches!(err, FrameworkError::EntityError(inner) if inner.is::<MockMismatch>())
    }

    #[tokio::test]
    async fn test_manual_receiver_sees_create_payload() {
        let (client, mut receiver) = create_mock_client::<Player>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(PlayerCreate { nickname: "farmer".into(), starting_gold: 500.0 })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.nickname, "farmer");
        assert_eq!(payload.starting_gold, 500.0);
        responder.send(Ok(PlayerId(7))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), PlayerId(7));
    }

    #[tokio::test]
    async fn test_mock_client_answers_in_order() {
        let mut mock = MockClient::<Player>::new();
        mock.expect_create().return_ok(PlayerId(1));
        mock.expect_get(PlayerId(1))
            .return_ok(Some(Player::new(PlayerId(1), "farmer", 500.0)));

        let client = mock.client();
        let id = client
            .create(PlayerCreate { nickname: "farmer".into(), starting_gold: 500.0 })
            .await
            .unwrap();
        assert_eq!(id, PlayerId(1));

        let fetched = client.get(PlayerId(1)).await.unwrap().unwrap();
        assert_eq!(fetched.gold, 500.0);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_injects_errors() {
        let mut mock = MockClient::<Player>::new();
        mock.expect_get(PlayerId(3)).return_err(FrameworkError::ActorClosed);

        let result = mock.client().get(PlayerId(3)).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "1 remaining")]
    async fn test_verify_flags_unused_expectations() {
        let mut mock = MockClient::<Player>::new();
        mock.expect_get(PlayerId(1)).return_ok(None);
        mock.verify();
    }

    #[tokio::test]
    async fn test_action_on_wrong_id_is_refused() {
        let mut mock = MockClient::<Player>::new();
        mock.expect_action(PlayerId(1))
            .return_ok(PlayerActionResult::Credit(900.0));

        let result = mock
            .client()
            .perform_action(PlayerId(2), PlayerAction::Credit(900.0))
            .await;

        assert!(is_mismatch(&result.unwrap_err()));
    }

    #[tokio::test]
    async fn test_action_failing_predicate_is_refused() {
        let mut mock = MockClient::<Player>::new();
        mock.expect_action(PlayerId(1))
            .matching(|a| matches!(a, PlayerAction::Credit(_)))
            .return_ok(PlayerActionResult::Credit(900.0));

        let result = mock
            .client()
            .perform_action(PlayerId(1), PlayerAction::Debit(5.0))
            .await;

        assert!(is_mismatch(&result.unwrap_err()));
    }

    #[tokio::test]
    async fn test_matching_action_is_answered() {
        let mut mock = MockClient::<Player>::new();
        mock.expect_action(PlayerId(1))
            .matching(|a| matches!(a, PlayerAction::Credit(amount) if *amount == 900.0))
            .return_ok(PlayerActionResult::Credit(900.0));

        let result = mock
            .client()
            .perform_action(PlayerId(1), PlayerAction::Credit(900.0))
            .await;

        assert_eq!(result.unwrap(), PlayerActionResult::Credit(900.0));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "expected get of player_1, got get of player_2")]
    async fn test_verify_flags_mismatched_requests() {
        let mut mock = MockClient::<Player>::new();
        mock.expect_get(PlayerId(1)).return_ok(None);

        let _ = mock.client().get(PlayerId(2)).await;
        mock.verify();
    }

    #[tokio::test]
    async fn test_request_without_expectation_is_refused() {
        let mock = MockClient::<Player>::new();
        let result = mock.client().get(PlayerId(1)).await;
        assert!(is_mismatch(&result.unwrap_err()));
    }
}
