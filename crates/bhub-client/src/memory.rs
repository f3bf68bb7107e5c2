//! In-memory implementation of the BHub REST API for testing and local use.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    api::{ApiResult, GroupApi},
    error::ApiError,
};

/// An API call as the in-memory implementation observed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// `list_groups()`
    ListGroups,
    /// `get_group(id)`
    GetGroup {
        /// Requested group id
        id: String,
    },
    /// `create_group(name, description)`
    CreateGroup {
        /// Requested group name
        name: String,
        /// Requested description
        description: String,
    },
    /// `join_group(group_id, user_id)`
    JoinGroup {
        /// Target group
        group_id: String,
        /// Joining user
        user_id: String,
    },
}

/// One scripted reply.
#[derive(Debug, Clone)]
enum Step {
    Body(String),
    Status(u16),
}

#[derive(Debug, Default)]
struct State {
    script: VecDeque<Step>,
    calls: Vec<RecordedCall>,
}

/// In-memory [`GroupApi`] with scripted responses.
///
/// Replies are consumed in call order regardless of which operation is
/// invoked; when the script runs dry, operations answer with an empty body.
/// Every call is recorded so tests can assert on the arguments the
/// repository actually passed down.
#[derive(Debug, Default)]
pub struct MemoryGroupApi {
    state: Mutex<State>,
}

impl MemoryGroupApi {
    /// Create an implementation with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next reply to succeed with the given body.
    #[must_use]
    pub fn respond(self, body: impl Into<String>) -> Self {
        self.push(Step::Body(body.into()));
        self
    }

    /// Script the next reply to fail with the given HTTP status.
    #[must_use]
    pub fn fail_with_status(self, status: u16) -> Self {
        self.push(Step::Status(status));
        self
    }

    /// The calls observed so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    fn push(&self, step: Step) {
        self.lock().script.push_back(step);
    }

    fn reply(&self, call: RecordedCall) -> ApiResult<String> {
        let mut state = self.lock();
        state.calls.push(call);
        match state.script.pop_front() {
            Some(Step::Body(body)) => Ok(body),
            Some(Step::Status(status)) => Err(ApiError::Status {
                url: "memory://bhub".into(),
                status,
            }),
            None => Ok(String::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A poisoned lock still yields usable state.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl GroupApi for MemoryGroupApi {
    async fn list_groups(&self) -> ApiResult<String> {
        self.reply(RecordedCall::ListGroups)
    }

    async fn get_group(&self, id: &str) -> ApiResult<String> {
        self.reply(RecordedCall::GetGroup { id: id.into() })
    }

    async fn create_group(&self, name: &str, description: &str) -> ApiResult<String> {
        self.reply(RecordedCall::CreateGroup {
            name: name.into(),
            description: description.into(),
        })
    }

    async fn join_group(&self, group_id: &str, user_id: &str) -> ApiResult<String> {
        self.reply(RecordedCall::JoinGroup {
            group_id: group_id.into(),
            user_id: user_id.into(),
        })
    }
}
