//! Recording transport for tests.
//!
//! Replies are scripted in order; every request is recorded so tests can
//! assert exactly what went over the wire.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::api::{ApiError, Header, HttpReply, RequestBody, Transport};

#[derive(Clone, Debug, PartialEq)]
pub enum RecordedBody {
    None,
    Empty,
    Json(serde_json::Value),
    File(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<Header>,
    pub body: RecordedBody,
}

/// Cheap to clone; clones share the script and the call log.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpReply, ApiError>>>>,
    calls: Rc<RefCell<Vec<RecordedCall>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpReply { status, body: body.to_string() }));
        self
    }

    pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpReply { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Transport(message.to_owned())));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.url.clone()).collect()
    }

    fn next_reply(&self) -> Result<HttpReply, ApiError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, ApiError> {
        self.calls.borrow_mut().push(RecordedCall {
            method: "GET",
            url: url.to_owned(),
            headers: Vec::new(),
            body: RecordedBody::None,
        });
        self.next_reply()
    }

    async fn post(&self, url: &str, headers: &[Header], body: RequestBody<'_>) -> Result<HttpReply, ApiError> {
        let body = match body {
            RequestBody::Empty => RecordedBody::Empty,
            RequestBody::Json(value) => RecordedBody::Json(value),
            RequestBody::File(upload) => RecordedBody::File(upload.file_name.clone()),
        };
        self.calls.borrow_mut().push(RecordedCall {
            method: "POST",
            url: url.to_owned(),
            headers: headers.to_vec(),
            body,
        });
        self.next_reply()
    }
}
