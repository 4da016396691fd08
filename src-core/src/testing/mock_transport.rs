use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{json, Value};

use crate::error::{ClientError, Result};
use crate::graphql::{GraphqlRequest, Operation};
use crate::ports::Transport;

/// One canned answer, matched on document and variables.
#[derive(Debug)]
pub struct MockedResponse {
    pub request: GraphqlRequest,
    pub result: Result<Value>,
}

impl MockedResponse {
    /// Answer `O` called with `variables` with `{ "data": data }`.
    pub fn data<O: Operation>(variables: &O::Variables, data: Value) -> Result<Self> {
        Ok(Self {
            request: O::request(variables)?,
            result: Ok(json!({ "data": data })),
        })
    }

    /// Fail `O` called with `variables` with `error`.
    pub fn error<O: Operation>(variables: &O::Variables, error: ClientError) -> Result<Self> {
        Ok(Self {
            request: O::request(variables)?,
            result: Err(error),
        })
    }
}

/// `Transport` that replays mocked responses, each at most once.
#[derive(Debug, Default)]
pub struct MockTransport {
    mocks: RefCell<VecDeque<MockedResponse>>,
    issued: RefCell<Vec<GraphqlRequest>>,
}

impl MockTransport {
    pub fn new(mocks: impl IntoIterator<Item = MockedResponse>) -> Self {
        Self {
            mocks: RefCell::new(mocks.into_iter().collect()),
            issued: RefCell::new(Vec::new()),
        }
    }

    /// Every request seen so far, matched or not.
    pub fn issued(&self) -> Vec<GraphqlRequest> {
        self.issued.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.mocks.borrow().len()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value> {
        self.issued.borrow_mut().push(request.clone());

        let mut mocks = self.mocks.borrow_mut();
        let position = mocks
            .iter()
            .position(|mock| mock.request.query == request.query && mock.request.variables == request.variables);

        match position.and_then(|index| mocks.remove(index)) {
            Some(mock) => mock.result,
            None => Err(ClientError::Unmatched(request.label().to_string())),
        }
    }
}
