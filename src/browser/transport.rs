use gloo_net::http::Request;
use login_core::graphql::{token_header, GraphqlRequest};
use login_core::{ClientConfig, ClientError, KeyValueStore, Result, Transport};
use serde_json::Value;

/// GraphQL over HTTP POST, with the stored access token as a request header.
pub struct GraphqlHttpTransport<S> {
    config: ClientConfig,
    storage: S,
}

impl<S: KeyValueStore> GraphqlHttpTransport<S> {
    pub const fn new(config: ClientConfig, storage: S) -> Self {
        Self { config, storage }
    }
}

fn transport_error(e: gloo_net::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}

impl<S: KeyValueStore> Transport for GraphqlHttpTransport<S> {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value> {
        let mut builder = Request::post(&self.config.graphql_endpoint);
        if let Some((name, value)) = token_header(&self.config, &self.storage)? {
            builder = builder.header(&name, &value);
        }

        tracing::debug!(
            operation = request.label(),
            endpoint = %self.config.graphql_endpoint,
            "sending graphql request"
        );

        let response = builder
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        if !response.ok() {
            tracing::error!(status = response.status(), operation = request.label(), "graphql request failed");
            return Err(ClientError::Status(response.status()));
        }

        response.json::<Value>().await.map_err(transport_error)
    }
}
