//! Fetch worker that runs HTTP requests off the application loop.
//!
//! Each [`FetchRequest`] is executed on its own tokio task. When the request
//! settles, a [`FetchResponse`] is posted back over an unbounded channel that
//! the application loop selects on. There is no cancellation: a superseded
//! request still runs to completion and its response is discarded by the
//! application state.

use crate::worker::client::HnClient;
use crate::worker::messages::{FetchOutcome, FetchRequest, FetchResponse};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Dispatches fetches and reports their outcomes over a channel.
#[derive(Debug, Clone)]
pub struct FetchWorker {
    client: HnClient,
    responses: UnboundedSender<FetchResponse>,
}

impl FetchWorker {
    /// Creates a worker and the receiving end of its response channel.
    #[must_use]
    pub fn new(client: HnClient) -> (Self, UnboundedReceiver<FetchResponse>) {
        let (responses, rx) = mpsc::unbounded_channel();
        (Self { client, responses }, rx)
    }

    /// Spawns a task that performs `request` and posts its response.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, request: FetchRequest) -> JoinHandle<()> {
        let client = self.client.clone();
        let responses = self.responses.clone();
        let span = tracing::debug_span!("fetch", request_id = request.request_id, url = %request.url);

        tokio::spawn(
            async move {
                let outcome = client.fetch(&request.url).await;
                match &outcome {
                    FetchOutcome::Success(stories) => {
                        tracing::debug!(hit_count = stories.len(), "fetch succeeded");
                    }
                    FetchOutcome::Failure(e) => {
                        tracing::debug!(error = %e, "fetch failed");
                    }
                }

                if responses.send(FetchResponse::new(request, outcome)).is_err() {
                    tracing::debug!("application loop gone, dropping fetch response");
                }
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::FetchError;
    use std::time::Duration;

    #[tokio::test]
    async fn response_echoes_request_tag() {
        let client = HnClient::new(Duration::from_secs(2)).unwrap();
        let (worker, mut rx) = FetchWorker::new(client);

        let request = FetchRequest {
            request_id: 7,
            url: "http://127.0.0.1:9/api/v1/search?query=x".to_string(),
        };
        worker.dispatch(request.clone()).await.unwrap();

        let response = rx.recv().await.unwrap();
        assert_eq!(response.request_id, 7);
        assert_eq!(response.url, request.url);
        assert!(matches!(response.outcome, FetchOutcome::Failure(FetchError::Network(_))));
    }
}
