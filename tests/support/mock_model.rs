//! Scripted chat backend that records every request

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use stepchain::prelude::*;
use stepchain::types::Usage;

/// What the mock does on each call
#[derive(Debug, Clone)]
pub enum Script {
    /// Answer with this text
    Reply(String),
    /// Stream these deltas, then optionally a `StreamEnd` with this content
    Stream {
        deltas: Vec<String>,
        end: Option<String>,
    },
    /// Stream these deltas, then fail
    StreamThenFail {
        deltas: Vec<String>,
        error: ChainError,
    },
    /// Fail before producing anything
    Fail(ChainError),
}

#[derive(Debug)]
pub struct MockModel {
    script: Script,
    calls: AtomicU32,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockModel {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Script::Reply(text.to_string()))
    }

    pub fn streaming(deltas: &[&str], end: Option<&str>) -> Self {
        Self::new(Script::Stream {
            deltas: deltas.iter().map(|d| d.to_string()).collect(),
            end: end.map(str::to_string),
        })
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Messages of the most recent call as `(role, content)` pairs
    pub fn last_messages(&self) -> Vec<(String, String)> {
        self.requests()
            .last()
            .map(|r| {
                r.messages
                    .iter()
                    .map(|m| (m.role.to_string(), m.content.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn record(&self, request: &ChatRequest) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
    }
}

#[async_trait]
impl ChatCapability for MockModel {
    fn provider_id(&self) -> &str {
        "mock"
    }

    async fn chat_request(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.record(&request);
        match &self.script {
            Script::Reply(text) => Ok(ChatResponse::new(text.clone())
                .with_model(request.common_params.model.clone())
                .with_usage(Usage::new(10, 5))),
            Script::Stream { deltas, end } => {
                Ok(ChatResponse::new(end.clone().unwrap_or_else(|| deltas.concat())))
            }
            Script::StreamThenFail { error, .. } | Script::Fail(error) => Err(error.clone()),
        }
    }

    async fn chat_stream_request(&self, request: ChatRequest) -> Result<ChatStream> {
        self.record(&request);
        let model = request.common_params.model.clone();
        match self.script.clone() {
            Script::Reply(text) => {
                let stream = async_stream::stream! {
                    yield Ok::<_, ChainError>(ChatStreamEvent::StreamStart { model: Some(model) });
                    yield Ok(ChatStreamEvent::delta(text));
                };
                Ok(Box::pin(stream))
            }
            Script::Stream { deltas, end } => {
                let stream = async_stream::stream! {
                    yield Ok::<_, ChainError>(ChatStreamEvent::StreamStart {
                        model: Some(model.clone()),
                    });
                    for delta in deltas {
                        yield Ok(ChatStreamEvent::delta(delta));
                    }
                    if let Some(content) = end {
                        yield Ok(ChatStreamEvent::StreamEnd {
                            response: ChatResponse::new(content).with_model(model),
                        });
                    }
                };
                Ok(Box::pin(stream))
            }
            Script::StreamThenFail { deltas, error } => {
                let stream = async_stream::stream! {
                    for delta in deltas {
                        yield Ok(ChatStreamEvent::delta(delta));
                    }
                    yield Err(error);
                };
                Ok(Box::pin(stream))
            }
            Script::Fail(error) => Err(error),
        }
    }
}
