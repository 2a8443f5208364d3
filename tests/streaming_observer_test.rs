//! Streaming through a chain: observers see tokens in arrival order

mod support;

use std::sync::{Arc, Mutex};

use stepchain::prelude::*;
use stepchain::streaming::CollectingObserver;
use support::mock_model::{MockModel, Script};

/// Records the callback sequence as short strings
#[derive(Default)]
struct EventLog {
    events: Mutex<Vec<String>>,
}

impl EventLog {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl StreamObserver for EventLog {
    fn on_stream_start(&self, model: &str) {
        self.events.lock().unwrap().push(format!("start:{model}"));
    }

    fn on_token(&self, token: &str) {
        self.events.lock().unwrap().push(format!("token:{token}"));
    }

    fn on_stream_end(&self, response: &ChatResponse) {
        self.events
            .lock()
            .unwrap()
            .push(format!("end:{}", response.content_text()));
    }

    fn on_error(&self, error: &ChainError) {
        self.events.lock().unwrap().push(format!("error:{error}"));
    }
}

fn observer<O: StreamObserver + 'static>(observer: &Arc<O>) -> Arc<dyn StreamObserver> {
    observer.clone()
}

fn explain_chain(mock: Arc<MockModel>, observers: Vec<Arc<dyn StreamObserver>>) -> Chain {
    let mut builder = ModelHandle::builder()
        .model("stream-model")
        .streaming(true)
        .stdout(false)
        .backend(mock);
    for observer in observers {
        builder = builder.observer(observer);
    }
    build_chains(ChainMode::ZeroShot, builder.build().unwrap())
        .unwrap()
        .into_zero_shot()
        .unwrap()
        .explain
}

fn values() -> PlaceholderBindings {
    bindings! { "explain_role" => "R", "question" => "Q", "explanation" => "E" }
}

#[tokio::test]
async fn tokens_arrive_in_order_and_concatenate_to_the_response() {
    let mock = Arc::new(MockModel::streaming(&["[1단계]", "\n", "문제를 ", "읽어요"], None));
    let collector = Arc::new(CollectingObserver::new());
    let chain = explain_chain(mock.clone(), vec![observer(&collector)]);

    let response = chain.invoke(&values()).await.unwrap();

    assert_eq!(collector.tokens(), vec!["[1단계]", "\n", "문제를 ", "읽어요"]);
    assert_eq!(response.content_text(), collector.text());
    assert_eq!(response.model.as_deref(), Some("stream-model"));
    assert_eq!(mock.call_count(), 1);
    assert!(mock.requests()[0].stream);
}

#[tokio::test]
async fn observers_are_called_in_registration_order() {
    let mock = Arc::new(MockModel::streaming(&["a", "b"], None));
    let first = Arc::new(EventLog::default());
    let second = Arc::new(CollectingObserver::new());
    let chain = explain_chain(mock, vec![observer(&first), observer(&second)]);

    chain.invoke(&values()).await.unwrap();

    assert_eq!(
        first.events(),
        vec!["start:stream-model", "token:a", "token:b", "end:ab"]
    );
    assert_eq!(second.text(), "ab");
}

#[tokio::test]
async fn stream_end_content_wins_over_deltas() {
    let mock = Arc::new(MockModel::streaming(&["par", "tial"], Some("final answer")));
    let log = Arc::new(EventLog::default());
    let chain = explain_chain(mock, vec![observer(&log)]);

    let response = chain.invoke(&values()).await.unwrap();

    assert_eq!(response.content_text(), "final answer");
    assert_eq!(log.events().last().unwrap(), "end:final answer");
}

#[tokio::test]
async fn stream_errors_reach_observers_and_caller() {
    let error = ChainError::StreamError("connection reset".to_string());
    let mock = Arc::new(MockModel::new(Script::StreamThenFail {
        deltas: vec!["half".to_string()],
        error: error.clone(),
    }));
    let collector = Arc::new(CollectingObserver::new());
    let chain = explain_chain(mock, vec![observer(&collector)]);

    let err = chain.invoke(&values()).await.unwrap_err();

    assert_eq!(err, error);
    assert_eq!(collector.tokens(), vec!["half"]);
    assert_eq!(collector.errors(), vec![error.to_string()]);
}

#[tokio::test]
async fn failed_stream_setup_is_reported() {
    let error = ChainError::AuthenticationError("bad key".to_string());
    let mock = Arc::new(MockModel::new(Script::Fail(error.clone())));
    let log = Arc::new(EventLog::default());
    let chain = explain_chain(mock, vec![observer(&log)]);

    let err = chain.invoke(&values()).await.unwrap_err();

    assert_eq!(err, error);
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(log.events(), vec![format!("error:{error}")]);
}

#[tokio::test]
async fn missing_placeholder_produces_no_stream_callbacks() {
    let mock = Arc::new(MockModel::streaming(&["x"], None));
    let log = Arc::new(EventLog::default());
    let chain = explain_chain(mock.clone(), vec![observer(&log)]);

    let err = chain
        .invoke(&bindings! { "explain_role" => "R" })
        .await
        .unwrap_err();

    assert!(matches!(err, ChainError::MissingPlaceholder { .. }));
    assert!(log.events().is_empty());
    assert_eq!(mock.call_count(), 0);
}
