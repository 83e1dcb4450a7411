use std::future::Future;

use gloo_net::http::Request;
use log::{debug, info};
use thiserror::Error;
use web_sys::FormData;

use crate::counter::store::{CounterStore, KeyValueStorage};

/// One validated form submission. Lives only until the webhook answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub firma: Option<String>,
    pub content: String,
}

impl Submission {
    /// Multipart fields in the order they are sent. `firma` only when given.
    pub fn parts(&self) -> Vec<(&'static str, &str)> {
        let mut parts = vec![("name", self.name.as_str()), ("email", self.email.as_str())];
        if let Some(firma) = &self.firma {
            parts.push(("firma", firma.as_str()));
        }
        parts.push(("content", self.content.as_str()));
        parts
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("could not build form payload: {0}")]
    Payload(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("webhook answered with status {status}")]
    Status { status: u16 },
}

/// Sends a submission somewhere and yields the response body.
///
/// No `Send` bound: the browser runs everything on one thread.
pub trait Transport {
    fn post(&self, submission: &Submission) -> impl Future<Output = Result<String, SubmissionError>>;
}

/// Posts submissions as `multipart/form-data` to the automation webhook.
pub struct WebhookClient {
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn form_data(submission: &Submission) -> Result<FormData, SubmissionError> {
        let form = FormData::new().map_err(|e| SubmissionError::Payload(format!("{:?}", e)))?;
        for (name, value) in submission.parts() {
            form.append_with_str(name, value)
                .map_err(|e| SubmissionError::Payload(format!("{:?}", e)))?;
        }
        Ok(form)
    }
}

impl Transport for WebhookClient {
    async fn post(&self, submission: &Submission) -> Result<String, SubmissionError> {
        // The browser fills in the multipart Content-Type with its boundary.
        let response = Request::post(&self.url)
            .body(Self::form_data(submission)?)
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(SubmissionError::Status {
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))
    }
}

/// Sends one submission and, once the webhook accepted it, bumps the
/// submission counter. Returns the count to display. A failure leaves the
/// counter alone; nothing is retried.
pub async fn deliver<T, S>(
    transport: &T,
    counter: &CounterStore<S>,
    submission: &Submission,
) -> Result<u64, SubmissionError>
where
    T: Transport,
    S: KeyValueStorage,
{
    info!("Sending submission ({} parts)", submission.parts().len());
    let body = transport.post(submission).await?;
    debug!("Webhook response: {}", body);
    let count = counter.increment();
    info!("Submission accepted, count is now {}", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::config;
    use crate::counter::store::testing::MemoryStorage;
    use crate::form::state::{FormAction, FormState, FormValues, SubmitStatus};
    use crate::form::validator::testing::valid_values;
    use yew::functional::Reducible;

    struct StubTransport {
        outcome: Result<String, SubmissionError>,
        sent: RefCell<Vec<Submission>>,
        calls: Cell<usize>,
    }

    impl StubTransport {
        fn answering(outcome: Result<String, SubmissionError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
                calls: Cell::new(0),
            }
        }
    }

    impl Transport for StubTransport {
        async fn post(&self, submission: &Submission) -> Result<String, SubmissionError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(submission.clone());
            self.outcome.clone()
        }
    }

    fn apply(state: FormState, action: FormAction) -> FormState {
        (*std::rc::Rc::new(state).reduce(action)).clone()
    }

    /// What the upload form does on submit, minus the rendering.
    fn run_submit(state: FormState, transport: &StubTransport, storage: &MemoryStorage) -> FormState {
        let submission = match state.accept() {
            Ok(submission) => submission,
            Err(errors) => return apply(state, FormAction::Rejected(errors)),
        };
        let state = apply(state, FormAction::Started);
        let counter = CounterStore::new(storage);
        match block_on(deliver(transport, &counter, &submission)) {
            Ok(_) => apply(state, FormAction::Succeeded),
            Err(_) => apply(state, FormAction::Failed),
        }
    }

    fn sample(firma: Option<&str>) -> Submission {
        Submission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            firma: firma.map(str::to_string),
            content: "text".to_string(),
        }
    }

    #[test]
    fn parts_skip_missing_firma() {
        let names: Vec<&str> = sample(None).parts().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["name", "email", "content"]);
    }

    #[test]
    fn parts_include_firma_before_content() {
        let submission = sample(Some("Harvest Flow"));
        assert_eq!(
            submission.parts(),
            vec![
                ("name", "Jane Doe"),
                ("email", "jane@example.com"),
                ("firma", "Harvest Flow"),
                ("content", "text"),
            ]
        );
    }

    #[test]
    fn delivered_submission_bumps_counter() {
        let storage = MemoryStorage::with_item(config::COUNTER_STORAGE_KEY, "41");
        let transport = StubTransport::answering(Ok("Accepted".to_string()));
        let count = block_on(deliver(&transport, &CounterStore::new(&storage), &sample(None)));
        assert_eq!(count, Ok(42));
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn rejected_status_leaves_counter() {
        let storage = MemoryStorage::with_item(config::COUNTER_STORAGE_KEY, "41");
        let transport = StubTransport::answering(Err(SubmissionError::Status { status: 500 }));
        let result = block_on(deliver(&transport, &CounterStore::new(&storage), &sample(None)));
        assert_eq!(result, Err(SubmissionError::Status { status: 500 }));
        assert_eq!(storage.raw(config::COUNTER_STORAGE_KEY).as_deref(), Some("41"));
    }

    #[test]
    fn counter_write_fault_does_not_fail_delivery() {
        let storage = MemoryStorage::with_item(config::COUNTER_STORAGE_KEY, "8");
        storage.fail_writes.set(true);
        let transport = StubTransport::answering(Ok(String::new()));
        let count = block_on(deliver(&transport, &CounterStore::new(&storage), &sample(None)));
        assert_eq!(count, Ok(8));
    }

    #[test]
    fn withheld_consent_never_reaches_network() {
        let mut values = valid_values();
        values.consent = false;
        let storage = MemoryStorage::default();
        let transport = StubTransport::answering(Ok(String::new()));

        let state = run_submit(FormState::with_values(values), &transport, &storage);

        assert_eq!(transport.calls.get(), 0);
        assert_eq!(state.status, SubmitStatus::Idle);
        assert!(!state.errors.is_empty());
        assert_eq!(CounterStore::new(&storage).read(), 0);
    }

    #[test]
    fn successful_submission_counts_and_clears_form() {
        let storage = MemoryStorage::default();
        let transport = StubTransport::answering(Ok("Accepted".to_string()));
        let state = FormState::with_values(valid_values());

        let state = run_submit(state, &transport, &storage);

        assert_eq!(transport.calls.get(), 1);
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].name, "Jane Doe");
        assert_eq!(sent[0].firma, None);
        assert_eq!(CounterStore::new(&storage).read(), 1);
        assert_eq!(state.status, SubmitStatus::Succeeded);
        assert_eq!(state.values, FormValues::default());
    }

    #[test]
    fn failed_submission_keeps_input_and_counter() {
        let storage = MemoryStorage::default();
        let transport = StubTransport::answering(Err(SubmissionError::Network("offline".to_string())));
        let state = FormState::with_values(valid_values());

        let state = run_submit(state, &transport, &storage);

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(CounterStore::new(&storage).read(), 0);
        assert_eq!(state.status, SubmitStatus::Failed);
        assert_eq!(state.values, valid_values());
    }

    #[test]
    fn repeated_successes_count_up() {
        let storage = MemoryStorage::default();
        let transport = StubTransport::answering(Ok(String::new()));
        for _ in 0..3 {
            let state = FormState::with_values(valid_values());
            run_submit(state, &transport, &storage);
        }
        assert_eq!(CounterStore::new(&storage).read(), 3);
    }
}
