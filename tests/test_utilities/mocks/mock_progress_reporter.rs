use bom_status::prelude::*;
use std::sync::{Arc, Mutex};

/// One call received by the mock reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Message(String),
    Progress { current: usize, total: usize },
    Error(String),
    Completion(String),
}

/// Mock ProgressReporter recording every call in order
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Text of every message, error and completion, in order
    pub fn get_messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Message(m) | ProgressEvent::Error(m) | ProgressEvent::Completion(m) => {
                    Some(m)
                }
                ProgressEvent::Progress { .. } => None,
            })
            .collect()
    }

    fn push(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ProgressEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.push(ProgressEvent::Progress { current, total });
    }

    fn report_error(&self, message: &str) {
        self.push(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ProgressEvent::Completion(message.to_string()));
    }
}
