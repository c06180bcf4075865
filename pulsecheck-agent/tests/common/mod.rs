//! In-memory sink fakes shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use pulsecheck_core::{DocumentStore, QueuePublisher, SinkError};
use serde_json::Value;

/// Queue fake that records every published message.
#[derive(Default)]
pub struct RecordingQueue {
    pub messages: Mutex<Vec<Value>>,
}

impl RecordingQueue {
    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

#[async_trait]
impl QueuePublisher for RecordingQueue {
    async fn publish(&self, message: &Value) -> Result<(), SinkError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Queue fake simulating a total broker outage.
pub struct FailingQueue;

#[async_trait]
impl QueuePublisher for FailingQueue {
    async fn publish(&self, _message: &Value) -> Result<(), SinkError> {
        Err(SinkError::Queue("broker unreachable".to_string()))
    }
}

/// Store fake that records every written document.
pub struct RecordingStore {
    pub documents: Mutex<Vec<(String, Value)>>,
    alive: bool,
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            alive: true,
        }
    }
}

impl RecordingStore {
    /// A store whose liveness check always fails.
    pub fn dead() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            alive: false,
        }
    }

    pub fn documents_in(&self, collection: &str) -> Vec<Value> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == collection)
            .map(|(_, doc)| doc.clone())
            .collect()
    }

    pub fn document_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn write(&self, collection: &str, document: &Value) -> Result<(), SinkError> {
        self.documents
            .lock()
            .unwrap()
            .push((collection.to_string(), document.clone()));
        Ok(())
    }

    async fn ping(&self) -> bool {
        self.alive
    }
}

/// Store fake simulating a total index outage.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn write(&self, _collection: &str, _document: &Value) -> Result<(), SinkError> {
        Err(SinkError::Index("index unreachable".to_string()))
    }

    async fn ping(&self) -> bool {
        false
    }
}
