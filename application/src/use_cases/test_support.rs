//! In-memory port doubles shared by the use case tests.

use crate::ports::confirmation::{ConfirmationError, ConfirmationPort};
use crate::ports::device_directory::{
    DeviceLookup, LookupError, NotesStore, ReadError, WriteError,
};
use crate::ports::session_provider::{AuthError, Session, SessionProvider};
use async_trait::async_trait;
use devnotes_domain::{DeviceId, DeviceName, DeviceRecord, NoteValue, OverwritePrompt};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One remote call observed by [`InMemoryDirectory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCall {
    Find(String),
    Get(String),
    Set(String, String),
}

struct StoredDevice {
    record: DeviceRecord,
    notes: NoteValue,
}

/// Device directory backed by a vector, recording every call.
///
/// Writes are immediately visible to subsequent reads.
#[derive(Default)]
pub struct InMemoryDirectory {
    devices: Mutex<Vec<StoredDevice>>,
    calls: Mutex<Vec<DirectoryCall>>,
    fail_lookup: bool,
    fail_read: bool,
    fail_reread: bool,
    fail_write: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(self, id: &str, name: &str, notes: &str) -> Self {
        self.devices.lock().unwrap().push(StoredDevice {
            record: DeviceRecord::new(
                DeviceId::try_new(id).unwrap(),
                DeviceName::try_new(name).unwrap(),
            ),
            notes: NoteValue::new(notes),
        });
        self
    }

    pub fn failing_lookup(mut self) -> Self {
        self.fail_lookup = true;
        self
    }

    /// Every `get_notes` fails
    pub fn failing_read(mut self) -> Self {
        self.fail_read = true;
        self
    }

    /// `get_notes` fails once a write has been recorded
    pub fn failing_reread(mut self) -> Self {
        self.fail_reread = true;
        self
    }

    pub fn failing_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    pub fn calls(&self) -> Vec<DirectoryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, DirectoryCall::Set(..)))
            .count()
    }

    pub fn read_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, DirectoryCall::Get(..)))
            .count()
    }

    pub fn notes_of(&self, id: &str) -> Option<String> {
        self.devices
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.record.id.as_str() == id)
            .map(|d| d.notes.as_str().to_string())
    }

    fn record(&self, call: DirectoryCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DeviceLookup for InMemoryDirectory {
    async fn find_by_name(
        &self,
        _session: &Session,
        name: &DeviceName,
    ) -> Result<Vec<DeviceRecord>, LookupError> {
        self.record(DirectoryCall::Find(name.to_string()));
        if self.fail_lookup {
            return Err(LookupError::Request("connection reset".to_string()));
        }
        Ok(self
            .devices
            .lock()
            .unwrap()
            .iter()
            .filter(|d| &d.record.device_name == name)
            .map(|d| d.record.clone())
            .collect())
    }
}

#[async_trait]
impl NotesStore for InMemoryDirectory {
    async fn get_notes(&self, _session: &Session, id: &DeviceId) -> Result<NoteValue, ReadError> {
        self.record(DirectoryCall::Get(id.to_string()));
        if self.fail_read || (self.fail_reread && self.write_count() > 0) {
            return Err(ReadError::Request("HTTP 503: service unavailable".to_string()));
        }
        self.devices
            .lock()
            .unwrap()
            .iter()
            .find(|d| &d.record.id == id)
            .map(|d| d.notes.clone())
            .ok_or_else(|| ReadError::DeviceNotFound(id.to_string()))
    }

    async fn set_notes(
        &self,
        _session: &Session,
        id: &DeviceId,
        value: &NoteValue,
    ) -> Result<(), WriteError> {
        self.record(DirectoryCall::Set(id.to_string(), value.to_string()));
        if self.fail_write {
            return Err(WriteError::Rejected {
                status: 400,
                message: "notes too long".to_string(),
            });
        }
        let mut devices = self.devices.lock().unwrap();
        let device = devices
            .iter_mut()
            .find(|d| &d.record.id == id)
            .ok_or_else(|| WriteError::DeviceNotFound(id.to_string()))?;
        device.notes = value.clone();
        Ok(())
    }
}

/// Session provider that hands out a fixed token, or fails.
#[derive(Default)]
pub struct FakeSessions {
    fail: bool,
    acquired: AtomicUsize,
}

impl FakeSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for FakeSessions {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn ensure_available(&self) -> Result<(), AuthError> {
        if self.fail {
            return Err(AuthError::NotConfigured("auth.client_secret".to_string()));
        }
        Ok(())
    }

    async fn acquire_session(&self) -> Result<Session, AuthError> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Session::new("fake-token"))
    }
}

/// Confirmation double with a scripted answer that records each prompt.
pub struct ScriptedConfirmation {
    answer: bool,
    asked: Mutex<Vec<OverwritePrompt>>,
}

impl ScriptedConfirmation {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<OverwritePrompt> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationPort for ScriptedConfirmation {
    async fn confirm(&self, prompt: &OverwritePrompt) -> Result<bool, ConfirmationError> {
        self.asked.lock().unwrap().push(prompt.clone());
        Ok(self.answer)
    }
}
