//! Manage Notes use case
//!
//! Orchestrates one read or guarded write of a device's notes field:
//!
//! ```text
//! acquire session
//!      ↓
//! Resolving ── name → id
//!      ↓
//! Reading ──── current note
//!      ↓
//! ┌─ no notes argument ──────────────→ Current
//! ├─ --what-if ──────────────────────→ WouldUpdate
//! ├─ existing note, operator says no ─→ Unchanged
//! └─ otherwise: Writing → Verifying ─→ Updated
//! ```
//!
//! Every failure aborts the run immediately. Nothing is retried and nothing
//! needs rolling back: a failed write leaves the remote note as it was.

use crate::ports::confirmation::{AutoDecline, ConfirmationError, ConfirmationPort};
use crate::ports::device_directory::{DeviceLookup, LookupError, NotesStore, ReadError, WriteError};
use crate::ports::progress::{NoProgress, NotesProgressNotifier};
use crate::ports::session_provider::{AuthError, SessionProvider};
use crate::use_cases::resolve_device::resolve_device_id;
use devnotes_domain::{
    DeviceName, NoteValue, NotesOutcome, NotesPhase, NotesRequest, OverwritePrompt,
    ResolutionPolicy,
};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that abort the notes workflow
#[derive(Error, Debug)]
pub enum ManageNotesError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("Confirmation failed: {0}")]
    Confirmation(#[from] ConfirmationError),
}

/// Input for the ManageNotes use case
#[derive(Debug, Clone)]
pub struct ManageNotesInput {
    /// Display name of the target device
    pub device_name: DeviceName,
    /// Read, or write a new value
    pub request: NotesRequest,
    /// Report the write instead of performing it
    pub dry_run: bool,
    /// How duplicate display names are handled
    pub policy: ResolutionPolicy,
}

impl ManageNotesInput {
    pub fn new(device_name: DeviceName, request: NotesRequest) -> Self {
        Self {
            device_name,
            request,
            dry_run: false,
            policy: ResolutionPolicy::default(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Use case for reading or updating the notes of one device
pub struct ManageNotesUseCase<D: DeviceLookup + NotesStore + 'static> {
    sessions: Arc<dyn SessionProvider>,
    directory: Arc<D>,
    confirmation: Arc<dyn ConfirmationPort>,
}

impl<D: DeviceLookup + NotesStore + 'static> ManageNotesUseCase<D> {
    /// Create the use case. Overwrites are declined until a confirmation
    /// port is supplied with [`with_confirmation`](Self::with_confirmation).
    pub fn new(sessions: Arc<dyn SessionProvider>, directory: Arc<D>) -> Self {
        Self {
            sessions,
            directory,
            confirmation: Arc::new(AutoDecline),
        }
    }

    pub fn with_confirmation(mut self, confirmation: Arc<dyn ConfirmationPort>) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: ManageNotesInput) -> Result<NotesOutcome, ManageNotesError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ManageNotesInput,
        progress: &dyn NotesProgressNotifier,
    ) -> Result<NotesOutcome, ManageNotesError> {
        self.sessions.ensure_available()?;
        let session = self.sessions.acquire_session().await?;
        info!("Session established via {}", self.sessions.name());

        let device = input.device_name;

        let id = tracked(
            progress,
            NotesPhase::Resolving,
            resolve_device_id(&*self.directory, &session, &device, input.policy),
        )
        .await?;
        info!("Resolved '{}' to device {}", device, id);

        let current = tracked(
            progress,
            NotesPhase::Reading,
            self.directory.get_notes(&session, &id),
        )
        .await?;
        debug!("Current note length: {} bytes", current.as_str().len());

        let requested = match input.request {
            NotesRequest::Read => {
                return Ok(NotesOutcome::Current {
                    device,
                    note: current,
                });
            }
            NotesRequest::Write(value) => value,
        };

        if input.dry_run {
            info!("Dry run: skipping write to device {}", id);
            return Ok(NotesOutcome::WouldUpdate {
                device,
                previous: current,
                requested,
            });
        }

        if !current.is_blank() {
            let prompt = OverwritePrompt {
                device: device.clone(),
                existing: current.clone(),
                requested: requested.clone(),
            };
            progress.on_awaiting_input();
            if !self.confirmation.confirm(&prompt).await? {
                info!("Overwrite of device {} declined", id);
                return Ok(NotesOutcome::Unchanged {
                    device,
                    existing: current,
                    requested,
                });
            }
        }

        tracked(
            progress,
            NotesPhase::Writing,
            self.directory.set_notes(&session, &id, &requested),
        )
        .await?;
        info!("Notes written to device {}", id);

        let written: NoteValue = tracked(
            progress,
            NotesPhase::Verifying,
            self.directory.get_notes(&session, &id),
        )
        .await?;

        Ok(NotesOutcome::Updated {
            device,
            previous: current,
            current: written,
        })
    }
}

/// Run one remote call, bracketing it with progress notifications.
async fn tracked<T, E>(
    progress: &dyn NotesProgressNotifier,
    phase: NotesPhase,
    call: impl Future<Output = Result<T, E>>,
) -> Result<T, E> {
    progress.on_phase_start(phase);
    let result = call.await;
    progress.on_phase_complete(phase, result.is_ok());
    result
}
