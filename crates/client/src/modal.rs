//! Modal lifecycle state machine.
//!
//! ```text
//! Closed --open--> Open --begin_submit--> Submitting --complete--> Closed
//!                   ^                          |
//!                   +----------fail------------+
//! ```
//!
//! A modal accepts one submission at a time and cannot be closed while a
//! submission is in flight.

/// Where a modal is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    #[error("Modal is not open")]
    NotOpen,

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
    /// Inline message shown inside the modal.
    message: Option<String>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Open the modal with a clean message. No-op while submitting.
    pub fn open(&mut self) {
        if self.state == ModalState::Closed {
            self.state = ModalState::Open;
            self.message = None;
        }
    }

    /// Close the modal. Returns `false` (and stays open) while submitting.
    pub fn close(&mut self) -> bool {
        if self.state == ModalState::Submitting {
            return false;
        }
        self.state = ModalState::Closed;
        self.message = None;
        true
    }

    /// Move from `Open` to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<(), ModalError> {
        match self.state {
            ModalState::Open => {
                self.state = ModalState::Submitting;
                self.message = None;
                Ok(())
            }
            ModalState::Submitting => Err(ModalError::AlreadySubmitting),
            ModalState::Closed => Err(ModalError::NotOpen),
        }
    }

    /// The submission succeeded; close.
    pub fn complete(&mut self) {
        self.state = ModalState::Closed;
        self.message = None;
    }

    /// The submission failed; reopen with an inline message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = ModalState::Open;
        self.message = Some(message.into());
    }

    /// Show an inline message without changing state (client-side checks).
    pub fn reject(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }
}
