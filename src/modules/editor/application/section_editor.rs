use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::session::{SessionManager, SessionState};
use crate::auth::domain::entities::SessionUser;
use crate::notification::ToastChannel;

//
// ──────────────────────────────────────────────────────────
// Ports
// ──────────────────────────────────────────────────────────
//

/// Fail-open read of the section's collection. A singleton section loads
/// as zero or one record.
#[async_trait]
pub trait SectionSource<E>: Send + Sync {
    async fn load(&self) -> Vec<E>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistError {
    pub message: String,
}

/// Write seam for one section. The signed-in owner is handed in so
/// owner-scoped sections can attach it to the payload; globally scoped
/// sections ignore it.
#[async_trait]
pub trait SectionStore<E, D>: Send + Sync {
    async fn persist(&self, draft: D, owner: &SessionUser) -> Result<E, PersistError>;
}

//
// ──────────────────────────────────────────────────────────
// State machine
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum EditorPhase<D> {
    Viewing,
    /// An open draft; `error` carries the last failed save's message.
    Editing { draft: D, error: Option<String> },
    Saving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Session is unknown, still loading, or anonymous - editing never
    /// opens under an ambiguous session.
    EditLocked,
    NotEditing,
    NoSuchRecord(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Save failed; the draft is preserved with the error attached.
    Failed,
}

/// The editing flow every section shares:
/// `Viewing -> Editing(draft) -> Saving -> Viewing | Editing`.
///
/// The draft is a copy - the shared collection is only replaced after a
/// confirmed write, and then by re-fetching through the source rather than
/// splicing locally. Every save attempt lands exactly one terminal toast.
pub struct SectionEditor<E, D> {
    label: &'static str,
    session: Arc<SessionManager>,
    source: Arc<dyn SectionSource<E>>,
    store: Arc<dyn SectionStore<E, D>>,
    toasts: ToastChannel,
    records: Vec<E>,
    phase: EditorPhase<D>,
}

impl<E, D> SectionEditor<E, D>
where
    E: Clone,
    D: Default + Clone + From<E>,
{
    pub fn new(
        label: &'static str,
        session: Arc<SessionManager>,
        source: Arc<dyn SectionSource<E>>,
        store: Arc<dyn SectionStore<E, D>>,
        toasts: ToastChannel,
    ) -> Self {
        Self {
            label,
            session,
            source,
            store,
            toasts,
            records: Vec::new(),
            phase: EditorPhase::Viewing,
        }
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn phase(&self) -> &EditorPhase<D> {
        &self.phase
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, EditorPhase::Editing { .. })
    }

    /// Whether edit affordances render at all.
    pub fn can_edit(&self) -> bool {
        self.session.can_edit()
    }

    pub async fn refresh(&mut self) {
        self.records = self.source.load().await;
    }

    /// Open an empty draft for a new record.
    pub fn begin_add(&mut self) -> Result<(), EditorError> {
        self.ensure_unlocked()?;
        self.phase = EditorPhase::Editing {
            draft: D::default(),
            error: None,
        };
        Ok(())
    }

    /// Open a draft copied from an existing record.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), EditorError> {
        self.ensure_unlocked()?;

        let record = self
            .records
            .get(index)
            .ok_or(EditorError::NoSuchRecord(index))?
            .clone();

        self.phase = EditorPhase::Editing {
            draft: D::from(record),
            error: None,
        };
        Ok(())
    }

    /// The open draft, for the form to mutate in place.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match &mut self.phase {
            EditorPhase::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Discards the draft unconditionally; no confirmation prompt.
    pub fn cancel(&mut self) {
        self.phase = EditorPhase::Viewing;
    }

    pub async fn submit(&mut self) -> Result<SubmitOutcome, EditorError> {
        let draft = match &self.phase {
            EditorPhase::Editing { draft, .. } => draft.clone(),
            _ => return Err(EditorError::NotEditing),
        };

        // The session can lapse between opening the draft and submitting
        let user = match self.session.state() {
            SessionState::Authenticated(user) => user,
            _ => return Err(EditorError::EditLocked),
        };

        self.phase = EditorPhase::Saving;

        match self.store.persist(draft.clone(), &user).await {
            Ok(_saved) => {
                self.toasts.success(format!("{} saved", self.label));
                // Re-fetch instead of trusting a local patch
                self.refresh().await;
                self.phase = EditorPhase::Viewing;
                Ok(SubmitOutcome::Saved)
            }
            Err(e) => {
                self.toasts
                    .danger(format!("Failed to save {}: {}", self.label, e.message));
                self.phase = EditorPhase::Editing {
                    draft,
                    error: Some(e.message),
                };
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    fn ensure_unlocked(&self) -> Result<(), EditorError> {
        if self.session.can_edit() {
            Ok(())
        } else {
            Err(EditorError::EditLocked)
        }
    }
}
