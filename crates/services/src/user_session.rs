use std::sync::{Mutex, MutexGuard, PoisonError};

use quiz_core::Clock;
use quiz_core::model::{CommittedSelections, OptionId, PartName};
use secrecy::SecretString;

use crate::error::SessionStoreError;

/// Who is taking the quiz.
#[derive(Clone, Debug)]
pub struct SessionIdentity {
    pub display_name: String,
    pub auth_token: Option<SecretString>,
}

impl SessionIdentity {
    #[must_use]
    pub fn new(display_name: impl Into<String>, auth_token: Option<SecretString>) -> Self {
        Self {
            display_name: display_name.into(),
            auth_token,
        }
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.auth_token.is_some()
    }
}

#[derive(Debug, Default)]
struct SessionState {
    part: Option<PartName>,
    committed: Option<CommittedSelections>,
}

/// Session-wide state shared by every screen.
///
/// The final selections are written once; the results screen reads them back.
#[derive(Debug)]
pub struct UserSession {
    identity: SessionIdentity,
    clock: Clock,
    state: Mutex<SessionState>,
}

impl UserSession {
    #[must_use]
    pub fn new(identity: SessionIdentity, clock: Clock) -> Self {
        Self {
            identity,
            clock,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn select_part(&self, part: PartName) {
        tracing::debug!(part = %part, "part selected");
        self.state().part = Some(part);
    }

    #[must_use]
    pub fn selected_part(&self) -> Option<PartName> {
        self.state().part.clone()
    }

    /// Store the final answers. Only the first commit of a session is accepted.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError::EmptySelections` for an empty list and
    /// `SessionStoreError::AlreadyCommitted` when a result is already stored.
    pub fn commit_selections(
        &self,
        option_ids: Vec<OptionId>,
    ) -> Result<CommittedSelections, SessionStoreError> {
        if option_ids.is_empty() {
            return Err(SessionStoreError::EmptySelections);
        }

        let mut state = self.state();
        if state.committed.is_some() {
            return Err(SessionStoreError::AlreadyCommitted);
        }

        let committed = CommittedSelections::new(state.part.clone(), option_ids, self.clock.now());
        state.committed = Some(committed.clone());

        let part = committed
            .part()
            .map_or_else(|| "no part selected".to_string(), ToString::to_string);
        tracing::info!(
            display_name = %self.identity.display_name,
            has_token = self.identity.has_token(),
            selections = ?committed.option_ids(),
            part = %part,
            "quiz completed"
        );

        Ok(committed)
    }

    #[must_use]
    pub fn committed(&self) -> Option<CommittedSelections> {
        self.state().committed.clone()
    }

    /// Forget the part and the stored answers so the quiz can be taken again.
    pub fn reset(&self) {
        let mut state = self.state();
        state.part = None;
        state.committed = None;
    }
}

#[cfg(test)]
mod tests {
    use quiz_core::time::{fixed_clock, fixed_now};

    use super::*;

    fn session() -> UserSession {
        UserSession::new(
            SessionIdentity::new("Ada", Some(SecretString::from("secret-token"))),
            fixed_clock(),
        )
    }

    fn ids(raw: &[u64]) -> Vec<OptionId> {
        raw.iter().copied().map(OptionId::new).collect()
    }

    #[test]
    fn commit_is_write_once() {
        let session = session();
        let first = session.commit_selections(ids(&[1, 0, 1, 0])).unwrap();
        assert_eq!(first.option_ids(), ids(&[1, 0, 1, 0]).as_slice());
        assert_eq!(first.committed_at(), fixed_now());

        let second = session.commit_selections(ids(&[0, 0, 0, 0]));
        assert_eq!(second, Err(SessionStoreError::AlreadyCommitted));
        assert_eq!(session.committed(), Some(first));
    }

    #[test]
    fn empty_commit_is_rejected() {
        let session = session();
        assert_eq!(
            session.commit_selections(Vec::new()),
            Err(SessionStoreError::EmptySelections)
        );
        assert!(session.committed().is_none());
    }

    #[test]
    fn commit_captures_selected_part() {
        let session = session();
        session.select_part(PartName::new("Backend").unwrap());
        let committed = session.commit_selections(ids(&[1])).unwrap();
        assert_eq!(committed.part().map(PartName::as_str), Some("Backend"));
    }

    #[test]
    fn reset_allows_a_new_commit() {
        let session = session();
        session.select_part(PartName::new("Design").unwrap());
        session.commit_selections(ids(&[1, 1, 1, 1])).unwrap();

        session.reset();
        assert!(session.selected_part().is_none());
        assert!(session.committed().is_none());
        assert!(session.commit_selections(ids(&[0, 1, 0, 1])).is_ok());
    }

    #[test]
    fn identity_is_readable() {
        let session = session();
        assert_eq!(session.identity().display_name, "Ada");
        assert!(session.identity().has_token());
    }
}
