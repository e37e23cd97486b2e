use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::PartName;
use services::{QuestionService, UserSession};

pub trait UiApp: Send + Sync {
    fn question_service(&self) -> Arc<QuestionService>;
    fn user_session(&self) -> Arc<UserSession>;
    fn parts(&self) -> Vec<PartName>;
    fn fade_duration(&self) -> Duration;
}

#[derive(Clone)]
pub struct AppContext {
    question_service: Arc<QuestionService>,
    user_session: Arc<UserSession>,
    parts: Arc<[PartName]>,
    fade_duration: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_service: app.question_service(),
            user_session: app.user_session(),
            parts: app.parts().into(),
            fade_duration: app.fade_duration(),
        }
    }

    #[must_use]
    pub fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    /// The one session shared by every screen.
    #[must_use]
    pub fn user_session(&self) -> Arc<UserSession> {
        Arc::clone(&self.user_session)
    }

    #[must_use]
    pub fn parts(&self) -> &[PartName] {
        &self.parts
    }

    #[must_use]
    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
