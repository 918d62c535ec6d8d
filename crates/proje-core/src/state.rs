//! Application State
//!
//! Session, caches and the top-level view state in one explicit object.
//! Only the reload and mutation paths of the client write to it.

use crate::cache::{EntityCache, ReloadOutcome};
use crate::models::{Member, Project, Session, Task};
use crate::view::TaskFilter;

/// Who is looking at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Guest,
    Authenticated,
}

/// Where the initial load stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Error,
}

/// Top-level view: {Guest, Authenticated} × {Loading, Ready, Error}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub audience: Audience,
    pub phase: LoadPhase,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::GUEST
    }
}

impl ViewState {
    /// Guests stay here until a login succeeds
    pub const GUEST: ViewState = ViewState {
        audience: Audience::Guest,
        phase: LoadPhase::Ready,
    };

    pub const LOADING: ViewState = ViewState {
        audience: Audience::Authenticated,
        phase: LoadPhase::Loading,
    };

    /// Result of the parallel reload. Only a total failure is an error;
    /// any collection that loaded keeps the board usable.
    pub fn settled(outcomes: &[ReloadOutcome]) -> ViewState {
        let all_failed = !outcomes.is_empty() && outcomes.iter().all(|o| o.is_failure());
        ViewState {
            audience: Audience::Authenticated,
            phase: if all_failed { LoadPhase::Error } else { LoadPhase::Ready },
        }
    }

    pub fn is_guest(self) -> bool {
        self.audience == Audience::Guest
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) session: Option<Session>,
    pub(crate) projects: EntityCache<Project>,
    pub(crate) tasks: EntityCache<Task>,
    pub(crate) members: EntityCache<Member>,
    pub(crate) view: ViewState,
    pub(crate) task_filter: TaskFilter,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn projects(&self) -> &EntityCache<Project> {
        &self.projects
    }

    pub fn tasks(&self) -> &EntityCache<Task> {
        &self.tasks
    }

    pub fn members(&self) -> &EntityCache<Member> {
        &self.members
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn task_filter(&self) -> TaskFilter {
        self.task_filter
    }

    pub(crate) fn projects_mut(&mut self) -> &mut EntityCache<Project> {
        &mut self.projects
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut EntityCache<Task> {
        &mut self.tasks
    }

    pub(crate) fn members_mut(&mut self) -> &mut EntityCache<Member> {
        &mut self.members
    }

    /// Adopt a restored or freshly logged-in session
    pub(crate) fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.view = ViewState::LOADING;
    }

    /// Back to guest: caches are emptied, filters reset
    pub(crate) fn sign_out(&mut self) {
        self.session = None;
        self.projects.clear();
        self.tasks.clear();
        self.members.clear();
        self.task_filter = TaskFilter::All;
        self.view = ViewState::GUEST;
    }

    pub(crate) fn settle(&mut self, outcomes: &[ReloadOutcome]) -> ViewState {
        self.view = if self.session.is_some() {
            ViewState::settled(outcomes)
        } else {
            ViewState::GUEST
        };
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: 1,
            first_name: "Elif".to_string(),
            last_name: "Şahin".to_string(),
            email: "elif@example.com".to_string(),
        }
    }

    #[test]
    fn test_starts_as_guest() {
        let state = AppState::new();
        assert_eq!(state.view(), ViewState::GUEST);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_sign_in_moves_to_loading() {
        let mut state = AppState::new();
        state.sign_in(session());
        assert_eq!(state.view(), ViewState::LOADING);
    }

    #[test]
    fn test_partial_failure_is_still_ready() {
        let outcomes = [ReloadOutcome::Failed, ReloadOutcome::Applied(2), ReloadOutcome::Failed];
        assert_eq!(ViewState::settled(&outcomes).phase, LoadPhase::Ready);
    }

    #[test]
    fn test_total_failure_is_error() {
        let outcomes = [ReloadOutcome::Failed; 3];
        assert_eq!(ViewState::settled(&outcomes).phase, LoadPhase::Error);
    }

    #[test]
    fn test_settle_without_session_stays_guest() {
        let mut state = AppState::new();
        assert_eq!(state.settle(&[ReloadOutcome::Skipped; 3]), ViewState::GUEST);
    }

    #[test]
    fn test_sign_out_empties_caches() {
        let mut state = AppState::new();
        state.sign_in(session());
        let ticket = state.projects.begin_reload();
        state.projects.finish_reload(ticket, Ok(Vec::new()));
        state.task_filter = TaskFilter::Status(2);

        state.sign_out();

        assert!(state.session().is_none());
        assert!(state.projects().is_empty());
        assert_eq!(state.task_filter(), TaskFilter::All);
        assert_eq!(state.view(), ViewState::GUEST);
    }
}
