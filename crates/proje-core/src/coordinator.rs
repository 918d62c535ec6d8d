//! Mutation Coordinator
//!
//! `Client` owns the application state and is the only thing that writes
//! to it. Every write follows the same sequence: call the backend, reload
//! the owning collection on success, re-render it, then notify. Failures
//! are notified and returned so forms can stay open for a retry.

use std::cell::{Ref, RefCell};

use crate::cache::{EntityCache, ReloadOutcome};
use crate::config::ClientConfig;
use crate::error::MutationError;
use crate::forms::{
    EntityForm, LoginPayload, MemberForm, PasswordForm, ProfileForm, ProjectForm, RegisterForm, TaskForm,
};
use crate::http::{ApiClient, Transport};
use crate::models::{
    AssignedTask, Entity, EntityKind, LoginResponse, MemberProject, MessageResponse, ProfileSummary, Session,
};
use crate::session::{SessionStorage, SessionStore};
use crate::state::{AppState, LoadPhase, ViewState};
use crate::view::{self, Notification, Notifier, ProfileView, TaskFilter, ViewRenderer};

/// First half of a two-phase delete.
///
/// Only [`Client::request_delete`] can create one; the UI shows
/// [`DeleteIntent::prompt`] and hands the intent back to
/// [`Client::confirm_delete`] once the user agrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIntent {
    kind: EntityKind,
    id: u32,
    name: Option<String>,
}

impl DeleteIntent {
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn prompt(&self) -> String {
        let noun = self.kind.label().to_lowercase();
        match &self.name {
            Some(name) => format!("Are you sure you want to delete the {} \"{}\"?", noun, name),
            None => format!("Are you sure you want to delete this {}?", noun),
        }
    }
}

pub struct Client<T, S, R, N> {
    api: ApiClient<T>,
    sessions: SessionStore<S>,
    state: RefCell<AppState>,
    renderer: R,
    notifier: N,
}

impl<T, S, R, N> Client<T, S, R, N>
where
    T: Transport,
    S: SessionStorage,
    R: ViewRenderer,
    N: Notifier,
{
    pub fn new(config: &ClientConfig, transport: T, storage: S, renderer: R, notifier: N) -> Self {
        Self {
            api: ApiClient::new(transport, config),
            sessions: SessionStore::new(storage, config.session_key.clone()),
            state: RefCell::new(AppState::new()),
            renderer,
            notifier,
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Read-only view of the state. Do not hold across an `.await`.
    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.borrow().session().cloned()
    }

    // ========================
    // Startup & Reloads
    // ========================

    /// Page load: restore the stored session, then either show the guest
    /// placeholders or load all three collections.
    pub async fn start(&self) -> ViewState {
        match self.sessions.load() {
            Some(session) => {
                log::info!("Restored session for user {}", session.user_id);
                self.state.borrow_mut().sign_in(session);
                self.load_all().await
            }
            None => {
                self.state.borrow_mut().sign_out();
                self.render_all();
                log::info!("Guest view loaded");
                ViewState::GUEST
            }
        }
    }

    /// Reload projects, tasks and team concurrently and render once all
    /// three have settled. One failing collection never blocks the others.
    pub async fn load_all(&self) -> ViewState {
        self.state.borrow_mut().view = ViewState::LOADING;
        self.renderer.render_status(ViewState::LOADING);

        let (projects, tasks, members) = futures::join!(
            self.reload(EntityKind::Project),
            self.reload(EntityKind::Task),
            self.reload(EntityKind::Member),
        );

        let view = self.state.borrow_mut().settle(&[projects, tasks, members]);
        if view.phase == LoadPhase::Error {
            self.notifier.notify(Notification::error("An error occurred while loading data"));
        } else {
            log::info!("Board loaded: {:?} / {:?} / {:?}", projects, tasks, members);
        }
        self.render_all();
        view
    }

    /// Replace one collection with a fresh listing from the backend
    pub async fn reload(&self, kind: EntityKind) -> ReloadOutcome {
        match kind {
            EntityKind::Project => self.reload_cache(AppState::projects_mut).await,
            EntityKind::Task => self.reload_cache(AppState::tasks_mut).await,
            EntityKind::Member => self.reload_cache(AppState::members_mut).await,
        }
    }

    async fn reload_cache<E: Entity>(&self, cache_of: fn(&mut AppState) -> &mut EntityCache<E>) -> ReloadOutcome {
        let (endpoint, ticket) = {
            let mut state = self.state.borrow_mut();
            let endpoint = E::KIND.listing_endpoint(state.session());
            let cache = cache_of(&mut *state);
            match endpoint {
                Some(endpoint) => (endpoint, cache.begin_reload()),
                None => return cache.skip_reload(),
            }
        };

        let result = self.api.get::<Vec<E>>(&endpoint).await;

        let mut state = self.state.borrow_mut();
        cache_of(&mut *state).finish_reload(ticket, result)
    }

    // ========================
    // Rendering
    // ========================

    fn render_all(&self) {
        let (status, session) = {
            let state = self.state.borrow();
            (state.view(), state.session().cloned())
        };
        self.renderer.render_status(status);
        self.renderer.render_session(session.as_ref());
        for kind in EntityKind::ALL {
            self.render(kind);
        }
    }

    /// Re-render one collection plus everything derived from it
    fn render(&self, kind: EntityKind) {
        let state = self.state.borrow();
        match kind {
            EntityKind::Project => self.renderer.render_projects(&view::projects_view(&state)),
            EntityKind::Task => {
                self.renderer.render_tasks(&view::tasks_view(&state, state.task_filter()));
                // progress bars depend on tasks
                self.renderer.render_projects(&view::projects_view(&state));
            }
            EntityKind::Member => self.renderer.render_team(&view::team_view(&state)),
        }
        self.renderer.render_stats(&view::stats_view(&state));
    }

    pub fn set_task_filter(&self, filter: TaskFilter) {
        self.state.borrow_mut().task_filter = filter;
        let state = self.state.borrow();
        self.renderer.render_tasks(&view::tasks_view(&state, filter));
    }

    // ========================
    // Entity Mutations
    // ========================

    fn require_session(&self) -> Result<Session, MutationError> {
        self.session().ok_or(MutationError::NotAuthenticated)
    }

    fn fail(&self, err: MutationError) -> MutationError {
        log::warn!("Mutation failed: {}", err);
        self.notifier.notify(Notification::error(err.to_string()));
        err
    }

    /// Reload, re-render, notify. Runs only after the backend accepted
    /// the write; the cache is never patched locally.
    async fn complete(&self, kind: EntityKind, message: String) {
        self.reload(kind).await;
        self.render(kind);
        self.notifier.notify(Notification::success(message));
    }

    /// Create (POST) or update (PUT) from a submitted form
    pub async fn save<F: EntityForm>(&self, form: &F) -> Result<(), MutationError> {
        let editing = form.editing_id();
        match self.send_form(form).await {
            Ok(()) => {
                let verb = if editing.is_some() { "updated" } else { "created" };
                self.complete(F::KIND, format!("{} {}!", F::KIND.label(), verb)).await;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    async fn send_form<F: EntityForm>(&self, form: &F) -> Result<(), MutationError> {
        self.require_session()?;
        let payload = form.normalize()?;
        match form.editing_id() {
            Some(id) => {
                self.api
                    .put::<_, MessageResponse>(&F::KIND.item_endpoint(id), &payload)
                    .await?
            }
            None => {
                self.api
                    .post::<_, MessageResponse>(F::KIND.collection_path(), &payload)
                    .await?
            }
        };
        Ok(())
    }

    pub async fn save_project(&self, form: &ProjectForm) -> Result<(), MutationError> {
        self.save(form).await
    }

    pub async fn save_task(&self, form: &TaskForm) -> Result<(), MutationError> {
        self.save(form).await
    }

    pub async fn save_member(&self, form: &MemberForm) -> Result<(), MutationError> {
        self.save(form).await
    }

    /// Phase one of a delete: no request is made
    pub fn request_delete(&self, kind: EntityKind, id: u32) -> Result<DeleteIntent, MutationError> {
        if let Err(err) = self.require_session() {
            return Err(self.fail(err));
        }
        let state = self.state.borrow();
        let name = match kind {
            EntityKind::Project => state.projects().find(id).map(Entity::display_name),
            EntityKind::Task => state.tasks().find(id).map(Entity::display_name),
            EntityKind::Member => state.members().find(id).map(Entity::display_name),
        };
        Ok(DeleteIntent { kind, id, name })
    }

    /// Phase two: the user confirmed, issue the DELETE
    pub async fn confirm_delete(&self, intent: DeleteIntent) -> Result<(), MutationError> {
        let result = match self.require_session() {
            Ok(_) => self
                .api
                .delete::<MessageResponse>(&intent.kind.item_endpoint(intent.id))
                .await
                .map(|_| ())
                .map_err(MutationError::from),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                self.complete(intent.kind, format!("{} deleted!", intent.kind.label())).await;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    // ========================
    // Account
    // ========================

    /// Exchange credentials for a session, persist it, load the board
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, MutationError> {
        let payload = LoginPayload {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = match self.api.post::<_, LoginResponse>("/login", &payload).await {
            Ok(response) => response,
            Err(err) => return Err(self.fail(err.into())),
        };

        let session = response.user;
        self.sessions.save(Some(&session));
        self.state.borrow_mut().sign_in(session.clone());
        self.renderer.render_session(Some(&session));
        self.notifier.notify(Notification::success("Login successful!"));
        self.load_all().await;
        Ok(session)
    }

    pub fn logout(&self) {
        self.sessions.save(None);
        self.state.borrow_mut().sign_out();
        self.render_all();
        self.notifier.notify(Notification::success("Logged out successfully"));
    }

    /// Create an account. The user still has to log in afterwards.
    pub async fn register(&self, form: &RegisterForm) -> Result<(), MutationError> {
        let result = match form.normalize() {
            Ok(payload) => self
                .api
                .post::<_, MessageResponse>("/register", &payload)
                .await
                .map_err(MutationError::from),
            Err(err) => Err(err),
        };

        match result {
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Registration successful! You can log in now.".to_string());
                self.notifier.notify(Notification::success(message));
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Profile counters and the user's own tasks and projects.
    ///
    /// The three requests run concurrently; whatever fails shows as zero
    /// or empty and a single warning is raised.
    pub async fn load_profile(&self) -> Result<ProfileView, MutationError> {
        let session = match self.require_session() {
            Ok(session) => session,
            Err(err) => return Err(self.fail(err)),
        };
        let id = session.user_id;
        let summary_path = format!("/profil/{}", id);
        let tasks_path = format!("/profil/{}/gorevler", id);
        let projects_path = format!("/profil/{}/projeler", id);

        let (summary, tasks, projects) = futures::join!(
            self.api.get::<ProfileSummary>(&summary_path),
            self.api.get::<Vec<AssignedTask>>(&tasks_path),
            self.api.get::<Vec<MemberProject>>(&projects_path),
        );

        let degraded = summary.is_err() || tasks.is_err() || projects.is_err();
        let view = ProfileView {
            summary: summary.unwrap_or_else(|_| ProfileSummary {
                user_id: session.user_id,
                first_name: session.first_name.clone(),
                last_name: session.last_name.clone(),
                email: session.email.clone(),
                project_count: 0,
                task_count: 0,
            }),
            tasks: tasks.unwrap_or_default(),
            projects: projects.unwrap_or_default(),
        };

        if degraded {
            self.notifier.notify(Notification::warning("Some profile data could not be loaded"));
        }
        Ok(view)
    }

    /// Update name/email, then refresh the stored session to match
    pub async fn update_profile(&self, form: &ProfileForm) -> Result<Session, MutationError> {
        let result = self.send_profile(form).await;
        match result {
            Ok(session) => {
                self.sessions.save(Some(&session));
                self.state.borrow_mut().session = Some(session.clone());
                self.renderer.render_session(Some(&session));
                self.notifier.notify(Notification::success("Your profile has been updated!"));
                Ok(session)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    async fn send_profile(&self, form: &ProfileForm) -> Result<Session, MutationError> {
        let current = self.require_session()?;
        let payload = form.normalize()?;
        self.api
            .put::<_, MessageResponse>(&format!("/profil/{}", current.user_id), &payload)
            .await?;
        Ok(Session {
            user_id: current.user_id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
        })
    }

    pub async fn change_password(&self, form: &PasswordForm) -> Result<(), MutationError> {
        match self.send_password(form).await {
            Ok(()) => {
                self.notifier.notify(Notification::success("Your password has been changed!"));
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    async fn send_password(&self, form: &PasswordForm) -> Result<(), MutationError> {
        let current = self.require_session()?;
        let payload = form.normalize()?;
        self.api
            .put::<_, MessageResponse>(&format!("/profil/{}/sifre", current.user_id), &payload)
            .await?;
        Ok(())
    }
}
