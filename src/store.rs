//! UI State Store
//!
//! What the page currently shows. The client core pushes finished
//! view-models in through `StoreRenderer`; components only read.

use leptos::prelude::*;
use proje_core::{
    CollectionView, MemberCard, MemberForm, NotificationKind, Notification, ProjectCard, ProjectForm, Session,
    StatsView, TaskCard, TaskFilter, TaskForm, ViewState,
};
use reactive_stores::Store;

/// One visible toast
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

/// Which dialog is open, with the form it was opened with
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    Login,
    Register,
    Profile,
    Project(ProjectForm),
    Task(TaskForm),
    Member(MemberForm),
}

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub view: ViewState,
    pub session: Option<Session>,
    pub projects: CollectionView<ProjectCard>,
    pub tasks: CollectionView<TaskCard>,
    pub team: CollectionView<MemberCard>,
    pub stats: StatsView,
    /// Mirrors the filter the client renders tasks with
    pub task_filter: TaskFilter,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    pub modal: Option<ActiveModal>,
}

pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a toast, returning its id for later dismissal
pub fn store_push_toast(store: &UiStore, notification: Notification) -> u32 {
    let id = {
        let field = store.next_toast_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        kind: notification.kind,
        message: notification.message,
    });
    id
}

pub fn store_dismiss_toast(store: &UiStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

pub fn store_open_modal(store: &UiStore, modal: ActiveModal) {
    *store.modal().write() = Some(modal);
}

pub fn store_close_modal(store: &UiStore) {
    *store.modal().write() = None;
}
