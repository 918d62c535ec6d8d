//! Store-backed Adapters
//!
//! `ViewRenderer` and `Notifier` implementations that write into the UI
//! store, so Leptos re-renders exactly the regions that changed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use proje_core::{
    CollectionView, MemberCard, Notification, Notifier, ProjectCard, Session, StatsView, TaskCard, ViewRenderer,
    ViewState,
};

use crate::store::{store_dismiss_toast, store_push_toast, UiStateStoreFields, UiStore};

/// How long a toast stays up
const TOAST_MS: u32 = 3_000;

#[derive(Clone, Copy)]
pub struct StoreRenderer {
    store: UiStore,
}

impl StoreRenderer {
    pub fn new(store: UiStore) -> Self {
        Self { store }
    }
}

impl ViewRenderer for StoreRenderer {
    fn render_status(&self, state: ViewState) {
        *self.store.view().write() = state;
    }

    fn render_session(&self, session: Option<&Session>) {
        *self.store.session().write() = session.cloned();
    }

    fn render_projects(&self, view: &CollectionView<ProjectCard>) {
        *self.store.projects().write() = view.clone();
    }

    fn render_tasks(&self, view: &CollectionView<TaskCard>) {
        *self.store.tasks().write() = view.clone();
    }

    fn render_team(&self, view: &CollectionView<MemberCard>) {
        *self.store.team().write() = view.clone();
    }

    fn render_stats(&self, stats: &StatsView) {
        *self.store.stats().write() = *stats;
    }
}

/// Shows notifications as self-dismissing toasts
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: UiStore,
}

impl ToastNotifier {
    pub fn new(store: UiStore) -> Self {
        Self { store }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        log::debug!("[TOAST] {:?}: {}", notification.kind, notification.message);
        let store = self.store;
        let id = store_push_toast(&store, notification);
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            store_dismiss_toast(&store, id);
        });
    }
}
