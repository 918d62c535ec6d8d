//! Application Context
//!
//! The client core and the UI store, provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use proje_core::{Client, ClientConfig, ReqwestTransport};

use crate::renderer::{StoreRenderer, ToastNotifier};
use crate::storage::BrowserStorage;
use crate::store::{store_close_modal, store_open_modal, ActiveModal, UiStore};

/// The client as wired up in the browser
pub type WebClient = Client<ReqwestTransport, BrowserStorage, StoreRenderer, ToastNotifier>;

/// Build-time override of the backend base URL
fn client_config() -> ClientConfig {
    match option_env!("PROJE_API_BASE_URL") {
        Some(url) => ClientConfig::default().with_base_url(url),
        None => ClientConfig::default(),
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Not `Send`: lives in local arena storage
    client: StoredValue<Rc<WebClient>, LocalStorage>,
    pub store: UiStore,
}

impl AppContext {
    pub fn new(store: UiStore) -> Self {
        let config = client_config();
        log::info!("Backend at {}", config.base_url);
        let client = Client::new(
            &config,
            ReqwestTransport::default(),
            BrowserStorage,
            StoreRenderer::new(store),
            ToastNotifier::new(store),
        );
        Self {
            client: StoredValue::new_local(Rc::new(client)),
            store,
        }
    }

    pub fn client(&self) -> Rc<WebClient> {
        self.client.get_value()
    }

    /// Run a client operation in the background
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<WebClient>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.client()));
    }

    pub fn open(&self, modal: ActiveModal) {
        store_open_modal(&self.store, modal);
    }

    pub fn close(&self) {
        store_close_modal(&self.store);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
