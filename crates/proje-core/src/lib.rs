//! Proje Client Core
//!
//! Data sync and rendering core of the Proje project board, independent
//! of any DOM. Layers, leaves first:
//! - http: JSON client over a pluggable transport
//! - session: durable storage of the logged-in user
//! - cache: wholesale-replaced collections with reload sequencing
//! - view: pure view-model builders and the renderer/notifier seams
//! - coordinator: the `Client` that sequences writes, reloads and renders

pub mod cache;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod forms;
pub mod http;
pub mod models;
pub mod session;
pub mod state;
pub mod view;

pub use cache::{EntityCache, ReloadOutcome, ReloadTicket};
pub use config::ClientConfig;
pub use coordinator::{Client, DeleteIntent};
pub use error::{ApiError, ApiResult, MutationError};
pub use forms::{EntityForm, MemberForm, PasswordForm, ProfileForm, ProjectForm, RegisterForm, TaskForm};
pub use http::{ApiClient, HttpRequest, HttpResponse, Method, ReqwestTransport, RequestOptions, Transport};
pub use models::{
    Entity, EntityKind, Member, Project, Session, Task, DEFAULT_PRIORITY_ID, DEFAULT_STATUS_ID, DONE_STATUS_ID,
    PRIORITY_OPTIONS, STATUS_OPTIONS,
};
pub use session::{MemoryStorage, SessionStorage, SessionStore};
pub use state::{AppState, Audience, LoadPhase, ViewState};
pub use view::{
    CollectionView, MemberCard, Notification, NotificationKind, Notifier, ProfileView, ProjectCard, StatsView,
    TaskCard, TaskFilter, ViewRenderer,
};
