//! UI Components
//!
//! Leptos components for the board, its dialogs and notifications.

mod account_forms;
mod delete_confirm_button;
mod entity_editors;
mod form_field;
mod locked_placeholder;
mod modal_host;
mod nav_bar;
mod profile_panel;
mod project_list;
mod stats_bar;
mod task_list;
mod team_list;
mod toasts;

pub use account_forms::{LoginDialog, RegisterDialog};
pub use delete_confirm_button::DeleteConfirmButton;
pub use entity_editors::{MemberEditor, ProjectEditor, TaskEditor};
pub use locked_placeholder::LockedPlaceholder;
pub use modal_host::ModalHost;
pub use nav_bar::NavBar;
pub use profile_panel::ProfilePanel;
pub use project_list::ProjectList;
pub use stats_bar::StatsBar;
pub use task_list::TaskList;
pub use team_list::TeamList;
pub use toasts::Toasts;
