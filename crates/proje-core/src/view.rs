//! View Renderer
//!
//! Pure functions from [`AppState`] to typed view-models, plus the traits
//! the outer UI implements to display them. Nothing here touches markup.

use chrono::NaiveDate;

use crate::models::{AssignedTask, MemberProject, ProfileSummary, Session, Task};
use crate::state::{AppState, ViewState};

// ========================
// Output Seams
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

/// Transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Display adapter. Receives finished view-models only.
pub trait ViewRenderer {
    fn render_status(&self, state: ViewState);
    fn render_session(&self, session: Option<&Session>);
    fn render_projects(&self, view: &CollectionView<ProjectCard>);
    fn render_tasks(&self, view: &CollectionView<TaskCard>);
    fn render_team(&self, view: &CollectionView<MemberCard>);
    fn render_stats(&self, stats: &StatsView);
}

// ========================
// View Models
// ========================

/// One rendered collection
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionView<T> {
    /// Guest placeholder: "log in to see ..."
    Locked,
    Empty,
    Items(Vec<T>),
}

impl<T> Default for CollectionView<T> {
    fn default() -> Self {
        CollectionView::Locked
    }
}

impl<T> CollectionView<T> {
    fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            CollectionView::Empty
        } else {
            CollectionView::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            CollectionView::Items(items) => items,
            _ => &[],
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, CollectionView::Locked)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: u32,
    pub name: String,
    pub start_label: String,
    pub end_label: Option<String>,
    pub budget_label: String,
    /// 0..=100
    pub progress: u8,
    pub manager_name: String,
    pub manager_initials: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskCard {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub due_label: String,
    pub project_name: String,
    pub status_label: String,
    pub status_class: &'static str,
    pub priority_label: String,
    pub priority_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberCard {
    pub id: u32,
    pub full_name: String,
    pub initials: String,
    pub role: String,
    pub email: String,
}

/// Headline counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsView {
    pub projects: usize,
    pub completed_tasks: usize,
    pub members: usize,
}

/// Profile page data; failed parts fall back to zeros and empty lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileView {
    pub summary: ProfileSummary,
    pub tasks: Vec<AssignedTask>,
    pub projects: Vec<MemberProject>,
}

impl ProfileView {
    /// Carry a saved profile edit into the header without refetching
    pub fn apply_session(&mut self, session: &Session) {
        self.summary.first_name = session.first_name.clone();
        self.summary.last_name = session.last_name.clone();
        self.summary.email = session.email.clone();
    }
}

/// Which tasks the task list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Status(u32),
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Status(id) => task.status_id == Some(id),
        }
    }
}

// ========================
// Builders
// ========================

pub fn projects_view(state: &AppState) -> CollectionView<ProjectCard> {
    if !state.is_authenticated() {
        return CollectionView::Locked;
    }
    let tasks = state.tasks().items();
    CollectionView::from_items(
        state
            .projects()
            .items()
            .iter()
            .map(|project| {
                let manager_name = project.manager_name();
                ProjectCard {
                    id: project.id,
                    name: project.name.clone(),
                    start_label: format_date(project.start_date.as_deref()),
                    end_label: project.end_date.as_deref().map(|d| format_date(Some(d))),
                    budget_label: project
                        .budget
                        .map(format_budget)
                        .unwrap_or_else(|| "Budget not set".to_string()),
                    progress: completion_percent(tasks, project.id),
                    manager_initials: initials(&manager_name),
                    manager_name,
                }
            })
            .collect(),
    )
}

pub fn tasks_view(state: &AppState, filter: TaskFilter) -> CollectionView<TaskCard> {
    if !state.is_authenticated() {
        return CollectionView::Locked;
    }
    CollectionView::from_items(
        state
            .tasks()
            .items()
            .iter()
            .filter(|task| filter.matches(task))
            .map(|task| TaskCard {
                id: task.id,
                name: task.name.clone(),
                description: task
                    .description
                    .clone()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or_else(|| "No description".to_string()),
                due_label: format_date(task.due_date.as_deref()),
                project_name: task.project_name.clone(),
                status_label: task.status_name.clone(),
                status_class: status_class(&task.status_name),
                priority_label: task.priority_name.clone(),
                priority_class: priority_class(&task.priority_name),
            })
            .collect(),
    )
}

pub fn team_view(state: &AppState) -> CollectionView<MemberCard> {
    if !state.is_authenticated() {
        return CollectionView::Locked;
    }
    CollectionView::from_items(
        state
            .members()
            .items()
            .iter()
            .map(|member| {
                let full_name = member.full_name();
                MemberCard {
                    id: member.id,
                    initials: initials(&full_name),
                    full_name,
                    role: member
                        .role
                        .clone()
                        .filter(|r| !r.trim().is_empty())
                        .unwrap_or_else(|| "Team member".to_string()),
                    email: member.email.clone(),
                }
            })
            .collect(),
    )
}

/// Zero for guests whatever the caches still hold
pub fn stats_view(state: &AppState) -> StatsView {
    if !state.is_authenticated() {
        return StatsView::default();
    }
    StatsView {
        projects: state.projects().len(),
        completed_tasks: state.tasks().items().iter().filter(|t| t.is_done()).count(),
        members: state.members().len(),
    }
}

/// `round(100 * done / total)` over the project's tasks; 0 without tasks
pub fn completion_percent(tasks: &[Task], project_id: u32) -> u8 {
    let (total, done) = tasks
        .iter()
        .filter(|task| task.project_id == Some(project_id))
        .fold((0usize, 0usize), |(total, done), task| {
            (total + 1, done + usize::from(task.is_done()))
        });

    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u8
}

// ========================
// Formatting Helpers
// ========================

/// "15 Jan 2024"; "-" when missing; raw text when not a date
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => "-".to_string(),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(|date| date.format("%-d %b %Y").to_string())
            .unwrap_or_else(|_| text.to_string()),
    }
}

/// Lira amount with thousands separators: `₺150,000.00`
pub fn format_budget(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}₺{}.{:02}", sign, grouped, fraction)
}

/// First letter of every word, upper-cased
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn priority_class(priority: &str) -> &'static str {
    match priority {
        "Yüksek" => "high",
        "Orta" => "medium",
        "Düşük" => "low",
        _ => "",
    }
}

pub fn status_class(status: &str) -> &'static str {
    match status {
        "Tamamlandı" => "completed",
        "Devam Ediyor" | "Test Ediliyor" => "in-progress",
        "Askıya Alındı" => "low",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, Project, DONE_STATUS_ID};

    fn task(id: u32, project_id: u32, status_id: u32) -> Task {
        Task {
            id,
            name: format!("Görev {}", id),
            description: None,
            due_date: Some("2024-06-30".to_string()),
            project_id: Some(project_id),
            project_name: "Web".to_string(),
            status_id: Some(status_id),
            status_name: if status_id == DONE_STATUS_ID { "Tamamlandı" } else { "Yeni" }.to_string(),
            priority_id: Some(2),
            priority_name: "Yüksek".to_string(),
        }
    }

    fn project(id: u32) -> Project {
        Project {
            id,
            name: format!("Proje {}", id),
            start_date: Some("2024-01-15".to_string()),
            end_date: None,
            budget: None,
            manager_id: Some(1),
            manager_first_name: "Ali".to_string(),
            manager_last_name: "Vural".to_string(),
        }
    }

    fn member(id: u32) -> Member {
        Member {
            id,
            first_name: "Selin".to_string(),
            last_name: "Koç".to_string(),
            email: "selin@example.com".to_string(),
            role: None,
        }
    }

    fn signed_in_state(projects: Vec<Project>, tasks: Vec<Task>, members: Vec<Member>) -> AppState {
        let mut state = AppState::new();
        state.sign_in(Session {
            user_id: 1,
            first_name: "Ali".to_string(),
            last_name: "Vural".to_string(),
            email: "ali@example.com".to_string(),
        });
        let t = state.projects.begin_reload();
        state.projects.finish_reload(t, Ok(projects));
        let t = state.tasks.begin_reload();
        state.tasks.finish_reload(t, Ok(tasks));
        let t = state.members.begin_reload();
        state.members.finish_reload(t, Ok(members));
        state
    }

    #[test]
    fn test_completion_zero_without_tasks() {
        assert_eq!(completion_percent(&[], 1), 0);
        assert_eq!(completion_percent(&[task(1, 2, DONE_STATUS_ID)], 1), 0);
    }

    #[test]
    fn test_completion_three_of_four() {
        let tasks = vec![
            task(1, 1, DONE_STATUS_ID),
            task(2, 1, DONE_STATUS_ID),
            task(3, 1, DONE_STATUS_ID),
            task(4, 1, 2),
            task(5, 2, 1),
        ];
        assert_eq!(completion_percent(&tasks, 1), 75);
        assert_eq!(completion_percent(&tasks, 2), 0);
    }

    #[test]
    fn test_completion_rounds_to_nearest() {
        let tasks = vec![task(1, 1, DONE_STATUS_ID), task(2, 1, 1), task(3, 1, 1)];
        assert_eq!(completion_percent(&tasks, 1), 33);
        let tasks = vec![task(1, 1, DONE_STATUS_ID), task(2, 1, DONE_STATUS_ID), task(3, 1, 1)];
        assert_eq!(completion_percent(&tasks, 1), 67);
    }

    #[test]
    fn test_guest_sees_locked_views_and_zero_stats() {
        let mut state = signed_in_state(vec![project(1)], vec![task(1, 1, DONE_STATUS_ID)], vec![member(1)]);
        state.session = None;

        assert!(projects_view(&state).is_locked());
        assert!(tasks_view(&state, TaskFilter::All).is_locked());
        assert!(team_view(&state).is_locked());
        assert_eq!(stats_view(&state), StatsView::default());
    }

    #[test]
    fn test_project_card_contents() {
        let state = signed_in_state(
            vec![project(1)],
            vec![task(1, 1, DONE_STATUS_ID), task(2, 1, 1)],
            Vec::new(),
        );
        let view = projects_view(&state);
        let card = &view.items()[0];
        assert_eq!(card.progress, 50);
        assert_eq!(card.start_label, "15 Jan 2024");
        assert_eq!(card.end_label, None);
        assert_eq!(card.budget_label, "Budget not set");
        assert_eq!(card.manager_initials, "AV");
    }

    #[test]
    fn test_task_filter_by_status() {
        let state = signed_in_state(
            Vec::new(),
            vec![task(1, 1, DONE_STATUS_ID), task(2, 1, 1), task(3, 1, 1)],
            Vec::new(),
        );
        assert_eq!(tasks_view(&state, TaskFilter::All).items().len(), 3);
        let done = tasks_view(&state, TaskFilter::Status(DONE_STATUS_ID));
        assert_eq!(done.items().len(), 1);
        assert_eq!(done.items()[0].status_class, "completed");
        assert_eq!(tasks_view(&state, TaskFilter::Status(5)), CollectionView::Empty);
    }

    #[test]
    fn test_task_card_fallbacks() {
        let state = signed_in_state(Vec::new(), vec![task(1, 1, 1)], Vec::new());
        let view = tasks_view(&state, TaskFilter::All);
        assert_eq!(view.items()[0].description, "No description");
        assert_eq!(view.items()[0].priority_class, "high");
    }

    #[test]
    fn test_team_default_role() {
        let state = signed_in_state(Vec::new(), Vec::new(), vec![member(4)]);
        let view = team_view(&state);
        assert_eq!(view.items()[0].role, "Team member");
        assert_eq!(view.items()[0].initials, "SK");
    }

    #[test]
    fn test_stats_count_done_tasks() {
        let state = signed_in_state(
            vec![project(1), project(2)],
            vec![task(1, 1, DONE_STATUS_ID), task(2, 2, 1)],
            vec![member(1)],
        );
        assert_eq!(
            stats_view(&state),
            StatsView {
                projects: 2,
                completed_tasks: 1,
                members: 1
            }
        );
    }

    #[test]
    fn test_empty_collection_is_not_locked() {
        let state = signed_in_state(Vec::new(), Vec::new(), Vec::new());
        assert_eq!(projects_view(&state), CollectionView::Empty);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("2024-02-05")), "5 Feb 2024");
        assert_eq!(format_date(Some("yakında")), "yakında");
        assert_eq!(format_budget(150000.0), "₺150,000.00");
        assert_eq!(format_budget(999.5), "₺999.50");
        assert_eq!(format_budget(1234567.891), "₺1,234,567.89");
        assert_eq!(initials("mehmet can demir"), "MCD");
    }
}
