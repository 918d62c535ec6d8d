//! Form Input and Payloads
//!
//! Forms hold exactly what the user typed. `normalize` turns them into the
//! JSON payloads the backend expects: blank or unparsable optional fields
//! become explicit `null`, never empty strings.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::MutationError;
use crate::models::{EntityKind, Member, Project, Session, Task};

/// Shortest password the client accepts
pub const MIN_PASSWORD_LEN: usize = 6;

/// A create/edit form for one of the cached collections
pub trait EntityForm {
    type Payload: Serialize;
    const KIND: EntityKind;

    /// Persisted identifier when editing, `None` when creating
    fn editing_id(&self) -> Option<u32>;

    fn normalize(&self) -> Result<Self::Payload, MutationError>;
}

// ========================
// Field Helpers
// ========================

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required_text(raw: &str, field: &str) -> Result<String, MutationError> {
    optional_text(raw).ok_or_else(|| MutationError::Invalid(format!("{} is required", field)))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD`, or `None` for blank/invalid input
fn optional_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|date| date.format("%Y-%m-%d").to_string())
}

fn required_date(raw: &str, field: &str) -> Result<String, MutationError> {
    optional_date(raw).ok_or_else(|| MutationError::Invalid(format!("{} must be a valid date", field)))
}

fn optional_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn optional_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn check_new_password(password: &str, confirmation: &str) -> Result<(), MutationError> {
    if password != confirmation {
        return Err(MutationError::Invalid("Passwords do not match!".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(MutationError::Invalid(format!(
            "Password must be at least {} characters!",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

fn id_text(id: Option<u32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

// ========================
// Project
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub id: Option<u32>,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: String,
    pub manager_id: String,
}

impl ProjectForm {
    /// Pre-filled form for editing an existing project
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            name: project.name.clone(),
            start_date: project.start_date.clone().unwrap_or_default(),
            end_date: project.end_date.clone().unwrap_or_default(),
            budget: project.budget.map(|b| b.to_string()).unwrap_or_default(),
            manager_id: id_text(project.manager_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    #[serde(rename = "ProjeAdi")]
    pub name: String,
    #[serde(rename = "BaslangicTarihi")]
    pub start_date: String,
    #[serde(rename = "BitisTarihi")]
    pub end_date: Option<String>,
    #[serde(rename = "Butce")]
    pub budget: Option<f64>,
    #[serde(rename = "YoneticiID")]
    pub manager_id: Option<u32>,
}

impl EntityForm for ProjectForm {
    type Payload = ProjectPayload;
    const KIND: EntityKind = EntityKind::Project;

    fn editing_id(&self) -> Option<u32> {
        self.id
    }

    fn normalize(&self) -> Result<ProjectPayload, MutationError> {
        let start_date = required_date(&self.start_date, "Start date")?;
        let end_date = optional_date(&self.end_date);
        if let Some(end) = &end_date {
            if end < &start_date {
                return Err(MutationError::Invalid("End date cannot be before start date".to_string()));
            }
        }

        Ok(ProjectPayload {
            name: required_text(&self.name, "Project name")?,
            start_date,
            end_date,
            budget: optional_number(&self.budget),
            manager_id: optional_id(&self.manager_id),
        })
    }
}

// ========================
// Task
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub id: Option<u32>,
    pub name: String,
    pub description: String,
    pub due_date: String,
    pub project_id: String,
    pub status_id: String,
    pub priority_id: String,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            name: task.name.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task.due_date.clone().unwrap_or_default(),
            project_id: id_text(task.project_id),
            status_id: id_text(task.status_id),
            priority_id: id_text(task.priority_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPayload {
    #[serde(rename = "GorevAdi")]
    pub name: String,
    #[serde(rename = "Aciklama")]
    pub description: Option<String>,
    #[serde(rename = "TeslimTarihi")]
    pub due_date: String,
    #[serde(rename = "ProjeID")]
    pub project_id: u32,
    #[serde(rename = "DurumID")]
    pub status_id: Option<u32>,
    #[serde(rename = "OncelikID")]
    pub priority_id: Option<u32>,
}

impl EntityForm for TaskForm {
    type Payload = TaskPayload;
    const KIND: EntityKind = EntityKind::Task;

    fn editing_id(&self) -> Option<u32> {
        self.id
    }

    fn normalize(&self) -> Result<TaskPayload, MutationError> {
        Ok(TaskPayload {
            name: required_text(&self.name, "Task name")?,
            description: optional_text(&self.description),
            due_date: required_date(&self.due_date, "Due date")?,
            project_id: optional_id(&self.project_id)
                .ok_or_else(|| MutationError::Invalid("Select a project for the task".to_string()))?,
            status_id: optional_id(&self.status_id),
            priority_id: optional_id(&self.priority_id),
        })
    }
}

// ========================
// Team Member
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    pub id: Option<u32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Only sent when creating
    pub password: String,
}

impl MemberForm {
    pub fn from_member(member: &Member) -> Self {
        Self {
            id: Some(member.id),
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            email: member.email.clone(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberPayload {
    #[serde(rename = "Ad")]
    pub first_name: String,
    #[serde(rename = "Soyad")]
    pub last_name: String,
    #[serde(rename = "Eposta")]
    pub email: String,
    #[serde(rename = "SifreHash", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl EntityForm for MemberForm {
    type Payload = MemberPayload;
    const KIND: EntityKind = EntityKind::Member;

    fn editing_id(&self) -> Option<u32> {
        self.id
    }

    fn normalize(&self) -> Result<MemberPayload, MutationError> {
        let password = match self.id {
            Some(_) => None,
            None => {
                if self.password.chars().count() < MIN_PASSWORD_LEN {
                    return Err(MutationError::Invalid(format!(
                        "Password must be at least {} characters!",
                        MIN_PASSWORD_LEN
                    )));
                }
                Some(self.password.clone())
            }
        };

        Ok(MemberPayload {
            first_name: required_text(&self.first_name, "First name")?,
            last_name: required_text(&self.last_name, "Last name")?,
            email: required_text(&self.email, "Email")?,
            password,
        })
    }
}

// ========================
// Account Forms
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    #[serde(rename = "Ad")]
    pub first_name: String,
    #[serde(rename = "Soyad")]
    pub last_name: String,
    #[serde(rename = "Eposta")]
    pub email: String,
    #[serde(rename = "Sifre")]
    pub password: String,
}

impl RegisterForm {
    pub fn normalize(&self) -> Result<RegisterPayload, MutationError> {
        check_new_password(&self.password, &self.password_confirm)?;
        Ok(RegisterPayload {
            first_name: required_text(&self.first_name, "First name")?,
            last_name: required_text(&self.last_name, "Last name")?,
            email: required_text(&self.email, "Email")?,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_session(session: &Session) -> Self {
        Self {
            first_name: session.first_name.clone(),
            last_name: session.last_name.clone(),
            email: session.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePayload {
    #[serde(rename = "Ad")]
    pub first_name: String,
    #[serde(rename = "Soyad")]
    pub last_name: String,
    #[serde(rename = "Eposta")]
    pub email: String,
}

impl ProfileForm {
    pub fn normalize(&self) -> Result<ProfilePayload, MutationError> {
        Ok(ProfilePayload {
            first_name: required_text(&self.first_name, "First name")?,
            last_name: required_text(&self.last_name, "Last name")?,
            email: required_text(&self.email, "Email")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordPayload {
    #[serde(rename = "EskiSifre")]
    pub old_password: String,
    #[serde(rename = "YeniSifre")]
    pub new_password: String,
}

impl PasswordForm {
    pub fn normalize(&self) -> Result<PasswordPayload, MutationError> {
        check_new_password(&self.new_password, &self.confirm_password)?;
        Ok(PasswordPayload {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project_form() -> ProjectForm {
        ProjectForm {
            id: None,
            name: "Mobil Uygulama".to_string(),
            start_date: "2024-03-01".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_optional_project_fields_become_null() {
        let payload = project_form().normalize().unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "ProjeAdi": "Mobil Uygulama",
                "BaslangicTarihi": "2024-03-01",
                "BitisTarihi": null,
                "Butce": null,
                "YoneticiID": null
            })
        );
    }

    #[test]
    fn test_unparsable_budget_becomes_null() {
        let form = ProjectForm {
            budget: "çok".to_string(),
            manager_id: "2".to_string(),
            ..project_form()
        };
        let payload = form.normalize().unwrap();
        assert_eq!(payload.budget, None);
        assert_eq!(payload.manager_id, Some(2));
    }

    #[test]
    fn test_project_requires_name_and_start_date() {
        let nameless = ProjectForm {
            name: "  ".to_string(),
            ..project_form()
        };
        assert!(matches!(nameless.normalize(), Err(MutationError::Invalid(_))));

        let undated = ProjectForm {
            start_date: String::new(),
            ..project_form()
        };
        assert!(matches!(undated.normalize(), Err(MutationError::Invalid(_))));
    }

    #[test]
    fn test_end_date_before_start_is_rejected() {
        let form = ProjectForm {
            end_date: "2024-02-01".to_string(),
            ..project_form()
        };
        assert!(form.normalize().is_err());
    }

    #[test]
    fn test_task_payload_nulls_and_required_project() {
        let form = TaskForm {
            name: "API dokümanı".to_string(),
            due_date: "2024-04-10".to_string(),
            project_id: "3".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(form.normalize().unwrap()).unwrap();
        assert_eq!(value["Aciklama"], serde_json::Value::Null);
        assert_eq!(value["DurumID"], serde_json::Value::Null);
        assert_eq!(value["ProjeID"], 3);

        let orphan = TaskForm {
            project_id: String::new(),
            ..form
        };
        assert!(orphan.normalize().is_err());
    }

    #[test]
    fn test_edit_form_round_trips_existing_task() {
        let task = Task {
            id: 9,
            name: "Test".to_string(),
            description: None,
            due_date: Some("2024-05-05".to_string()),
            project_id: Some(1),
            project_name: "Web".to_string(),
            status_id: Some(2),
            status_name: "Devam Ediyor".to_string(),
            priority_id: Some(3),
            priority_name: "Orta".to_string(),
        };
        let form = TaskForm::from_task(&task);
        assert_eq!(form.editing_id(), Some(9));
        let payload = form.normalize().unwrap();
        assert_eq!(payload.status_id, Some(2));
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_member_password_only_sent_on_create() {
        let create = MemberForm {
            first_name: "Deniz".to_string(),
            last_name: "Aksoy".to_string(),
            email: "deniz@example.com".to_string(),
            password: "gizli123".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(create.normalize().unwrap()).unwrap();
        assert_eq!(value["SifreHash"], "gizli123");

        let edit = MemberForm {
            id: Some(4),
            password: String::new(),
            ..create
        };
        let value = serde_json::to_value(edit.normalize().unwrap()).unwrap();
        assert!(value.get("SifreHash").is_none());
    }

    #[test]
    fn test_register_checks_confirmation_and_length() {
        let mut form = RegisterForm {
            first_name: "Ece".to_string(),
            last_name: "Tan".to_string(),
            email: "ece@example.com".to_string(),
            password: "abc12".to_string(),
            password_confirm: "abc12".to_string(),
        };
        assert_eq!(
            form.normalize().unwrap_err().to_string(),
            "Password must be at least 6 characters!"
        );

        form.password = "abc123".to_string();
        assert_eq!(form.normalize().unwrap_err().to_string(), "Passwords do not match!");

        form.password_confirm = "abc123".to_string();
        let value = serde_json::to_value(form.normalize().unwrap()).unwrap();
        assert_eq!(value["Sifre"], "abc123");
    }

    #[test]
    fn test_password_change_payload() {
        let form = PasswordForm {
            old_password: "eski123".to_string(),
            new_password: "yeni1234".to_string(),
            confirm_password: "yeni1234".to_string(),
        };
        let value = serde_json::to_value(form.normalize().unwrap()).unwrap();
        assert_eq!(value, json!({"EskiSifre": "eski123", "YeniSifre": "yeni1234"}));
    }
}
