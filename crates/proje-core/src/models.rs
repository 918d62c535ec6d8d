//! Backend Models
//!
//! Data structures matching the backend's JSON. The wire uses PascalCase
//! Turkish keys; fields are renamed so the Rust side reads in English.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Task status id the backend uses for "done"
pub const DONE_STATUS_ID: u32 = 4;

/// `DURUMLAR` lookup rows, as offered in the task form and filter bar
pub const STATUS_OPTIONS: &[(u32, &str)] = &[
    (1, "Yapılacak"),
    (2, "Devam Ediyor"),
    (3, "Test Ediliyor"),
    (DONE_STATUS_ID, "Tamamlandı"),
    (5, "Askıya Alındı"),
];

/// `ONCELIKLER` lookup rows
pub const PRIORITY_OPTIONS: &[(u32, &str)] = &[(1, "Yüksek"), (2, "Orta"), (3, "Düşük")];

/// Backend defaults for a task created without status or priority
pub const DEFAULT_STATUS_ID: u32 = 1;
pub const DEFAULT_PRIORITY_ID: u32 = 3;

// ========================
// Entity Kinds
// ========================

/// The three collections the client keeps cached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Project,
    Task,
    Member,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Project, EntityKind::Task, EntityKind::Member];

    /// Path used for create, and as the prefix for update/delete
    pub fn collection_path(self) -> &'static str {
        match self {
            EntityKind::Project => "/projeler",
            EntityKind::Task => "/gorevler",
            EntityKind::Member => "/kullanicilar",
        }
    }

    /// Path of the per-user listing
    pub fn listing_path(self) -> &'static str {
        match self {
            EntityKind::Project => "/projeler",
            EntityKind::Task => "/gorevler",
            EntityKind::Member => "/ekip",
        }
    }

    /// Listing endpoint for the given session.
    ///
    /// Guests get `None`: nothing is fetched for them and their caches
    /// stay empty.
    pub fn listing_endpoint(self, session: Option<&Session>) -> Option<String> {
        session.map(|s| format!("{}?kullanici_id={}", self.listing_path(), s.user_id))
    }

    /// `/{collection}/{id}`
    pub fn item_endpoint(self, id: u32) -> String {
        format!("{}/{}", self.collection_path(), id)
    }

    /// Human label used in notifications
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Project => "Project",
            EntityKind::Task => "Task",
            EntityKind::Member => "Team member",
        }
    }
}

/// Anything that lives in an entity cache
pub trait Entity: Clone + DeserializeOwned + 'static {
    const KIND: EntityKind;

    /// Backend-assigned identifier
    fn id(&self) -> u32;

    /// Short name shown in prompts ("Delete Website Redesign?")
    fn display_name(&self) -> String;
}

// ========================
// Session
// ========================

/// The logged-in user, as returned by `/login` and kept in storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "KullaniciID")]
    pub user_id: u32,
    #[serde(rename = "Ad")]
    pub first_name: String,
    #[serde(rename = "Soyad")]
    pub last_name: String,
    #[serde(rename = "Eposta")]
    pub email: String,
}

impl Session {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ========================
// Cached Entities
// ========================

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "ProjeID")]
    pub id: u32,
    #[serde(rename = "ProjeAdi")]
    pub name: String,
    #[serde(rename = "BaslangicTarihi", default)]
    pub start_date: Option<String>,
    #[serde(rename = "BitisTarihi", default)]
    pub end_date: Option<String>,
    #[serde(rename = "Butce", default)]
    pub budget: Option<f64>,
    #[serde(rename = "YoneticiID", default)]
    pub manager_id: Option<u32>,
    #[serde(rename = "YoneticiAd", default)]
    pub manager_first_name: String,
    #[serde(rename = "YoneticiSoyad", default)]
    pub manager_last_name: String,
}

impl Project {
    pub fn manager_name(&self) -> String {
        format!("{} {}", self.manager_first_name, self.manager_last_name)
            .trim()
            .to_string()
    }
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> u32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "GorevID")]
    pub id: u32,
    #[serde(rename = "GorevAdi")]
    pub name: String,
    #[serde(rename = "Aciklama", default)]
    pub description: Option<String>,
    #[serde(rename = "TeslimTarihi", default)]
    pub due_date: Option<String>,
    #[serde(rename = "ProjeID", default)]
    pub project_id: Option<u32>,
    #[serde(rename = "ProjeAdi", default)]
    pub project_name: String,
    #[serde(rename = "DurumID", default)]
    pub status_id: Option<u32>,
    #[serde(rename = "DurumAdi", default)]
    pub status_name: String,
    #[serde(rename = "OncelikID", default)]
    pub priority_id: Option<u32>,
    #[serde(rename = "OncelikAdi", default)]
    pub priority_name: String,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status_id == Some(DONE_STATUS_ID)
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> u32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Team member data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "KullaniciID")]
    pub id: u32,
    #[serde(rename = "Ad")]
    pub first_name: String,
    #[serde(rename = "Soyad")]
    pub last_name: String,
    #[serde(rename = "Eposta")]
    pub email: String,
    #[serde(rename = "Rol", default)]
    pub role: Option<String>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Member {
    const KIND: EntityKind = EntityKind::Member;

    fn id(&self) -> u32 {
        self.id
    }

    fn display_name(&self) -> String {
        self.full_name()
    }
}

// ========================
// Profile
// ========================

/// `/profil/{id}` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    #[serde(rename = "KullaniciID")]
    pub user_id: u32,
    #[serde(rename = "Ad")]
    pub first_name: String,
    #[serde(rename = "Soyad")]
    pub last_name: String,
    #[serde(rename = "Eposta")]
    pub email: String,
    #[serde(rename = "ProjeCount", default)]
    pub project_count: u32,
    #[serde(rename = "GorevCount", default)]
    pub task_count: u32,
}

/// A task assigned to the current user (`/profil/{id}/gorevler`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedTask {
    #[serde(rename = "GorevID")]
    pub id: u32,
    #[serde(rename = "GorevAdi")]
    pub name: String,
    #[serde(rename = "TeslimTarihi", default)]
    pub due_date: Option<String>,
    #[serde(rename = "ProjeAdi", default)]
    pub project_name: String,
    #[serde(rename = "DurumAdi", default)]
    pub status_name: String,
    #[serde(rename = "OncelikAdi", default)]
    pub priority_name: String,
}

/// A project the current user belongs to (`/profil/{id}/projeler`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProject {
    #[serde(rename = "ProjeID")]
    pub id: u32,
    #[serde(rename = "ProjeAdi")]
    pub name: String,
    #[serde(rename = "BaslangicTarihi", default)]
    pub start_date: Option<String>,
    #[serde(rename = "BitisTarihi", default)]
    pub end_date: Option<String>,
    #[serde(rename = "RolAdi", default)]
    pub role: Option<String>,
}

// ========================
// Responses
// ========================

/// Generic `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `/login` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: Session,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: 7,
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            email: "ayse@example.com".to_string(),
        }
    }

    #[test]
    fn test_listing_endpoint_is_personalised() {
        let s = session();
        assert_eq!(
            EntityKind::Project.listing_endpoint(Some(&s)).as_deref(),
            Some("/projeler?kullanici_id=7")
        );
        assert_eq!(
            EntityKind::Member.listing_endpoint(Some(&s)).as_deref(),
            Some("/ekip?kullanici_id=7")
        );
    }

    #[test]
    fn test_guest_has_no_listing_endpoint() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.listing_endpoint(None), None);
        }
    }

    #[test]
    fn test_item_endpoint() {
        assert_eq!(EntityKind::Task.item_endpoint(12), "/gorevler/12");
        assert_eq!(EntityKind::Member.item_endpoint(3), "/kullanicilar/3");
    }

    #[test]
    fn test_project_deserializes_backend_shape() {
        let json = r#"{
            "ProjeID": 1, "ProjeAdi": "Web Sitesi", "BaslangicTarihi": "2024-01-15",
            "BitisTarihi": null, "Butce": 150000.0, "YoneticiID": 2,
            "YoneticiAd": "Mehmet", "YoneticiSoyad": "Demir"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 1);
        assert_eq!(project.end_date, None);
        assert_eq!(project.budget, Some(150000.0));
        assert_eq!(project.manager_name(), "Mehmet Demir");
    }

    #[test]
    fn test_task_done_status() {
        let json = r#"{
            "GorevID": 5, "GorevAdi": "Tasarım", "Aciklama": null, "TeslimTarihi": "2024-02-01",
            "ProjeID": 1, "ProjeAdi": "Web Sitesi", "DurumID": 4, "DurumAdi": "Tamamlandı",
            "OncelikID": 2, "OncelikAdi": "Yüksek"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.is_done());
        assert_eq!(task.project_id, Some(1));
    }

    #[test]
    fn test_session_uses_wire_keys() {
        let value = serde_json::to_value(session()).unwrap();
        assert_eq!(value["KullaniciID"], 7);
        assert_eq!(value["Eposta"], "ayse@example.com");
    }
}
