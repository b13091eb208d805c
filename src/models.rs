//! Frontend Models
//!
//! Data structures matching backend payloads and the stored session.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend, `_id` on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaskWire")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}

/// User data structure for the admin list (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UserWire")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Mongo documents may carry `_id`, `id`, or both; `_id` wins
fn pick_id(mongo: Option<String>, plain: Option<String>) -> Result<String, String> {
    mongo
        .or(plain)
        .ok_or_else(|| "missing field `_id`".to_string())
}

#[derive(Deserialize)]
struct TaskWire {
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    id: Option<String>,
    title: String,
    #[serde(default)]
    completed: Option<bool>,
}

impl TryFrom<TaskWire> for Task {
    type Error = String;

    fn try_from(wire: TaskWire) -> Result<Self, Self::Error> {
        Ok(Task {
            id: pick_id(wire.mongo_id, wire.id)?,
            title: wire.title,
            completed: wire.completed,
        })
    }
}

#[derive(Deserialize)]
struct UserWire {
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    id: Option<String>,
    name: String,
    email: String,
}

impl TryFrom<UserWire> for User {
    type Error = String;

    fn try_from(wire: UserWire) -> Result<Self, Self::Error> {
        Ok(User {
            id: pick_id(wire.mongo_id, wire.id)?,
            name: wire.name,
            email: wire.email,
        })
    }
}

/// Account role. Roles this client has no screens for are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "user" => Role::User,
            "admin" => Role::Admin,
            _ => Role::Other(name),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

/// Strict parse: only roles an account can sign up with
impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Role::from(s.to_string()) {
            Role::Other(name) => Err(UnknownRole(name)),
            known => Ok(known),
        }
    }
}

/// The user part of a stored session
///
/// Fields default so a half-written record still parses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SessionUserWire")]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[derive(Deserialize)]
struct SessionUserWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: String,
    #[serde(default)]
    role: Role,
}

impl From<SessionUserWire> for SessionUser {
    fn from(wire: SessionUserWire) -> Self {
        SessionUser {
            id: wire.id.or(wire.mongo_id).unwrap_or_default(),
            username: wire.username.or(wire.name).unwrap_or_default(),
            email: wire.email,
            role: wire.role,
        }
    }
}

/// Session record persisted in local storage
///
/// Every field defaults so a partially written record still exposes
/// its `isLoggedIn` flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub is_logged_in: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl SessionRecord {
    pub fn new(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            token: token.into(),
            is_logged_in: true,
            user: Some(user),
        }
    }

    /// Logged in with a usable bearer token
    pub fn is_authenticated(&self) -> bool {
        self.is_logged_in && !self.token.is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }
}

/// Field-level failure detail reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDetail {
    pub field: String,
    pub message: String,
}

/// Normalized failure shape shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldDetail>>,
}

impl ErrorRecord {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn details(&self) -> &[FieldDetail] {
        self.details.as_deref().unwrap_or_default()
    }
}

// ========================
// Auth Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "SignupResponseWire")]
pub struct SignupResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Some backends log the new account in right away
    pub token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignupResponseWire {
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    id: Option<String>,
    username: Option<String>,
    name: Option<String>,
    email: String,
    #[serde(default)]
    role: Role,
    created_at: Option<String>,
    updated_at: Option<String>,
    #[serde(default)]
    token: Option<String>,
}

impl TryFrom<SignupResponseWire> for SignupResponse {
    type Error = String;

    fn try_from(wire: SignupResponseWire) -> Result<Self, Self::Error> {
        Ok(SignupResponse {
            id: pick_id(wire.mongo_id, wire.id)?,
            username: wire
                .username
                .or(wire.name)
                .ok_or_else(|| "missing field `username`".to_string())?,
            email: wire.email,
            role: wire.role,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            token: wire.token,
        })
    }
}

impl SignupResponse {
    /// Session for an account created together with a token
    pub fn session(&self) -> Option<SessionRecord> {
        let token = self.token.as_deref().filter(|t| !t.is_empty())?;
        Some(SessionRecord::new(
            token,
            SessionUser {
                id: self.id.clone(),
                username: self.username.clone(),
                email: self.email.clone(),
                role: self.role.clone(),
            },
        ))
    }
}

/// Login response has the same shape as the stored session
pub type LoginResponse = SessionRecord;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_task_accepts_mongo_and_plain_ids() {
        let a: Task = serde_json::from_value(json!({"_id": "t1", "title": "Buy milk"})).unwrap();
        let b: Task = serde_json::from_value(json!({"id": "t1", "title": "Buy milk"})).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_done());
    }

    #[test]
    fn test_ids_when_both_present() {
        let task: Task =
            serde_json::from_str(r#"{"_id":"t1","id":"t1","title":"a","__v":0}"#).unwrap();
        assert_eq!(task.id, "t1");
        let user: User = serde_json::from_value(
            json!({"_id": "u1", "id": "ignored", "name": "Ada", "email": "ada@example.com"}),
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert!(serde_json::from_value::<Task>(json!({"title": "no id"})).is_err());
    }

    #[test]
    fn test_task_serializes_mongo_id() {
        let task = Task {
            id: "t1".to_string(),
            title: "a".to_string(),
            completed: None,
        };
        assert_eq!(serde_json::to_value(&task).unwrap(), json!({"_id": "t1", "title": "a"}));
    }

    #[test]
    fn test_roles() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert!("manager".parse::<Role>().is_err());
        let role: Role = serde_json::from_value(json!("manager")).unwrap();
        assert_eq!(role, Role::Other("manager".to_string()));
        assert_eq!(serde_json::to_value(&role).unwrap(), json!("manager"));
    }

    #[test]
    fn test_lenient_session_user() {
        let session: SessionRecord = serde_json::from_value(json!({
            "token": "t",
            "isLoggedIn": true,
            "user": {"id": "u1", "username": "ada", "email": "a@b.c", "role": "manager"}
        }))
        .unwrap();
        assert!(session.is_authenticated());
        assert!(!session.is_admin());

        let partial: SessionRecord =
            serde_json::from_str(r#"{"isLoggedIn":true,"user":{"id":"u1"}}"#).unwrap();
        let user = partial.user.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.username, "");
    }

    #[test]
    fn test_session_record_wire_shape() {
        let raw = json!({
            "token": "abc",
            "isLoggedIn": true,
            "user": {"id": "u1", "username": "ada", "email": "ada@example.com", "role": "admin"}
        });
        let session: SessionRecord = serde_json::from_value(raw.clone()).unwrap();
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert_eq!(serde_json::to_value(&session).unwrap(), raw);
    }

    #[test]
    fn test_partial_session_keeps_flag() {
        let session: SessionRecord = serde_json::from_str(r#"{"isLoggedIn":true}"#).unwrap();
        assert!(session.is_logged_in);
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_error_record_details_optional() {
        let record: ErrorRecord = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(record, ErrorRecord::message("nope"));
        assert!(record.details().is_empty());
    }

    #[test]
    fn test_signup_response_session_needs_token() {
        let mut response: SignupResponse = serde_json::from_value(json!({
            "_id": "u1", "username": "ada", "email": "ada@example.com", "role": "user"
        }))
        .unwrap();
        assert!(response.session().is_none());

        response.token = Some("tok".to_string());
        let session = response.session().unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user.unwrap().id, "u1");
    }
}
