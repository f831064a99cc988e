use serde::Serialize;
use sqlx::FromRow;

/// Access class of a user; each role keeps its credentials in its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Etudiant,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Etudiant => "etudiant",
            Role::Admin => "admin",
        }
    }

    pub fn auth_table(self) -> &'static str {
        match self {
            Role::Etudiant => "student_auth",
            Role::Admin => "admin_auth",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "etudiant" => Some(Role::Etudiant),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

// Row of `users`. `role` stays textual so an unexpected value in the table
// surfaces as a login failure rather than a decode error.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub nom: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created(i64),
    /// The email is already taken.
    Conflict,
}
