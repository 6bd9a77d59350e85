//! Member database model

use sqlx::FromRow;

/// Database model for the member table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}
