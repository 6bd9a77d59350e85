//! Theme database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ThemeModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}
