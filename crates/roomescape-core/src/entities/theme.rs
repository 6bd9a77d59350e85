//! Theme entity - a bookable escape room theme

use crate::value_objects::ThemeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

impl Theme {
    pub fn new(id: ThemeId, name: String, description: String, thumbnail: String) -> Self {
        Self {
            id,
            name,
            description,
            thumbnail,
        }
    }
}

/// Fields needed to insert a theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTheme {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

impl NewTheme {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            thumbnail: thumbnail.into(),
        }
    }

    /// Attach the store-assigned id
    pub fn into_theme(self, id: ThemeId) -> Theme {
        Theme::new(id, self.name, self.description, self.thumbnail)
    }
}
