//! Theme model -> entity mapper

use roomescape_core::entities::Theme;
use roomescape_core::value_objects::ThemeId;

use crate::models::ThemeModel;

impl From<ThemeModel> for Theme {
    fn from(model: ThemeModel) -> Self {
        Theme {
            id: ThemeId::new(model.id),
            name: model.name,
            description: model.description,
            thumbnail: model.thumbnail,
        }
    }
}
