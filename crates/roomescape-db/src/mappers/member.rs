//! Member model -> entity mapper

use roomescape_core::entities::Member;
use roomescape_core::value_objects::{MemberId, Role};

use crate::models::MemberModel;

/// Convert database role string to Role, treating unknown values as MEMBER
fn parse_role(role: &str) -> Role {
    role.parse().unwrap_or_default()
}

/// Convert Role to its database representation
pub fn role_to_str(role: Role) -> &'static str {
    role.as_str()
}

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: MemberId::new(model.id),
            name: model.name,
            email: model.email,
            role: parse_role(&model.role),
        }
    }
}
