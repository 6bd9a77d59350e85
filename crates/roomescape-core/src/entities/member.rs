//! Member entity - a registered account that can book reservations

use crate::value_objects::{MemberId, Role};

/// Member account. The password hash never lives on the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Member {
    pub fn new(id: MemberId, name: String, email: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Fields needed to insert a member; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl NewMember {
    /// Regular account with the MEMBER role
    pub fn member(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: Role::Member,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Identity of the caller, resolved from a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginMember {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl LoginMember {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<Member> for LoginMember {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            role: member.role,
        }
    }
}
