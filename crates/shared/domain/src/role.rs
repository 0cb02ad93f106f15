use crate::constants::{ADMIN, ALUMNI, FACULTY, STUDENT};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Coarse-grained user category used to gate dashboard routes.
///
/// Raw role strings are normalized (trimmed, lowercased) exactly once, when they
/// enter the system. Anything unrecognized becomes [`Role::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Student,
    Faculty,
    Admin,
    Alumni,
    #[default]
    Unknown,
}

impl Role {
    /// Parses a free-text role. Never fails.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            STUDENT => Self::Student,
            FACULTY => Self::Faculty,
            ADMIN => Self::Admin,
            ALUMNI => Self::Alumni,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => STUDENT,
            Self::Faculty => FACULTY,
            Self::Admin => ADMIN,
            Self::Alumni => ALUMNI,
            Self::Unknown => "unknown",
        }
    }

    /// The bit this role occupies in a [`RoleSet`]. `Unknown` has none.
    #[must_use]
    pub const fn flag(self) -> RoleSet {
        match self {
            Self::Student => RoleSet::STUDENT,
            Self::Faculty => RoleSet::FACULTY,
            Self::Admin => RoleSet::ADMIN,
            Self::Alumni => RoleSet::ALUMNI,
            Self::Unknown => RoleSet::empty(),
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}

bitflags! {
    /// The set of roles a protected route admits.
    ///
    /// An empty set admits nobody.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct RoleSet: u8 {
        const STUDENT = 1 << 0;
        const FACULTY = 1 << 1;
        const ADMIN = 1 << 2;
        const ALUMNI = 1 << 3;

        const ALL = Self::STUDENT.bits()
            | Self::FACULTY.bits()
            | Self::ADMIN.bits()
            | Self::ALUMNI.bits();
    }
}

impl RoleSet {
    /// Membership test. [`Role::Unknown`] is never a member.
    #[must_use]
    pub const fn admits(self, role: Role) -> bool {
        let flag = role.flag();
        !flag.is_empty() && self.contains(flag)
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        role.flag()
    }
}

impl From<&str> for RoleSet {
    fn from(s: &str) -> Self {
        match s.trim() {
            "all" | "*" => Self::ALL,
            other => Role::normalize(other).flag(),
        }
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, role| acc | role.flag())
    }
}

impl<'a> FromIterator<&'a str> for RoleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, name| acc | Self::from(name))
    }
}

impl Serialize for RoleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let names: Vec<&str> = [Role::Student, Role::Faculty, Role::Admin, Role::Alumni]
            .into_iter()
            .filter(|role| self.admits(*role))
            .map(Role::as_str)
            .collect();
        names.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RoleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().map(String::as_str).collect())
    }
}
