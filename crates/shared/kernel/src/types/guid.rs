use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Namespace for name-derived identities. Changing it re-keys every stored profile.
const TYPE_NAMESPACE: Uuid = Uuid::from_u128(0x7c3a_51d2_94e8_4b0f_a1c6_2e5d_8f90_b347);

/// Stable identity token of a registered type.
///
/// Either assigned by the type's author ([`super::Registered::GUID`]) or derived
/// from the registered name with UUIDv5, so it never depends on registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeGuid(Uuid);

impl TypeGuid {
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Derives the identity from a type name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&TYPE_NAMESPACE, name.as_bytes()))
    }

    /// Parses hyphenated, simple, braced or URN forms. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Uuid::parse_str(token.trim()).ok().map(Self)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for TypeGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TypeGuid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_derivation_is_stable() {
        let a = TypeGuid::from_name("WindowsMixedRealityController");
        let b = TypeGuid::from_name("WindowsMixedRealityController");
        assert_eq!(a, b);
        assert_ne!(a, TypeGuid::from_name("OculusTouchController"));
    }

    #[test]
    fn parse_accepts_common_forms() {
        let guid = TypeGuid::from_name("Sample");
        let hyphenated = guid.to_string();
        let braced = format!("{{{hyphenated}}}");
        let simple = hyphenated.replace('-', "");

        assert_eq!(TypeGuid::parse(&hyphenated), Some(guid));
        assert_eq!(TypeGuid::parse(&braced), Some(guid));
        assert_eq!(TypeGuid::parse(&format!("  {simple} ")), Some(guid));
        assert_eq!(TypeGuid::parse("not-a-guid"), None);
    }

    #[test]
    fn display_is_lowercase_hyphenated() {
        let guid: TypeGuid = "A1B2C3D4-0000-4000-8000-00000000000F".parse().unwrap();
        assert_eq!(guid.to_string(), "a1b2c3d4-0000-4000-8000-00000000000f");
    }
}
