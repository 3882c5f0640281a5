use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Which variant of a physical capability an entry describes.
    ///
    /// The empty set means "neither hand" (e.g. a gamepad or a head-mounted clicker).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Handedness: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const OTHER = 1 << 2;

        const BOTH = Self::LEFT.bits() | Self::RIGHT.bits();
        const ANY = Self::BOTH.bits() | Self::OTHER.bits();
    }
}

impl Handedness {
    pub const NONE: Self = Self::empty();

    /// Lowercase display name, `"none"` for the empty set.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        [
            (Self::LEFT, "left"),
            (Self::RIGHT, "right"),
            (Self::OTHER, "other"),
            (Self::BOTH, "both"),
            (Self::ANY, "any"),
            (Self::NONE, "none"),
        ]
        .into_iter()
        .find_map(|(flags, name)| (flags == self).then_some(name))
        .unwrap_or("mixed")
    }
}

impl From<&str> for Handedness {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "left" => Self::LEFT,
            "right" => Self::RIGHT,
            "other" => Self::OTHER,
            "both" => Self::BOTH,
            "any" | "*" => Self::ANY,
            _ => Self::NONE,
        }
    }
}

impl From<u8> for Handedness {
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Handedness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Handedness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
