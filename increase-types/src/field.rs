//! Presence-tracked request fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A request field that distinguishes "not sent" from "sent as `null`".
///
/// Update endpoints treat an omitted member as "leave unchanged" and an explicit
/// `null` as "clear". Declare such members with
/// `#[serde(default, skip_serializing_if = "Field::is_omitted")]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// The member is not sent.
    #[default]
    Omitted,
    /// The member is sent as JSON `null`.
    Null,
    /// The member is sent with this value.
    Value(T),
}

impl<T> Field<T> {
    /// True if the member will not be serialized.
    #[must_use]
    pub const fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }

    /// True if the member will be serialized as `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the value, if one is set.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Convert to a nested option: `None` when omitted, `Some(None)` when null.
    #[must_use]
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Omitted => None,
            Self::Null => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `None` maps to an explicit `null`, not to an omitted member.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Omitted | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Value))
    }
}
