//! Record identifiers.
//!
//! Both logs key their rows by a random v4 UUID. The type parameter only
//! marks which log an id belongs to, so a [`GreetingId`] is never accepted
//! where a [`MeasureId`] is expected.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::greeting::Greeting;
use crate::measure::Measure;

/// Identifier of a [`Greeting`].
pub type GreetingId = RecordId<Greeting>;
/// Identifier of a [`Measure`].
pub type MeasureId = RecordId<Measure>;

/// UUID tagged with the record type it identifies.
pub struct RecordId<T> {
    uuid: Uuid,
    marker: PhantomData<fn() -> T>,
}

impl<T> RecordId<T> {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn as_uuid(self) -> Uuid {
        self.uuid
    }
}

impl<T> Default for RecordId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RecordId<T> {}

impl<T> PartialEq for RecordId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<T> Eq for RecordId<T> {}

impl<T> Hash for RecordId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<T> fmt::Debug for RecordId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordId").field(&self.uuid).finish()
    }
}

impl<T> fmt::Display for RecordId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.uuid.fmt(f)
    }
}

impl<T> Serialize for RecordId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.uuid.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for RecordId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_distinct_ids() {
        assert_ne!(GreetingId::new(), GreetingId::new());
    }

    #[test]
    fn should_keep_wrapped_uuid() {
        let uuid = Uuid::new_v4();
        let id = MeasureId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn should_serialize_as_bare_uuid() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&GreetingId::from_uuid(uuid)).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));

        let back: GreetingId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_uuid(), uuid);
    }
}
