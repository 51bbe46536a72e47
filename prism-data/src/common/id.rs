use std::{
    fmt,
    fmt::Display,
    str::FromStr,
};

use anyhow::Error;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};

/// An ID for a catalog entry.
///
/// IDs contain only lowercase alphanumeric characters, so `"Water Gun"`, `"water-gun"` and
/// `"watergun"` all name the same move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

fn normalize_id(id: &str) -> Id {
    Id(id
        .chars()
        .filter_map(|c| match c {
            '0'..='9' | 'a'..='z' => Some(c),
            'A'..='Z' => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect())
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        normalize_id(&value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        normalize_id(value)
    }
}

impl FromStr for Id {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::from(s))
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(IdVisitor)
    }
}

#[cfg(test)]
mod id_test {
    use crate::{
        Id,
        test_util::test_deserialization,
    };

    #[test]
    fn normalizes_names() {
        assert_eq!(Id::from("Water Gun").as_ref(), "watergun");
        assert_eq!(Id::from("Will-O-Wisp").as_ref(), "willowisp");
        assert_eq!(Id::from("Double-Edge"), Id::from("doubleedge"));
    }

    #[test]
    fn deserializes_normalized() {
        test_deserialization("\"Shadow Ball\"", Id::from("shadowball"));
    }
}
