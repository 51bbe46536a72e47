use std::fmt::{
    Debug,
    Display,
};

use serde::{
    Serialize,
    de::DeserializeOwned,
};

#[track_caller]
pub fn test_serialization<T, S>(value: T, expected: S)
where
    T: Serialize,
    S: Display,
{
    pretty_assertions::assert_eq!(
        serde_json::to_string(&value).unwrap(),
        format!("{expected}")
    );
}

#[track_caller]
pub fn test_string_serialization<T>(value: T, expected: &str)
where
    T: Serialize,
{
    test_serialization(value, format!("\"{expected}\""));
}

#[track_caller]
pub fn test_deserialization<T>(input: &str, expected: T)
where
    T: DeserializeOwned + Debug + PartialEq,
{
    pretty_assertions::assert_eq!(serde_json::from_str::<T>(input).unwrap(), expected);
}

#[track_caller]
pub fn test_string_deserialization<T>(input: &str, expected: T)
where
    T: DeserializeOwned + Debug + PartialEq,
{
    test_deserialization(&format!("\"{input}\""), expected);
}
