#![cfg(feature = "serde")]

use maybe::{none, some, O};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    nickname: O<String>,
}

#[test]
fn test_serialize_like_option() {
    println!("=== Testing Serde: serialize ===");
    assert_eq!(serde_json::to_string(&some(5)).unwrap(), "5");
    assert_eq!(serde_json::to_string(&none::<i32>()).unwrap(), "null");
    println!("✓ Some is the bare value, None is null");
}

#[test]
fn test_struct_round_trip() {
    let json = r#"{"name":"ada","nickname":null}"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.nickname, none());

    let json = r#"{"name":"ada","nickname":"countess"}"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.nickname, some(String::from("countess")));
    assert_eq!(serde_json::to_string(&profile).unwrap(), json);
}

#[test]
fn test_falsy_values_survive() {
    let zero: O<i32> = serde_json::from_str("0").unwrap();
    assert_eq!(zero, some(0));
    let no: O<bool> = serde_json::from_str("false").unwrap();
    assert_eq!(no, some(false));
}
