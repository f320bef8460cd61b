//! JSON with `serde` and `serde_json`.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

use super::section;
use crate::ui::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    website: Option<String>,
    #[serde(default)]
    interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    #[serde(skip)]
    password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<u8>,
    #[serde(rename = "is_active")]
    active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<Profile>,
}

/// Price stored in cents, written as a decimal string like `"12.50"`.
mod decimal_cents {
    use super::*;

    pub fn serialize<S: Serializer>(cents: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}.{:02}", cents / 100, cents % 100))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let (whole, frac) = raw.split_once('.').unwrap_or((raw.as_str(), "0"));
        let whole: u64 = whole.parse().map_err(serde::de::Error::custom)?;
        let frac = format!("{:0<2}", frac);
        if frac.len() > 2 {
            return Err(serde::de::Error::custom(format!(
                "too many decimal places in {:?}",
                raw
            )));
        }
        let frac: u64 = frac.parse().map_err(serde::de::Error::custom)?;
        Ok(whole * 100 + frac)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Product {
    name: String,
    #[serde(with = "decimal_cents")]
    price: u64,
    currency: String,
    in_stock: bool,
}

/// Internally tagged enum: the variant name lives in a `"type"` field.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Event {
    Login { user: String },
    Purchase { user: String, amount: u64 },
    Logout { user: String },
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AppConfig {
    app_name: String,
    debug: bool,
    features: BTreeMap<String, bool>,
    servers: Vec<String>,
}

/// Read a stream of concatenated JSON values, keeping the good ones.
fn read_events(stream: &str) -> (Vec<Event>, Vec<String>) {
    let mut events = Vec::new();
    let mut errors = Vec::new();
    for item in serde_json::Deserializer::from_str(stream).into_iter::<Event>() {
        match item {
            Ok(event) => events.push(event),
            Err(e) => {
                errors.push(e.to_string());
                break;
            }
        }
    }
    (events, errors)
}

fn sample_user() -> User {
    User {
        id: 1,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
        age: None,
        active: true,
        profile: Some(Profile {
            bio: "Analyst".to_string(),
            website: None,
            interests: vec!["engines".to_string(), "poetry".to_string()],
        }),
    }
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Serializing a struct")?;
    let user = sample_user();
    let compact = serde_json::to_string(&user).map_err(io::Error::from)?;
    writeln!(out, "compact: {}", compact)?;
    writeln!(
        out,
        "{}",
        t.dim("password is skipped, None fields are omitted")
    )?;

    section(out, t, "2. Pretty printing")?;
    let pretty = serde_json::to_string_pretty(&user.profile).map_err(io::Error::from)?;
    writeln!(out, "{}", pretty)?;

    section(out, t, "3. Deserializing with defaults")?;
    let input = r#"{"id":2,"name":"Linus","email":"l@example.com","is_active":false,"age":54}"#;
    match serde_json::from_str::<User>(input) {
        Ok(parsed) => writeln!(
            out,
            "parsed {} (age {:?}, profile {:?}, password empty: {})",
            parsed.name,
            parsed.age,
            parsed.profile,
            parsed.password.is_empty()
        )?,
        Err(e) => writeln!(out, "{}", t.error(&e.to_string()))?,
    }

    section(out, t, "4. Custom field formats")?;
    let product = Product {
        name: "Keyboard".to_string(),
        price: 4999,
        currency: "EUR".to_string(),
        in_stock: true,
    };
    writeln!(
        out,
        "{}",
        serde_json::to_string(&product).map_err(io::Error::from)?
    )?;
    let back: Result<Product, _> = serde_json::from_str(
        r#"{"name":"Mouse","price":"12.5","currency":"EUR","in_stock":false}"#,
    );
    writeln!(
        out,
        "parsed price cents: {:?}",
        back.map(|p| p.price).map_err(|e| e.to_string())
    )?;

    section(out, t, "5. Tagged enums and streams")?;
    let stream = r#"
        {"type":"login","user":"ada"}
        {"type":"purchase","user":"ada","amount":42}
        {"type":"logout","user":"ada"}
    "#;
    let (events, errors) = read_events(stream);
    for event in &events {
        writeln!(out, "  {:?}", event)?;
    }
    writeln!(out, "{} events, {} errors", events.len(), errors.len())?;

    section(out, t, "6. Untyped values")?;
    let doc = json!({
        "service": "billing",
        "replicas": 3,
        "tags": ["prod", "eu"],
        "limits": { "cpu": "500m" }
    });
    writeln!(out, "service = {}", doc["service"])?;
    writeln!(
        out,
        "replicas + 1 = {}",
        doc["replicas"].as_u64().unwrap_or(0) + 1
    )?;
    writeln!(out, "first tag = {}", doc["tags"][0])?;
    writeln!(
        out,
        "limits.cpu via pointer = {:?}",
        doc.pointer("/limits/cpu").and_then(Value::as_str)
    )?;
    writeln!(out, "missing key = {}", doc["nope"])?;

    section(out, t, "7. Config with defaults")?;
    let config: AppConfig = serde_json::from_str(r#"{"app_name":"demo","features":{"beta":true}}"#)
        .map_err(io::Error::from)?;
    writeln!(
        out,
        "app={} debug={} features={:?} servers={:?}",
        config.app_name, config.debug, config.features, config.servers
    )?;

    section(out, t, "8. Parse errors")?;
    for bad in [r#"{"id": 1,"#, r#"{"id":"one","name":"x","email":"e","is_active":true}"#] {
        match serde_json::from_str::<User>(bad) {
            Ok(_) => writeln!(out, "unexpectedly parsed {}", bad)?,
            Err(e) => writeln!(
                out,
                "{} (line {}, column {})",
                t.error(&format!("{:?} error", e.classify())),
                e.line(),
                e.column()
            )?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_skips_fields() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("age").is_none());
        assert_eq!(value["is_active"], true);
        assert!(value["profile"].get("website").is_none());
    }

    #[test]
    fn test_user_deserialization_defaults() {
        let user: User =
            serde_json::from_str(r#"{"id":3,"name":"n","email":"e","is_active":true}"#).unwrap();
        assert_eq!(user.age, None);
        assert_eq!(user.profile, None);
        assert!(user.password.is_empty());
    }

    #[test]
    fn test_decimal_cents() {
        let product = Product {
            name: "x".to_string(),
            price: 1205,
            currency: "EUR".to_string(),
            in_stock: true,
        };
        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains(r#""price":"12.05""#));
        let back: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(back, product);

        let err = serde_json::from_str::<Product>(
            r#"{"name":"x","price":"1.234","currency":"EUR","in_stock":true}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_tagged_events_stream() {
        let (events, errors) = read_events(r#"{"type":"login","user":"a"} {"type":"bogus"}"#);
        assert_eq!(
            events,
            vec![Event::Login {
                user: "a".to_string()
            }]
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        let compact = r#"compact: {"id":1,"name":"Ada","email":"ada@example.com","is_active":true"#;
        assert!(text.contains(compact));
        assert!(text.contains(r#""price":"49.99""#));
        assert!(text.contains("parsed price cents: Ok(1250)"));
        assert!(text.contains("3 events, 0 errors"));
        assert!(text.contains("service = \"billing\""));
        assert!(text.contains("Eof error"));
        assert!(text.contains("Data error"));
    }
}
