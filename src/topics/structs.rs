//! Named, tuple and unit structs.

use std::io::{self, Write};

use super::section;
use crate::ui::Theme;

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    email: String,
    active: bool,
    logins: u32,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: "anonymous".to_string(),
            email: String::new(),
            active: true,
            logins: 0,
        }
    }
}

/// Tuple structs give distinct types to otherwise identical data.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Meters(f64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Feet(f64);

impl From<Feet> for Meters {
    fn from(feet: Feet) -> Self {
        Meters(feet.0 * 0.3048)
    }
}

/// A marker with no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Unit;

#[derive(Debug, Clone, PartialEq)]
struct Address {
    city: String,
    country: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    user: User,
    address: Address,
    tags: Vec<String>,
}

fn build_user(name: &str, email: &str) -> User {
    User {
        name: name.to_string(),
        email: email.to_string(),
        ..User::default()
    }
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Named-field structs")?;
    let alice = build_user("alice", "alice@example.com");
    writeln!(out, "{:?}", alice)?;
    writeln!(out, "default user: {}", User::default().name)?;

    section(out, t, "2. Struct update syntax")?;
    let bob = User {
        name: "bob".to_string(),
        email: "bob@example.com".to_string(),
        ..alice.clone()
    };
    writeln!(out, "bob copies the rest of alice: active = {}", bob.active)?;
    writeln!(out, "bob.logins = {}", bob.logins)?;
    let inactive = User {
        active: false,
        ..bob
    };
    writeln!(out, "{} is active: {}", inactive.name, inactive.active)?;

    section(out, t, "3. Destructuring")?;
    let User { name, email, .. } = &alice;
    writeln!(out, "name = {}, email = {}", name, email)?;

    section(out, t, "4. Tuple and unit structs")?;
    let height = Feet(6.0);
    let metric: Meters = height.into();
    writeln!(out, "{:?} is {:.3} meters", height, metric.0)?;
    let unit_size = std::mem::size_of::<Unit>();
    writeln!(out, "unit struct: {:?}, size = {} bytes", Unit, unit_size)?;

    section(out, t, "5. Nested structs and equality")?;
    let employee = Employee {
        user: alice.clone(),
        address: Address {
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
        },
        tags: vec!["admin".to_string()],
    };
    let mut other = employee.clone();
    writeln!(out, "clone equals original: {}", other == employee)?;
    other.address.city = "Porto".to_string();
    writeln!(out, "after moving city: {}", other == employee)?;
    writeln!(
        out,
        "{} lives in {}, {} with tags {:?}",
        employee.user.name, employee.address.city, employee.address.country, employee.tags
    )?;
    writeln!(
        out,
        "{}",
        t.success("Derives give Debug, Clone and == for free")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_user_uses_defaults() {
        let user = build_user("x", "x@y.z");
        assert_eq!(user.name, "x");
        assert!(user.active);
        assert_eq!(user.logins, 0);
    }

    #[test]
    fn test_feet_to_meters() {
        let m: Meters = Feet(10.0).into();
        assert!((m.0 - 3.048).abs() < 1e-9);
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        assert!(text.contains("name = alice, email = alice@example.com"));
        assert!(text.contains("clone equals original: true"));
        assert!(text.contains("after moving city: false"));
        assert!(text.contains("Feet(6.0) is 1.829 meters"));
    }
}
