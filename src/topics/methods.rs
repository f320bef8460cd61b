//! Methods and associated functions.

use std::io::{self, Write};

use super::section;
use crate::ui::Theme;

#[derive(Debug, Clone, PartialEq)]
struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Associated function, called as `Rectangle::square(..)`.
    fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn can_hold(&self, other: &Rectangle) -> bool {
        self.width > other.width && self.height > other.height
    }

    fn scale(&mut self, factor: f64) {
        self.width *= factor;
        self.height *= factor;
    }

    /// Consumes the rectangle.
    fn into_dimensions(self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// Builder with chained, consuming setters.
#[derive(Debug, Default)]
struct RequestBuilder {
    url: String,
    method: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }

    fn method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn build(self) -> String {
        let mut request = format!("{} {}", self.method.as_deref().unwrap_or("GET"), self.url);
        for (name, value) in &self.headers {
            request.push_str(&format!("\n{}: {}", name, value));
        }
        request
    }
}

/// Methods can be added to local types wrapping foreign ones.
struct Celsius(f64);

impl Celsius {
    fn to_fahrenheit(&self) -> f64 {
        self.0 * 9.0 / 5.0 + 32.0
    }
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. &self methods")?;
    let rect = Rectangle {
        width: 3.0,
        height: 4.0,
    };
    writeln!(out, "{:?} has area {}", rect, rect.area())?;
    let small = Rectangle::square(2.0);
    writeln!(out, "can hold a 2x2 square: {}", rect.can_hold(&small))?;

    section(out, t, "2. &mut self methods")?;
    let mut growing = rect.clone();
    growing.scale(2.5);
    writeln!(out, "scaled by 2.5: {:?}", growing)?;

    section(out, t, "3. self methods consume the value")?;
    let (w, h) = growing.into_dimensions();
    writeln!(out, "into_dimensions() = ({}, {})", w, h)?;
    writeln!(
        out,
        "{}",
        t.dim("`growing` can no longer be used after this call")
    )?;

    section(out, t, "4. Method chaining with a builder")?;
    let request = RequestBuilder::new("/api/users")
        .method("POST")
        .header("Content-Type", "application/json")
        .header("Accept", "*/*")
        .build();
    for line in request.lines() {
        writeln!(out, "  {}", line)?;
    }

    section(out, t, "5. Methods on newtypes")?;
    writeln!(out, "100°C = {}°F", Celsius(100.0).to_fahrenheit())?;
    writeln!(
        out,
        "{}",
        t.info("rect.area() is sugar for Rectangle::area(&rect)")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_methods() {
        let mut r = Rectangle {
            width: 2.0,
            height: 5.0,
        };
        assert_eq!(r.area(), 10.0);
        assert!(r.can_hold(&Rectangle::square(1.0)));
        assert!(!r.can_hold(&Rectangle::square(3.0)));
        r.scale(2.0);
        assert_eq!(r.into_dimensions(), (4.0, 10.0));
    }

    #[test]
    fn test_builder_defaults_to_get() {
        assert_eq!(RequestBuilder::new("/").build(), "GET /");
        assert_eq!(
            RequestBuilder::new("/x").method("PUT").header("A", "b").build(),
            "PUT /x\nA: b"
        );
    }

    #[test]
    fn test_celsius() {
        assert_eq!(Celsius(0.0).to_fahrenheit(), 32.0);
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        assert!(text.contains("has area 12"));
        assert!(text.contains("into_dimensions() = (7.5, 10)"));
        assert!(text.contains("  POST /api/users"));
        assert!(text.contains("100°C = 212°F"));
    }
}
