//! Traits, trait objects and generics.

use std::f64::consts::PI;
use std::fmt;
use std::io::{self, Write};

use super::section;
use crate::ui::Theme;

trait Shape {
    fn name(&self) -> String;
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;

    /// Default method built on the required ones.
    fn describe(&self) -> String {
        format!(
            "{} with area {:.2} and perimeter {:.2}",
            self.name(),
            self.area(),
            self.perimeter()
        )
    }
}

struct Circle {
    radius: f64,
}

struct Rect {
    width: f64,
    height: f64,
}

impl Shape for Circle {
    fn name(&self) -> String {
        "circle".to_string()
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl Shape for Rect {
    fn name(&self) -> String {
        "rectangle".to_string()
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn describe(&self) -> String {
        format!("{}x{} rectangle", self.width, self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect[{} x {}]", self.width, self.height)
    }
}

/// Dynamic dispatch over a heterogeneous collection.
fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

/// Static dispatch; monomorphized per concrete type.
fn largest<S: Shape>(shapes: &[S]) -> Option<&S> {
    shapes.iter().max_by(|a, b| a.area().total_cmp(&b.area()))
}

/// Multiple bounds with a `where` clause.
fn announce<T>(item: &T) -> String
where
    T: Shape + fmt::Display,
{
    format!("{} is a {}", item, item.name())
}

/// A trait implemented for a foreign type.
trait Shout {
    fn shout(&self) -> String;
}

impl Shout for str {
    fn shout(&self) -> String {
        format!("{}!", self.to_uppercase())
    }
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Implementing a trait")?;
    let circle = Circle { radius: 1.0 };
    writeln!(out, "{}", circle.describe())?;

    section(out, t, "2. Overriding a default method")?;
    let rect = Rect {
        width: 2.0,
        height: 3.0,
    };
    writeln!(out, "{}", rect.describe())?;

    section(out, t, "3. Trait objects")?;
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 2.0 }),
        Box::new(Rect {
            width: 4.0,
            height: 5.0,
        }),
    ];
    for shape in &shapes {
        writeln!(out, "  {} -> {:.2}", shape.name(), shape.area())?;
    }
    writeln!(out, "total area = {:.2}", total_area(&shapes))?;

    section(out, t, "4. Generics and bounds")?;
    let rects = [
        Rect {
            width: 1.0,
            height: 1.0,
        },
        Rect {
            width: 3.0,
            height: 2.0,
        },
    ];
    if let Some(big) = largest(&rects) {
        writeln!(out, "largest rect: {}", big)?;
    }
    writeln!(out, "{}", announce(&rect))?;

    section(out, t, "5. Extending foreign types")?;
    writeln!(out, "{}", "hello traits".shout())?;
    writeln!(
        out,
        "{}",
        t.info("dyn Trait costs a vtable lookup; generics cost code size")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_overridden_describe() {
        let circle = Circle { radius: 1.0 }.describe();
        assert!(circle.starts_with("circle with area 3.14"));
        assert_eq!(
            Rect {
                width: 2.0,
                height: 3.0
            }
            .describe(),
            "2x3 rectangle"
        );
    }

    #[test]
    fn test_total_area() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rect {
                width: 1.0,
                height: 2.0,
            }),
            Box::new(Rect {
                width: 3.0,
                height: 1.0,
            }),
        ];
        assert_eq!(total_area(&shapes), 5.0);
    }

    #[test]
    fn test_largest_empty() {
        let none: [Rect; 0] = [];
        assert!(largest(&none).is_none());
    }

    #[test]
    fn test_shout() {
        assert_eq!("hi".shout(), "HI!");
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        assert!(text.contains("largest rect: Rect[3 x 2]"));
        assert!(text.contains("Rect[2 x 3] is a rectangle"));
        assert!(text.contains("HELLO TRAITS!"));
    }
}
