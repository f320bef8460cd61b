//! Runtime type information: `Any`, `TypeId`, `type_name` and layout.

use std::any::{self, Any, TypeId};
use std::collections::HashMap;
use std::io::{self, Write};
use std::mem;

use super::section;
use crate::ui::Theme;

#[derive(Debug)]
struct Sensor {
    id: u16,
    reading: f64,
}

/// Describe a value by trying the concrete types we know about.
fn describe(value: &dyn Any) -> String {
    if let Some(n) = value.downcast_ref::<i32>() {
        format!("i32 {}", n)
    } else if let Some(s) = value.downcast_ref::<String>() {
        format!("String {:?} ({} bytes)", s, s.len())
    } else if let Some(s) = value.downcast_ref::<&str>() {
        format!("&str {:?}", s)
    } else if let Some(sensor) = value.downcast_ref::<Sensor>() {
        format!("Sensor #{} reading {:.1}", sensor.id, sensor.reading)
    } else {
        "unknown type".to_string()
    }
}

fn name_of<T>(_: &T) -> &'static str {
    any::type_name::<T>()
}

/// A map holding at most one value per type.
#[derive(Default)]
struct TypeMap {
    values: HashMap<TypeId, Box<dyn Any>>,
}

impl TypeMap {
    fn insert<T: Any>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Box::new(value));
    }

    fn get<T: Any>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. type_name")?;
    let numbers = vec![1u8, 2, 3];
    writeln!(out, "numbers: {}", name_of(&numbers))?;
    writeln!(out, "Some(2.5f32): {}", name_of(&Some(2.5f32)))?;
    writeln!(out, "Sensor: {}", any::type_name::<Sensor>())?;

    section(out, t, "2. Downcasting &dyn Any")?;
    let values: Vec<Box<dyn Any>> = vec![
        Box::new(42i32),
        Box::new(String::from("gopher")),
        Box::new("crab"),
        Box::new(Sensor {
            id: 7,
            reading: 21.5,
        }),
        Box::new(2.75f64),
    ];
    for value in &values {
        writeln!(out, "  {}", describe(value.as_ref()))?;
    }

    section(out, t, "3. TypeId comparisons")?;
    writeln!(
        out,
        "numbers.type_id() == TypeId::of::<Vec<u8>>(): {}",
        Any::type_id(&numbers) == TypeId::of::<Vec<u8>>()
    )?;
    writeln!(
        out,
        "TypeId::of::<u32>() == TypeId::of::<i32>(): {}",
        TypeId::of::<u32>() == TypeId::of::<i32>()
    )?;

    section(out, t, "4. Size and alignment")?;
    writeln!(out, "  {:<16} {:>4} {:>5}", "type", "size", "align")?;
    let layouts = [
        ("u8", mem::size_of::<u8>(), mem::align_of::<u8>()),
        ("u64", mem::size_of::<u64>(), mem::align_of::<u64>()),
        ("&str", mem::size_of::<&str>(), mem::align_of::<&str>()),
        ("Option<Box<u8>>", mem::size_of::<Option<Box<u8>>>(), mem::align_of::<Option<Box<u8>>>()),
        ("Sensor", mem::size_of::<Sensor>(), mem::align_of::<Sensor>()),
    ];
    for (name, size, align) in layouts {
        writeln!(out, "  {:<16} {:>4} {:>5}", name, size, align)?;
    }

    section(out, t, "5. A type-keyed map")?;
    let mut map = TypeMap::default();
    map.insert(8080u16);
    map.insert(String::from("localhost"));
    map.insert(Sensor {
        id: 1,
        reading: 0.5,
    });
    writeln!(out, "entries: {}", map.len())?;
    writeln!(out, "u16 -> {:?}", map.get::<u16>())?;
    writeln!(out, "String -> {:?}", map.get::<String>())?;
    writeln!(out, "i64 -> {:?}", map.get::<i64>())?;
    if let Some(sensor) = map.get::<Sensor>() {
        writeln!(out, "Sensor -> {:?}", sensor)?;
    }
    writeln!(
        out,
        "{}",
        t.info("Prefer generics; use Any only at dynamic boundaries")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_types() {
        assert_eq!(describe(&5i32), "i32 5");
        assert_eq!(describe(&String::from("ab")), "String \"ab\" (2 bytes)");
        assert_eq!(describe(&"x"), "&str \"x\"");
        assert_eq!(describe(&1u64), "unknown type");
    }

    #[test]
    fn test_type_map_one_value_per_type() {
        let mut map = TypeMap::default();
        map.insert(1u8);
        map.insert(2u8);
        map.insert(3u16);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get::<u8>(), Some(&2));
        assert_eq!(map.get::<u32>(), None);
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        assert!(text.contains("numbers: alloc::vec::Vec<u8>"));
        assert!(text.contains("Sensor #7 reading 21.5"));
        assert!(text.contains("TypeId::of::<u32>() == TypeId::of::<i32>(): false"));
        assert!(text.contains("i64 -> None"));
    }
}
