//! References, `Box`, `Rc`, `RefCell` and `Weak`.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::{Rc, Weak};

use super::section;
use crate::ui::Theme;

/// Add `amount` through a mutable reference.
fn bump(value: &mut i32, amount: i32) {
    *value += amount;
}

/// Swap two values through mutable references.
fn swap_values(a: &mut i32, b: &mut i32) {
    std::mem::swap(a, b);
}

/// A recursive type needs indirection to have a known size.
#[derive(Debug)]
enum List {
    Cons(i32, Box<List>),
    Nil,
}

impl List {
    fn from_slice(values: &[i32]) -> Self {
        values
            .iter()
            .rev()
            .fold(List::Nil, |tail, &v| List::Cons(v, Box::new(tail)))
    }

    fn sum(&self) -> i32 {
        match self {
            List::Cons(v, rest) => v + rest.sum(),
            List::Nil => 0,
        }
    }
}

#[derive(Debug)]
struct Node {
    name: String,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<Rc<Node>>>,
}

impl Node {
    fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        })
    }

    fn adopt(parent: &Rc<Node>, child: Rc<Node>) {
        *child.parent.borrow_mut() = Rc::downgrade(parent);
        parent.children.borrow_mut().push(child);
    }
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Shared and mutable references")?;
    let mut x = 10;
    {
        let r = &x;
        writeln!(out, "x = {}, read through &x = {}", x, *r)?;
    }
    bump(&mut x, 5);
    writeln!(out, "after bump(&mut x, 5): x = {}", x)?;
    let (mut a, mut b) = (1, 2);
    swap_values(&mut a, &mut b);
    writeln!(out, "after swap: a = {}, b = {}", a, b)?;
    writeln!(
        out,
        "{}",
        t.info("Many & readers or one &mut writer, never both at once")
    )?;

    section(out, t, "2. Box for heap allocation and recursive types")?;
    let boxed = Box::new(42);
    writeln!(out, "Box::new(42) derefs to {}", *boxed)?;
    let list = List::from_slice(&[1, 2, 3]);
    writeln!(out, "list = {:?}", list)?;
    writeln!(out, "sum of list = {}", list.sum())?;

    section(out, t, "3. Rc for shared ownership")?;
    let shared = Rc::new(String::from("shared data"));
    writeln!(
        out,
        "strong count after creation: {}",
        Rc::strong_count(&shared)
    )?;
    {
        let _second = Rc::clone(&shared);
        writeln!(
            out,
            "strong count with a clone: {}",
            Rc::strong_count(&shared)
        )?;
    }
    writeln!(
        out,
        "strong count after clone dropped: {}",
        Rc::strong_count(&shared)
    )?;

    section(out, t, "4. RefCell for interior mutability")?;
    let counter = Rc::new(RefCell::new(0));
    let handles: Vec<_> = (0..3).map(|_| Rc::clone(&counter)).collect();
    for h in &handles {
        *h.borrow_mut() += 1;
    }
    writeln!(
        out,
        "counter bumped through 3 handles: {}",
        counter.borrow()
    )?;
    let reader = counter.borrow();
    let conflict = counter.try_borrow_mut().is_err();
    writeln!(out, "try_borrow_mut while borrowed fails: {}", conflict)?;
    drop(reader);

    section(out, t, "5. Weak references break cycles")?;
    let root = Node::new("root");
    let leaf = Node::new("leaf");
    Node::adopt(&root, Rc::clone(&leaf));
    let parent_name = leaf
        .parent
        .borrow()
        .upgrade()
        .map(|p| p.name.clone())
        .unwrap_or_default();
    writeln!(out, "leaf's parent: {}", parent_name)?;
    writeln!(
        out,
        "root children: {}, root strong = {}, root weak = {}",
        root.children.borrow().len(),
        Rc::strong_count(&root),
        Rc::weak_count(&root)
    )?;
    writeln!(
        out,
        "{}",
        t.success("Weak parents let the tree drop cleanly")
    )?;

    Ok(())
}
