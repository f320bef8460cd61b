//! Modules, visibility and re-exports.

use std::io::{self, Write};

use super::section;
use crate::ui::Theme;

mod shop {
    /// Re-export so callers write `shop::Item` instead of `shop::catalog::Item`.
    pub use self::catalog::Item;

    pub const CURRENCY: &str = "EUR";

    pub mod catalog {
        #[derive(Debug, Clone)]
        pub struct Item {
            pub name: String,
            // Private: only code inside `catalog` may set it directly
            price_cents: u64,
        }

        impl Item {
            pub fn new(name: &str, price_cents: u64) -> Self {
                Self {
                    name: name.to_string(),
                    price_cents,
                }
            }

            pub fn price_cents(&self) -> u64 {
                self.price_cents
            }

            pub(in crate::topics::modules::shop) fn discount(&mut self, percent: u64) {
                self.price_cents -= self.price_cents * percent.min(100) / 100;
            }
        }
    }

    pub mod checkout {
        use super::catalog::Item;

        /// Total price; applies the bulk discount through a module-restricted method.
        pub fn total(items: &[Item]) -> u64 {
            let mut items = items.to_vec();
            if items.len() >= 3 {
                for item in &mut items {
                    item.discount(10);
                }
            }
            items.iter().map(Item::price_cents).sum()
        }

        pub(crate) fn format_cents(cents: u64) -> String {
            format!("{}.{:02} {}", cents / 100, cents % 100, super::CURRENCY)
        }
    }
}

use shop::checkout::{format_cents, total};
use shop::Item;

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Nested modules and paths")?;
    let coffee = Item::new("coffee", 350);
    let price = format_cents(coffee.price_cents());
    writeln!(out, "re-exported Item: {} costs {}", coffee.name, price)?;
    writeln!(out, "shop::CURRENCY = {}", shop::CURRENCY)?;

    section(out, t, "2. Visibility levels")?;
    writeln!(
        out,
        "  pub            visible wherever the parent module is"
    )?;
    writeln!(out, "  pub(crate)     visible anywhere in this crate")?;
    writeln!(
        out,
        "  pub(in path)   visible inside the named ancestor module"
    )?;
    writeln!(
        out,
        "  (private)      visible in the defining module and its children"
    )?;
    writeln!(
        out,
        "{}",
        t.dim("`price_cents` is private, so reads go through a getter")
    )?;

    section(out, t, "3. Behavior behind a module boundary")?;
    let cart = vec![
        Item::new("coffee", 350),
        Item::new("bagel", 225),
        Item::new("juice", 425),
    ];
    let bulk = format_cents(total(&cart));
    writeln!(out, "cart of {} items, bulk total = {}", cart.len(), bulk)?;
    writeln!(out, "first two only = {}", format_cents(total(&cart[..2])))?;
    writeln!(out, "{}", t.info("`mod foo` loads foo.rs or foo/mod.rs"))?;

    Ok(())
}
