//! The terminal palette used across every topic.

use std::io::{self, Write};

use super::section;
use crate::ui::Theme;

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "Basic colors:")?;
    writeln!(out, "{}", t.red("This is red text"))?;
    writeln!(out, "{}", t.green("This is green text"))?;
    writeln!(out, "{}", t.yellow("This is yellow text"))?;
    writeln!(out, "{}", t.blue("This is blue text"))?;
    writeln!(out, "{}", t.purple("This is purple text"))?;
    writeln!(out, "{}", t.cyan("This is cyan text"))?;
    writeln!(out, "{}", t.bold("This is bold text"))?;
    writeln!(out, "{}", t.dim("This is dim text"))?;

    section(out, t, "Status messages:")?;
    writeln!(out, "{}", t.success("Operation completed successfully!"))?;
    writeln!(out, "{}", t.warning("This is a warning message"))?;
    writeln!(out, "{}", t.error("This is an error message"))?;
    writeln!(out, "{}", t.info("This is an info message"))?;

    section(out, t, "Code examples:")?;
    writeln!(out, "Variable: {}", t.code("my_variable"))?;
    writeln!(out, "Function: {}", t.code("fn main()"))?;

    if !t.is_enabled() {
        writeln!(out)?;
        writeln!(
            out,
            "(styling is off: NO_COLOR is set, output is not a terminal, or color = \"never\")"
        )?;
    }

    Ok(())
}
