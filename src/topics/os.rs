//! Environment variables, platform details and the current process.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use super::section;
use crate::ui::Theme;

const DEMO_VAR: &str = "RUSTEDGE_DEMO";

/// Read an env var, parsing it and falling back when unset or invalid.
fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

/// Split a PATH-style variable into its entries.
fn split_paths(value: &str) -> Vec<PathBuf> {
    env::split_paths(value).collect()
}

fn describe_path(path: &Path) -> String {
    format!(
        "file_name={:?} extension={:?} parent={:?}",
        path.file_name().and_then(|s| s.to_str()),
        path.extension().and_then(|s| s.to_str()),
        path.parent().map(Path::display).map(|d| d.to_string())
    )
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Environment variables")?;
    let previous = env::var_os(DEMO_VAR);
    env::set_var(DEMO_VAR, "42");
    writeln!(out, "{} = {:?}", DEMO_VAR, env::var(DEMO_VAR).ok())?;
    writeln!(out, "parsed as u32: {}", env_or::<u32>(DEMO_VAR, 0))?;
    env::remove_var(DEMO_VAR);
    writeln!(out, "after remove_var: {:?}", env::var(DEMO_VAR).ok())?;
    writeln!(out, "fallback when unset: {}", env_or::<u32>(DEMO_VAR, 8))?;
    if let Some(value) = previous {
        env::set_var(DEMO_VAR, value);
    }
    let visible = env::vars_os().count();
    writeln!(out, "{} variables visible to this process", visible)?;

    section(out, t, "2. Command-line arguments")?;
    let args: Vec<String> = env::args().collect();
    writeln!(out, "argc = {}", args.len())?;
    if let Some(program) = args.first() {
        let name = Path::new(program)
            .file_name()
            .map_or_else(|| program.clone(), |n| n.to_string_lossy().into_owned());
        writeln!(out, "program = {}", name)?;
    }

    section(out, t, "3. Platform")?;
    let (os, family, arch) = (env::consts::OS, env::consts::FAMILY, env::consts::ARCH);
    writeln!(out, "os = {}, family = {}, arch = {}", os, family, arch)?;
    let separator = if cfg!(windows) { ';' } else { ':' };
    writeln!(out, "path separator for lists: {:?}", separator)?;
    let joined = env::join_paths(["/usr/local/bin", "/usr/bin"])
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let entries = split_paths(&joined).len();
    writeln!(out, "join_paths -> {:?} ({} entries)", joined, entries)?;

    section(out, t, "4. Process and working directory")?;
    writeln!(out, "pid = {}", process::id())?;
    match env::current_dir() {
        Ok(dir) => writeln!(out, "current_dir is absolute: {}", dir.is_absolute())?,
        Err(e) => writeln!(out, "{}", t.error(&e.to_string()))?,
    }
    let temp = env::temp_dir();
    writeln!(out, "temp_dir exists: {}", temp.exists())?;
    match env::current_exe() {
        Ok(exe) => writeln!(out, "current_exe named: {}", exe.file_name().is_some())?,
        Err(e) => writeln!(out, "{}", t.warning(&e.to_string()))?,
    }

    section(out, t, "5. Paths")?;
    writeln!(
        out,
        "{}",
        describe_path(Path::new("/var/log/app/server.log"))
    )?;
    let home = dirs::home_dir().map(|h| h.join(".config").join("rustedge"));
    writeln!(out, "config under home: {}", home.is_some())?;
    if let Some(dir) = crate::logging::log_directory() {
        writeln!(out, "this program logs under: {}", dir.display())?;
    }
    writeln!(
        out,
        "{}",
        t.info("process::exit skips destructors; return ExitCode instead")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_or() {
        env::set_var(DEMO_VAR, "17");
        assert_eq!(env_or::<u32>(DEMO_VAR, 0), 17);
        env::set_var(DEMO_VAR, "not a number");
        assert_eq!(env_or::<u32>(DEMO_VAR, 5), 5);
        env::remove_var(DEMO_VAR);
        assert_eq!(env_or::<u32>(DEMO_VAR, 9), 9);
    }

    #[test]
    fn test_describe_path() {
        assert_eq!(
            describe_path(Path::new("/a/b.txt")),
            "file_name=Some(\"b.txt\") extension=Some(\"txt\") parent=Some(\"/a\")"
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_split_paths() {
        assert_eq!(
            split_paths("/bin:/usr/bin"),
            vec![PathBuf::from("/bin"), PathBuf::from("/usr/bin")]
        );
    }

    #[test]
    #[serial]
    fn test_output_restores_env() {
        env::remove_var(DEMO_VAR);
        let text = super::super::capture(run);
        assert!(text.contains("RUSTEDGE_DEMO = Some(\"42\")"));
        assert!(text.contains("after remove_var: None"));
        assert!(text.contains("fallback when unset: 8"));
        assert!(env::var(DEMO_VAR).is_err());
    }
}
