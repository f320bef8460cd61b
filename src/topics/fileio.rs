//! Files, buffered I/O and directories, all inside a throwaway temp dir.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::section;
use crate::ui::Theme;

/// Write one line per entry through a `BufWriter`.
fn write_lines(path: &Path, lines: &[&str]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}", line)
}

/// Stream a file line by line, transforming each into `dest`.
fn transform_lines(src: &Path, dest: &Path, f: impl Fn(&str) -> String) -> io::Result<usize> {
    let reader = BufReader::new(File::open(src)?);
    let mut writer = BufWriter::new(File::create(dest)?);
    let mut count = 0;
    for line in reader.lines() {
        writeln!(writer, "{}", f(&line?))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Parse simple `name,score` rows, skipping the header and malformed rows.
fn read_scores(path: &Path) -> io::Result<Vec<(String, u32)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    for line in reader.lines().skip(1) {
        let line = line?;
        if let Some((name, score)) = line.split_once(',') {
            if let Ok(score) = score.trim().parse() {
                rows.push((name.trim().to_string(), score));
            }
        }
    }
    Ok(rows)
}

fn sorted_listing(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let kind = if entry.file_type()?.is_dir() { "dir " } else { "file" };
        names.push(format!("{} {}", kind, entry.file_name().to_string_lossy()));
    }
    names.sort();
    Ok(names)
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    let dir = tempfile::tempdir()?;
    let notes = dir.path().join("notes.txt");

    section(out, t, "1. Writing and reading whole files")?;
    fs::write(&notes, "first line\n")?;
    let content = fs::read_to_string(&notes)?;
    writeln!(out, "fs::read_to_string -> {:?}", content)?;

    section(out, t, "2. Buffered writing and appending")?;
    write_lines(&notes, &["alpha", "beta", "gamma"])?;
    append_line(&notes, "delta")?;
    let reader = BufReader::new(File::open(&notes)?);
    for (n, line) in reader.lines().enumerate() {
        writeln!(out, "  {:>2}: {}", n + 1, line?)?;
    }

    section(out, t, "3. Line-by-line processing")?;
    let upper = dir.path().join("upper.txt");
    let count = transform_lines(&notes, &upper, |l| l.to_uppercase())?;
    let upper_text = fs::read_to_string(&upper)?;
    let lines: Vec<&str> = upper_text.lines().collect();
    writeln!(out, "transformed {} lines: {:?}", count, lines)?;

    section(out, t, "4. CSV-like data")?;
    let scores = dir.path().join("scores.csv");
    write_lines(&scores, &["name,score", "ada,91", "linus,x", "grace,88"])?;
    let rows = read_scores(&scores)?;
    writeln!(out, "valid rows: {:?}", rows)?;
    let best = rows.iter().max_by_key(|(_, s)| *s);
    if let Some((name, score)) = best {
        writeln!(
            out,
            "{}",
            t.success(&format!("top score: {} ({})", name, score))
        )?;
    }

    section(out, t, "5. Binary data")?;
    let blob = dir.path().join("data.bin");
    let numbers: [u32; 3] = [1, 256, 65_536];
    let bytes: Vec<u8> = numbers.iter().flat_map(|n| n.to_le_bytes()).collect();
    fs::write(&blob, &bytes)?;
    let mut raw = Vec::new();
    File::open(&blob)?.read_to_end(&mut raw)?;
    let decoded: Vec<u32> = raw
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    writeln!(out, "{} bytes on disk, decoded {:?}", raw.len(), decoded)?;

    section(out, t, "6. Metadata and directories")?;
    let meta = fs::metadata(&notes)?;
    writeln!(out, "size: {} bytes, file: {}", meta.len(), meta.is_file())?;
    writeln!(out, "readonly: {}", meta.permissions().readonly())?;
    fs::create_dir_all(dir.path().join("archive/2024"))?;
    fs::copy(&notes, dir.path().join("archive/2024/notes.txt"))?;
    fs::rename(&upper, dir.path().join("archive/upper.txt"))?;
    for entry in sorted_listing(dir.path())? {
        writeln!(out, "  {}", entry)?;
    }

    section(out, t, "7. Errors are values")?;
    match File::open(dir.path().join("missing.txt")) {
        Ok(_) => writeln!(out, "unexpectedly opened")?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            writeln!(out, "{}", t.warning("missing.txt: not found"))?
        }
        Err(e) => writeln!(out, "{}", t.error(&e.to_string()))?,
    }

    dir.close()?;
    writeln!(
        out,
        "{}",
        t.info("The temp dir and its files are removed on close")
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_append_transform() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        write_lines(&src, &["one", "two"]).unwrap();
        append_line(&src, "three").unwrap();
        let n = transform_lines(&src, &dest, |l| format!("<{}>", l)).unwrap();
        assert_eq!(n, 3);
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "<one>\n<two>\n<three>\n"
        );
    }

    #[test]
    fn test_read_scores_skips_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.csv");
        write_lines(&path, &["name,score", "a,1", "broken", "b, 2 "]).unwrap();
        assert_eq!(
            read_scores(&path).unwrap(),
            vec![("a".to_string(), 1), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn test_sorted_listing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("z.txt"), "").unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        assert_eq!(
            sorted_listing(dir.path()).unwrap(),
            vec!["dir  a", "file z.txt"]
        );
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        assert!(text.contains("fs::read_to_string -> \"first line\\n\""));
        assert!(text.contains("4: delta"));
        assert!(text.contains("transformed 4 lines"));
        assert!(text.contains("top score: ada (91)"));
        assert!(text.contains("12 bytes on disk, decoded [1, 256, 65536]"));
        assert!(text.contains("dir  archive"));
    }
}
