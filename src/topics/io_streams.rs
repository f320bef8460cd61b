//! The `Read`, `Write` and `BufRead` traits and their adapters.

use std::io::{self, BufRead, BufReader, Cursor, Read, Write};

use super::section;
use crate::ui::Theme;

/// Counts bytes and writes on their way to the inner writer.
struct CountingWriter<W> {
    inner: W,
    bytes: usize,
    writes: usize,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes: 0,
            writes: 0,
        }
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n;
        self.writes += 1;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Reader that upper-cases ASCII as it passes through.
struct UppercaseReader<R> {
    inner: R,
}

impl<R: Read> Read for UppercaseReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        buf[..n].make_ascii_uppercase();
        Ok(n)
    }
}

/// Generic over any reader: count words without loading everything up front.
fn word_count<R: BufRead>(reader: R) -> io::Result<usize> {
    let mut total = 0;
    for line in reader.lines() {
        total += line?.split_whitespace().count();
    }
    Ok(total)
}

/// Copy from a reader to a writer and also return a copy of what passed.
fn tee<R: Read, W: Write>(mut reader: R, writer: &mut W) -> io::Result<Vec<u8>> {
    let mut seen = Vec::new();
    let mut buf = [0u8; 8];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
        seen.extend_from_slice(&buf[..n]);
    }
    Ok(seen)
}

pub fn run(out: &mut dyn Write, t: &Theme) -> io::Result<()> {
    section(out, t, "1. Reading from in-memory sources")?;
    let mut text = String::new();
    Cursor::new("Hello, Reader!").read_to_string(&mut text)?;
    writeln!(out, "read_to_string -> {:?}", text)?;
    let mut chunk = [0u8; 5];
    let mut cursor = Cursor::new(b"abcdefghij".to_vec());
    cursor.read_exact(&mut chunk)?;
    let head = String::from_utf8_lossy(&chunk);
    let position = cursor.position();
    writeln!(out, "read_exact 5 -> {:?}, position now {}", head, position)?;

    section(out, t, "2. Writing into buffers")?;
    let mut buffer: Vec<u8> = Vec::new();
    write!(buffer, "{}-{}", "left", "right")?;
    buffer.write_all(b"!")?;
    writeln!(
        out,
        "Vec<u8> as Write -> {:?}",
        String::from_utf8_lossy(&buffer)
    )?;

    section(out, t, "3. io::copy")?;
    let mut source = Cursor::new("copied through io::copy");
    let mut sink_buf = Vec::new();
    let copied = io::copy(&mut source, &mut sink_buf)?;
    writeln!(out, "{} bytes copied", copied)?;
    let discarded = io::copy(&mut Cursor::new(vec![0u8; 1024]), &mut io::sink())?;
    writeln!(out, "{} bytes discarded into io::sink", discarded)?;

    section(out, t, "4. Adapters: chain, take, bytes")?;
    let mut joined = String::new();
    Cursor::new("first ").chain(Cursor::new("second")).read_to_string(&mut joined)?;
    writeln!(out, "chain -> {:?}", joined)?;
    let mut limited = String::new();
    Cursor::new("only the first eight").take(8).read_to_string(&mut limited)?;
    writeln!(out, "take(8) -> {:?}", limited)?;
    let vowels = Cursor::new("streaming")
        .bytes()
        .filter_map(Result::ok)
        .filter(|b| b"aeiou".contains(b))
        .count();
    writeln!(out, "vowels via bytes(): {}", vowels)?;

    section(out, t, "5. BufRead")?;
    let data = "one two\nthree\n\nfour five six\n";
    writeln!(
        out,
        "lines: {}",
        BufReader::new(data.as_bytes()).lines().count()
    )?;
    writeln!(out, "words: {}", word_count(data.as_bytes())?)?;
    let mut first = String::new();
    Cursor::new(data).read_line(&mut first)?;
    writeln!(out, "read_line keeps the newline: {:?}", first)?;

    section(out, t, "6. Custom readers and writers")?;
    let mut counter = CountingWriter::new(Vec::new());
    writeln!(counter, "alpha")?;
    writeln!(counter, "beta")?;
    let (bytes, writes) = (counter.bytes, counter.writes);
    writeln!(out, "CountingWriter: {} bytes in {} writes", bytes, writes)?;
    let inner = counter.into_inner();
    writeln!(out, "inner buffer holds {} bytes", inner.len())?;
    let mut shouted = String::new();
    let mut reader = UppercaseReader {
        inner: Cursor::new("quiet words"),
    };
    reader.read_to_string(&mut shouted)?;
    writeln!(out, "UppercaseReader -> {:?}", shouted)?;
    let mut mirror = Vec::new();
    let seen = tee(Cursor::new("tee'd data"), &mut mirror)?;
    writeln!(out, "tee: both sides equal = {}", seen == mirror)?;
    writeln!(
        out,
        "{}",
        t.info("Code generic over Read/Write works with any byte stream")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_writer() {
        let mut w = CountingWriter::new(Vec::new());
        w.write_all(b"abc").unwrap();
        w.write_all(b"de").unwrap();
        assert_eq!(w.bytes, 5);
        assert_eq!(w.into_inner(), b"abcde");
    }

    #[test]
    fn test_uppercase_reader() {
        let mut s = String::new();
        UppercaseReader {
            inner: Cursor::new("mixed Case 1"),
        }
        .read_to_string(&mut s)
        .unwrap();
        assert_eq!(s, "MIXED CASE 1");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("a b\n\n c ".as_bytes()).unwrap(), 3);
        assert_eq!(word_count(io::empty()).unwrap(), 0);
    }

    #[test]
    fn test_tee_copies_everything() {
        let input = "longer than one eight byte buffer";
        let mut mirror = Vec::new();
        let seen = tee(input.as_bytes(), &mut mirror).unwrap();
        assert_eq!(seen, input.as_bytes());
        assert_eq!(mirror, input.as_bytes());
    }

    #[test]
    fn test_output() {
        let text = super::super::capture(run);
        assert!(text.contains("read_exact 5 -> \"abcde\", position now 5"));
        assert!(text.contains("23 bytes copied"));
        assert!(text.contains("1024 bytes discarded into io::sink"));
        assert!(text.contains("chain -> \"first second\""));
        assert!(text.contains("take(8) -> \"only the\""));
        assert!(text.contains("words: 6"));
        assert!(text.contains("CountingWriter: 11 bytes"));
    }
}
