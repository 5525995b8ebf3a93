// src/csv.rs
use std::io::{self, Write};

use crate::check::{ResultLog, ResultRecord};
use crate::config::consts::{CSV_SEP, EXPORT_HEADERS};

/* ---------------- Writing ---------------- */

/// Write one row, every field quoted, embedded quotes doubled. No line ending.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        let escaped = cell.as_ref().replace('"', "\"\"");
        write!(w, "\"{}\"", escaped)?;
    }
    Ok(())
}

/* ---------------- Export-time transforms (no mutation of the log) ---------------- */

/// Prompt, Brand, Mentioned, Position. Raw text is never exported.
pub fn build_export_row(r: &ResultRecord) -> [String; 4] {
    [
        r.prompt().replace('\n', " "),
        s!(r.brand()),
        s!(r.mentioned()),
        s!(r.position()),
    ]
}

/// Serialize the log newest-first under a header row, rows joined by '\n'.
/// `None` for an empty log: there is nothing to download.
pub fn export_csv(log: &ResultLog) -> Option<Vec<u8>> {
    if log.is_empty() {
        return None;
    }

    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_row(&mut buf, &EXPORT_HEADERS, CSV_SEP);
    for r in log.iter() {
        buf.push(b'\n');
        let _ = write_row(&mut buf, &build_export_row(r), CSV_SEP);
    }
    Some(buf)
}

/// Same as `export_csv`, as text (clipboard path).
pub fn export_string(log: &ResultLog) -> Option<String> {
    export_csv(log).map(|buf| match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_quotes_every_field() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b,c", ""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), r#""a","b,c","""#);
    }

    #[test]
    fn prompt_newlines_flattened() {
        let r = ResultRecord::new("line one\nline two", "B", "Yes", "2", "raw\ntext");
        assert_eq!(build_export_row(&r)[0], "line one line two");
    }
}
