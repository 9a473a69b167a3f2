//! Sample points + memory-efficient CSV loader with zero-allocation float parsing.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Public Row Structs ---
/// One `(x, y)` observation.  Series are expected in non-decreasing `x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for SamplePoint {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Stable in-place sort by `x`.  The plotting core never reorders points.
pub fn sort_by_x(points: &mut [SamplePoint]) {
    points.sort_by(|l, r| l.x.total_cmp(&r.x));
}

/// True if `x` never decreases along the series.
#[must_use]
pub fn is_sorted_by_x(points: &[SamplePoint]) -> bool {
    points.windows(2).all(|w| w[0].x <= w[1].x)
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount(usize),
    BadFloat { field: &'static str, text: String },
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount(0) if self.line == 0 => {
                write!(f, "no data rows found")
            }
            ParseErrorKind::BadColumnCount(n) => {
                write!(f, "line {}: expected 2 columns, got {}", self.line, n)
            }
            ParseErrorKind::BadFloat { field, text } => {
                write!(f, "line {}: invalid {} value '{}'", self.line, field, text)
            }
        }
    }
}
impl Error for ParseCsvError {}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// Rewrite U+2212 MINUS SIGN (`E2 88 92`) to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseCsvError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            field,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseCsvError {
            line,
            kind: ParseErrorKind::BadFloat {
                field,
                text: String::from_utf8_lossy(bytes).into_owned(),
            },
        })
    }
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Parse `x,y` rows.  Blank lines and `#` comments are skipped, as is a
/// leading header whose first field is not a number.
pub fn read_csv_fast<R: Read>(src: R) -> Result<Vec<SamplePoint>, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Vec::<SamplePoint>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if matches!(trim(&buf), [] | [b'#', ..]) {
            continue;
        }

        // simple header detection (non-numeric first field)
        if !saw_first {
            saw_first = true;
            let first = buf.iter().position(|&b| b == b',').unwrap_or(buf.len());
            if lexical_core::parse::<f64>(trim(&buf[..first])).is_err() {
                continue;
            }
        }

        let cols: Vec<&[u8]> = buf.split(|&b| b == b',').map(trim).collect();
        let [x, y] = cols.as_slice() else {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount(cols.len()),
            });
        };

        let x = parse_f64(x, line_no, "x")?;
        let y = parse_f64(y, line_no, "y")?;
        data.push(SamplePoint { x, y });
    }
    if data.is_empty() {
        return Err(ParseCsvError {
            line: 0,
            kind: ParseErrorKind::BadColumnCount(0),
        });
    }
    Ok(data)
}

pub fn read_csv_from_path(path: &str) -> Result<Vec<SamplePoint>, ParseCsvError> {
    if path == "-" {
        read_csv_fast(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv_fast(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}
