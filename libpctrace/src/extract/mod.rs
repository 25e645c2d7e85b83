use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{PcTrace, TraceError, TracePoint};


lazy_static! {
    static ref TRACE_LINE: Regex =
        Regex::new(r"^\s*\[([0-9]+)\]\s+PC:\s+\$([0-9A-Fa-f]+)").unwrap();

    // Anything starting like this was meant to be a trace line.
    static ref TRACE_PREFIX: Regex = Regex::new(r"^\s*\[[0-9]+\]").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch {
    Trace(TracePoint),
    NotTrace,
    Malformed,
}

pub fn parse_trace_line(line: &str) -> LineMatch {
    let Some(captures) = TRACE_LINE.captures(line) else {
        return if TRACE_PREFIX.is_match(line) {
            LineMatch::Malformed
        } else {
            LineMatch::NotTrace
        };
    };

    // Both groups are non-empty digit runs, so only overflow can fail here.
    let index = captures[1].parse::<u64>();
    let pc = u64::from_str_radix(&captures[2], 16);

    match (index, pc) {
        (Ok(index), Ok(pc)) => LineMatch::Trace(TracePoint { index, pc }),
        _ => LineMatch::Malformed,
    }
}

/// Single-pass scanner turning a tracer log into a [`PcTrace`].
///
/// Lines that aren't trace lines are skipped. In strict mode, lines that start
/// like a trace line but don't decode abort the extraction instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    strict: bool,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<PcTrace, TraceError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| TraceError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Extracting PC trace from {}", path.display());

        // The reader owns the file, so the handle is closed when this returns.
        self.extract_reader(BufReader::new(file))
    }

    pub fn extract_reader<R: BufRead>(&self, mut reader: R) -> Result<PcTrace, TraceError> {
        let mut trace = PcTrace::new();
        let mut buffer = Vec::new();
        let mut line_number = 0;

        loop {
            line_number += 1;
            buffer.clear();

            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|source| TraceError::Read {
                    line_number,
                    source,
                })?;

            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            let line = line.trim_end_matches(['\n', '\r']);

            match parse_trace_line(line) {
                LineMatch::Trace(point) => trace.push(point),
                LineMatch::NotTrace => {
                    log::trace!("Skipping line {}: {:?}", line_number, line);
                }
                LineMatch::Malformed if self.strict => {
                    return Err(TraceError::MalformedLine {
                        line_number,
                        line: line.to_string(),
                    });
                }
                LineMatch::Malformed => {
                    log::debug!("Skipping malformed trace line {}: {:?}", line_number, line);
                }
            }
        }

        log::debug!(
            "Extracted {} trace points from {} lines",
            trace.len(),
            line_number - 1
        );

        Ok(trace)
    }
}

pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<PcTrace, TraceError> {
    Extractor::new().extract_file(path)
}
