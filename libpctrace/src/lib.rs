use std::{io, path::PathBuf};

use thiserror::Error;

pub mod extract;
pub mod summary;


pub use extract::{extract_file, parse_trace_line, Extractor, LineMatch};
pub use summary::TraceSummary;

/// Where the tracer writes its log, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "../build/out.txt";

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Couldn't open trace log {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't read trace log at line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },

    #[error("Malformed trace line {line_number}: {line:?}")]
    MalformedLine { line_number: usize, line: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TracePoint {
    pub index: u64,
    pub pc: u64,
}

/// Instruction indices and program counters, correlated by position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PcTrace {
    instruction_indices: Vec<u64>,
    program_counters: Vec<u64>,
}

impl PcTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: TracePoint) {
        self.instruction_indices.push(point.index);
        self.program_counters.push(point.pc);
    }

    pub fn instruction_indices(&self) -> &[u64] {
        &self.instruction_indices
    }

    pub fn program_counters(&self) -> &[u64] {
        &self.program_counters
    }

    pub fn len(&self) -> usize {
        self.instruction_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruction_indices.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = TracePoint> + '_ {
        self.instruction_indices
            .iter()
            .zip(&self.program_counters)
            .map(|(&index, &pc)| TracePoint { index, pc })
    }
}

impl FromIterator<TracePoint> for PcTrace {
    fn from_iter<T: IntoIterator<Item = TracePoint>>(iter: T) -> Self {
        let mut trace = Self::new();
        for point in iter {
            trace.push(point);
        }
        trace
    }
}
