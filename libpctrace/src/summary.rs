use std::{collections::HashSet, fmt::Display};

use crate::PcTrace;

#[cfg(test)]
mod tests;

/// Control-flow overview of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceSummary {
    pub instructions: usize,
    pub lowest_pc: Option<u64>,
    pub highest_pc: Option<u64>,
    pub distinct_pcs: usize,
    /// Transitions to a lower PC than the previous traced one.
    pub backward_jumps: usize,
}

impl TraceSummary {
    pub fn from_trace(trace: &PcTrace) -> Self {
        let pcs = trace.program_counters();

        Self {
            instructions: trace.len(),
            lowest_pc: pcs.iter().copied().min(),
            highest_pc: pcs.iter().copied().max(),
            distinct_pcs: pcs.iter().collect::<HashSet<_>>().len(),
            backward_jumps: pcs.windows(2).filter(|pair| pair[1] < pair[0]).count(),
        }
    }
}

impl Display for TraceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} traced instructions", self.instructions)?;

        if let (Some(lowest), Some(highest)) = (self.lowest_pc, self.highest_pc) {
            write!(f, ", PC ${:08x}..=${:08x}", lowest, highest)?;
        }

        write!(
            f,
            ", {} distinct PCs, {} backward jumps",
            self.distinct_pcs, self.backward_jumps
        )
    }
}
