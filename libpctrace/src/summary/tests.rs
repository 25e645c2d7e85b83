use crate::{PcTrace, TracePoint};

use super::TraceSummary;

fn trace_of(pcs: &[u64]) -> PcTrace {
    pcs.iter()
        .enumerate()
        .map(|(index, &pc)| TracePoint {
            index: index as u64 + 1,
            pc,
        })
        .collect()
}

#[test]
fn loop_is_counted_as_backward_jumps() {
    let summary = TraceSummary::from_trace(&trace_of(&[
        0x1600, 0x1602, 0x1604, 0x1602, 0x1604, 0x1602, 0x1604, 0x1606,
    ]));

    assert_eq!(summary.instructions, 8);
    assert_eq!(summary.lowest_pc, Some(0x1600));
    assert_eq!(summary.highest_pc, Some(0x1606));
    assert_eq!(summary.distinct_pcs, 4);
    assert_eq!(summary.backward_jumps, 2);
}

#[test]
fn empty_trace_has_no_pc_range() {
    let summary = TraceSummary::from_trace(&PcTrace::new());

    assert_eq!(summary, TraceSummary::default());
    assert_eq!(
        summary.to_string(),
        "0 traced instructions, 0 distinct PCs, 0 backward jumps"
    );
}

#[test]
fn display_uses_tracer_pc_format() {
    let summary = TraceSummary::from_trace(&trace_of(&[0x1a, 0x0c]));

    assert_eq!(
        summary.to_string(),
        "2 traced instructions, PC $0000000c..=$0000001a, 2 distinct PCs, 1 backward jumps"
    );
}
