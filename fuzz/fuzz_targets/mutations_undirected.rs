#![no_main]

use libfuzzer_sys::fuzz_target;

use graphwalk::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<u8, u8>| {
    // Non-negative weights keep the shortest-path algorithms away from
    // overflows on negative cycles.
    let mut graph = Graph::<u8, i64>::new_undirected();

    for op in ops {
        op.map_weight(i64::from).apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
