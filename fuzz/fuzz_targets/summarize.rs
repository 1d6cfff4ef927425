#![no_main]

//! Fuzz target for the summary pipeline with structured input.
//!
//! Builds plans from arbitrary addresses and action tokens and checks the
//! invariants that must hold for every plan.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use plansum_domain::{SummaryConfig, summarize};
use plansum_types::{PlanDocument, ResourceChange};

#[derive(Debug, Arbitrary)]
struct Input {
    exclude_reads: bool,
    no_trim: bool,
    records: Vec<(String, Vec<u8>)>,
}

const TOKENS: [&str; 6] = ["no-op", "create", "read", "update", "delete", "bogus"];

fuzz_target!(|input: Input| {
    let plan = PlanDocument {
        resource_changes: input
            .records
            .iter()
            .map(|(address, picks)| {
                let actions = picks
                    .iter()
                    .take(3)
                    .map(|p| TOKENS[*p as usize % TOKENS.len()]);
                ResourceChange::new(address.clone(), actions)
            })
            .collect(),
    };
    let config = SummaryConfig {
        exclude_reads: input.exclude_reads,
        no_trim: input.no_trim,
    };

    let summary = summarize(&plan, &config);

    assert!(summary.changes.len() + summary.unrecognized.len() <= plan.resource_changes.len());
    if config.no_trim {
        let mut remaining = plan.resource_changes.iter().map(|rc| rc.address.as_str());
        for address in summary.addresses() {
            assert!(remaining.any(|a| a == address), "order not preserved");
        }
    }
    let _ = plansum_render::render_text(&summary);
});
