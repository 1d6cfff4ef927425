#![no_main]

//! Fuzz target for plan JSON decoding.
//!
//! Feeds arbitrary bytes to the loader; decoding must fail cleanly, never panic.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = plansum_plan::load_plan(data);

    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Whatever decodes must also summarize and render.
    if let Ok(plan) = plansum_plan::parse_plan(s) {
        let summary =
            plansum_domain::summarize(&plan, &plansum_domain::SummaryConfig::default());
        let _ = plansum_render::render_text(&summary);
    }

    let _ = serde_json::from_str::<plansum_types::ResourceChange>(s);
});
