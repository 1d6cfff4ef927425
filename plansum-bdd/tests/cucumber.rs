use cucumber::gherkin::Step;
use cucumber::{World, given, then, when};
use plansum_bdd::{parse_actions, plan_json};
use plansum_core::adapters::{BufferWriter, InMemoryPlanSource};
use plansum_core::pipeline::{ToolError, run_summary, write_summary};
use plansum_core::settings::{OutputFormat, SummarySettings};

#[derive(Debug, Default, World)]
pub struct PlansumWorld {
    input: Option<String>,
    output: Option<String>,
    error: Option<String>,
}

fn output(world: &PlansumWorld) -> &str {
    world.output.as_deref().expect("summary output set")
}

fn change_lines(out: &str) -> usize {
    out.lines().filter(|l| l.starts_with('(')).count()
}

fn summarize(world: &mut PlansumWorld, settings: SummarySettings) {
    let input = world.input.clone().expect("plan input set");
    let result: Result<String, ToolError> =
        run_summary(&settings, &InMemoryPlanSource::new(input)).map(|outcome| {
            let mut writer = BufferWriter::default();
            write_summary(&outcome, &mut writer).expect("write summary");
            writer.buf
        });

    match result {
        Ok(out) => world.output = Some(out),
        Err(e) => world.error = Some(format!("{:#}", anyhow::Error::from(e))),
    }
}

#[given("a plan with the resource changes")]
async fn plan_with_changes(world: &mut PlansumWorld, step: &Step) {
    let table = step.table.as_ref().expect("data table");
    let records: Vec<(String, Vec<String>)> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| (row[0].clone(), parse_actions(&row[1])))
        .collect();
    world.input = Some(plan_json(&records));
}

#[given("a plan that is not valid JSON")]
async fn invalid_plan(world: &mut PlansumWorld) {
    world.input = Some("{ \"resource_changes\": [".to_string());
}

#[when("I summarize the plan")]
async fn run_default(world: &mut PlansumWorld) {
    summarize(world, SummarySettings::default());
}

#[when("I summarize the plan excluding reads")]
async fn run_excluding_reads(world: &mut PlansumWorld) {
    summarize(
        world,
        SummarySettings {
            exclude_reads: true,
            ..SummarySettings::default()
        },
    );
}

#[when("I summarize the plan without trimming")]
async fn run_without_trim(world: &mut PlansumWorld) {
    summarize(
        world,
        SummarySettings {
            no_trim: true,
            ..SummarySettings::default()
        },
    );
}

#[when("I summarize the plan as json")]
async fn run_as_json(world: &mut PlansumWorld) {
    summarize(
        world,
        SummarySettings {
            format: OutputFormat::Json,
            ..SummarySettings::default()
        },
    );
}

#[then("the output is")]
async fn assert_output_is(world: &mut PlansumWorld, step: &Step) {
    let expected = step.docstring.as_ref().expect("docstring");
    assert_eq!(output(world).trim_end(), expected.trim());
}

#[then(expr = "the output does not mention {string}")]
async fn assert_not_mentioned(world: &mut PlansumWorld, needle: String) {
    let out = output(world);
    assert!(!out.contains(&needle), "unexpected {needle} in:\n{out}");
}

#[then(expr = "the output contains the line {string}")]
async fn assert_contains_line(world: &mut PlansumWorld, line: String) {
    let out = output(world);
    assert!(out.lines().any(|l| l == line), "missing line {line} in:\n{out}");
}

#[then(expr = "the output has {int} change lines")]
async fn assert_change_line_count(world: &mut PlansumWorld, count: usize) {
    assert_eq!(change_lines(output(world)), count);
}

#[then(expr = "the json output has {int} changes and {int} unrecognized record")]
async fn assert_json_counts(world: &mut PlansumWorld, changes: usize, unrecognized: usize) {
    let v: serde_json::Value = serde_json::from_str(output(world)).expect("json output");
    assert_eq!(v["changes"].as_array().expect("changes").len(), changes);
    assert_eq!(
        v["unrecognized"].as_array().expect("unrecognized").len(),
        unrecognized
    );
}

#[then("the run fails with a decode error")]
async fn assert_decode_error(world: &mut PlansumWorld) {
    assert!(world.output.is_none(), "no output expected on failure");
    let err = world.error.as_deref().expect("error recorded");
    assert!(
        err.starts_with("error decoding plan json: "),
        "unexpected error: {err}"
    );
}

#[tokio::main]
async fn main() {
    let features_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("features");
    PlansumWorld::cucumber().run(features_path).await;
}
