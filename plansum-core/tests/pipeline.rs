use plansum_core::adapters::{BufferWriter, InMemoryPlanSource};
use plansum_core::pipeline::{ToolError, run_summary, write_summary};
use plansum_core::settings::{OutputFormat, SummarySettings};
use plansum_core::{Category, PlanLoadError};
use pretty_assertions::assert_eq;

fn plan_json() -> &'static str {
    r#"{
        "format_version": "1.2",
        "resource_changes": [
            { "address": "module.stack.aws_instance.web", "change": { "actions": ["create"] } },
            { "address": "module.stack.aws_instance.db", "change": { "actions": ["no-op"] } },
            { "address": "module.stack.null_resource.weird", "change": { "actions": ["create", "create"] } },
            { "address": "module.stack.data.aws_ami.ubuntu", "change": { "actions": ["read"] } },
            { "address": "module.stack.google_storage_bucket.logs", "change": { "actions": ["create", "delete"] } },
            { "address": "module.stack.google_compute_address.old", "change": { "actions": ["delete"] } }
        ]
    }"#
}

fn run(settings: SummarySettings, input: &str) -> Result<String, ToolError> {
    let outcome = run_summary(&settings, &InMemoryPlanSource::new(input))?;
    let mut writer = BufferWriter::default();
    write_summary(&outcome, &mut writer).expect("write");
    Ok(writer.buf)
}

#[test]
fn text_run_prints_diagnostics_then_changes() {
    let out = run(SummarySettings::default(), plan_json()).unwrap();
    assert_eq!(
        out,
        "\
unknown change sequence of [create, create] for module.stack.null_resource.weird
(  create) aws_instance.web
(    read) data.aws_ami.ubuntu
(recreate) google_storage_bucket.logs
(  delete) google_compute_address.old
"
    );
}

#[test]
fn exclude_reads_and_no_trim() {
    let settings = SummarySettings {
        exclude_reads: true,
        no_trim: true,
        ..SummarySettings::default()
    };
    let out = run(settings, plan_json()).unwrap();
    assert_eq!(
        out,
        "\
unknown change sequence of [create, create] for module.stack.null_resource.weird
(  create) module.stack.aws_instance.web
(recreate) module.stack.google_storage_bucket.logs
(  delete) module.stack.google_compute_address.old
"
    );
}

#[test]
fn no_surviving_changes_writes_nothing() {
    let input = r#"{"resource_changes":[{"address":"a","change":{"actions":["no-op"]}}]}"#;
    let out = run(SummarySettings::default(), input).unwrap();
    assert_eq!(out, "");
}

#[test]
fn missing_actions_are_reported_not_fatal() {
    let input = r#"{
        "resource_changes": [
            { "address": "a", "change": {} },
            { "address": "b", "change": { "actions": null } },
            { "address": "module.x.c", "change": { "actions": ["create"] } }
        ]
    }"#;
    let out = run(SummarySettings::default(), input).unwrap();
    assert_eq!(
        out,
        "\
unknown change sequence of [] for a
unknown change sequence of [] for b
(  create) module.x.c
"
    );
}

#[test]
fn null_resource_changes_writes_nothing() {
    let out = run(SummarySettings::default(), r#"{"resource_changes": null}"#).unwrap();
    assert_eq!(out, "");
}

#[test]
fn malformed_json_is_a_load_error() {
    let err = run(SummarySettings::default(), "{ nope").unwrap_err();
    assert!(matches!(err, ToolError::Load(PlanLoadError::Decode(_))));
    assert_eq!(err.to_string(), "error decoding plan json");
}

#[test]
fn json_format_reports_unrecognized_in_document() {
    let settings = SummarySettings {
        format: OutputFormat::Json,
        ..SummarySettings::default()
    };
    let outcome = run_summary(&settings, &InMemoryPlanSource::new(plan_json())).unwrap();
    assert!(!outcome.rendered.contains("unknown change sequence"));

    let v: serde_json::Value = serde_json::from_str(&outcome.rendered).expect("json");
    assert_eq!(v["changes"].as_array().expect("changes").len(), 4);
    assert_eq!(
        v["unrecognized"][0]["address"],
        "module.stack.null_resource.weird"
    );
    assert_eq!(outcome.summary.count(Category::Recreate), 1);
}

#[test]
fn markdown_format_renders_heading() {
    let settings = SummarySettings {
        format: OutputFormat::Markdown,
        ..SummarySettings::default()
    };
    let out = run(settings, plan_json()).unwrap();
    assert!(out.starts_with("# plan summary\n"));
    assert!(out.contains("- `recreate` google_storage_bucket.logs\n"));
}
