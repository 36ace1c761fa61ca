//! Rendering of realistic multi-project, multi-toolchain measurement sets.

use perfplot_chart::ChartError;
use perfplot_config::load_config_from_str;
use perfplot_model::MeasurementSet;
use perfplot_render::{PageRenderer, RenderError, RenderRequest};
use serde_json::{json, Value};
use std::sync::Once;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    });
}

fn parse_binding(out: &str, name: &str) -> Value {
    let prefix = format!("var {name} = ");
    let body = out
        .strip_prefix(&prefix)
        .and_then(|rest| rest.strip_suffix(";\n"))
        .unwrap_or_else(|| panic!("unexpected output framing: {out}"));
    serde_json::from_str(body).unwrap()
}

fn toolchain(color: &str, base: f64) -> Value {
    let s = |offset: f64| json!({"data": [base + offset, null], "color": color});
    json!({
        "runtime": {"total": s(0.0), "synthesis": s(1.0), "link design": s(2.0)},
        "wirelength": s(3.0),
        "maximum_memory_use": s(4.0),
        "freq": {"clk_sys": s(5.0)},
        "synth_resources": {"LUT": s(6.0), "dff": s(7.0)},
        "impl_resources": {"lut": s(8.0), "DFF": s(9.0)},
        "resources": {"lut": s(10.0), "dff": s(11.0)}
    })
}

fn measurement_set() -> MeasurementSet {
    let device = |toolchains: Value| {
        json!({
            "dates": ["2021-06-01T00:00:00", "2021-06-02T00:00:00"],
            "clocks": ["clk_sys"],
            "resources": ["LUT", "DFF"],
            "runtime": ["total", "synthesis", "link design"],
            "graph_data": toolchains
        })
    };
    let doc = json!({
        "picorv32": {
            "xc7a35t": device(json!({
                "vivado": toolchain("#1f77b4", 100.0),
                "yosys-vivado": toolchain("#ff7f0e", 200.0)
            })),
            "ice40-hx8k": device(json!({
                "nextpnr-ice40": toolchain("#2ca02c", 300.0)
            }))
        },
        "blinky": {
            "xc7a35t": device(json!({}))
        }
    });
    MeasurementSet::from_json_str(&doc.to_string()).unwrap()
}

#[test]
fn summary_covers_every_project_and_device() {
    init_tracing();
    let out = PageRenderer::default().render_summary(&measurement_set()).unwrap();
    let value = parse_binding(&out, "data");

    let runtime = value["picorv32"]["xc7a35t"]["runtime"].as_array().unwrap();
    let labels: Vec<&str> = runtime.iter().map(|s| s["label"].as_str().unwrap()).collect();
    assert_eq!(labels, vec!["xc7a35t-vivado", "xc7a35t-yosys-vivado"]);
    assert_eq!(runtime[0]["data"], json!([100.0, null]));

    assert_eq!(value["picorv32"]["ice40-hx8k"]["runtime"][0]["label"], "ice40-hx8k-nextpnr-ice40");
    assert_eq!(value["blinky"]["xc7a35t"]["runtime"], json!([]));
}

#[test]
fn full_lowercases_resource_keys() {
    init_tracing();
    let out = PageRenderer::default().render_full(&measurement_set()).unwrap();
    let value = parse_binding(&out, "data");
    let resources = value["picorv32"]["xc7a35t"]["resources"].as_object().unwrap();
    let mut keys: Vec<&String> = resources.keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["dff", "lut"]);
    assert_eq!(resources["lut"][1]["data"], json!([210.0, null]));
}

#[test]
fn full_keeps_empty_device_dimensions() {
    let out = PageRenderer::default().render_full(&measurement_set()).unwrap();
    let value = parse_binding(&out, "data");
    let blinky = &value["blinky"]["xc7a35t"];
    assert_eq!(blinky["wirelength"], json!([]));
    assert_eq!(blinky["freq"], json!({"clk_sys": []}));
    assert_eq!(blinky["resources"], json!({"lut": [], "dff": []}));
}

#[test]
fn per_project_renders_every_runtime_stage() {
    init_tracing();
    let out = PageRenderer::default()
        .render(&measurement_set(), RenderRequest::PerProject { project: "picorv32" })
        .unwrap();
    let value = parse_binding(&out, "data_picorv32");
    let device = &value["xc7a35t"];

    let runtime = device["runtime"].as_object().unwrap();
    let mut stages: Vec<&String> = runtime.keys().collect();
    stages.sort();
    assert_eq!(stages, vec!["link_design", "synthesis", "total"]);
    assert_eq!(runtime["link_design"][0]["data"], json!([102.0, null]));
    assert_eq!(runtime["synthesis"][1]["label"], "yosys-vivado");

    assert_eq!(device["synth_resources"]["lut"][0]["data"], json!([106.0, null]));
    assert_eq!(device["impl_resources"]["dff"][0]["data"], json!([109.0, null]));
    assert_eq!(device["memory"][0]["borderColor"], "#1f77b4");
}

#[test]
fn per_project_output_preserves_stage_order() {
    let out = PageRenderer::default()
        .render_project(&measurement_set(), "picorv32")
        .unwrap();
    let total = out.find("\"total\"").unwrap();
    let synthesis = out.find("\"synthesis\"").unwrap();
    let link = out.find("\"link_design\"").unwrap();
    assert!(total < synthesis && synthesis < link);
}

#[test]
fn configured_bindings_are_used() {
    let config = load_config_from_str(
        "[render]\nbinding = \"perf\"\nproject_prefix = \"proj_\"\npretty = false\n",
    )
    .unwrap();
    let renderer = PageRenderer::new(&config.render);
    let set = measurement_set();
    assert!(renderer.render_full(&set).unwrap().starts_with("var perf = {"));
    assert!(renderer
        .render_project(&set, "blinky")
        .unwrap()
        .starts_with("var proj_blinky = {"));
}

#[test]
fn length_mismatch_surfaces_as_chart_error() {
    let mut doc: Value = serde_json::to_value(measurement_set()).unwrap();
    doc["picorv32"]["xc7a35t"]["graph_data"]["vivado"]["wirelength"]["data"] = json!([1.0]);
    let set: MeasurementSet = serde_json::from_value(doc).unwrap();

    let err = PageRenderer::default().render_full(&set).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Chart(ChartError::LengthMismatch { expected: 2, actual: 1, .. })
    ));

    let lenient = load_config_from_str("[render]\nvalidate_lengths = false\n").unwrap();
    assert!(PageRenderer::new(&lenient.render).render_full(&set).is_ok());
}
