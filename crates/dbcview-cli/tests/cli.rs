use std::fs;
use std::path::PathBuf;

use dbcview::{ViewOptions, run_main};
use dbcview_core::SelectionConfig;
use dbcview_dot::OutputFormat;
use dbcview_error::ErrorKind;
use tempfile::tempdir;

fn fixture_source() -> &'static str {
    r#"VERSION ""

BU_: VCU MOT CHG BMS

BO_ 192 MotorStatus: 8 MOT
 SG_ Rpm : 0|16@1+ (1,0) [0|20000] "rpm" VCU
 SG_ Temp : 16|8@1+ (1,-40) [-40|215] "degC" VCU,BMS

BO_ 16 VcuCommand: 8 VCU
 SG_ TorqueReq : 0|16@1+ (0.1,0) [0|6553.5] "Nm" MOT

BO_ 1008 ChargerStatus: 8 CHG
 SG_ Current : 0|16@1+ (0.1,0) [0|6553.5] "A" VCU,BMS
"#
}

fn write_fixture() -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("powertrain.dbc");
    fs::write(&file_path, fixture_source()).expect("write fixture");
    (dir, file_path)
}

fn base_options(file: PathBuf, out: PathBuf) -> ViewOptions {
    ViewOptions {
        filename: file,
        selection: SelectionConfig::default(),
        output_dir: Some(out),
        format: OutputFormat::Dot,
        view: false,
    }
}

#[test]
fn full_graph_writes_dot_source() {
    let (dir, file) = write_fixture();
    let opts = base_options(file, dir.path().to_path_buf());

    let report = run_main(&opts).expect("run");
    assert_eq!(report.title, "powertrain");
    assert_eq!(report.edge_count, 5);
    assert_eq!(report.artifact.source, dir.path().join("powertrain.gv"));

    let dot = fs::read_to_string(&report.artifact.source).expect("read dot");
    let first = r##""VCU" -> "MOT" [label="VcuCommand\n0x10 (16)", color="#ff0000""##;
    let last = r##""CHG" -> "BMS" [label="ChargerStatus\n0x3f0 (1008)", color="#0000ff""##;
    assert!(dot.contains(first), "{dot}");
    assert!(dot.contains(last), "{dot}");
}

#[test]
fn sender_receiver_filter_names_the_graph() {
    let (dir, file) = write_fixture();
    let mut opts = base_options(file, dir.path().to_path_buf());
    opts.selection.senders = vec!["MOT".into()];
    opts.selection.receivers = vec!["VCU".into()];

    let report = run_main(&opts).expect("run");
    assert_eq!(report.title, "powertrain from MOT to VCU");
    assert_eq!(report.edge_count, 1);
    assert_eq!(
        report.artifact.source,
        dir.path().join("powertrain_from_MOT_to_VCU.gv")
    );

    let dot = fs::read_to_string(&report.artifact.source).expect("read dot");
    assert!(dot.contains("color=\"#7f007f\""), "single id uses midpoint color: {dot}");
}

#[test]
fn unknown_node_aborts_without_artifact() {
    let (dir, file) = write_fixture();
    let out = dir.path().join("out");
    fs::create_dir(&out).expect("mkdir");
    let mut opts = base_options(file, out.clone());
    opts.selection.senders = vec!["ABS".into()];

    let err = run_main(&opts).expect_err("unknown sender");
    assert_eq!(err.kind(), ErrorKind::UnknownNodeName);
    assert_eq!(err.context_value("invalid"), Some("ABS"));
    assert_eq!(err.context_value("known"), Some("BMS, CHG, MOT, VCU"));
    assert_eq!(fs::read_dir(&out).expect("read out").count(), 0);
}

#[test]
fn empty_catalog_aborts() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("empty.dbc");
    fs::write(&file, "VERSION \"\"\n\nBU_:\n").expect("write");

    let err = run_main(&base_options(file, dir.path().to_path_buf())).expect_err("no nodes");
    assert_eq!(err.kind(), ErrorKind::EmptyCatalog);
}

#[test]
fn no_edges_still_produces_a_graph() {
    let (dir, file) = write_fixture();
    let mut opts = base_options(file, dir.path().to_path_buf());
    opts.selection.senders = vec!["BMS".into()];

    let report = run_main(&opts).expect("run");
    assert_eq!(report.edge_count, 0);
    assert_eq!(report.senders, vec!["BMS"]);
    let dot = fs::read_to_string(&report.artifact.source).expect("read dot");
    assert!(!dot.contains("->"));
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let opts = base_options(dir.path().join("nope.dbc"), dir.path().to_path_buf());
    let err = run_main(&opts).expect_err("missing file");
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[test]
fn directory_input_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let opts = base_options(dir.path().to_path_buf(), dir.path().to_path_buf());
    let err = run_main(&opts).expect_err("directory input");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.kind().is_user_error());
    assert!(err.message().contains("expected a DBC file"));
}
