use std::fs;

use dbcview_dbc::load_file;
use dbcview_error::ErrorKind;
use tempfile::tempdir;

const BODY_BUS: &str = r#"VERSION "1.0"

BU_: BCM DOOR_FL DOOR_FR

BO_ 784 DoorCmd: 4 BCM
 SG_ LockFL : 0|1@1+ (1,0) [0|1] "" DOOR_FL
 SG_ LockFR : 1|1@1+ (1,0) [0|1] "" DOOR_FR

BO_ 800 DoorState: 2 DOOR_FL
 SG_ Open : 0|1@1+ (1,0) [0|1] "" BCM
"#;

#[test]
fn loads_nodes_and_messages_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("body.dbc");
    fs::write(&path, BODY_BUS).expect("write fixture");

    let db = load_file(&path).expect("load body.dbc");
    assert_eq!(db.nodes.len(), 3);
    assert_eq!(db.messages.len(), 2);

    let cmd = db
        .messages
        .iter()
        .find(|m| m.name == "DoorCmd")
        .expect("DoorCmd");
    assert!(cmd.is_sent_by("BCM"));
    assert!(cmd.is_received_by("DOOR_FR"));
}

#[test]
fn non_utf8_comments_do_not_abort_loading() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("latin1.dbc");
    let mut bytes = BODY_BUS.as_bytes().to_vec();
    bytes.extend_from_slice(b"CM_ BU_ BCM \"T\xfcrsteuerung\";\n");
    fs::write(&path, bytes).expect("write fixture");

    let db = load_file(&path).expect("load latin1.dbc");
    assert_eq!(db.messages.len(), 2);
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempdir().expect("tempdir");
    let err = load_file(&dir.path().join("absent.dbc")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert!(err.context_value("path").is_some());
}
