use super::*;

use crate::test_support::serial;
#[cfg(unix)]
use crate::test_support::stub;

#[cfg(unix)]
fn demo_args() -> Vec<OsString> {
    ["--package", "--project", "demo.wlp"]
        .iter()
        .map(OsString::from)
        .collect()
}

#[cfg(unix)]
#[test]
fn test_forwards_arguments_verbatim() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let (script, log) = stub(dir.path(), 0);

    run(&script, &demo_args()).unwrap();

    let recorded = std::fs::read_to_string(log).unwrap();
    assert_eq!(recorded, "--package\n--project\ndemo.wlp\n");
}

#[cfg(unix)]
#[test]
fn test_exit_codes_are_mirrored() {
    let _guard = serial();
    for expected in [1, 17] {
        let dir = tempfile::tempdir().unwrap();
        let (script, _) = stub(dir.path(), expected);

        let err = run(&script, &demo_args()).unwrap_err();

        match &err {
            LaunchError::ChildExit { code } => assert_eq!(*code, expected),
            other => panic!("expected ChildExit, got {other:?}"),
        }
        assert_eq!(err.exit_code(), expected);
    }
}

#[cfg(unix)]
#[test]
fn test_arguments_with_spaces_survive() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let (script, log) = stub(dir.path(), 0);

    run(&script, &[OsString::from("my project.wlp"), OsString::from("--help")]).unwrap();

    let recorded = std::fs::read_to_string(log).unwrap();
    assert_eq!(recorded, "my project.wlp\n--help\n");
}

#[cfg(unix)]
#[test]
fn test_signal_is_terminated() {
    use std::os::unix::fs::PermissionsExt;

    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("WonderlandEditor");
    std::fs::write(&script, "#!/bin/sh\nkill -9 $$\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let err = run(&script, &[]).unwrap_err();

    assert!(matches!(err, LaunchError::Terminated), "got {err:?}");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_missing_executable_is_spawn_error() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("WonderlandEditor");

    let err = run(&missing, &[OsString::from("--package")]).unwrap_err();

    match &err {
        LaunchError::Spawn { path, source } => {
            assert_eq!(path, &missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Spawn, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
}

#[cfg(unix)]
#[test]
fn test_non_executable_file_is_spawn_error() {
    let _guard = serial();
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("WonderlandEditor");
    std::fs::write(&file, "not a program").unwrap();

    let err = run(&file, &[]).unwrap_err();

    assert!(matches!(err, LaunchError::Spawn { .. }), "got {err:?}");
}
