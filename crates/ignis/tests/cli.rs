use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn demo_run_resolves_all_components() {
    let mut cmd = Command::cargo_bin("ignis").expect("binary should build");
    cmd.arg("--delay-ms").arg("25");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("foo component is resolved"))
        .stdout(predicate::str::contains("timer component is instantiated"))
        .stdout(predicate::str::contains("timer component is resolved"))
        .stdout(predicate::str::contains("bar component is resolved"))
        .stdout(predicate::str::contains("all components are resolved"));
}

#[test]
fn sync_components_resolve_before_the_deferred_one() {
    let output = Command::cargo_bin("ignis")
        .expect("binary should build")
        .arg("--delay-ms")
        .arg("50")
        .output()
        .expect("binary should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf-8");

    let foo = stdout
        .find("foo component is resolved")
        .expect("foo line missing");
    let bar = stdout
        .find("bar component is resolved")
        .expect("bar line missing");
    let timer = stdout
        .find("timer component is resolved")
        .expect("timer line missing");
    let done = stdout
        .find("all components are resolved")
        .expect("callback line missing");

    // Priority order starts both synchronous components before the deferred
    // one settles; the callback comes last.
    assert!(foo < timer, "foo resolves before the deferred component");
    assert!(bar < timer, "bar resolves before the deferred component");
    assert!(timer < done, "callback fires only after the deferred component");
}
