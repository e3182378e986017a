use anyhow::Result;

use crate::CliTest;

#[test]
fn invalid_serve_address_is_a_fatal_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("go.mod", "module m\n\ngo 1.22\n")?;
    test.write_file("main.go", "package main\n\nfunc Main() {}\n")?;

    let mut cmd = test.analyze_command();
    cmd.args(["--serve", "not-an-address"]);
    let output = test.run(cmd)?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to bind"), "stderr was: {stderr}");

    Ok(())
}
