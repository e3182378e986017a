use anyhow::Result;

use crate::CliTest;

#[test]
fn single_file_one_caller_one_callee() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("go.mod", "module m\n\ngo 1.22\n")?;
    test.write_file("svc/a.go", "package svc\n\nfunc A() {\n\tB()\n}\n\nfunc B() {}\n")?;

    let output = test.run(test.analyze_command())?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let mappings = test.read_output_json("codemap.json")?;
    let mappings = mappings.as_array().unwrap();
    assert_eq!(mappings.len(), 1);

    let mapping = &mappings[0];
    assert_eq!(mapping["definition"]["id"], "m/svc.B");
    let call_sites = mapping["callSites"].as_array().unwrap();
    assert_eq!(call_sites.len(), 1);
    assert_eq!(call_sites[0]["filePath"], "svc/a.go");
    assert_eq!(call_sites[0]["line"], 3);
    assert_eq!(call_sites[0]["callerId"], "m/svc.A");

    Ok(())
}

#[test]
fn method_call_on_expression_is_unresolved() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("go.mod", "module m\n\ngo 1.22\n")?;
    test.write_file(
        "p/p.go",
        "package p\n\ntype T struct{}\n\nfunc (t *T) M() {}\n\nfunc top() {\n\t(&T{}).M()\n}\n",
    )?;

    let output = test.run(test.analyze_command())?;
    assert!(output.status.success());

    let mappings = test.read_output_json("codemap.json")?;
    assert_eq!(mappings.as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn cross_package_call_via_import_alias() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("go.mod", "module m\n\ngo 1.22\n")?;
    test.write_file("util/util.go", "package util\n\nfunc Helper() {}\n")?;
    test.write_file(
        "main.go",
        "package main\n\nimport u \"m/util\"\n\nfunc Main() {\n\tu.Helper()\n}\n",
    )?;

    let output = test.run(test.analyze_command())?;
    assert!(output.status.success());

    let mappings = test.read_output_json("codemap.json")?;
    let mappings = mappings.as_array().unwrap();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0]["definition"]["id"], "m/util.Helper");
    assert_eq!(mappings[0]["callSites"][0]["callerId"], "m.Main");

    Ok(())
}

#[test]
fn blank_identifier_import_is_unresolvable() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("go.mod", "module m\n\ngo 1.22\n")?;
    test.write_file("side/side.go", "package side\n\nfunc F() {}\n")?;
    test.write_file("main.go", "package main\n\nimport _ \"m/side\"\n\nfunc Main() {}\n")?;

    let output = test.run(test.analyze_command())?;
    assert!(output.status.success());

    let mappings = test.read_output_json("codemap.json")?;
    assert_eq!(mappings.as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn nested_function_literal_attributes_to_enclosing_top_level() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("go.mod", "module m\n\ngo 1.22\n")?;
    test.write_file(
        "p/p.go",
        "package p\n\nfunc Outer() {\n\tfunc() {\n\t\tInner()\n\t}()\n}\n\nfunc Inner() {}\n",
    )?;

    let output = test.run(test.analyze_command())?;
    assert!(output.status.success());

    let mappings = test.read_output_json("codemap.json")?;
    let mappings = mappings.as_array().unwrap();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0]["definition"]["id"], "m/p.Inner");
    assert_eq!(mappings[0]["callSites"][0]["callerId"], "m/p.Outer");

    Ok(())
}

#[test]
fn skip_substring_prunes_subtree() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("go.mod", "module m\n\ngo 1.22\n")?;
    test.write_file(
        "pkg/generated/gen.go",
        "package generated\n\nfunc Gen() {}\n\nfunc callGen() {\n\tGen()\n}\n",
    )?;
    test.write_file("main.go", "package main\n\nfunc Main() {}\n")?;

    let baseline = test.run(test.analyze_command())?;
    assert!(baseline.status.success());
    let baseline_mappings = test.read_output_json("codemap.json")?;
    assert_eq!(baseline_mappings.as_array().unwrap().len(), 1);

    let mut cmd = test.analyze_command();
    cmd.args(["--skip", "generated"]);
    let output = test.run(cmd)?;
    assert!(output.status.success());

    let mappings = test.read_output_json("codemap.json")?;
    assert_eq!(mappings.as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn missing_manifest_is_a_fatal_error() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(test.analyze_command())?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("manifest not found"), "stderr was: {stderr}");

    Ok(())
}

#[test]
fn success_prints_summary_line() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("go.mod", "module m\n\ngo 1.22\n")?;
    test.write_file("main.go", "package main\n\nfunc A() {\n\tB()\n}\n\nfunc B() {}\n")?;

    let output = test.run(test.analyze_command())?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("codemap.json"), "stdout was: {stdout}");
    assert!(stdout.contains("1 mapped definitions, 1 call sites across 1 target"), "stdout was: {stdout}");

    Ok(())
}

#[test]
fn custom_out_path_is_respected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("go.mod", "module m\n\ngo 1.22\n")?;
    test.write_file("main.go", "package main\n\nfunc A() {\n\tB()\n}\n\nfunc B() {}\n")?;

    let mut cmd = test.analyze_command();
    cmd.args(["--out", "out/result.json"]);
    let output = test.run(cmd)?;
    assert!(output.status.success());

    let mappings = test.read_output_json("out/result.json")?;
    assert_eq!(mappings.as_array().unwrap().len(), 1);

    Ok(())
}
