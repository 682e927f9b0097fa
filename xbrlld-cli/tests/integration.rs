use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create an `xbrlld` command that runs in an isolated temp directory
/// holding copies of the JSON model fixtures. HOME and XDG_CONFIG_HOME point
/// into the temp dir so a user config never leaks into tests.
fn xbrlld_cmd(work_dir: &TempDir) -> Command {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    for entry in fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), work_dir.path().join(entry.file_name())).unwrap();
    }

    let mut cmd = cargo_bin_cmd!("xbrlld");
    cmd.current_dir(work_dir.path());
    cmd.env("HOME", work_dir.path());
    cmd.env("XDG_CONFIG_HOME", work_dir.path().join(".config"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn read(work_dir: &TempDir, name: &str) -> String {
    fs::read_to_string(work_dir.path().join(name)).unwrap()
}

// ============================================================================
// Happy path tests
// ============================================================================

#[test]
fn version_flag() {
    cargo_bin_cmd!("xbrlld")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xbrlld"));
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("xbrlld")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Convert XBRL taxonomies and instance documents to RDF",
        ))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn convert_taxonomy_default_output() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["convert", "taxonomy", "taxonomy.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted taxonomy to taxonomy.trig"));

    let trig = read(&tmp, "taxonomy.trig");
    assert!(trig.contains("@prefix skos: <http://www.w3.org/2004/02/skos/core#> ."));
    assert!(trig.contains("<https://example.com/role/SalesAnalysis> {"));
    assert!(trig.contains("xbrll:Role"));
    assert!(trig.contains("skos:broader"));
    assert!(trig.contains("qb:DataStructureDefinition"));
    assert!(trig.contains("\"Sales analysis\"@en"));
}

#[test]
fn convert_taxonomy_reports_missing_role_definition() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["convert", "taxonomy", "taxonomy.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: role https://example.com/role/Undeclared has no roleType definition",
        ));
}

#[test]
fn quiet_suppresses_warnings() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["--quiet", "convert", "taxonomy", "taxonomy.json"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn convert_taxonomy_with_context() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args([
            "convert",
            "taxonomy",
            "taxonomy.json",
            "-o",
            "out.nq",
            "--context",
            "context.jsonld",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted taxonomy to out.nq"));

    // The .nq extension selects N-Quads
    let nquads = read(&tmp, "out.nq");
    assert!(nquads.contains(
        "<https://example.com/role/SalesAnalysis> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <https://w3id.org/vocab/xbrll#Role> <https://example.com/role/SalesAnalysis> ."
    ));

    let context: serde_json::Value = serde_json::from_str(&read(&tmp, "context.jsonld")).unwrap();
    assert_eq!(
        context["@vocab"],
        serde_json::json!("https://xbrl.org/CR/2021-07-07/xbrl-json#")
    );
    assert_eq!(
        context["https://example.com/2024-01-01/sales#RegionAxis"],
        serde_json::json!({"@type": "@id"})
    );
}

#[test]
fn convert_instance() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["convert", "instance", "instance.json", "--format", "nquads"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Converted instance document to facts.trig",
        ));

    let nquads = read(&tmp, "facts.trig");
    // Duplicate facts collapse to one
    assert_eq!(nquads.matches("<https://w3id.org/vocab/xbrll#hasFact>").count(), 1);
    assert!(nquads.contains("<http://data.companieshouse.gov.uk/doc/company/01234567>"));
    assert!(nquads.contains(
        "\"1500000\"^^<http://www.w3.org/2001/XMLSchema#decimal>"
    ));
    assert!(!nquads.contains("https://example.com/role/SalesAnalysis"));
}

#[test]
fn convert_instance_with_taxonomy() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["convert", "instance", "instance.json", "-t", "-o", "all.trig"])
        .assert()
        .success();

    let trig = read(&tmp, "all.trig");
    assert!(trig.contains("xbrll:hasFact"));
    assert!(trig.contains("<https://example.com/role/SalesAnalysis> {"));
}

#[test]
fn config_file_overrides_entity_scheme() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("xbrlld.toml"),
        r#"
format = "nquads"

[entity_schemes]
"http://www.companieshouse.gov.uk/" = "https://find-and-update.company-information.service.gov.uk/company/"
"#,
    )
    .unwrap();

    xbrlld_cmd(&tmp)
        .args(["--config", "xbrlld.toml", "convert", "instance", "instance.json"])
        .assert()
        .success();

    let nquads = read(&tmp, "facts.trig");
    assert!(nquads.contains(
        "<https://find-and-update.company-information.service.gov.uk/company/01234567>"
    ));
}

#[test]
fn catalog_maps_urls_to_model_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("xbrlld.toml"),
        r#"
[catalog]
"https://example.com/2024-01-01/sales.xsd" = "taxonomy.json"
"#,
    )
    .unwrap();

    xbrlld_cmd(&tmp)
        .args([
            "--config",
            "xbrlld.toml",
            "convert",
            "taxonomy",
            "https://example.com/2024-01-01/sales.xsd",
        ])
        .assert()
        .success();
    assert!(tmp.path().join("taxonomy.trig").exists());
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn verbose_quiet_conflict() {
    cargo_bin_cmd!("xbrlld")
        .args(["--verbose", "--quiet", "convert", "taxonomy", "x.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_document_fails() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["convert", "taxonomy", "absent.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "error: Failed to load XBRL document: absent.json",
        ));
}

#[test]
fn remote_document_without_catalog_fails() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["convert", "taxonomy", "https://example.com/tax.xsd"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("catalog entry"));
}

#[test]
fn instance_as_taxonomy_fails() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["convert", "taxonomy", "instance.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "is not a valid XBRL taxonomy document",
        ));
}

#[test]
fn instance_without_facts_fails() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["convert", "instance", "empty-instance.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No facts found within XBRL document: empty-instance.json",
        ));
    assert!(!tmp.path().join("facts.trig").exists());
}

#[test]
fn unknown_format_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    xbrlld_cmd(&tmp)
        .args(["convert", "taxonomy", "taxonomy.json", "--format", "rdfxml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown output format 'rdfxml'"));
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.toml"), "language = [").unwrap();
    xbrlld_cmd(&tmp)
        .args(["--config", "bad.toml", "convert", "taxonomy", "taxonomy.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}
