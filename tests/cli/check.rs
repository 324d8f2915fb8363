use anyhow::Result;

use crate::{CliTest, MESH_DE, MESH_IT, run};

#[test]
fn test_check_reports_catalog_issues() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_it.ts", MESH_IT)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"Mesh %1 has %2 faces\"  placeholder-mismatch"));
    assert!(stdout.contains("--> ./translations/Mesh_it.ts:13:"));
    assert!(stdout.contains("<source>Mesh %1 has %2 faces</source>"));
    assert!(stdout.contains("accelerator-mismatch"));
    assert!(stdout.contains("warning: \"Pending\"  unfinished"));
    assert!(stdout.contains("warning: \"Old text\"  obsolete"));
    assert!(stdout.contains("4 problems (1 error, 3 warnings)"));

    Ok(())
}

#[test]
fn test_check_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_de.ts", MESH_DE)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 catalog - no issues found"));

    Ok(())
}

#[test]
fn test_check_selected_rules() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_it.ts", MESH_IT)?;

    let mut cmd = test.check_command();
    cmd.args(["obsolete", "unfinished"]);
    let (code, stdout, _) = run(cmd)?;

    // Warnings only
    assert_eq!(code, 0);
    assert!(stdout.contains("obsolete"));
    assert!(!stdout.contains("placeholder-mismatch"));
    assert!(stdout.contains("2 problems (0 errors, 2 warnings)"));

    Ok(())
}

#[test]
fn test_check_language_filter() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_it.ts", MESH_IT)?;
    test.write_file("translations/Mesh_de.ts", MESH_DE)?;

    let mut cmd = test.check_command();
    cmd.args(["--language", "DE_de"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 catalog - no issues found"));

    Ok(())
}

#[test]
fn test_check_parse_error() -> Result<()> {
    let test = CliTest::with_file(
        "translations/Broken_it.ts",
        "<?xml version=\"1.0\"?>\n<TS version=\"2.1\" language=\"it\">\n<context>\n<name>X</name>\n</TS>\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("./translations/Broken_it.ts"));

    Ok(())
}

#[test]
fn test_check_config_ignores() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_it.ts", MESH_IT)?;
    test.write_file(".tscatrc.json", r#"{ "ignores": ["translations/Mesh_it.ts"] }"#)?;
    test.write_file("i18n/Mesh_de.ts", MESH_DE)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 catalog - no issues found"));

    Ok(())
}

#[test]
fn test_check_ignores_non_catalog_ts_files() -> Result<()> {
    let test = CliTest::with_file("src/index.ts", "export const x: number = 1;\n")?;
    test.write_file("translations/Mesh_de.ts", MESH_DE)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 catalog - no issues found"));

    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_de.ts", MESH_DE)?;
    test.write_file(".tscatrc.json", r#"{ "ignores": ["**/[unclosed*"] }"#)?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Error:"));

    Ok(())
}
