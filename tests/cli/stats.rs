use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, MESH_DE, MESH_IT, run};

#[test]
fn test_stats_text() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_it.ts", MESH_IT)?;

    let mut cmd = test.command();
    cmd.arg("stats");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Catalog"));
    let row = stdout
        .lines()
        .find(|l| l.starts_with("./translations/Mesh_it.ts"))
        .unwrap();
    let columns: Vec<&str> = row.split_whitespace().collect();
    assert_eq!(columns, vec!["./translations/Mesh_it.ts", "it_IT", "3", "1", "1", "75.0%"]);

    Ok(())
}

#[test]
fn test_stats_json() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_it.ts", MESH_IT)?;
    test.write_file("translations/Mesh_de.ts", MESH_DE)?;

    let mut cmd = test.command();
    cmd.args(["stats", "--format", "json"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    let value: Value = serde_json::from_str(&stdout)?;
    let catalogs = value.as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    assert_eq!(catalogs[0]["filePath"], "./translations/Mesh_de.ts");
    assert_eq!(catalogs[0]["language"], "de_DE");
    assert_eq!(catalogs[0]["finished"], 2);

    assert_eq!(catalogs[1]["language"], "it_IT");
    assert_eq!(catalogs[1]["messages"], 5);
    assert_eq!(catalogs[1]["unfinished"], 1);
    assert_eq!(catalogs[1]["obsolete"], 1);

    Ok(())
}

#[test]
fn test_stats_json_stays_valid_with_broken_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_de.ts", MESH_DE)?;
    test.write_file(
        "translations/Broken_it.ts",
        "<TS version=\"2.1\" language=\"it\">\n<context>\n</TS>\n",
    )?;

    let mut cmd = test.command();
    cmd.args(["stats", "--format", "json"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0);
    let value: Value = serde_json::from_str(&stdout)?;
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert!(stderr.contains("1 catalog(s) could not be parsed"));

    Ok(())
}
