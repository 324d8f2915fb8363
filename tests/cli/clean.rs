use anyhow::Result;

use crate::{CliTest, MESH_IT, run};

#[test]
fn test_clean_dry_run() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_it.ts", MESH_IT)?;

    let (code, stdout, _) = run(test.clean_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("./translations/Mesh_it.ts:25"));
    assert!(stdout.contains("\"Old text\""));
    assert!(stdout.contains("Would remove 1 message(s) in 1 file(s)."));
    assert!(stdout.contains("Run with --apply to remove these messages."));

    // Dry run leaves the file alone
    assert_eq!(test.read_file("translations/Mesh_it.ts")?, MESH_IT);

    Ok(())
}

#[test]
fn test_clean_apply() -> Result<()> {
    let test = CliTest::with_file("translations/Mesh_it.ts", MESH_IT)?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Removed 1 message(s) in 1 file(s)."));

    let content = test.read_file("translations/Mesh_it.ts")?;
    assert!(!content.contains("Old text"));
    assert!(content.contains("<source>Union of meshes</source>"));
    assert!(content.contains("<location filename=\"../../Command.cpp\" line=\"+53\"/>"));
    assert!(content.contains("<translation type=\"unfinished\">In attesa</translation>"));
    assert!(content.contains("<source>&amp;Open</source>"));

    // Nothing left to clean
    let (_, stdout, _) = run(test.clean_command())?;
    assert!(stdout.contains("No obsolete messages found"));

    Ok(())
}
