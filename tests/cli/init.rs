use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Created .tscatrc.json"));

    let content = test.read_file(".tscatrc.json")?;
    insta::assert_snapshot!(content, @r#"
    {
      "includes": [],
      "ignores": [],
      "ignoreTexts": [],
      "includeUnfinished": false,
      "sourceLanguage": "en"
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stderr.contains(".tscatrc.json already exists"));
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}
