use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use shapes::Shape;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub visitor: bool,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config `{}`", path.display()))?;
        Config::parse(&text).with_context(|| format!("invalid config `{}`", path.display()))
    }

    pub fn parse(text: &str) -> Result<Config> {
        Ok(toml::from_str(text)?)
    }
}

#[test]
fn parses_shapes() {
    let config = Config::parse(
        r#"
        visitor = true

        [[shapes]]
        designator = "Circle"
        radius = 5.0
        "#,
    )
    .unwrap();
    assert!(config.visitor);
    assert_eq!(config.shapes, vec![Shape::circle(5.0).unwrap()]);
}

#[test]
fn empty_config() {
    let config = Config::parse("").unwrap();
    assert!(!config.visitor);
    assert!(config.shapes.is_empty());
}

#[test]
fn rejects_invalid_shapes() {
    let err = Config::parse(
        r#"
        [[shapes]]
        designator = "Rectangle"
        half_width = 0.0
        half_height = 3.0
        "#,
    );
    assert!(err.is_err());

    let unknown = Config::parse(
        r#"
        [[shapes]]
        designator = "Square"
        half_width = 1.0
        half_height = 1.0
        "#,
    );
    assert!(unknown.is_err());
}
