use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ShapeDefinition {
    pub coolness: f32,
}

/// Someone's favourite: either a colour or a shape.
///
/// Which fields are relevant depends on the kind, so each kind is its own
/// variant with all of its fields required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Favorite {
    Color {
        color: String,
    },
    Shape {
        name: String,
        definition: ShapeDefinition,
    },
}

impl Favorite {
    pub fn color(color: impl Into<String>) -> Self {
        Favorite::Color {
            color: color.into(),
        }
    }

    pub fn shape(name: impl Into<String>, coolness: f32) -> Self {
        Favorite::Shape {
            name: name.into(),
            definition: ShapeDefinition { coolness },
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Favorite::Color { color } => color.clone(),
            Favorite::Shape { definition, .. } => definition.coolness.to_string(),
        }
    }
}

#[test]
fn describe() {
    assert_eq!(Favorite::color("teal").describe(), "teal");
    assert_eq!(Favorite::shape("square", 9.5).describe(), "9.5");
}

#[test]
fn shape_requires_definition() {
    let ok: Result<Favorite, _> = toml::from_str(
        r#"
        kind = "shape"
        name = "square"
        definition = { coolness = 3.0 }
        "#,
    );
    assert_eq!(ok.unwrap(), Favorite::shape("square", 3.0));

    let missing: Result<Favorite, _> = toml::from_str(
        r#"
        kind = "shape"
        name = "square"
        "#,
    );
    assert!(missing.is_err());
}
