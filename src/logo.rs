//! The logo description collected from the user
//!
//! A [`LogoSpec`] is the only input of the renderer. It is built either
//! interactively by [`crate::prompt`] or from a TOML file, and is validated
//! once at construction time.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::InputError;

/// Maximum number of characters the logo text may hold
pub const MAX_TEXT_CHARS: usize = 3;

/// The shape drawn behind the logo text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    /// A shape name the renderer does not know; only background and text are drawn
    Other(String),
}

impl Shape {
    /// The shapes offered by the interactive prompt, in display order
    pub const CHOICES: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];

    pub fn name(&self) -> &str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Other(name) => name,
        }
    }
}

impl From<&str> for Shape {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "circle" => Shape::Circle,
            "square" => Shape::Square,
            "triangle" => Shape::Triangle,
            _ => Shape::Other(trimmed.to_string()),
        }
    }
}

impl FromStr for Shape {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Shape::from(s))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check the logo text against the character limit
pub fn validate_text(text: &str) -> Result<(), InputError> {
    let len = text.chars().count();
    if len > MAX_TEXT_CHARS {
        return Err(InputError::TextTooLong { len });
    }
    Ok(())
}

/// Everything needed to draw a logo
///
/// Colors are kept as the user typed them (a keyword such as `red` or a hex
/// literal such as `#ff0000`) and are handed to the drawing backends unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoSpec {
    text: String,
    text_color: String,
    shape: Shape,
    shape_color: String,
}

/// TOML structure for deserializing a logo spec file
#[derive(Deserialize)]
struct TomlLogoSpec {
    text: String,
    text_color: String,
    shape: String,
    shape_color: String,
}

impl LogoSpec {
    /// Build a spec, rejecting text longer than [`MAX_TEXT_CHARS`]
    pub fn new(
        text: impl Into<String>,
        text_color: impl Into<String>,
        shape: Shape,
        shape_color: impl Into<String>,
    ) -> Result<Self, InputError> {
        let text = text.into();
        validate_text(&text)?;
        Ok(Self {
            text,
            text_color: text_color.into(),
            shape,
            shape_color: shape_color.into(),
        })
    }

    /// Load a spec from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a spec from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, InputError> {
        let parsed: TomlLogoSpec = toml::from_str(content)?;
        Self::new(
            parsed.text,
            parsed.text_color,
            Shape::from(parsed.shape.as_str()),
            parsed.shape_color,
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fill color of the shape (the text itself is always black)
    pub fn text_color(&self) -> &str {
        &self.text_color
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Fill color of the canvas background
    pub fn shape_color(&self) -> &str {
        &self.shape_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_known_names() {
        assert_eq!(Shape::from("circle"), Shape::Circle);
        assert_eq!(Shape::from(" Square "), Shape::Square);
        assert_eq!(Shape::from("TRIANGLE"), Shape::Triangle);
    }

    #[test]
    fn test_shape_from_unknown_name() {
        assert_eq!(Shape::from("hexagon"), Shape::Other("hexagon".to_string()));
        assert_eq!(Shape::from("hexagon").to_string(), "hexagon");
    }

    #[test]
    fn test_text_limit_counts_characters() {
        assert!(validate_text("").is_ok());
        assert!(validate_text("AI").is_ok());
        assert!(validate_text("ÄÖÜ").is_ok());
        assert!(matches!(
            validate_text("ABCD"),
            Err(InputError::TextTooLong { len: 4 })
        ));
    }

    #[test]
    fn test_new_rejects_long_text() {
        let result = LogoSpec::new("LOGO", "red", Shape::Circle, "blue");
        assert!(matches!(result, Err(InputError::TextTooLong { len: 4 })));
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r##"
text = "AI"
text_color = "#ff0000"
shape = "triangle"
shape_color = "navy"
"##;
        let spec = LogoSpec::from_toml(toml_str).expect("Should parse");
        assert_eq!(spec.text(), "AI");
        assert_eq!(spec.text_color(), "#ff0000");
        assert_eq!(spec.shape(), &Shape::Triangle);
        assert_eq!(spec.shape_color(), "navy");
    }

    #[test]
    fn test_parse_toml_validates_text() {
        let toml_str = r#"
text = "ABCD"
text_color = "red"
shape = "circle"
shape_color = "blue"
"#;
        assert!(matches!(
            LogoSpec::from_toml(toml_str),
            Err(InputError::TextTooLong { len: 4 })
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = LogoSpec::from_toml("text = ");
        assert!(matches!(result, Err(InputError::Toml(_))));
    }
}
