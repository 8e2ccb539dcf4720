//! Runtime configuration for the demo binary.

/// Environment variable selecting how the receipt is printed.
pub const OUTPUT_VAR: &str = "BISTRO_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DemoConfig {
    pub output: OutputFormat,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(OUTPUT_VAR).ok().as_deref())
    }

    fn from_var(output: Option<&str>) -> Self {
        let output = match output.map(|v| v.trim().to_ascii_lowercase()) {
            None => OutputFormat::default(),
            Some(v) if v == "text" => OutputFormat::Text,
            Some(v) if v == "json" => OutputFormat::Json,
            Some(other) => {
                tracing::warn!("{OUTPUT_VAR}={other} not recognised; printing text");
                OutputFormat::default()
            }
        };
        Self { output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_text() {
        assert_eq!(DemoConfig::from_var(None).output, OutputFormat::Text);
        assert_eq!(DemoConfig::from_var(Some("yaml")).output, OutputFormat::Text);
    }

    #[test]
    fn output_json_is_case_insensitive() {
        assert_eq!(DemoConfig::from_var(Some("JSON")).output, OutputFormat::Json);
        assert_eq!(DemoConfig::from_var(Some(" text ")).output, OutputFormat::Text);
    }
}
