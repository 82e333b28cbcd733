//! Configuration for template compilation

/// Options that control how templates are parsed and rendered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileOptions {
    /// Keep stray or unknown brackets as literal text instead of rejecting them
    pub lenient: bool,

    /// Text rendered for an argument reference with no matching argument
    pub missing_argument: String,
}

impl CompileOptions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether malformed brackets are kept as text
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Set the placeholder for missing arguments
    pub fn with_missing_argument(mut self, text: impl Into<String>) -> Self {
        self.missing_argument = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompileOptions::default();
        assert!(!config.lenient);
        assert_eq!(config.missing_argument, "");
    }

    #[test]
    fn test_builder_pattern() {
        let config = CompileOptions::new()
            .with_lenient(true)
            .with_missing_argument("?");

        assert!(config.lenient);
        assert_eq!(config.missing_argument, "?");
    }
}
