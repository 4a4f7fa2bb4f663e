use ib_core::Configuration;

pub const CREATE_EXTERNAL_ISSUES_KEY: &str = "sonar.bsl.acc.createExternalIssues";

pub const CREATE_EXTERNAL_ISSUES_DEFAULT: bool = true;

/// Settings that influence translation, read once per analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Whether diagnostics from the secondary engine without an active rule are still reported as
    /// external issues.
    pub create_external_issues: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { create_external_issues: CREATE_EXTERNAL_ISSUES_DEFAULT }
    }
}

impl Settings {
    pub fn from_config(config: &(impl Configuration + ?Sized)) -> Self {
        Self {
            create_external_issues: config
                .get_bool(CREATE_EXTERNAL_ISSUES_KEY)
                .unwrap_or(CREATE_EXTERNAL_ISSUES_DEFAULT),
        }
    }
}
