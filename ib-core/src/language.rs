use std::path::Path;

use smol_str::SmolStr;

use crate::Configuration;

pub const BSL_FILE_SUFFIXES_KEY: &str = "sonar.bsl.file.suffixes";

pub const BSL_FILE_SUFFIXES_DEFAULT: &[&str] = &[".bsl", ".os"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    key: SmolStr,
    name: SmolStr,
    suffixes: Vec<SmolStr>,
}

impl Language {
    pub const BSL_KEY: &'static str = "bsl";
    pub const BSL_NAME: &'static str = "1C (BSL)";

    pub fn new(
        key: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        suffixes: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The language analyzed by the embedded language server.
    /// File suffixes are read from `config`.
    pub fn bsl(config: &(impl Configuration + ?Sized)) -> Self {
        let suffixes = config.get_string_array(BSL_FILE_SUFFIXES_KEY);
        if suffixes.is_empty() {
            Self::new(Self::BSL_KEY, Self::BSL_NAME, BSL_FILE_SUFFIXES_DEFAULT.iter().copied())
        } else {
            Self::new(Self::BSL_KEY, Self::BSL_NAME, suffixes)
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn file_suffixes(&self) -> &[SmolStr] {
        &self.suffixes
    }

    /// Whether the file at `path` belongs to this language, judged by its suffix.
    /// Suffixes may be configured with or without the leading dot.
    pub fn owns(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else { return false };
        let name = name.to_lowercase();
        self.suffixes.iter().any(|suffix| {
            let suffix = suffix.trim_start_matches('.').to_lowercase();
            !suffix.is_empty()
                && name.len() > suffix.len()
                && name.ends_with(&suffix)
                && name[..name.len() - suffix.len()].ends_with('.')
        })
    }
}
