//! Tool declarations and ecosystems.

use std::fmt;

/// One declared tool: a name and the version requested for it.
///
/// A plain value. What installing it means is decided by the owning
/// installer at registration time, see [`super::resolve_procedure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub version: String,
}

impl Tool {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.version)
    }
}

/// A group of related tools sharing one installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ecosystem {
    /// Native C/C++ toolchain.
    Cpp,
    /// JavaScript runtime managers.
    Javascript,
    /// Prerequisites of every run: package manager and version control.
    General,
}

impl Ecosystem {
    /// Ecosystems that can be declared under `languages:`.
    pub const CONFIGURABLE: [Ecosystem; 2] = [Ecosystem::Cpp, Ecosystem::Javascript];

    /// Map a configuration key to an ecosystem, case-insensitively.
    ///
    /// `general` is internal and never matched.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "cpp" | "c++" => Some(Self::Cpp),
            "javascript" | "js" => Some(Self::Javascript),
            _ => None,
        }
    }

    /// Canonical key used in reports.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Javascript => "javascript",
            Self::General => "general",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cpp => "C++",
            Self::Javascript => "JavaScript",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_aliases() {
        assert_eq!(Ecosystem::from_key("cpp"), Some(Ecosystem::Cpp));
        assert_eq!(Ecosystem::from_key("C++"), Some(Ecosystem::Cpp));
        assert_eq!(Ecosystem::from_key("JavaScript"), Some(Ecosystem::Javascript));
        assert_eq!(Ecosystem::from_key("js"), Some(Ecosystem::Javascript));
    }

    #[test]
    fn unknown_and_internal_keys_do_not_match() {
        assert_eq!(Ecosystem::from_key("python"), None);
        assert_eq!(Ecosystem::from_key("general"), None);
        assert_eq!(Ecosystem::from_key(""), None);
    }

    #[test]
    fn tool_display() {
        assert_eq!(Tool::new("cmake", "latest").to_string(), "cmake (latest)");
    }
}
