//! Configuration schema definitions.
//!
//! These types map to `config.yaml`:
//!
//! ```yaml
//! languages:
//!   - cpp:
//!       - cmake: latest
//!       - ninja: 1.12.1
//! platform:
//!   brew: false
//!   manual_installation: true
//! git:
//!   clone_dir: ~/projects
//!   repos:
//!     - git@github.com:owner/repo.git
//! custom_scripts:
//!   - hello: echo hello
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::installers::PackageManager;
use crate::paths::expand_path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EddyConfig {
    /// Tool lists grouped by ecosystem key. A key with no list is allowed.
    ///
    /// Versions are kept as written: plain scalars such as `1.10` are read
    /// as text, never as numbers.
    pub languages: Vec<OrderedMap<Option<Vec<OrderedMap<String>>>>>,

    /// Package manager preference.
    pub platform: PlatformConfig,

    /// Repositories to clone.
    pub git: GitConfig,

    /// Named shell commands run after installation.
    pub custom_scripts: Vec<OrderedMap<String>>,
}

/// `platform:` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub brew: bool,
    pub manual_installation: bool,
}

/// `git:` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Directory repositories are cloned into (`~` allowed).
    pub clone_dir: Option<String>,

    /// Repository URLs, HTTPS or SSH.
    pub repos: Vec<String>,
}

/// A YAML mapping that keeps its keys in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<OrderedMap<V>, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }

            fn visit_unit<E>(self) -> std::result::Result<OrderedMap<V>, E>
            where
                E: de::Error,
            {
                Ok(OrderedMap::default())
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// One `name: version` entry under an ecosystem key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDeclaration {
    /// Ecosystem key as written.
    pub ecosystem: String,
    pub name: String,
    pub version: String,
}

/// One `name: command` entry under `custom_scripts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomScript {
    pub name: String,
    pub command: String,
}

impl EddyConfig {
    /// Every declared tool in document order.
    pub fn tool_declarations(&self) -> Vec<ToolDeclaration> {
        let mut declarations = Vec::new();
        for group in &self.languages {
            for (ecosystem, tools) in group.iter() {
                for entry in tools.iter().flatten() {
                    for (name, version) in entry.iter() {
                        declarations.push(ToolDeclaration {
                            ecosystem: ecosystem.to_string(),
                            name: name.to_string(),
                            version: version.clone(),
                        });
                    }
                }
            }
        }
        declarations
    }

    /// Ecosystem keys in document order, without duplicates.
    pub fn ecosystem_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for group in &self.languages {
            for (key, _) in group.iter() {
                if !keys.iter().any(|k| k == key) {
                    keys.push(key.to_string());
                }
            }
        }
        keys
    }

    /// `brew` wins over `manual_installation`; neither means manual.
    pub fn package_manager(&self) -> PackageManager {
        if self.platform.brew {
            PackageManager::Native
        } else {
            PackageManager::Manual
        }
    }

    /// Custom scripts in document order.
    pub fn scripts(&self) -> Vec<CustomScript> {
        self.custom_scripts
            .iter()
            .flat_map(|entry| entry.iter())
            .map(|(name, command)| CustomScript {
                name: name.to_string(),
                command: command.clone(),
            })
            .collect()
    }

    /// Expanded clone directory, if configured.
    pub fn clone_dir(&self) -> Option<PathBuf> {
        self.git
            .clone_dir
            .as_deref()
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(expand_path)
    }
}
