use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// What happens to the pantry when an instruction fails halfway through a recipe.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CookPolicy {
    /// Ingredients used by earlier instructions stay used.
    #[default]
    BestEffort,
    /// The pantry only changes if every instruction succeeds.
    AllOrNothing,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct KitchenConfig {
    pub cook_policy: CookPolicy,
}

impl KitchenConfig {
    pub fn with_cook_policy(mut self, cook_policy: CookPolicy) -> Self {
        self.cook_policy = cook_policy;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("malformed kitchen config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("can't read kitchen config {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}
