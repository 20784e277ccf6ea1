use crate::collections::KeyedSet;
use crate::config::KitchenConfig;
use crate::error::KitchenError;
use crate::food::{Ingredient, Quantity, Utensil};
use crate::handler::Handler;
use crate::pantry::Pantry;
use crate::recipe::{Instruction, Recipe};
use tracing::{info, warn};

/// Everything one scenario cooks with. Built fresh for every scenario.
#[derive(Clone, Debug)]
pub struct Kitchen {
    handler: Handler,
    pantry: Pantry,
    inventory: KeyedSet<Utensil>,
    recipe: Option<Recipe>,
    cooked_dishes: Vec<String>,
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::with_config(&KitchenConfig::default())
    }
}

impl Kitchen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &KitchenConfig) -> Self {
        Self {
            handler: Handler::with_policy(config.cook_policy),
            pantry: Pantry::default(),
            inventory: KeyedSet::new(Utensil::key),
            recipe: None,
            cooked_dishes: vec![],
        }
    }

    pub fn register_or_merge(
        &mut self,
        name: &str,
        quantity: Quantity,
    ) -> Result<Ingredient, KitchenError> {
        self.pantry.register_or_merge(name, quantity)
    }

    pub fn consume(&mut self, name: &str, quantity: Quantity) -> Result<Ingredient, KitchenError> {
        self.pantry.consume(name, quantity)
    }

    pub fn quantity_of(&self, name: &str) -> Result<Quantity, KitchenError> {
        self.pantry.quantity_of(name)
    }

    /// Returns `true` if the utensil was not in the inventory yet.
    pub fn add_utensil(&mut self, utensil: Utensil) -> bool {
        let name = utensil.name().to_owned();
        let added = self.inventory.insert_new(utensil);
        if added {
            info!("Just added {} to the inventory", name);
        } else {
            info!("Already have the {}", name);
        }
        added
    }

    pub fn attach_recipe(&mut self, recipe: Recipe) -> Result<(), KitchenError> {
        if let Some(attached) = &self.recipe {
            return Err(KitchenError::RecipeAlreadyAttached {
                attached: attached.name().to_owned(),
            });
        }
        info!(
            "Got a recipe for {} ({} minutes, {})",
            recipe.name(),
            recipe.time(),
            recipe.level()
        );
        self.recipe = Some(recipe);
        Ok(())
    }

    pub fn append_instruction(
        &mut self,
        instruction: Option<Instruction>,
    ) -> Result<(), KitchenError> {
        let instruction = instruction
            .ok_or_else(|| KitchenError::invalid_instruction("instruction is missing"))?;
        let recipe = self.recipe.as_mut().ok_or_else(|| {
            KitchenError::invalid_instruction(format!("no recipe to add \"{}\" to", instruction))
        })?;
        recipe.push_instruction(instruction);
        Ok(())
    }

    /// Cooks the attached recipe. What an instruction failing halfway leaves behind
    /// depends on the configured [`CookPolicy`](crate::config::CookPolicy).
    pub fn cook(&mut self, recipe_name: &str) -> Result<(), KitchenError> {
        let recipe = match &self.recipe {
            None => {
                warn!("No recipe to cook {} from", recipe_name);
                return Err(KitchenError::NoRecipeAttached {
                    requested: recipe_name.to_owned(),
                });
            }
            Some(recipe) if recipe.name() != recipe_name => {
                warn!("Busy with {}, can't cook {}", recipe.name(), recipe_name);
                return Err(KitchenError::WrongRecipe {
                    attached: recipe.name().to_owned(),
                    requested: recipe_name.to_owned(),
                });
            }
            Some(recipe) => recipe,
        };
        self.handler.prepare(&mut self.pantry, recipe)?;
        info!("After {} minutes {} is ready", recipe.time(), recipe_name);
        self.cooked_dishes.push(recipe_name.to_owned());
        Ok(())
    }

    pub fn has_eaten_something(&self) -> bool {
        !self.cooked_dishes.is_empty()
    }

    pub fn remaining_at_least(&self, name: &str, threshold: impl Into<Quantity>) -> bool {
        self.pantry
            .quantity_of(name)
            .map(|left| left.is_at_least(threshold))
            .unwrap_or(false)
    }

    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.pantry.get(name).ok()
    }

    pub fn ingredients(&self) -> &Pantry {
        &self.pantry
    }

    pub fn utensils(&self) -> impl Iterator<Item = &Utensil> {
        self.inventory.iter()
    }

    pub fn utensil_count(&self) -> usize {
        self.inventory.len()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn cooked_dishes(&self) -> &[String] {
        &self.cooked_dishes
    }

    pub(crate) fn throw_out_dishes(&mut self) {
        self.cooked_dishes.clear();
    }
}
