use crate::collections::KeyedSet;
use crate::error::KitchenError;
use crate::food::{Ingredient, Quantity};

/// Ingredient stock, one entry per ingredient name.
#[derive(Clone, Debug)]
pub struct Pantry {
    ingredients: KeyedSet<Ingredient>,
}

impl Default for Pantry {
    fn default() -> Self {
        Self {
            ingredients: KeyedSet::new(Ingredient::key),
        }
    }
}

impl Pantry {
    /// Adds stock. Bringing more of a known ingredient tops it up rather than replacing it.
    pub fn register_or_merge(
        &mut self,
        name: &str,
        quantity: Quantity,
    ) -> Result<Ingredient, KitchenError> {
        let merged = match self.ingredients.get(name) {
            Some(present) => present.with_amount(present.amount().add(quantity)),
            None => Ingredient::new(name, quantity)?,
        };
        self.ingredients.replace(merged.clone());
        Ok(merged)
    }

    pub fn consume(&mut self, name: &str, quantity: Quantity) -> Result<Ingredient, KitchenError> {
        let present = self.get(name)?;
        let left = present
            .amount()
            .subtract(quantity)
            .map_err(|e| e.for_ingredient(name))?;
        let remaining = present.with_amount(left);
        self.ingredients.replace(remaining.clone());
        Ok(remaining)
    }

    pub fn quantity_of(&self, name: &str) -> Result<Quantity, KitchenError> {
        self.get(name).map(Ingredient::amount)
    }

    pub fn get(&self, name: &str) -> Result<&Ingredient, KitchenError> {
        self.ingredients
            .get(name)
            .ok_or_else(|| KitchenError::UnknownIngredient {
                name: name.to_owned(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.contains(name)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }
}
