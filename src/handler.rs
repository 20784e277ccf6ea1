use crate::config::CookPolicy;
use crate::error::KitchenError;
use crate::pantry::Pantry;
use crate::recipe::{Instruction, Recipe};
use tracing::{debug, info, warn};

/// Works through recipe instructions against a pantry.
#[derive(Clone, Copy, Debug, Default)]
pub struct Handler {
    pub policy: CookPolicy,
}

impl Handler {
    pub fn with_policy(policy: CookPolicy) -> Self {
        Handler { policy }
    }

    /// Performs a single instruction: the ingredient must be stocked in a sufficient amount.
    pub fn handle(
        &self,
        pantry: &mut Pantry,
        instruction: &Instruction,
    ) -> Result<(), KitchenError> {
        let name = instruction.ingredient();
        let available = pantry.quantity_of(name)?;
        if !available.is_at_least(instruction.amount()) {
            return Err(KitchenError::InsufficientQuantity {
                ingredient: Some(name.to_owned()),
                available: available.value(),
                required: instruction.amount().value(),
            });
        }
        pantry.consume(name, instruction.amount())?;
        info!("{}", instruction);
        Ok(())
    }

    /// Performs every instruction of the recipe in order, stopping at the first failure.
    pub fn prepare(&self, pantry: &mut Pantry, recipe: &Recipe) -> Result<(), KitchenError> {
        let result = match self.policy {
            CookPolicy::BestEffort => self.handle_all(pantry, recipe),
            CookPolicy::AllOrNothing => {
                let mut staged = pantry.clone();
                self.handle_all(&mut staged, recipe)?;
                *pantry = staged;
                Ok(())
            }
        };
        if let Err(e) = &result {
            warn!(
                "Something went wrong while cooking {}: [{}]",
                recipe.name(),
                e
            );
        }
        result
    }

    fn handle_all(&self, pantry: &mut Pantry, recipe: &Recipe) -> Result<(), KitchenError> {
        for (step, instruction) in recipe.instructions().iter().enumerate() {
            debug!(step, recipe = recipe.name(), "next instruction");
            self.handle(pantry, instruction)?;
        }
        Ok(())
    }
}
