use crate::error::KitchenError;
use crate::food::Quantity;
use std::{fmt, fmt::Display};

/// One step of a recipe: use `amount` of `ingredient` to `action` something.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Instruction {
    ingredient: String,
    amount: Quantity,
    action: String,
}

impl Instruction {
    pub fn new(
        ingredient: impl Into<String>,
        amount: i64,
        action: impl Into<String>,
    ) -> Result<Self, KitchenError> {
        let ingredient = ingredient.into();
        let action = action.into();
        if ingredient.trim().is_empty() {
            return Err(KitchenError::invalid_instruction("ingredient is blank"));
        }
        if action.trim().is_empty() {
            return Err(KitchenError::invalid_instruction("action is blank"));
        }
        if amount <= 0 {
            return Err(KitchenError::invalid_instruction(format!(
                "amount of {} must be positive, got {}",
                ingredient, amount
            )));
        }
        Ok(Self {
            ingredient,
            amount: Quantity::new(amount)?,
            action,
        })
    }

    pub fn ingredient(&self) -> &str {
        &self.ingredient
    }

    pub fn amount(&self) -> Quantity {
        self.amount
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}ing {} {}(s)",
            self.action, self.amount, self.ingredient
        )
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Recipe {
    name: String,
    time: u32,
    level: String,
    instructions: Vec<Instruction>,
}

impl Recipe {
    /// `time` is the preparation time in minutes.
    pub fn new(name: impl Into<String>, time: u32, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time,
            level: level.into(),
            instructions: vec![],
        }
    }

    pub fn with_instruction(mut self, instruction: Instruction) -> Self {
        self.push_instruction(instruction);
        self
    }

    pub(crate) fn push_instruction(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}
