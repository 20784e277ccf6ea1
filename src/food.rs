use crate::error::KitchenError;
use std::str::FromStr;
use std::{fmt, fmt::Display};

/// How much of something is left. Never negative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(value: i64) -> Result<Self, KitchenError> {
        u64::try_from(value)
            .map(Quantity)
            .map_err(|_| KitchenError::InvalidQuantity { value })
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_at_least(self, lower_bound: impl Into<Quantity>) -> bool {
        self.0 >= lower_bound.into().0
    }

    pub fn add(self, more: Quantity) -> Quantity {
        Quantity(self.0.saturating_add(more.0))
    }

    pub fn subtract(self, less: Quantity) -> Result<Quantity, KitchenError> {
        self.0
            .checked_sub(less.0)
            .map(Quantity)
            .ok_or(KitchenError::InsufficientQuantity {
                ingredient: None,
                available: self.0,
                required: less.0,
            })
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Quantity(value.into())
    }
}

impl FromStr for Quantity {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| KitchenError::invalid_table(format!("`{}` is not a quantity", s)))?;
        Quantity::new(value)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Ingredient {
    name: String,
    amount: Quantity,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: Quantity) -> Result<Self, KitchenError> {
        let name = non_blank(name.into(), "ingredient")?;
        Ok(Self { name, amount })
    }

    /// Pantry key: ingredients are told apart by name only.
    pub fn key(&self) -> &str {
        &self.name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Quantity {
        self.amount
    }

    pub(crate) fn with_amount(&self, amount: Quantity) -> Self {
        Self {
            name: self.name.clone(),
            amount,
        }
    }
}

impl Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} units of {}", self.amount, self.name)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Utensil {
    name: String,
}

impl Utensil {
    pub fn new(name: impl Into<String>) -> Result<Self, KitchenError> {
        let name = non_blank(name.into(), "utensil")?;
        Ok(Self { name })
    }

    /// Inventory key: two utensils with the same name are the same utensil.
    pub fn key(&self) -> &str {
        &self.name
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Utensil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub(crate) fn non_blank(name: String, what: &'static str) -> Result<String, KitchenError> {
    if name.trim().is_empty() {
        Err(KitchenError::BlankName { what })
    } else {
        Ok(name)
    }
}
