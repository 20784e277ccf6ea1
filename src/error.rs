use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KitchenError {
    #[error("quantity can't be negative, got {value}")]
    InvalidQuantity { value: i64 },

    #[error(
        "not enough {}: {available} available, {required} required",
        .ingredient.as_deref().unwrap_or("to subtract from")
    )]
    InsufficientQuantity {
        ingredient: Option<String>,
        available: u64,
        required: u64,
    },

    #[error("no {name} in the kitchen at all")]
    UnknownIngredient { name: String },

    #[error("invalid instruction: {reason}")]
    InvalidInstruction { reason: String },

    #[error("can't work on two recipes simultaneously, already have {attached}")]
    RecipeAlreadyAttached { attached: String },

    #[error("working on the {attached} now, can't cook {requested}")]
    WrongRecipe { attached: String, requested: String },

    #[error("no recipe to cook {requested} from")]
    NoRecipeAttached { requested: String },

    #[error("{what} name can't be blank")]
    BlankName { what: &'static str },

    #[error("invalid table: {reason}")]
    InvalidTable { reason: String },
}

impl KitchenError {
    pub(crate) fn invalid_instruction(reason: impl Into<String>) -> Self {
        KitchenError::InvalidInstruction {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_table(reason: impl Into<String>) -> Self {
        KitchenError::InvalidTable {
            reason: reason.into(),
        }
    }

    /// Attaches the ingredient name to a shortage raised by bare quantity arithmetic.
    pub(crate) fn for_ingredient(self, name: &str) -> Self {
        match self {
            KitchenError::InsufficientQuantity {
                ingredient: None,
                available,
                required,
            } => KitchenError::InsufficientQuantity {
                ingredient: Some(name.to_owned()),
                available,
                required,
            },
            other => other,
        }
    }
}
