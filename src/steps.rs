//! Step bindings: what a scenario runner calls for each Given/When/Then line.

use crate::config::KitchenConfig;
use crate::error::KitchenError;
use crate::food::{Quantity, Utensil};
use crate::hooks::{Hooks, DEFAULT_ORDER};
use crate::kitchen::Kitchen;
use crate::recipe::{Instruction, Recipe};
use anyhow::{ensure, Context, Result};
use tracing::info;

#[derive(Debug)]
pub struct Scenario {
    config: KitchenConfig,
    kitchen: Kitchen,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(KitchenConfig::default())
    }
}

impl Scenario {
    pub fn new(config: KitchenConfig) -> Self {
        let kitchen = Kitchen::with_config(&config);
        Self { config, kitchen }
    }

    pub fn kitchen(&self) -> &Kitchen {
        &self.kitchen
    }

    /// The hooks every kitchen scenario runs with.
    pub fn standard_hooks() -> Hooks<Scenario> {
        Hooks::default()
            .before("cat", 1, &[], Scenario::watch_the_cat)
            .before("reset", DEFAULT_ORDER, &[], Scenario::reset_before_scenario)
            .before(
                "clear fridge",
                100500,
                &["@WithSpecialSetUp, @SmokeTest", "@HooksExamples"],
                Scenario::clear_fridge,
            )
            .after(
                "teardown",
                DEFAULT_ORDER,
                &[],
                Scenario::teardown_after_scenario,
            )
            .after("smoke cleanup", 1, &["@SmokeTest"], Scenario::smoke_cleanup)
    }

    fn watch_the_cat(&mut self) {
        info!("Your cat is watching you");
    }

    /// Starts over with an empty pantry and inventory, no recipe and nothing cooked.
    pub fn reset_before_scenario(&mut self) {
        self.kitchen = Kitchen::with_config(&self.config);
    }

    pub fn clear_fridge(&mut self) {
        info!("Throwing stale stuff from the fridge");
        self.kitchen.throw_out_dishes();
    }

    pub fn teardown_after_scenario(&mut self) {
        info!("===== END OF STORY =====");
    }

    fn smoke_cleanup(&mut self) {
        info!("Cleanup after @SmokeTest scenarios");
    }

    pub fn add_ingredient_units(&mut self, count: i64, name: &str) -> Result<()> {
        let quantity = Quantity::new(count)?;
        let ingredient = self
            .kitchen
            .register_or_merge(name, quantity)
            .with_context(|| format!("can't stock {} units of {}", count, name))?;
        info!("Now have {}", ingredient);
        Ok(())
    }

    /// Returns whether the utensil was new to the inventory.
    pub fn add_utensil_to_inventory(&mut self, name: &str) -> Result<bool> {
        let utensil = Utensil::new(name)?;
        Ok(self.kitchen.add_utensil(utensil))
    }

    /// Attaches a recipe with instruction rows of `(ingredient, amount, action)`.
    pub fn attach_recipe_from_table<S: AsRef<str>>(
        &mut self,
        name: &str,
        prep_time_minutes: u32,
        level: &str,
        rows: &[(S, i64, S)],
    ) -> Result<()> {
        let instructions = rows
            .iter()
            .map(|(ingredient, amount, action)| {
                Instruction::new(ingredient.as_ref(), *amount, action.as_ref())
            })
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("bad instruction in the {} recipe", name))?;
        self.kitchen
            .attach_recipe(Recipe::new(name, prep_time_minutes, level))?;
        for instruction in instructions {
            self.kitchen.append_instruction(Some(instruction))?;
        }
        Ok(())
    }

    /// Attaches the recipe described by a transposed `name` / `time` / `level` table.
    pub fn attach_recipe_book<S: AsRef<str>>(&mut self, rows: &[Vec<S>]) -> Result<()> {
        let recipe = parse_recipe_table(rows)?;
        self.kitchen.attach_recipe(recipe)?;
        Ok(())
    }

    /// Appends the rows of an `ingredient` / `amount` / `action` table to the attached recipe.
    pub fn follow_recipe<S: AsRef<str>>(&mut self, rows: &[Vec<S>]) -> Result<()> {
        for instruction in parse_instruction_table(rows)? {
            self.kitchen.append_instruction(Some(instruction))?;
        }
        Ok(())
    }

    pub fn cook_recipe(&mut self, name: &str) -> Result<()> {
        self.kitchen
            .cook(name)
            .with_context(|| format!("failed to cook {}", name))
    }

    pub fn assert_remaining_at_least(&self, name: &str, amount: i64) -> Result<()> {
        let threshold = Quantity::new(amount)?;
        ensure!(
            self.kitchen.ingredients().contains(name),
            "No {} at all",
            name
        );
        ensure!(
            self.kitchen.remaining_at_least(name, threshold),
            "Remaining amount of {} is less than {}",
            name,
            threshold
        );
        Ok(())
    }

    pub fn assert_remaining_exactly(&self, name: &str, amount: Quantity) -> Result<()> {
        let left = self
            .kitchen
            .quantity_of(name)
            .with_context(|| format!("No {} at all", name))?;
        ensure!(
            left == amount,
            "Remaining amount of {} is {}, expected {}",
            name,
            left,
            amount
        );
        Ok(())
    }

    pub fn assert_has_eaten_something(&self) -> Result<()> {
        ensure!(self.kitchen.has_eaten_something(), "Nothing to eat");
        Ok(())
    }
}

/// Reads a recipe from a table with one `key | value` pair per row.
pub fn parse_recipe_table<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Recipe, KitchenError> {
    let mut name = None;
    let mut time = None;
    let mut level = None;
    for row in rows {
        let [key, value] = row.as_slice() else {
            return Err(KitchenError::invalid_table(format!(
                "recipe rows need a key and a value, got {} cells",
                row.len()
            )));
        };
        let value = value.as_ref().trim();
        match key.as_ref().trim() {
            "name" => name = Some(value.to_owned()),
            "time" => {
                let minutes = value.parse::<u32>().map_err(|_| {
                    KitchenError::invalid_table(format!("`{}` is not a number of minutes", value))
                })?;
                time = Some(minutes);
            }
            "level" => level = Some(value.to_owned()),
            other => {
                return Err(KitchenError::invalid_table(format!(
                    "unknown recipe field `{}`",
                    other
                )))
            }
        }
    }
    let name = name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| KitchenError::invalid_table("recipe has no name"))?;
    Ok(Recipe::new(
        name,
        time.unwrap_or_default(),
        level.unwrap_or_default(),
    ))
}

/// Reads instructions from a table whose first row names the `ingredient`, `amount`
/// and `action` columns, in any order.
pub fn parse_instruction_table<S: AsRef<str>>(
    rows: &[Vec<S>],
) -> Result<Vec<Instruction>, KitchenError> {
    let (header, rows) = rows
        .split_first()
        .ok_or_else(|| KitchenError::invalid_table("instruction table has no header"))?;
    let column = |wanted: &str| {
        header
            .iter()
            .position(|title| title.as_ref().trim() == wanted)
            .ok_or_else(|| KitchenError::invalid_table(format!("no `{}` column", wanted)))
    };
    let ingredient = column("ingredient")?;
    let amount = column("amount")?;
    let action = column("action")?;

    rows.iter()
        .map(|row| {
            let cell = |index: usize| {
                row.get(index)
                    .map(|cell| cell.as_ref().trim())
                    .ok_or_else(|| KitchenError::invalid_table("instruction row is too short"))
            };
            let text = cell(amount)?;
            let units = text.parse::<i64>().map_err(|_| {
                KitchenError::invalid_instruction(format!("`{}` is not an amount", text))
            })?;
            Instruction::new(cell(ingredient)?, units, cell(action)?)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::CookPolicy;

    fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    fn omelette(scenario: &mut Scenario) {
        scenario
            .attach_recipe_from_table(
                "Omelette",
                10,
                "easy",
                &[("eggs", 3, "whisk"), ("butter", 1, "melt")],
            )
            .unwrap();
    }

    #[test]
    fn cooking_an_omelette() {
        let mut scenario = Scenario::default();
        scenario.add_ingredient_units(5, "eggs").unwrap();
        scenario.add_ingredient_units(2, "butter").unwrap();
        assert!(scenario.add_utensil_to_inventory("pan").unwrap());
        assert!(!scenario.add_utensil_to_inventory("pan").unwrap());
        omelette(&mut scenario);

        scenario.cook_recipe("Omelette").unwrap();

        scenario.assert_remaining_at_least("eggs", 2).unwrap();
        scenario
            .assert_remaining_exactly("butter", 1u32.into())
            .unwrap();
        scenario.assert_has_eaten_something().unwrap();
        assert_eq!(scenario.kitchen().utensil_count(), 1);
    }

    #[test]
    fn assertions_fail_with_a_reason() {
        let mut scenario = Scenario::default();
        scenario.add_ingredient_units(1, "eggs").unwrap();

        let missing = scenario.assert_remaining_at_least("milk", 1).unwrap_err();
        assert_eq!(missing.to_string(), "No milk at all");
        let short = scenario.assert_remaining_at_least("eggs", 2).unwrap_err();
        assert_eq!(short.to_string(), "Remaining amount of eggs is less than 2");
        let hungry = scenario.assert_has_eaten_something().unwrap_err();
        assert_eq!(hungry.to_string(), "Nothing to eat");
        assert!(scenario
            .assert_remaining_exactly("eggs", 2u32.into())
            .is_err());
    }

    #[test]
    fn failed_cook_keeps_the_kitchen_error() {
        let mut scenario = Scenario::default();
        scenario.add_ingredient_units(1, "eggs").unwrap();
        omelette(&mut scenario);

        let error = scenario.cook_recipe("Omelette").unwrap_err();
        assert_eq!(error.to_string(), "failed to cook Omelette");
        assert!(matches!(
            error.downcast_ref::<KitchenError>(),
            Some(KitchenError::InsufficientQuantity { .. })
        ));
    }

    #[test]
    fn negative_units_are_rejected() {
        let mut scenario = Scenario::default();
        let error = scenario.add_ingredient_units(-1, "eggs").unwrap_err();
        assert_eq!(
            error.downcast_ref::<KitchenError>(),
            Some(&KitchenError::InvalidQuantity { value: -1 })
        );
    }

    #[test]
    fn bad_instruction_row_attaches_nothing() {
        let mut scenario = Scenario::default();
        assert!(scenario
            .attach_recipe_from_table("Toast", 5, "easy", &[("bread", 0, "toast")])
            .is_err());
        assert!(scenario.kitchen().recipe().is_none());
    }

    #[test]
    fn reset_empties_the_kitchen() {
        let mut scenario = Scenario::default();
        scenario.add_ingredient_units(5, "eggs").unwrap();
        scenario.add_utensil_to_inventory("whisk").unwrap();
        omelette(&mut scenario);

        scenario.reset_before_scenario();

        assert!(scenario.kitchen().ingredients().is_empty());
        assert_eq!(scenario.kitchen().utensil_count(), 0);
        assert!(scenario.kitchen().recipe().is_none());
    }

    #[test]
    fn reset_keeps_the_configured_policy() {
        let config = KitchenConfig::default().with_cook_policy(CookPolicy::AllOrNothing);
        let mut scenario = Scenario::new(config);
        scenario.reset_before_scenario();
        scenario.add_ingredient_units(5, "eggs").unwrap();
        omelette(&mut scenario);

        assert!(scenario.cook_recipe("Omelette").is_err());
        scenario
            .assert_remaining_exactly("eggs", 5u32.into())
            .unwrap();
    }

    #[test]
    fn standard_hooks_follow_scenario_tags() {
        let hooks = Scenario::standard_hooks();
        let mut scenario = Scenario::default();

        assert_eq!(hooks.run_before::<&str>(&[], &mut scenario), ["cat", "reset"]);
        assert_eq!(
            hooks.run_before(&["@HooksExamples", "@WithSpecialSetUp"], &mut scenario),
            ["cat", "reset", "clear fridge"]
        );
        assert_eq!(hooks.run_after::<&str>(&[], &mut scenario), ["teardown"]);
        assert_eq!(
            hooks.run_after(&["@SmokeTest"], &mut scenario),
            ["teardown", "smoke cleanup"]
        );
    }

    #[test]
    fn recipe_book_is_read_sideways() {
        let recipe = parse_recipe_table(&table(&[
            &["name", "Pasta"],
            &["time", "20"],
            &["level", "easy"],
        ]))
        .unwrap();
        assert_eq!(recipe, Recipe::new("Pasta", 20, "easy"));

        assert!(parse_recipe_table(&table(&[&["time", "soon"], &["name", "Pasta"]])).is_err());
        assert!(parse_recipe_table(&table(&[&["time", "20"]])).is_err());
        assert!(parse_recipe_table(&table(&[&["name", "Pasta", "extra"]])).is_err());
    }

    #[test]
    fn instruction_columns_may_come_in_any_order() {
        let instructions = parse_instruction_table(&table(&[
            &["action", "ingredient", "amount"],
            &["boil", "water", "2"],
            &["salt", "salt", "1"],
        ]))
        .unwrap();
        assert_eq!(
            instructions,
            [
                Instruction::new("water", 2, "boil").unwrap(),
                Instruction::new("salt", 1, "salt").unwrap(),
            ]
        );
    }

    #[test]
    fn instruction_table_needs_every_column() {
        assert!(parse_instruction_table::<String>(&[]).is_err());
        assert!(parse_instruction_table(&table(&[&["ingredient", "amount"]])).is_err());
        assert!(matches!(
            parse_instruction_table(&table(&[
                &["ingredient", "amount", "action"],
                &["water", "lots", "boil"],
            ])),
            Err(KitchenError::InvalidInstruction { .. })
        ));
    }

    #[test]
    fn recipe_book_then_instructions() {
        let mut scenario = Scenario::default();
        scenario.add_ingredient_units(3, "water").unwrap();
        let book = table(&[&["name", "Tea"], &["time", "5"], &["level", "easy"]]);
        scenario.attach_recipe_book(&book).unwrap();
        let header: &[&str] = &["ingredient", "amount", "action"];
        let steps = table(&[header, &["water", "1", "boil"]]);
        scenario.follow_recipe(&steps).unwrap();

        scenario.cook_recipe("Tea").unwrap();
        scenario
            .assert_remaining_exactly("water", 2u32.into())
            .unwrap();
    }

    #[test]
    fn scenarios_on_separate_threads_share_nothing() {
        let handles: Vec<_> = (1..=4)
            .map(|eggs| {
                std::thread::spawn(move || {
                    let mut scenario = Scenario::default();
                    scenario.add_ingredient_units(eggs, "eggs").unwrap();
                    scenario.kitchen().quantity_of("eggs").unwrap().value()
                })
            })
            .collect();

        let stocked: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(stocked, [1, 2, 3, 4]);
    }
}
