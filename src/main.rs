use anyhow::Result;
use clap::Parser;
use kitchen_kata::{KitchenConfig, Scenario};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "kitchen-kata")]
#[command(about = "Cooks fried eggs in a freshly set up kitchen")]
struct Cli {
    /// TOML file with the kitchen settings
    #[arg(short, long, env = "KITCHEN_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match cli.config {
        Some(path) => KitchenConfig::load(path)?,
        None => KitchenConfig::default(),
    };

    let tags = ["@HooksExamples", "@WithSpecialSetUp"];
    let hooks = Scenario::standard_hooks();
    let mut scenario = Scenario::new(config);
    hooks.run_before(&tags, &mut scenario);

    scenario.add_ingredient_units(3, "eggs")?;
    scenario.add_ingredient_units(2, "eggs")?;
    scenario.add_ingredient_units(1, "butter")?;
    scenario.add_utensil_to_inventory("frying pan")?;
    scenario.attach_recipe_from_table(
        "Fried eggs",
        10,
        "easy",
        &[("butter", 1, "melt"), ("eggs", 2, "fry")],
    )?;
    scenario.cook_recipe("Fried eggs")?;
    scenario.assert_has_eaten_something()?;

    for ingredient in scenario.kitchen().ingredients().iter() {
        info!("Left over: {}", ingredient);
    }
    for utensil in scenario.kitchen().utensils() {
        info!("Still have the {}", utensil);
    }
    hooks.run_after(&tags, &mut scenario);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn config_path_from_the_command_line() {
        let cli = Cli::try_parse_from(["kitchen-kata", "--config", "kitchen.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("kitchen.toml")));

        let cli = Cli::try_parse_from(["kitchen-kata", "-c", "other.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
    }

    #[test]
    fn unknown_arguments_are_refused() {
        assert!(Cli::try_parse_from(["kitchen-kata", "--oven", "hot"]).is_err());
    }
}
