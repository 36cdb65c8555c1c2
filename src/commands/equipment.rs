use crate::OutputFormat;
use crate::commands::{QueryOptions, run_query};
use crate::config::Config;
use crate::table::{Cell, Column, Table, capitalize};
use crate::youtube::models::EquipmentComparison;
use crate::youtube::service::{self, EQUIPMENT_QUERY_KEY};
use anyhow::Result;

pub const HEADING: &str = "Kettlebells vs. Dumbbells Comparison";

pub fn columns() -> Vec<Column<EquipmentComparison>> {
    vec![
        Column::new("equipmentType", "Equipment", |e: &EquipmentComparison| {
            Cell::text(capitalize(e.equipment_type.as_str()))
        }),
        Column::new("advantages", "Advantages", |e: &EquipmentComparison| {
            Cell::List(e.advantages.clone())
        }),
        Column::new("bestExercises", "Best Exercises", |e: &EquipmentComparison| {
            Cell::List(e.best_exercises.clone())
        }),
        Column::new("targetMuscles", "Target Muscles", |e: &EquipmentComparison| {
            Cell::Tags(e.target_muscles.clone())
        }),
        Column::new("skillLevel", "Skill Level", |e: &EquipmentComparison| {
            Cell::Badge(e.skill_level.as_str().to_string())
        }),
        Column::new("bestFor", "Best For", |e: &EquipmentComparison| {
            Cell::List(e.best_for.clone())
        }),
    ]
}

pub fn table(items: &[EquipmentComparison]) -> Table<'_, EquipmentComparison> {
    Table::new(columns(), items)
}

pub fn render(items: &[EquipmentComparison], format: OutputFormat) -> Result<String> {
    let table = table(items);
    match format {
        OutputFormat::Text => Ok(format!("{}\n\n{}", HEADING, table.render())),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&table.to_json())?),
    }
}

pub fn fetch(config: &Config, opts: QueryOptions) -> Result<Vec<EquipmentComparison>> {
    run_query(config, &[EQUIPMENT_QUERY_KEY], opts, || {
        service::fetch_equipment_comparison(config)
    })
}

pub fn equipment(config: &Config, format: OutputFormat, opts: QueryOptions) -> Result<()> {
    let items = fetch(config, opts)?;
    println!("{}", render(&items, format)?);
    Ok(())
}
