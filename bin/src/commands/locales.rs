//! Locales command implementation.

use anyhow::Result;
use readtime_lib::prelude::*;

use crate::display::direction_label;

/// List the available locales with their direction and unit words.
pub(crate) fn list_locales() -> Result<()> {
    let registry = LocaleRegistry::global();

    let units: String = TranslationKey::all()
        .iter()
        .map(|key| format!(" {:<10}", key.as_str().to_uppercase()))
        .collect();
    println!("{:<6} {:<12} {:<4}{units}", "ID", "NAME", "DIR");
    println!("{}", "-".repeat(80));

    for id in registry.ids() {
        let locale = registry.resolve(id)?;
        println!(
            "{:<6} {:<12} {:<4}{}",
            locale.id(),
            locale.name(),
            direction_label(locale.ltr()),
            unit_columns(locale.translation()),
        );
    }

    println!("\nTotal: {} locales", registry.len());
    println!("Right to left: {}", right_to_left_ids(registry).join(", "));
    Ok(())
}

/// Formats every translation of a table as fixed-width columns.
fn unit_columns(translations: &Translations) -> String {
    translations
        .iter()
        .map(|(_, value)| format!(" {value:<10}"))
        .collect()
}

/// Returns the sorted identifiers of the right-to-left locales.
fn right_to_left_ids(registry: &LocaleRegistry) -> Vec<&str> {
    let mut ids: Vec<&str> = registry.right_to_left().map(Locale::id).collect();
    ids.sort_unstable();
    ids
}
