//! Scripted tour of the catalog: seed items, query, report, update, delete.

use color_eyre::eyre::Result;
use serde::Serialize;
use std::io::Write;
use stockroom::{ItemManager, ItemPatch, RawQuantity, ReportManager};
use tracing::warn;

/// Items seeded by the walkthrough. Three of them fail validation on purpose.
const SEED: [(&str, &str, Option<i64>); 7] = [
    ("basket ball", "sports", Some(0)),
    ("asd", "sports", Some(0)),
    ("soccer ball", "sports", Some(5)),
    ("football", "sports", None),
    ("football", "sports", Some(3)),
    ("kitchen pot", "cooking items", Some(0)),
    ("kitchen pot", "cooking", Some(3)),
];

fn log<W: Write, T: Serialize + ?Sized>(out: &mut W, title: &str, value: &T) -> Result<()> {
    writeln!(out, "== {title}")?;
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn seed(manager: &ItemManager) {
    for (name, category, quantity) in SEED {
        if let Err(err) = manager.create(name, category, RawQuantity::from(quantity)) {
            warn!(item_name = name, category, error = %err, "Skipping invalid seed item");
        }
    }
}

/// Run the walkthrough against `manager`, writing every step to `out`.
pub fn run<W: Write>(manager: &ItemManager, out: &mut W) -> Result<()> {
    seed(manager);
    log(out, "All items", &manager.items())?;

    let reports = ReportManager::init(manager);
    log(out, "In stock", &reports.report_in_stock())?;

    manager.update("SOCSP", &ItemPatch::new().with_quantity(0));
    log(out, "In stock after selling out SOCSP", &manager.in_stock())?;
    log(out, "In stock", &reports.report_in_stock())?;
    log(out, "Category sports", &manager.in_category("sports"))?;

    manager.delete("SOCSP");
    log(out, "All items after deleting SOCSP", &manager.items())?;

    let kitchen_pot = reports.create_reporter("KITCO");
    writeln!(out, "== Item info KITCO")?;
    kitchen_pot.write_item_info(out)?;

    manager.update("KITCO", &ItemPatch::new().with_quantity(10));
    writeln!(out, "== Item info KITCO after restock")?;
    kitchen_pot.write_item_info(out)?;

    let football = reports.create_reporter("FOOSP");
    writeln!(out, "== Item info FOOSP")?;
    football.write_item_info(out)?;
    Ok(())
}
