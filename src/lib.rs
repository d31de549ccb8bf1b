mod latex_generator;
mod latex_string;
mod tex_render;
mod utils;

pub mod api;
pub mod config;
pub mod invoice;
pub mod time;
pub mod toml_input;

use std::path::PathBuf;

use log::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::invoice::InvoiceTotals;
use crate::latex_generator::LatexGenerator;
use crate::time::Date;

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The invoice was rendered to this file.
    Written(PathBuf),
    /// No record survived the period filter, nothing was rendered.
    NoRecords,
}

/// Runs the whole pipeline: login, fetch, aggregate, total, render.
///
/// A period without any billable record is not an error, it yields
/// [`Outcome::NoRecords`] and no file is written.
pub fn generate_invoice(config: &Config) -> anyhow::Result<Outcome> {
    let invoice = config.invoice();
    let period = config.period();

    info!("invoicing period: {}", period);

    let mut client = ApiClient::new(config.api().url());
    client.login(config.api().email(), config.api().password())?;

    let records = client.fetch_records(&period)?;

    let table = invoice::build_table(
        &records,
        &period,
        invoice.group_by(),
        invoice.interest_tags(),
    );

    if table.is_empty() {
        return Ok(Outcome::NoRecords);
    }

    let totals = InvoiceTotals::compute(
        &table,
        invoice.hourly_rate(),
        period.start().month(),
        invoice.overtime_adjustment(),
        invoice.contracted_hours(),
        invoice.fixed_fee(),
    );

    let outpath = config.output_path();
    let generator = LatexGenerator::new(config, Date::today());
    generator.generate(&table, &totals, &outpath)?;

    Ok(Outcome::Written(outpath))
}
