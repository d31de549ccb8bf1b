use std::path::Path;

use log::info;

use crate::config::Config;
use crate::invoice::{AggregationTable, InvoiceTotals, Row};
use crate::latex_string::LatexString;
use crate::tex_render::TexRender;
use crate::time::Date;
use crate::utils::{self, Resources};

/// Formats a number the brazilian way: two decimal places, decimal comma.
///
/// Values keep their full precision until they pass through here.
fn decimal(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// Fills the embedded invoice template with the aggregated services and
/// the computed totals, then compiles it to a pdf.
pub struct LatexGenerator<'a> {
    config: &'a Config,
    issue_date: Date,
}

impl<'a> LatexGenerator<'a> {
    pub fn new(config: &'a Config, issue_date: Date) -> Self {
        Self { config, issue_date }
    }

    pub fn generate(
        self,
        table: &AggregationTable,
        totals: &InvoiceTotals,
        outpath: impl AsRef<Path>,
    ) -> anyhow::Result<()> {
        info!("generating latex source");
        let source = self.source(table, totals);

        let mut renderer = TexRender::from_source(source.into_bytes())?;

        if let Some(path) = self.config.latex_mk_path() {
            renderer.latex_mk_path(path);
        }

        if let Some(dir) = self.config.preserve_dir() {
            renderer.preserve_dir(dir);
        }

        info!("compiling latex source to pdf");
        let pdf = renderer.render()?;

        let outpath = outpath.as_ref();
        if let Some(parent) = outpath.parent() {
            utils::create_dir_all(parent)?;
        }

        utils::write(outpath, pdf)?;

        info!("Done");

        Ok(())
    }

    /// Returns the filled latex source for the invoice.
    #[must_use]
    pub fn source(&self, table: &AggregationTable, totals: &InvoiceTotals) -> String {
        let template =
            Resources::get("fatura.tex").expect("template should be embedded in the binary");
        let template = String::from_utf8_lossy(template.data.as_ref());

        let about = self.config.about();
        let client = self.config.client();
        let invoice = self.config.invoice();
        let period = invoice.month().period();

        template
            .replace("@@NUMBER@@", &LatexString::escape(invoice.number()))
            .replace(
                "@@ISSUE-DATE@@",
                &self.issue_date.formatted("{day}/{month}/{year}"),
            )
            .replace("@@PERIOD@@", &period.to_string())
            .replace("@@COMPANY@@", &LatexString::escape(about.company()))
            .replace("@@CNPJ@@", &LatexString::escape(about.cnpj()))
            .replace("@@ADDRESS@@", &LatexString::escape(about.address()))
            .replace("@@PIX@@", &LatexString::escape(about.pix()))
            .replace("@@CLIENT-NAME@@", &LatexString::escape(client.name()))
            .replace("@@CLIENT-CNPJ@@", &LatexString::escape(client.cnpj()))
            .replace("@@CLIENT-ADDRESS@@", &LatexString::escape(client.address()))
            .replace("@@SERVICE-ROWS@@", &self.service_rows(table, totals))
            .replace("@@SUMMARY-ROWS@@", &self.summary_rows(totals))
    }

    /// One bold header row per task, its descriptions below it, and the
    /// grand total of every billed line at the bottom.
    fn service_rows(&self, table: &AggregationTable, totals: &InvoiceTotals) -> String {
        let rate = decimal(self.config.invoice().hourly_rate());
        let hourly_rate = self.config.invoice().hourly_rate();
        let mut rows = String::new();

        for (label, group_rows) in table.groups() {
            let hours: f64 = group_rows.iter().map(Row::hours).sum();

            rows.push_str(&format!(
                "    \\rowcolor{{gray!20}} \\textbf{{{}}} & {} & {} & {} \\\\ \\hline\n",
                LatexString::escape(label),
                rate,
                decimal(hours),
                decimal(hours * hourly_rate),
            ));

            for row in group_rows {
                rows.push_str(&format!(
                    "    {} & {} & {} & {} \\\\ \\hline\n",
                    LatexString::escape(row.description()),
                    rate,
                    decimal(row.hours()),
                    decimal(row.hours() * hourly_rate),
                ));
            }
        }

        rows.push_str(&format!(
            "    \\textbf{{Total}} & & \\textbf{{{}}} & \\textbf{{R\\$ {}}} \\\\ \\hline\n",
            decimal(totals.total_hours()),
            decimal(totals.total_value()),
        ));

        rows
    }

    /// The totals table: monthly hours per task, the contracted-hours
    /// charge, the signed overtime line, the fixed Internet fee and the
    /// final consolidated total.
    fn summary_rows(&self, totals: &InvoiceTotals) -> String {
        let rate = decimal(self.config.invoice().hourly_rate());
        let mut rows = String::new();

        for group in totals.groups() {
            rows.push_str(&format!(
                "    Horas Mensais ({}) & {} & & \\\\ \\hline\n",
                LatexString::escape(group.label()),
                decimal(group.hours()),
            ));
        }

        rows.push_str(&format!(
            "    Total de Horas (Mês) & {} & & \\\\ \\hline\n",
            decimal(totals.total_hours()),
        ));

        rows.push_str(&format!(
            "    \\rowcolor{{gray!20}} \\textbf{{Horas Totais (Cobradas)}} & {} & {} & {} \\\\ \\hline\n",
            decimal(totals.contracted_hours()),
            rate,
            decimal(totals.contracted_value()),
        ));

        rows.push_str(&format!(
            "    Horas Extras & {} & {} & {} \\\\ \\hline\n",
            decimal(totals.overtime_hours()),
            rate,
            decimal(totals.overtime_value()),
        ));

        rows.push_str(&format!(
            "    Internet & & & {} \\\\ \\hline\n",
            decimal(totals.fixed_fee()),
        ));

        rows.push_str(&format!(
            "    \\rowcolor{{gray!20}} \\textbf{{Total (Cobrado)}} & & {} & \\textbf{{{}}} \\\\ \\hline\n",
            rate,
            decimal(totals.final_total()),
        ));

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::config::ConfigBuilder;
    use crate::invoice::{aggregate, Entry, GroupBy};
    use crate::time::Month;
    use crate::toml_input::Global;

    #[test]
    fn test_decimal_formatting() {
        assert_eq!(decimal(8120.0), "8120,00");
        assert_eq!(decimal(0.5), "0,50");
        assert_eq!(decimal(1.239), "1,24");
        assert_eq!(decimal(-10.0), "-10,00");
    }

    fn make_config() -> Config {
        let global: Global = toml::from_str(concat!(
            "[about]\n",
            "company = \"Fulano & Filhos LTDA\"\n",
            "cnpj = \"12.345.678/0001-90\"\n",
            "address = \"Rua das Laranjeiras, 100\"\n",
            "pix = \"fulano@example.com\"\n",
            "\n",
            "[client]\n",
            "name = \"Cliente S.A.\"\n",
            "cnpj = \"98.765.432/0001-10\"\n",
            "address = \"Av. Paulista, 1000\"\n",
            "\n",
            "[api]\n",
            "url = \"https://example.com/graphql\"\n",
            "email = \"fulano@example.com\"\n",
            "password = \"hunter2\"\n",
            "\n",
            "[invoice]\n",
            "number = \"3\"\n",
            "hourly_rate = 50.0\n",
            "month = \"06/2025\"\n",
        ))
        .expect("config should parse");

        ConfigBuilder::new(global).build()
    }

    fn make_source() -> String {
        let config = make_config();
        let date = "2025-06-10".parse().unwrap();

        let entries = [
            Entry::new(date, "Fix bug", 120.0, "development", "Dev"),
            Entry::new(date, "Suporte em produção", 50.0, "development", "Suporte"),
        ];
        let table = aggregate(&entries, GroupBy::Task, &[]);
        let totals = InvoiceTotals::compute(
            &table,
            config.invoice().hourly_rate(),
            Month::June,
            0.0,
            config.invoice().contracted_hours(),
            config.invoice().fixed_fee(),
        );

        let generator = LatexGenerator::new(&config, "2025-07-01".parse().unwrap());
        generator.source(&table, &totals)
    }

    #[test]
    fn test_source_header() {
        let source = make_source();

        assert!(source.contains("FATURA Nº 3"));
        assert!(source.contains("01/07/2025"));
        assert!(source.contains("01/06/2025 a 30/06/2025"));
        // the ampersand in the company name has to be escaped
        assert!(source.contains("Fulano \\& Filhos LTDA"));
        assert!(!source.contains("@@"));
    }

    #[test]
    fn test_source_service_rows() {
        let source = make_source();

        assert!(source.contains("\\textbf{Dev} & 50,00 & 120,00 & 6000,00"));
        assert!(source.contains("Fix bug & 50,00 & 120,00 & 6000,00"));
        assert!(source.contains("\\textbf{170,00} & \\textbf{R\\$ 8500,00}"));
    }

    #[test]
    fn test_source_summary_rows() {
        let source = make_source();

        assert!(source.contains("Horas Mensais (Dev) & 120,00"));
        assert!(source.contains("\\textbf{Horas Totais (Cobradas)} & 160,00 & 50,00 & 8000,00"));
        assert!(source.contains("Horas Extras & 10,00 & 50,00 & 500,00"));
        assert!(source.contains("Internet & & & 120,00"));
        assert!(source.contains("\\textbf{Total (Cobrado)} & & 50,00 & \\textbf{8120,00}"));
    }
}
