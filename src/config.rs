use std::path::{Path, PathBuf};

use crate::time::Period;
use crate::toml_input::{About, Api, Client, Global, Invoice};
use crate::utils;

pub struct Config {
    global: Global,
    output_dir: PathBuf,
    preserve_dir: Option<PathBuf>,
}

pub struct ConfigBuilder {
    global: Global,
    output_dir: Option<PathBuf>,
    preserve_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new(global: Global) -> Self {
        Self {
            global,
            output_dir: None,
            preserve_dir: None,
        }
    }

    pub fn output_dir(&mut self, output_dir: impl Into<PathBuf>) -> &mut Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn preserve_dir(&mut self, preserve_dir: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(preserve_dir.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        Config {
            global: self.global,
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from("faturas")),
            preserve_dir: self.preserve_dir,
        }
    }
}

impl Config {
    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let global: Global = toml::from_str(&utils::read_to_string(path)?)?;

        Ok(ConfigBuilder::new(global))
    }

    #[must_use]
    pub fn about(&self) -> &About {
        self.global.about()
    }

    #[must_use]
    pub fn client(&self) -> &Client {
        self.global.client()
    }

    #[must_use]
    pub fn api(&self) -> &Api {
        self.global.api()
    }

    #[must_use]
    pub fn invoice(&self) -> &Invoice {
        self.global.invoice()
    }

    #[must_use]
    pub fn latex_mk_path(&self) -> Option<&Path> {
        self.global.latex_mk_path()
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn preserve_dir(&self) -> Option<&Path> {
        self.preserve_dir.as_deref()
    }

    /// The deterministic name of the output file, derived from the invoice
    /// number and the invoiced period.
    #[must_use]
    pub fn file_name(&self) -> String {
        let period = self.invoice().month().period();

        format!(
            "Fatura_{}_{}_a_{}.pdf",
            self.invoice().number(),
            period.start().formatted("{day}-{month}-{year}"),
            period.end().formatted("{day}-{month}-{year}"),
        )
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.file_name())
    }

    #[must_use]
    pub fn period(&self) -> Period {
        self.invoice().month().period()
    }
}
