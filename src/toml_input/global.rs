use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::toml_input::{About, Api, Client, Invoice};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    latex_mk_path: Option<PathBuf>,
}

/// The whole `fatura.toml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct Global {
    about: About,
    client: Client,
    api: Api,
    invoice: Invoice,
    config: Option<Config>,
}

impl Global {
    #[must_use]
    pub fn about(&self) -> &About {
        &self.about
    }

    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    #[must_use]
    pub fn api(&self) -> &Api {
        &self.api
    }

    #[must_use]
    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    #[must_use]
    pub fn latex_mk_path(&self) -> Option<&Path> {
        self.config
            .as_ref()
            .and_then(|config| config.latex_mk_path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_config_file() {
        let global: Global = toml::from_str(concat!(
            "[about]\n",
            "company = \"Fulano de Tal LTDA\"\n",
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

        assert_eq!(global.about().company(), "Fulano de Tal LTDA");
        assert_eq!(global.client().name(), "Cliente S.A.");
        assert_eq!(global.api().url(), "https://example.com/graphql");
        assert_eq!(global.invoice().number(), "3");
        assert_eq!(global.latex_mk_path(), None);
    }

    #[test]
    fn test_latex_mk_path_is_optional() {
        let global: Global = toml::from_str(concat!(
            "[about]\n",
            "company = \"a\"\n",
            "cnpj = \"b\"\n",
            "address = \"c\"\n",
            "pix = \"d\"\n",
            "[client]\n",
            "name = \"a\"\n",
            "cnpj = \"b\"\n",
            "address = \"c\"\n",
            "[api]\n",
            "url = \"a\"\n",
            "email = \"b\"\n",
            "password = \"c\"\n",
            "[invoice]\n",
            "number = \"1\"\n",
            "hourly_rate = 1.0\n",
            "month = \"01/2025\"\n",
            "[config]\n",
            "latex_mk_path = \"/usr/bin/latexmk\"\n",
        ))
        .expect("config should parse");

        assert_eq!(
            global.latex_mk_path(),
            Some(Path::new("/usr/bin/latexmk"))
        );
    }
}
