use serde::Deserialize;

/// Issuer identity shown in the "dados do emissor" block.
#[derive(Debug, Clone, Deserialize)]
pub struct About {
    company: String,
    cnpj: String,
    address: String,
    pix: String,
}

impl About {
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    #[must_use]
    pub fn cnpj(&self) -> &str {
        &self.cnpj
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn pix(&self) -> &str {
        &self.pix
    }
}
