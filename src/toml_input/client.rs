use serde::Deserialize;

/// The invoiced client's identity.
#[derive(Debug, Clone, Deserialize)]
pub struct Client {
    name: String,
    cnpj: String,
    address: String,
}

impl Client {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cnpj(&self) -> &str {
        &self.cnpj
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}
