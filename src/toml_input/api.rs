use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    url: String,
    email: String,
    password: String,
}

impl Api {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}
