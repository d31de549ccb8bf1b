use serde_json::{json, Value};

use fatura::api::RawRecord;

/// A well-formed timesheet record with a task association.
#[must_use]
#[allow(dead_code)]
pub fn record(start_date: &str, description: &str, duration: f64, task: &str) -> RawRecord {
    RawRecord::new(
        json!({
            "start_date": start_date,
            "description": description,
            "duration": duration,
        }),
        json!({ "task": task }),
    )
}

/// A record with fully custom dynamic fields and associations.
#[must_use]
#[allow(dead_code)]
pub fn raw(fields: Value, associations: Value) -> RawRecord {
    RawRecord::new(fields, associations)
}

#[allow(dead_code)]
pub const CONFIG: &str = concat!(
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
);
