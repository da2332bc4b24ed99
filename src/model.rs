use serde::{Deserialize, Deserializer};

/// A result set for one competition round, as published upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub year: i32,
    pub display_name: String,
    pub are_results_official: bool,
}

impl Round {
    /// Route this round is reachable at, e.g. `/42`.
    pub fn path(&self) -> String {
        format!("/{}", self.id)
    }

    /// Label shown in navigation, e.g. `Spring 2020`.
    pub fn label(&self) -> String {
        format!("{} {}", self.display_name, self.year)
    }
}

// Upstream emits numeric ids; hand-written pages tend to use strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
