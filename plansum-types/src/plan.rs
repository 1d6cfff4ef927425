use serde::{Deserialize, Deserializer, Serialize};

/// The part of a Terraform JSON plan that plansum consumes.
///
/// A plan with no changes may omit `resource_changes` or set it to `null`;
/// both decode as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_changes: Vec<ResourceChange>,
}

/// One entry of `resource_changes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceChange {
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub change: Change,
}

impl ResourceChange {
    pub fn new<A, I, S>(address: A, actions: I) -> Self
    where
        A: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            address: address.into(),
            change: Change {
                actions: actions.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn actions(&self) -> &[String] {
        &self.change.actions
    }
}

/// Action tokens are kept verbatim. An unexpected token, or a missing action
/// list, is a classification problem, not a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<String>,
}

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
