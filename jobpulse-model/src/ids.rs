use crate::error::ModelError;

/// Strongly typed, server-assigned identifier for an application record.
///
/// The backend hands these out as opaque strings; the client never
/// generates one itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn from_string(id: String) -> Result<Self, ModelError> {
        if id.is_empty() {
            return Err(ModelError::InvalidRecord(
                "application id cannot be empty".to_string(),
            ));
        }
        Ok(ApplicationId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ApplicationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_id() {
        assert!(ApplicationId::from_string(String::new()).is_err());
    }

    #[test]
    fn round_trips_opaque_string() {
        let id = ApplicationId::from_string("66b2f0c4e1a3".to_string())
            .expect("valid id");
        assert_eq!(id.as_str(), "66b2f0c4e1a3");
    }
}
