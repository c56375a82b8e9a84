use serde::{Deserialize, Serialize};

/// Display name for the location currently shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// Empty when the upstream geocoder did not report one.
    pub country: String,
}

impl Place {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }

    /// Header label, e.g. `Berlin, Germany`.
    pub fn label(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_omits_missing_country() {
        assert_eq!(Place::new("Berlin", "Germany").label(), "Berlin, Germany");
        assert_eq!(Place::new("Current Location", "").label(), "Current Location");
    }
}
