use serde::{Deserialize, Serialize};

/// Where the student intends to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRegion {
    #[default]
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Europe,
    Canada,
    Other,
}

impl TargetRegion {
    /// Regions whose universities commonly ask international applicants for an English test.
    pub fn expects_english_test(&self) -> bool {
        !matches!(self, TargetRegion::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_labels() {
        assert_eq!(serde_json::to_string(&TargetRegion::Usa).unwrap(), "\"USA\"");
        let uk: TargetRegion = serde_json::from_str("\"UK\"").unwrap();
        assert_eq!(uk, TargetRegion::Uk);
        assert!(uk.expects_english_test());
        assert!(!TargetRegion::Other.expects_english_test());
    }
}
