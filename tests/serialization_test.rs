//! Serde support for cost and encoder configuration

#[cfg(feature = "serialization")]
mod serialization_tests {
    use lexsim::distance::{DistanceError, EditCosts, Operation};
    use lexsim::phonetic::{HwPolicy, Soundex};

    #[test]
    fn test_edit_costs_json_roundtrip() {
        let costs = EditCosts::new(0.5, 1.5, 3.0).unwrap();
        let json = serde_json::to_string(&costs).unwrap();
        assert_eq!(json, r#"{"deletion":0.5,"insertion":1.5,"substitution":3.0}"#);

        let decoded: EditCosts = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, costs);
    }

    #[test]
    fn test_edit_costs_missing_fields_use_defaults() {
        let costs: EditCosts = serde_json::from_str(r#"{"deletion":0.5}"#).unwrap();
        assert_eq!(costs, EditCosts::default().with_deletion(0.5).unwrap());

        let costs: EditCosts = serde_json::from_str("{}").unwrap();
        assert_eq!(costs, EditCosts::default());
    }

    #[test]
    fn test_edit_costs_are_validated_on_deserialize() {
        let err = serde_json::from_str::<EditCosts>(r#"{"insertion":-1.0}"#).unwrap_err();
        let expected = DistanceError::InvalidCost {
            operation: Operation::Insertion,
            value: -1.0,
        };
        assert!(err.to_string().contains(&expected.to_string()), "{}", err);
    }

    #[test]
    fn test_soundex_config() {
        let soundex = Soundex::new(HwPolicy::Separator);
        let json = serde_json::to_string(&soundex).unwrap();
        assert_eq!(json, r#"{"hw_policy":"separator"}"#);

        let decoded: Soundex = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, soundex);

        let default: Soundex = serde_json::from_str("{}").unwrap();
        assert_eq!(default.hw_policy(), HwPolicy::Transparent);
    }
}
