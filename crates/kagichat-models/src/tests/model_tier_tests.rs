#[cfg(test)]
mod model_tier_tests {
    use crate::types::ModelTier;

    #[test]
    fn test_known_tiers_round_trip_identifiers() {
        assert_eq!(ModelTier::KiQuick.as_str(), "ki_quick");
        assert_eq!(ModelTier::KiResearch.as_str(), "ki_research");
        assert_eq!(ModelTier::KiDeepResearch.as_str(), "ki_deep_research");
    }

    #[test]
    fn test_from_str_aliases() {
        let test_cases = vec![
            ("ki_quick", ModelTier::KiQuick),
            ("KI_QUICK", ModelTier::KiQuick),
            ("quick", ModelTier::KiQuick),
            ("ki-research", ModelTier::KiResearch),
            ("deep-research", ModelTier::KiDeepResearch),
        ];

        for (input, expected) in test_cases {
            assert_eq!(ModelTier::from_str(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_unknown_tier_is_custom() {
        let tier = ModelTier::from_str("gemini-2-5-pro");
        assert_eq!(tier, ModelTier::Custom("gemini-2-5-pro".to_string()));
        assert_eq!(tier.as_str(), "gemini-2-5-pro");
        assert_eq!(tier.to_string(), "gemini-2-5-pro");
    }

    #[test]
    fn test_default_is_quick() {
        assert_eq!(ModelTier::default(), ModelTier::KiQuick);
    }

    #[test]
    fn test_serializes_as_plain_identifier() {
        let json = serde_json::to_string(&ModelTier::KiResearch).unwrap();
        assert_eq!(json, "\"ki_research\"");

        let parsed: ModelTier = serde_json::from_str("\"ki_deep_research\"").unwrap();
        assert_eq!(parsed, ModelTier::KiDeepResearch);
    }
}
