mod model_tier_tests;
