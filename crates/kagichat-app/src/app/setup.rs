use std::time::Duration;

use kagichat_llm_api::KagiConfig;
use kagichat_models::ModelTier;

use crate::cli::Cli;

/// Client configuration from the `KAGI_*` environment, overridden by CLI flags
pub fn setup_from_cli(cli: &Cli) -> KagiConfig {
    config_from_cli(cli, KagiConfig::from_env())
}

/// Apply CLI flags on top of `base`.
/// Precedence: CLI flags > environment > defaults
pub fn config_from_cli(cli: &Cli, base: KagiConfig) -> KagiConfig {
    let mut config = base;

    if let Some(model) = cli.model.as_deref() {
        config.model = ModelTier::from_str(model);
    }
    if cli.no_internet {
        config.internet_access = false;
    }
    if let Some(lens) = cli.lens.as_ref() {
        config.lens_id = Some(lens.clone());
    }
    if let Some(url) = cli.url.as_ref() {
        config.url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = cli.cache_ttl {
        config.cache_ttl = Duration::from_secs(secs);
    }
    config.verbose |= cli.verbose;
    config.log_raw_responses |= cli.log_raw;

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags_override_base() {
        let cli = Cli::try_parse_from([
            "kagichat",
            "--model",
            "ki_deep_research",
            "--no-internet",
            "--lens",
            "lens-9",
            "--cache-ttl",
            "10",
            "--log-raw",
        ])
        .unwrap();
        let base = KagiConfig {
            cookie: "token".to_string(),
            ..KagiConfig::default()
        };

        let config = config_from_cli(&cli, base);
        assert_eq!(config.model, ModelTier::KiDeepResearch);
        assert!(!config.internet_access);
        assert_eq!(config.lens_id.as_deref(), Some("lens-9"));
        assert_eq!(config.cache_ttl, Duration::from_secs(10));
        assert!(config.log_raw_responses);
        assert_eq!(config.cookie, "token");
    }

    #[test]
    fn test_no_flags_keeps_base() {
        let cli = Cli::try_parse_from(["kagichat"]).unwrap();
        let base = KagiConfig {
            model: ModelTier::KiResearch,
            internet_access: false,
            ..KagiConfig::default()
        };

        assert_eq!(config_from_cli(&cli, base.clone()), base);
    }
}
