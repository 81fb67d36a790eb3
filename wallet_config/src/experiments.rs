use error_stack::{Report, report};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error::Error;

/// Feature flag gates. Names must match the gate key on the gating console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum FeatureFlag {
    #[serde(rename = "cloudflare-gateway")]
    CloudflareGateway,
    #[serde(rename = "currency_conversion")]
    CurrencyConversion,
    #[serde(rename = "feed-tab")]
    FeedTab,
    #[serde(rename = "for-aggregator")]
    ForAggregator,
    #[serde(rename = "language-selection")]
    LanguageSelection,
    #[serde(rename = "mev-blocker")]
    MevBlocker,
    #[serde(rename = "portion-fields")]
    PortionFields,
    #[serde(rename = "restore-wallet")]
    RestoreWallet,
    #[serde(rename = "refactor-seed-phrase-native")]
    SeedPhraseRefactorNative,
    #[serde(rename = "unitags")]
    Unitags,
}

impl FeatureFlag {
    pub fn supported_flags() -> Vec<FeatureFlag> {
        FeatureFlag::iter().collect()
    }

    /// Gate key on the gating console
    pub fn gate_name(self) -> &'static str {
        match self {
            Self::CloudflareGateway => "cloudflare-gateway",
            Self::CurrencyConversion => "currency_conversion",
            Self::FeedTab => "feed-tab",
            Self::ForAggregator => "for-aggregator",
            Self::LanguageSelection => "language-selection",
            Self::MevBlocker => "mev-blocker",
            Self::PortionFields => "portion-fields",
            Self::RestoreWallet => "restore-wallet",
            Self::SeedPhraseRefactorNative => "refactor-seed-phrase-native",
            Self::Unitags => "unitags",
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.gate_name())
    }
}

impl TryFrom<&str> for FeatureFlag {
    type Error = Report<Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        FeatureFlag::iter()
            .find(|flag| flag.gate_name() == value)
            .ok_or_else(|| report!(Error::UnknownFeatureFlag(value.to_string())))
    }
}

/// Experiments. Names must match the experiment name on the gating console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ExperimentName {
    #[serde(rename = "onboarding-ab-1")]
    OnboardingNewCreateImportFlow,
    #[serde(rename = "skeleton_loading_1")]
    SkeletonLoading,
    #[serde(rename = "swap_rewrite_variants")]
    SwapRewriteVariants,
}

impl ExperimentName {
    /// Experiment name on the gating console
    pub fn experiment_name(self) -> &'static str {
        match self {
            Self::OnboardingNewCreateImportFlow => "onboarding-ab-1",
            Self::SkeletonLoading => "skeleton_loading_1",
            Self::SwapRewriteVariants => "swap_rewrite_variants",
        }
    }
}

impl fmt::Display for ExperimentName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.experiment_name())
    }
}

impl TryFrom<&str> for ExperimentName {
    type Error = Report<Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ExperimentName::iter()
            .find(|experiment| experiment.experiment_name() == value)
            .ok_or_else(|| report!(Error::UnknownExperiment(value.to_string())))
    }
}

/// Parameter names within an experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ExperimentParam {
    #[serde(rename = "enabled")]
    Enabled,
}

impl ExperimentParam {
    pub fn param_name(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
        }
    }
}

impl fmt::Display for ExperimentParam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.param_name())
    }
}

impl TryFrom<&str> for ExperimentParam {
    type Error = Report<Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ExperimentParam::iter()
            .find(|param| param.param_name() == value)
            .ok_or_else(|| report!(Error::UnknownExperimentParam(value.to_string())))
    }
}

/// Dynamic configs. Names must match the config name on the gating console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum DynamicConfig {
    #[serde(rename = "force_upgrade")]
    ForceUpgrade,
}

impl DynamicConfig {
    pub fn config_name(self) -> &'static str {
        match self {
            Self::ForceUpgrade => "force_upgrade",
        }
    }
}

impl fmt::Display for DynamicConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.config_name())
    }
}

impl TryFrom<&str> for DynamicConfig {
    type Error = Report<Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DynamicConfig::iter()
            .find(|config| config.config_name() == value)
            .ok_or_else(|| report!(Error::UnknownDynamicConfig(value.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flag_display() {
        assert_eq!(FeatureFlag::CloudflareGateway.to_string(), "cloudflare-gateway");
        assert_eq!(FeatureFlag::CurrencyConversion.to_string(), "currency_conversion");
        assert_eq!(
            FeatureFlag::SeedPhraseRefactorNative.to_string(),
            "refactor-seed-phrase-native"
        );
        assert_eq!(FeatureFlag::Unitags.to_string(), "unitags");
    }

    #[test]
    fn test_supported_flags() {
        let flags = FeatureFlag::supported_flags();

        assert_eq!(flags.len(), 10);
        assert!(flags.contains(&FeatureFlag::CloudflareGateway));
        assert!(flags.contains(&FeatureFlag::MevBlocker));
        assert!(flags.contains(&FeatureFlag::RestoreWallet));
    }

    #[test]
    fn test_registry_round_trips() {
        for flag in FeatureFlag::iter() {
            assert_eq!(FeatureFlag::try_from(flag.gate_name()).expect("Should work"), flag);
        }
        for experiment in ExperimentName::iter() {
            assert_eq!(
                ExperimentName::try_from(experiment.experiment_name()).expect("Should work"),
                experiment
            );
        }
        for param in ExperimentParam::iter() {
            assert_eq!(ExperimentParam::try_from(param.param_name()).expect("Should work"), param);
        }
        for config in DynamicConfig::iter() {
            assert_eq!(DynamicConfig::try_from(config.config_name()).expect("Should work"), config);
        }
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert!(FeatureFlag::try_from("no-such-flag").is_err());
        assert!(ExperimentName::try_from("onboarding-ab-2").is_err());
        assert!(ExperimentParam::try_from("disabled").is_err());
        assert!(DynamicConfig::try_from("force_downgrade").is_err());
    }

    #[test]
    fn test_experiment_names() {
        assert_eq!(
            ExperimentName::OnboardingNewCreateImportFlow.experiment_name(),
            "onboarding-ab-1"
        );
        assert_eq!(ExperimentName::SkeletonLoading.experiment_name(), "skeleton_loading_1");
        assert_eq!(
            ExperimentName::SwapRewriteVariants.experiment_name(),
            "swap_rewrite_variants"
        );
    }

    #[test]
    fn test_serde_uses_console_names() {
        let serialized =
            serde_json::to_string(&FeatureFlag::CloudflareGateway).expect("Should serialize");
        assert_eq!(serialized, "\"cloudflare-gateway\"");

        let deserialized: ExperimentName =
            serde_json::from_str("\"swap_rewrite_variants\"").expect("Should deserialize");
        assert_eq!(deserialized, ExperimentName::SwapRewriteVariants);

        let config: DynamicConfig =
            serde_json::from_str("\"force_upgrade\"").expect("Should deserialize");
        assert_eq!(config, DynamicConfig::ForceUpgrade);
    }
}
