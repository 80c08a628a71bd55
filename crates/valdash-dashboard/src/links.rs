use valdash_types::OverviewData;

use crate::config::DashboardConfig;

/// Explorer base URL for the configured network, e.g. `https://prater.beaconcha.in`
pub fn base_browser_url(config: &DashboardConfig) -> String {
    format!("https://{}{}", config.network.net, config.explorer_host)
}

/// Explorer page for the validators behind `overview`.
///
/// Foreign validators link to their own page; owned validators link to a
/// dashboard of the whole selection. `None` when neither is known.
pub fn browser_url(config: &DashboardConfig, overview: &OverviewData) -> Option<String> {
    let base = base_browser_url(config);
    match (&overview.foreign_validator, overview.chart_selector()) {
        (Some(foreign), _) => Some(format!("{}/validator/{}", base, foreign.pubkey)),
        (None, Some(selector)) => Some(format!("{}/dashboard?validators={}", base, selector)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valdash_types::{ForeignValidator, ValidatorSelector};

    #[test]
    fn test_base_url_per_network() {
        let mut config = DashboardConfig::default();
        assert_eq!(base_browser_url(&config), "https://beaconcha.in");

        config.network.net = "prater.".to_string();
        assert_eq!(base_browser_url(&config), "https://prater.beaconcha.in");
    }

    #[test]
    fn test_owned_validators_link_to_dashboard() {
        let overview = OverviewData {
            lazy_chart_validators: Some(ValidatorSelector::new("1,2")),
            ..Default::default()
        };
        assert_eq!(
            browser_url(&DashboardConfig::default(), &overview).as_deref(),
            Some("https://beaconcha.in/dashboard?validators=1,2")
        );
    }

    #[test]
    fn test_foreign_validator_links_to_validator_page() {
        let overview = OverviewData {
            lazy_chart_validators: Some(ValidatorSelector::new("1,2")),
            foreign_validator: Some(ForeignValidator {
                pubkey: "0xa1b2".to_string(),
            }),
            ..Default::default()
        };
        assert_eq!(
            browser_url(&DashboardConfig::default(), &overview).as_deref(),
            Some("https://beaconcha.in/validator/0xa1b2")
        );
    }

    #[test]
    fn test_no_link_without_context() {
        assert_eq!(browser_url(&DashboardConfig::default(), &OverviewData::default()), None);
    }
}
