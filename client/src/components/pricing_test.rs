use super::*;

fn tier(name: &str) -> &'static Tier {
    TIERS.iter().find(|t| t.name == name).unwrap()
}

#[test]
fn monthly_prices() {
    assert_eq!(tier_price(tier("Starter"), BillingCycle::Monthly), Some(49));
    assert_eq!(tier_price(tier("Pro"), BillingCycle::Monthly), Some(199));
}

#[test]
fn yearly_prices_are_discounted() {
    assert_eq!(tier_price(tier("Starter"), BillingCycle::Yearly), Some(39));
    assert_eq!(tier_price(tier("Pro"), BillingCycle::Yearly), Some(159));
    for t in TIERS.iter().filter(|t| t.prices.is_some()) {
        assert!(tier_price(t, BillingCycle::Yearly) < tier_price(t, BillingCycle::Monthly));
    }
}

#[test]
fn enterprise_is_custom_in_both_cycles() {
    for cycle in [BillingCycle::Monthly, BillingCycle::Yearly] {
        assert_eq!(tier_price(tier("Enterprise"), cycle), None);
        assert_eq!(price_label(tier("Enterprise"), cycle), "Custom");
    }
}

#[test]
fn price_label_has_dollar_sign() {
    assert_eq!(price_label(tier("Pro"), BillingCycle::Yearly), "$159");
}

#[test]
fn exactly_one_highlighted_tier() {
    let highlighted: Vec<_> = TIERS.iter().filter(|t| t.highlight).map(|t| t.name).collect();
    assert_eq!(highlighted, vec!["Pro"]);
}

#[test]
fn default_cycle_is_monthly() {
    assert_eq!(BillingCycle::default(), BillingCycle::Monthly);
}
