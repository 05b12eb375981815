// rules.rs - Birth/survival thresholds

/// Thresholds of a two-state totalistic rule on the Moore neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleParameters {
    pub survive_min: u8,
    pub survive_max: u8,
    pub birth_count: u8,
}

impl RuleParameters {
    /// B3/S23.
    pub const CONWAY: RuleParameters = RuleParameters {
        survive_min: 2,
        survive_max: 3,
        birth_count: 3,
    };

    pub const fn new(survive_min: u8, survive_max: u8, birth_count: u8) -> Self {
        Self { survive_min, survive_max, birth_count }
    }

    pub fn next_state(&self, is_alive: bool, neighbours: u8) -> bool {
        next_state(is_alive, neighbours, self)
    }
}

impl Default for RuleParameters {
    fn default() -> Self {
        Self::CONWAY
    }
}

pub fn next_state(is_alive: bool, neighbours: u8, rules: &RuleParameters) -> bool {
    match (is_alive, neighbours) {
        (true, n) if (rules.survive_min..=rules.survive_max).contains(&n) => true, // Survival
        (false, n) if n == rules.birth_count                               => true, // Birth
        _                                                                  => false, // Death or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_rule_table() {
        let rules = RuleParameters::default();
        for n in 0..=8 {
            assert_eq!(rules.next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(rules.next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn custom_thresholds() {
        // S1-4/B2
        let rules = RuleParameters::new(1, 4, 2);
        assert!(rules.next_state(true, 1));
        assert!(rules.next_state(true, 4));
        assert!(!rules.next_state(true, 5));
        assert!(rules.next_state(false, 2));
        assert!(!rules.next_state(false, 3));
    }

    #[test]
    fn empty_survival_range_kills_everything_alive() {
        let rules = RuleParameters::new(4, 3, 3);
        assert!((0..=8).all(|n| !rules.next_state(true, n)));
    }
}
