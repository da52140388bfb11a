//! Property tests of the conjugate-update algebra

use colstat_bayes::{
    bayesian_update, beta_pdf, credible_interval, posterior_predictive, BetaParameters,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn update_is_associative(
        alpha in 0.1f64..100.0,
        beta in 0.1f64..100.0,
        s1 in 0u64..1000,
        f1 in 0u64..1000,
        s2 in 0u64..1000,
        f2 in 0u64..1000,
    ) {
        let prior = BetaParameters::new(alpha, beta).unwrap();
        let sequential = bayesian_update(bayesian_update(prior, s1, f1), s2, f2);
        let summed = bayesian_update(prior, s1 + s2, f1 + f2);
        prop_assert_eq!(sequential, summed);
    }

    #[test]
    fn update_preserves_positive_shapes(
        alpha in 0.1f64..100.0,
        beta in 0.1f64..100.0,
        successes in 0u64..10_000,
        failures in 0u64..10_000,
    ) {
        let posterior = bayesian_update(
            BetaParameters::new(alpha, beta).unwrap(),
            successes,
            failures,
        );
        prop_assert!(posterior.alpha() > 0.0);
        prop_assert!(posterior.beta() > 0.0);
    }

    #[test]
    fn predictive_probabilities_stay_in_the_open_unit_interval(
        alpha in 0.1f64..50.0,
        beta in 0.1f64..50.0,
        outcomes in proptest::collection::vec(any::<bool>(), 0..200),
    ) {
        let prior = BetaParameters::new(alpha, beta).unwrap();
        let probs = posterior_predictive(prior, &outcomes);
        prop_assert_eq!(probs.len(), outcomes.len());
        for p in probs {
            prop_assert!(p > 0.0 && p < 1.0);
        }
    }

    #[test]
    fn credible_interval_is_ordered_and_in_support(
        alpha in 0.5f64..80.0,
        beta in 0.5f64..80.0,
        confidence in 0.5f64..0.99,
    ) {
        let params = BetaParameters::new(alpha, beta).unwrap();
        let interval = credible_interval(params, confidence).unwrap();
        prop_assert!(interval.lower <= interval.upper);
        prop_assert!(interval.lower >= 0.0);
        prop_assert!(interval.upper <= 1.0);
        // The posterior mean carries most of the mass around it
        prop_assert!(interval.contains(params.mean()));
    }

    #[test]
    fn density_is_non_negative(
        alpha in 0.1f64..100.0,
        beta in 0.1f64..100.0,
        x in -0.5f64..1.5,
    ) {
        let v = beta_pdf(alpha, beta, x).unwrap();
        prop_assert!(v >= 0.0);
    }
}
