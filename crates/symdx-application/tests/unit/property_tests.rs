//! Property tests for ranking and vital-sign rules

use proptest::prelude::*;

use symdx_application::domain_services::{
    confidence_from_similarity, cosine_similarity, evaluate_vitals,
};
use symdx_domain::value_objects::VitalsInput;

fn reading() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(0.0_f64..250.0)
}

proptest! {
    #[test]
    fn confidence_is_always_a_percentage(similarity in any::<f32>()) {
        let confidence = confidence_from_similarity(similarity);
        prop_assert!(confidence <= 100);
    }

    #[test]
    fn cosine_stays_in_range(
        a in prop::collection::vec(-10.0_f32..10.0, 1..32),
        b in prop::collection::vec(-10.0_f32..10.0, 1..32),
    ) {
        let s = cosine_similarity(&a, &b);
        prop_assert!(s.is_finite());
        prop_assert!((-1.0 - 1e-5..=1.0 + 1e-5).contains(&s));
    }

    #[test]
    fn rules_are_deterministic(
        temperature in reading(),
        bp_systolic in reading(),
        bp_diastolic in reading(),
        spo2 in reading(),
        pulse in reading(),
    ) {
        let vitals = VitalsInput { temperature, bp_systolic, bp_diastolic, spo2, pulse };
        let first = evaluate_vitals(&vitals);
        let second = evaluate_vitals(&vitals);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= 4);
    }

    #[test]
    fn absent_readings_never_fire(bp_diastolic in reading()) {
        let vitals = VitalsInput { bp_diastolic, ..VitalsInput::default() };
        prop_assert!(evaluate_vitals(&vitals).is_empty());
    }
}
