//! Property tests for the quiz scorers.

use proptest::prelude::*;

use profile_compass::domain::quiz::{
    map_to_blend_code, normalize, score_mbti, DiscAnswer, MBTI_QUESTIONS,
};

proptest! {
    #[test]
    fn normalized_scores_span_zero_to_hundred(raw in prop::array::uniform4(-16i32..=32)) {
        let scores = normalize(raw);
        prop_assert!(scores.iter().all(|s| *s <= 100));
        if raw.iter().all(|r| *r == raw[0]) {
            prop_assert_eq!(scores, [50; 4]);
        } else {
            prop_assert!(scores.contains(&0));
            prop_assert!(scores.contains(&100));
        }
    }

    #[test]
    fn every_score_vector_maps_to_a_registered_blend(scores in prop::array::uniform4(0u8..=100)) {
        let code = map_to_blend_code(scores);
        prop_assert!(code.is_registered(), "{:?} -> {}", scores, code.code());
    }

    #[test]
    fn mbti_confidence_is_at_least_half(
        responses in prop::collection::vec(1u8..=7, MBTI_QUESTIONS.len())
    ) {
        let result = score_mbti(&responses).unwrap();
        prop_assert_eq!(result.axes.len(), 5);
        for axis in &result.axes {
            let c = axis.confidence.value();
            prop_assert!((50..=100).contains(&c));
        }
        prop_assert!(result.code.starts_with(result.mbti.code()));
    }

    #[test]
    fn out_of_scale_responses_are_rejected(bad in prop_oneof![Just(0u8), 8u8..=255]) {
        let mut responses = vec![4u8; MBTI_QUESTIONS.len()];
        responses[3] = bad;
        prop_assert!(score_mbti(&responses).is_err());
    }
}

#[test]
fn opposite_top_two_falls_back_to_pure() {
    // D and S are across the circle from each other
    let code = map_to_blend_code([90, 10, 85, 20]);
    assert_eq!(code.code(), "D");
}

#[test]
fn disc_answer_deserializes_from_indices() {
    let answer: DiscAnswer = serde_json::from_str(r#"{"most": 2, "least": 0}"#).unwrap();
    assert_eq!((answer.most, answer.least), (2, 0));
}
