use note_duration::{
    lilypond_render::RendersToLilypond,
    primitives::{BaseValue, Duration},
};

#[test]
fn test_render_no_dot() {
    let rendered: Vec<String> = BaseValue::ALL
        .into_iter()
        .map(|base| Duration::from(base).to_string())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "8", "4", "2", "1", "1/2", "1/4", "1/8", "1/16", "1/32", "1/64",
            "1/128", "1/256"
        ]
    );
}

#[test]
fn test_render_dots() {
    assert_eq!(
        Duration::new(BaseValue::Quarter, 1).unwrap().to_string(),
        "1/4."
    );
    assert_eq!(
        Duration::new(BaseValue::SixtyFourth, 3).unwrap().to_string(),
        "1/64..."
    );
    assert_eq!(
        Duration::new(BaseValue::Large, 2).unwrap().to_string(),
        "8.."
    );
}

#[test]
fn test_time_signature_denominator() {
    assert_eq!(BaseValue::Large.time_signature_denominator(), None);
    assert_eq!(BaseValue::Long.time_signature_denominator(), None);
    assert_eq!(BaseValue::DoubleWhole.time_signature_denominator(), None);
    let denominators: Vec<Option<u32>> = BaseValue::ALL[3..]
        .iter()
        .map(|base| base.time_signature_denominator())
        .collect();
    assert_eq!(
        denominators,
        [1u32, 2, 4, 8, 16, 32, 64, 128, 256]
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>()
    );
    for base in BaseValue::ALL {
        if let Some(denom) = base.time_signature_denominator() {
            assert_eq!(
                BaseValue::from_time_signature_denominator(denom),
                Some(base)
            );
        }
    }
    // dots are ignored
    assert_eq!(
        Duration::new(BaseValue::Eighth, 2)
            .unwrap()
            .time_signature_denominator(),
        Some(8)
    );
}

#[test]
fn test_render_lilypond() {
    assert_eq!(Duration::HALF.render_lilypond(), "2");
    assert_eq!(
        Duration::new(BaseValue::Long, 1).unwrap().render_lilypond(),
        r"\longa."
    );
    assert_eq!(
        Duration::new(BaseValue::OneTwentyEighth, 0)
            .unwrap()
            .render_lilypond(),
        "128"
    );
}
