//! End-to-end fitting scenarios against a deterministic stub renderer.
use largetty::{
    catalog::DEFAULT_TIERS,
    fit::{fit, max_line_width},
    test_support::StubRenderer,
    FitRequest, FontId,
};
use pretty_assertions::assert_eq;

fn renderer() -> StubRenderer {
    StubRenderer::new()
        .with_font("big", 4, 3)
        .with_font("standard", 3, 3)
        .with_font("small", 2, 2)
        .with_font("mini", 1, 2)
        .with_font("term", 1, 1)
}

fn tiers() -> Vec<FontId> {
    DEFAULT_TIERS.map(FontId::from).to_vec()
}

#[test]
fn short_text_keeps_preferred_font() {
    let result = fit(&renderer(), &tiers(), &FitRequest::new("HI", "standard", 200, 3));
    assert_eq!(result.font_used, "standard");
    assert_eq!(result.block, "HHHIII\nHHHIII\nHHHIII");
    assert!(result.complete);
}

#[test]
fn empty_text_is_trivially_complete() {
    for font in ["big", "term", "unknown"] {
        let result = fit(&renderer(), &tiers(), &FitRequest::new("", font, 10, 1));
        assert_eq!(result.block, "");
        assert_eq!(result.font_used, font);
        assert!(result.complete);
    }
}

#[test]
fn long_sentence_wraps_into_smaller_font() {
    let text = "a very long sentence that cannot possibly render on one row at this width";
    let result = fit(&renderer(), &tiers(), &FitRequest::new(text, "big", 40, 3));
    assert_eq!(result.font_used, "mini");
    assert!(result.complete);
    assert_eq!(
        result.block,
        [
            "a very long sentence that cannot",
            "a very long sentence that cannot",
            "possibly render on one row at this width",
            "possibly render on one row at this width",
        ]
        .join("\n")
    );
    assert!(result.block.lines().all(|l| l.len() <= 40));
}

#[test]
fn unbreakable_word_is_split_by_character() {
    let text = "supercalifragilisticexpialidocious";
    let result = fit(&renderer(), &tiers(), &FitRequest::new(text, "big", 20, 3));
    assert_eq!(result.font_used, "mini");
    assert!(result.complete);
    assert_eq!(
        result.block,
        [
            "supercalifragilistic",
            "supercalifragilistic",
            "expialidocious",
            "expialidocious",
        ]
        .join("\n")
    );
}

#[test]
fn unbreakable_word_is_truncated_when_rows_run_out() {
    let text = "supercalifragilisticexpialidocious";
    let result = fit(&renderer(), &tiers(), &FitRequest::new(text, "big", 5, 3));
    assert_eq!(result.font_used, "term");
    assert!(!result.complete);
    assert_eq!(result.block, "super\ncalif\nragil");
}

#[test]
fn non_ascii_is_stripped_before_rendering() {
    let result = fit(&renderer(), &tiers(), &FitRequest::new("café", "term", 80, 1));
    assert_eq!(result.block, "caf");
    assert!(result.complete);
}

#[test]
fn preferred_font_outside_tiers_is_tried_first() {
    let r = renderer().with_font("fancy", 2, 1);
    let result = fit(&r, &tiers(), &FitRequest::new("abc", "fancy", 6, 1));
    assert_eq!(result.font_used, "fancy");
    assert_eq!(result.block, "aabbcc");
}

#[test]
fn unknown_preferred_font_renders_nothing() {
    // Rendering with an unknown font yields an empty block, which trivially fits
    let result = fit(&renderer(), &tiers(), &FitRequest::new("abc", "missing", 6, 1));
    assert_eq!(result.font_used, "missing");
    assert_eq!(max_line_width(&result.block), 0);
}

#[test]
fn empty_tier_list_uses_preferred_font_alone() {
    let result = fit(&renderer(), &[], &FitRequest::new("abcdef", "small", 4, 1));
    assert_eq!(result.font_used, "small");
    assert!(!result.complete);
    assert_eq!(result.block, "aabb\naabb");
}
