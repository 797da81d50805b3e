// Host-side tests for the pure behavior evaluation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/behavior.rs"]
mod behavior;

use behavior::*;

fn rect(top: f32, height: f32) -> Rect {
    Rect {
        top,
        bottom: top + height,
        height,
    }
}

const VH: f32 = 800.0;

fn ops_for(directives: &Directives, role: ChildRole) -> Vec<StyleOp> {
    directives
        .iter()
        .filter(|d| d.target == Target::Child(role))
        .map(|d| d.op)
        .collect()
}

#[test]
fn rotate_angle_stays_in_unit_circle() {
    for &(scroll, speed) in &[
        (0.0, 10.0),
        (123.0, 10.0),
        (3600.0, 10.0),
        (99999.5, 7.3),
        (1.0, 0.25),
    ] {
        let angle = rotate_angle(scroll, speed);
        assert!(
            (0.0..360.0).contains(&angle),
            "angle {angle} out of range for scroll={scroll} speed={speed}"
        );
    }
    // A full revolution wraps back to zero
    assert_eq!(rotate_angle(3600.0, 10.0), 0.0);
    assert_eq!(rotate_angle(3650.0, 10.0), 5.0);
}

#[test]
fn rotate_is_active_regardless_of_visibility() {
    let offscreen = rect(5000.0, 300.0);
    assert!(Behavior::Rotate { speed: 10.0 }.is_active(offscreen, VH));
    assert!(!Behavior::Hero.is_active(offscreen, VH));
}

#[test]
fn visibility_predicate_boundaries() {
    // Bottom exactly at the viewport top does not count as visible
    assert!(!rect(-300.0, 300.0).intersects_viewport(VH));
    // Top exactly at the viewport bottom does not count either
    assert!(!rect(VH, 300.0).intersects_viewport(VH));
    assert!(rect(-299.0, 300.0).intersects_viewport(VH));
    assert!(rect(VH - 1.0, 300.0).intersects_viewport(VH));
}

#[test]
fn active_count_is_visible_entries_plus_rotates() {
    let entries = [
        (Behavior::Hero, rect(100.0, 900.0)),              // visible
        (Behavior::Sliding { range_vw: 50.0 }, rect(-100.0, 600.0)), // visible
        (Behavior::Zoom { scale: 2.0 }, rect(2000.0, 900.0)),        // below fold
        (Behavior::Rotate { speed: 10.0 }, rect(2000.0, 100.0)),     // rotate, below fold
    ];
    let active = entries
        .iter()
        .filter(|(b, r)| b.is_active(*r, VH))
        .count();
    assert_eq!(active, 3);
}

#[test]
fn hero_scales_image_and_fades_text() {
    let d = Behavior::Hero.evaluate(rect(-200.0, 900.0), VH, 200.0);
    assert_eq!(ops_for(&d, ChildRole::HeroImage), vec![StyleOp::Scale(1.5)]);
    assert_eq!(ops_for(&d, ChildRole::HeroText), vec![StyleOp::Opacity(0.5)]);
}

#[test]
fn hero_text_opacity_floors_at_zero() {
    let d = Behavior::Hero.evaluate(rect(-600.0, 900.0), VH, 600.0);
    assert_eq!(ops_for(&d, ChildRole::HeroText), vec![StyleOp::Opacity(0.0)]);
}

#[test]
fn sliding_translation_spans_centered_range() {
    let sliding = Behavior::Sliding {
        range_vw: DEFAULT_SLIDE_RANGE_VW,
    };
    // Wrapper top at the viewport top: slide sits at -range/2
    let d = sliding.evaluate(rect(0.0, 900.0), VH, 0.0);
    assert_eq!(
        ops_for(&d, ChildRole::SlidingText),
        vec![StyleOp::TranslateXVw(-25.0)]
    );
    // One full viewport of travel: +range/2
    let d = sliding.evaluate(rect(-VH, 900.0), VH, VH);
    assert_eq!(
        ops_for(&d, ChildRole::SlidingText),
        vec![StyleOp::TranslateXVw(25.0)]
    );
}

#[test]
fn horizontal_progress_clamps_to_unit_interval() {
    // Tall pinned section: 3000px wrapper against an 800px viewport
    assert_eq!(span_progress(100.0, 2200.0), 0.0);
    assert_eq!(span_progress(-1100.0, 2200.0), 0.5);
    assert_eq!(span_progress(-2200.0, 2200.0), 1.0);
    assert_eq!(span_progress(-5000.0, 2200.0), 1.0);
}

#[test]
fn horizontal_zero_span_stays_in_unit_interval() {
    // Wrapper exactly as tall as the viewport: no scroll room
    assert_eq!(span_progress(10.0, 0.0), 0.0);
    assert_eq!(span_progress(0.0, 0.0), 1.0);
    assert_eq!(span_progress(-10.0, 0.0), 1.0);

    let horizontal = Behavior::Horizontal {
        distance_vw: 400.0,
    };
    let d = horizontal.evaluate(rect(-10.0, VH), VH, 10.0);
    assert_eq!(
        ops_for(&d, ChildRole::HorizontalContent),
        vec![StyleOp::TranslateXVw(-400.0)]
    );
}

#[test]
fn horizontal_translates_content_by_distance() {
    let horizontal = Behavior::Horizontal {
        distance_vw: 400.0,
    };
    let d = horizontal.evaluate(rect(-1100.0, 3000.0), VH, 1100.0);
    assert_eq!(
        ops_for(&d, ChildRole::HorizontalContent),
        vec![StyleOp::TranslateXVw(-200.0)]
    );
}

#[test]
fn zoom_scale_grows_with_progress() {
    let zoom = Behavior::Zoom {
        scale: DEFAULT_ZOOM_SCALE,
    };
    let d = zoom.evaluate(rect(-1100.0, 3000.0), VH, 1100.0);
    assert_eq!(ops_for(&d, ChildRole::ZoomImage), vec![StyleOp::Scale(2.0)]);
    let d = zoom.evaluate(rect(-2200.0, 3000.0), VH, 2200.0);
    assert_eq!(ops_for(&d, ChildRole::ZoomImage), vec![StyleOp::Scale(3.0)]);
}

#[test]
fn parallax_translates_background() {
    let parallax = Behavior::Parallax {
        bg_speed_px: DEFAULT_PARALLAX_SPEED_PX,
    };
    let d = parallax.evaluate(rect(-400.0, 900.0), VH, 400.0);
    assert_eq!(
        ops_for(&d, ChildRole::ParallaxBg),
        vec![StyleOp::TranslateYPx(50.0)]
    );
}

#[test]
fn parallax_reveal_triggers_at_half_viewport_and_never_retracts() {
    let parallax = Behavior::Parallax { bg_speed_px: 100.0 };
    // Above the trigger: no reveal yet
    let d = parallax.evaluate(rect(VH * 0.6, 900.0), VH, 0.0);
    assert!(ops_for(&d, ChildRole::ParallaxContent).is_empty());
    // Once past the trigger, every deeper position keeps emitting the
    // idempotent reveal; nothing ever retracts it
    for top in [VH * 0.4, 0.0, -VH] {
        let d = parallax.evaluate(rect(top, 900.0), VH, -top);
        assert_eq!(
            ops_for(&d, ChildRole::ParallaxContent),
            vec![StyleOp::Reveal],
            "top={top}"
        );
    }
}

#[test]
fn fadein_triggers_on_configured_fraction() {
    let default_fade = Behavior::FadeIn {
        trigger: DEFAULT_FADE_TRIGGER,
    };
    let d = default_fade.evaluate(rect(VH * 0.81, 300.0), VH, 0.0);
    assert!(d.is_empty());
    let d = default_fade.evaluate(rect(VH * 0.79, 300.0), VH, 0.0);
    assert_eq!(ops_for(&d, ChildRole::FadeContent), vec![StyleOp::Reveal]);

    let early = Behavior::FadeIn { trigger: 0.3 };
    let d = early.evaluate(rect(VH * 0.5, 300.0), VH, 0.0);
    assert!(d.is_empty());
    let d = early.evaluate(rect(VH * 0.2, 300.0), VH, 0.0);
    assert_eq!(ops_for(&d, ChildRole::FadeContent), vec![StyleOp::Reveal]);
}

#[test]
fn parse_param_falls_back_on_bad_input() {
    assert_eq!(parse_param(None, 10.0), 10.0);
    assert_eq!(parse_param(Some("abc"), 10.0), 10.0);
    assert_eq!(parse_param(Some("NaN"), 10.0), 10.0);
    assert_eq!(parse_param(Some("inf"), 10.0), 10.0);
    // Zero counts as unset, so rotate never divides by zero
    assert_eq!(parse_param(Some("0"), 10.0), 10.0);
    assert_eq!(parse_param(Some("2.5"), 10.0), 2.5);
    assert_eq!(parse_param(Some(" 3 "), 10.0), 3.0);
    assert_eq!(parse_param(Some("-60"), 100.0), -60.0);
}

#[test]
fn from_markup_builds_typed_configs() {
    let none = |_: &str| None;
    assert_eq!(
        Behavior::from_markup("rotate", none),
        Some(Behavior::Rotate {
            speed: DEFAULT_ROTATE_SPEED
        })
    );
    assert_eq!(Behavior::from_markup("marquee", none), None);

    let custom = |attr: &str| (attr == ATTR_ROTATE_SPEED).then(|| "25".to_string());
    assert_eq!(
        Behavior::from_markup("rotate", custom),
        Some(Behavior::Rotate { speed: 25.0 })
    );

    let fade = |attr: &str| (attr == ATTR_TRIGGER_POINT).then(|| "0.3".to_string());
    assert_eq!(
        Behavior::from_markup("fadein", fade),
        Some(Behavior::FadeIn { trigger: 0.3 })
    );
}

#[test]
fn behavior_tags_round_trip() {
    let none = |_: &str| None;
    for tag in [
        "rotate",
        "hero",
        "sliding",
        "horizontal",
        "parallax",
        "zoom",
        "fadein",
    ] {
        let behavior = Behavior::from_markup(tag, none).expect(tag);
        assert_eq!(behavior.tag(), tag);
    }
}

#[test]
fn child_roles_round_trip() {
    for role in [
        ChildRole::HeroImage,
        ChildRole::HeroText,
        ChildRole::SlidingText,
        ChildRole::HorizontalContent,
        ChildRole::ParallaxBg,
        ChildRole::ParallaxContent,
        ChildRole::ZoomImage,
        ChildRole::FadeContent,
    ] {
        assert_eq!(ChildRole::parse(role.as_str()), Some(role));
    }
    assert_eq!(ChildRole::parse("sparkles"), None);
}

#[test]
fn entry_keys_prefer_the_explicit_id() {
    assert_eq!(derive_entry_key(Some("hero"), "section wide", "x1"), "hero");
    assert_eq!(
        derive_entry_key(None, "section  wide", "a1b2"),
        "section-wide-a1b2"
    );
    // An empty id attribute falls through to the generated label
    assert_eq!(derive_entry_key(Some(""), "card", "ff"), "card-ff");
}
