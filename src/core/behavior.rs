//! Scroll-behavior evaluation.
//!
//! Everything in this module is platform-free: rectangles and scroll
//! offsets come in, style directives come out. The wasm frame loop owns
//! reading the DOM and applying the directives, which keeps every progress
//! formula testable on the host.

use smallvec::SmallVec;

// Defaults applied when a markup parameter is absent, unparsable,
// non-finite, or zero. Zero counts as unset, so rotate's divisor can
// never be zero.
pub const DEFAULT_ROTATE_SPEED: f32 = 10.0;
pub const DEFAULT_SLIDE_RANGE_VW: f32 = 50.0;
pub const DEFAULT_SCROLL_DISTANCE_VW: f32 = 400.0;
pub const DEFAULT_PARALLAX_SPEED_PX: f32 = 100.0;
pub const DEFAULT_ZOOM_SCALE: f32 = 2.0;
pub const DEFAULT_FADE_TRIGGER: f32 = 0.8;

// Parallax content reveals once the wrapper top crosses this fraction of
// the viewport height.
pub const PARALLAX_REVEAL_FRACTION: f32 = 0.5;

// Parameter attribute names, one per behavior that takes a number.
pub const ATTR_ROTATE_SPEED: &str = "data-rotate-speed";
pub const ATTR_SLIDE_RANGE: &str = "data-slide-range";
pub const ATTR_SCROLL_DISTANCE: &str = "data-scroll-distance";
pub const ATTR_PARALLAX_SPEED: &str = "data-parallax-speed";
pub const ATTR_ZOOM_SCALE: &str = "data-zoom-scale";
pub const ATTR_TRIGGER_POINT: &str = "data-trigger-point";

/// Viewport-relative bounding rectangle of a registered wrapper.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub bottom: f32,
    pub height: f32,
}

impl Rect {
    /// Visibility predicate: any part of the rect overlaps the viewport.
    #[inline]
    pub fn intersects_viewport(&self, viewport_h: f32) -> bool {
        self.bottom > 0.0 && self.top < viewport_h
    }
}

/// Roles a child element may declare under an animated wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildRole {
    HeroImage,
    HeroText,
    SlidingText,
    HorizontalContent,
    ParallaxBg,
    ParallaxContent,
    ZoomImage,
    FadeContent,
}

impl ChildRole {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "hero-image" => Some(Self::HeroImage),
            "hero-text" => Some(Self::HeroText),
            "sliding-text" => Some(Self::SlidingText),
            "horizontal-content" => Some(Self::HorizontalContent),
            "parallax-bg" => Some(Self::ParallaxBg),
            "parallax-content" => Some(Self::ParallaxContent),
            "zoom-image" => Some(Self::ZoomImage),
            "fade-content" => Some(Self::FadeContent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeroImage => "hero-image",
            Self::HeroText => "hero-text",
            Self::SlidingText => "sliding-text",
            Self::HorizontalContent => "horizontal-content",
            Self::ParallaxBg => "parallax-bg",
            Self::ParallaxContent => "parallax-content",
            Self::ZoomImage => "zoom-image",
            Self::FadeContent => "fade-content",
        }
    }
}

/// A single style write the frame loop should perform.
///
/// Reveals are idempotent class adds; there is deliberately no op that
/// retracts one, so reveals stay one-way no matter what a formula does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleOp {
    RotateDeg(f32),
    Scale(f32),
    TranslateXVw(f32),
    TranslateYPx(f32),
    Opacity(f32),
    Reveal,
}

/// Where a [`StyleOp`] lands: the wrapper itself or its role children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    Wrapper,
    Child(ChildRole),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Directive {
    pub target: Target,
    pub op: StyleOp,
}

/// Most behaviors emit one or two writes per frame.
pub type Directives = SmallVec<[Directive; 2]>;

/// One animation kind per variant, each owning its parameter schema.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Behavior {
    Rotate { speed: f32 },
    Hero,
    Sliding { range_vw: f32 },
    Horizontal { distance_vw: f32 },
    Parallax { bg_speed_px: f32 },
    Zoom { scale: f32 },
    FadeIn { trigger: f32 },
}

impl Behavior {
    /// Build a behavior from its markup tag, pulling numeric parameters
    /// through `lookup` (attribute name -> raw attribute value). Returns
    /// `None` for unknown tags.
    pub fn from_markup<F>(tag: &str, lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let num = |attr: &str, default: f32| parse_param(lookup(attr).as_deref(), default);
        match tag {
            "rotate" => Some(Self::Rotate {
                speed: num(ATTR_ROTATE_SPEED, DEFAULT_ROTATE_SPEED),
            }),
            "hero" => Some(Self::Hero),
            "sliding" => Some(Self::Sliding {
                range_vw: num(ATTR_SLIDE_RANGE, DEFAULT_SLIDE_RANGE_VW),
            }),
            "horizontal" => Some(Self::Horizontal {
                distance_vw: num(ATTR_SCROLL_DISTANCE, DEFAULT_SCROLL_DISTANCE_VW),
            }),
            "parallax" => Some(Self::Parallax {
                bg_speed_px: num(ATTR_PARALLAX_SPEED, DEFAULT_PARALLAX_SPEED_PX),
            }),
            "zoom" => Some(Self::Zoom {
                scale: num(ATTR_ZOOM_SCALE, DEFAULT_ZOOM_SCALE),
            }),
            "fadein" => Some(Self::FadeIn {
                trigger: num(ATTR_TRIGGER_POINT, DEFAULT_FADE_TRIGGER),
            }),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rotate { .. } => "rotate",
            Self::Hero => "hero",
            Self::Sliding { .. } => "sliding",
            Self::Horizontal { .. } => "horizontal",
            Self::Parallax { .. } => "parallax",
            Self::Zoom { .. } => "zoom",
            Self::FadeIn { .. } => "fadein",
        }
    }

    /// Whether the entry counts as animating this frame. Rotate ignores
    /// visibility; everything else requires viewport intersection.
    #[inline]
    pub fn is_active(&self, rect: Rect, viewport_h: f32) -> bool {
        matches!(self, Self::Rotate { .. }) || rect.intersects_viewport(viewport_h)
    }

    /// Evaluate the behavior for one frame. Callers gate on
    /// [`Behavior::is_active`]; the formulas assume the rect intersects the
    /// viewport (rotate excepted, it only needs the scroll offset).
    pub fn evaluate(&self, rect: Rect, viewport_h: f32, scroll_top: f32) -> Directives {
        let mut out = Directives::new();
        match *self {
            Self::Rotate { speed } => {
                out.push(Directive {
                    target: Target::Wrapper,
                    op: StyleOp::RotateDeg(rotate_angle(scroll_top, speed)),
                });
            }
            Self::Hero => {
                let progress = rect.top.abs() / viewport_h;
                out.push(Directive {
                    target: Target::Child(ChildRole::HeroImage),
                    op: StyleOp::Scale(1.0 + progress * 2.0),
                });
                out.push(Directive {
                    target: Target::Child(ChildRole::HeroText),
                    op: StyleOp::Opacity((1.0 - progress * 2.0).max(0.0)),
                });
            }
            Self::Sliding { range_vw } => {
                let progress = -rect.top / viewport_h;
                out.push(Directive {
                    target: Target::Child(ChildRole::SlidingText),
                    op: StyleOp::TranslateXVw(progress * range_vw - range_vw / 2.0),
                });
            }
            Self::Horizontal { distance_vw } => {
                let progress = span_progress(rect.top, rect.height - viewport_h);
                out.push(Directive {
                    target: Target::Child(ChildRole::HorizontalContent),
                    op: StyleOp::TranslateXVw(-progress * distance_vw),
                });
            }
            Self::Parallax { bg_speed_px } => {
                let progress = -rect.top / viewport_h;
                out.push(Directive {
                    target: Target::Child(ChildRole::ParallaxBg),
                    op: StyleOp::TranslateYPx(progress * bg_speed_px),
                });
                if rect.top < viewport_h * PARALLAX_REVEAL_FRACTION {
                    out.push(Directive {
                        target: Target::Child(ChildRole::ParallaxContent),
                        op: StyleOp::Reveal,
                    });
                }
            }
            Self::Zoom { scale } => {
                let progress = span_progress(rect.top, rect.height - viewport_h);
                out.push(Directive {
                    target: Target::Child(ChildRole::ZoomImage),
                    op: StyleOp::Scale(1.0 + progress * scale),
                });
            }
            Self::FadeIn { trigger } => {
                if rect.top < viewport_h * trigger {
                    out.push(Directive {
                        target: Target::Child(ChildRole::FadeContent),
                        op: StyleOp::Reveal,
                    });
                }
            }
        }
        out
    }
}

/// Rotation angle for a scroll offset, always in `[0, 360)`.
#[inline]
pub fn rotate_angle(scroll_top: f32, speed: f32) -> f32 {
    (scroll_top / speed).rem_euclid(360.0)
}

/// Progress of `top` through a scroll span, clamped to `[0, 1]`.
///
/// A wrapper no taller than the viewport has no span to scroll through;
/// progress snaps to 1 once the wrapper passes the viewport top, else 0.
#[inline]
pub fn span_progress(top: f32, span: f32) -> f32 {
    if span.abs() < f32::EPSILON {
        if top <= 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        (-top / span).clamp(0.0, 1.0)
    }
}

/// Parse a numeric markup parameter. Absent, unparsable, non-finite, and
/// zero values all fall back to `default`.
pub fn parse_param(raw: Option<&str>, default: f32) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(default)
}

/// Registry key for a wrapper: the explicit element id when present, else
/// its class list joined with `-` plus a caller-supplied random suffix.
pub fn derive_entry_key(id: Option<&str>, class_attr: &str, suffix: &str) -> String {
    match id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let label: Vec<&str> = class_attr.split_whitespace().collect();
            format!("{}-{}", label.join("-"), suffix)
        }
    }
}
