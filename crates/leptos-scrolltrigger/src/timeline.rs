//! Tween and timeline sampling.
//!
//! A timeline is an ordered set of tweens, each with an absolute start
//! offset, so stages may overlap. Sampling at a playhead position yields
//! the style values every open tween contributes at that instant; a tween
//! stays silent before its offset, and when two open tweens drive the
//! same property of the same target, the later one wins.

use crate::ease::{lerp, Ease, Rgb};

/// One animated property with its endpoint values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleProp {
    /// Horizontal translation in pixels.
    X { from: f64, to: f64 },
    /// Vertical translation in pixels.
    Y { from: f64, to: f64 },
    /// Horizontal translation as a percentage of the element's own width.
    XPercent { from: f64, to: f64 },
    Scale { from: f64, to: f64 },
    /// Z-axis rotation in degrees.
    Rotation { from: f64, to: f64 },
    /// X-axis (perspective) rotation in degrees.
    RotationX { from: f64, to: f64 },
    Opacity { from: f64, to: f64 },
    /// Gaussian blur radius in pixels.
    Blur { from: f64, to: f64 },
    /// Element width as a percentage of its parent.
    WidthPercent { from: f64, to: f64 },
    /// Vertical background-position as a percentage.
    BackgroundPosY { from: f64, to: f64 },
    BackgroundColor { from: Rgb, to: Rgb },
    /// Alpha of a fixed-geometry glow shadow.
    GlowAlpha { color: Rgb, from: f64, to: f64 },
}

/// A property sampled at a playhead position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    X(f64),
    Y(f64),
    XPercent(f64),
    Scale(f64),
    Rotation(f64),
    RotationX(f64),
    Opacity(f64),
    Blur(f64),
    WidthPercent(f64),
    BackgroundPosY(f64),
    BackgroundColor(Rgb),
    GlowAlpha(Rgb, f64),
}

impl StyleProp {
    fn sample(self, t: f64) -> StyleValue {
        match self {
            StyleProp::X { from, to } => StyleValue::X(lerp(from, to, t)),
            StyleProp::Y { from, to } => StyleValue::Y(lerp(from, to, t)),
            StyleProp::XPercent { from, to } => StyleValue::XPercent(lerp(from, to, t)),
            StyleProp::Scale { from, to } => StyleValue::Scale(lerp(from, to, t)),
            StyleProp::Rotation { from, to } => StyleValue::Rotation(lerp(from, to, t)),
            StyleProp::RotationX { from, to } => StyleValue::RotationX(lerp(from, to, t)),
            StyleProp::Opacity { from, to } => StyleValue::Opacity(lerp(from, to, t)),
            StyleProp::Blur { from, to } => StyleValue::Blur(lerp(from, to, t)),
            StyleProp::WidthPercent { from, to } => StyleValue::WidthPercent(lerp(from, to, t)),
            StyleProp::BackgroundPosY { from, to } => StyleValue::BackgroundPosY(lerp(from, to, t)),
            StyleProp::BackgroundColor { from, to } => StyleValue::BackgroundColor(from.mix(to, t)),
            StyleProp::GlowAlpha { color, from, to } => {
                StyleValue::GlowAlpha(color, lerp(from, to, t))
            }
        }
    }
}

impl StyleValue {
    /// Property identity used for later-tween-wins override.
    fn kind(&self) -> u8 {
        match self {
            StyleValue::X(_) => 0,
            StyleValue::Y(_) => 1,
            StyleValue::XPercent(_) => 2,
            StyleValue::Scale(_) => 3,
            StyleValue::Rotation(_) => 4,
            StyleValue::RotationX(_) => 5,
            StyleValue::Opacity(_) => 6,
            StyleValue::Blur(_) => 7,
            StyleValue::WidthPercent(_) => 8,
            StyleValue::BackgroundPosY(_) => 9,
            StyleValue::BackgroundColor(_) => 10,
            StyleValue::GlowAlpha(_, _) => 11,
        }
    }
}

/// One tween: a target element, its animated properties, and where it
/// sits on the timeline.
#[derive(Clone, Debug)]
pub struct Tween {
    pub target: String,
    pub props: Vec<StyleProp>,
    /// Playback length in timeline seconds.
    pub duration: f64,
    /// Absolute start offset in timeline seconds.
    pub at: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(target: impl Into<String>, props: Vec<StyleProp>) -> Self {
        Tween {
            target: target.into(),
            props,
            duration: 0.5,
            at: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn at(mut self, offset: f64) -> Self {
        self.at = offset;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Eased local progress at timeline position `t`, or `None` before
    /// the tween's window opens.
    ///
    /// A tween touches its properties only from its start offset onward
    /// and holds its `to` values after; zero-duration tweens step at
    /// their offset.
    fn local_progress(&self, t: f64) -> Option<f64> {
        if t < self.at {
            return None;
        }
        let raw = if self.duration <= 0.0 {
            1.0
        } else {
            ((t - self.at) / self.duration).clamp(0.0, 1.0)
        };
        Some(self.ease.apply(raw))
    }
}

/// An ordered set of tweens sharing one playhead.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    pub tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new(tweens: Vec<Tween>) -> Self {
        Timeline { tweens }
    }

    /// Total run length: the furthest tween end.
    pub fn duration(&self) -> f64 {
        self.tweens
            .iter()
            .map(|tw| tw.at + tw.duration)
            .fold(0.0, f64::max)
    }

    /// Sample every open tween at playhead `t` (timeline seconds), grouped
    /// per target with later tweens overriding earlier ones per property.
    /// Tweens whose window has not opened yet contribute nothing, so
    /// sequential stages on one property hand over cleanly.
    pub fn sample(&self, t: f64) -> Vec<(String, Vec<StyleValue>)> {
        let mut out: Vec<(String, Vec<StyleValue>)> = Vec::new();
        for tween in &self.tweens {
            let Some(eased) = tween.local_progress(t) else {
                continue;
            };
            let idx = match out.iter().position(|(id, _)| *id == tween.target) {
                Some(idx) => idx,
                None => {
                    out.push((tween.target.clone(), Vec::new()));
                    out.len() - 1
                }
            };
            let entry = &mut out[idx].1;
            for prop in &tween.props {
                let value = prop.sample(eased);
                match entry.iter_mut().find(|v| v.kind() == value.kind()) {
                    Some(slot) => *slot = value,
                    None => entry.push(value),
                }
            }
        }
        out
    }
}

/// Render sampled values into CSS (property, value) pairs.
///
/// Transform-contributing values collapse into a single `transform`
/// string in a fixed order.
pub fn css_updates(values: &[StyleValue]) -> Vec<(&'static str, String)> {
    let mut translate: Option<(f64, f64)> = None;
    let mut x_percent = None;
    let mut rotation_x = None;
    let mut rotation = None;
    let mut scale = None;
    let mut out = Vec::new();

    for value in values {
        match *value {
            StyleValue::X(v) => {
                let slot = translate.get_or_insert((0.0, 0.0));
                slot.0 = v;
            }
            StyleValue::Y(v) => {
                let slot = translate.get_or_insert((0.0, 0.0));
                slot.1 = v;
            }
            StyleValue::XPercent(v) => x_percent = Some(v),
            StyleValue::RotationX(v) => rotation_x = Some(v),
            StyleValue::Rotation(v) => rotation = Some(v),
            StyleValue::Scale(v) => scale = Some(v),
            StyleValue::Opacity(v) => out.push(("opacity", format!("{:.4}", v))),
            StyleValue::Blur(v) => out.push((
                "filter",
                if v <= 0.005 {
                    "none".to_string()
                } else {
                    format!("blur({:.2}px)", v)
                },
            )),
            StyleValue::WidthPercent(v) => out.push(("width", format!("{:.2}%", v))),
            StyleValue::BackgroundPosY(v) => {
                out.push(("background-position", format!("50% {:.2}%", v)))
            }
            StyleValue::BackgroundColor(rgb) => out.push(("background-color", rgb.to_css())),
            StyleValue::GlowAlpha(rgb, a) => out.push((
                "box-shadow",
                format!(
                    "0 0 50px rgba({}, {}, {}, {:.3})",
                    rgb.r,
                    rgb.g,
                    rgb.b,
                    a.clamp(0.0, 1.0)
                ),
            )),
        }
    }

    let mut transform = String::new();
    if let Some((x, y)) = translate {
        transform.push_str(&format!("translate3d({:.2}px, {:.2}px, 0) ", x, y));
    }
    if let Some(p) = x_percent {
        transform.push_str(&format!("translateX({:.3}%) ", p));
    }
    if let Some(deg) = rotation_x {
        transform.push_str(&format!("rotateX({:.2}deg) ", deg));
    }
    if let Some(deg) = rotation {
        transform.push_str(&format!("rotate({:.2}deg) ", deg));
    }
    if let Some(s) = scale {
        transform.push_str(&format!("scale({:.4}) ", s));
    }
    if !transform.is_empty() {
        out.push(("transform", transform.trim_end().to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_fade(target: &str, at: f64, duration: f64) -> Tween {
        Tween::new(
            target,
            vec![StyleProp::Opacity {
                from: 0.0,
                to: 1.0,
            }],
        )
        .duration(duration)
        .at(at)
        .ease(Ease::Linear)
    }

    #[test]
    fn test_duration_is_furthest_end() {
        let tl = Timeline::new(vec![make_fade("a", 0.0, 0.5), make_fade("b", 0.7, 0.2)]);
        assert!((tl.duration() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_silent_before_start_holds_to_after() {
        let tl = Timeline::new(vec![make_fade("a", 0.5, 0.2)]);
        assert!(tl.sample(0.0).is_empty());
        let opening = tl.sample(0.5);
        assert_eq!(opening[0].1[0], StyleValue::Opacity(0.0));
        let after = tl.sample(1.0);
        assert_eq!(after[0].1[0], StyleValue::Opacity(1.0));
    }

    #[test]
    fn test_stage_overlap() {
        // Text fades while the circle is still growing, as in a pinned
        // multi-stage section.
        let tl = Timeline::new(vec![
            Tween::new(
                "circle",
                vec![StyleProp::Scale {
                    from: 1.0,
                    to: 5.0,
                }],
            )
            .duration(0.5)
            .ease(Ease::Linear),
            make_fade("text", 0.1, 0.2),
        ]);
        let mid = tl.sample(0.2);
        let circle = &mid.iter().find(|(id, _)| id == "circle").unwrap().1;
        let text = &mid.iter().find(|(id, _)| id == "text").unwrap().1;
        assert_eq!(circle[0], StyleValue::Scale(1.0 + 4.0 * 0.4));
        assert_eq!(text[0], StyleValue::Opacity(0.5));
    }

    #[test]
    fn test_later_tween_overrides_same_prop() {
        // Two growth stages on one element: past the second stage's start
        // the first stage no longer contributes.
        let tl = Timeline::new(vec![
            Tween::new(
                "circle",
                vec![StyleProp::Scale {
                    from: 1.0,
                    to: 5.0,
                }],
            )
            .duration(0.5)
            .ease(Ease::Linear),
            Tween::new(
                "circle",
                vec![StyleProp::Scale {
                    from: 5.0,
                    to: 17.0,
                }],
            )
            .duration(0.5)
            .at(0.6)
            .ease(Ease::Linear),
        ]);
        // While only the first stage is open it owns the property.
        let early = tl.sample(0.2);
        assert_eq!(early[0].1, vec![StyleValue::Scale(1.0 + 4.0 * 0.4)]);
        // Between the stages the first stage's end value holds.
        let between = tl.sample(0.55);
        assert_eq!(between[0].1, vec![StyleValue::Scale(5.0)]);
        let values = tl.sample(0.85);
        assert_eq!(values[0].1, vec![StyleValue::Scale(11.0)]);
    }

    #[test]
    fn test_zero_duration_steps() {
        let tw = Tween::new(
            "a",
            vec![StyleProp::Opacity {
                from: 0.0,
                to: 1.0,
            }],
        )
        .duration(0.0)
        .at(0.3);
        let tl = Timeline::new(vec![tw]);
        assert!(tl.sample(0.29).is_empty());
        assert_eq!(tl.sample(0.31)[0].1[0], StyleValue::Opacity(1.0));
    }

    #[test]
    fn test_css_transform_composition() {
        let css = css_updates(&[
            StyleValue::Y(-150.0),
            StyleValue::Rotation(180.0),
            StyleValue::Scale(0.5),
            StyleValue::Opacity(0.3),
        ]);
        let transform = css.iter().find(|(k, _)| *k == "transform").unwrap();
        assert_eq!(
            transform.1,
            "translate3d(0.00px, -150.00px, 0) rotate(180.00deg) scale(0.5000)"
        );
        let opacity = css.iter().find(|(k, _)| *k == "opacity").unwrap();
        assert_eq!(opacity.1, "0.3000");
    }

    #[test]
    fn test_css_blur_clears_at_zero() {
        let css = css_updates(&[StyleValue::Blur(0.0)]);
        assert_eq!(css[0], ("filter", "none".to_string()));
        let css = css_updates(&[StyleValue::Blur(10.0)]);
        assert_eq!(css[0], ("filter", "blur(10.00px)".to_string()));
    }

    #[test]
    fn test_css_background_position() {
        let css = css_updates(&[StyleValue::BackgroundPosY(100.0)]);
        assert_eq!(css[0], ("background-position", "50% 100.00%".to_string()));
    }
}
