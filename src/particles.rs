use crate::style::StylePatch;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

#[cfg(target_arch = "wasm32")]
pub struct MathRandom;

#[cfg(target_arch = "wasm32")]
impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

pub const PARTICLE_CLASS: &str = "particle";

/// Visual parameters of one decorative particle, fixed at creation.
/// Size `[2, 7)` px, position `[0, 100)` %, duration `[10, 30)` s,
/// delay `[0, 5)` s, opacity `[0.1, 0.6)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDescriptor {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub duration: f64,
    pub delay: f64,
    pub opacity: f64,
}

impl ParticleDescriptor {
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let size = rng.next_unit() * 5.0 + 2.0;
        let x = rng.next_unit() * 100.0;
        let y = rng.next_unit() * 100.0;
        let duration = rng.next_unit() * 20.0 + 10.0;
        let delay = rng.next_unit() * 5.0;
        let opacity = rng.next_unit() * 0.5 + 0.1;

        Self {
            size,
            x,
            y,
            duration,
            delay,
            opacity,
        }
    }

    /// Styles for a fixed, non-interactive particle element. Values are written
    /// at full precision so a sample stays inside its range once rendered.
    pub fn style(&self) -> StylePatch {
        StylePatch::new()
            .set("position", "fixed")
            .set("width", format!("{}px", self.size))
            .set("height", format!("{}px", self.size))
            .set("background", format!("rgba(0, 245, 255, {})", self.opacity))
            .set("border-radius", "50%")
            .set("left", format!("{}%", self.x))
            .set("top", format!("{}%", self.y))
            .set("pointer-events", "none")
            .set("z-index", "-1")
            .set(
                "animation",
                format!(
                    "floatParticle {}s ease-in-out {}s infinite",
                    self.duration, self.delay
                ),
            )
    }
}

pub fn generate(count: usize, rng: &mut impl RandomSource) -> Vec<ParticleDescriptor> {
    (0..count).map(|_| ParticleDescriptor::random(rng)).collect()
}

pub const PARTICLE_KEYFRAMES: &str = "
@keyframes floatParticle {
    0%, 100% { transform: translateY(0) translateX(0); opacity: 0; }
    10% { opacity: 1; }
    90% { opacity: 1; }
    50% { transform: translateY(-100px) translateX(50px); }
}
";

#[cfg(test)]
mod tests {
    use super::*;

    impl RandomSource for fastrand::Rng {
        fn next_unit(&mut self) -> f64 {
            self.f64()
        }
    }

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn generates_exactly_the_requested_count_within_ranges() {
        let mut rng = fastrand::Rng::with_seed(7);
        let particles = generate(50, &mut rng);

        assert_eq!(particles.len(), 50);
        for particle in &particles {
            assert!((2.0..7.0).contains(&particle.size));
            assert!((0.0..100.0).contains(&particle.x));
            assert!((0.0..100.0).contains(&particle.y));
            assert!((10.0..30.0).contains(&particle.duration));
            assert!((0.0..5.0).contains(&particle.delay));
            assert!((0.1..0.6).contains(&particle.opacity));
        }
    }

    #[test]
    fn range_floors_come_from_a_zero_sample() {
        let particle = ParticleDescriptor::random(&mut Fixed(0.0));

        assert_eq!(particle.size, 2.0);
        assert_eq!(particle.x, 0.0);
        assert_eq!(particle.duration, 10.0);
        assert_eq!(particle.delay, 0.0);
        assert_eq!(particle.opacity, 0.1);
    }

    #[test]
    fn zero_count_generates_nothing() {
        assert!(generate(0, &mut Fixed(0.5)).is_empty());
    }

    #[test]
    fn style_carries_size_position_and_timing() {
        let style = ParticleDescriptor::random(&mut Fixed(0.5)).style();

        assert_eq!(style.get("width"), Some("4.5px"));
        assert_eq!(style.get("height"), Some("4.5px"));
        assert_eq!(style.get("left"), Some("50%"));
        assert_eq!(style.get("top"), Some("50%"));
        assert_eq!(style.get("background"), Some("rgba(0, 245, 255, 0.35)"));
        assert_eq!(
            style.get("animation"),
            Some("floatParticle 20s ease-in-out 2.5s infinite")
        );
        assert_eq!(style.get("pointer-events"), Some("none"));
    }

    fn number_in(value: &str, prefix: &str, suffix: &str) -> f64 {
        value
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(suffix))
            .and_then(|number| number.parse().ok())
            .expect("numeric style value")
    }

    #[test]
    fn rendered_values_stay_below_their_upper_bounds() {
        let style = ParticleDescriptor::random(&mut Fixed(0.9999)).style();

        let size = number_in(style.get("width").expect("width"), "", "px");
        let left = number_in(style.get("left").expect("left"), "", "%");
        let opacity = number_in(
            style.get("background").expect("background"),
            "rgba(0, 245, 255, ",
            ")",
        );
        let timing: Vec<f64> = style
            .get("animation")
            .expect("animation")
            .split_whitespace()
            .filter_map(|part| part.strip_suffix('s'))
            .filter_map(|number| number.parse().ok())
            .collect();

        assert!(size < 7.0);
        assert!(left < 100.0);
        assert!(opacity < 0.6);
        assert_eq!(timing.len(), 2);
        assert!(timing[0] < 30.0);
        assert!(timing[1] < 5.0);
    }
}
