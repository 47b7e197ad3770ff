use dioxus::prelude::*;

use crate::client::constant::HERO_PARTICLE_COUNT;
use crate::model::entropy::Entropy;

#[cfg(feature = "web")]
use crate::client::effect::random::MathRandom;
#[cfg(not(feature = "web"))]
use crate::model::entropy::FixedEntropy;

/// Geometry of one decorative dot, randomized once at mount.
#[derive(Clone, Debug, PartialEq)]
struct Particle {
    left_pct: f64,
    top_pct: f64,
    duration_s: f64,
    delay_s: f64,
}

impl Particle {
    /// Position anywhere in the container, float period in [3 s, 7 s),
    /// start delay in [0 s, 2 s).
    fn random(entropy: &mut impl Entropy) -> Self {
        Self {
            left_pct: entropy.roll() * 100.0,
            top_pct: entropy.roll() * 100.0,
            duration_s: 3.0 + entropy.roll() * 4.0,
            delay_s: entropy.roll() * 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left:{:.1}%;top:{:.1}%;animation-duration:{:.2}s;animation-delay:{:.2}s;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Field of floating dots layered behind hero content. Purely decorative,
/// hidden from assistive tech.
#[component]
pub fn ParticleField() -> Element {
    let particles = use_hook(|| {
        #[cfg(feature = "web")]
        let mut entropy = MathRandom;
        #[cfg(not(feature = "web"))]
        let mut entropy = FixedEntropy::new(vec![0.5]);

        (0..HERO_PARTICLE_COUNT)
            .map(|_| Particle::random(&mut entropy))
            .collect::<Vec<_>>()
    });

    rsx!(div {
        class: "particle-field",
        aria_hidden: "true",
        for (index, particle) in particles.iter().enumerate() {
            span {
                key: "{index}",
                class: "particle",
                style: particle.style()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entropy::FixedEntropy;

    /// Tests that particle geometry stays inside its documented ranges.
    ///
    /// Expected: position in [0, 100)%, duration in [3, 7) s, delay in
    /// [0, 2) s across the roll space
    #[test]
    fn geometry_stays_in_range() {
        for step in 0..100 {
            let roll = f64::from(step) / 100.0;
            let mut entropy = FixedEntropy::new(vec![roll]);
            let particle = Particle::random(&mut entropy);
            assert!(particle.left_pct < 100.0);
            assert!(particle.top_pct < 100.0);
            assert!((3.0..7.0).contains(&particle.duration_s));
            assert!((0.0..2.0).contains(&particle.delay_s));
        }
    }

    /// Tests the inline style rendering.
    ///
    /// Expected: all four CSS properties present with fixed precision
    #[test]
    fn style_lists_all_properties() {
        let mut entropy = FixedEntropy::new(vec![0.25]);
        let particle = Particle::random(&mut entropy);
        let style = particle.style();
        assert_eq!(
            style,
            "left:25.0%;top:25.0%;animation-duration:4.00s;animation-delay:0.50s;"
        );
    }
}
