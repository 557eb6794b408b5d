use dioxus::prelude::*;

pub const PARTICLE_COUNT: usize = 25;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

pub fn generate(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size: random() * 4.0 + 1.0,
            left: random() * 100.0,
            top: random() * 100.0,
            delay: random() * 8.0,
            duration: random() * 4.0 + 6.0,
        })
        .collect()
}

fn entropy() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}

fn particle_style(particle: &Particle) -> String {
    format!(
        "width: {size:.2}px; height: {size:.2}px; left: {left:.2}%; top: {top:.2}%; animation-delay: {delay:.2}s; animation-duration: {duration:.2}s;",
        size = particle.size,
        left = particle.left,
        top = particle.top,
        delay = particle.delay,
        duration = particle.duration,
    )
}

#[component]
pub fn ParticleField() -> Element {
    let particles = use_hook(|| generate(PARTICLE_COUNT, entropy));

    rsx! {
        div { class: "animated-bg", aria_hidden: "true",
            for particle in particles {
                div { class: "particle", style: "{particle_style(&particle)}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_the_requested_count() {
        let particles = generate(PARTICLE_COUNT, || 0.25);
        assert_eq!(particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn midpoint_rolls_land_midrange() {
        let particles = generate(1, || 0.5);
        let particle = &particles[0];
        assert_eq!(particle.size, 3.0);
        assert_eq!(particle.left, 50.0);
        assert_eq!(particle.top, 50.0);
        assert_eq!(particle.delay, 4.0);
        assert_eq!(particle.duration, 8.0);
    }

    #[test]
    fn rolls_stay_inside_their_ranges() {
        let rolls = [0.0, 0.17, 0.42, 0.68, 0.999];
        let mut sequence = rolls.iter().cycle();
        for particle in generate(40, move || *sequence.next().unwrap()) {
            assert!(particle.size >= 1.0 && particle.size < 5.0);
            assert!(particle.left >= 0.0 && particle.left < 100.0);
            assert!(particle.top >= 0.0 && particle.top < 100.0);
            assert!(particle.delay >= 0.0 && particle.delay < 8.0);
            assert!(particle.duration >= 6.0 && particle.duration < 10.0);
        }
    }

    #[test]
    fn style_carries_every_animated_property() {
        let particle = Particle {
            size: 2.5,
            left: 10.0,
            top: 90.0,
            delay: 1.5,
            duration: 7.0,
        };
        let style = particle_style(&particle);
        assert!(style.contains("width: 2.50px"));
        assert!(style.contains("height: 2.50px"));
        assert!(style.contains("left: 10.00%"));
        assert!(style.contains("top: 90.00%"));
        assert!(style.contains("animation-delay: 1.50s"));
        assert!(style.contains("animation-duration: 7.00s"));
    }
}
