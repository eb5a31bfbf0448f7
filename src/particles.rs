use dioxus::prelude::*;

use crate::timing::{next_frame, random_unit, use_animation};

pub const PARTICLE_COUNT: usize = 30;
pub const DRIFT_PROBABILITY: f64 = 0.01;

pub const TINTS: [&str; 4] = [
    "rgba(148,163,184,0.5)",
    "rgba(203,213,225,0.5)",
    "rgba(99,102,241,0.45)",
    "rgba(59,130,246,0.45)",
];
const GLOW_COLOR: &str = "rgba(148,163,184,0.35)";

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub tint: usize,
    pub glow_px: f64,
}

impl Particle {
    pub fn random(sample: &mut impl FnMut() -> f64) -> Self {
        let left_pct = sample() * 100.0;
        let top_pct = sample() * 100.0;
        let delay_s = sample() * 4.0;
        let duration_s = 8.0 + sample() * 8.0;
        let size_px = 3.0 + sample() * 7.0;
        let tint = ((sample() * TINTS.len() as f64).floor() as usize).min(TINTS.len() - 1);
        let glow_px = 8.0 + sample() * 14.0;
        Self {
            left_pct,
            top_pct,
            size_px,
            delay_s,
            duration_s,
            tint,
            glow_px,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s; background: {}; box-shadow: 0 0 {:.2}px {};",
            self.left_pct,
            self.top_pct,
            self.size_px,
            self.size_px,
            self.delay_s,
            self.duration_s,
            TINTS[self.tint],
            self.glow_px,
            GLOW_COLOR,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relocation {
    pub index: usize,
    pub left_pct: f64,
    pub top_pct: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn(count: usize, sample: &mut impl FnMut() -> f64) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::random(&mut *sample)).collect(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One frame of drift: each particle independently has a small chance
    /// of jumping to a new random position.
    pub fn plan_drift(&self, sample: &mut impl FnMut() -> f64) -> Vec<Relocation> {
        let mut moves = Vec::new();
        for index in 0..self.particles.len() {
            if sample() < DRIFT_PROBABILITY {
                moves.push(Relocation {
                    index,
                    left_pct: sample() * 100.0,
                    top_pct: sample() * 100.0,
                });
            }
        }
        moves
    }

    pub fn relocate(&mut self, moves: &[Relocation]) {
        for relocation in moves {
            if let Some(particle) = self.particles.get_mut(relocation.index) {
                particle.left_pct = relocation.left_pct;
                particle.top_pct = relocation.top_pct;
            }
        }
    }
}

#[component]
pub fn ParticleBackground() -> Element {
    let mut field = use_signal(|| {
        let mut sample = random_unit;
        ParticleField::spawn(PARTICLE_COUNT, &mut sample)
    });

    use_animation(move || async move {
        let mut sample = random_unit;
        loop {
            next_frame().await;
            let moves = field.peek().plan_drift(&mut sample);
            if !moves.is_empty() {
                field.write().relocate(&moves);
            }
        }
    });

    rsx! {
        div { id: "particles", class: "particles", aria_hidden: "true",
            for (index, particle) in field.read().particles().iter().enumerate() {
                div { key: "{index}", class: "particle", style: "{particle.style()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter().cycle();
        move || iter.next().unwrap_or(0.0)
    }

    #[test]
    fn spawn_creates_fixed_count_within_ranges() {
        let mut sample = sequence(vec![0.0, 0.25, 0.5, 0.75, 0.999]);
        let field = ParticleField::spawn(PARTICLE_COUNT, &mut sample);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for particle in field.particles() {
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!((0.0..100.0).contains(&particle.top_pct));
            assert!((3.0..10.0).contains(&particle.size_px));
            assert!((0.0..4.0).contains(&particle.delay_s));
            assert!((8.0..16.0).contains(&particle.duration_s));
            assert!(particle.tint < TINTS.len());
            assert!((8.0..22.0).contains(&particle.glow_px));
        }
    }

    #[test]
    fn drift_only_moves_particles_under_probability() {
        let mut sample = sequence(vec![0.5]);
        let mut field = ParticleField::spawn(3, &mut sample);
        // particle 0 stays, particle 1 moves to (20, 40), particle 2 stays.
        let mut drift = sequence(vec![0.9, 0.001, 0.2, 0.4, 0.5]);
        let moves = field.plan_drift(&mut drift);
        assert_eq!(
            moves,
            vec![Relocation {
                index: 1,
                left_pct: 20.0,
                top_pct: 40.0
            }]
        );
        field.relocate(&moves);
        assert_eq!(field.particles()[1].left_pct, 20.0);
        assert_eq!(field.particles()[1].top_pct, 40.0);
        assert_eq!(field.particles()[0].left_pct, 50.0);
        assert_eq!(field.particles().len(), 3);
    }

    #[test]
    fn relocate_ignores_out_of_range_indices() {
        let mut sample = sequence(vec![0.5]);
        let mut field = ParticleField::spawn(1, &mut sample);
        field.relocate(&[Relocation {
            index: 7,
            left_pct: 1.0,
            top_pct: 1.0,
        }]);
        assert_eq!(field.particles()[0].left_pct, 50.0);
    }

    #[test]
    fn style_carries_tint_and_glow() {
        let mut sample = sequence(vec![0.0]);
        let particle = Particle::random(&mut sample);
        let style = particle.style();
        assert!(style.contains("background: rgba(148,163,184,0.5)"));
        assert!(style.contains("box-shadow: 0 0 8.00px"));
        assert!(style.contains("width: 3.00px"));
    }
}
