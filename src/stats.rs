use dioxus::prelude::*;

use crate::reveal::{use_reveal_once, HALF_VISIBLE_REVEAL};
use crate::timing::sleep_ms;

pub const COUNT_DURATION_MS: u32 = 2000;
pub const TICK_MS: u32 = 16;

pub const STATS: &[(&str, u32)] = &[
    ("Projects Completed", 15),
    ("Technologies", 12),
    ("Certifications", 4),
    ("Problems Solved", 250),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTick {
    pub display: u64,
    pub done: bool,
}

/// Count-up from zero in equal increments, landing exactly on `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        let ticks = f64::from(COUNT_DURATION_MS) / f64::from(TICK_MS);
        Self {
            target,
            increment: target as f64 / ticks,
            current: 0.0,
            done: false,
        }
    }

    pub fn tick(&mut self) -> CounterTick {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target as f64 {
                self.current = self.target as f64;
                self.done = true;
            }
        }
        CounterTick {
            display: self.current.floor() as u64,
            done: self.done,
        }
    }
}

#[component]
pub fn StatsRow() -> Element {
    rsx! {
        div { class: "stats",
            for (label, target) in STATS.iter().copied() {
                StatCounter { key: "{label}", label: label.to_string(), target }
            }
        }
    }
}

#[component]
fn StatCounter(label: String, target: u32) -> Element {
    let reveal = use_reveal_once(HALF_VISIBLE_REVEAL);
    let mut value = use_signal(|| 0u64);
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !reveal.revealed() || *started.peek() {
            return;
        }
        started.set(true);
        spawn(async move {
            let mut counter = CountUp::new(u64::from(target));
            loop {
                sleep_ms(TICK_MS).await;
                let tick = counter.tick();
                value.set(tick.display);
                if tick.done {
                    break;
                }
            }
        });
    });

    rsx! {
        div { class: "stat",
            span {
                class: "stat-number",
                "data-target": "{target}",
                onmounted: move |event| reveal.observe(event),
                "{value}"
            }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_end(target: u64) -> (Vec<u64>, usize) {
        let mut counter = CountUp::new(target);
        let mut shown = Vec::new();
        for ticks in 1..=1_000 {
            let tick = counter.tick();
            shown.push(tick.display);
            if tick.done {
                return (shown, ticks);
            }
        }
        panic!("counter for {target} never finished");
    }

    #[test]
    fn lands_exactly_on_target_without_overshoot() {
        for target in [0, 1, 3, 7, 15, 125, 250, 1_000, 9_999] {
            let (shown, _) = run_to_end(target);
            assert_eq!(shown.last().copied(), Some(target));
            assert!(shown.iter().all(|value| *value <= target));
        }
    }

    #[test]
    fn displayed_values_never_decrease() {
        let (shown, _) = run_to_end(250);
        assert!(shown.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn finishes_in_about_two_seconds_of_ticks() {
        let (_, ticks) = run_to_end(250);
        assert!((125..=126).contains(&ticks));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CountUp::new(0);
        assert_eq!(counter.tick(), CounterTick { display: 0, done: true });
    }

    #[test]
    fn ticks_after_completion_hold_the_target() {
        let mut counter = CountUp::new(5);
        while !counter.tick().done {}
        assert_eq!(counter.tick(), CounterTick { display: 5, done: true });
    }
}
