use dioxus::prelude::*;

use crate::reveal::{use_reveal_once, HALF_VISIBLE_REVEAL};
use crate::timing::sleep_ms;

pub const BAR_STAGGER_MS: u32 = 200;

#[derive(Clone, Debug, PartialEq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [(&'static str, u8)],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Backend",
        icon: "fas fa-server",
        skills: &[("Java", 90), ("Spring Boot", 85), ("REST APIs", 85), ("MySQL", 80)],
    },
    SkillGroup {
        title: "Frontend",
        icon: "fas fa-laptop-code",
        skills: &[("JavaScript", 85), ("React", 80), ("HTML & CSS", 90)],
    },
    SkillGroup {
        title: "Tools",
        icon: "fas fa-toolbox",
        skills: &[("Git", 85), ("Maven", 75), ("Docker", 70)],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarFill {
    pub delay_ms: u32,
    pub width_pct: u8,
}

/// When each bar starts filling and how far, in document order.
pub fn fill_schedule(levels: &[u8]) -> Vec<BarFill> {
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| BarFill {
            delay_ms: index as u32 * BAR_STAGGER_MS,
            width_pct: (*level).min(100),
        })
        .collect()
}

#[component]
pub fn SkillsGrid() -> Element {
    rsx! {
        div { class: "skills-grid",
            for group in SKILL_GROUPS.iter() {
                SkillCard { key: "{group.title}", group: group.clone() }
            }
        }
    }
}

#[component]
fn SkillCard(group: SkillGroup) -> Element {
    let reveal = use_reveal_once(HALF_VISIBLE_REVEAL);
    let mut widths = use_signal(|| vec![0u8; group.skills.len()]);
    let mut started = use_signal(|| false);

    let levels: Vec<u8> = group.skills.iter().map(|(_, level)| *level).collect();
    use_effect(move || {
        if !reveal.revealed() || *started.peek() {
            return;
        }
        started.set(true);
        for (index, fill) in fill_schedule(&levels).into_iter().enumerate() {
            spawn(async move {
                if fill.delay_ms > 0 {
                    sleep_ms(fill.delay_ms).await;
                }
                if let Some(width) = widths.write().get_mut(index) {
                    *width = fill.width_pct;
                }
            });
        }
    });

    rsx! {
        div { class: "skill-category",
            onmounted: move |event| reveal.observe(event),
            h3 { class: "skill-category-title",
                i { class: "{group.icon}" }
                " {group.title}"
            }
            for (index, (name, level)) in group.skills.iter().enumerate() {
                div { key: "{name}", class: "skill-item",
                    div { class: "skill-info",
                        span { class: "skill-name", "{name}" }
                        span { class: "skill-level", "{level}%" }
                    }
                    div { class: "skill-bar",
                        div {
                            class: "level-fill",
                            "data-level": "{level}",
                            style: "width: {widths.read().get(index).copied().unwrap_or(0)}%",
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bars_fill_two_hundred_ms_apart() {
        assert_eq!(
            fill_schedule(&[90, 40, 75]),
            vec![
                BarFill { delay_ms: 0, width_pct: 90 },
                BarFill { delay_ms: 200, width_pct: 40 },
                BarFill { delay_ms: 400, width_pct: 75 },
            ]
        );
    }

    #[test]
    fn levels_are_capped_at_full_width() {
        assert_eq!(fill_schedule(&[140])[0].width_pct, 100);
    }

    #[test]
    fn skill_levels_are_percentages() {
        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty());
            for (_, level) in group.skills {
                assert!(*level <= 100);
            }
        }
    }
}
