use portfolio_site::notifications::{run_lifetime, ToastKind, ToastPhase, ToastQueue};
use portfolio_site::projects::{filter_buttons, visible_projects, Category, Filter, PROJECTS};
use portfolio_site::state::{load_theme, toggle_theme, MemoryThemeStore, Theme, ThemeStore};
use portfolio_site::stats::{CountUp, STATS};
use portfolio_site::typing::{
    TypingPhase, TypingState, DELETE_DELAY_MS, EMPTY_PAUSE_MS, FULL_PAUSE_MS, PHRASES,
    TYPE_DELAY_MS,
};
use pretty_assertions::assert_eq;

#[test]
fn web_filter_shows_every_record_in_order() {
    let filter = Filter::parse("web").unwrap();
    let titles: Vec<&str> = visible_projects(PROJECTS, filter)
        .into_iter()
        .map(|project| project.title)
        .collect();
    let expected: Vec<&str> = PROJECTS.iter().map(|project| project.title).collect();
    assert_eq!(titles.len(), 3);
    assert_eq!(titles, expected);

    let active: Vec<_> = filter_buttons()
        .into_iter()
        .filter(|(button, _)| *button == filter)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].0, Filter::Only(Category::Web));
}

#[test]
fn first_theme_toggle_goes_light_and_persists() {
    let store = MemoryThemeStore::default();
    let initial = load_theme(&store);
    assert_eq!(initial, Theme::Dark);

    let next = toggle_theme(initial, &store);
    assert_eq!(next, Theme::Light);
    assert_eq!(store.read().as_deref(), Some("light"));
    assert_eq!(load_theme(&store), Theme::Light);
}

#[test]
fn typing_cycles_through_first_phrase_into_second() {
    let mut state = TypingState::default();
    let first = PHRASES[0];
    let length = first.chars().count();

    let mut steps = Vec::new();
    for _ in 0..(2 * length + 1) {
        steps.push(state.step(PHRASES).unwrap());
    }

    assert_eq!(steps[0].text, "J");
    assert_eq!(steps[0].delay_ms, TYPE_DELAY_MS);
    assert_eq!(steps[length - 1].text, first);
    assert_eq!(steps[length - 1].delay_ms, FULL_PAUSE_MS);
    assert_eq!(steps[length].delay_ms, DELETE_DELAY_MS);
    assert_eq!(steps[2 * length - 1].text, "");
    assert_eq!(steps[2 * length - 1].delay_ms, EMPTY_PAUSE_MS);
    assert_eq!(state.phrase_index(), 1);
    assert_eq!(steps[2 * length].text, PHRASES[1][..1].to_string());
    assert_eq!(state.phase(), TypingPhase::Typing);
}

#[test]
fn every_counter_ends_exactly_on_its_target() {
    for (_, target) in STATS.iter().copied() {
        let mut counter = CountUp::new(u64::from(target));
        let mut last = None;
        for _ in 0..1_000 {
            let tick = counter.tick();
            last = Some(tick.display);
            if tick.done {
                break;
            }
        }
        assert_eq!(last, Some(u64::from(target)));
    }
}

#[tokio::test(start_paused = true)]
async fn success_toast_lives_for_its_fixed_lifetime() {
    let queue = std::cell::RefCell::new(ToastQueue::default());
    let id = queue
        .borrow_mut()
        .push(ToastKind::Success, "Message sent successfully!");
    assert_eq!(queue.borrow().toasts().len(), 1);

    let start = tokio::time::Instant::now();
    let mut shown_at = None;
    run_lifetime(id, |id, phase| {
        if phase == Some(ToastPhase::Shown) {
            shown_at = Some(start.elapsed());
        }
        queue.borrow_mut().advance(id, phase);
    })
    .await;

    assert_eq!(shown_at, Some(std::time::Duration::from_millis(100)));
    assert_eq!(start.elapsed(), std::time::Duration::from_millis(3_300));
    assert!(queue.borrow().is_empty());
}
