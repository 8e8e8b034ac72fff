use std::collections::HashSet;

use session_wm::launcher::{Launch, launch};
use session_wm::tabs::tabs;
use session_wm::window::{WindowConfig, WindowId, WindowRegistry};

fn config(kind: &str) -> WindowConfig<()> {
    WindowConfig::new(kind, kind.to_uppercase(), ())
}

fn visible(registry: &WindowRegistry<()>) -> Vec<WindowId> {
    registry
        .windows()
        .iter()
        .filter(|w| !w.is_minimized())
        .map(|w| w.id())
        .collect()
}

fn minimized(registry: &WindowRegistry<()>) -> Vec<WindowId> {
    registry.list_minimized().map(|w| w.id()).collect()
}

/// Small deterministic LCG so op sequences are reproducible across runs.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

#[test]
fn random_operation_sequences_keep_at_most_one_window_visible() {
    let foreign = foreign_id();
    for seed in 0..32u64 {
        let mut rng = Lcg(seed);
        let mut registry = WindowRegistry::new();
        let mut issued: Vec<WindowId> = Vec::new();
        for _ in 0..200 {
            // ids include closed and never-issued values to cover no-op paths
            let pick = |rng: &mut Lcg, issued: &[WindowId]| -> WindowId {
                if issued.is_empty() || rng.below(8) == 0 {
                    foreign
                } else {
                    issued[rng.below(issued.len() as u64) as usize]
                }
            };
            match rng.below(5) {
                0 => {
                    let kind = format!("k{}", rng.below(6));
                    issued.push(registry.open(config(&kind)));
                }
                1 => registry.minimize(pick(&mut rng, &issued)),
                2 => registry.restore(pick(&mut rng, &issued)),
                3 => registry.bring_to_front(pick(&mut rng, &issued)),
                _ => registry.close(pick(&mut rng, &issued)),
            }
            assert!(visible(&registry).len() <= 1, "seed {seed}");
            if let Some(active) = registry.active_window() {
                assert!(!active.is_minimized(), "seed {seed}");
            }
        }
    }
}

/// An id far past anything the property registries hand out.
fn foreign_id() -> WindowId {
    let mut scratch = WindowRegistry::new();
    let mut id = scratch.open(config("probe"));
    for _ in 0..1000 {
        id = scratch.open(config("probe"));
    }
    id
}

#[test]
fn open_returns_pairwise_distinct_ids() {
    let mut registry = WindowRegistry::new();
    let mut seen = HashSet::new();
    for i in 0..100 {
        let id = registry.open(config(&format!("k{}", i % 3)));
        assert!(seen.insert(id));
        if i % 10 == 0 {
            registry.close(id);
        }
    }
}

#[test]
fn restore_twice_matches_restore_once() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(config("a"));
    let b = registry.open(config("b"));
    registry.restore(a);

    registry.restore(b);
    let once = visible(&registry);
    let z_once = registry.get(b).unwrap().z_index();
    registry.restore(b);
    assert_eq!(visible(&registry), once);
    assert!(registry.get(b).unwrap().z_index() > z_once);
}

#[test]
fn closing_active_promotes_latest_created_survivor() {
    let mut registry = WindowRegistry::new();
    let a = registry.open(config("a"));
    let b = registry.open(config("b"));
    let c = registry.open(config("c"));
    registry.restore(a);
    registry.restore(c);
    registry.close(c);
    assert_eq!(registry.active_id(), Some(b));
    assert!(!registry.get(b).unwrap().is_minimized());

    // creation order wins over how recently a window was shown
    let d = registry.open(config("d"));
    registry.restore(b);
    registry.restore(a);
    registry.close(a);
    assert_eq!(registry.active_id(), Some(d));

    registry.close(b);
    registry.close(d);
    assert!(registry.active_window().is_none());
    assert!(registry.is_empty());
}

#[test]
fn tab_order_survives_visibility_changes() {
    let mut registry = WindowRegistry::new();
    let ids: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|k| registry.open(config(k)))
        .collect();
    let order = |r: &WindowRegistry<()>| tabs(r).into_iter().map(|t| t.id).collect::<Vec<_>>();
    let before = order(&registry);
    assert_eq!(before, ids);

    let mut rng = Lcg(7);
    for _ in 0..50 {
        let id = ids[rng.below(ids.len() as u64) as usize];
        match rng.below(3) {
            0 => registry.minimize(id),
            1 => registry.restore(id),
            _ => registry.bring_to_front(id),
        }
        assert_eq!(order(&registry), before);
    }
}

#[test]
fn find_by_type_returns_just_opened_window() {
    let mut registry = WindowRegistry::new();
    for kind in ["t", "u", "t"] {
        let id = registry.open(config(kind));
        let found = registry.find_by_type(kind).unwrap();
        // first match in creation order for repeated kinds
        if kind == "u" {
            assert_eq!(found.id(), id);
        }
    }
    let first_t = registry.windows()[0].id();
    assert_eq!(registry.find_by_type("t").unwrap().id(), first_t);
}

#[test]
fn walkthrough_open_restore_open_restore_close() {
    let mut registry = WindowRegistry::new();

    let id1 = registry.open(config("A"));
    assert!(registry.active_window().is_none());
    assert!(registry.get(id1).unwrap().is_minimized());
    assert_eq!(registry.find_by_type("A").unwrap().id(), id1);

    registry.restore(id1);
    assert_eq!(registry.active_id(), Some(id1));
    assert!(minimized(&registry).is_empty());

    let id2 = registry.open(config("B"));
    assert_eq!(minimized(&registry), vec![id1, id2]);
    assert!(registry.active_window().is_none());

    registry.restore(id2);
    assert_eq!(registry.active_id(), Some(id2));
    assert_eq!(minimized(&registry), vec![id1]);

    registry.close(id2);
    let active = registry.active_window().unwrap();
    assert_eq!(active.id(), id1);
    assert!(!active.is_minimized());
    assert!(minimized(&registry).is_empty());
    assert!(registry.is_visible("A"));
    assert!(!registry.is_visible("B"));
}

#[test]
fn launching_a_known_kind_refocuses_it() {
    let mut registry = WindowRegistry::new();
    let first = launch(&mut registry, config("members"));
    let other = launch(&mut registry, config("tills"));
    assert!(matches!(first, Launch::Opened(_)));
    assert!(matches!(other, Launch::Opened(_)));

    let again = launch(&mut registry, config("members"));
    assert_eq!(again, Launch::Focused(first.id()));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.active_id(), Some(first.id()));
}
