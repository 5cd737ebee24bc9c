//=========================================================================
// Level Manager
//=========================================================================
//
// Maintains an endless vertical level from a bounded set of live
// platforms.
//
// Architecture:
//   initialize() → ladder of N platforms from the ground up
//   step()       → recycle pass (below window) → spawn pass (above frontier)
//   advance()    → kinematic platform motion + item idle float
//   collect()    → item pickup, parent slot cleared
//
// Coordinates:
//   World space, y grows downward. The camera scrolls upward through a
//   static world (camera-relative strategy); platforms are never shifted
//   to simulate scrolling.
//
// Frontier:
//   y of the highest (most recently spawned) platform. It only ever
//   decreases while a level is running.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use super::event::LevelEvent;
use super::item::{idle_offset, Item, ItemId};
use super::platform::{Platform, PlatformId};
use crate::core::config::{ConfigError, LevelConfig, Viewport};

//=== LevelManager ========================================================

/// Owns every live platform (and, through them, every live item).
///
/// Players and cameras only observe platform positions; all mutation
/// goes through this type.
pub struct LevelManager {
    config: LevelConfig,
    viewport: Viewport,
    rng: StdRng,

    platforms: Vec<Platform>,
    frontier: f32,

    next_platform_id: u64,
    next_item_id: u64,

    clock_ms: f64,
    events: Vec<LevelEvent>,
}

impl LevelManager {
    //--- Construction -----------------------------------------------------

    /// Creates an empty level seeded from OS entropy.
    pub fn new(config: LevelConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }

    /// Creates an empty level with a deterministic random sequence.
    pub fn with_seed(
        config: LevelConfig,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: LevelConfig, viewport: Viewport, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate(&viewport)?;

        Ok(Self {
            config,
            viewport,
            rng,
            platforms: Vec::with_capacity(16),
            frontier: viewport.height,
            next_platform_id: 0,
            next_item_id: 0,
            clock_ms: 0.0,
            events: Vec::with_capacity(32),
        })
    }

    //--- initialize() -----------------------------------------------------

    /// Builds the starting ladder and returns the frontier.
    ///
    /// Any previous level is torn down first (emitting recycle events),
    /// so calling this again restarts the level. The first platform sits
    /// `ground_offset` above the viewport bottom; each next one is one
    /// freshly drawn spacing higher.
    pub fn initialize(&mut self, viewport_height: f32, level_count: usize) -> f32 {
        self.clear();
        self.viewport.height = viewport_height;
        self.clock_ms = 0.0;

        let probability = self.config.initial_item_probability;
        let mut y = viewport_height - self.config.ground_offset;

        for level in 0..level_count {
            if level > 0 {
                y -= self.draw_spacing();
            }
            self.spawn_platform(y, probability);
        }

        self.frontier = y;

        info!(
            target: "level",
            "Level initialized: {} platforms, {} items, frontier {}",
            self.platforms.len(),
            self.live_item_count(),
            self.frontier
        );

        self.frontier
    }

    //--- step() -----------------------------------------------------------

    /// Recycles platforms below the window, then spawns above `frontier`
    /// until it is one max-spacing beyond the top of the window.
    ///
    /// Returns the new frontier; callers persist it and pass it back on
    /// the next step.
    ///
    /// `frontier` must be the value returned by the previous `initialize`
    /// or `step` (or lie above it). A stale value from below would spawn
    /// platforms that are already due for recycling.
    pub fn step(&mut self, frontier: f32, scroll_position: f32) -> f32 {
        debug_assert!(
            frontier <= self.frontier,
            "stale frontier {} below current frontier {}",
            frontier,
            self.frontier
        );

        //--- Recycle pass -------------------------------------------------
        let threshold = self.recycle_threshold(scroll_position);
        let events = &mut self.events;
        let before = self.platforms.len();

        self.platforms.retain_mut(|platform| {
            if platform.y <= threshold {
                return true;
            }

            if let Some(item) = platform.item.take() {
                events.push(LevelEvent::ItemDiscarded { id: item.id });
            }
            events.push(LevelEvent::PlatformRecycled { id: platform.id });
            false
        });

        let recycled = before - self.platforms.len();
        if recycled > 0 {
            debug!(target: "level", "Recycled {} platforms below y={}", recycled, threshold);
        }

        //--- Spawn pass ---------------------------------------------------
        let probability = self.config.item_spawn_probability;
        let limit = scroll_position - self.config.max_spacing;
        let mut frontier = frontier;

        while frontier > limit {
            frontier -= self.draw_spacing();
            self.spawn_platform(frontier, probability);
        }

        self.frontier = frontier;
        frontier
    }

    //--- attach_item() ----------------------------------------------------

    /// Attaches a new item of a random kind to `platform`.
    ///
    /// Returns `None` if the platform is not live or already carries an
    /// item.
    pub fn attach_item(&mut self, platform: PlatformId) -> Option<ItemId> {
        let index = self.platforms.iter().position(|p| p.id == platform)?;
        if self.platforms[index].item.is_some() {
            trace!(target: "level", "Platform {:?} already carries an item", platform);
            return None;
        }

        let kind = self.config.item_kinds.choose(&mut self.rng)?.clone();
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;

        let host = &mut self.platforms[index];
        let item = Item {
            id,
            parent: host.id,
            kind: kind.name,
            x: host.x,
            y: host.top(),
            display_height: kind.display_height,
            float_offset: 0.0,
            spawned_at_ms: self.clock_ms,
            active: true,
        };

        self.events.push(LevelEvent::ItemSpawned {
            id,
            platform,
            kind: item.kind.clone(),
        });
        host.item = Some(item);

        Some(id)
    }

    //--- collect() --------------------------------------------------------

    /// Collects an item, detaching it from its platform.
    ///
    /// Returns the (now inactive) item so the caller can award score.
    /// Unknown or already collected ids return `None` and change nothing,
    /// so duplicate overlap callbacks are harmless.
    pub fn collect(&mut self, id: ItemId) -> Option<Item> {
        let Some(platform) = self
            .platforms
            .iter_mut()
            .find(|p| p.item.as_ref().is_some_and(|item| item.id == id && item.active))
        else {
            trace!(target: "level", "Ignoring collect of stale item {:?}", id);
            return None;
        };

        let mut item = platform.item.take()?;
        item.active = false;

        debug!(target: "level", "Collected {} ({:?}) from {:?}", item.kind, id, item.parent);
        self.events.push(LevelEvent::ItemCollected {
            id,
            kind: item.kind.clone(),
        });

        Some(item)
    }

    //--- advance() --------------------------------------------------------

    /// Advances platform motion and item idle float by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.clock_ms += f64::from(dt) * 1000.0;

        let width = self.viewport.width;
        let distance = self.config.idle_distance;
        let duration = self.config.idle_duration_ms;
        let period = 2.0 * f64::from(duration);

        for platform in &mut self.platforms {
            platform.integrate(dt, width);

            let (x, top) = (platform.x, platform.top());
            if let Some(item) = platform.item.as_mut().filter(|item| item.active) {
                let elapsed = (self.clock_ms - item.spawned_at_ms) % period;
                item.float_offset = idle_offset(elapsed as f32, distance, duration);
                item.pin_to(x, top);
            }
        }
    }

    //--- Query API --------------------------------------------------------

    /// Y below which platforms are destroyed for a given scroll position.
    pub fn recycle_threshold(&self, scroll_position: f32) -> f32 {
        scroll_position + self.viewport.height + self.config.recycle_margin
    }

    pub fn frontier(&self) -> f32 {
        self.frontier
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items().find(|item| item.id == id)
    }

    /// Iterates over every live item.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.platforms.iter().filter_map(|p| p.item.as_ref())
    }

    pub fn live_item_count(&self) -> usize {
        self.platforms.iter().filter(|p| p.item.is_some()).count()
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Drains lifecycle events accumulated since the last call.
    pub fn drain_events(&mut self) -> impl Iterator<Item = LevelEvent> + '_ {
        self.events.drain(..)
    }

    //--- Internal Helpers -------------------------------------------------

    fn clear(&mut self) {
        for mut platform in self.platforms.drain(..) {
            if let Some(item) = platform.item.take() {
                self.events.push(LevelEvent::ItemDiscarded { id: item.id });
            }
            self.events.push(LevelEvent::PlatformRecycled { id: platform.id });
        }
    }

    fn spawn_platform(&mut self, y: f32, item_probability: f64) -> PlatformId {
        let margin = self.config.horizontal_margin;
        let x = draw_range(&mut self.rng, margin, self.viewport.width - margin);

        let speed = draw_range(&mut self.rng, self.config.min_speed, self.config.max_speed);
        let velocity_x = if self.rng.gen::<bool>() { -speed } else { speed };

        let id = PlatformId(self.next_platform_id);
        self.next_platform_id += 1;

        let platform = Platform::new(id, (x, y), self.config.platform_size(), velocity_x);

        trace!(target: "level", "Spawned {:?} at ({:.1}, {:.1}) vx={:.1}", id, x, y, velocity_x);
        self.events.push(LevelEvent::PlatformSpawned {
            id,
            x,
            y,
            width: platform.width,
            height: platform.height,
            velocity_x,
            body: platform.body,
        });
        self.platforms.push(platform);

        if self.roll_item(item_probability) {
            self.attach_item(id);
        }

        id
    }

    fn roll_item(&mut self, probability: f64) -> bool {
        if let Some(cap) = self.config.max_live_items {
            if self.live_item_count() >= cap {
                return false;
            }
        }
        self.rng.gen_bool(probability)
    }

    fn draw_spacing(&mut self) -> f32 {
        draw_range(&mut self.rng, self.config.min_spacing, self.config.max_spacing)
    }
}

//--- Helpers -------------------------------------------------------------

/// Uniform draw from `[min, max]`; a degenerate range yields `min`.
fn draw_range(rng: &mut StdRng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ItemKind;

    //--- Test Helpers -----------------------------------------------------

    fn fixed_config() -> LevelConfig {
        LevelConfig::default().with_spacing(250.0, 250.0)
    }

    fn manager(config: LevelConfig) -> LevelManager {
        LevelManager::with_seed(config, Viewport::default(), 7).unwrap()
    }

    fn ys(manager: &LevelManager) -> Vec<f32> {
        manager.platforms().iter().map(|p| p.y()).collect()
    }

    /// Live item whose parent is not a live platform.
    fn orphaned_items(manager: &LevelManager) -> usize {
        manager
            .items()
            .filter(|item| item.is_active() && manager.platform(item.parent()).is_none())
            .count()
    }

    //=====================================================================
    // initialize()
    //=====================================================================

    #[test]
    fn initialize_builds_fixed_ladder() {
        let mut level = manager(fixed_config());
        let frontier = level.initialize(640.0, 8);

        assert_eq!(
            ys(&level),
            vec![620.0, 370.0, 120.0, -130.0, -380.0, -630.0, -880.0, -1130.0]
        );
        assert_eq!(frontier, -1130.0);
        assert_eq!(level.frontier(), -1130.0);

        for platform in level.platforms() {
            assert!((20.0..=340.0).contains(&platform.x()), "x out of bounds: {}", platform.x());
        }
    }

    #[test]
    fn initialize_assigns_bounded_signed_speeds() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 8);

        for platform in level.platforms() {
            let speed = platform.velocity_x().abs();
            assert!((5.0..=90.0).contains(&speed), "speed out of bounds: {}", speed);
        }
    }

    #[test]
    fn initialize_places_items_up_to_cap() {
        let config = fixed_config().with_max_live_items(Some(3));
        let mut level = manager(config);
        level.initialize(640.0, 8);

        assert_eq!(level.live_item_count(), 3);
        let carriers: Vec<_> = level.platforms().iter().map(|p| p.has_item()).collect();
        assert_eq!(carriers[..3], [true, true, true]);
    }

    #[test]
    fn initialize_twice_resets_level() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 8);
        level.drain_events().for_each(drop);

        level.initialize(640.0, 4);

        assert_eq!(level.platforms().len(), 4);
        let recycled = level
            .drain_events()
            .filter(|e| matches!(e, LevelEvent::PlatformRecycled { .. }))
            .count();
        assert_eq!(recycled, 8);
    }

    //=====================================================================
    // step()
    //=====================================================================

    #[test]
    fn recycle_threshold_matches_scroll_and_margin() {
        let level = manager(fixed_config().with_recycle_margin(100.0));
        assert_eq!(level.recycle_threshold(0.0), 740.0);
        assert_eq!(level.recycle_threshold(50.0), 790.0);
        assert_eq!(level.recycle_threshold(-200.0), 540.0);
    }

    #[test]
    fn platform_at_700_survives_until_threshold_passes_it() {
        let mut level = manager(fixed_config().with_recycle_margin(100.0));
        level.initialize(640.0, 1);
        let id = level.platforms()[0].id();
        // Ground platform sits at 620; lift the example platform to 700.
        level.platforms[0].y = 700.0;

        level.step(-10_000.0, 0.0);
        assert!(level.platform(id).is_some());

        level.step(-10_000.0, 50.0);
        assert!(level.platform(id).is_some());

        level.step(-10_000.0, -200.0);
        assert!(level.platform(id).is_none());
    }

    #[test]
    fn step_recycles_everything_below_threshold() {
        let mut level = manager(LevelConfig::default().with_spacing(120.0, 260.0));
        let mut frontier = level.initialize(640.0, 8);

        for tick in 1..=40 {
            let scroll = -(tick as f32) * 75.0;
            frontier = level.step(frontier, scroll);

            let threshold = level.recycle_threshold(scroll);
            assert!(level.platforms().iter().all(|p| p.y() <= threshold));
        }
    }

    #[test]
    fn step_spawns_with_spacing_inside_bounds() {
        let mut level = manager(LevelConfig::default().with_spacing(120.0, 260.0));
        let mut frontier = level.initialize(640.0, 8);
        level.drain_events().for_each(drop);

        let mut previous = frontier;
        for tick in 1..=30 {
            frontier = level.step(frontier, -(tick as f32) * 200.0);

            let spawned: Vec<f32> = level
                .drain_events()
                .filter_map(|e| match e {
                    LevelEvent::PlatformSpawned { y, .. } => Some(y),
                    _ => None,
                })
                .collect();

            for y in spawned {
                let gap = previous - y;
                assert!(
                    (120.0 - 1e-3..=260.0 + 1e-3).contains(&gap),
                    "spacing {} out of bounds",
                    gap
                );
                previous = y;
            }
        }
    }

    #[test]
    fn spacing_is_redrawn_per_spawn() {
        let mut level = manager(LevelConfig::default().with_spacing(100.0, 300.0));
        level.initialize(640.0, 12);

        let heights = ys(&level);
        let gaps: Vec<f32> = heights.windows(2).map(|w| w[0] - w[1]).collect();
        assert!(gaps.iter().any(|g| (g - gaps[0]).abs() > 1e-3), "gaps never vary: {:?}", gaps);
    }

    #[test]
    fn frontier_never_increases() {
        let mut level = manager(LevelConfig::default().with_spacing(120.0, 260.0));
        let mut frontier = level.initialize(640.0, 8);

        for tick in 0..50 {
            // Scroll jitters but trends upward.
            let scroll = -(tick as f32) * 60.0 + if tick % 3 == 0 { 40.0 } else { 0.0 };
            let next = level.step(frontier, scroll);
            assert!(next <= frontier);
            frontier = next;
        }
    }

    #[test]
    fn frontier_stays_one_spacing_beyond_window_top() {
        let mut level = manager(fixed_config());
        let mut frontier = level.initialize(640.0, 8);

        frontier = level.step(frontier, -2_000.0);

        assert!(frontier <= -2_000.0 - 250.0);
        assert!(frontier > -2_000.0 - 2.0 * 250.0);
    }

    #[test]
    fn step_without_scroll_is_stable() {
        let mut level = manager(fixed_config());
        let frontier = level.initialize(640.0, 8);

        assert_eq!(level.step(frontier, 0.0), frontier);
        assert_eq!(level.platforms().len(), 8);
    }

    #[test]
    fn no_gap_wider_than_max_spacing_below_frontier() {
        let mut level = manager(LevelConfig::default().with_spacing(150.0, 250.0));
        let mut frontier = level.initialize(640.0, 8);

        for tick in 1..=20 {
            frontier = level.step(frontier, -(tick as f32) * 333.0);

            let mut heights = ys(&level);
            heights.sort_by(|a, b| a.total_cmp(b));
            assert_eq!(heights[0], frontier);
            assert!(heights.windows(2).all(|w| w[1] - w[0] <= 250.0 + 1e-3));
        }
    }

    //=====================================================================
    // Items
    //=====================================================================

    #[test]
    fn attach_item_pins_to_platform_top() {
        let config = fixed_config().with_item_probabilities(0.0, 0.0);
        let mut level = manager(config);
        level.initialize(640.0, 1);

        let platform = level.platforms()[0].clone();
        let id = level.attach_item(platform.id()).unwrap();
        let item = level.item(id).unwrap();

        assert_eq!(item.parent(), platform.id());
        assert_eq!(item.position(), (platform.x(), platform.top()));
        assert!(item.is_active());
        assert!(level.config().item_kinds.iter().any(|k| k.name == item.kind()));
    }

    #[test]
    fn attach_item_refuses_second_item() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 1);
        let platform = level.platforms()[0].id();

        assert!(level.platforms()[0].has_item());
        assert_eq!(level.attach_item(platform), None);
    }

    #[test]
    fn attach_item_on_unknown_platform_is_none() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 1);
        assert_eq!(level.attach_item(PlatformId(999)), None);
    }

    #[test]
    fn attach_item_draws_from_configured_kinds() {
        let config = fixed_config()
            .with_item_kinds(vec![ItemKind::new("kitty", 48.0)])
            .with_max_live_items(None);
        let mut level = manager(config);
        level.initialize(640.0, 5);

        assert!(level.items().all(|item| item.kind() == "kitty" && item.display_height() == 48.0));
    }

    #[test]
    fn recycling_discards_uncollected_items() {
        let mut level = manager(fixed_config());
        let frontier = level.initialize(640.0, 8);
        let ground = level.platforms()[0].clone();
        let ground_item = ground.item().map(|i| i.id()).unwrap();
        level.drain_events().for_each(drop);

        level.step(frontier, -300.0);

        assert!(level.platform(ground.id()).is_none());
        assert!(level.item(ground_item).is_none());
        let events: Vec<_> = level.drain_events().collect();
        assert!(events.contains(&LevelEvent::ItemDiscarded { id: ground_item }));
        assert!(events.contains(&LevelEvent::PlatformRecycled { id: ground.id() }));
        assert_eq!(orphaned_items(&level), 0);
    }

    #[test]
    fn items_never_outlive_platforms() {
        let config = LevelConfig::default()
            .with_spacing(120.0, 260.0)
            .with_max_live_items(None);
        let mut level = manager(config);
        let mut frontier = level.initialize(640.0, 8);

        for tick in 1..=60 {
            frontier = level.step(frontier, -(tick as f32) * 90.0);
            level.advance(1.0 / 60.0);
            assert_eq!(orphaned_items(&level), 0);
        }
    }

    #[test]
    fn item_cap_limits_recycled_spawns() {
        let config = fixed_config()
            .with_item_probabilities(1.0, 1.0)
            .with_max_live_items(Some(4));
        let mut level = manager(config);
        let mut frontier = level.initialize(640.0, 8);

        for tick in 1..=20 {
            frontier = level.step(frontier, -(tick as f32) * 250.0);
            assert!(level.live_item_count() <= 4);
        }
    }

    //=====================================================================
    // collect()
    //=====================================================================

    #[test]
    fn collect_detaches_and_deactivates() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 1);
        let platform = level.platforms()[0].id();
        let id = level.platforms()[0].item().unwrap().id();

        let item = level.collect(id).unwrap();

        assert!(!item.is_active());
        assert_eq!(item.parent(), platform);
        assert!(!level.platform(platform).unwrap().has_item());
        assert!(level.item(id).is_none());
    }

    #[test]
    fn collect_twice_is_noop() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 1);
        let id = level.platforms()[0].item().unwrap().id();
        level.drain_events().for_each(drop);

        assert!(level.collect(id).is_some());
        assert!(level.collect(id).is_none());

        let collected = level
            .drain_events()
            .filter(|e| matches!(e, LevelEvent::ItemCollected { .. }))
            .count();
        assert_eq!(collected, 1);
    }

    #[test]
    fn collect_unknown_item_is_none() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 2);
        assert!(level.collect(ItemId(12345)).is_none());
        assert_eq!(level.live_item_count(), 2);
    }

    #[test]
    fn platform_can_carry_new_item_after_collection() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 1);
        let platform = level.platforms()[0].id();
        let first = level.platforms()[0].item().unwrap().id();

        level.collect(first);
        let second = level.attach_item(platform).unwrap();

        assert_ne!(first, second);
    }

    //=====================================================================
    // advance()
    //=====================================================================

    #[test]
    fn advance_keeps_items_pinned_and_floating() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 3);

        for _ in 0..30 {
            level.advance(1.0 / 60.0);
        }

        for platform in level.platforms() {
            let item = platform.item().unwrap();
            let (x, y) = item.position();
            assert_eq!(x, platform.x());
            assert!((y - (platform.top() - item.float_offset())).abs() < 1e-3);
            assert!(item.float_offset() > 0.0 && item.float_offset() <= 10.0);
        }
    }

    #[test]
    fn advance_float_stays_smooth_after_long_sessions() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 1);

        // 100 hours in, on a cycle boundary.
        level.clock_ms = 360_000_000.0;
        level.platforms[0].item.as_mut().unwrap().spawned_at_ms = 0.0;

        let mut previous = 0.0;
        for step in 1..=3 {
            level.advance(1.0 / 60.0);
            let offset = level.platforms()[0].item().unwrap().float_offset();
            let expected = idle_offset(step as f32 * 1000.0 / 60.0, 10.0, 1000.0);

            assert!((offset - expected).abs() < 1e-3, "step {}: {} vs {}", step, offset, expected);
            assert!(offset > previous);
            previous = offset;
        }
    }

    #[test]
    #[should_panic(expected = "stale frontier")]
    fn step_rejects_stale_frontier() {
        let mut level = manager(fixed_config());
        level.initialize(640.0, 8);
        level.step(1000.0, 0.0);
    }

    #[test]
    fn advance_keeps_platforms_inside_world() {
        let mut level = manager(LevelConfig::default().with_speed(90.0, 90.0));
        level.initialize(640.0, 8);

        for _ in 0..600 {
            level.advance(1.0 / 60.0);
            for platform in level.platforms() {
                let half = platform.size().0 / 2.0;
                assert!(platform.x() >= half - 1e-3);
                assert!(platform.x() <= 360.0 - half + 1e-3);
                assert_eq!(platform.velocity_x().abs(), 90.0);
            }
        }
    }

    #[test]
    fn seeded_levels_are_reproducible() {
        let config = LevelConfig::default().with_spacing(100.0, 300.0);
        let mut a = LevelManager::with_seed(config.clone(), Viewport::default(), 42).unwrap();
        let mut b = LevelManager::with_seed(config, Viewport::default(), 42).unwrap();

        a.initialize(640.0, 8);
        b.initialize(640.0, 8);

        assert_eq!(ys(&a), ys(&b));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = LevelConfig::default().with_spacing(300.0, 100.0);
        assert!(LevelManager::new(config, Viewport::default()).is_err());
    }
}
