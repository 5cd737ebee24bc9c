//=========================================================================
// Game Configuration
//=========================================================================
//
// Named, read-only parameters for every core system.
//
// Architecture:
//   GameConfig
//     ├─ viewport: Viewport        (logical screen size)
//     ├─ level:    LevelConfig     (spacing, speed, items, idle float)
//     ├─ input:    InputConfig     (tap / drag thresholds, launch speed)
//     └─ session:  SessionConfig   (camera follow, respawn point)
//
// Values are fixed once the engine is built. `validate()` is the only
// gate: a contradiction here is a fatal startup error.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Defaults ============================================================

const VIEWPORT_WIDTH: f32 = 360.0;
const VIEWPORT_HEIGHT: f32 = 640.0;

const PLATFORM_SPACING: f32 = 250.0;
const PLATFORM_MIN_SPEED: f32 = 5.0;
const PLATFORM_MAX_SPEED: f32 = 90.0;
const PLATFORM_SCALE: f32 = 0.5;

const ITEM_NAMES: [&str; 11] = [
    "icecream", "banana", "broccoli", "carrot", "cherry", "kitty",
    "mermais", "princess", "strawberry", "unicorn", "watermelon",
];
const ITEM_HEIGHT: f32 = 64.0;

//=== ConfigError =========================================================

/// Configuration contradictions detected by [`GameConfig::validate`].
///
/// None of these are recoverable: the engine refuses to build.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Viewport width or height is zero or negative.
    Viewport { width: f32, height: f32 },

    /// Spacing bounds are inverted or not strictly positive.
    SpacingRange { min: f32, max: f32 },

    /// Speed bounds are inverted or negative.
    SpeedRange { min: f32, max: f32 },

    /// Horizontal spawn margins leave no room inside the viewport.
    MarginTooWide { margin: f32, width: f32 },

    /// No item kinds to draw from.
    EmptyItemSet,

    /// A probability outside `[0, 1]`.
    Probability { name: &'static str, value: f64 },

    /// A quantity that must be strictly positive.
    NonPositive { name: &'static str, value: f32 },

    /// The camera scroll line is outside the viewport.
    ScrollThreshold { threshold: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport { width, height } => {
                write!(f, "Viewport must be positive, got {}x{}", width, height)
            }
            Self::SpacingRange { min, max } => {
                write!(f, "Invalid platform spacing range [{}, {}]", min, max)
            }
            Self::SpeedRange { min, max } => {
                write!(f, "Invalid platform speed range [{}, {}]", min, max)
            }
            Self::MarginTooWide { margin, width } => {
                write!(f, "Horizontal margin {} leaves no room in width {}", margin, width)
            }
            Self::EmptyItemSet => write!(f, "Item set is empty"),
            Self::Probability { name, value } => {
                write!(f, "{} must be within [0, 1], got {}", name, value)
            }
            Self::NonPositive { name, value } => {
                write!(f, "{} must be positive, got {}", name, value)
            }
            Self::ScrollThreshold { threshold, height } => {
                write!(f, "Scroll threshold {} outside viewport height {}", threshold, height)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//=== Viewport ============================================================

/// Logical size of the visible window, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width > 0.0 && self.height > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::Viewport { width: self.width, height: self.height })
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

//=== ItemKind ============================================================

/// One collectible category and the height it is displayed at.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemKind {
    pub name: String,
    pub display_height: f32,
}

impl ItemKind {
    pub fn new(name: impl Into<String>, display_height: f32) -> Self {
        Self { name: name.into(), display_height }
    }
}

//=== LevelConfig =========================================================

/// Parameters for platform generation, recycling and item placement.
///
/// Setting `min_spacing == max_spacing` gives the fixed ladder of the
/// classic layout. `max_live_items = None` removes the global item cap.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub min_spacing: f32,
    pub max_spacing: f32,
    pub min_speed: f32,
    pub max_speed: f32,

    /// Keeps spawn positions inside `[margin, width - margin]`.
    pub horizontal_margin: f32,

    /// Distance from the viewport bottom to the first platform.
    pub ground_offset: f32,

    /// Extra distance below the viewport before a platform is recycled.
    pub recycle_margin: f32,

    pub platform_base_size: (f32, f32),
    pub platform_scale: (f32, f32),

    pub item_kinds: Vec<ItemKind>,
    pub item_spawn_probability: f64,
    pub initial_item_probability: f64,
    pub max_live_items: Option<usize>,

    pub idle_distance: f32,
    pub idle_duration_ms: f32,

    pub initial_levels: usize,
}

impl LevelConfig {
    //--- Builder Setters --------------------------------------------------

    /// Sets the spacing bounds between consecutive platforms.
    pub fn with_spacing(mut self, min: f32, max: f32) -> Self {
        self.min_spacing = min;
        self.max_spacing = max;
        self
    }

    /// Sets the horizontal speed bounds (sign is randomized per platform).
    pub fn with_speed(mut self, min: f32, max: f32) -> Self {
        self.min_speed = min;
        self.max_speed = max;
        self
    }

    pub fn with_recycle_margin(mut self, margin: f32) -> Self {
        self.recycle_margin = margin;
        self
    }

    pub fn with_item_probabilities(mut self, initial: f64, recycled: f64) -> Self {
        self.initial_item_probability = initial;
        self.item_spawn_probability = recycled;
        self
    }

    pub fn with_max_live_items(mut self, cap: Option<usize>) -> Self {
        self.max_live_items = cap;
        self
    }

    pub fn with_item_kinds(mut self, kinds: Vec<ItemKind>) -> Self {
        self.item_kinds = kinds;
        self
    }

    //--- Derived Values ---------------------------------------------------

    /// Display size of a platform (base sprite size × scale).
    pub fn platform_size(&self) -> (f32, f32) {
        (
            self.platform_base_size.0 * self.platform_scale.0,
            self.platform_base_size.1 * self.platform_scale.1,
        )
    }

    //--- Validation -------------------------------------------------------

    pub fn validate(&self, viewport: &Viewport) -> Result<(), ConfigError> {
        if !(self.min_spacing > 0.0 && self.min_spacing <= self.max_spacing) {
            return Err(ConfigError::SpacingRange {
                min: self.min_spacing,
                max: self.max_spacing,
            });
        }

        if !(self.min_speed >= 0.0 && self.min_speed <= self.max_speed) {
            return Err(ConfigError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        if self.horizontal_margin < 0.0 || self.horizontal_margin * 2.0 > viewport.width {
            return Err(ConfigError::MarginTooWide {
                margin: self.horizontal_margin,
                width: viewport.width,
            });
        }

        if self.item_kinds.is_empty() {
            return Err(ConfigError::EmptyItemSet);
        }

        check_probability("item_spawn_probability", self.item_spawn_probability)?;
        check_probability("initial_item_probability", self.initial_item_probability)?;

        check_positive("platform_base_width", self.platform_base_size.0)?;
        check_positive("platform_base_height", self.platform_base_size.1)?;
        check_positive("platform_scale_x", self.platform_scale.0)?;
        check_positive("platform_scale_y", self.platform_scale.1)?;
        check_positive("idle_duration_ms", self.idle_duration_ms)?;

        for kind in &self.item_kinds {
            check_positive("item_display_height", kind.display_height)?;
        }

        Ok(())
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            min_spacing: PLATFORM_SPACING,
            max_spacing: PLATFORM_SPACING,
            min_speed: PLATFORM_MIN_SPEED,
            max_speed: PLATFORM_MAX_SPEED,
            horizontal_margin: 20.0,
            ground_offset: 20.0,
            recycle_margin: 100.0,
            platform_base_size: (160.0, 48.0),
            platform_scale: (PLATFORM_SCALE, PLATFORM_SCALE),
            item_kinds: ITEM_NAMES
                .iter()
                .map(|name| ItemKind::new(*name, ITEM_HEIGHT))
                .collect(),
            item_spawn_probability: 0.5,
            initial_item_probability: 1.0,
            max_live_items: Some(15),
            idle_distance: 10.0,
            idle_duration_ms: 1000.0,
            initial_levels: 8,
        }
    }
}

//=== InputConfig =========================================================

/// Thresholds for the pointer gesture state machine and the velocities
/// it hands to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// Horizontal travel (px) after which a press becomes a drag.
    pub drag_threshold: f32,

    /// Max travel on either axis for a release to count as a tap.
    pub tap_max_distance: f32,

    /// Max press duration for a tap.
    pub tap_max_duration_ms: u64,

    pub player_speed: f32,

    /// Upward launch velocity floor (negative is up).
    pub jump_velocity: f32,

    /// Pointer-to-player distance multiplier while dragging.
    pub drag_gain: f32,

    /// Horizontal velocity factor applied each tick with no pointer held.
    pub release_damping: f32,
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("drag_threshold", self.drag_threshold)?;
        check_positive("tap_max_distance", self.tap_max_distance)?;
        check_positive("tap_max_duration_ms", self.tap_max_duration_ms as f32)?;
        check_positive("player_speed", self.player_speed)?;
        check_positive("drag_gain", self.drag_gain)?;
        check_probability("release_damping", self.release_damping as f64)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 15.0,
            tap_max_distance: 15.0,
            tap_max_duration_ms: 300,
            player_speed: 450.0,
            jump_velocity: -550.0,
            drag_gain: 2.0,
            release_damping: 0.95,
        }
    }
}

//=== SessionConfig =======================================================

/// Camera follow and respawn parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Screen-space line the player may not rise above; the camera
    /// scrolls instead.
    pub scroll_threshold: f32,

    /// Player respawn height above the viewport bottom.
    pub player_spawn_offset: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 300.0,
            player_spawn_offset: 50.0,
        }
    }
}

//=== GameConfig ==========================================================

/// Complete configuration for a game session.
///
/// # Examples
///
/// ```
/// use tori_jump::core::config::{GameConfig, LevelConfig};
///
/// let config = GameConfig::default()
///     .with_level(LevelConfig::default().with_spacing(200.0, 260.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameConfig {
    pub viewport: Viewport,
    pub level: LevelConfig,
    pub input: InputConfig,
    pub session: SessionConfig,
}

impl GameConfig {
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_level(mut self, level: LevelConfig) -> Self {
        self.level = level;
        self
    }

    pub fn with_input(mut self, input: InputConfig) -> Self {
        self.input = input;
        self
    }

    pub fn with_session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }

    /// Checks every section; returns the first contradiction found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport.validate()?;
        self.level.validate(&self.viewport)?;
        self.input.validate()?;

        let threshold = self.session.scroll_threshold;
        if !(threshold > 0.0 && threshold < self.viewport.height) {
            return Err(ConfigError::ScrollThreshold {
                threshold,
                height: self.viewport.height,
            });
        }

        Ok(())
    }
}

//--- Helpers -------------------------------------------------------------

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { name, value })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
