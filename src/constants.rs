// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const TICK_SECONDS: f32 = 0.016;

// Entrance sequence deadlines, relative to launch
pub const TITLE_REVEAL_AT_MS: u64 = 1200;
pub const SUBTITLE_TYPING_AT_MS: u64 = 2800;
pub const INTERACTIVE_SETTLE_MS: u64 = 500;

// The Interactive deadline budgets 40ms per character while the typewriter
// actually ticks every 35ms. The wider figure is a scheduling margin so
// typing always finishes before the interactive phase opens.
pub const TYPE_MARGIN_PER_CHAR_MS: u64 = 40;
pub const TYPE_INTERVAL_MS: u64 = 35;

pub const SUBTITLE_TEXT: &str =
    "Guide the process. Shape the intelligence. Create beyond experience.";

// Particle field
pub const PARTICLE_COUNT: usize = 120;
pub const CONNECTION_DISTANCE: f32 = 120.0;
pub const MOUSE_RADIUS: f32 = 200.0;
pub const ATTRACTION_GAIN: f32 = 1.5;
pub const DRIFT_SPEED: f32 = 0.4;
pub const PARTICLE_MIN_SIZE: f32 = 0.5;
pub const PARTICLE_SIZE_RANGE: f32 = 2.0;
pub const PARTICLE_ALPHA: f32 = 0.4;
pub const LINK_MAX_ALPHA: f32 = 0.15;
pub const FIELD_FADE_SECONDS: f32 = 2.0;
pub const DISTANCE_EPSILON: f32 = 1e-4;

// Presentational
pub const TITLE_FADE_SECONDS: f32 = 0.8;
pub const CURSOR_BLINK_SECONDS: f32 = 1.06;
pub const DEMO_CARD_WIDTH: f32 = 640.0;
pub const DEMO_CARD_HEIGHT: f32 = 192.0;
pub const CTA_MAX_WIDTH: f32 = 420.0;

// Window
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
