// Shared layout, simulation and timing tuning constants.
//
// Growth rates and caps are visual tuning values. They only need to keep the
// "grow monotonically, then cap" shape; exact pacing is not meaningful.

// Viewport frame (fractions of min(width, height))
pub const INNER_RADIUS_RATIO: f32 = 0.15; // city disc
pub const OUTER_RADIUS_RATIO: f32 = 0.45; // travel boundary

// Topics
pub const SECTION_COUNT: usize = 5;

// Navigation nodes (fraction of half the reference size)
pub const NODE_DISTANCE_RATIO: f32 = 0.72;

// Pedestrians
pub const PEDESTRIAN_RATE_PER_SEC: f32 = 0.8;
pub const PEDESTRIAN_MIN: usize = 14;
pub const PEDESTRIAN_MAX: usize = 90;
pub const PEDESTRIAN_CULL_RATIO: f32 = 0.80; // of inner radius
pub const PEDESTRIAN_SPEED_MIN: f32 = 0.12; // px per frame
pub const PEDESTRIAN_SPEED_MAX: f32 = 0.45;
pub const PEDESTRIAN_SPAWNS_PER_TICK: usize = 2;
pub const SIDEWALK_BIAS_RATIO: f32 = 0.025; // of inner radius
pub const WOBBLE_AMPLITUDE: f32 = 0.6; // px
pub const WOBBLE_SPEED_MIN: f32 = 0.05;
pub const WOBBLE_SPEED_MAX: f32 = 0.15;
pub const CALM_PEDESTRIAN_FACTOR: f32 = 0.45; // target shrinks by this share at blend 1

// City street grid: lanes per axis, evenly spaced across this share of the disc
pub const STREETS_PER_AXIS: usize = 5;
pub const STREET_SPAN_RATIO: f32 = 0.62; // of inner radius, each side

// Proximity particles
pub const PARTICLE_RATE_PER_SEC: f32 = 0.3;
pub const PARTICLE_MIN: usize = 24;
pub const PARTICLE_MAX: usize = 64;
pub const PARTICLE_INNER_BAND: f32 = 1.5; // x inner radius
pub const PARTICLE_OUTER_BAND: f32 = 0.80; // x outer radius
pub const PARTICLE_ANGULAR_SPEED_MIN: f32 = 0.0008; // rad per frame
pub const PARTICLE_ANGULAR_SPEED_MAX: f32 = 0.0035;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 2.6;
pub const PARTICLE_BREATH_SPEED_MIN: f32 = 0.01;
pub const PARTICLE_BREATH_SPEED_MAX: f32 = 0.035;
pub const PARTICLE_BREATH_DEPTH: f32 = 0.35;
pub const PARTICLE_OPACITY_NEAR: f32 = 0.85;
pub const PARTICLE_OPACITY_FAR: f32 = 0.25;
pub const PARTICLE_DEFAULT_RATIO: f32 = 0.5; // used when the band collapses
pub const RADIAL_WOBBLE_DEPTH: f32 = 0.08; // +/- share of base radius
pub const RADIAL_WOBBLE_SPEED_MIN: f32 = 0.004;
pub const RADIAL_WOBBLE_SPEED_MAX: f32 = 0.012;

// Exterior points
pub const EXTERIOR_RATE_PER_SEC: f32 = 0.15;
pub const EXTERIOR_MIN: usize = 6;
pub const EXTERIOR_MAX: usize = 30;
pub const EXTERIOR_PULSE_DEPTH: f32 = 0.3;

// Distance rings (fraction of half the reference size)
pub const RING_RATIOS: [f32; 4] = [0.30, 0.50, 0.70, 0.90];
pub const RING_PULSE_SPEED: f32 = 1.2; // rad per second

// Background blend
pub const BLEND_TRANSITION_SECS: f32 = 1.2;
pub const CAPTION_THRESHOLD: f32 = 0.1;

// Panel timing (milliseconds)
pub const PANEL_OPEN_DELAY_MS: u64 = 200;
pub const PANEL_CLOSE_DELAY_MS: u64 = 400;
pub const INTENSITY_DELAY_MS: u64 = 100;

// Guard for divisions by a collapsed range
pub const EPSILON: f32 = 1e-6;
