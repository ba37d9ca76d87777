//! Simulation constants and runtime configuration defaults

// Board geometry
/// Side length of the square board
pub const BOARD_SIZE: usize = 40;

/// Notional neighbour slots every cell is measured against, regardless of position
pub const NEIGHBOR_SLOTS: u8 = 8;

/// Chebyshev radius searched for empty cells when relocating
pub const DEFAULT_SEARCH_RADIUS: usize = 5;

// Default values for configurable parameters
/// Total occupants placed by default
pub const DEFAULT_POPULATION: usize = 1200;

/// Maximum tolerated fraction of dissimilar neighbours
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Fixed seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;

/// Pass limit for interactive runs
pub const INTERACTIVE_ITERATION_CAP: usize = 100;

/// Pass limit for each batch run
pub const BATCH_ITERATION_CAP: usize = 50;

// Batch parameter sweep
/// First population size in the batch sweep
pub const BATCH_POPULATION_START: usize = 800;
/// Last population size in the batch sweep (inclusive)
pub const BATCH_POPULATION_END: usize = 1400;
/// Population increment between batch configurations
pub const BATCH_POPULATION_STEP: usize = 150;
/// Tolerances swept are `k / BATCH_TOLERANCE_STEPS` for `k` in `1..=BATCH_TOLERANCE_STEPS`
pub const BATCH_TOLERANCE_STEPS: u32 = 8;
/// Runs per batch configuration
pub const BATCH_REPEATS: usize = 500;
/// Multiplier spreading batch run indices across the seed space
pub const RUN_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

// Rendering
/// Edge length in pixels of animation frames
pub const ANIMATION_IMAGE_SIZE: u32 = 800;
/// Pixels per cell in batch snapshots
pub const BATCH_CELL_PIXELS: u32 = 1;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 300;

/// Colour of high-status occupants
pub const HIGH_COLOR: [u8; 3] = [0, 128, 0];
/// Colour of low-status occupants
pub const LOW_COLOR: [u8; 3] = [255, 0, 0];
/// Colour of empty cells
pub const EMPTY_COLOR: [u8; 3] = [255, 255, 255];

// Output settings
/// Default directory for exported files
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
