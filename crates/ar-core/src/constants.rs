// Interaction tuning constants shared by the core and the web front-end.

// Pose manipulation
pub const ROTATE_SENSITIVITY: f32 = 0.5; // degrees per pixel of drag
pub const POSITION_STEP: f32 = 0.2; // scene units per pan button press
pub const ZOOM_STEP: f32 = 0.15; // scale change per zoom button press
pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 5.0;
pub const DEFAULT_SCALE: f32 = 1.0;

// Scene mapping
pub const BASE_TILT_DEG: f32 = -90.0; // lays the model flat on the marker

// Web shell
pub const LOADING_DELAY_MS: i32 = 2000;
pub const CONTACT_RECIPIENT: &str = "info@agenproperti.example";
pub const CONTACT_SUBJECT_PREFIX: &str = "Ketertarikan pada properti: ";

// UI subtrees whose presses never start a drag
pub const RESERVED_UI_SELECTORS: [&str; 3] = [".control-panel", ".popup-content", ".btn-back"];
