// src/config/consts.rs

// Demo data
pub const DEMO_COMPANIES: &[&str] = &[
    "Acme Inc",
    "Globex Corporation",
    "Stark Industries",
    "Wayne Enterprises",
    "Umbrella Corporation",
    "Cyberdyne Systems",
    "Soylent Corp",
    "Massive Dynamic",
];
pub const DEFAULT_SELECTED: usize = 5;

// Simulation
pub const SUCCESS_PROBABILITY: f64 = 0.7;
pub const CONTACT_DELAY_MS: (u64, u64) = (800, 1200);
pub const PERSON_DELAY_MS: (u64, u64) = (800, 1200);
pub const ENTITY_GAP_MS: (u64, u64) = (300, 300);

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_W: f32 = 720.0;
pub const WINDOW_H: f32 = 520.0;
pub const POPUP_W: f32 = 460.0;
pub const POPUP_LIST_H: f32 = 320.0;
