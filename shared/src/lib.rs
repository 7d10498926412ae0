pub mod models;
pub mod utils;

// Plain data shared by the engine and the GUI: palettes, theme selection and cards.
// No behaviour beyond lookups lives here.
