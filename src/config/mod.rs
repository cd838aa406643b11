mod settings;

pub use settings::{Config, Mode, Settings, SpriteSettings};
