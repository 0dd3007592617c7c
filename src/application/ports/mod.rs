// src/application/ports/mod.rs
pub mod media;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type MediaStorePort = dyn media::MediaStore;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
