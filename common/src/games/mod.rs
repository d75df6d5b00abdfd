mod session_rng;

pub mod black_white_tiles;

pub use session_rng::SessionRng;
