//! Configuration for the checkers engine.

pub struct Config {
    /// Extra value of a king over a man.
    pub king_bonus: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { king_bonus: 0.5 }
    }
}
