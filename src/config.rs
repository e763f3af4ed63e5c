use anyhow::{ensure, Result};

/// Board and pacing parameters for one game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Rows of the board, borders included
    pub height: usize,
    /// Columns of the board, borders included
    pub width: usize,
    /// Length of the snake when the session starts
    pub initial_length: usize,
    /// Milliseconds between automatic ticks at the start
    pub initial_interval_ms: f64,
    /// Multiplier applied to the interval every time food is eaten
    pub speed_factor: f64,
    /// The interval never shrinks below this
    pub min_interval_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 20,
            width: 50,
            initial_length: 5,
            initial_interval_ms: 200.0,
            speed_factor: 0.9,
            min_interval_ms: 1.0,
        }
    }
}

impl GameConfig {
    /// Check that the board can hold the starting snake and the pacing is sane
    pub fn validate(&self) -> Result<()> {
        ensure!(self.height >= 3, "height must be at least 3, got {}", self.height);
        ensure!(self.width >= 3, "width must be at least 3, got {}", self.width);
        ensure!(self.initial_length >= 1, "initial length must be at least 1");

        let (center_row, center_col) = (self.height / 2, self.width / 2);
        ensure!(
            center_row >= 1 && center_row <= self.height - 2,
            "a {}-row board has no interior row for the snake",
            self.height
        );
        ensure!(
            center_col + self.initial_length <= self.width - 2,
            "a snake of length {} does not fit on a {}-column board",
            self.initial_length,
            self.width
        );

        ensure!(
            self.initial_interval_ms > 0.0,
            "interval must be positive, got {}",
            self.initial_interval_ms
        );
        ensure!(
            self.speed_factor > 0.0 && self.speed_factor <= 1.0,
            "speed factor must be in (0, 1], got {}",
            self.speed_factor
        );
        ensure!(
            self.min_interval_ms >= 0.0,
            "minimum interval cannot be negative, got {}",
            self.min_interval_ms
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.height, 20);
        assert_eq!(config.width, 50);
        assert_eq!(config.initial_length, 5);
        assert_eq!(config.initial_interval_ms, 200.0);
        assert_eq!(config.speed_factor, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_snake_must_fit() {
        let config = GameConfig { width: 12, initial_length: 5, ..Default::default() };
        // center column 6, run reaches column 11 which is the right border
        assert!(config.validate().is_err());

        let config = GameConfig { width: 13, initial_length: 5, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_pacing() {
        let config = GameConfig { speed_factor: 1.5, ..Default::default() };
        assert!(config.validate().is_err());

        let config = GameConfig { initial_interval_ms: 0.0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = GameConfig { min_interval_ms: -1.0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_board() {
        let config = GameConfig { height: 2, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
