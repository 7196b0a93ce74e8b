//! Player statistics across won games.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of one-minute buckets in the solve-time distribution.
///
/// The last bucket also counts every game that took longer.
pub const DISTRIBUTION_LENGTH: usize = 11;

/// Won-game statistics.
///
/// Serialized with camelCase keys, e.g.
/// `{"wonGames":1,"fastestGame":23,"fewestMoves":12,"distribution":[1,0,0,0,0,0,0,0,0,0,0]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    won_games: u64,
    fastest_game: Option<u64>,
    #[serde(default)]
    fewest_moves: Option<u64>,
    distribution: [u64; DISTRIBUTION_LENGTH],
}

/// Reasons imported statistics are rejected.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant)]
pub enum StatsError {
    /// The input is not JSON.
    #[display("invalid stats JSON: {_0}")]
    Json(#[from] serde_json::Error),
    /// The input is JSON but not an object.
    #[display("stats must be a JSON object")]
    NotAnObject,
    /// `wonGames` is missing.
    #[display("wonGames value must be populated")]
    MissingWonGames,
    /// `wonGames` is not a nonnegative integer.
    #[display("wonGames value must be a nonnegative number")]
    InvalidWonGames,
    /// `fastestGame` is missing.
    #[display("fastestGame value must be populated")]
    MissingFastestGame,
    /// `fastestGame` is neither null nor a nonnegative integer.
    #[display("fastestGame must either be null or a nonnegative number")]
    InvalidFastestGame,
    /// `fewestMoves` is present but neither null nor a nonnegative integer.
    #[display("fewestMoves must either be null or a nonnegative number")]
    InvalidFewestMoves,
    /// `distribution` is missing.
    #[display("distribution value must be populated")]
    MissingDistribution,
    /// `distribution` is not a list of 11 nonnegative integers.
    #[display("distribution must be populated with 11 nonnegative entries")]
    InvalidDistribution,
}

impl Stats {
    /// Creates empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of won games.
    #[must_use]
    #[inline]
    pub fn won_games(&self) -> u64 {
        self.won_games
    }

    /// Returns the fastest solve time in seconds, if any game was won.
    #[must_use]
    #[inline]
    pub fn fastest_game(&self) -> Option<u64> {
        self.fastest_game
    }

    /// Returns the fewest presses used to win a game, if recorded.
    #[must_use]
    #[inline]
    pub fn fewest_moves(&self) -> Option<u64> {
        self.fewest_moves
    }

    /// Returns the number of wins per started minute of solve time.
    #[must_use]
    #[inline]
    pub fn distribution(&self) -> &[u64; DISTRIBUTION_LENGTH] {
        &self.distribution
    }

    /// Records a win that took `seconds` and `moves` presses.
    ///
    /// # Examples
    ///
    /// ```
    /// use flippin_game::Stats;
    ///
    /// let mut stats = Stats::new();
    /// stats.record_win(75, 12);
    /// stats.record_win(3600, 30);
    /// assert_eq!(stats.won_games(), 2);
    /// assert_eq!(stats.fastest_game(), Some(75));
    /// assert_eq!(stats.fewest_moves(), Some(12));
    /// assert_eq!(stats.distribution()[1], 1);
    /// assert_eq!(stats.distribution()[10], 1);
    /// ```
    pub fn record_win(&mut self, seconds: u64, moves: u32) {
        let moves = u64::from(moves);
        self.won_games += 1;
        self.fastest_game = Some(self.fastest_game.map_or(seconds, |f| f.min(seconds)));
        self.fewest_moves = Some(self.fewest_moves.map_or(moves, |f| f.min(moves)));

        let bucket = usize::try_from(seconds / 60)
            .map_or(DISTRIBUTION_LENGTH - 1, |minutes| {
                minutes.min(DISTRIBUTION_LENGTH - 1)
            });
        self.distribution[bucket] += 1;
        log::debug!("recorded win in {seconds}s with {moves} moves (bucket {bucket})");
    }

    /// Parses and validates exported statistics.
    ///
    /// `wonGames`, `fastestGame`, and `distribution` must be present;
    /// `fastestGame` and the optional `fewestMoves` may be `null`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Json`] for malformed JSON and the matching
    /// [`StatsError`] variant for the first field that fails validation, checked
    /// in the order `wonGames`, `fastestGame`, `fewestMoves`, `distribution`.
    pub fn import_json(json: &str) -> Result<Self, StatsError> {
        let value: Value = serde_json::from_str(json)?;
        let fields = value.as_object().ok_or(StatsError::NotAnObject)?;

        let won_games = fields
            .get("wonGames")
            .ok_or(StatsError::MissingWonGames)?
            .as_u64()
            .ok_or(StatsError::InvalidWonGames)?;

        let fastest_game = match fields.get("fastestGame") {
            None => return Err(StatsError::MissingFastestGame),
            Some(Value::Null) => None,
            Some(v) => Some(v.as_u64().ok_or(StatsError::InvalidFastestGame)?),
        };

        let fewest_moves = match fields.get("fewestMoves") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_u64().ok_or(StatsError::InvalidFewestMoves)?),
        };

        let entries = fields
            .get("distribution")
            .ok_or(StatsError::MissingDistribution)?
            .as_array()
            .ok_or(StatsError::InvalidDistribution)?;
        if entries.len() != DISTRIBUTION_LENGTH {
            return Err(StatsError::InvalidDistribution);
        }
        let mut distribution = [0; DISTRIBUTION_LENGTH];
        for (slot, entry) in distribution.iter_mut().zip(entries) {
            *slot = entry.as_u64().ok_or(StatsError::InvalidDistribution)?;
        }

        Ok(Self {
            won_games,
            fastest_game,
            fewest_moves,
            distribution,
        })
    }

    /// Serializes the statistics in the import format.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, StatsError> {
        Ok(serde_json::to_string(self)?)
    }
}
