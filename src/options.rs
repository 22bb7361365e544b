//! Table configuration options.

use alloc::string::String;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(250)
///     .with_player_name("Ada");
/// assert_eq!(options.starting_chips, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips the player sits down with.
    pub starting_chips: usize,
    /// Player name shown in views.
    pub player_name: String,
    /// Dealer name shown in views.
    pub dealer_name: String,
    /// Whether a dealer natural pushes against a player natural.
    ///
    /// Off by default: a player natural is paid without looking at the
    /// dealer's hole card. Standard casino rules turn this on.
    pub dealer_natural_pushes: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: 1000,
            player_name: String::from("Player"),
            dealer_name: String::from("Dealer"),
            dealer_natural_pushes: false,
        }
    }
}

impl TableOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the player name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the dealer name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets whether a dealer natural pushes against a player natural.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_natural_pushes(true);
    /// assert!(options.dealer_natural_pushes);
    /// ```
    #[must_use]
    pub const fn with_dealer_natural_pushes(mut self, pushes: bool) -> Self {
        self.dealer_natural_pushes = pushes;
        self
    }
}
