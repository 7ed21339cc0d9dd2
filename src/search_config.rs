/// Options for configuring [`dijkstra_search`](crate::dijkstra_search)
///
/// Default options:
/// ```
/// # use maze_pathfinding::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		max_expansions: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The maximum number of Nodes the search may finalize before giving up (defaults to `None`).
	///
	/// `None` searches until the goal is found or every reachable Node was expanded.
	/// A search that hits the limit is reported as [`Unreachable`](crate::Error::Unreachable),
	/// which allows putting an upper bound on the runtime for very large mazes.
	pub max_expansions: Option<usize>,
}

impl SearchConfig {
	/// A SearchConfig without any limits
	///
	/// Values:
	/// ```
	/// # use maze_pathfinding::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		max_expansions: None,
	/// 	},
	/// 	SearchConfig::UNBOUNDED
	/// );
	/// ```
	pub const UNBOUNDED: SearchConfig = SearchConfig {
		max_expansions: None,
	};

	/// Creates a SearchConfig that stops after `max_expansions` finalized Nodes
	pub fn with_max_expansions(max_expansions: usize) -> SearchConfig {
		SearchConfig {
			max_expansions: Some(max_expansions),
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::UNBOUNDED
	}
}
