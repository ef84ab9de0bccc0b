#![forbid(unsafe_code)]

//! Navigation configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `WAYPOINT_VIM_KEYS` | `false` | Map `h/j/k/l` to directions |
//! | `WAYPOINT_IGNORE_MODIFIED` | `true` | Keys held with CTRL/ALT/SUPER never navigate |
//! | `WAYPOINT_MAX_RESOLVE_DEPTH` | `64` | Bound on the resolve walk (1-4096) |

/// Default bound on the number of resolve steps.
pub const DEFAULT_MAX_RESOLVE_DEPTH: usize = 64;
/// Smallest accepted resolve bound.
pub const MIN_MAX_RESOLVE_DEPTH: usize = 1;
/// Largest accepted resolve bound.
pub const MAX_MAX_RESOLVE_DEPTH: usize = 4096;

const ENV_VIM_KEYS: &str = "WAYPOINT_VIM_KEYS";
const ENV_IGNORE_MODIFIED: &str = "WAYPOINT_IGNORE_MODIFIED";
const ENV_MAX_RESOLVE_DEPTH: &str = "WAYPOINT_MAX_RESOLVE_DEPTH";

/// Configuration for key mapping and the capture/resolve walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavConfig {
    /// Map `h`/`j`/`k`/`l` to LEFT/DOWN/UP/RIGHT.
    /// Default: false.
    pub vim_keys: bool,

    /// Ignore keys held with CTRL, ALT or SUPER.
    /// Default: true.
    pub ignore_modified: bool,

    /// Maximum number of resolve steps before giving up.
    /// Default: 64.
    pub max_resolve_depth: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            vim_keys: false,
            ignore_modified: true,
            max_resolve_depth: DEFAULT_MAX_RESOLVE_DEPTH,
        }
    }
}

impl NavConfig {
    #[must_use]
    pub fn with_vim_keys(mut self, enabled: bool) -> Self {
        self.vim_keys = enabled;
        self
    }

    #[must_use]
    pub fn with_ignore_modified(mut self, ignore: bool) -> Self {
        self.ignore_modified = ignore;
        self
    }

    #[must_use]
    pub fn with_max_resolve_depth(mut self, depth: usize) -> Self {
        self.max_resolve_depth = depth;
        self
    }

    /// Load config from the process environment.
    ///
    /// Values are automatically clamped to valid ranges.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load config using a custom environment lookup (for tests).
    ///
    /// Unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = get_env(ENV_VIM_KEYS)
            && let Some(flag) = parse_bool(&val)
        {
            config.vim_keys = flag;
        }

        if let Some(val) = get_env(ENV_IGNORE_MODIFIED)
            && let Some(flag) = parse_bool(&val)
        {
            config.ignore_modified = flag;
        }

        if let Some(val) = get_env(ENV_MAX_RESOLVE_DEPTH)
            && let Ok(depth) = val.trim().parse::<usize>()
        {
            config.max_resolve_depth = depth;
        }

        config.validated()
    }

    /// Clamp `max_resolve_depth` into `1..=4096`.
    ///
    /// # Example
    ///
    /// ```
    /// use waypoint_core::NavConfig;
    ///
    /// let config = NavConfig::default().with_max_resolve_depth(0).validated();
    /// assert_eq!(config.max_resolve_depth, 1);
    /// ```
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.max_resolve_depth = self
            .max_resolve_depth
            .clamp(MIN_MAX_RESOLVE_DEPTH, MAX_MAX_RESOLVE_DEPTH);
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
