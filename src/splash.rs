use std::time::Duration;

/// Time the loader stays up before the site is revealed.
pub const SPLASH_DURATION: Duration = Duration::from_millis(2800);
/// Interval between loader status phrases.
pub const STATUS_INTERVAL: Duration = Duration::from_millis(700);
/// Interval between hero title phrases.
pub const TITLE_INTERVAL: Duration = Duration::from_secs(3);

pub const STATUS_PHRASES: &[&str] = &[
    "System Initializing...",
    "Decrypting Profile...",
    "Linking Neural Modules...",
    "Access Granted",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SplashPhase {
    #[default]
    Loading,
    Content,
}

/// One-shot `Loading -> Content` switch.
#[derive(Debug, Default, Clone, Copy)]
pub struct Splash {
    phase: SplashPhase,
}

impl Splash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SplashPhase::Loading
    }

    /// Returns true only for the call that performed the transition.
    pub fn finish(&mut self) -> bool {
        match self.phase {
            SplashPhase::Loading => {
                self.phase = SplashPhase::Content;
                true
            }
            SplashPhase::Content => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMode {
    Loop,
    /// Advance to the last phrase and hold there.
    Once,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseCycle {
    len: usize,
    index: usize,
    mode: CycleMode,
}

impl PhraseCycle {
    pub fn new(len: usize, mode: CycleMode) -> Self {
        Self {
            len,
            index: 0,
            mode,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current<'a, T>(&self, phrases: &'a [T]) -> Option<&'a T> {
        phrases.get(self.index)
    }

    pub fn is_done(&self) -> bool {
        self.mode == CycleMode::Once && self.index + 1 >= self.len
    }

    pub fn advance(&mut self) -> usize {
        if self.len == 0 {
            return 0;
        }
        self.index = match self.mode {
            CycleMode::Loop => (self.index + 1) % self.len,
            CycleMode::Once => (self.index + 1).min(self.len - 1),
        };
        self.index
    }
}

/// Number of cubes in the loader (3x3x3).
pub const CUBE_COUNT: usize = 27;

/// Grid position of loader cube `index`, each axis in `-1..=1`, scaled by
/// `spacing`.
pub fn cube_position(index: usize, spacing: f64) -> (f64, f64, f64) {
    let x = (index % 3) as f64 - 1.0;
    let y = ((index / 3) % 3) as f64 - 1.0;
    let z = (index / 9) as f64 - 1.0;
    (x * spacing, y * spacing, z * spacing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_is_one_shot() {
        let mut splash = Splash::new();
        assert!(splash.is_loading());

        assert!(splash.finish());
        assert!(!splash.is_loading());

        for _ in 0..3 {
            assert!(!splash.finish());
            assert!(!splash.is_loading());
        }
    }

    #[test]
    fn test_loop_cycle_wraps() {
        let titles = ["a", "b", "c"];
        let mut cycle = PhraseCycle::new(titles.len(), CycleMode::Loop);
        assert_eq!(cycle.current(&titles), Some(&"a"));
        let seen: Vec<_> = (0..5).map(|_| titles[cycle.advance()]).collect();
        assert_eq!(seen, vec!["b", "c", "a", "b", "c"]);
        assert!(!cycle.is_done());
    }

    #[test]
    fn test_once_cycle_holds_last() {
        let mut cycle = PhraseCycle::new(STATUS_PHRASES.len(), CycleMode::Once);
        for _ in 0..10 {
            cycle.advance();
        }
        assert_eq!(cycle.index(), STATUS_PHRASES.len() - 1);
        assert!(cycle.is_done());
        assert_eq!(cycle.current(STATUS_PHRASES), STATUS_PHRASES.last());
    }

    #[test]
    fn test_empty_cycle() {
        let mut cycle = PhraseCycle::new(0, CycleMode::Loop);
        assert_eq!(cycle.advance(), 0);
        assert_eq!(cycle.current::<&str>(&[]), None);
    }

    #[test]
    fn test_status_phrases_fit_in_splash() {
        let shown = SPLASH_DURATION.as_millis() / STATUS_INTERVAL.as_millis();
        assert!(shown as usize >= STATUS_PHRASES.len() - 1);
    }

    #[test]
    fn test_cube_grid() {
        assert_eq!(cube_position(0, 120.0), (-120.0, -120.0, -120.0));
        assert_eq!(cube_position(13, 120.0), (0.0, 0.0, 0.0));
        assert_eq!(cube_position(CUBE_COUNT - 1, 120.0), (120.0, 120.0, 120.0));

        let mut all: Vec<_> = (0..CUBE_COUNT)
            .map(|i| cube_position(i, 1.0))
            .map(|(x, y, z)| (x as i32, y as i32, z as i32))
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), CUBE_COUNT);
    }
}
