//! Scroll and pointer driven values for the background layers.
//!
//! Everything here is a pure function of the latest sample except
//! [`GridFlow`], which accumulates the floor scroll position.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl LinearMap {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Linear interpolation, clamped to the output range outside the input
    /// range.
    pub fn map(&self, value: f64) -> f64 {
        let (in_lo, in_hi) = self.input;
        let (out_lo, out_hi) = self.output;
        if in_hi == in_lo {
            return out_lo;
        }
        let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
        out_lo + (out_hi - out_lo) * t
    }
}

/// Grid floor tilt in degrees.
pub const GRID_TILT: LinearMap = LinearMap::new((0.0, 1000.0), (60.0, 75.0));
/// Vertical drift of the grid floor in px.
pub const GRID_DRIFT: LinearMap = LinearMap::new((0.0, 1000.0), (0.0, -200.0));
/// Vertical offset of the sun glow in px.
pub const SUN_DRIFT: LinearMap = LinearMap::new((0.0, 1000.0), (0.0, 300.0));
pub const SUN_OPACITY: LinearMap = LinearMap::new((0.0, 500.0), (1.0, 0.5));
pub const HERO_BACKDROP_DRIFT: LinearMap = LinearMap::new((0.0, 1000.0), (0.0, 400.0));
pub const HERO_BACKDROP_OPACITY: LinearMap = LinearMap::new((0.0, 500.0), (1.0, 0.2));
pub const SCROLL_HINT_OPACITY: LinearMap = LinearMap::new((0.0, 200.0), (1.0, 0.0));

/// Offset of a layer following the pointer: position relative to the
/// viewport centre, normalized to `[-1, 1]` per axis, times `strength` px.
/// Zero until a pointer has been seen.
pub fn pointer_shift(
    pointer: Option<(f64, f64)>,
    viewport: (f64, f64),
    strength: f64,
) -> (f64, f64) {
    let Some(pointer) = pointer else {
        return (0.0, 0.0);
    };
    let axis = |p: f64, size: f64| {
        if size <= 0.0 || !size.is_finite() {
            0.0
        } else {
            ((p / size) * 2.0 - 1.0).clamp(-1.0, 1.0) * strength
        }
    };
    (axis(pointer.0, viewport.0), axis(pointer.1, viewport.1))
}

/// Size of one grid floor tile in px.
pub const GRID_TILE: f64 = 60.0;

/// Scroll position of the grid floor texture.
///
/// Each tick advances by a base rate plus a term proportional to the recent
/// scroll velocity, wrapped to one tile so the pattern stays seamless.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFlow {
    offset: f64,
    last_scroll: Option<f64>,
    pub tile: f64,
    /// px per ms while idle
    pub base_rate: f64,
    /// extra px per ms for each px/ms of scroll velocity
    pub velocity_factor: f64,
}

impl Default for GridFlow {
    fn default() -> Self {
        // one tile every two seconds when idle
        Self::new(GRID_TILE, GRID_TILE / 2000.0, 0.5)
    }
}

impl GridFlow {
    pub fn new(tile: f64, base_rate: f64, velocity_factor: f64) -> Self {
        Self {
            offset: 0.0,
            last_scroll: None,
            tile,
            base_rate,
            velocity_factor,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Advances by `dt_ms` given the latest scroll sample and returns the new
    /// wrapped offset. Ticks with a non-positive `dt_ms` are ignored.
    pub fn tick(&mut self, dt_ms: f64, scroll_y: f64) -> f64 {
        if dt_ms <= 0.0 || !dt_ms.is_finite() {
            return self.offset;
        }
        let velocity = self
            .last_scroll
            .map(|last| (scroll_y - last).abs() / dt_ms)
            .unwrap_or(0.0);
        self.last_scroll = Some(scroll_y);

        let step = (self.base_rate + self.velocity_factor * velocity) * dt_ms;
        self.offset = (self.offset + step).rem_euclid(self.tile);
        self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// % of viewport
    pub top: f64,
    /// % of viewport
    pub left: f64,
    /// px
    pub size: f64,
    /// s
    pub duration: f64,
    /// s
    pub delay: f64,
    /// multiplier on the scroll drift
    pub depth: f64,
}

impl Particle {
    /// Particles look random but are derived from their index so the server
    /// render and the hydrated client agree.
    pub fn from_index(index: usize) -> Self {
        let mut seed = (index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut next = move || {
            // xorshift64*
            seed ^= seed >> 12;
            seed ^= seed << 25;
            seed ^= seed >> 27;
            let bits = seed.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
            bits as f64 / (1u64 << 53) as f64
        };
        Self {
            top: next() * 100.0,
            left: next() * 100.0,
            size: next() * 4.0 + 1.0,
            duration: next() * 20.0 + 10.0,
            delay: next() * 10.0,
            depth: next() + 0.5,
        }
    }

    pub fn drift(&self, scroll_y: f64) -> f64 {
        LinearMap::new((0.0, 1000.0), (0.0, -100.0 * self.depth)).map(scroll_y)
    }
}

pub const PARTICLE_COUNT: usize = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_map_interpolates_and_clamps() {
        assert_eq!(GRID_TILT.map(0.0), 60.0);
        assert_eq!(GRID_TILT.map(500.0), 67.5);
        assert_eq!(GRID_TILT.map(1000.0), 75.0);
        assert_eq!(GRID_TILT.map(5000.0), 75.0);
        assert_eq!(GRID_TILT.map(-10.0), 60.0);

        assert_eq!(SUN_OPACITY.map(250.0), 0.75);
        assert_eq!(SCROLL_HINT_OPACITY.map(400.0), 0.0);
        assert_eq!(GRID_DRIFT.map(500.0), -100.0);
    }

    #[test]
    fn test_linear_map_is_stateless() {
        let a = HERO_BACKDROP_DRIFT.map(300.0);
        HERO_BACKDROP_DRIFT.map(900.0);
        assert_eq!(HERO_BACKDROP_DRIFT.map(300.0), a);
    }

    #[test]
    fn test_degenerate_input_range() {
        let m = LinearMap::new((5.0, 5.0), (1.0, 2.0));
        assert_eq!(m.map(100.0), 1.0);
    }

    #[test]
    fn test_pointer_shift() {
        let viewport = (1000.0, 600.0);
        assert_eq!(pointer_shift(Some((500.0, 300.0)), viewport, 20.0), (0.0, 0.0));
        assert_eq!(pointer_shift(Some((0.0, 600.0)), viewport, 20.0), (-20.0, 20.0));
        assert_eq!(pointer_shift(Some((2000.0, 0.0)), viewport, 10.0), (10.0, -10.0));
        assert_eq!(pointer_shift(Some((10.0, 10.0)), (0.0, 0.0), 10.0), (0.0, 0.0));
        // size unknown during server render
        assert_eq!(
            pointer_shift(Some((0.0, 0.0)), (f64::INFINITY, f64::INFINITY), 10.0),
            (0.0, 0.0)
        );
    }

    #[test]
    fn test_pointer_shift_centred_before_first_move() {
        assert_eq!(pointer_shift(None, (1000.0, 600.0), 24.0), (0.0, 0.0));
        // the origin is a real position once a pointer is known
        assert_eq!(
            pointer_shift(Some((0.0, 0.0)), (1000.0, 600.0), 24.0),
            (-24.0, -24.0)
        );
    }

    #[test]
    fn test_grid_flow_wraps_within_tile() {
        let mut flow = GridFlow::default();
        for i in 0..1000 {
            let offset = flow.tick(16.0, (i * 37) as f64);
            assert!((0.0..GRID_TILE).contains(&offset));
        }
    }

    #[test]
    fn test_grid_flow_faster_while_scrolling() {
        let mut idle = GridFlow::new(1e9, 0.01, 0.5);
        let mut scrolling = idle.clone();
        for i in 0..10 {
            idle.tick(16.0, 0.0);
            scrolling.tick(16.0, i as f64 * 50.0);
        }
        assert!(scrolling.offset() > idle.offset());
        assert!((idle.offset() - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_grid_flow_ignores_bad_ticks() {
        let mut flow = GridFlow::default();
        flow.tick(100.0, 0.0);
        let before = flow.offset();
        assert_eq!(flow.tick(0.0, 500.0), before);
        assert_eq!(flow.tick(-5.0, 500.0), before);
        assert_eq!(flow.tick(f64::NAN, 500.0), before);
    }

    #[test]
    fn test_particles_are_deterministic() {
        for i in 0..PARTICLE_COUNT {
            let p = Particle::from_index(i);
            assert_eq!(p, Particle::from_index(i));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..100.0).contains(&p.left));
            assert!((1.0..5.0).contains(&p.size));
            assert!((10.0..30.0).contains(&p.duration));
            assert!((0.5..1.5).contains(&p.depth));
        }
        assert_ne!(Particle::from_index(0), Particle::from_index(1));
    }

    #[test]
    fn test_particle_drift() {
        let p = Particle::from_index(3);
        assert_eq!(p.drift(0.0), 0.0);
        assert!((p.drift(1000.0) + 100.0 * p.depth).abs() < 1e-9);
    }
}
