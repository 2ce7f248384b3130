//! Scroll-driven "floating garden" motion for staircase gallery cards.
//!
//! Each card gets a set of keyframe tracks over its scroll progress
//! (0.0 when the card's top enters the viewport bottom, 1.0 when its
//! bottom leaves the viewport top). Pages emit the tracks as data
//! attributes; the browser script samples them with [`Track::sample`]'s
//! piecewise-linear rule and smooths displacement with a spring.

/// Viewport width below which displacement is damped.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Displacement multiplier applied on narrow viewports.
pub const MOBILE_MULTIPLIER: f64 = 0.4;

/// Spring parameters used to smooth displacement tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub rest_delta: f64,
}

pub const CARD_SPRING: SpringConfig = SpringConfig {
    stiffness: 100.0,
    damping: 30.0,
    rest_delta: 0.001,
};

/// A piecewise-linear keyframe track.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    stops: Vec<f64>,
    values: Vec<f64>,
}

impl Track {
    /// Build a track. `stops` must be ascending and the same length as
    /// `values`; extra entries on either side are ignored.
    pub fn new(stops: &[f64], values: &[f64]) -> Self {
        let len = stops.len().min(values.len());
        Self {
            stops: stops[..len].to_vec(),
            values: values[..len].to_vec(),
        }
    }

    /// Sample the track, clamping outside the first/last stop.
    pub fn sample(&self, progress: f64) -> f64 {
        let (Some(&first), Some(&last)) = (self.stops.first(), self.stops.last()) else {
            return 0.0;
        };
        if progress <= first {
            return self.values[0];
        }
        if progress >= last {
            return self.values[self.values.len() - 1];
        }
        for i in 1..self.stops.len() {
            let (s0, s1) = (self.stops[i - 1], self.stops[i]);
            if progress <= s1 {
                let (v0, v1) = (self.values[i - 1], self.values[i]);
                let span = s1 - s0;
                if span <= f64::EPSILON {
                    return v1;
                }
                return v0 + (v1 - v0) * (progress - s0) / span;
            }
        }
        self.values[self.values.len() - 1]
    }

    /// Encode as `stops|values`, e.g. `0,0.5,1|80,0,-80`.
    pub fn encode(&self) -> String {
        let join = |xs: &[f64]| {
            xs.iter()
                .map(|x| format_number(*x))
                .collect::<Vec<_>>()
                .join(",")
        };
        format!("{}|{}", join(&self.stops), join(&self.values))
    }
}

fn format_number(x: f64) -> String {
    let rounded = (x * 1000.0).round() / 1000.0;
    // Avoid "-0" in encoded output.
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

/// Which side of the staircase a card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Sign of horizontal drift and rotation at the start of the scroll.
    fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// All keyframe tracks for one staircase card.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingMotion {
    pub side: Side,
    /// Vertical drift (px). Scaled on mobile.
    pub y: Track,
    /// Horizontal drift (px). Scaled on mobile.
    pub x: Track,
    /// Rotation (deg). Scaled on mobile.
    pub rotate: Track,
    pub opacity: Track,
    pub scale: Track,
    /// Parallax of the image inside its frame (px). Scaled on mobile.
    pub image_y: Track,
}

const THREE_STOPS: [f64; 3] = [0.0, 0.5, 1.0];

impl FloatingMotion {
    /// Motion for the card at `index` with displacement multiplied by
    /// `multiplier` (1.0 on desktop, [`MOBILE_MULTIPLIER`] on mobile).
    pub fn for_card(index: usize, multiplier: f64) -> Self {
        let side = Side::for_index(index);
        let s = side.sign();
        let m = multiplier;
        Self {
            side,
            y: Track::new(&THREE_STOPS, &[80.0 * m, 0.0, -80.0 * m]),
            x: Track::new(&THREE_STOPS, &[20.0 * s * m, 0.0, -20.0 * s * m]),
            rotate: Track::new(&THREE_STOPS, &[3.0 * s * m, 0.0, -3.0 * s * m]),
            opacity: Track::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.3]),
            scale: Track::new(&[0.0, 0.3, 0.7, 1.0], &[0.9, 1.0, 1.0, 0.9]),
            image_y: Track::new(&[0.0, 1.0], &[30.0 * m, -30.0 * m]),
        }
    }

    /// Multiplier for a viewport of the given width.
    pub fn multiplier_for_width(width_px: u32) -> f64 {
        if width_px < MOBILE_BREAKPOINT_PX {
            MOBILE_MULTIPLIER
        } else {
            1.0
        }
    }
}
