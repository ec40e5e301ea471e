//! Head-to-head race between the standard and the resonance gait.
//!
//! Each lane moves at its constant measured speed; at frame `k` of `n` the
//! lane has covered `speed · (k / n) · duration` metres.

use crate::{GridRecord, ResultsError, ResultsResult, same_axis_value};

pub const RACE_LEG_LENGTH: f64 = 0.10;
pub const STANDARD_FREQUENCY: f64 = 1.0;
pub const RESONANCE_FREQUENCY: f64 = 2.25;

#[derive(Debug, Clone, PartialEq)]
pub struct RaceLane {
    pub label: String,
    /// `#RRGGBB`.
    pub color: &'static str,
    /// m/s.
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub leg_length:    f64,
    pub lanes:         [RaceLane; 2],
    /// Seconds of race time.
    pub duration_secs: f64,
    pub fps:           u32,
}

impl Race {
    /// Standard (1.0 Hz) against resonance (2.25 Hz) for the 0.10 m robot.
    pub fn from_records(records: &[GridRecord]) -> ResultsResult<Self> {
        Self::for_leg_length(records, RACE_LEG_LENGTH)
    }

    /// As [`from_records`][Self::from_records] for any leg length.  The first
    /// matching row wins if the grid holds several.
    pub fn for_leg_length(records: &[GridRecord], leg_length: f64) -> ResultsResult<Self> {
        let speed_at = |frequency: f64| {
            records
                .iter()
                .find(|r| same_axis_value(r.leg_length, leg_length) && same_axis_value(r.frequency, frequency))
                .map(|r| r.speed)
                .ok_or(ResultsError::MissingRow { leg_length, frequency })
        };

        let standard = speed_at(STANDARD_FREQUENCY)?;
        let resonance = speed_at(RESONANCE_FREQUENCY)?;

        Ok(Self {
            leg_length,
            lanes: [
                RaceLane { label: "Standard Control (1.0Hz)".into(), color: "#FF4444", speed: standard },
                RaceLane { label: "Resonance Discovery (2.25Hz)".into(), color: "#44FF44", speed: resonance },
            ],
            duration_secs: 10.0,
            fps: 30,
        })
    }

    /// Total animation frames.
    pub fn frames(&self) -> usize {
        (self.duration_secs * f64::from(self.fps)) as usize
    }

    /// Race time at `frame`.
    pub fn time_at(&self, frame: usize) -> f64 {
        let n = self.frames();
        if n == 0 {
            return 0.0;
        }
        frame as f64 / n as f64 * self.duration_secs
    }

    /// Distance covered by each lane at `frame`.
    pub fn distances_at(&self, frame: usize) -> [f64; 2] {
        let t = self.time_at(frame);
        [self.lanes[0].speed * t, self.lanes[1].speed * t]
    }

    /// Axis limit: the winner's final distance plus 20 %.
    pub fn x_limit(&self) -> f64 {
        let fastest = self.lanes[0].speed.max(self.lanes[1].speed);
        fastest * self.duration_secs * 1.2
    }

    /// One-line summary printed before the race starts.
    pub fn headline(&self) -> String {
        format!(
            "🏎️  Racing: Standard ({:.2} m/s) vs Resonance ({:.2} m/s)",
            self.lanes[0].speed, self.lanes[1].speed
        )
    }

    /// Terminal rendering of one frame: one bar per lane, `width` cells for
    /// the full x-axis.
    pub fn text_frame(&self, frame: usize, width: usize) -> String {
        let limit = self.x_limit();
        let label_width = self.lanes.iter().map(|l| l.label.chars().count()).max().unwrap_or(0);
        let mut out = String::new();
        for (lane, dist) in self.lanes.iter().zip(self.distances_at(frame)) {
            let filled = if limit > 0.0 {
                ((dist / limit) * width as f64).round().clamp(0.0, width as f64) as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:<label_width$} |{}{}| {:.2}m\n",
                lane.label,
                "█".repeat(filled),
                " ".repeat(width - filled),
                dist,
            ));
        }
        out
    }
}
