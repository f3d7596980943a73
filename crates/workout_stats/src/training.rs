//! Training records and the per-activity distance, speed and calorie formulas.

use tracing::trace;

use crate::WorkoutError;
use crate::activity::ActivityKind;
use crate::report::Report;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Length of one step (running, walking) in meters.
const LEN_STEP_M: f64 = 0.65;
/// Length of one stroke (swimming) in meters.
const LEN_STROKE_M: f64 = 1.38;

mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;
}

mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

mod swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Sensor readings shared by every activity.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl Session {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action,
            duration_h: positive("duration_h", duration_h)?,
            weight_kg: non_negative("weight_kg", weight_kg)?,
        })
    }

    /// Steps or strokes counted by the sensor.
    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(session: Session, height_cm: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            session,
            height_cm: positive("height_cm", height_cm)?,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    session: Session,
    length_pool_m: f64,
    count_pool: u32,
}

impl Swimming {
    pub fn new(
        session: Session,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Result<Self, WorkoutError> {
        let length_pool_m = positive("length_pool_m", length_pool_m)?;
        if count_pool == 0 {
            return Err(WorkoutError::InvalidValue {
                field: "count_pool",
                value: 0.0,
                reason: "must be greater than zero",
            });
        }
        Ok(Self {
            session,
            length_pool_m,
            count_pool,
        })
    }

    /// Builds from raw readings, checking pool length before the lap count.
    pub(crate) fn from_readings(
        session: Session,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Result<Self, WorkoutError> {
        let length_pool_m = positive("length_pool_m", length_pool_m)?;
        Self::new(session, length_pool_m, whole_count("count_pool", count_pool)?)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn length_pool_m(&self) -> f64 {
        self.length_pool_m
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

/// One parsed training session.
///
/// Distance and speed default to the step-based formulas; each variant
/// supplies its own calorie model, and swimming also overrides stroke
/// length and speed.
#[derive(Clone, Debug, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn running(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        let session = Session::new(action, duration_h, weight_kg)?;
        Ok(Training::Running(Running::new(session)))
    }

    pub fn sports_walking(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        let session = Session::new(action, duration_h, weight_kg)?;
        Ok(Training::SportsWalking(SportsWalking::new(session, height_cm)?))
    }

    pub fn swimming(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Result<Self, WorkoutError> {
        let session = Session::new(action, duration_h, weight_kg)?;
        Ok(Training::Swimming(Swimming::new(
            session,
            length_pool_m,
            count_pool,
        )?))
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Training::Running(_) => ActivityKind::Running,
            Training::SportsWalking(_) => ActivityKind::SportsWalking,
            Training::Swimming(_) => ActivityKind::Swimming,
        }
    }

    pub fn session(&self) -> &Session {
        match self {
            Training::Running(r) => r.session(),
            Training::SportsWalking(w) => w.session(),
            Training::Swimming(s) => s.session(),
        }
    }

    fn step_len_m(&self) -> f64 {
        match self {
            Training::Swimming(_) => LEN_STROKE_M,
            Training::Running(_) | Training::SportsWalking(_) => LEN_STEP_M,
        }
    }

    /// Distance covered in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.session().action() as f64 * self.step_len_m() / M_IN_KM
    }

    /// Mean speed in km/h. Swimming derives it from pool laps, not strokes.
    pub fn avg_speed_kmh(&self) -> f64 {
        match self {
            Training::Swimming(s) => {
                s.length_pool_m() * s.count_pool() as f64 / M_IN_KM / s.session().duration_h()
            }
            Training::Running(_) | Training::SportsWalking(_) => {
                self.distance_km() / self.session().duration_h()
            }
        }
    }

    /// Energy spent in kilocalories.
    pub fn calories_kcal(&self) -> f64 {
        let speed = self.avg_speed_kmh();
        let session = self.session();
        let (weight_kg, minutes) = (session.weight_kg(), session.duration_h() * MIN_IN_H);
        match self {
            Training::Running(_) => {
                (running::SPEED_MULTIPLIER * speed - running::SPEED_SHIFT) * weight_kg / M_IN_KM
                    * minutes
            }
            Training::SportsWalking(w) => {
                // speed^2 / height is floor-divided
                let speed_height = (speed.powi(2) / w.height_cm()).floor();
                (walking::WEIGHT_MULTIPLIER * weight_kg
                    + speed_height * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * minutes
            }
            Training::Swimming(_) => {
                (speed + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * weight_kg
            }
        }
    }

    /// Computes every statistic once and freezes them into a [`Report`].
    pub fn to_report(&self) -> Report {
        let report = Report::new(
            self.kind().name(),
            self.session().duration_h(),
            self.distance_km(),
            self.avg_speed_kmh(),
            self.calories_kcal(),
        );
        trace!(
            activity = %self.kind(),
            distance_km = report.distance_km,
            avg_speed_kmh = report.avg_speed_kmh,
            calories_kcal = report.calories_kcal,
            "computed training report"
        );
        report
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidValue {
            field,
            value,
            reason: "must be a finite number greater than zero",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidValue {
            field,
            value,
            reason: "must be a finite, non-negative number",
        })
    }
}

/// Converts a raw positional value into a whole count.
pub(crate) fn whole_count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidValue {
            field,
            value,
            reason: "must be a non-negative whole number",
        })
    }
}
