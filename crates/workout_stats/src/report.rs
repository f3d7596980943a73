use serde::Serialize;
use std::fmt;

/// Statistics computed once from a [`crate::Training`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Report {
    pub fn new(
        training_type: impl Into<String>,
        duration_h: f64,
        distance_km: f64,
        avg_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration_h,
            distance_km,
            avg_speed_kmh,
            calories_kcal,
        }
    }

    /// Human-readable summary line, every number fixed to three decimals.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type,
            self.duration_h,
            self.distance_km,
            self.avg_speed_kmh,
            self.calories_kcal
        )
    }
}
