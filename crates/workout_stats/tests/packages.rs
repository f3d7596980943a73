use std::io::Write;

use workout_stats::{ActivityKind, WorkoutError, build_record, load_packages, sample_packages};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn swimming_package() {
    let t = build_record("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming");
    assert!(approx(t.distance_km(), 0.9936));
    assert!(approx(t.avg_speed_kmh(), 1.0));
    assert!(approx(t.calories_kcal(), 336.0));
    assert_eq!(
        t.to_report().render(),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn running_package() {
    let t = build_record("RUN", &[15000.0, 1.0, 75.0]).expect("running");
    assert!(approx(t.distance_km(), 9.75));
    assert!(approx(t.avg_speed_kmh(), 9.75));
    // (18 * 9.75 - 20) * 75 / 1000 * 60
    assert!(approx(t.calories_kcal(), 699.75));
    assert_eq!(
        t.to_report().render(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
}

#[test]
fn walking_package() {
    let t = build_record("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walking");
    assert!(approx(t.distance_km(), 5.85));
    assert!(approx(t.avg_speed_kmh(), 5.85));
    assert!(approx(t.calories_kcal(), 157.5));
    assert_eq!(
        t.to_report().render(),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
    );
}

#[test]
fn rejects_unknown_code_and_bad_arity() {
    assert!(matches!(
        build_record("XXX", &[1.0, 1.0, 1.0]),
        Err(WorkoutError::UnknownActivity(_))
    ));
    assert!(matches!(
        build_record("RUN", &[1.0, 1.0]),
        Err(WorkoutError::ArityMismatch {
            activity: ActivityKind::Running,
            ..
        })
    ));
}

#[test]
fn distance_and_speed_never_negative() {
    for action in [0.0, 1.0, 500.0, 123456.0] {
        for duration in [0.01, 0.5, 1.0, 3.25] {
            for t in [
                build_record("RUN", &[action, duration, 70.0]).unwrap(),
                build_record("WLK", &[action, duration, 70.0, 175.0]).unwrap(),
                build_record("SWM", &[action, duration, 70.0, 50.0, 10.0]).unwrap(),
            ] {
                assert!(t.distance_km() >= 0.0);
                assert!(t.avg_speed_kmh() >= 0.0);
            }
        }
    }
}

#[test]
fn loads_packages_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    let json = serde_json::to_string(&sample_packages()).expect("serialize");
    file.write_all(json.as_bytes()).expect("write");

    let packages = load_packages(file.path()).expect("load");
    assert_eq!(packages, sample_packages());
}

#[test]
fn load_packages_reports_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(b"[{\"workout_type\": \"RUN\"}]").expect("write");
    assert!(matches!(
        load_packages(file.path()),
        Err(WorkoutError::Json(_))
    ));
    assert!(matches!(
        load_packages("/nonexistent/packages.json"),
        Err(WorkoutError::Io(_))
    ));
}
