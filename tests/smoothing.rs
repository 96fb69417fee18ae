use joint_smoother::common::types::{Point2D, Point3D};
use joint_smoother::{
    EntityKind, FilterConfig, FilterError, FilterMode, SkeletonSmoother, SmoothingFilter,
};

fn push_const(filter: &mut SmoothingFilter, v: Point3D, kind: EntityKind, n: usize) -> Point3D {
    let mut y = Point3D::zeros();
    for _ in 0..n {
        y = filter.update_joint(v, kind).unwrap();
    }
    y
}

#[test]
fn construction_validates_parameters() {
    assert!(matches!(
        SmoothingFilter::new(FilterConfig::new(0, 0.7, FilterMode::WeightedMovingAverage)),
        Err(FilterError::Configuration(_))
    ));
    assert!(matches!(
        SmoothingFilter::new(FilterConfig::new(10, 1.5, FilterMode::WeightedMovingAverage)),
        Err(FilterError::Configuration(_))
    ));

    assert!(matches!(
        SmoothingFilter::new(FilterConfig::new(
            4_000_000_000_000_000_000,
            0.7,
            FilterMode::WeightedMovingAverage
        )),
        Err(FilterError::Configuration(_))
    ));

    let filter = SmoothingFilter::new(FilterConfig::new(10, 0.7, FilterMode::WeightedMovingAverage))
        .unwrap();
    assert_eq!(filter.history_length(), 10);
    assert_eq!(filter.strategy_name(), Some("WeightedMovingAverage"));
}

#[test]
fn simple_average_converges_to_constant_input() {
    let mut filter =
        SmoothingFilter::new(FilterConfig::new(4, 0.7, FilterMode::SimpleAverage)).unwrap();
    let v = Point3D::new(1.0, 2.0, 3.0);

    // History holds filtered outputs, so one pass is not enough
    let after_one_pass = push_const(&mut filter, v, EntityKind::Joint, 4);
    assert!((after_one_pass - v).norm() > 1e-3);

    let y = push_const(&mut filter, v, EntityKind::Joint, 500);
    assert!((y - v).norm() < 1e-9, "{:?}", y);
}

#[test]
fn weighted_average_converges_and_holds_steady() {
    let mut filter = SmoothingFilter::new(FilterConfig::default()).unwrap();
    let v = Point3D::new(-0.4, 1.1, 0.75);

    let y = push_const(&mut filter, v, EntityKind::Joint, 1000);
    assert!((y - v).norm() < 1e-9);

    for _ in 0..20 {
        let y = filter.update_joint(v, EntityKind::Joint).unwrap();
        assert!((y - v).norm() < 1e-9);
    }
}

#[test]
fn joint_kinds_use_independent_histories() {
    let mut filter = SmoothingFilter::new(FilterConfig::new(3, 0.7, FilterMode::SimpleAverage))
        .unwrap();
    let a = Point3D::new(1.0, 1.0, 1.0);
    let b = Point3D::new(-5.0, 10.0, 0.0);

    for _ in 0..200 {
        filter.update_joint(a, EntityKind::Joint).unwrap();
        filter.update_joint(b, EntityKind::RelativeJoint).unwrap();
        filter.update_joint(a, EntityKind::Joint).unwrap();
    }

    assert_eq!(filter.history(EntityKind::Joint).cursor(), 400 % 3);
    assert_eq!(filter.history(EntityKind::RelativeJoint).cursor(), 200 % 3);

    let ya = filter.update_joint(a, EntityKind::Joint).unwrap();
    let yb = filter.update_joint(b, EntityKind::RelativeJoint).unwrap();
    assert!((ya - a).norm() < 1e-9);
    assert!((yb - b).norm() < 1e-9);
}

#[test]
fn unimplemented_mode_reports_on_first_update() {
    let mut filter =
        SmoothingFilter::new(FilterConfig::new(10, 0.7, FilterMode::TaylorSeries)).unwrap();
    let err = filter
        .update_joint(Point3D::new(1.0, 0.0, 0.0), EntityKind::Joint)
        .unwrap_err();
    assert!(matches!(err, FilterError::NotImplemented(FilterMode::TaylorSeries)));
}

#[test]
fn blend_vectors_boundaries() {
    let p = Point2D::new(0.5, -1.0);
    let c = Point2D::new(1.5, 3.0);
    assert_eq!(SmoothingFilter::blend_vectors(p, c, 0.0), p);
    assert_eq!(SmoothingFilter::blend_vectors(p, c, 1.0), c);
    assert_eq!(SmoothingFilter::blend_vectors(p, c, 0.5), Point2D::new(1.0, 1.0));
}

#[test]
fn skeleton_tracks_joints_separately() {
    let mut skeleton =
        SkeletonSmoother::new(FilterConfig::new(2, 0.7, FilterMode::SimpleAverage)).unwrap();
    skeleton.track("left_hand").unwrap();
    skeleton.track("right_hand").unwrap();

    let left = skeleton
        .update_joint("left_hand", Point3D::new(2.0, 0.0, 0.0), EntityKind::Joint)
        .unwrap();
    assert_eq!(left, Point3D::new(1.0, 0.0, 0.0));
    assert_eq!(
        skeleton.filter("right_hand").unwrap().history(EntityKind::Joint).cursor(),
        0
    );

    skeleton.reset_all();
    assert_eq!(
        skeleton.filter("left_hand").unwrap().history(EntityKind::Joint).current(),
        Point3D::zeros()
    );

    let names: Vec<&str> = skeleton.joint_names().collect();
    assert_eq!(names, vec!["left_hand", "right_hand"]);

    assert!(skeleton.untrack("left_hand").is_some());
    assert!(!skeleton.is_tracking("left_hand"));
    assert!(matches!(
        skeleton.update_joint("left_hand", Point3D::zeros(), EntityKind::Joint),
        Err(FilterError::UnknownJoint(_))
    ));
}

#[test]
fn skeleton_rejects_invalid_config() {
    assert!(SkeletonSmoother::new(FilterConfig::new(10, 0.0, FilterMode::SimpleAverage)).is_err());
}

#[derive(Debug)]
struct Latest;

impl joint_smoother::CombineStrategy for Latest {
    fn combine(
        &self,
        history: &joint_smoother::history::HistoryBuffer,
        _weights: &joint_smoother::weights::WeightTable,
    ) -> Point3D {
        history.current() * 2.0
    }

    fn name(&self) -> &str {
        "Latest"
    }
}

#[test]
fn custom_strategy_plugs_into_buffer_management() {
    let mut filter = SmoothingFilter::with_strategy(
        FilterConfig::new(3, 0.7, FilterMode::Kalman),
        Box::new(Latest),
    )
    .unwrap();
    let y = filter.update_joint(Point3D::new(1.0, 2.0, 3.0), EntityKind::Joint).unwrap();
    assert_eq!(y, Point3D::new(2.0, 4.0, 6.0));
    assert_eq!(filter.history(EntityKind::Joint).get(0), Some(&y));
    assert_eq!(filter.strategy_name(), Some("Latest"));
}
