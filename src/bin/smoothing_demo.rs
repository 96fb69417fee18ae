use anyhow::{Context, Result};
use joint_smoother::common::types::{Point2D, Point3D};
use joint_smoother::{config, EntityKind, FilterConfig, SkeletonSmoother, SmoothingFilter};
use log::{info, warn};
use std::path::PathBuf;

const FRAMES: usize = 60;
const FRAME_RATE: f64 = 30.0;

/// Hand sweeping in front of the body with deterministic jitter
fn raw_hand(frame: usize) -> Point3D {
    let t = frame as f64 / FRAME_RATE;
    let jitter = |seed: f64| 0.02 * (t * 97.0 + seed).sin() * (t * 53.0 + 2.0 * seed).cos();
    Point3D::new(
        0.3 * (t * 2.0).sin() + jitter(0.0),
        1.2 + 0.1 * t.cos() + jitter(1.0),
        0.5 + jitter(2.0),
    )
}

fn shoulder(_frame: usize) -> Point3D {
    Point3D::new(0.2, 1.4, 0.5)
}

fn main() -> Result<()> {
    env_logger::init();

    let configuration_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::FILE_PATH));

    let configuration = match config::read(&configuration_path) {
        Ok(configuration) => configuration,
        Err(err) => {
            warn!(
                "Failed to load configuration {:?}: {}. Using defaults.",
                configuration_path, err
            );
            FilterConfig::default()
        }
    };
    info!("Using configuration: {:?}", configuration);

    let mut skeleton = SkeletonSmoother::new(configuration)?;
    skeleton.track("right_hand")?;

    let mut direction = Point2D::zeros();

    for frame in 0..FRAMES {
        let hand = raw_hand(frame);
        let relative = hand - shoulder(frame);

        let smoothed = skeleton
            .update_joint("right_hand", hand, EntityKind::Joint)
            .with_context(|| format!("smoothing hand at frame {}", frame))?;
        let smoothed_relative = skeleton
            .update_joint("right_hand", relative, EntityKind::RelativeJoint)
            .with_context(|| format!("smoothing relative hand at frame {}", frame))?;

        direction = SmoothingFilter::blend_vectors(
            direction,
            Point2D::new(smoothed_relative.x, smoothed_relative.y),
            0.5,
        );

        info!(
            "frame {:2}: raw=({:.3}, {:.3}, {:.3}) smoothed=({:.3}, {:.3}, {:.3}) direction=({:.3}, {:.3})",
            frame, hand.x, hand.y, hand.z, smoothed.x, smoothed.y, smoothed.z, direction.x, direction.y
        );
    }

    if let Some(recorder) = skeleton.filter("right_hand").and_then(|f| f.recorder()) {
        for kind in [EntityKind::Joint, EntityKind::RelativeJoint] {
            if let Some(correction) = recorder.mean_correction(kind) {
                info!("{:?}: mean correction {:.4} over {} samples", kind, correction, recorder.len());
            }
        }
    }

    skeleton.untrack("right_hand");
    Ok(())
}
