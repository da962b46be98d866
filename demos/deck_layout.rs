//! Lays out deck boards over an L-shaped terrace and a sine-edged planter.
//!
//! Usage:
//! ```text
//! cargo run --example deck_layout
//! RUST_LOG=archgeo=trace cargo run --example deck_layout
//! ```

use archgeo::geometry::{SampledCurve, SineWave};
use archgeo::math::bounds::bounding_size;
use archgeo::math::Point2;
use archgeo::operations::{Anchor, Direction, SegmentsCrossing};
use archgeo::units::meters;
use tracing::info;

fn main() -> archgeo::Result<()> {
    // Default: WARN for everything, INFO for archgeo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=archgeo=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("deck_layout=info".parse().unwrap_or_default())
        .add_directive("archgeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let terrace = vec![
        Point2::new(0.0, 0.0),
        Point2::new(meters(6.0), 0.0),
        Point2::new(meters(6.0), meters(2.5)),
        Point2::new(meters(3.0), meters(2.5)),
        Point2::new(meters(3.0), meters(4.0)),
        Point2::new(0.0, meters(4.0)),
    ];
    let size = bounding_size(&terrace, Some(28.0))?;
    info!(?size, "terrace bounds");

    // Vertical boards never cross the L's notch twice.
    let boards = SegmentsCrossing::new(terrace, 145.0, Direction::Vertical, Anchor::Left)
        .execute_in_place()?;
    info!(count = boards.len(), "boards placed");
    for board in boards.iter().take(3) {
        info!(
            x = board.start().x,
            length = board.length(),
            "board"
        );
    }

    // A planter whose front edge follows a gentle wave.
    let mut planter = SineWave::new(meters(2.0), 60.0)
        .with_period(3.0)
        .with_resolution(50.0)
        .with_y_move(400.0)
        .sample()?;
    planter.push(Point2::new(meters(2.0), 0.0));
    planter.push(Point2::new(0.0, 0.0));
    let slats = SegmentsCrossing::new(planter, 100.0, Direction::Horizontal, Anchor::Fwd)
        .execute_in_place()?;
    info!(count = slats.len(), "planter slats placed");

    Ok(())
}
