use cubefield_render::{OverlaySink, Renderer};

use crate::session::BenchSession;

/// Drive the frame loop: sample a timestamp, run one frame, repeat while
/// the predicate holds.
///
/// The session itself never touches a scheduling primitive; hosts decide
/// the cadence. The desktop app calls `on_frame` from its redraw handler
/// instead of using this loop; headless runs and tests use it directly
/// with whatever timestamp source they want.
pub fn drive<R, O, T, C>(
    session: &mut BenchSession,
    renderer: &mut R,
    overlay: &mut O,
    mut now_ms: T,
    mut should_continue: C,
) where
    R: Renderer,
    O: OverlaySink,
    T: FnMut() -> f64,
    C: FnMut(&BenchSession) -> bool,
{
    while should_continue(session) {
        let timestamp = now_ms();
        session.on_frame(timestamp, renderer, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AMBIENT_SPIN;
    use cubefield_common::BenchConfig;
    use cubefield_render::{LogOverlay, NullRenderer};

    #[test]
    fn drives_until_the_predicate_stops_it() {
        let config = BenchConfig {
            cube_count: 4,
            ..BenchConfig::default()
        };
        let mut session = BenchSession::new(config).expect("valid config");
        let mut renderer = NullRenderer::new();
        let mut overlay = LogOverlay;

        let mut t = 0.0;
        drive(
            &mut session,
            &mut renderer,
            &mut overlay,
            || {
                t += 16.0;
                t
            },
            |s| s.frame_count() < 10,
        );

        assert_eq!(session.frame_count(), 10);
        assert_eq!(renderer.frames_rendered(), 10);
        let o = session.group().orientation;
        assert!((o.x - 10.0 * AMBIENT_SPIN).abs() < 1e-6);
    }

    #[test]
    fn zero_iterations_when_the_predicate_starts_false() {
        let config = BenchConfig {
            cube_count: 4,
            ..BenchConfig::default()
        };
        let mut session = BenchSession::new(config).expect("valid config");
        let mut renderer = NullRenderer::new();
        let mut overlay = LogOverlay;

        drive(&mut session, &mut renderer, &mut overlay, || 0.0, |_| false);

        assert_eq!(renderer.frames_rendered(), 0);
    }
}
