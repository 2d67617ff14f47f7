#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::ControlCommand;
    use crate::enums::{GamePhase, SpawnEdge};
    use crate::events::GameEvent;
    use crate::input::InputState;
    use crate::state::FrameSnapshot;
    use crate::types::{wrap_angle, Aabb, Body, SimTime};

    // ---- Collision primitive ----

    #[test]
    fn test_overlap_is_symmetric() {
        let pairs = vec![
            (Aabb::new(0.0, 0.0, 10.0, 10.0), Aabb::new(5.0, 5.0, 10.0, 10.0)),
            (Aabb::new(0.0, 0.0, 10.0, 10.0), Aabb::new(10.0, 0.0, 10.0, 10.0)),
            (Aabb::new(0.0, 0.0, 10.0, 10.0), Aabb::new(50.0, 50.0, 3.0, 3.0)),
            (Aabb::new(-5.0, -5.0, 20.0, 20.0), Aabb::new(0.0, 0.0, 1.0, 1.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "asymmetric for {a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_edge_touching_boxes_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        let corner = Aabb::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_offset_boxes_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_zero_extent_box_overlaps_nothing() {
        // Strict inequalities: a degenerate box has no interior.
        let point = Aabb::new(5.0, 5.0, 0.0, 0.0);
        let around = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!point.overlaps(&around));
        assert!(!around.overlaps(&point));
    }

    // ---- Body ----

    #[test]
    fn test_body_collider_matches_position() {
        let body = Body::new(Vec2::new(100.0, 200.0), Vec2::new(15.0, 15.0));
        let aabb = body.aabb();
        assert_eq!(aabb.x, 100.0);
        assert_eq!(aabb.y, 200.0);
        assert_eq!(aabb.w, 15.0);
        assert_eq!(aabb.h, 15.0);
    }

    #[test]
    fn test_body_center() {
        let body = Body::new(Vec2::new(10.0, 20.0), Vec2::new(15.0, 15.0));
        assert_eq!(body.center(), Vec2::new(17.5, 27.5));
    }

    // ---- Angle wrapping ----

    #[test]
    fn test_wrap_angle_into_turn() {
        use std::f32::consts::TAU;

        assert!((wrap_angle(0.0) - 0.0).abs() < 1e-6);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-6);
        assert!((wrap_angle(-0.04) - (TAU - 0.04)).abs() < 1e-6);
        assert!((wrap_angle(3.0 * TAU + 1.0) - 1.0).abs() < 1e-5);

        let wrapped = wrap_angle(-10.0 * TAU - 0.25);
        assert!(wrapped >= 0.0 && wrapped < TAU);
    }

    // ---- SimTime ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Active, GamePhase::Paused, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_spawn_edge_serde() {
        for v in [SpawnEdge::Left, SpawnEdge::Right] {
            let json = serde_json::to_string(&v).unwrap();
            let back: SpawnEdge = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify ControlCommand round-trips through serde (tagged union).
    #[test]
    fn test_control_command_serde() {
        let commands = vec![
            ControlCommand::Pause,
            ControlCommand::Resume,
            ControlCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: ControlCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since ControlCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired,
            GameEvent::ZombieHit { id: 3, hp_left: 75 },
            GameEvent::ZombieSlain { id: 3 },
            GameEvent::PlayerHurt { health_left: 42 },
            GameEvent::GameOver { ticks_survived: 5400 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_input_state_serde() {
        let input = InputState {
            turn_left: true,
            fire: true,
            ..InputState::idle()
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: InputState = serde_json::from_str(&json).unwrap();
        assert_eq!(input, back);
    }

    /// Verify FrameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }
}
