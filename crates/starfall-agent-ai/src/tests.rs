#[cfg(test)]
mod tests {
    use glam::DVec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use starfall_core::config::AgentProfile;
    use starfall_core::enums::{AgentState, Maneuver};
    use starfall_core::types::Transform;

    use crate::fsm::{evaluate, select_maneuver, AgentContext, FireDecision};
    use crate::steering;

    const DT: f64 = 1.0 / 60.0;

    /// Agent at the origin facing +Z, target straight ahead at `range`.
    fn make_context(profile: &AgentProfile, range: f64) -> AgentContext<'_> {
        AgentContext {
            profile,
            detected: false,
            hull: Transform::default(),
            mount: Some(Transform::default()),
            target_position: DVec3::new(0.0, 0.0, range),
            rack_reloading: false,
            reload_completed: false,
            now: 10.0,
            dt: DT,
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    // ---- Detection ----

    #[test]
    fn test_idle_beyond_detection_range() {
        let profile = AgentProfile::default();
        let ctx = make_context(&profile, 1500.0);
        let decision = evaluate(&ctx, &mut rng());
        assert!(!decision.detected);
        assert_eq!(decision.state, AgentState::Idle);
        assert!(decision.motion.is_none());
        assert_eq!(decision.fire, FireDecision::Hold);
    }

    #[test]
    fn test_detection_on_entering_range() {
        let profile = AgentProfile::default();
        let ctx = make_context(&profile, 900.0);
        let decision = evaluate(&ctx, &mut rng());
        assert!(decision.detected);
        assert!(decision.newly_detected);
        assert_eq!(decision.maneuver, Maneuver::Approaching);
        assert_eq!(decision.state, AgentState::Approaching);
    }

    #[test]
    fn test_detection_latch_never_returns_to_idle() {
        let profile = AgentProfile::default();
        let mut ctx = make_context(&profile, 5000.0);
        ctx.detected = true;
        let decision = evaluate(&ctx, &mut rng());
        assert!(decision.detected);
        assert!(!decision.newly_detected);
        assert_ne!(decision.state, AgentState::Idle);
        // Beyond engagement distance it holds position
        assert_eq!(decision.maneuver, Maneuver::Holding);
        assert!(decision.motion.is_none());
    }

    // ---- Maneuver selection ----

    #[test]
    fn test_maneuver_toggles_with_latest_distance() {
        let profile = AgentProfile::default();
        let ranges = [350.0, 290.0, 310.0, 300.0, 301.0, 250.0, 800.0];
        let expected = [
            Maneuver::Approaching,
            Maneuver::Circling,
            Maneuver::Approaching,
            Maneuver::Circling,
            Maneuver::Approaching,
            Maneuver::Circling,
            Maneuver::Approaching,
        ];
        let mut rng = rng();
        let mut detected = false;
        for (range, want) in ranges.iter().zip(expected) {
            let mut ctx = make_context(&profile, *range);
            ctx.detected = detected;
            let decision = evaluate(&ctx, &mut rng);
            detected = decision.detected;
            assert_eq!(decision.maneuver, want, "range {range}");
        }
    }

    #[test]
    fn test_select_maneuver_thresholds() {
        let profile = AgentProfile::default();
        assert_eq!(select_maneuver(&profile, 1000.0), Maneuver::Approaching);
        assert_eq!(select_maneuver(&profile, 1000.1), Maneuver::Holding);
        assert_eq!(select_maneuver(&profile, 300.0), Maneuver::Circling);
    }

    // ---- Movement ----

    #[test]
    fn test_approach_full_speed_when_far() {
        let profile = AgentProfile::default();
        let intent = steering::approach(
            &profile,
            &Transform::default(),
            DVec3::new(0.0, 0.0, 800.0),
            800.0,
            DT,
        );
        assert!((intent.velocity.length() - profile.speed).abs() < 1e-9);
        assert!(intent.velocity.z > 0.0);
    }

    #[test]
    fn test_approach_throttles_inside_half_shoot_distance() {
        let profile = AgentProfile::default();
        let intent = steering::approach(
            &profile,
            &Transform::default(),
            DVec3::new(0.0, 0.0, 240.0),
            240.0,
            DT,
        );
        assert!((intent.velocity.length() - profile.speed * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_approach_turn_is_rate_limited() {
        let profile = AgentProfile::default();
        // Target directly to the right: a single tick must not snap onto it.
        let intent = steering::approach(
            &profile,
            &Transform::default(),
            DVec3::new(800.0, 0.0, 0.0),
            800.0,
            DT,
        );
        let forward = intent.rotation * DVec3::Z;
        let turned = forward.angle_between(DVec3::Z).to_degrees();
        assert!(turned > 0.0);
        assert!(turned < 90.0 * profile.rotation_speed * DT * 1.01);
    }

    #[test]
    fn test_circling_velocity_is_bounded() {
        let profile = AgentProfile::default();
        let mut rng = rng();
        let hull = Transform::default();
        for i in 0..200 {
            let intent = steering::circle(
                &profile,
                &hull,
                DVec3::new(0.0, 0.0, 200.0),
                i as f64 * DT,
                DT,
                &mut rng,
            );
            let horizontal = intent.rotation * DVec3::Z * profile.speed;
            let weave = intent.velocity - horizontal;
            assert!(weave.length() <= profile.weave_amplitude + 1e-9);
            assert!(weave.x.abs() < 1e-9 && weave.z.abs() < 1e-9);
            assert!(intent.rotation.is_normalized());
        }
    }

    #[test]
    fn test_break_out_turns_left_of_heading() {
        let rotation = steering::break_out_rotation(Transform::default().rotation);
        let forward = rotation * DVec3::Z;
        let expected = DVec3::new(-1.0, 0.0, 1.0).normalize();
        assert!((forward - expected).length() < 1e-9);
    }

    // ---- Firing ----

    #[test]
    fn test_fires_when_in_cone_and_range() {
        let profile = AgentProfile::default();
        let mut ctx = make_context(&profile, 450.0);
        ctx.detected = true;
        let decision = evaluate(&ctx, &mut rng());
        assert_eq!(decision.state, AgentState::Attacking);
        match decision.fire {
            FireDecision::Fire { origin, direction } => {
                assert!(origin.length() < 1e-9);
                assert!((direction - DVec3::Z).length() < 1e-6);
            }
            other => panic!("expected Fire, got {other:?}"),
        }
    }

    #[test]
    fn test_holds_fire_out_of_range() {
        let profile = AgentProfile::default();
        let mut ctx = make_context(&profile, 600.0);
        ctx.detected = true;
        let decision = evaluate(&ctx, &mut rng());
        assert_eq!(decision.fire, FireDecision::Hold);
        assert_eq!(decision.state, AgentState::Approaching);
    }

    #[test]
    fn test_holds_fire_outside_cone() {
        let profile = AgentProfile::default();
        let mut ctx = make_context(&profile, 400.0);
        ctx.detected = true;
        // Target behind the agent
        ctx.target_position = DVec3::new(0.0, 0.0, -400.0);
        let decision = evaluate(&ctx, &mut rng());
        assert_eq!(decision.fire, FireDecision::Hold);
    }

    #[test]
    fn test_cone_uses_mount_axis_not_hull_axis() {
        let profile = AgentProfile::default();
        let mut ctx = make_context(&profile, 400.0);
        ctx.detected = true;
        // Mount yawed 90 degrees to the right: target dead ahead of the hull
        // is outside the mount's cone.
        ctx.mount = Some(Transform::looking_along(DVec3::ZERO, DVec3::X));
        let decision = evaluate(&ctx, &mut rng());
        assert_eq!(decision.fire, FireDecision::Hold);

        // Target off to the right is inside the mount cone.
        ctx.target_position = DVec3::new(400.0, 0.0, 0.0);
        let decision = evaluate(&ctx, &mut rng());
        assert!(matches!(decision.fire, FireDecision::Fire { .. }));
    }

    #[test]
    fn test_missing_mount_skips_firing() {
        let profile = AgentProfile::default();
        let mut ctx = make_context(&profile, 400.0);
        ctx.detected = true;
        ctx.mount = None;
        let decision = evaluate(&ctx, &mut rng());
        assert_eq!(decision.fire, FireDecision::MountMissing);
        // Movement still runs
        assert!(decision.motion.is_some());
    }

    #[test]
    fn test_reloading_suppresses_fire() {
        let profile = AgentProfile::default();
        let mut ctx = make_context(&profile, 400.0);
        ctx.detected = true;
        ctx.rack_reloading = true;
        let decision = evaluate(&ctx, &mut rng());
        assert_eq!(decision.fire, FireDecision::Hold);
        assert_eq!(decision.state, AgentState::Reloading);
        assert!(decision.break_out.is_none());
    }

    #[test]
    fn test_reload_completion_triggers_break_out_once() {
        let profile = AgentProfile::default();
        let mut ctx = make_context(&profile, 400.0);
        ctx.detected = true;
        ctx.rack_reloading = true;
        ctx.reload_completed = true;
        let decision = evaluate(&ctx, &mut rng());
        assert!(decision.break_out.is_some());
        assert_eq!(decision.fire, FireDecision::Hold);
        assert_ne!(decision.state, AgentState::Reloading);

        // Next tick: rack ready, no break-out, firing resumes.
        ctx.rack_reloading = false;
        ctx.reload_completed = false;
        let decision = evaluate(&ctx, &mut rng());
        assert!(decision.break_out.is_none());
        assert!(matches!(decision.fire, FireDecision::Fire { .. }));
    }

    #[test]
    fn test_same_seed_same_decision() {
        let profile = AgentProfile::default();
        let mut ctx = make_context(&profile, 200.0);
        ctx.detected = true;
        let a = evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(99));
        let b = evaluate(&ctx, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a.motion, b.motion);
    }
}
