mod common;

use common::{start_session, SimBoard};
use proptest::prelude::*;
use study_tile_session::config::{MAX_BLOCKS, NOISE_THRESHOLD, TICK_MS, TOTAL_STEPS};
use study_tile_session::{Note, Phase, Session};

proptest! {
    #[test]
    fn block_count_is_clamped_tap_count(taps in 0usize..60) {
        let mut session = Session::new();
        let mut board = SimBoard::new();

        start_session(&mut session, &mut board, taps);

        let expected = (taps as u8).clamp(1, MAX_BLOCKS);
        prop_assert_eq!(session.blocks_remaining(), expected);
    }

    #[test]
    fn quiet_ticks_leave_running_exactly_at_the_end(blocks in 1usize..4) {
        let mut session = Session::new();
        let mut board = SimBoard::new();
        start_session(&mut session, &mut board, blocks);

        for step in 1..TOTAL_STEPS {
            board.advance(TICK_MS);
            session.tick(&mut board);
            prop_assert_eq!(session.step(), step);
            prop_assert_eq!(session.phase(), Phase::Running);
        }
        board.advance(TICK_MS);
        session.tick(&mut board);
        prop_assert_ne!(session.phase(), Phase::Running);
    }

    #[test]
    fn one_alert_per_excursion(loud in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut session = Session::new();
        let mut board = SimBoard::new();
        start_session(&mut session, &mut board, 1);

        let mut held = false;
        let mut excursions = 0;
        let mut expected_step = 0;
        for &is_loud in &loud {
            board.noise = if is_loud { NOISE_THRESHOLD } else { NOISE_THRESHOLD - 1 };
            board.advance(TICK_MS);
            session.tick(&mut board);

            match (is_loud, held) {
                (true, false) => {
                    excursions += 1;
                    held = true;
                }
                (true, true) => {}
                // The tick that clears a hold also counts down.
                (false, true) => {
                    held = false;
                    expected_step += 1;
                }
                (false, false) => expected_step += 1,
            }

            prop_assert_eq!(session.step(), expected_step);
            let phase = if held { Phase::NoiseHold } else { Phase::Running };
            prop_assert_eq!(session.phase(), phase);
        }
        prop_assert_eq!(board.tones_of(Note::C), excursions);
    }
}
