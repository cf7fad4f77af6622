#![no_main]
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use tacto::game::core::{Cell, Grid};
use tacto::game::session::Session;
use tacto::game::variant::GameVariant;
use tacto::learning::database::{Database, Insertion};
use tacto::learning::record::FinishedGame;

// Every 9 bytes describe one finished tic-tac-toe board, one cell per byte.
fuzz_target!(|data: &[u8]| {
    let variant = GameVariant::tic_tac_toe();
    let mut database = Database::new(variant.size());
    for chunk in data.chunks_exact(variant.size()) {
        let cells = chunk
            .iter()
            .map(|byte| match byte % 3 {
                0 => Cell::Empty,
                1 => Cell::Learner,
                _ => Cell::Opponent,
            })
            .collect::<Vec<_>>();
        let grid = Grid::try_from(cells.as_slice()).expect("nine cells fit");
        let mut session = Session::from_grid(variant.clone(), grid).expect("sizes match");
        session.finish();
        let record = FinishedGame::new(&session).expect("session is finished");
        let is_draw = record.is_draw();
        let insertion = database.insert(record).expect("sizes match");
        assert_eq!(is_draw, insertion == Insertion::Draw);
    }
    for (a, b) in database.iter().tuple_combinations() {
        assert!(!a.contains(b).unwrap(), "{a} contains {b}");
        assert!(!b.contains(a).unwrap(), "{b} contains {a}");
    }
});
