//! Property-based tests for the playback queue
//!
//! Uses proptest to verify the queue's structural invariants across many
//! random operation sequences: the cursor always indexes a present item and
//! the length always accounts for net insertions.


use aria_playlist::Playlist;
use proptest::prelude::*;
use std::sync::Arc;
use test_helpers::*;

#[derive(Debug, Clone)]
enum Op {
    Insert { count: usize, at: usize },
    Remove(usize),
    Move { from: usize, to: usize },
    SetCurrent(usize),
    Advance,
    GoBack,
    Clear,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..4, 0usize..100).prop_map(|(count, at)| Op::Insert { count, at }),
        (0usize..100).prop_map(Op::Remove),
        (0usize..100, 0usize..100).prop_map(|(from, to)| Op::Move { from, to }),
        (0usize..100).prop_map(Op::SetCurrent),
        Just(Op::Advance),
        Just(Op::GoBack),
        Just(Op::Clear),
    ]
}

async fn apply(playlist: &Playlist, op: Op, expected_len: &mut usize) {
    match op {
        Op::Insert { count, at } => {
            let items = (0..count).map(|i| media(&format!("track-{i}"))).collect();
            playlist.insert(items, at).await;
            *expected_len += count;
        }
        Op::Remove(index) => {
            if *expected_len > 0 {
                let id = playlist.items()[index % *expected_len].id.clone();
                playlist.remove(&id).await.unwrap();
                *expected_len -= 1;
            }
        }
        Op::Move { from, to } => {
            if *expected_len > 0 {
                let id = playlist.items()[from % *expected_len].id.clone();
                playlist.move_to(&id, to % *expected_len).await.unwrap();
            }
        }
        Op::SetCurrent(index) => {
            if *expected_len > 0 {
                let id = playlist.items()[index % *expected_len].id.clone();
                playlist.set_current(&id).await.unwrap();
            }
        }
        Op::Advance => {
            playlist.advance().await;
        }
        Op::GoBack => {
            playlist.go_back().await;
        }
        Op::Clear => {
            playlist.clear().await;
            *expected_len = 0;
        }
    }
}

proptest! {
    /// Property: length accounts for net insertions and the cursor, when
    /// set, always points at a present item
    #[test]
    fn cursor_always_indexes_a_present_item(ops in prop::collection::vec(arbitrary_op(), 1..40)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        runtime.block_on(async {
            let playlist = Playlist::new(Arc::new(MemoryStore::new()));
            let mut expected_len = 0usize;

            for op in ops {
                apply(&playlist, op, &mut expected_len).await;

                let snapshot = playlist.snapshot();
                prop_assert_eq!(snapshot.len(), expected_len);
                if snapshot.current.is_some() {
                    prop_assert!(snapshot.current_index().is_some());
                }
            }
            Ok(())
        })?;
    }

    /// Property: once an item is current, it stays current through any
    /// sequence of mutations that does not remove it or move the cursor
    #[test]
    fn cursor_identity_survives_reordering(
        titles in prop::collection::vec("[a-z]{1,8}", 2..20),
        moves in prop::collection::vec((0usize..100, 0usize..100), 1..20),
        chosen in 0usize..100,
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        runtime.block_on(async {
            let playlist = Playlist::new(Arc::new(MemoryStore::new()));
            playlist.add(titles.iter().map(|t| media(t)).collect()).await;

            let len = playlist.len();
            let chosen_id = playlist.items()[chosen % len].id.clone();
            playlist.set_current(&chosen_id).await.unwrap();

            for (from, to) in moves {
                let id = playlist.items()[from % len].id.clone();
                playlist.move_to(&id, to % len).await.unwrap();
            }

            prop_assert_eq!(playlist.current().unwrap().id, chosen_id);
            Ok(())
        })?;
    }
}
