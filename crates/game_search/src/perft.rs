use crate::adapter::{GameAdapter, Perspective};

/// Pure perft node count.
/// Counts the positions reached at exactly `depth` plies, plus any terminal
/// positions met earlier, from the adapter's current position.
pub fn perft<A: GameAdapter>(adapter: &mut A, perspective: Perspective, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner<A: GameAdapter>(
        adapter: &mut A,
        perspective: Perspective,
        depth: u8,
        layers: &mut [Vec<A::Move>],
    ) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        buf.clear();
        adapter.moves_into(perspective, buf);
        if buf.is_empty() {
            return 1;
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            adapter.apply_move(perspective, mv);
            nodes += inner(adapter, perspective.other(), depth - 1, rest);
            adapter.undo_move(perspective, mv);
        }
        nodes
    }

    let mut layers: Vec<Vec<A::Move>> = (0..depth).map(|_| Vec::with_capacity(16)).collect();
    inner(adapter, perspective, depth, &mut layers[..])
}
