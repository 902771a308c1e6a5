//! In-memory record of completed moves
//!
//! Feeds the HUD's move counter and gives tests a completed-move trail.
//! Nothing here is persisted.

use crate::game::components::{PieceColor, PieceKind};
use crate::game::notation::Square;
use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: PieceColor,
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub capture: bool,
    pub check: bool,
}

#[derive(Resource, Debug, Default)]
pub struct MoveLog {
    moves: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn record(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_accumulate_in_order() {
        let mut log = MoveLog::default();
        assert!(log.is_empty());

        let record = MoveRecord {
            color: PieceColor::White,
            kind: PieceKind::Pawn,
            from: Square::new(6, 4),
            to: Square::new(4, 4),
            capture: false,
            check: false,
        };
        log.record(record);

        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some(&record));
    }
}
