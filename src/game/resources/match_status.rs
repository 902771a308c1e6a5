//! Match outcome tracking
//!
//! Starts as `InProgress` and transitions to a terminal state when the
//! rules engine reports one. Every terminal state is absorbing: input is
//! ignored and no board, selection, or turn mutation happens afterwards.

use crate::game::components::PieceColor;
use crate::game::resources::engine::TerminalStatus;
use bevy::prelude::*;

/// Resource tracking whether and how the match ended
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub enum MatchStatus {
    #[default]
    InProgress,
    Checkmate {
        winner: PieceColor,
    },
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    FiftyMoveRule,
}

impl MatchStatus {
    /// Map the engine's flags to an outcome, `mover` being the side that
    /// just completed its move
    ///
    /// Checkmate outranks the draw conditions; among draws the order is
    /// immaterial since each ends the match the same way.
    pub fn from_terminal(verdict: &TerminalStatus, mover: PieceColor) -> Self {
        if verdict.checkmate {
            MatchStatus::Checkmate { winner: mover }
        } else if verdict.stalemate {
            MatchStatus::Stalemate
        } else if verdict.threefold_repetition {
            MatchStatus::ThreefoldRepetition
        } else if verdict.insufficient_material {
            MatchStatus::InsufficientMaterial
        } else if verdict.fifty_moves {
            MatchStatus::FiftyMoveRule
        } else {
            MatchStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }

    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            MatchStatus::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            MatchStatus::Stalemate
                | MatchStatus::ThreefoldRepetition
                | MatchStatus::InsufficientMaterial
                | MatchStatus::FiftyMoveRule
        )
    }

    /// Human-readable result for the HUD
    pub fn message(&self) -> String {
        match self {
            MatchStatus::InProgress => "Game in progress".to_owned(),
            MatchStatus::Checkmate { winner: PieceColor::White } => {
                "White wins by checkmate!".to_owned()
            }
            MatchStatus::Checkmate { winner: PieceColor::Black } => {
                "Black wins by checkmate!".to_owned()
            }
            MatchStatus::Stalemate => "Draw by stalemate".to_owned(),
            MatchStatus::ThreefoldRepetition => "Draw by threefold repetition".to_owned(),
            MatchStatus::InsufficientMaterial => "Draw by insufficient material".to_owned(),
            MatchStatus::FiftyMoveRule => "Draw by the fifty-move rule".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_progress() {
        let status = MatchStatus::default();
        assert_eq!(status, MatchStatus::InProgress);
        assert!(!status.is_over());
        assert!(!status.is_draw());
        assert_eq!(status.winner(), None);
    }

    #[test]
    fn test_checkmate_credits_the_mover() {
        let verdict = TerminalStatus {
            check: true,
            checkmate: true,
            ..Default::default()
        };
        let status = MatchStatus::from_terminal(&verdict, PieceColor::Black);
        assert_eq!(
            status,
            MatchStatus::Checkmate {
                winner: PieceColor::Black,
            }
        );
        assert!(status.is_over());
        assert_eq!(status.winner(), Some(PieceColor::Black));
        assert_eq!(status.message(), "Black wins by checkmate!");
    }

    #[test]
    fn test_checkmate_outranks_draw_flags() {
        let verdict = TerminalStatus {
            checkmate: true,
            insufficient_material: true,
            ..Default::default()
        };
        let status = MatchStatus::from_terminal(&verdict, PieceColor::White);
        assert_eq!(
            status,
            MatchStatus::Checkmate {
                winner: PieceColor::White,
            }
        );
    }

    #[test]
    fn test_check_alone_does_not_end_the_match() {
        let verdict = TerminalStatus {
            check: true,
            ..Default::default()
        };
        let status = MatchStatus::from_terminal(&verdict, PieceColor::White);
        assert_eq!(status, MatchStatus::InProgress);
    }

    #[test]
    fn test_draw_conditions_have_no_winner() {
        for verdict in [
            TerminalStatus {
                stalemate: true,
                ..Default::default()
            },
            TerminalStatus {
                threefold_repetition: true,
                ..Default::default()
            },
            TerminalStatus {
                insufficient_material: true,
                ..Default::default()
            },
            TerminalStatus {
                fifty_moves: true,
                ..Default::default()
            },
        ] {
            let status = MatchStatus::from_terminal(&verdict, PieceColor::White);
            assert!(status.is_over());
            assert!(status.is_draw());
            assert_eq!(status.winner(), None);
        }
    }
}
