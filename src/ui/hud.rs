//! In-game status panel
//!
//! Small egui overlay with the turn indicator, the match result once the
//! game ends, and the move counter.

use crate::core::GameSettings;
use crate::game::components::PieceColor;
use crate::game::resources::{CurrentTurn, MatchStatus, MoveLog};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

fn match_hud(
    mut contexts: EguiContexts,
    turn: Res<CurrentTurn>,
    status: Res<MatchStatus>,
    log: Res<MoveLog>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("match_status")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .show(ctx, |ui| {
            if status.is_over() {
                ui.label(egui::RichText::new(status.message()).size(16.0).strong());
            } else {
                let to_move = match turn.color {
                    PieceColor::White => "White to move",
                    PieceColor::Black => "Black to move",
                };
                ui.label(egui::RichText::new(to_move).size(16.0).strong());
            }
            ui.label(format!("Move {}", turn.move_number));
            ui.label(format!("{} half-moves played", log.len()));
        });
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            match_hud.run_if(|settings: Res<GameSettings>| settings.show_hud),
        );
    }
}
