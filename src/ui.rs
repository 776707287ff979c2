//! Overlay and HUD text
//!
//! The DOM is an external collaborator; this module only decides what it says.

use crate::sim::{GamePhase, World};

/// Full-screen message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub title: String,
    pub body: String,
}

impl Overlay {
    pub fn paused() -> Self {
        Self {
            title: "PAUSED".to_string(),
            body: "Press P to Resume".to_string(),
        }
    }

    pub fn info() -> Self {
        Self {
            title: "HOW TO PLAY".to_string(),
            body: "Move: Arrow Keys\nShoot: Mouse / Space\nPower-ups drop randomly\nPress R to Restart"
                .to_string(),
        }
    }

    pub fn game_over(score: u64, high_scores: &[u64]) -> Self {
        Self {
            title: "GAME OVER".to_string(),
            body: format!(
                "Your Score: {}\n\nHIGH SCORES\n{}\n\nPress R to Restart",
                score,
                format_scores(high_scores)
            ),
        }
    }

    /// Overlay shown on entering a toggle phase (PAUSED/INFO)
    pub fn for_phase(phase: GamePhase) -> Option<Self> {
        match phase {
            GamePhase::Paused => Some(Self::paused()),
            GamePhase::Info => Some(Self::info()),
            GamePhase::Playing | GamePhase::GameOver => None,
        }
    }
}

/// "1. 500\n2. 300", or a placeholder when empty
pub fn format_scores(scores: &[u64]) -> String {
    if scores.is_empty() {
        return "No scores yet".to_string();
    }
    scores
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heads-up display values
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub wave: u32,
    pub score: u64,
    /// 0.0 - 1.0
    pub hp_fraction: f32,
}

impl Hud {
    pub fn from_world(world: &World) -> Self {
        Self {
            wave: world.wave,
            score: world.score,
            hp_fraction: world.player.hp_fraction(),
        }
    }

    /// CSS width for the HP bar fill
    pub fn hp_bar_width(&self) -> String {
        format!("{}%", self.hp_fraction * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scores_empty() {
        assert_eq!(format_scores(&[]), "No scores yet");
    }

    #[test]
    fn test_format_scores_ranked() {
        assert_eq!(format_scores(&[900, 300, 100]), "1. 900\n2. 300\n3. 100");
    }

    #[test]
    fn test_game_over_body() {
        let overlay = Overlay::game_over(300, &[900, 300]);
        assert_eq!(overlay.title, "GAME OVER");
        assert_eq!(
            overlay.body,
            "Your Score: 300\n\nHIGH SCORES\n1. 900\n2. 300\n\nPress R to Restart"
        );
    }

    #[test]
    fn test_game_over_body_without_scores() {
        let overlay = Overlay::game_over(0, &[]);
        assert_eq!(
            overlay.body,
            "Your Score: 0\n\nHIGH SCORES\nNo scores yet\n\nPress R to Restart"
        );
    }

    #[test]
    fn test_phase_overlays() {
        assert_eq!(Overlay::for_phase(GamePhase::Paused), Some(Overlay::paused()));
        assert_eq!(Overlay::for_phase(GamePhase::Info).unwrap().title, "HOW TO PLAY");
        assert_eq!(Overlay::for_phase(GamePhase::Playing), None);
    }

    #[test]
    fn test_hud_from_world() {
        let mut world = World::new(3);
        world.player.hp = 40.0;
        world.score = 1200;
        let hud = Hud::from_world(&world);
        assert_eq!(hud.wave, 1);
        assert_eq!(hud.score, 1200);
        assert_eq!(hud.hp_bar_width(), "40%");
    }
}
