use std::time::Duration;

use dioxus::prelude::*;
use rand::Rng;
use services::Command;

use crate::context::{AppContext, RoomSignals};

const CONFETTI_LIFETIME: Duration = Duration::from_secs(2);
const PIECES_PER_CORNER: usize = 40;
const HUES: [u16; 5] = [12, 48, 160, 205, 290];

/// One confetti particle, launched from a lower corner of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub id: usize,
    pub from_left: bool,
    pub drift_x: f32,
    pub rise_y: f32,
    pub hue: u16,
    pub delay_ms: u32,
}

impl ConfettiPiece {
    #[must_use]
    pub fn style(&self) -> String {
        let anchor = if self.from_left { "left: 0" } else { "right: 0" };
        format!(
            "{anchor}; --dx: {:.0}px; --dy: {:.0}px; --hue: {}; animation-delay: {}ms;",
            self.drift_x, self.rise_y, self.hue, self.delay_ms
        )
    }
}

/// Scatter `per_corner` pieces from each lower corner, angled inward.
pub fn burst<R: Rng>(per_corner: usize, rng: &mut R) -> Vec<ConfettiPiece> {
    (0..per_corner * 2)
        .map(|id| {
            let from_left = id % 2 == 0;
            let spread = rng.random_range(120.0..520.0_f32);
            ConfettiPiece {
                id,
                from_left,
                drift_x: if from_left { spread } else { -spread },
                rise_y: -rng.random_range(240.0..640.0_f32),
                hue: HUES[rng.random_range(0..HUES.len())],
                delay_ms: rng.random_range(0..400),
            }
        })
        .collect()
}

#[component]
pub fn SuccessOverlay() -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<RoomSignals>();

    rsx! {
        div { class: "success-overlay",
            Confetti {}
            div { class: "success-card",
                h2 { "You escaped!" }
                p { "Every lock is open." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| signals.dispatch(ctx.clone(), Command::PlayAgain, |_| {}),
                    "Play again"
                }
            }
        }
    }
}

#[component]
fn Confetti() -> Element {
    let pieces = use_signal(|| burst(PIECES_PER_CORNER, &mut rand::rng()));

    use_hook(move || {
        let mut pieces = pieces;
        spawn(async move {
            tokio::time::sleep(CONFETTI_LIFETIME).await;
            pieces.set(Vec::new());
        });
    });

    rsx! {
        div { class: "confetti", aria_hidden: "true",
            for piece in pieces.read().iter() {
                span { key: "{piece.id}", class: "confetti-piece", style: "{piece.style()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_launches_from_both_corners() {
        let mut rng = StdRng::seed_from_u64(3);
        let pieces = burst(10, &mut rng);

        assert_eq!(pieces.len(), 20);
        assert_eq!(pieces.iter().filter(|p| p.from_left).count(), 10);
        assert!(
            pieces
                .iter()
                .all(|p| (p.drift_x > 0.0) == p.from_left && p.rise_y < 0.0)
        );
    }

    #[test]
    fn style_anchors_to_the_launch_corner() {
        let piece = ConfettiPiece {
            id: 0,
            from_left: false,
            drift_x: -200.0,
            rise_y: -300.0,
            hue: 48,
            delay_ms: 120,
        };
        assert_eq!(
            piece.style(),
            "right: 0; --dx: -200px; --dy: -300px; --hue: 48; animation-delay: 120ms;"
        );
    }
}
