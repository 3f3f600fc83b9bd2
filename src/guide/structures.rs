use super::theme::{self, cm};
use super::GuideRenderer;
use crate::board::Board;
use crate::pagesize::A4;
use crate::rect::Rect;
use crate::units::Pt;

struct Structure {
    name: &'static str,
    fen: &'static str,
    desc: &'static str,
    pros: &'static [&'static str],
    cons: &'static [&'static str],
    plan: &'static str,
}

const STRUCTURES: [Structure; 6] = [
    Structure {
        name: "ISOLATED PAWN",
        fen: "8/pp3ppp/3p4/8/3P4/8/PP3PPP/8 w - - 0 1",
        desc: "Pawn with no neighbor on adjacent files",
        pros: &["+ Square ahead = outpost", "+ Semi-open files", "+ Active pieces"],
        cons: &[
            "- Weakness in endgame",
            "- Target for enemy Rooks",
            "- Must be defended by pieces",
        ],
        plan: "WHITE: Piece activity, attack before the endgame. \
               BLACK: Exchange pieces, block and attack the pawn.",
    },
    Structure {
        name: "DOUBLED PAWNS",
        fen: "8/pp3ppp/8/8/8/2P5/PPP2PPP/8 w - - 0 1",
        desc: "Two pawns on the same file",
        pros: &["+ Square control", "+ Semi-open file", "+ Sometimes an extra pawn"],
        cons: &[
            "- Reduced mobility",
            "- Weak in endgame",
            "- Cannot protect each other",
        ],
        plan: "Compensate with piece activity. In the endgame, avoid exchanges if possible.",
    },
    Structure {
        name: "PASSED PAWN",
        fen: "8/pp3ppp/8/3P4/8/8/PP3PPP/8 w - - 0 1",
        desc: "No enemy pawn can block it",
        pros: &[
            "+ Promotion threat",
            "+ Forces pieces to block it",
            "+ Very strong in endgame",
        ],
        cons: &["- Can be blocked", "- Must be supported", "- Beware of sacrifices"],
        plan: "WHITE: Push! Support with King and pieces. \
               BLACK: Block with a piece (Knight ideal).",
    },
    Structure {
        name: "PAWN CHAIN",
        fen: "8/pp3ppp/4p3/3pP3/2PP4/8/PP3PPP/8 w - - 0 1",
        desc: "Pawns in diagonal (ex: c4-d5-e6)",
        pros: &["+ Space control", "+ Solid structure", "+ Strong squares ahead"],
        cons: &["- Chain base = weakness", "- Weak squares on opposite side"],
        plan: "WHITE: Protect the base (c4), push if possible. \
               BLACK: Attack the base with ...b5 or ...f6.",
    },
    Structure {
        name: "HANGING PAWNS",
        fen: "8/pp3ppp/8/2pp4/8/8/PP3PPP/8 w - - 0 1",
        desc: "Two pawns side by side without support",
        pros: &["+ Center control", "+ Can advance together", "+ Dynamic"],
        cons: &[
            "- Targets if blocked",
            "- Weak on open files",
            "- One advances = other weakens",
        ],
        plan: "Advance together or use to open the game. Avoid them being blocked.",
    },
    Structure {
        name: "PAWN MAJORITY",
        fen: "8/ppp2ppp/8/8/8/8/PP3PPP/8 w - - 0 1",
        desc: "More pawns on one side (ex: 3 vs 2)",
        pros: &[
            "+ Can create passed pawn",
            "+ Endgame advantage",
            "+ Initiative on that wing",
        ],
        cons: &["- Other side is weakened", "- Takes time to exploit"],
        plan: "Advance the majority to create a passed pawn. Ideal in Rook endgames.",
    },
];

impl GuideRenderer {
    pub(super) fn render_pawn_structures(&mut self) {
        let (width, height) = A4;
        let mut page = self.start_page();

        page.fill_rect(
            Rect::xywh(Pt(0.0), height - cm(3.2), width, cm(3.2)),
            theme::DARK,
        );
        page.fill_rect(
            Rect::xywh(Pt(0.0), height - cm(3.2), width, cm(0.4)),
            theme::GOLD,
        );
        self.draw_centred(
            &mut page,
            "PAWN STRUCTURES",
            self.theme.bold,
            Pt(28.0),
            theme::GOLD,
            width / 2.0,
            height - cm(1.8),
        );
        self.draw_centred(
            &mut page,
            "Pawns are the soul of chess - Philidor",
            self.theme.regular,
            Pt(12.0),
            theme::WHITE,
            width / 2.0,
            height - cm(2.6),
        );

        let top = height - cm(4.0);
        let card_w = (width - cm(2.5)) / 2.0;
        let card_h = cm(4.0);

        for (i, s) in STRUCTURES.iter().enumerate() {
            let col = (i % 2) as f32;
            let row = (i / 2) as f32;
            let sx = cm(1.0) + (card_w + cm(0.5)) * col;
            let sy = top - (card_h + cm(0.3)) * row;

            page.fill_round_rect(
                Rect::xywh(sx, sy - card_h, card_w, card_h),
                Pt(5.0),
                theme::LIGHT,
            );
            self.draw_text(
                &mut page,
                s.name,
                self.theme.bold,
                Pt(11.0),
                theme::DARK,
                sx + cm(0.2),
                sy - cm(0.4),
            );
            self.draw_text(
                &mut page,
                s.desc,
                self.theme.regular,
                Pt(7.0),
                theme::GRAY,
                sx + cm(0.2),
                sy - cm(0.75),
            );

            self.draw_diagram(
                &mut page,
                Board::from_fen(s.fen),
                &[],
                &[],
                180,
                Rect::xywh(sx + cm(0.1), sy - cm(2.9), cm(2.0), cm(2.0)),
            );

            let text_x = sx + cm(2.2);
            let mut line_y = sy - cm(1.1);
            for line in s.pros {
                self.draw_text(
                    &mut page,
                    line,
                    self.theme.regular,
                    Pt(6.0),
                    theme::GREEN_DARK,
                    text_x,
                    line_y,
                );
                line_y -= cm(0.28);
            }
            line_y -= cm(0.1);
            for line in s.cons {
                self.draw_text(
                    &mut page,
                    line,
                    self.theme.regular,
                    Pt(6.0),
                    theme::RED_DARK,
                    text_x,
                    line_y,
                );
                line_y -= cm(0.28);
            }

            let mut plan_y = sy - card_h + cm(0.6);
            for line in self
                .wrap(s.plan, self.theme.bold, Pt(5.5), card_w - cm(0.4))
                .iter()
                .take(2)
            {
                self.draw_text(
                    &mut page,
                    line,
                    self.theme.bold,
                    Pt(5.5),
                    theme::DARK,
                    sx + cm(0.2),
                    plan_y,
                );
                plan_y -= cm(0.24);
            }
        }

        self.footer(&mut page);
        self.push_page_with_bookmark(page, "Pawn structures");
    }
}
