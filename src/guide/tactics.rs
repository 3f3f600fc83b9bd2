use super::theme::{self, cm};
use super::GuideRenderer;
use crate::board::Board;
use crate::colour::Colour;
use crate::pagesize::A4;
use crate::rect::Rect;
use crate::units::Pt;

struct Tactic {
    name: &'static str,
    colour: Colour,
    fen: &'static str,
    highlights: &'static [&'static str],
    definition: &'static str,
    tip: &'static str,
}

const TACTICS: [Tactic; 8] = [
    Tactic {
        name: "FORK",
        colour: theme::RED_DARK,
        fen: "r3k2r/ppp2ppp/8/3N4/8/8/PPP2PPP/R3K2R w KQkq - 0 1",
        highlights: &["d5", "c7", "e7", "f6"],
        definition: "One piece attacks 2+ pieces",
        tip: "Knight = king of forks!",
    },
    Tactic {
        name: "PIN",
        colour: theme::YELLOW_DARK,
        fen: "r1bqk2r/pppp1ppp/2n2n2/4p3/1b2P3/2NP1N2/PPP2PPP/R1BQKB1R w KQkq - 0 1",
        highlights: &["b4", "c3", "e1"],
        definition: "Piece frozen (protects King)",
        tip: "Absolute (King) vs Relative (other)",
    },
    Tactic {
        name: "SKEWER",
        colour: theme::GREEN_DARK,
        fen: "6k1/5ppp/8/8/8/8/q4PPP/R5K1 w - - 0 1",
        highlights: &["a1", "a2", "a8"],
        definition: "Attack strong piece, capture behind",
        tip: "Reverse of pin",
    },
    Tactic {
        name: "DOUBLE CHECK",
        colour: theme::RED_DARK,
        fen: "r1bqk2r/pppp1Npp/2n2n2/2b1p3/2B1P3/8/PPPP1PPP/RNBQK2R b KQkq - 0 1",
        highlights: &["f7", "e8", "d8"],
        definition: "2 pieces give check at once",
        tip: "King MUST move!",
    },
    Tactic {
        name: "DISCOVERY",
        colour: theme::YELLOW_DARK,
        fen: "r1bqkb1r/pppp1ppp/2n2n2/4N3/2B1P3/8/PPPP1PPP/RNBQK2R w KQkq - 0 1",
        highlights: &["c4", "e5", "f7"],
        definition: "Piece moves, reveals attack",
        tip: "Double threat possible",
    },
    Tactic {
        name: "SACRIFICE",
        colour: theme::GREEN_DARK,
        fen: "r1bq1rk1/pppp1ppp/2n2n2/2b1p2Q/2B1P3/8/PPPP1PPP/RNB1K2R w KQ - 0 1",
        highlights: &["h5", "f7", "c4"],
        definition: "Give material to win more back",
        tip: "Calculate all the way!",
    },
    Tactic {
        name: "ELIMINATION",
        colour: theme::RED_DARK,
        fen: "r2qkb1r/ppp2ppp/2n1bn2/4p3/4P3/1NN5/PPPP1PPP/R1BQKB1R w KQkq - 0 1",
        highlights: &["c3", "e6", "d8"],
        definition: "Capture the key defender",
        tip: "Find THE piece holding it all",
    },
    Tactic {
        name: "OVERLOAD",
        colour: theme::YELLOW_DARK,
        fen: "3r2k1/5ppp/8/8/8/8/5PPP/3RQ1K1 w - - 0 1",
        highlights: &["d8", "d1", "e1"],
        definition: "Piece with too many duties",
        tip: "Create multiple threats",
    },
];

const OTHER_PATTERNS: [(&str, &str); 4] = [
    ("Deflection", "Force piece to leave its square"),
    ("Attraction", "Lure piece to bad square"),
    ("X-Ray", "Attack through enemy piece"),
    ("Perpetual check", "Forced check series = draw"),
];

impl GuideRenderer {
    pub(super) fn render_tactics(&mut self) {
        let (width, height) = A4;
        let mut page = self.start_page();

        page.fill_rect(
            Rect::xywh(Pt(0.0), height - cm(3.0), width, cm(3.0)),
            theme::DARK,
        );
        page.fill_rect(
            Rect::xywh(Pt(0.0), height - cm(3.0), width, cm(0.3)),
            theme::GOLD,
        );
        self.draw_centred(
            &mut page,
            "ESSENTIAL TACTICS",
            self.theme.bold,
            Pt(26.0),
            theme::GOLD,
            width / 2.0,
            height - cm(1.7),
        );
        self.draw_centred(
            &mut page,
            "Tactical patterns to recognize instantly",
            self.theme.regular,
            Pt(11.0),
            theme::WHITE,
            width / 2.0,
            height - cm(2.4),
        );

        let top = height - cm(3.6);
        let card_w = (width - cm(1.6)) / 2.0 - cm(0.2);
        let card_h = cm(4.8);
        let board_size = cm(2.8);

        for (i, tactic) in TACTICS.iter().enumerate() {
            let col = (i % 2) as f32;
            let row = (i / 2) as f32;
            let tx = cm(0.8) + (card_w + cm(0.4)) * col;
            let ty = top - (card_h + cm(0.25)) * row;

            page.fill_round_rect(
                Rect::xywh(tx, ty - card_h, card_w, card_h),
                Pt(5.0),
                theme::LIGHT,
            );
            page.fill_round_rect(
                Rect::xywh(tx, ty - cm(0.7), card_w, cm(0.7)),
                Pt(5.0),
                tactic.colour,
            );
            self.draw_centred(
                &mut page,
                tactic.name,
                self.theme.bold,
                Pt(10.0),
                theme::WHITE,
                tx + card_w / 2.0,
                ty - cm(0.5),
            );

            let highlights: Vec<String> =
                tactic.highlights.iter().map(|s| s.to_string()).collect();
            self.draw_diagram(
                &mut page,
                Board::from_fen(tactic.fen),
                &highlights,
                &[],
                220,
                Rect::xywh(
                    tx + cm(0.15),
                    ty - cm(0.9) - board_size,
                    board_size,
                    board_size,
                ),
            );

            let text_x = tx + board_size + cm(0.35);
            let text_w = card_w - board_size - cm(0.6);
            let mut def_y = ty - cm(1.1);
            for line in self
                .wrap(tactic.definition, self.theme.bold, Pt(8.0), text_w)
                .iter()
                .take(2)
            {
                self.draw_text(
                    &mut page,
                    line,
                    self.theme.bold,
                    Pt(8.0),
                    theme::DARK,
                    text_x,
                    def_y,
                );
                def_y -= cm(0.35);
            }

            let mut tip_y = ty - cm(2.1);
            let tip = format!("TIP: {}", tactic.tip);
            for line in self.wrap(&tip, self.theme.bold, Pt(7.0), text_w).iter().take(2) {
                self.draw_text(
                    &mut page,
                    line,
                    self.theme.bold,
                    Pt(7.0),
                    tactic.colour,
                    text_x,
                    tip_y,
                );
                tip_y -= cm(0.3);
            }

            self.draw_centred(
                &mut page,
                "Green squares = key pieces",
                self.theme.regular,
                Pt(6.0),
                theme::GRAY,
                tx + cm(0.15) + board_size / 2.0,
                ty - cm(4.0),
            );
        }

        // the patterns there was no room to diagram
        let mut y = top - (card_h + cm(0.25)) * 4.0 - cm(0.3);
        self.draw_text(
            &mut page,
            "OTHER PATTERNS:",
            self.theme.bold,
            Pt(10.0),
            theme::DARK,
            cm(0.8),
            y,
        );

        let mut x = cm(0.8);
        for (name, desc) in OTHER_PATTERNS {
            self.draw_text(
                &mut page,
                &format!("• {name}:"),
                self.theme.bold,
                Pt(8.0),
                theme::GOLD,
                x,
                y - cm(0.5),
            );
            self.draw_text(
                &mut page,
                desc,
                self.theme.regular,
                Pt(8.0),
                theme::DARK,
                x + cm(2.5),
                y - cm(0.5),
            );
            x += cm(4.8);
            if x.0 > (width - cm(4.0)).0 {
                x = cm(0.8);
                y -= cm(0.5);
            }
        }

        self.footer(&mut page);
        self.push_page_with_bookmark(page, "Essential tactics");
    }
}
