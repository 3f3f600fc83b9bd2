use super::theme::{self, cm};
use super::GuideRenderer;
use crate::board::Board;
use crate::colour::Colour;
use crate::pagesize::A4;
use crate::rect::Rect;
use crate::units::Pt;

struct Zone {
    name: &'static str,
    colour: Colour,
    files: &'static str,
    fen: &'static str,
    highlights: &'static [&'static str],
    when: [&'static str; 4],
    plans: [&'static str; 4],
    tip: &'static str,
}

const ZONES: [Zone; 3] = [
    Zone {
        name: "QUEENSIDE",
        colour: theme::GREEN_DARK,
        files: "a, b, c",
        fen: "r4rk1/1pp2ppp/p1n2n2/3pp3/8/P1NPPP2/1P4PP/R1B2RK1 w - - 0 1",
        highlights: &["a3", "b2", "c3", "a1"],
        when: [
            "Pawn majority there",
            "Enemy king castled short",
            "Open a/b/c files",
            "b4-b5 push available",
        ],
        plans: [
            "Create a passed pawn (endgame)",
            "Minority attack (b4-b5)",
            "Rooks on the a/b files",
            "Knight to c5",
        ],
        tip: "Do not strip your own King!",
    },
    Zone {
        name: "CENTRE",
        colour: theme::YELLOW_DARK,
        files: "d, e",
        fen: "r1bqkb1r/pppp1ppp/2n2n2/4p3/3PP3/2N2N2/PPP2PPP/R1BQKB1R w KQkq - 0 1",
        highlights: &["d4", "e4", "d5", "e5"],
        when: [
            "ALWAYS the priority!",
            "Control = mobility",
            "Pieces centralized",
            "Swing from wing to wing",
        ],
        plans: [
            "Occupy with pawns e4-d4",
            "Knight to d5/e5",
            "Open up when better developed",
            "Close it for a wing attack",
        ],
        tip: "\"Control the centre, control the game\"",
    },
    Zone {
        name: "KINGSIDE",
        colour: theme::RED_DARK,
        files: "f, g, h",
        fen: "r1bq1rk1/ppp2ppp/2n2n2/3p4/3P4/2NBPN2/PPP2PPP/R1BQ1RK1 w - - 0 1",
        highlights: &["f3", "g2", "h2", "f7", "g7", "h7"],
        when: [
            "Enemy king castled short",
            "Centre closed/stable",
            "More pieces on that wing",
            "Open g or h file",
        ],
        plans: [
            "Push g4-g5-g6",
            "Sacrifice on h7 (Bxh7+)",
            "Rook lift (Ra3-g3)",
            "Knight to g5 or f5",
        ],
        tip: "Attack with enough pieces!",
    },
];

const GOLDEN_RULES: [(&str, &str); 4] = [
    (
        "1. CENTRE FIRST",
        "Control the centre before attacking a wing.",
    ),
    (
        "2. WING = CLOSED CENTRE",
        "Only attack a wing when the centre is closed or stable.",
    ),
    (
        "3. ATTACK YOUR STRONG SIDE",
        "Attack where you have more space or pieces.",
    ),
    (
        "4. COUNTER IN THE CENTRE",
        "If the opponent attacks a wing, strike back in the centre!",
    ),
];

impl GuideRenderer {
    pub(super) fn render_zones(&mut self) {
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
            "THE 3 ZONES OF THE BOARD",
            self.theme.bold,
            Pt(26.0),
            theme::GOLD,
            width / 2.0,
            height - cm(1.7),
        );
        self.draw_centred(
            &mut page,
            "Understand where the action is to plan better",
            self.theme.regular,
            Pt(11.0),
            theme::WHITE,
            width / 2.0,
            height - cm(2.4),
        );

        let y = height - cm(3.8);
        let content_width = width - cm(1.6);
        let zone_h = cm(8.5);
        let zone_w = (content_width - cm(0.6)) / 3.0;
        let mut zx = cm(0.8);

        for zone in &ZONES {
            page.fill_round_rect(
                Rect::xywh(zx, y - zone_h, zone_w, zone_h),
                Pt(5.0),
                theme::LIGHT,
            );
            page.fill_round_rect(
                Rect::xywh(zx, y - cm(0.9), zone_w, cm(0.9)),
                Pt(5.0),
                zone.colour,
            );
            self.draw_centred(
                &mut page,
                &format!("{} ({})", zone.name, zone.files),
                self.theme.bold,
                Pt(11.0),
                theme::WHITE,
                zx + zone_w / 2.0,
                y - cm(0.6),
            );

            let highlights: Vec<String> =
                zone.highlights.iter().map(|s| s.to_string()).collect();
            let board_size = cm(2.8);
            self.draw_diagram(
                &mut page,
                Board::from_fen(zone.fen),
                &highlights,
                &[],
                200,
                Rect::xywh(
                    zx + (zone_w - board_size) / 2.0,
                    y - cm(1.1) - board_size,
                    board_size,
                    board_size,
                ),
            );

            let mut ty = y - cm(4.2);
            ty = self.zone_list(&mut page, "WHEN?", &zone.when, zone.colour, zx, ty);
            ty -= cm(0.15);
            ty = self.zone_list(&mut page, "PLANS", &zone.plans, zone.colour, zx, ty);
            ty -= cm(0.15);
            self.draw_text(
                &mut page,
                &format!("TIP: {}", zone.tip),
                self.theme.bold,
                Pt(6.0),
                zone.colour,
                zx + cm(0.15),
                ty,
            );

            zx += zone_w + cm(0.3);
        }

        // golden rules under the three cards
        let mut ry = y - zone_h - cm(0.4);
        self.draw_text(
            &mut page,
            "GOLDEN RULES",
            self.theme.bold,
            Pt(13.0),
            theme::DARK,
            cm(0.8),
            ry,
        );
        ry -= cm(0.55);
        for (title, desc) in GOLDEN_RULES {
            self.draw_text(
                &mut page,
                title,
                self.theme.bold,
                Pt(10.0),
                theme::GOLD,
                cm(1.0),
                ry,
            );
            self.draw_text(
                &mut page,
                desc,
                self.theme.regular,
                Pt(9.0),
                theme::DARK,
                cm(6.5),
                ry,
            );
            ry -= cm(0.5);
        }

        self.footer(&mut page);
        self.push_page_with_bookmark(page, "Board zones");
    }

    /// A small heading plus bulleted list inside a zone card; returns the y
    /// below the last bullet
    fn zone_list(
        &self,
        page: &mut crate::page::Page,
        heading: &str,
        items: &[&str],
        colour: Colour,
        zx: Pt,
        mut ty: Pt,
    ) -> Pt {
        self.draw_text(
            page,
            heading,
            self.theme.bold,
            Pt(8.0),
            colour,
            zx + cm(0.15),
            ty,
        );
        ty -= cm(0.32);
        for item in items {
            self.draw_text(
                page,
                &format!("• {item}"),
                self.theme.regular,
                Pt(6.5),
                theme::DARK,
                zx + cm(0.15),
                ty,
            );
            ty -= cm(0.3);
        }
        ty
    }
}
