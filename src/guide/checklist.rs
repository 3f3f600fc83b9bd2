use super::theme::{self, cm};
use super::GuideRenderer;
use crate::colour::Colour;
use crate::pagesize::A4;
use crate::rect::Rect;
use crate::units::Pt;

struct ChecklistItem {
    num: &'static str,
    title: &'static str,
    colour: Colour,
    question: &'static str,
    detail: &'static str,
}

/// Ten questions to run through before every move
const ITEMS: [ChecklistItem; 10] = [
    ChecklistItem {
        num: "1",
        title: "CHECK?",
        colour: theme::RED_DARK,
        question: "Is my opponent giving check? Can I give check?",
        detail: "A missed check = a lost game. Always verify this first!",
    },
    ChecklistItem {
        num: "2",
        title: "CAPTURE?",
        colour: theme::RED_DARK,
        question: "Is a piece hanging? Can I capture something?",
        detail: "Look at ALL the pieces: mine AND my opponent's.",
    },
    ChecklistItem {
        num: "3",
        title: "THREAT?",
        colour: theme::YELLOW_DARK,
        question: "What is my opponent's threat? What is MY threat?",
        detail: "Identify the opponent's threat BEFORE playing your move.",
    },
    ChecklistItem {
        num: "4",
        title: "TACTIC?",
        colour: theme::YELLOW_DARK,
        question: "Is there a fork, a pin, a skewer, a double check?",
        detail: "Fork (2 pieces attacked), Pin (piece frozen), Skewer (2 pieces in line).",
    },
    ChecklistItem {
        num: "5",
        title: "LOOSE PIECES?",
        colour: theme::YELLOW_DARK,
        question: "Do I have an undefended piece? Does my opponent?",
        detail: "An undefended piece = a tactical target. Count them every move.",
    },
    ChecklistItem {
        num: "6",
        title: "KING SAFE?",
        colour: theme::GREEN_DARK,
        question: "Is my King safe? Is my opponent's?",
        detail: "King in the centre = danger. Castle early. Watch the open files.",
    },
    ChecklistItem {
        num: "7",
        title: "DEVELOPMENT?",
        colour: theme::GREEN_DARK,
        question: "Are all my pieces developed and active?",
        detail: "Knights and Bishops out, Rooks connected, no passive piece.",
    },
    ChecklistItem {
        num: "8",
        title: "CENTRE?",
        colour: theme::GREEN_DARK,
        question: "Who controls the centre? Can I improve it?",
        detail: "Squares e4, d4, e5, d5 = the most important. Pawns + pieces in the centre.",
    },
    ChecklistItem {
        num: "9",
        title: "PLAN?",
        colour: theme::GREEN_DARK,
        question: "What is my plan? Does this move serve it?",
        detail: "Every move needs a purpose. No \"waiting\" moves.",
    },
    ChecklistItem {
        num: "10",
        title: "BLUNDER CHECK!",
        colour: theme::RED_DARK,
        question: "If I play this move, what does my opponent reply?",
        detail: "ALWAYS imagine the reply BEFORE playing. Avoids 90% of mistakes!",
    },
];

impl GuideRenderer {
    pub(super) fn render_checklist(&mut self) {
        let (width, height) = A4;
        let mut page = self.start_page();

        page.fill_rect(
            Rect::xywh(Pt(0.0), height - cm(3.5), width, cm(3.5)),
            theme::DARK,
        );
        page.fill_rect(
            Rect::xywh(Pt(0.0), height - cm(3.5), width, cm(0.4)),
            theme::GOLD,
        );
        self.draw_centred(
            &mut page,
            "✓ CHECKLIST",
            self.theme.bold,
            Pt(32.0),
            theme::GOLD,
            width / 2.0,
            height - cm(2.0),
        );
        self.draw_centred(
            &mut page,
            "10 questions to ask BEFORE every move",
            self.theme.regular,
            Pt(14.0),
            theme::WHITE,
            width / 2.0,
            height - cm(2.8),
        );

        let content_width = width - cm(3.0);
        let item_height = cm(2.1);
        let mut y = height - cm(5.0);

        for (i, item) in ITEMS.iter().enumerate() {
            if i % 2 == 0 {
                page.fill_rect(
                    Rect::xywh(
                        cm(1.5),
                        y - item_height + cm(0.2),
                        content_width,
                        item_height - cm(0.1),
                    ),
                    theme::LIGHT,
                );
            }

            page.fill_circle((cm(2.3), y - cm(0.7)), cm(0.55), item.colour);
            self.draw_centred(
                &mut page,
                item.num,
                self.theme.bold,
                Pt(16.0),
                theme::WHITE,
                cm(2.3),
                y - cm(0.85),
            );

            self.draw_text(
                &mut page,
                item.title,
                self.theme.bold,
                Pt(14.0),
                item.colour,
                cm(3.2),
                y - cm(0.5),
            );
            self.draw_text(
                &mut page,
                item.question,
                self.theme.bold,
                Pt(10.0),
                theme::DARK,
                cm(3.2),
                y - cm(1.05),
            );
            self.draw_text(
                &mut page,
                item.detail,
                self.theme.regular,
                Pt(9.0),
                theme::GRAY,
                cm(3.2),
                y - cm(1.5),
            );

            y -= item_height;
        }

        // closing tip banner
        page.fill_rect(
            Rect::xywh(cm(1.5), cm(1.2), content_width, cm(1.2)),
            theme::GOLD,
        );
        self.draw_centred(
            &mut page,
            "TIP: memorize \"C-C-T-T\" (Check, Capture, Threat, Tactic)",
            self.theme.bold,
            Pt(11.0),
            theme::DARK,
            width / 2.0,
            cm(1.95),
        );
        self.draw_centred(
            &mut page,
            "The first 4 points cover 80% of mistakes. Always run through them!",
            self.theme.regular,
            Pt(9.0),
            theme::DARK,
            width / 2.0,
            cm(1.5),
        );

        self.footer(&mut page);
        self.push_page_with_bookmark(page, "Checklist");
    }
}
