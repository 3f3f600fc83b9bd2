use super::theme::{self, cm};
use super::{percent, GuideRenderer, Tier, TieredOpenings};
use crate::colour::Colour;
use crate::pagesize::A4;
use crate::rect::Rect;
use crate::units::Pt;

/// Row background and page-circle colours per tier
fn tier_accents(tier: Tier) -> (Colour, Colour) {
    match tier {
        Tier::Beginner => (theme::GREEN_BG, theme::GREEN_MEDIUM),
        Tier::Intermediate => (theme::YELLOW_BG, theme::YELLOW_MEDIUM),
        Tier::Advanced => (theme::RED_BG, theme::RED_MEDIUM),
    }
}

impl GuideRenderer {
    pub(super) fn render_toc(&mut self, tiers: &TieredOpenings) {
        let (width, height) = A4;
        let mut page = self.start_page();

        page.fill_rect(
            Rect::xywh(Pt(0.0), height - cm(3.0), width, cm(3.0)),
            theme::DARK,
        );
        self.draw_centred(
            &mut page,
            "TABLE OF CONTENTS",
            self.theme.bold,
            Pt(28.0),
            theme::GOLD,
            width / 2.0,
            height - cm(2.0),
        );

        let content_width = width - cm(2.0);
        let row_height = cm(0.65);
        let mut y = height - cm(4.2);
        // the first opening page follows the cover and this page
        let mut target = 3usize;

        for tier in Tier::ALL {
            let openings = tiers.bucket(tier);
            let (row_bg, circle) = tier_accents(tier);

            page.fill_round_rect(
                Rect::xywh(cm(1.0), y - cm(0.2), content_width, cm(0.9)),
                Pt(4.0),
                Self::tier_colour(tier),
            );
            self.draw_centred(
                &mut page,
                &format!(
                    "━━  {}  ━━  {} openings  ━━",
                    tier.label().to_uppercase(),
                    openings.len()
                ),
                self.theme.bold,
                Pt(12.0),
                theme::WHITE,
                width / 2.0,
                y + cm(0.1),
            );
            y -= cm(1.2);

            for (i, op) in openings.iter().enumerate() {
                if i % 2 == 0 {
                    page.fill_rect(
                        Rect::xywh(cm(1.0), y - cm(0.15), content_width, row_height),
                        row_bg,
                    );
                }

                let name = self.fit(&op.name, self.theme.bold, Pt(10.0), cm(6.2));
                self.draw_text(
                    &mut page,
                    &name,
                    self.theme.bold,
                    Pt(10.0),
                    theme::DARK,
                    cm(1.3),
                    y,
                );

                let moves = self.fit(&op.moves, self.theme.regular, Pt(9.0), cm(4.5));
                self.draw_text(
                    &mut page,
                    &moves,
                    self.theme.regular,
                    Pt(9.0),
                    theme::GRAY,
                    cm(7.8),
                    y,
                );

                self.draw_text(
                    &mut page,
                    &format!("W {}", percent(op.white_win)),
                    self.theme.bold,
                    Pt(9.0),
                    theme::DARK,
                    cm(12.8),
                    y,
                );

                page.fill_circle((width - cm(1.3), y + cm(0.1)), cm(0.3), circle);
                self.draw_centred(
                    &mut page,
                    &target.to_string(),
                    self.theme.bold,
                    Pt(8.0),
                    theme::WHITE,
                    width - cm(1.3),
                    y - cm(0.05),
                );

                y -= row_height;
                target += 1;
            }

            y -= cm(0.4);
        }

        self.footer(&mut page);
        self.push_page_with_bookmark(page, "Table of contents");
    }
}
