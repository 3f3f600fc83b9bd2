use super::theme::{self, cm};
use super::{GuideRenderer, Tier, TieredOpenings};
use crate::pagesize::A4;
use crate::rect::Rect;
use crate::units::Pt;

impl GuideRenderer {
    pub(super) fn render_cover(&mut self, tiers: &TieredOpenings) {
        let (width, height) = A4;
        let mut page = self.start_page();

        page.fill_rect(Rect::xywh(Pt(0.0), Pt(0.0), width, height), theme::DARK);

        // gold bands top and bottom
        page.fill_rect(
            Rect::xywh(Pt(0.0), height - cm(3.0), width, cm(0.3)),
            theme::GOLD,
        );
        page.fill_rect(Rect::xywh(Pt(0.0), cm(2.7), width, cm(0.3)), theme::GOLD);

        self.draw_centred(
            &mut page,
            "ELO BOOSTER",
            self.theme.bold,
            Pt(56.0),
            theme::GOLD,
            width / 2.0,
            height - cm(7.0),
        );
        self.draw_centred(
            &mut page,
            "The Ultimate Opening Guide",
            self.theme.regular,
            Pt(20.0),
            theme::WHITE,
            width / 2.0,
            height - cm(9.0),
        );
        page.stroke_line(
            (width / 2.0 - cm(4.0), height - cm(10.0)),
            (width / 2.0 + cm(4.0), height - cm(10.0)),
            Pt(2.0),
            theme::GOLD,
        );

        // the big medallion with the opening count
        page.fill_circle((width / 2.0, height / 2.0 - cm(1.0)), cm(3.0), theme::GOLD);
        self.draw_centred(
            &mut page,
            &tiers.total().to_string(),
            self.theme.bold,
            Pt(48.0),
            theme::DARK,
            width / 2.0,
            height / 2.0 - cm(0.5),
        );
        self.draw_centred(
            &mut page,
            "OPENINGS",
            self.theme.regular,
            Pt(14.0),
            theme::DARK,
            width / 2.0,
            height / 2.0 - cm(1.8),
        );

        // one badge per tier
        let badge_y = height / 2.0 - cm(5.0);
        let badge_x = [width / 2.0 - cm(5.0), width / 2.0, width / 2.0 + cm(5.0)];
        for (tier, x) in Tier::ALL.into_iter().zip(badge_x) {
            page.fill_circle((x, badge_y), cm(1.2), Self::tier_colour(tier));
            self.draw_centred(
                &mut page,
                &tiers.bucket(tier).len().to_string(),
                self.theme.bold,
                Pt(24.0),
                theme::WHITE,
                x,
                badge_y - cm(0.3),
            );
            self.draw_centred(
                &mut page,
                &tier.label().to_uppercase(),
                self.theme.regular,
                Pt(10.0),
                theme::WHITE,
                x,
                badge_y - cm(1.8),
            );
        }

        let features = [
            "✓ Strategic ideas explained",
            "✓ Traps to know with responses",
            "✓ Detailed plans for each side",
            "✓ Typical mistakes to avoid",
        ];
        let mut feature_y = cm(6.0);
        for feature in features {
            self.draw_centred(
                &mut page,
                feature,
                self.theme.regular,
                Pt(12.0),
                theme::WHITE,
                width / 2.0,
                feature_y,
            );
            feature_y -= cm(0.6);
        }

        self.draw_centred(
            &mut page,
            "© 2025 Elo Booster",
            self.theme.regular,
            Pt(9.0),
            theme::GRAY_LIGHT,
            width / 2.0,
            cm(1.5),
        );

        self.push_page_with_bookmark(page, "Cover");
    }
}
