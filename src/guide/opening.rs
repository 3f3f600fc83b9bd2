use super::theme::{self, cm};
use super::{percent, GuideRenderer, OpeningRecord, Tier};
use crate::board::Board;
use crate::colour::Colour;
use crate::pagesize::A4;
use crate::rect::Rect;
use crate::units::Pt;

impl GuideRenderer {
    pub(super) fn render_opening(&mut self, op: &OpeningRecord) {
        let (width, height) = A4;
        let margin = super::margin();
        let content_width = width - margin * 2.0;
        let tier = Tier::of(op.complexity.as_deref());
        let tier_colour = Self::tier_colour(tier);
        let mut page = self.start_page();

        // -- header band --
        let header_h = cm(2.8);
        page.fill_rect(
            Rect::xywh(Pt(0.0), height - header_h, width, header_h),
            theme::DARK,
        );
        page.fill_rect(
            Rect::xywh(Pt(0.0), height - header_h, cm(0.5), header_h),
            tier_colour,
        );

        // the title drops to two lines (and a smaller second line) when long
        let title_width = cm(10.0);
        if crate::layout::width_of_text(&op.name, self.font(self.theme.bold), Pt(20.0)).0
            > title_width.0
        {
            let lines = self.wrap(&op.name, self.theme.bold, Pt(20.0), title_width);
            if let Some(first) = lines.first() {
                self.draw_text(
                    &mut page,
                    first,
                    self.theme.bold,
                    Pt(20.0),
                    theme::WHITE,
                    cm(1.2),
                    height - cm(1.0),
                );
            }
            if let Some(second) = lines.get(1) {
                self.draw_text(
                    &mut page,
                    second,
                    self.theme.bold,
                    Pt(18.0),
                    theme::WHITE,
                    cm(1.2),
                    height - cm(1.6),
                );
            }
        } else {
            self.draw_text(
                &mut page,
                &op.name,
                self.theme.bold,
                Pt(20.0),
                theme::WHITE,
                cm(1.2),
                height - cm(1.2),
            );
        }

        let subtitle = match &op.alt_name {
            Some(alt) => format!("{alt} • {}", op.moves),
            None => op.moves.clone(),
        };
        let subtitle = self.fit(&subtitle, self.theme.regular, Pt(10.0), cm(10.0));
        self.draw_text(
            &mut page,
            &subtitle,
            self.theme.regular,
            Pt(10.0),
            theme::GOLD,
            cm(1.2),
            height - cm(2.1),
        );

        self.draw_right(
            &mut page,
            &format!("Level: {}", tier.label()),
            self.theme.regular,
            Pt(9.0),
            theme::WHITE,
            width - cm(1.0),
            height - cm(0.8),
        );
        let champions = self.fit(
            op.champions.as_deref().unwrap_or(""),
            self.theme.regular,
            Pt(9.0),
            cm(6.0),
        );
        self.draw_right(
            &mut page,
            &format!("Champions: {champions}"),
            self.theme.regular,
            Pt(9.0),
            theme::WHITE,
            width - cm(1.0),
            height - cm(1.3),
        );

        self.draw_right(
            &mut page,
            &format!("W {}", percent(op.white_win)),
            self.theme.bold,
            Pt(14.0),
            theme::WHITE,
            width - cm(3.0),
            height - cm(2.2),
        );
        self.draw_right(
            &mut page,
            &format!("B {}", percent(op.black_win)),
            self.theme.bold,
            Pt(14.0),
            Colour::new_grey(0.5),
            width - cm(1.0),
            height - cm(2.2),
        );

        // -- mainline position and the idea panel --
        let mut y = height - header_h - cm(0.4);
        let board_size = cm(5.8);
        self.draw_diagram(
            &mut page,
            Board::from_uci_moves(op.uci_moves.as_deref().unwrap_or("")),
            &op.highlights_green,
            &op.highlights_red,
            400,
            Rect::xywh(margin, y - board_size, board_size, board_size),
        );

        let idea_x = margin + board_size + cm(0.3);
        let idea_w = content_width - board_size - cm(0.3);
        page.fill_round_rect(
            Rect::xywh(idea_x, y - board_size, idea_w, board_size),
            Pt(4.0),
            theme::LIGHT,
        );
        self.draw_text(
            &mut page,
            "MAIN IDEA",
            self.theme.bold,
            Pt(12.0),
            theme::DARK,
            idea_x + cm(0.3),
            y - cm(0.4),
        );
        page.stroke_line(
            (idea_x + cm(0.3), y - cm(0.65)),
            (idea_x + idea_w - cm(0.3), y - cm(0.65)),
            Pt(1.5),
            theme::GOLD,
        );
        let idea_lines = self.wrap(
            op.idea.as_deref().unwrap_or(""),
            self.theme.regular,
            Pt(9.0),
            idea_w - cm(0.6),
        );
        let mut line_y = y - cm(1.0);
        for line in idea_lines.iter().take(12) {
            self.draw_text(
                &mut page,
                line,
                self.theme.regular,
                Pt(9.0),
                theme::DARK,
                idea_x + cm(0.3),
                line_y,
            );
            line_y -= cm(0.38);
        }

        y -= board_size + cm(0.4);

        // -- typical mistakes, one panel per side --
        let panel_h = cm(2.8);
        let col_w = content_width / 2.0 - cm(0.15);
        self.mistakes_panel(
            &mut page,
            "WHITE'S MISTAKES",
            &op.errors_white,
            theme::GREEN,
            margin,
            y,
            col_w,
            panel_h,
        );
        self.mistakes_panel(
            &mut page,
            "BLACK'S MISTAKES",
            &op.errors_black,
            theme::RED,
            margin + col_w + cm(0.3),
            y,
            col_w,
            panel_h,
        );
        y -= panel_h + cm(0.3);

        // -- development goals, up to six in a 3-column grid --
        let dev_h = cm(2.0);
        page.fill_round_rect(
            Rect::xywh(margin, y - dev_h, content_width, dev_h),
            Pt(4.0),
            theme::YELLOW_BG,
        );
        self.draw_text(
            &mut page,
            "DEVELOPMENT CHALLENGES",
            self.theme.bold,
            Pt(12.0),
            theme::DARK,
            margin + cm(0.3),
            y - cm(0.35),
        );
        let dev_col_w = content_width / 3.0;
        for (i, dev) in op.development.iter().take(6).enumerate() {
            let col = (i % 3) as f32;
            let row = (i / 3) as f32;
            let dx = margin + cm(0.3) + dev_col_w * col;
            let dy = y - cm(0.7) - cm(0.6) * row;
            self.draw_text(
                &mut page,
                &format!("• {}:", dev.piece_name()),
                self.theme.bold,
                Pt(9.0),
                theme::DARK,
                dx,
                dy,
            );
            let goal = self.fit(dev.goal(), self.theme.regular, Pt(8.0), dev_col_w - cm(0.8));
            self.draw_text(
                &mut page,
                &goal,
                self.theme.regular,
                Pt(8.0),
                theme::DARK,
                dx,
                dy - cm(0.25),
            );
        }
        y -= dev_h + cm(1.0);

        // -- traps --
        self.draw_text(
            &mut page,
            "TRAPS TO KNOW",
            self.theme.bold,
            Pt(12.0),
            theme::DARK,
            margin,
            y,
        );
        y -= cm(0.8);

        let card_w = content_width / 3.0 - cm(0.2);
        let trap_h = cm(3.2);
        let mini = cm(2.2);
        let mut card_x = margin;
        for trap in op.traps.iter().take(3) {
            page.fill_round_rect(
                Rect::xywh(card_x, y - trap_h, card_w, trap_h),
                Pt(4.0),
                theme::LIGHT,
            );
            self.draw_diagram(
                &mut page,
                Board::from_fen(&trap.fen),
                &trap.highlights,
                &[],
                220,
                Rect::xywh(card_x + cm(0.1), y - cm(2.4), mini, mini),
            );

            let text_x = card_x + mini + cm(0.2);
            let text_w = card_w - mini - cm(0.4);
            let mut name_y = y - cm(0.3);
            for line in self
                .wrap(&trap.name, self.theme.bold, Pt(9.0), text_w)
                .iter()
                .take(2)
            {
                self.draw_text(
                    &mut page,
                    line,
                    self.theme.bold,
                    Pt(9.0),
                    theme::DARK,
                    text_x,
                    name_y,
                );
                name_y -= cm(0.28);
            }
            let mut desc_y = name_y - cm(0.1);
            for line in self
                .wrap(&trap.desc, self.theme.regular, Pt(8.0), text_w)
                .iter()
                .take(10)
            {
                self.draw_text(
                    &mut page,
                    line,
                    self.theme.regular,
                    Pt(8.0),
                    theme::DARK,
                    text_x,
                    desc_y,
                );
                desc_y -= cm(0.24);
            }

            card_x += card_w + cm(0.3);
        }
        y -= trap_h + cm(1.0);

        // -- main variations --
        self.draw_text(
            &mut page,
            "MAIN VARIATIONS",
            self.theme.bold,
            Pt(12.0),
            theme::DARK,
            margin,
            y,
        );
        y -= cm(0.8);

        let var_h = cm(3.8);
        let mut card_x = margin;
        for var in op.variants.iter().take(3) {
            page.fill_round_rect(
                Rect::xywh(card_x, y - var_h, card_w, var_h),
                Pt(4.0),
                theme::LIGHT,
            );
            self.draw_diagram(
                &mut page,
                Board::from_uci_moves(&var.uci),
                &var.highlights,
                &[],
                220,
                Rect::xywh(card_x + cm(0.1), y - cm(2.5), mini, mini),
            );

            let text_x = card_x + mini + cm(0.2);
            let text_w = card_w - mini - cm(0.4);
            let mut name_y = y - cm(0.25);
            for line in self
                .wrap(&var.name, self.theme.bold, Pt(9.0), text_w)
                .iter()
                .take(2)
            {
                self.draw_text(
                    &mut page,
                    line,
                    self.theme.bold,
                    Pt(9.0),
                    theme::DARK,
                    text_x,
                    name_y,
                );
                name_y -= cm(0.26);
            }

            let moves = self.fit(&var.moves, self.theme.regular, Pt(8.0), text_w);
            self.draw_text(
                &mut page,
                &moves,
                self.theme.regular,
                Pt(8.0),
                theme::DARK,
                text_x,
                name_y - cm(0.05),
            );
            self.draw_text(
                &mut page,
                &format!("W {} B {}", percent(var.white_win), percent(var.black_win)),
                self.theme.bold,
                Pt(8.0),
                theme::DARK,
                text_x,
                name_y - cm(0.35),
            );

            let plan_y = name_y - cm(0.85);
            self.plan_block(&mut page, "White:", &var.white_plan, text_x, text_w, plan_y);
            self.plan_block(
                &mut page,
                "Black:",
                &var.black_plan,
                text_x,
                text_w,
                plan_y - cm(1.0),
            );

            card_x += card_w + cm(0.3);
        }

        self.footer(&mut page);
        let label = self.fit(&op.name, self.theme.regular, Pt(10.0), cm(10.0));
        self.push_page_with_bookmark(page, &label);
    }

    #[allow(clippy::too_many_arguments)]
    fn mistakes_panel(
        &self,
        page: &mut crate::page::Page,
        heading: &str,
        errors: &[String],
        background: Colour,
        x: Pt,
        y: Pt,
        w: Pt,
        h: Pt,
    ) {
        page.fill_round_rect(Rect::xywh(x, y - h, w, h), Pt(4.0), background);
        self.draw_text(
            page,
            heading,
            self.theme.bold,
            Pt(12.0),
            theme::DARK,
            x + cm(0.3),
            y - cm(0.4),
        );
        let mut line_y = y - cm(0.85);
        for err in errors.iter().take(3) {
            let bullet = format!("• {err}");
            for line in self
                .wrap(&bullet, self.theme.regular, Pt(8.0), w - cm(0.5))
                .iter()
                .take(3)
            {
                self.draw_text(
                    page,
                    line,
                    self.theme.regular,
                    Pt(8.0),
                    theme::DARK,
                    x + cm(0.3),
                    line_y,
                );
                line_y -= cm(0.32);
            }
            line_y -= cm(0.08);
        }
    }

    fn plan_block(
        &self,
        page: &mut crate::page::Page,
        heading: &str,
        plan: &str,
        x: Pt,
        w: Pt,
        y: Pt,
    ) {
        self.draw_text(page, heading, self.theme.bold, Pt(8.0), theme::DARK, x, y);
        for (i, line) in self
            .wrap(plan, self.theme.regular, Pt(8.0), w)
            .iter()
            .take(3)
            .enumerate()
        {
            self.draw_text(
                page,
                line,
                self.theme.regular,
                Pt(8.0),
                theme::DARK,
                x,
                y - cm(0.25) - cm(0.22) * i as f32,
            );
        }
    }
}
