use crate::{
    content::render_contents,
    font::Font,
    image::Image,
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    ChessbookError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF,
/// then renders it out with a call to [Document::write]
#[derive(Default)]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
    pub outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information
    /// block will be written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// The number of pages added so far
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Add a font to the document. Fonts are stored globally within the
    /// document so any page can use them; the returned id is how spans refer
    /// to the font.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add an image to the document. Like fonts, images are stored globally
    /// and referred to by id, so one image can appear on several pages.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Add a bookmark in the document outline pointing at a page by its
    /// 0-based position in the document
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize) {
        self.outline.add_bookmark(page_index, title);
    }

    fn write_page(
        &self,
        page: &Page,
        page_index: usize,
        refs: &mut ObjectReferences,
        writer: &mut Pdf,
    ) -> Result<(), ChessbookError> {
        let id = refs.get(RefType::Page(page_index)).unwrap();
        let mut page_writer = writer.page(id);
        page_writer.media_box(page.media_box.into());
        page_writer.art_box(page.content_box.into());
        page_writer.parent(refs.get(RefType::PageTree).unwrap());

        let mut resources = page_writer.resources();
        let mut resource_fonts = resources.fonts();
        for (i, _) in self.fonts.iter() {
            resource_fonts.pair(
                Name(format!("F{}", i.index()).as_bytes()),
                refs.get(RefType::Font(i.index())).unwrap(),
            );
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (i, _) in self.images.iter() {
            resource_xobjects.pair(
                Name(format!("I{}", i.index()).as_bytes()),
                refs.get(RefType::Image(i.index())).unwrap(),
            );
        }
        resource_xobjects.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page_writer.contents(content_id);
        page_writer.finish();

        let rendered = render_contents(&page.contents, &self.fonts)?;
        writer.stream(content_id, rendered.as_slice());

        Ok(())
    }

    /// Write the entire document to the writer. The whole document is
    /// rendered in memory first, so a very large document will allocate
    /// accordingly; that limitation comes from the underlying pdf-writer.
    ///
    /// Until `write` is called no references are resolved, so pages, fonts
    /// and images can still be added freely.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), ChessbookError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document, not arena index,
        // so bookmarks can reference pages by where they ended up
        let page_refs: Vec<Ref> = self
            .page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, font) in self.fonts.iter() {
            font.write(&mut refs, i, &mut writer);
        }

        for (i, image) in self.images.iter() {
            image.write(&mut refs, i.index(), &mut writer);
        }

        for (page_index, id) in self.page_order.iter().enumerate() {
            let page = self.pages.get(*id).ok_or(ChessbookError::PageMissing)?;
            self.write_page(page, page_index, &mut refs, &mut writer)?;
        }

        self.outline.write(&mut refs, &mut writer);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.outlines(refs.get(RefType::Outlines).unwrap());
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::pagesize;
    use crate::rect::Rect;
    use crate::units::Pt;

    #[test]
    fn writes_a_structurally_plausible_pdf() {
        let mut doc = Document::default();
        doc.set_info(Info::new("shapes only", "tests", "rectangles"));
        let mut page = Page::new(pagesize::A4, Some(Margins::all(Pt(24.0))));
        page.fill_rect(
            Rect::xywh(Pt(10.0), Pt(10.0), Pt(100.0), Pt(50.0)),
            crate::colours::BLACK,
        );
        doc.add_page(page);
        doc.add_bookmark("Only page", 0);

        let mut out: Vec<u8> = Vec::new();
        doc.write(&mut out).unwrap();

        assert!(out.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&out[out.len().saturating_sub(64)..]).to_string();
        assert!(tail.contains("%%EOF"), "tail was: {tail}");
    }

    #[test]
    fn page_count_tracks_added_pages() {
        let mut doc = Document::default();
        assert_eq!(doc.page_count(), 0);
        doc.add_page(Page::new(pagesize::A4, None));
        doc.add_page(Page::new(pagesize::A4, None));
        assert_eq!(doc.page_count(), 2);
    }
}
