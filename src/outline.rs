use pdf_writer::{Finish, Pdf, TextStr};

use crate::refs::{ObjectReferences, RefType};

/// The document outline: a flat list of bookmarks, each pointing at a page.
/// Navigating to a bookmark fits the whole page into view.
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug)]
pub struct OutlineEntry {
    pub page_index: usize,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark<S: ToString>(&mut self, page_index: usize, title: S) {
        self.entries.push(OutlineEntry {
            page_index,
            title: title.to_string(),
        });
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let outlines_id = refs.gen(RefType::Outlines);
        for (i, _) in self.entries.iter().enumerate() {
            refs.gen(RefType::OutlineEntry(i));
        }

        let mut outline = writer.outline(outlines_id);
        if !self.entries.is_empty() {
            outline.first(refs.get(RefType::OutlineEntry(0)).unwrap());
            outline.last(
                refs.get(RefType::OutlineEntry(self.entries.len() - 1))
                    .unwrap(),
            );
            outline.count(self.entries.len() as i32);
        }
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let mut item = writer.outline_item(refs.get(RefType::OutlineEntry(i)).unwrap());
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(refs.get(RefType::OutlineEntry(i - 1)).unwrap());
            }
            if i + 1 < self.entries.len() {
                item.next(refs.get(RefType::OutlineEntry(i + 1)).unwrap());
            }
            item.dest()
                .page(refs.get(RefType::Page(entry.page_index)).unwrap())
                .fit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmarks_keep_insertion_order() {
        let mut outline = Outline::default();
        outline.add_bookmark(1, "Contents");
        outline.add_bookmark(2, "Italian Game");
        assert_eq!(outline.entries.len(), 2);
        assert_eq!(outline.entries[0].title, "Contents");
        assert_eq!(outline.entries[1].page_index, 2);
    }
}
