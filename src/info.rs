use crate::refs::{ObjectReferences, RefType};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// The metadata block the guide stamps on its output: title, author and
/// subject, with the producing crate and creation time filled in at write
/// time.
#[derive(Debug, Clone)]
pub struct Info {
    pub title: String,
    pub author: String,
    pub subject: String,
}

impl Info {
    pub fn new<S: ToString>(title: S, author: S, subject: S) -> Info {
        Info {
            title: title.to_string(),
            author: author.to_string(),
            subject: subject.to_string(),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        info.title(TextStr(self.title.as_str()));
        info.author(TextStr(self.author.as_str()));
        info.subject(TextStr(self.subject.as_str()));
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        use chrono::prelude::*;
        let now = Local::now();
        let offset = now.offset().fix();
        let offset_hours = offset.local_minus_utc() / (60 * 60);
        let offset_minutes = ((offset.local_minus_utc() - (offset_hours * (60 * 60))) / 60).abs();
        let date = PDate::new(now.year() as u16)
            .month(now.month() as u8)
            .day(now.day() as u8)
            .hour(now.hour() as u8)
            .minute(now.minute() as u8)
            .second(now.second() as u8)
            .utc_offset_hour(offset_hours as i8)
            .utc_offset_minute(offset_minutes as u8);
        info.creation_date(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_writer::Pdf;

    #[test]
    fn metadata_lands_in_the_info_dictionary() {
        let info = Info::new("A Guide", "Someone", "Openings");
        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        info.write(&mut refs, &mut writer);
        let bytes = writer.finish();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("A Guide"));
        assert!(text.contains("Someone"));
        assert!(text.contains("Openings"));
    }
}
