use crate::model::ChapterRef;
use crate::refs::books::Locale;

pub fn format_chapters(chapters: &[ChapterRef], locale: Locale) -> String {
    let space = if locale.space_before_chapter() { " " } else { "" };

    let mut groups = Vec::new();
    let mut i = 0;
    while i < chapters.len() {
        let book = chapters[i].book;
        let mut run = vec![chapters[i].chapter];
        let mut j = i + 1;
        while j < chapters.len()
            && chapters[j].book == book
            && Some(chapters[j].chapter) == run[run.len() - 1].checked_add(1)
        {
            run.push(chapters[j].chapter);
            j += 1;
        }
        i = j;

        let name = locale.book_name(book);
        let rendered = if run.len() == 1 {
            format!("{name}{space}{}", run[0])
        } else if is_contiguous(&run) {
            format!("{name}{space}{}-{}", run[0], run[run.len() - 1])
        } else {
            let listed = run
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(locale.list_separator());
            format!("{name}{space}{listed}")
        };
        groups.push(rendered);
    }

    groups.join(locale.outer_separator())
}

fn is_contiguous(run: &[u32]) -> bool {
    run.windows(2)
        .all(|pair| pair[0].checked_add(1) == Some(pair[1]))
}
