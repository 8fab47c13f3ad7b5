use std::sync::LazyLock;

use clap::ValueEnum;

static ENGLISH_NAMES: [&str; 67] = [
    "", "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy", "Joshua", "Judges",
    "Ruth", "1 Samuel", "2 Samuel", "1 Kings", "2 Kings", "1 Chronicles", "2 Chronicles",
    "Ezra", "Nehemiah", "Esther", "Job", "Psalms", "Proverbs", "Ecclesiastes",
    "Song of Solomon", "Isaiah", "Jeremiah", "Lamentations", "Ezekiel", "Daniel", "Hosea",
    "Joel", "Amos", "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk", "Zephaniah",
    "Haggai", "Zechariah", "Malachi", "Matthew", "Mark", "Luke", "John",
    "Acts", "Romans", "1 Corinthians", "2 Corinthians", "Galatians", "Ephesians",
    "Philippians", "Colossians", "1 Thessalonians", "2 Thessalonians", "1 Timothy",
    "2 Timothy", "Titus", "Philemon", "Hebrews", "James", "1 Peter", "2 Peter",
    "1 John", "2 John", "3 John", "Jude", "Revelation",
];

static SIMPLIFIED_NAMES: [&str; 67] = [
    "", "创世记", "出埃及记", "利未记", "民数记", "申命记", "约书亚记", "士师记",
    "路得记", "撒母耳记上", "撒母耳记下", "列王纪上", "列王纪下", "历代志上", "历代志下",
    "以斯拉记", "尼希米记", "以斯帖记", "约伯记", "诗篇", "箴言", "传道书", "雅歌",
    "以赛亚书", "耶利米书", "耶利米哀歌", "以西结书", "但以理书", "何西阿书", "约珥书",
    "阿摩司书", "俄巴底亚书", "约拿书", "弥迦书", "那鸿书", "哈巴谷书", "西番雅书",
    "哈该书", "撒迦利亚书", "玛拉基书", "马太福音", "马可福音", "路加福音", "约翰福音",
    "使徒行传", "罗马书", "哥林多前书", "哥林多后书", "加拉太书", "以弗所书", "腓立比书",
    "歌罗西书", "帖撒罗尼迦前书", "帖撒罗尼迦后书", "提摩太前书", "提摩太后书", "提多书",
    "腓利门书", "希伯来书", "雅各书", "彼得前书", "彼得后书", "约翰一书", "约翰二书",
    "约翰三书", "犹大书", "启示录",
];

static TRADITIONAL_NAMES: [&str; 67] = [
    "", "創世記", "出埃及記", "利未記", "民數記", "申命記", "約書亞記", "士師記",
    "路得記", "撒母耳記上", "撒母耳記下", "列王紀上", "列王紀下", "歷代志上", "歷代志下",
    "以斯拉記", "尼希米記", "以斯帖記", "約伯記", "詩篇", "箴言", "傳道書", "雅歌",
    "以賽亞書", "耶利米書", "耶利米哀歌", "以西結書", "但以理書", "何西阿書", "約珥書",
    "阿摩司書", "俄巴底亞書", "約拿書", "彌迦書", "那鴻書", "哈巴谷書", "西番雅書",
    "哈該書", "撒迦利亞書", "瑪拉基書", "馬太福音", "馬可福音", "路加福音", "約翰福音",
    "使徒行傳", "羅馬書", "哥林多前書", "哥林多後書", "加拉太書", "以弗所書", "腓立比書",
    "歌羅西書", "帖撒羅尼迦前書", "帖撒羅尼迦後書", "提摩太前書", "提摩太後書", "提多書",
    "腓利門書", "希伯來書", "雅各書", "彼得前書", "彼得後書", "約翰一書", "約翰二書",
    "約翰三書", "猶大書", "啟示錄",
];

static FULL_NAME_FORMS: &[(&str, u32)] = &[
    ("1 Chronicles", 13),
    ("1 Corinthian", 46),
    ("1 Corinthians", 46),
    ("1 John", 62),
    ("1 Kings", 11),
    ("1 Peter", 60),
    ("1 Samuel", 9),
    ("1 Thessalonians", 52),
    ("1 Timothy", 54),
    ("2 Chronicles", 14),
    ("2 Corinthians", 47),
    ("2 John", 63),
    ("2 Kings", 12),
    ("2 Peter", 61),
    ("2 Samuel", 10),
    ("2 Thessalonians", 53),
    ("2 Timothy", 55),
    ("3 John", 64),
    ("Acts", 44),
    ("Amos", 30),
    ("Colossians", 51),
    ("Daniel", 27),
    ("Deuteronomy", 5),
    ("Ecclesiastes", 21),
    ("Ephesians", 49),
    ("Esther", 17),
    ("Exodus", 2),
    ("Ezekiel", 26),
    ("Ezra", 15),
    ("Galatians", 48),
    ("Genesis", 1),
    ("Habakkuk", 35),
    ("Haggai", 37),
    ("Hebrews", 58),
    ("Hosea", 28),
    ("Isaiah", 23),
    ("James", 59),
    ("Jeremiah", 24),
    ("Job", 18),
    ("Joel", 29),
    ("John", 43),
    ("Jonah", 32),
    ("Joshua", 6),
    ("Jude", 65),
    ("Judges", 7),
    ("Lamentations", 25),
    ("Leviticus", 3),
    ("Luke", 42),
    ("Malachi", 39),
    ("Mark", 41),
    ("Matthew", 40),
    ("Micah", 33),
    ("Nahum", 34),
    ("Nehemiah", 16),
    ("Numbers", 4),
    ("Obadiah", 31),
    ("Philippians", 50),
    ("Philemon", 57),
    ("Proverbs", 20),
    ("Psalm", 19),
    ("Psalms", 19),
    ("Revelation", 66),
    ("Romans", 45),
    ("Ruth", 8),
    ("Song of Solomon", 22),
    ("Song of Songs", 22),
    ("Titus", 56),
    ("Zechariah", 38),
    ("Zephaniah", 36),
];

static SHORT_NAME_FORMS: &[(&str, u32)] = &[
    ("1 Sam", 9),
    ("2 Sam", 10),
    ("1 Kin", 11),
    ("2 Kin", 12),
    ("1 Chr", 13),
    ("2 Chr", 14),
    ("1 Cor", 46),
    ("2 Cor", 47),
    ("1 Thess", 52),
    ("2 Thess", 53),
    ("1 Tim", 54),
    ("2 Tim", 55),
    ("1 Pet", 60),
    ("2 Pet", 61),
    ("Song of Sol", 22),
    ("1Chr", 13),
    ("1Cor", 46),
    ("1Jn", 62),
    ("1Kgs", 11),
    ("1Pet", 60),
    ("1Sam", 9),
    ("1Thess", 52),
    ("1Tim", 54),
    ("2Chr", 14),
    ("2Cor", 47),
    ("2Jn", 63),
    ("2Kgs", 12),
    ("2Pet", 61),
    ("2Sam", 10),
    ("2Thess", 53),
    ("2Tim", 55),
    ("3Jn", 64),
    ("Col", 51),
    ("Dan", 27),
    ("Deut", 5),
    ("Eccl", 21),
    ("Eph", 49),
    ("Esth", 17),
    ("Exod", 2),
    ("Ezek", 26),
    ("Gal", 48),
    ("Gen", 1),
    ("Hab", 35),
    ("Hag", 37),
    ("Heb", 58),
    ("Hos", 28),
    ("Isa", 23),
    ("Jas", 59),
    ("Jer", 24),
    ("Josh", 6),
    ("Judg", 7),
    ("Lam", 25),
    ("Lev", 3),
    ("Mal", 39),
    ("Matt", 40),
    ("Mic", 33),
    ("Nah", 34),
    ("Neh", 16),
    ("Num", 4),
    ("Obad", 31),
    ("Phil", 50),
    ("Phlm", 57),
    ("Prov", 20),
    ("Ps", 19),
    ("Rev", 66),
    ("Rom", 45),
    ("Song", 22),
    ("Zech", 38),
    ("Zeph", 36),
];

static NAME_INDEX: LazyLock<Vec<(&'static str, u32)>> = LazyLock::new(|| {
    let mut index: Vec<(&'static str, u32)> = FULL_NAME_FORMS
        .iter()
        .chain(SHORT_NAME_FORMS)
        .copied()
        .collect();
    index.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    index.dedup();
    index
});

pub fn find_book(text: &str) -> (Option<u32>, &str) {
    let text = text.trim();
    for (name, book) in NAME_INDEX.iter() {
        let matches = text
            .get(..name.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(name));
        if matches {
            return (Some(*book), text[name.len()..].trim());
        }
    }
    (None, text)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Locale {
    English,
    SimplifiedChinese,
    TraditionalChinese,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::SimplifiedChinese => "simplified-chinese",
            Self::TraditionalChinese => "traditional-chinese",
        }
    }

    pub fn book_name(self, book: u32) -> String {
        let names = match self {
            Self::English => &ENGLISH_NAMES,
            Self::SimplifiedChinese => &SIMPLIFIED_NAMES,
            Self::TraditionalChinese => &TRADITIONAL_NAMES,
        };

        names
            .get(book as usize)
            .filter(|name| !name.is_empty())
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| book.to_string())
    }

    pub fn outer_separator(self) -> &'static str {
        match self {
            Self::English => "; ",
            Self::SimplifiedChinese | Self::TraditionalChinese => "；",
        }
    }

    pub fn list_separator(self) -> &'static str {
        match self {
            Self::English => ", ",
            Self::SimplifiedChinese | Self::TraditionalChinese => "、",
        }
    }

    pub fn space_before_chapter(self) -> bool {
        matches!(self, Self::English)
    }
}
